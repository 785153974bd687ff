//! Title normalization on managed buffers of any length.
//!
//! Trims the same whitespace set as ECMAScript `String.prototype.trim`:
//! ASCII tab, line feed, vertical tab, form feed, carriage return and space,
//! plus the UTF-8 encodings of U+00A0, U+1680, U+2000..=U+200A, U+2028,
//! U+2029, U+202F, U+205F, U+3000 and U+FEFF. Only the whitespace runs at
//! each end are loaded, a character at a time.

use multiversx_sc::{api::ManagedTypeApi, types::ManagedBuffer};

/// Longest UTF-8 encoding in the whitespace set
const MAX_WHITESPACE_WIDTH: usize = 3;

/// Byte width of the whitespace character `bytes` starts with, or 0.
fn leading_whitespace_width(bytes: &[u8]) -> usize {
    match bytes {
        [b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' ', ..] => 1,
        [0xC2, 0xA0, ..] => 2,
        [0xE1, 0x9A, 0x80, ..]
        | [0xE2, 0x80, 0x80..=0x8A | 0xA8 | 0xA9 | 0xAF, ..]
        | [0xE2, 0x81, 0x9F, ..]
        | [0xE3, 0x80, 0x80, ..]
        | [0xEF, 0xBB, 0xBF, ..] => 3,
        _ => 0,
    }
}

/// Byte width of the whitespace character `bytes` ends with, or 0.
///
/// Lead bytes never double as continuation bytes, so matching a suffix
/// cannot split a longer character.
fn trailing_whitespace_width(bytes: &[u8]) -> usize {
    match bytes {
        [.., b'\t' | b'\n' | 0x0B | 0x0C | b'\r' | b' '] => 1,
        [.., 0xC2, 0xA0] => 2,
        [.., 0xE1, 0x9A, 0x80]
        | [.., 0xE2, 0x80, 0x80..=0x8A | 0xA8 | 0xA9 | 0xAF]
        | [.., 0xE2, 0x81, 0x9F]
        | [.., 0xE3, 0x80, 0x80]
        | [.., 0xEF, 0xBB, 0xBF] => 3,
        _ => 0,
    }
}

fn load_window<'a, M: ManagedTypeApi>(
    text: &ManagedBuffer<M>,
    start: usize,
    len: usize,
    buffer: &'a mut [u8; MAX_WHITESPACE_WIDTH],
) -> &'a [u8] {
    match text.copy_slice(start, len) {
        Some(window) => window.load_to_byte_array(buffer),
        None => &[],
    }
}

/// `text` without leading and trailing whitespace.
pub fn trim_whitespace<M: ManagedTypeApi>(text: &ManagedBuffer<M>) -> ManagedBuffer<M> {
    let mut buffer = [0u8; MAX_WHITESPACE_WIDTH];
    let mut start = 0;
    let mut end = text.len();

    while start < end {
        let len = core::cmp::min(MAX_WHITESPACE_WIDTH, end - start);
        let width = leading_whitespace_width(load_window(text, start, len, &mut buffer));
        if width == 0 {
            break;
        }
        start += width;
    }

    while end > start {
        let len = core::cmp::min(MAX_WHITESPACE_WIDTH, end - start);
        let width = trailing_whitespace_width(load_window(text, end - len, len, &mut buffer));
        if width == 0 {
            break;
        }
        end -= width;
    }

    text.copy_slice(start, end - start).unwrap_or_else(ManagedBuffer::new)
}
