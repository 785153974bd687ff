use multiversx_sc_scenario::imports::*;

use smart_voting::title::trim_whitespace;

fn trimmed(text: &str) -> ManagedBuffer<StaticApi> {
    trim_whitespace(&ManagedBuffer::<StaticApi>::from(text))
}

fn buffer(text: &str) -> ManagedBuffer<StaticApi> {
    ManagedBuffer::from(text)
}

#[test]
fn ascii_whitespace_is_trimmed_at_both_ends() {
    assert_eq!(trimmed("  test 1 "), buffer("test 1"));
    assert_eq!(trimmed("\t\n\x0B\x0C\r title \r\n"), buffer("title"));
    assert_eq!(trimmed("plain"), buffer("plain"));
}

#[test]
fn interior_whitespace_is_kept() {
    assert_eq!(trimmed(" a \u{3000} b "), buffer("a \u{3000} b"));
}

#[test]
fn unicode_whitespace_is_trimmed() {
    assert_eq!(trimmed("\u{3000}Wahl\u{3000}"), buffer("Wahl"));
    assert_eq!(trimmed("\u{00A0}\u{1680}x\u{2000}\u{200A}"), buffer("x"));
    assert_eq!(trimmed("\u{2028}\u{2029}x\u{202F}\u{205F}"), buffer("x"));
    assert_eq!(trimmed("\u{FEFF}x\u{FEFF}"), buffer("x"));
}

#[test]
fn non_whitespace_multibyte_characters_survive() {
    // U+200B ZERO WIDTH SPACE and U+2030 share lead bytes with trimmed
    // characters but are not whitespace.
    assert_eq!(trimmed("\u{200B}x\u{2030}"), buffer("\u{200B}x\u{2030}"));
    assert_eq!(trimmed(" \u{00E9}t\u{00E9} "), buffer("\u{00E9}t\u{00E9}"));
    assert_eq!(trimmed("\u{3001}"), buffer("\u{3001}"));
}

#[test]
fn all_whitespace_trims_to_empty() {
    assert!(trimmed("").is_empty());
    assert!(trimmed("   ").is_empty());
    assert!(trimmed("\u{3000}\u{00A0}\t\u{FEFF}").is_empty());
}

#[test]
fn length_does_not_matter() {
    let long = "z".repeat(10_000);
    assert_eq!(trimmed(&long), buffer(&long));

    let padded = format!("{}{}{}", "\u{3000}".repeat(200), long, " ".repeat(500));
    assert_eq!(trimmed(&padded), buffer(&long));
}
