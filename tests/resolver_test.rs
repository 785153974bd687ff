use multiversx_sc_scenario::imports::*;

use smart_voting::resolver::{count_votes, resolve_winner, tied_set, SeededTieBreaker, TieBreaker};
use smart_voting::types::Vote;

/// Always answers with a fixed index.
struct PickIndex(usize);

impl TieBreaker for PickIndex {
    fn pick(&mut self, len: usize) -> usize {
        assert!(len >= 2, "asked to break a tie of {len}");
        self.0
    }
}

struct NoTieExpected;

impl TieBreaker for NoTieExpected {
    fn pick(&mut self, len: usize) -> usize {
        panic!("tie breaker consulted for {len} candidates without a tie");
    }
}

fn address(tag: u8) -> ManagedAddress<StaticApi> {
    ManagedAddress::new_from_bytes(&[tag; 32])
}

fn candidates(tags: &[u8]) -> ManagedVec<StaticApi, ManagedAddress<StaticApi>> {
    let mut result = ManagedVec::new();
    for tag in tags {
        result.push(address(*tag));
    }
    result
}

/// `(voter, candidate)` tags
fn votes(pairs: &[(u8, u8)]) -> ManagedVec<StaticApi, Vote<StaticApi>> {
    let mut result = ManagedVec::new();
    for (voter, candidate) in pairs {
        result.push(Vote {
            voter: address(*voter),
            candidate: address(*candidate),
        });
    }
    result
}

/// Counts replayed from a vote list.
fn tally(
    cast: &ManagedVec<StaticApi, Vote<StaticApi>>,
) -> impl FnMut(&ManagedAddress<StaticApi>) -> u64 + '_ {
    move |candidate| count_votes(cast, candidate)
}

fn tied_tags(tied: &ManagedVec<StaticApi, ManagedAddress<StaticApi>>) -> Vec<u8> {
    let mut tags = Vec::new();
    for candidate in tied.iter() {
        tags.push(candidate.to_byte_array()[0]);
    }
    tags
}

#[test]
fn counts_votes_per_candidate() {
    let cast = votes(&[(10, 1), (11, 2), (12, 2), (13, 3)]);

    assert_eq!(count_votes(&cast, &address(1)), 1);
    assert_eq!(count_votes(&cast, &address(2)), 2);
    assert_eq!(count_votes(&cast, &address(3)), 1);
    assert_eq!(count_votes(&cast, &address(4)), 0);
}

#[test]
fn clear_majority_wins_without_tie_break() {
    let pool = candidates(&[1, 2, 3]);
    let cast = votes(&[(10, 1), (11, 2), (12, 2), (13, 3)]);

    let winner = resolve_winner(&pool, tally(&cast), &mut NoTieExpected);
    assert_eq!(winner, Some(address(2)));
}

#[test]
fn no_votes_resolves_to_nobody() {
    let pool = candidates(&[1, 2]);
    let cast = votes(&[]);

    assert!(tied_set(&pool, tally(&cast)).is_empty());
    assert_eq!(resolve_winner(&pool, tally(&cast), &mut NoTieExpected), None);
}

#[test]
fn tied_set_keeps_candidate_order_and_drops_lower_counts() {
    let pool = candidates(&[3, 1, 2]);
    let cast = votes(&[(10, 1), (11, 3), (12, 3), (13, 1), (14, 2)]);

    assert_eq!(tied_tags(&tied_set(&pool, tally(&cast))), vec![3, 1]);
}

#[test]
fn tie_break_picks_from_tied_set_by_index() {
    let pool = candidates(&[1, 2, 3]);
    let cast = votes(&[(10, 1), (11, 2)]);

    assert_eq!(resolve_winner(&pool, tally(&cast), &mut PickIndex(0)), Some(address(1)));
    assert_eq!(resolve_winner(&pool, tally(&cast), &mut PickIndex(1)), Some(address(2)));
}

#[test]
fn seeded_tie_break_is_reproducible() {
    let pool = candidates(&[1, 2]);
    let cast = votes(&[(10, 1), (11, 2)]);

    for seed in 0..32u64 {
        let first = resolve_winner(&pool, tally(&cast), &mut SeededTieBreaker::new(seed));
        let replay = resolve_winner(&pool, tally(&cast), &mut SeededTieBreaker::new(seed));
        assert_eq!(first, replay);

        let expected = SeededTieBreaker::new(seed).pick(2);
        assert_eq!(first, Some(address(expected as u8 + 1)));
    }
}

#[test]
fn seeded_tie_break_reaches_every_tied_candidate() {
    let pool = candidates(&[1, 2]);
    let cast = votes(&[(10, 1), (11, 2)]);

    let mut seen = Vec::new();
    for seed in 0..64u64 {
        let winner = resolve_winner(&pool, tally(&cast), &mut SeededTieBreaker::new(seed));
        if !seen.contains(&winner) {
            seen.push(winner);
        }
    }
    assert_eq!(seen.len(), 2);
}

#[test]
fn seeded_pick_stays_in_range() {
    let mut tie_breaker = SeededTieBreaker::new(0xC0FFEE);
    for len in 2..20usize {
        for _ in 0..50 {
            assert!(tie_breaker.pick(len) < len);
        }
    }
}

#[test]
fn counter_is_read_once_per_candidate() {
    let pool = candidates(&[1, 2, 3, 4]);
    let counters = [0u64, 5, 2, 5];
    let mut asked = Vec::new();

    let tied = tied_set(&pool, |candidate| {
        let tag = candidate.to_byte_array()[0];
        asked.push(tag);
        counters[tag as usize - 1]
    });

    assert_eq!(asked, vec![1, 2, 3, 4]);
    assert_eq!(tied_tags(&tied), vec![2, 4]);
}
