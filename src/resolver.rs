//! Winner resolution over a contest's votes.
//!
//! Plain functions over managed types, so the same code runs inside the
//! contract and in off-chain replay or tests. Randomness only enters through
//! a [`TieBreaker`], and only when more than one candidate shares the top
//! count.

use multiversx_sc::{
    api::{ManagedTypeApi, VMApi},
    types::{ManagedAddress, ManagedVec, RandomnessSource},
};

use crate::types::Vote;

/// Source of the uniform pick among tied candidates.
pub trait TieBreaker {
    /// Returns an index in `0..len`. Called only with `len >= 2`.
    fn pick(&mut self, len: usize) -> usize;
}

/// On-chain entropy: seeded by the VM from the block random seed and the
/// transaction, so nobody knows the outcome before the close transaction.
impl<A: VMApi> TieBreaker for RandomnessSource<A> {
    fn pick(&mut self, len: usize) -> usize {
        self.next_usize_in_range(0, len)
    }
}

/// Deterministic splitmix64 stream. Lets a caller replay a close given the
/// seed it was made with.
#[derive(Clone, Debug)]
pub struct SeededTieBreaker {
    state: u64,
}

impl SeededTieBreaker {
    pub fn new(seed: u64) -> Self {
        SeededTieBreaker { state: seed }
    }

    fn next_u64(&mut self) -> u64 {
        self.state = self.state.wrapping_add(0x9E37_79B9_7F4A_7C15);
        let mut z = self.state;
        z = (z ^ (z >> 30)).wrapping_mul(0xBF58_476D_1CE4_E5B9);
        z = (z ^ (z >> 27)).wrapping_mul(0x94D0_49BB_1331_11EB);
        z ^ (z >> 31)
    }
}

impl TieBreaker for SeededTieBreaker {
    fn pick(&mut self, len: usize) -> usize {
        (self.next_u64() % len as u64) as usize
    }
}

/// Tally of one candidate over a vote list. Used to replay a close from
/// the recorded votes; the contract itself keeps running counters.
pub fn count_votes<M: ManagedTypeApi>(
    votes: &ManagedVec<M, Vote<M>>,
    candidate: &ManagedAddress<M>,
) -> u64 {
    let mut count = 0u64;
    for vote in votes.iter() {
        if vote.candidate == *candidate {
            count += 1;
        }
    }
    count
}

/// Candidates sharing the highest vote count, in candidate order.
/// Empty when nobody voted. `count_of` is asked once per candidate.
pub fn tied_set<M, F>(
    candidates: &ManagedVec<M, ManagedAddress<M>>,
    mut count_of: F,
) -> ManagedVec<M, ManagedAddress<M>>
where
    M: ManagedTypeApi,
    F: FnMut(&ManagedAddress<M>) -> u64,
{
    let mut max_count = 0u64;
    let mut tied = ManagedVec::new();
    for candidate in candidates.iter() {
        let count = count_of(&*candidate);
        if count == 0 || count < max_count {
            continue;
        }
        if count > max_count {
            max_count = count;
            tied = ManagedVec::new();
        }
        tied.push((*candidate).clone());
    }
    tied
}

/// Majority winner, or a uniform pick from the tied set. `None` if no votes
/// were cast.
pub fn resolve_winner<M, F, T>(
    candidates: &ManagedVec<M, ManagedAddress<M>>,
    count_of: F,
    tie_breaker: &mut T,
) -> Option<ManagedAddress<M>>
where
    M: ManagedTypeApi,
    F: FnMut(&ManagedAddress<M>) -> u64,
    T: TieBreaker,
{
    let tied = tied_set(candidates, count_of);
    let index = match tied.len() {
        0 => return None,
        1 => 0,
        len => tie_breaker.pick(len),
    };
    let winner = tied.get(index);
    Some((*winner).clone())
}
