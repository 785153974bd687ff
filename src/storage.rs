multiversx_sc::imports!();

use crate::errors::ERR_CONTEST_NOT_FOUND;
use crate::types::{Contest, ContestDetails, Vote};

/// Persistent ledger state: configuration, contests and accrued commission.
///
/// All mutation of contest records goes through `insert_contest`,
/// `save_contest` and `record_vote`; nothing in here moves funds.
#[multiversx_sc::module]
pub trait StorageModule {
    /// Hands out dense, strictly increasing ids starting at 0.
    fn allocate_contest_id(&self) -> u64 {
        let id = self.contest_count().get();
        self.contest_count().set(id + 1);
        id
    }

    fn contest_exists(&self, id: u64) -> bool {
        !self.contests(id).is_empty()
    }

    fn load_contest(&self, id: u64) -> Contest<Self::Api> {
        require!(self.contest_exists(id), ERR_CONTEST_NOT_FOUND);
        self.contests(id).get()
    }

    fn insert_contest(&self, contest: &Contest<Self::Api>) {
        self.contests(contest.id).set(contest);
    }

    /// Writes back a record previously obtained from `load_contest`.
    fn save_contest(&self, contest: &Contest<Self::Api>) {
        require!(self.contest_exists(contest.id), ERR_CONTEST_NOT_FOUND);
        self.contests(contest.id).set(contest);
    }

    /// Appends a vote and bumps its candidate's counter. The contest record
    /// itself is saved by the caller.
    fn record_vote(&self, contest_id: u64, vote: &Vote<Self::Api>) {
        self.votes(contest_id).push(vote);
        self.candidate_votes(contest_id, &vote.candidate)
            .update(|count| *count += 1);
        self.has_voted(contest_id, &vote.voter).set(true);
    }

    fn load_votes(&self, contest_id: u64) -> ManagedVec<Vote<Self::Api>> {
        let mut votes = ManagedVec::new();
        for vote in self.votes(contest_id).iter() {
            votes.push(vote);
        }
        votes
    }

    fn load_contest_details(&self, id: u64) -> ContestDetails<Self::Api> {
        let contest = self.load_contest(id);
        let votes = self.load_votes(id);
        ContestDetails { contest, votes }
    }

    // ── Configuration ──

    #[storage_mapper("owner")]
    fn owner(&self) -> SingleValueMapper<ManagedAddress>;

    #[storage_mapper("voteStake")]
    fn vote_stake(&self) -> SingleValueMapper<BigUint>;

    #[storage_mapper("commissionPercent")]
    fn commission_percent(&self) -> SingleValueMapper<u64>;

    // ── Contests ──

    #[storage_mapper("contestCount")]
    fn contest_count(&self) -> SingleValueMapper<u64>;

    #[storage_mapper("contests")]
    fn contests(&self, id: u64) -> SingleValueMapper<Contest<Self::Api>>;

    /// Votes in casting order
    #[storage_mapper("votes")]
    fn votes(&self, contest_id: u64) -> VecMapper<Vote<Self::Api>>;

    #[storage_mapper("candidateVotes")]
    fn candidate_votes(
        &self,
        contest_id: u64,
        candidate: &ManagedAddress,
    ) -> SingleValueMapper<u64>;

    #[storage_mapper("hasVoted")]
    fn has_voted(&self, contest_id: u64, voter: &ManagedAddress) -> SingleValueMapper<bool>;

    // ── Platform commission ──

    #[storage_mapper("commissionBalance")]
    fn commission_balance(&self) -> SingleValueMapper<BigUint>;
}
