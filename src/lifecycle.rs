multiversx_sc::imports!();

use crate::errors::*;
use crate::resolver;
use crate::title;
use crate::types::{Contest, ContestDetails, Vote};

/// Upper bound on a contest's candidate set
pub const MAX_CANDIDATES: usize = 100;

#[multiversx_sc::module]
pub trait LifecycleModule:
    crate::storage::StorageModule
    + crate::access::AccessControlModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: createContest
    // Owner only. Opens a new contest that closes no earlier
    // than `duration_seconds` from now.
    // ========================================================

    #[endpoint(createContest)]
    fn create_contest(
        &self,
        duration_seconds: u64,
        title: ManagedBuffer,
        candidates: ManagedVec<ManagedAddress>,
    ) -> u64 {
        self.require_owner();

        let title = self.normalize_title(&title);
        self.require_valid_candidates(&candidates);

        let now = self.blockchain().get_block_timestamp();
        let deadline = match now.checked_add(duration_seconds) {
            Some(deadline) => deadline,
            None => sc_panic!(ERR_INVALID_DURATION),
        };

        let contest_id = self.allocate_contest_id();
        let contest = Contest::new(contest_id, title, deadline, candidates);
        self.insert_contest(&contest);

        let caller = self.blockchain().get_caller();
        self.contest_created_event(contest_id, &caller, deadline, &contest.title);

        contest_id
    }

    // ========================================================
    // ENDPOINT: castVote
    // One vote per address per contest, paid with exactly the
    // configured stake. The stake stays in the contract until
    // the reward is withdrawn.
    // ========================================================

    #[endpoint(castVote)]
    #[payable("EGLD")]
    fn cast_vote(&self, contest_id: u64, candidate: ManagedAddress) {
        let caller = self.blockchain().get_caller();
        let stake = self.call_value().egld_value().clone_value();

        let mut contest = self.load_contest(contest_id);
        require!(!contest.finished, ERR_ALREADY_FINISHED);
        require!(contest.is_candidate(&candidate), ERR_CANDIDATE_NOT_FOUND);
        require!(stake == self.vote_stake().get(), ERR_INCORRECT_STAKE);
        require!(
            !self.has_voted(contest_id, &caller).get(),
            ERR_VOTE_ALREADY_CAST
        );

        let vote = Vote {
            voter: caller.clone(),
            candidate: candidate.clone(),
        };
        self.record_vote(contest_id, &vote);
        contest.vote_count += 1;
        contest.staked_total += &stake;
        self.save_contest(&contest);

        self.vote_cast_event(contest_id, &caller, &candidate, &stake);
    }

    // ========================================================
    // ENDPOINT: closeContest
    // Anyone can close once the deadline is reached. Nothing
    // closes a contest automatically.
    // ========================================================

    #[endpoint(closeContest)]
    fn close_contest(&self, contest_id: u64) {
        let mut contest = self.load_contest(contest_id);
        require!(!contest.finished, ERR_ALREADY_FINISHED);

        let now = self.blockchain().get_block_timestamp();
        require!(now >= contest.deadline, ERR_TOO_EARLY);

        let mut randomness: RandomnessSource<Self::Api> = RandomnessSource::new();
        let winner = match resolver::resolve_winner(
            &contest.candidates,
            |candidate| self.candidate_votes(contest_id, candidate).get(),
            &mut randomness,
        ) {
            Some(winner) => winner,
            None => sc_panic!(ERR_NO_VOTES_CAST),
        };

        contest.winner = Some(winner.clone());
        contest.finished = true;
        self.save_contest(&contest);

        self.contest_closed_event(contest_id, &winner, &contest.staked_total);
    }

    // ========================================================
    // INTERNAL: input validation
    // ========================================================

    fn normalize_title(&self, title: &ManagedBuffer) -> ManagedBuffer {
        let trimmed = title::trim_whitespace(title);
        require!(!trimmed.is_empty(), ERR_EMPTY_TITLE);
        trimmed
    }

    fn require_valid_candidates(&self, candidates: &ManagedVec<ManagedAddress>) {
        require!(!candidates.is_empty(), ERR_EMPTY_CANDIDATES);
        require!(candidates.len() <= MAX_CANDIDATES, ERR_TOO_MANY_CANDIDATES);

        for (index, candidate) in candidates.iter().enumerate() {
            for earlier in candidates.iter().take(index) {
                require!(*earlier != *candidate, ERR_DUPLICATE_CANDIDATE);
            }
        }
    }

    // ========================================================
    // VIEWS
    // ========================================================

    /// The contest record with its votes attached.
    #[view(getContest)]
    fn get_contest(&self, contest_id: u64) -> ContestDetails<Self::Api> {
        self.load_contest_details(contest_id)
    }

    /// Contest records in creation order, without their votes.
    #[view(listContests)]
    fn list_contests(&self) -> MultiValueEncoded<Contest<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        for id in 0..self.contest_count().get() {
            result.push(self.contests(id).get());
        }
        result
    }

    /// Page of contests with ids in `from..from + count`.
    #[view(getContests)]
    fn get_contests(&self, from: u64, count: u64) -> MultiValueEncoded<Contest<Self::Api>> {
        let mut result = MultiValueEncoded::new();
        let total = self.contest_count().get();
        let end = core::cmp::min(from.saturating_add(count), total);
        for id in from..end {
            result.push(self.contests(id).get());
        }
        result
    }

    #[view(getContestCount)]
    fn get_contest_count(&self) -> u64 {
        self.contest_count().get()
    }

    #[view(getVotes)]
    fn get_votes(&self, contest_id: u64) -> MultiValueEncoded<Vote<Self::Api>> {
        require!(self.contest_exists(contest_id), ERR_CONTEST_NOT_FOUND);
        MultiValueEncoded::from(self.load_votes(contest_id))
    }

    #[view(hasVoted)]
    fn has_address_voted(&self, contest_id: u64, voter: ManagedAddress) -> bool {
        self.has_voted(contest_id, &voter).get()
    }

    /// Vote count per candidate, in candidate order.
    #[view(getTally)]
    fn get_tally(&self, contest_id: u64) -> MultiValueEncoded<MultiValue2<ManagedAddress, u64>> {
        let contest = self.load_contest(contest_id);
        let mut result = MultiValueEncoded::new();
        for candidate in contest.candidates.iter() {
            let count = self.candidate_votes(contest_id, &candidate).get();
            result.push(((*candidate).clone(), count).into());
        }
        result
    }
}
