multiversx_sc::imports!();
multiversx_sc::derive_imports!();

// ============================================================
// Contest Status — lifecycle states
// ============================================================

#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Copy, PartialEq, Debug)]
pub enum ContestStatus {
    /// Accepting votes. Stays open past the deadline until someone closes it.
    Open,
    /// Winner resolved. Terminal state.
    Closed,
}

// ============================================================
// Vote — one (voter, candidate) pair
// ============================================================

#[type_abi]
#[derive(
    TopEncode, TopDecode, NestedEncode, NestedDecode, ManagedVecItem, Clone, PartialEq, Debug,
)]
pub struct Vote<M: ManagedTypeApi> {
    pub voter: ManagedAddress<M>,
    pub candidate: ManagedAddress<M>,
}

// ============================================================
// Contest — one time-bounded voting round and its stake pool
// ============================================================

/// Stored contest record. Votes live in their own mapper and are attached
/// on read through [`ContestDetails`].
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct Contest<M: ManagedTypeApi> {
    pub id: u64,
    pub title: ManagedBuffer<M>,
    /// Block timestamp from which the contest may be closed
    pub deadline: u64,
    pub candidates: ManagedVec<M, ManagedAddress<M>>,
    pub vote_count: u64,
    pub staked_total: BigUint<M>,
    pub finished: bool,
    /// Set exactly when `finished` is
    pub winner: Option<ManagedAddress<M>>,
    pub reward_paid: bool,
}

impl<M: ManagedTypeApi> Contest<M> {
    pub fn new(
        id: u64,
        title: ManagedBuffer<M>,
        deadline: u64,
        candidates: ManagedVec<M, ManagedAddress<M>>,
    ) -> Self {
        Contest {
            id,
            title,
            deadline,
            candidates,
            vote_count: 0,
            staked_total: BigUint::zero(),
            finished: false,
            winner: None,
            reward_paid: false,
        }
    }

    pub fn status(&self) -> ContestStatus {
        if self.finished {
            ContestStatus::Closed
        } else {
            ContestStatus::Open
        }
    }

    pub fn is_candidate(&self, address: &ManagedAddress<M>) -> bool {
        self.candidates.contains(address)
    }

    pub fn is_winner(&self, address: &ManagedAddress<M>) -> bool {
        match &self.winner {
            Some(winner) => winner == address,
            None => false,
        }
    }
}

/// A contest together with its votes, in casting order.
#[type_abi]
#[derive(TopEncode, TopDecode, NestedEncode, NestedDecode, Clone, Debug)]
pub struct ContestDetails<M: ManagedTypeApi> {
    pub contest: Contest<M>,
    pub votes: ManagedVec<M, Vote<M>>,
}
