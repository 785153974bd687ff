#![no_std]

multiversx_sc::imports!();

pub mod access;
pub mod errors;
pub mod events;
pub mod lifecycle;
pub mod payout;
pub mod resolver;
pub mod smart_voting_proxy;
pub mod storage;
pub mod title;
pub mod types;

use errors::{ERR_INVALID_COMMISSION, ERR_INVALID_STAKE};

/// Highest accepted commission rate
const MAX_COMMISSION_PERCENT: u64 = 100;

// ============================================================
// Contract
// ============================================================

/// Stake-funded voting contests. Voters pay a fixed stake per vote, the
/// majority candidate takes the pool minus the platform commission, and the
/// owner sweeps the accrued commission.
#[multiversx_sc::contract]
pub trait SmartVoting:
    storage::StorageModule
    + access::AccessControlModule
    + events::EventsModule
    + lifecycle::LifecycleModule
    + payout::PayoutModule
{
    // ========================================================
    // Init / Upgrade
    // ========================================================

    #[init]
    fn init(&self, vote_stake: BigUint, commission_percent: u64) {
        require!(vote_stake > 0u64, ERR_INVALID_STAKE);
        require!(
            commission_percent <= MAX_COMMISSION_PERCENT,
            ERR_INVALID_COMMISSION
        );

        let deployer = self.blockchain().get_caller();
        self.owner().set(&deployer);
        self.vote_stake().set(&vote_stake);
        self.commission_percent().set(commission_percent);
        self.contest_count().set(0u64);
        self.commission_balance().set(BigUint::zero());
    }

    #[upgrade]
    fn upgrade(&self) {}

    #[view(getContractConfig)]
    fn get_contract_config(&self) -> MultiValue2<BigUint, u64> {
        let vote_stake = self.vote_stake().get();
        let commission_percent = self.commission_percent().get();
        (vote_stake, commission_percent).into()
    }
}
