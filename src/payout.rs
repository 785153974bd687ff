multiversx_sc::imports!();

use crate::errors::*;

const PERCENT_DENOMINATOR: u64 = 100;

/// Withdrawals stage their bookkeeping first and transfer last. A transfer
/// that fails aborts the transaction, and the VM drops the staged writes
/// with it.
#[multiversx_sc::module]
pub trait PayoutModule:
    crate::storage::StorageModule
    + crate::access::AccessControlModule
    + crate::events::EventsModule
{
    // ========================================================
    // ENDPOINT: withdrawReward
    // The winner of a closed contest collects the pool minus
    // the platform commission, once.
    // ========================================================

    #[endpoint(withdrawReward)]
    fn withdraw_reward(&self, contest_id: u64) {
        let caller = self.blockchain().get_caller();

        let mut contest = self.load_contest(contest_id);
        require!(contest.finished, ERR_NOT_FINISHED);
        require!(!contest.reward_paid, ERR_REWARD_ALREADY_PAID);
        require!(contest.is_winner(&caller), ERR_NOT_WINNER);

        let (payout, commission) = self.split_reward(&contest.staked_total);

        contest.reward_paid = true;
        self.save_contest(&contest);
        self.commission_balance().update(|balance| *balance += &commission);

        if payout > 0u64 {
            self.send().direct_egld(&caller, &payout);
        }
        self.reward_withdrawn_event(contest_id, &caller, &payout, &commission);
    }

    // ========================================================
    // ENDPOINT: withdrawCommission
    // Owner only. Sweeps the whole accrued commission. An
    // empty balance sweeps nothing and still succeeds.
    // ========================================================

    #[endpoint(withdrawCommission)]
    fn withdraw_commission(&self) {
        self.require_owner();

        let amount = self.commission_balance().get();
        self.commission_balance().set(BigUint::zero());

        let owner = self.blockchain().get_caller();
        if amount > 0u64 {
            self.send().direct_egld(&owner, &amount);
        }
        self.commission_withdrawn_event(&owner, &amount);
    }

    #[view(getCommission)]
    fn get_commission(&self) -> BigUint {
        self.require_owner();
        self.commission_balance().get()
    }

    /// Returns `(payout, commission)` for a pool; the two always sum to it.
    fn split_reward(&self, staked_total: &BigUint) -> (BigUint, BigUint) {
        let commission = staked_total * self.commission_percent().get() / PERCENT_DENOMINATOR;
        let payout = staked_total - &commission;
        (payout, commission)
    }
}
