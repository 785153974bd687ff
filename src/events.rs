multiversx_sc::imports!();

#[multiversx_sc::module]
pub trait EventsModule {
    #[event("contestCreated")]
    fn contest_created_event(
        &self,
        #[indexed] contest_id: u64,
        #[indexed] creator: &ManagedAddress,
        #[indexed] deadline: u64,
        title: &ManagedBuffer,
    );

    #[event("voteCast")]
    fn vote_cast_event(
        &self,
        #[indexed] contest_id: u64,
        #[indexed] voter: &ManagedAddress,
        #[indexed] candidate: &ManagedAddress,
        stake: &BigUint,
    );

    #[event("contestClosed")]
    fn contest_closed_event(
        &self,
        #[indexed] contest_id: u64,
        #[indexed] winner: &ManagedAddress,
        staked_total: &BigUint,
    );

    #[event("rewardWithdrawn")]
    fn reward_withdrawn_event(
        &self,
        #[indexed] contest_id: u64,
        #[indexed] winner: &ManagedAddress,
        #[indexed] payout: &BigUint,
        commission: &BigUint,
    );

    #[event("commissionWithdrawn")]
    fn commission_withdrawn_event(&self, #[indexed] owner: &ManagedAddress, amount: &BigUint);
}
