#![allow(dead_code)]

use multiversx_sc::proxy_imports::*;

use crate::types::{Contest, ContestDetails, Vote};

pub struct SmartVotingProxy;

impl<Env, From, To, Gas> TxProxyTrait<Env, From, To, Gas> for SmartVotingProxy
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    type TxProxyMethods = SmartVotingProxyMethods<Env, From, To, Gas>;

    fn proxy_methods(self, tx: Tx<Env, From, To, (), Gas, (), ()>) -> Self::TxProxyMethods {
        SmartVotingProxyMethods { wrapped_tx: tx }
    }
}

pub struct SmartVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    wrapped_tx: Tx<Env, From, To, (), Gas, (), ()>,
}

impl<Env, From, Gas> SmartVotingProxyMethods<Env, From, (), Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    Gas: TxGas<Env>,
{
    pub fn init<Arg0: ProxyArg<BigUint<Env::Api>>, Arg1: ProxyArg<u64>>(
        self,
        vote_stake: Arg0,
        commission_percent: Arg1,
    ) -> TxTypedDeploy<Env, From, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_deploy()
            .argument(&vote_stake)
            .argument(&commission_percent)
            .original_result()
    }
}

impl<Env, From, To, Gas> SmartVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn upgrade(self) -> TxTypedUpgrade<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_upgrade()
            .original_result()
    }
}

impl<Env, From, To, Gas> SmartVotingProxyMethods<Env, From, To, Gas>
where
    Env: TxEnv,
    Env::Api: VMApi,
    From: TxFrom<Env>,
    To: TxTo<Env>,
    Gas: TxGas<Env>,
{
    pub fn get_contract_config(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValue2<BigUint<Env::Api>, u64>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContractConfig")
            .original_result()
    }

    pub fn get_owner(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ManagedAddress<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getOwner")
            .original_result()
    }

    pub fn create_contest<
        Arg0: ProxyArg<u64>,
        Arg1: ProxyArg<ManagedBuffer<Env::Api>>,
        Arg2: ProxyArg<ManagedVec<Env::Api, ManagedAddress<Env::Api>>>,
    >(
        self,
        duration_seconds: Arg0,
        title: Arg1,
        candidates: Arg2,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("createContest")
            .argument(&duration_seconds)
            .argument(&title)
            .argument(&candidates)
            .original_result()
    }

    pub fn cast_vote<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contest_id: Arg0,
        candidate: Arg1,
    ) -> TxTypedCall<Env, From, To, (), Gas, ()> {
        self.wrapped_tx
            .raw_call("castVote")
            .argument(&contest_id)
            .argument(&candidate)
            .original_result()
    }

    pub fn close_contest<Arg0: ProxyArg<u64>>(
        self,
        contest_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("closeContest")
            .argument(&contest_id)
            .original_result()
    }

    pub fn get_contest<Arg0: ProxyArg<u64>>(
        self,
        contest_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ContestDetails<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContest")
            .argument(&contest_id)
            .original_result()
    }

    pub fn list_contests(
        self,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Contest<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("listContests")
            .original_result()
    }

    pub fn get_contests<Arg0: ProxyArg<u64>, Arg1: ProxyArg<u64>>(
        self,
        from: Arg0,
        count: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Contest<Env::Api>>>
    {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContests")
            .argument(&from)
            .argument(&count)
            .original_result()
    }

    pub fn get_contest_count(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, u64> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getContestCount")
            .original_result()
    }

    pub fn get_votes<Arg0: ProxyArg<u64>>(
        self,
        contest_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, MultiValueEncoded<Env::Api, Vote<Env::Api>>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getVotes")
            .argument(&contest_id)
            .original_result()
    }

    pub fn has_voted<Arg0: ProxyArg<u64>, Arg1: ProxyArg<ManagedAddress<Env::Api>>>(
        self,
        contest_id: Arg0,
        voter: Arg1,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, bool> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("hasVoted")
            .argument(&contest_id)
            .argument(&voter)
            .original_result()
    }

    pub fn get_tally<Arg0: ProxyArg<u64>>(
        self,
        contest_id: Arg0,
    ) -> TxTypedCall<
        Env,
        From,
        To,
        NotPayable,
        Gas,
        MultiValueEncoded<Env::Api, MultiValue2<ManagedAddress<Env::Api>, u64>>,
    > {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getTally")
            .argument(&contest_id)
            .original_result()
    }

    pub fn withdraw_reward<Arg0: ProxyArg<u64>>(
        self,
        contest_id: Arg0,
    ) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawReward")
            .argument(&contest_id)
            .original_result()
    }

    pub fn withdraw_commission(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, ()> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("withdrawCommission")
            .original_result()
    }

    pub fn get_commission(self) -> TxTypedCall<Env, From, To, NotPayable, Gas, BigUint<Env::Api>> {
        self.wrapped_tx
            .payment(NotPayable)
            .raw_call("getCommission")
            .original_result()
    }
}
