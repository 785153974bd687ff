// Endpoint behaviour is covered by the blackbox scenarios in
// smart_voting_blackbox_test.rs; this only checks the contract object wires
// up every module against the debug VM.

use multiversx_sc_scenario::api::DebugApi;

type VotingContract = smart_voting::ContractObj<DebugApi>;

#[test]
fn test_contract_builds() {
    let _: fn() -> VotingContract = smart_voting::contract_obj;
}
