multiversx_sc::imports!();

use crate::errors::ERR_NOT_OWNER;

#[multiversx_sc::module]
pub trait AccessControlModule: crate::storage::StorageModule {
    /// Must run before anything else in an owner-only endpoint.
    fn require_owner(&self) {
        let caller = self.blockchain().get_caller();
        require!(caller == self.owner().get(), ERR_NOT_OWNER);
    }

    #[view(getOwner)]
    fn get_owner(&self) -> ManagedAddress {
        self.owner().get()
    }
}
