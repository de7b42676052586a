pub mod address;
pub mod payment_config;

use kernel::id::UserId;
use kernel::principal::Principal;

/// Records scoped to a single user
pub trait OwnedByUser {
    fn owner(&self) -> UserId;

    /// Whether `principal` may read or mutate this record
    fn is_owned_by(&self, principal: &Principal) -> bool {
        principal.owns(self.owner())
    }
}
