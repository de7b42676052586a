//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.
//! Listing is always scoped to one owner; single-record lookups are not, so
//! the use cases can tell "missing" (404) from "not yours" (401).

use kernel::id::{AddressId, PaymentConfigId, UserId};
use kernel::pagination::{Page, PageRequest};

use crate::domain::entity::{
    address::{Address, NewAddress},
    payment_config::{NewPaymentConfig, PaymentConfig},
};
use crate::error::AccountResult;

/// Address repository trait
#[trait_variant::make(AddressRepository: Send)]
pub trait LocalAddressRepository {
    /// One page of the owner's addresses, ordered by id
    async fn list_addresses(&self, owner: UserId, page: PageRequest)
    -> AccountResult<Page<Address>>;

    /// Find address by ID
    async fn find_address(&self, id: AddressId) -> AccountResult<Option<Address>>;

    /// Insert and return the stored address
    async fn create_address(&self, address: &NewAddress) -> AccountResult<Address>;

    /// Persist the mutable fields of an existing address, matching on both
    /// `id` and `user_id`; `false` when no row matched
    async fn update_address(&self, address: &Address) -> AccountResult<bool>;

    /// Delete `owner`'s address; `false` when no row matched
    async fn delete_address(&self, owner: UserId, id: AddressId) -> AccountResult<bool>;
}

/// Payment config repository trait
#[trait_variant::make(PaymentConfigRepository: Send)]
pub trait LocalPaymentConfigRepository {
    /// One page of the owner's payment configs, ordered by id
    async fn list_payment_configs(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> AccountResult<Page<PaymentConfig>>;

    /// Find payment config by ID
    async fn find_payment_config(
        &self,
        id: PaymentConfigId,
    ) -> AccountResult<Option<PaymentConfig>>;

    /// Insert and return the stored payment config
    async fn create_payment_config(
        &self,
        config: &NewPaymentConfig,
    ) -> AccountResult<PaymentConfig>;

    /// Persist the mutable fields of an existing payment config, matching on
    /// both `id` and `user_id`; `false` when no row matched
    async fn update_payment_config(&self, config: &PaymentConfig) -> AccountResult<bool>;

    /// Delete `owner`'s payment config; `false` when no row matched
    async fn delete_payment_config(
        &self,
        owner: UserId,
        id: PaymentConfigId,
    ) -> AccountResult<bool>;
}
