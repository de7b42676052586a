//! Address Use Cases
//!
//! List, create, update and delete the principal's saved addresses.

use std::sync::Arc;

use kernel::id::AddressId;
use kernel::pagination::{Page, PageQuery};
use kernel::principal::Principal;
use kernel::validation::Payload;

use crate::application::config::AccountConfig;
use crate::application::input::{AddressInput, DestroyInput};
use crate::domain::entity::{
    OwnedByUser,
    address::{Address, NewAddress},
};
use crate::domain::repository::AddressRepository;
use crate::error::{AccountError, AccountResult};

/// Address use cases
pub struct AddressUseCase<R>
where
    R: AddressRepository + Clone + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> AddressUseCase<R>
where
    R: AddressRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    /// One page of the principal's addresses
    pub async fn list(&self, principal: Principal, query: PageQuery) -> AccountResult<Page<Address>> {
        let request = query.with_per_page(self.config.per_page);
        self.repo.list_addresses(principal.user_id, request).await
    }

    /// Create an address owned by the principal; any `user_id` in the payload is ignored
    pub async fn create(&self, principal: Principal, payload: Payload) -> AccountResult<Address> {
        let input = AddressInput::parse(payload)?;

        let address = self
            .repo
            .create_address(&NewAddress {
                user_id: principal.user_id,
                contact: input.contact,
            })
            .await?;

        tracing::info!(
            user_id = %principal.user_id,
            address_id = %address.id,
            "Address created"
        );

        Ok(address)
    }

    /// Replace an owned address
    pub async fn update(
        &self,
        principal: Principal,
        id: AddressId,
        payload: Payload,
    ) -> AccountResult<Address> {
        let mut address = self.find_owned(principal, id).await?;
        let input = AddressInput::parse(payload)?;

        address.apply(input.contact);
        if !self.repo.update_address(&address).await? {
            return Err(AccountError::NotFound("Address"));
        }

        tracing::info!(user_id = %principal.user_id, address_id = %id, "Address updated");

        Ok(address)
    }

    /// Delete an owned address when `choice` confirms it
    ///
    /// Returns whether the address was deleted; an unconfirmed request is not an error.
    pub async fn delete(
        &self,
        principal: Principal,
        id: AddressId,
        payload: Payload,
    ) -> AccountResult<bool> {
        self.find_owned(principal, id).await?;
        let input = DestroyInput::parse(payload)?;

        if !input.confirmed {
            tracing::debug!(user_id = %principal.user_id, address_id = %id, "Address delete not confirmed");
            return Ok(false);
        }

        let deleted = self.repo.delete_address(principal.user_id, id).await?;
        tracing::info!(user_id = %principal.user_id, address_id = %id, deleted, "Address deleted");

        Ok(deleted)
    }

    /// 404 when missing, 401 when owned by someone else
    async fn find_owned(&self, principal: Principal, id: AddressId) -> AccountResult<Address> {
        let address = self
            .repo
            .find_address(id)
            .await?
            .ok_or(AccountError::NotFound("Address"))?;

        if !address.is_owned_by(&principal) {
            return Err(AccountError::NotOwner);
        }
        Ok(address)
    }
}
