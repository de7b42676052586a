//! In-Memory Repository
//!
//! Backs the generic router in tests. State is shared across clones;
//! `BTreeMap` keeps listings in id order.

use std::collections::BTreeMap;
use std::sync::Arc;

use chrono::Utc;
use kernel::id::{AddressId, PaymentConfigId, UserId};
use kernel::pagination::{Page, PageRequest};
use tokio::sync::RwLock;

use crate::domain::entity::{
    address::{Address, NewAddress},
    payment_config::{NewPaymentConfig, PaymentConfig},
};
use crate::domain::repository::{AddressRepository, PaymentConfigRepository};
use crate::error::AccountResult;

#[derive(Default)]
struct State {
    addresses: BTreeMap<AddressId, Address>,
    payment_configs: BTreeMap<PaymentConfigId, PaymentConfig>,
    last_address_id: i64,
    last_payment_config_id: i64,
}

/// In-memory account repository
#[derive(Clone, Default)]
pub struct MemoryAccountRepository {
    state: Arc<RwLock<State>>,
}

impl MemoryAccountRepository {
    pub fn new() -> Self {
        Self::default()
    }
}

fn page_of<'a, T: Clone + 'a>(
    records: impl Iterator<Item = &'a T>,
    is_owned: impl Fn(&T) -> bool,
    request: PageRequest,
) -> Page<T> {
    let owned: Vec<&T> = records.filter(|r| is_owned(r)).collect();
    let data = owned
        .iter()
        .skip(request.offset() as usize)
        .take(request.per_page() as usize)
        .map(|r| (*r).clone())
        .collect();
    Page::new(data, owned.len() as u64, request)
}

impl AddressRepository for MemoryAccountRepository {
    async fn list_addresses(&self, owner: UserId, page: PageRequest) -> AccountResult<Page<Address>> {
        let state = self.state.read().await;
        Ok(page_of(
            state.addresses.values(),
            |a| a.user_id == owner,
            page,
        ))
    }

    async fn find_address(&self, id: AddressId) -> AccountResult<Option<Address>> {
        Ok(self.state.read().await.addresses.get(&id).cloned())
    }

    async fn create_address(&self, address: &NewAddress) -> AccountResult<Address> {
        let mut state = self.state.write().await;
        state.last_address_id += 1;

        let now = Utc::now();
        let stored = Address {
            id: AddressId::new(state.last_address_id),
            user_id: address.user_id,
            contact: address.contact.clone(),
            created_at: now,
            updated_at: now,
        };
        state.addresses.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_address(&self, address: &Address) -> AccountResult<bool> {
        let mut state = self.state.write().await;
        match state.addresses.get_mut(&address.id) {
            Some(stored) if stored.user_id == address.user_id => {
                stored.contact = address.contact.clone();
                stored.updated_at = address.updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_address(&self, owner: UserId, id: AddressId) -> AccountResult<bool> {
        let mut state = self.state.write().await;
        if state.addresses.get(&id).is_some_and(|a| a.user_id == owner) {
            state.addresses.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}

impl PaymentConfigRepository for MemoryAccountRepository {
    async fn list_payment_configs(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> AccountResult<Page<PaymentConfig>> {
        let state = self.state.read().await;
        Ok(page_of(
            state.payment_configs.values(),
            |c| c.user_id == owner,
            page,
        ))
    }

    async fn find_payment_config(
        &self,
        id: PaymentConfigId,
    ) -> AccountResult<Option<PaymentConfig>> {
        Ok(self.state.read().await.payment_configs.get(&id).cloned())
    }

    async fn create_payment_config(
        &self,
        config: &NewPaymentConfig,
    ) -> AccountResult<PaymentConfig> {
        let mut state = self.state.write().await;
        state.last_payment_config_id += 1;

        let now = Utc::now();
        let stored = PaymentConfig {
            id: PaymentConfigId::new(state.last_payment_config_id),
            user_id: config.user_id,
            card: config.card.clone(),
            billing: config.billing.clone(),
            created_at: now,
            updated_at: now,
        };
        state.payment_configs.insert(stored.id, stored.clone());
        Ok(stored)
    }

    async fn update_payment_config(&self, config: &PaymentConfig) -> AccountResult<bool> {
        let mut state = self.state.write().await;
        match state.payment_configs.get_mut(&config.id) {
            Some(stored) if stored.user_id == config.user_id => {
                stored.card = config.card.clone();
                stored.billing = config.billing.clone();
                stored.updated_at = config.updated_at;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    async fn delete_payment_config(
        &self,
        owner: UserId,
        id: PaymentConfigId,
    ) -> AccountResult<bool> {
        let mut state = self.state.write().await;
        if state.payment_configs.get(&id).is_some_and(|c| c.user_id == owner) {
            state.payment_configs.remove(&id);
            Ok(true)
        } else {
            Ok(false)
        }
    }
}
