//! Payment Config Use Cases
//!
//! List, create, update and delete the principal's saved payment configs.
//! Card numbers are never logged.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::PaymentConfigId;
use kernel::pagination::{Page, PageQuery};
use kernel::principal::Principal;
use kernel::validation::Payload;

use crate::application::config::AccountConfig;
use crate::application::input::{DestroyInput, PaymentConfigInput};
use crate::domain::entity::{
    OwnedByUser,
    payment_config::{NewPaymentConfig, PaymentConfig},
};
use crate::domain::repository::PaymentConfigRepository;
use crate::error::{AccountError, AccountResult};

/// Payment config use cases
pub struct PaymentConfigUseCase<R>
where
    R: PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    repo: Arc<R>,
    config: Arc<AccountConfig>,
}

impl<R> PaymentConfigUseCase<R>
where
    R: PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    pub fn new(repo: Arc<R>, config: Arc<AccountConfig>) -> Self {
        Self { repo, config }
    }

    /// One page of the principal's payment configs
    pub async fn list(
        &self,
        principal: Principal,
        query: PageQuery,
    ) -> AccountResult<Page<PaymentConfig>> {
        let request = query.with_per_page(self.config.per_page);
        self.repo
            .list_payment_configs(principal.user_id, request)
            .await
    }

    /// Create a payment config owned by the principal
    pub async fn create(
        &self,
        principal: Principal,
        payload: Payload,
    ) -> AccountResult<PaymentConfig> {
        let input = PaymentConfigInput::parse(payload, Utc::now().date_naive())?;

        let config = self
            .repo
            .create_payment_config(&NewPaymentConfig {
                user_id: principal.user_id,
                card: input.card,
                billing: input.billing,
            })
            .await?;

        tracing::info!(
            user_id = %principal.user_id,
            payment_config_id = %config.id,
            card_last_four = config.card.card_number.last_four(),
            "Payment config created"
        );

        Ok(config)
    }

    /// Replace an owned payment config
    pub async fn update(
        &self,
        principal: Principal,
        id: PaymentConfigId,
        payload: Payload,
    ) -> AccountResult<PaymentConfig> {
        let mut config = self.find_owned(principal, id).await?;
        let input = PaymentConfigInput::parse(payload, Utc::now().date_naive())?;

        config.apply(input.card, input.billing);
        if !self.repo.update_payment_config(&config).await? {
            return Err(AccountError::NotFound("Payment config"));
        }

        tracing::info!(
            user_id = %principal.user_id,
            payment_config_id = %id,
            "Payment config updated"
        );

        Ok(config)
    }

    /// Delete an owned payment config when `choice` confirms it
    pub async fn delete(
        &self,
        principal: Principal,
        id: PaymentConfigId,
        payload: Payload,
    ) -> AccountResult<bool> {
        self.find_owned(principal, id).await?;
        let input = DestroyInput::parse(payload)?;

        if !input.confirmed {
            tracing::debug!(
                user_id = %principal.user_id,
                payment_config_id = %id,
                "Payment config delete not confirmed"
            );
            return Ok(false);
        }

        let deleted = self.repo.delete_payment_config(principal.user_id, id).await?;
        tracing::info!(
            user_id = %principal.user_id,
            payment_config_id = %id,
            deleted,
            "Payment config deleted"
        );

        Ok(deleted)
    }

    async fn find_owned(
        &self,
        principal: Principal,
        id: PaymentConfigId,
    ) -> AccountResult<PaymentConfig> {
        let config = self
            .repo
            .find_payment_config(id)
            .await?
            .ok_or(AccountError::NotFound("Payment config"))?;

        if !config.is_owned_by(&principal) {
            return Err(AccountError::NotOwner);
        }
        Ok(config)
    }
}
