//! HTTP Handlers
//!
//! Bodies are taken as raw bytes: an empty body is an empty payload, and
//! malformed JSON is reported in the standard error envelope. An id that
//! does not parse is treated as an unknown record, and an unusable `page`
//! falls back to the first page.

use axum::body::Bytes;
use axum::extract::rejection::{PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use kernel::id::{AddressId, PaymentConfigId};
use kernel::pagination::{Page, PageQuery};
use kernel::principal::Principal;
use kernel::response::{ApiResponse, MessageResponse};
use kernel::validation::Payload;
use std::sync::Arc;

use crate::application::config::AccountConfig;
use crate::application::{AddressUseCase, PaymentConfigUseCase};
use crate::domain::repository::{AddressRepository, PaymentConfigRepository};
use crate::error::{AccountError, AccountResult};
use crate::presentation::dto::{AddressResponse, PaymentConfigResponse};

/// Shared state for account handlers
#[derive(Clone)]
pub struct AccountAppState<R>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<AccountConfig>,
}

impl<R> AccountAppState<R>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    fn addresses(&self) -> AddressUseCase<R> {
        AddressUseCase::new(self.repo.clone(), self.config.clone())
    }

    fn payment_configs(&self) -> PaymentConfigUseCase<R> {
        PaymentConfigUseCase::new(self.repo.clone(), self.config.clone())
    }
}

fn page_query(query: Result<Query<PageQuery>, QueryRejection>) -> PageQuery {
    query.map(|Query(query)| query).unwrap_or_default()
}

fn record_id<T>(path: Result<Path<T>, PathRejection>, entity: &'static str) -> AccountResult<T> {
    path.map(|Path(id)| id).map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unparseable record id");
        AccountError::NotFound(entity)
    })
}

// ============================================================================
// Addresses
// ============================================================================

/// GET /addresses
pub async fn list_addresses<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AccountResult<ApiResponse<Page<AddressResponse>>>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let page = state.addresses().list(principal, page_query(query)).await?;
    Ok(ApiResponse::with_data("Successful", page.map(Into::into)))
}

/// POST /addresses
pub async fn create_address<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    body: Bytes,
) -> AccountResult<MessageResponse>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let payload = Payload::from_body(&body)?;
    state.addresses().create(principal, payload).await?;
    Ok(MessageResponse::created("Created"))
}

/// PUT|PATCH /addresses/{id}
pub async fn update_address<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    path: Result<Path<AddressId>, PathRejection>,
    body: Bytes,
) -> AccountResult<MessageResponse>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let id = record_id(path, "Address")?;
    let payload = Payload::from_body(&body)?;
    state.addresses().update(principal, id, payload).await?;
    Ok(MessageResponse::ok("Successful"))
}

/// DELETE /addresses/{id}
pub async fn delete_address<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    path: Result<Path<AddressId>, PathRejection>,
    body: Bytes,
) -> AccountResult<ApiResponse<bool>>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let id = record_id(path, "Address")?;
    let payload = Payload::from_body(&body)?;
    let deleted = state.addresses().delete(principal, id, payload).await?;
    Ok(ApiResponse::with_data("Successful", deleted))
}

// ============================================================================
// Payment Configs
// ============================================================================

/// GET /payment-configs
pub async fn list_payment_configs<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    query: Result<Query<PageQuery>, QueryRejection>,
) -> AccountResult<ApiResponse<Page<PaymentConfigResponse>>>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let page = state.payment_configs().list(principal, page_query(query)).await?;
    Ok(ApiResponse::with_data("Successful", page.map(Into::into)))
}

/// POST /payment-configs
pub async fn create_payment_config<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    body: Bytes,
) -> AccountResult<MessageResponse>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let payload = Payload::from_body(&body)?;
    state.payment_configs().create(principal, payload).await?;
    Ok(MessageResponse::created("Created"))
}

/// PUT|PATCH /payment-configs/{id}
pub async fn update_payment_config<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    path: Result<Path<PaymentConfigId>, PathRejection>,
    body: Bytes,
) -> AccountResult<MessageResponse>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let id = record_id(path, "Payment config")?;
    let payload = Payload::from_body(&body)?;
    state.payment_configs().update(principal, id, payload).await?;
    Ok(MessageResponse::ok("Successful"))
}

/// DELETE /payment-configs/{id}
pub async fn delete_payment_config<R>(
    State(state): State<AccountAppState<R>>,
    principal: Principal,
    path: Result<Path<PaymentConfigId>, PathRejection>,
    body: Bytes,
) -> AccountResult<ApiResponse<bool>>
where
    R: AddressRepository + PaymentConfigRepository + Clone + Send + Sync + 'static,
{
    let id = record_id(path, "Payment config")?;
    let payload = Payload::from_body(&body)?;
    let deleted = state.payment_configs().delete(principal, id, payload).await?;
    Ok(ApiResponse::with_data("Successful", deleted))
}
