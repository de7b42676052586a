//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::{AddressId, PaymentConfigId, UserId};
use kernel::pagination::{Page, PageRequest};
use sqlx::PgPool;

use crate::domain::entity::{
    address::{Address, NewAddress},
    payment_config::{CardDetails, NewPaymentConfig, PaymentConfig},
};
use crate::domain::repository::{AddressRepository, PaymentConfigRepository};
use crate::domain::value_object::{
    card_number::CardNumber, contact::ContactDetails, country::Country, expiry_date::ExpiryDate,
};
use crate::error::{AccountError, AccountResult};

const CONTACT_COLUMNS: &str = "building_name, street_address1, street_address2, \
    street_address3, street_address4, postcode, city, country, county, \
    phone_number_extension, phone_number, mobile_number_extension, mobile_number";

/// PostgreSQL-backed account repository
#[derive(Clone)]
pub struct PgAccountRepository {
    pool: PgPool,
}

impl PgAccountRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// ============================================================================
// Address Repository Implementation
// ============================================================================

impl AddressRepository for PgAccountRepository {
    async fn list_addresses(&self, owner: UserId, page: PageRequest) -> AccountResult<Page<Address>> {
        let total =
            sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM users_addresses WHERE user_id = $1")
                .bind(owner.get())
                .fetch_one(&self.pool)
                .await?;

        let rows = sqlx::query_as::<_, AddressRow>(&format!(
            r#"
            SELECT id, user_id, {CONTACT_COLUMNS}, created_at, updated_at
            FROM users_addresses
            WHERE user_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(owner.get())
        .bind(i64::from(page.per_page()))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let data = rows.into_iter().map(AddressRow::into_address).collect();

        Ok(Page::new(data, total.max(0) as u64, page))
    }

    async fn find_address(&self, id: AddressId) -> AccountResult<Option<Address>> {
        let row = sqlx::query_as::<_, AddressRow>(&format!(
            r#"
            SELECT id, user_id, {CONTACT_COLUMNS}, created_at, updated_at
            FROM users_addresses
            WHERE id = $1
            "#
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        Ok(row.map(AddressRow::into_address))
    }

    async fn create_address(&self, address: &NewAddress) -> AccountResult<Address> {
        let c = &address.contact;
        let row = sqlx::query_as::<_, AddressRow>(&format!(
            r#"
            INSERT INTO users_addresses (user_id, {CONTACT_COLUMNS})
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14)
            RETURNING id, user_id, {CONTACT_COLUMNS}, created_at, updated_at
            "#
        ))
        .bind(address.user_id.get())
        .bind(&c.building_name)
        .bind(&c.street_address1)
        .bind(&c.street_address2)
        .bind(&c.street_address3)
        .bind(&c.street_address4)
        .bind(&c.postcode)
        .bind(&c.city)
        .bind(c.country.as_str())
        .bind(&c.county)
        .bind(&c.phone_number_extension)
        .bind(&c.phone_number)
        .bind(&c.mobile_number_extension)
        .bind(&c.mobile_number)
        .fetch_one(&self.pool)
        .await?;

        Ok(row.into_address())
    }

    async fn update_address(&self, address: &Address) -> AccountResult<bool> {
        let c = &address.contact;
        let affected = sqlx::query(
            r#"
            UPDATE users_addresses SET
                building_name = $2,
                street_address1 = $3,
                street_address2 = $4,
                street_address3 = $5,
                street_address4 = $6,
                postcode = $7,
                city = $8,
                country = $9,
                county = $10,
                phone_number_extension = $11,
                phone_number = $12,
                mobile_number_extension = $13,
                mobile_number = $14,
                updated_at = $15
            WHERE id = $1 AND user_id = $16
            "#,
        )
        .bind(address.id.get())
        .bind(&c.building_name)
        .bind(&c.street_address1)
        .bind(&c.street_address2)
        .bind(&c.street_address3)
        .bind(&c.street_address4)
        .bind(&c.postcode)
        .bind(&c.city)
        .bind(c.country.as_str())
        .bind(&c.county)
        .bind(&c.phone_number_extension)
        .bind(&c.phone_number)
        .bind(&c.mobile_number_extension)
        .bind(&c.mobile_number)
        .bind(address.updated_at)
        .bind(address.user_id.get())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete_address(&self, owner: UserId, id: AddressId) -> AccountResult<bool> {
        let affected = sqlx::query("DELETE FROM users_addresses WHERE id = $1 AND user_id = $2")
            .bind(id.get())
            .bind(owner.get())
            .execute(&self.pool)
            .await?
            .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Payment Config Repository Implementation
// ============================================================================

impl PaymentConfigRepository for PgAccountRepository {
    async fn list_payment_configs(
        &self,
        owner: UserId,
        page: PageRequest,
    ) -> AccountResult<Page<PaymentConfig>> {
        let total = sqlx::query_scalar::<_, i64>(
            "SELECT COUNT(*) FROM user_payment_configs WHERE user_id = $1",
        )
        .bind(owner.get())
        .fetch_one(&self.pool)
        .await?;

        let rows = sqlx::query_as::<_, PaymentConfigRow>(&format!(
            r#"
            SELECT
                id, user_id, card_holder_name, card_number, expiry_month, expiry_year,
                {CONTACT_COLUMNS}, created_at, updated_at
            FROM user_payment_configs
            WHERE user_id = $1
            ORDER BY id
            LIMIT $2 OFFSET $3
            "#
        ))
        .bind(owner.get())
        .bind(i64::from(page.per_page()))
        .bind(page.offset() as i64)
        .fetch_all(&self.pool)
        .await?;

        let data = rows
            .into_iter()
            .map(PaymentConfigRow::into_payment_config)
            .collect::<AccountResult<Vec<_>>>()?;

        Ok(Page::new(data, total.max(0) as u64, page))
    }

    async fn find_payment_config(
        &self,
        id: PaymentConfigId,
    ) -> AccountResult<Option<PaymentConfig>> {
        let row = sqlx::query_as::<_, PaymentConfigRow>(&format!(
            r#"
            SELECT
                id, user_id, card_holder_name, card_number, expiry_month, expiry_year,
                {CONTACT_COLUMNS}, created_at, updated_at
            FROM user_payment_configs
            WHERE id = $1
            "#
        ))
        .bind(id.get())
        .fetch_optional(&self.pool)
        .await?;

        row.map(PaymentConfigRow::into_payment_config).transpose()
    }

    async fn create_payment_config(
        &self,
        config: &NewPaymentConfig,
    ) -> AccountResult<PaymentConfig> {
        let card = &config.card;
        let c = &config.billing;
        let row = sqlx::query_as::<_, PaymentConfigRow>(&format!(
            r#"
            INSERT INTO user_payment_configs (
                user_id, card_holder_name, card_number, expiry_month, expiry_year,
                {CONTACT_COLUMNS}
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
            RETURNING
                id, user_id, card_holder_name, card_number, expiry_month, expiry_year,
                {CONTACT_COLUMNS}, created_at, updated_at
            "#
        ))
        .bind(config.user_id.get())
        .bind(&card.card_holder_name)
        .bind(card.card_number.as_str())
        .bind(card.expiry.month() as i32)
        .bind(card.expiry.year())
        .bind(&c.building_name)
        .bind(&c.street_address1)
        .bind(&c.street_address2)
        .bind(&c.street_address3)
        .bind(&c.street_address4)
        .bind(&c.postcode)
        .bind(&c.city)
        .bind(c.country.as_str())
        .bind(&c.county)
        .bind(&c.phone_number_extension)
        .bind(&c.phone_number)
        .bind(&c.mobile_number_extension)
        .bind(&c.mobile_number)
        .fetch_one(&self.pool)
        .await?;

        row.into_payment_config()
    }

    async fn update_payment_config(&self, config: &PaymentConfig) -> AccountResult<bool> {
        let card = &config.card;
        let c = &config.billing;
        let affected = sqlx::query(
            r#"
            UPDATE user_payment_configs SET
                card_holder_name = $2,
                card_number = $3,
                expiry_month = $4,
                expiry_year = $5,
                building_name = $6,
                street_address1 = $7,
                street_address2 = $8,
                street_address3 = $9,
                street_address4 = $10,
                postcode = $11,
                city = $12,
                country = $13,
                county = $14,
                phone_number_extension = $15,
                phone_number = $16,
                mobile_number_extension = $17,
                mobile_number = $18,
                updated_at = $19
            WHERE id = $1 AND user_id = $20
            "#,
        )
        .bind(config.id.get())
        .bind(&card.card_holder_name)
        .bind(card.card_number.as_str())
        .bind(card.expiry.month() as i32)
        .bind(card.expiry.year())
        .bind(&c.building_name)
        .bind(&c.street_address1)
        .bind(&c.street_address2)
        .bind(&c.street_address3)
        .bind(&c.street_address4)
        .bind(&c.postcode)
        .bind(&c.city)
        .bind(c.country.as_str())
        .bind(&c.county)
        .bind(&c.phone_number_extension)
        .bind(&c.phone_number)
        .bind(&c.mobile_number_extension)
        .bind(&c.mobile_number)
        .bind(config.updated_at)
        .bind(config.user_id.get())
        .execute(&self.pool)
        .await?
        .rows_affected();

        Ok(affected > 0)
    }

    async fn delete_payment_config(
        &self,
        owner: UserId,
        id: PaymentConfigId,
    ) -> AccountResult<bool> {
        let affected =
            sqlx::query("DELETE FROM user_payment_configs WHERE id = $1 AND user_id = $2")
                .bind(id.get())
                .bind(owner.get())
                .execute(&self.pool)
                .await?
                .rows_affected();

        Ok(affected > 0)
    }
}

// ============================================================================
// Row Types
// ============================================================================

#[derive(sqlx::FromRow)]
struct ContactRow {
    building_name: String,
    street_address1: String,
    street_address2: Option<String>,
    street_address3: Option<String>,
    street_address4: Option<String>,
    postcode: String,
    city: String,
    country: String,
    county: Option<String>,
    phone_number_extension: String,
    phone_number: String,
    mobile_number_extension: Option<String>,
    mobile_number: Option<String>,
}

impl ContactRow {
    fn into_contact(self) -> ContactDetails {
        ContactDetails {
            building_name: self.building_name,
            street_address1: self.street_address1,
            street_address2: self.street_address2,
            street_address3: self.street_address3,
            street_address4: self.street_address4,
            postcode: self.postcode,
            city: self.city,
            country: Country::from_stored(self.country),
            county: self.county,
            phone_number_extension: self.phone_number_extension,
            phone_number: self.phone_number,
            mobile_number_extension: self.mobile_number_extension,
            mobile_number: self.mobile_number,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AddressRow {
    id: i64,
    user_id: i64,
    #[sqlx(flatten)]
    contact: ContactRow,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl AddressRow {
    fn into_address(self) -> Address {
        Address {
            id: AddressId::new(self.id),
            user_id: UserId::new(self.user_id),
            contact: self.contact.into_contact(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        }
    }
}

#[derive(sqlx::FromRow)]
struct PaymentConfigRow {
    id: i64,
    user_id: i64,
    card_holder_name: String,
    card_number: String,
    expiry_month: i32,
    expiry_year: i32,
    #[sqlx(flatten)]
    contact: ContactRow,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl PaymentConfigRow {
    fn into_payment_config(self) -> AccountResult<PaymentConfig> {
        let expiry = u32::try_from(self.expiry_month)
            .ok()
            .and_then(|month| ExpiryDate::new(self.expiry_year, month))
            .ok_or_else(|| {
                AccountError::Internal(format!(
                    "Stored expiry month out of range for payment config {}",
                    self.id
                ))
            })?;

        Ok(PaymentConfig {
            id: PaymentConfigId::new(self.id),
            user_id: UserId::new(self.user_id),
            card: CardDetails {
                card_holder_name: self.card_holder_name,
                card_number: CardNumber::from_stored(self.card_number),
                expiry,
            },
            billing: self.contact.into_contact(),
            created_at: self.created_at,
            updated_at: self.updated_at,
        })
    }
}
