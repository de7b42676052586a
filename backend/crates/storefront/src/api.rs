//! Storefront API Client
//!
//! [`StorefrontApi`] is the seam the session action and product page call
//! through; [`HttpStorefrontApi`] is the reqwest implementation.

use kernel::id::ProductId;
use platform::bearer::bearer_value;
use reqwest::header::{ACCEPT, AUTHORIZATION};
use serde::Deserialize;

use crate::config::StorefrontConfig;
use crate::error::{ClientError, ClientResult};
use crate::models::{Envelope, Product, UserProfile};

#[trait_variant::make(StorefrontApi: Send)]
pub trait LocalStorefrontApi {
    /// `GET /user/authenticate` with a bearer token
    ///
    /// Any JSON body is returned, whatever the status; an error envelope
    /// is a normal outcome here.
    async fn authenticate(&self, token: &str) -> ClientResult<Envelope<UserProfile>>;

    /// `GET /products/{id}`
    async fn get_product(&self, id: ProductId) -> ClientResult<Product>;
}

/// `{data: product}` or a bare product
#[derive(Deserialize)]
#[serde(untagged)]
enum ProductBody {
    Wrapped { data: Product },
    Bare(Product),
}

impl From<ProductBody> for Product {
    fn from(body: ProductBody) -> Self {
        match body {
            ProductBody::Wrapped { data } => data,
            ProductBody::Bare(product) => product,
        }
    }
}

/// HTTP implementation over reqwest
#[derive(Debug, Clone)]
pub struct HttpStorefrontApi {
    client: reqwest::Client,
    config: StorefrontConfig,
}

impl HttpStorefrontApi {
    pub fn new(config: StorefrontConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    pub fn with_client(client: reqwest::Client, config: StorefrontConfig) -> Self {
        Self { client, config }
    }
}

impl StorefrontApi for HttpStorefrontApi {
    async fn authenticate(&self, token: &str) -> ClientResult<Envelope<UserProfile>> {
        let url = self.config.url("/user/authenticate");
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .header(AUTHORIZATION, bearer_value(token))
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        tracing::debug!(%url, status = status.as_u16(), "Fetched current user");

        Ok(serde_json::from_str(&body)?)
    }

    async fn get_product(&self, id: ProductId) -> ClientResult<Product> {
        let url = self.config.url(&format!("/products/{id}"));
        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            return Err(ClientError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let product: ProductBody = serde_json::from_str(&body)?;
        Ok(product.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_product_body_shapes() {
        let bare = json!({ "id": 1, "user_id": 2, "name": "Lamp", "formatted_cost": "£5.00" });
        let wrapped = json!({ "message": "Successful", "data": bare.clone() });

        let a: Product = serde_json::from_value::<ProductBody>(bare).unwrap().into();
        let b: Product = serde_json::from_value::<ProductBody>(wrapped).unwrap().into();
        assert_eq!(a, b);
        assert_eq!(a.name, "Lamp");
    }
}
