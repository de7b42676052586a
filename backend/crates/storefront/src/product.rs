//! Product Page
//!
//! Loads a product into the store and derives what the page shows from
//! the current state.

use kernel::id::ProductId;
use std::sync::Arc;

use crate::api::StorefrontApi;
use crate::models::{Product, Review, UserProfile};
use crate::remote::Remote;
use crate::store::{Action, Dispatch, StoreState};

/// What the page renders
#[derive(Debug, Clone, PartialEq)]
pub enum ProductView {
    Loading,
    Error(String),
    Loaded(ProductDetails),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ProductDetails {
    pub id: ProductId,
    pub name: String,
    pub image_path: Option<String>,
    pub short_description: String,
    pub long_description: String,
    pub product_details: String,
    pub formatted_cost: String,
    pub shippable: bool,
    pub free_delivery: bool,
    pub reviews: ReviewList,
    pub affordance: Affordance,
}

impl ProductDetails {
    pub fn shipping_note(&self) -> &'static str {
        if self.shippable {
            "This item is shippable"
        } else {
            "This item is not shippable"
        }
    }
}

/// Reviews section
#[derive(Debug, Clone, PartialEq)]
pub struct ReviewList {
    pub reviews: Vec<Review>,
    pub score: Option<f64>,
    pub viewer: Option<UserProfile>,
}

/// Action area next to the price
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Affordance {
    /// Shown to the vendor; neither control navigates anywhere yet
    OwnerControls {
        edit: &'static str,
        delete: &'static str,
    },
    AddToCart,
}

impl Affordance {
    fn for_viewer(product: &Product, viewer: Option<&UserProfile>) -> Self {
        match viewer {
            Some(user) if user.id == product.user_id => Affordance::OwnerControls {
                edit: "Edit item",
                delete: "Delete item",
            },
            _ => Affordance::AddToCart,
        }
    }
}

/// Product page controller
pub struct ProductPage<A> {
    api: Arc<A>,
}

impl<A> ProductPage<A>
where
    A: StorefrontApi,
{
    pub fn new(api: Arc<A>) -> Self {
        Self { api }
    }

    /// Fetch product `id` into the store
    pub async fn load<D>(&self, id: ProductId, store: &D)
    where
        D: Dispatch + ?Sized,
    {
        store.dispatch(Action::ProductPending);

        match self.api.get_product(id).await {
            Ok(product) => store.dispatch(Action::ProductLoaded(product)),
            Err(e) => {
                tracing::warn!(product_id = %id, error = %e, "Failed to load product");
                store.dispatch(Action::ProductFailed(e.to_string()));
            }
        }
    }

    pub fn view(state: &StoreState) -> ProductView {
        match &state.product {
            Remote::Idle | Remote::Loading => ProductView::Loading,
            Remote::Failed(message) => ProductView::Error(message.clone()),
            Remote::Loaded(product) => {
                let viewer = state.user();
                ProductView::Loaded(ProductDetails {
                    id: product.id,
                    name: product.name.clone(),
                    image_path: product.image_path.clone(),
                    short_description: product.short_description.clone(),
                    long_description: product.long_description.clone(),
                    product_details: product.product_details.clone(),
                    formatted_cost: product.formatted_cost.clone(),
                    shippable: product.shippable,
                    free_delivery: product.free_delivery,
                    reviews: ReviewList {
                        reviews: product.reviews.clone(),
                        score: product.review_score,
                        viewer: viewer.cloned(),
                    },
                    affordance: Affordance::for_viewer(product, viewer),
                })
            }
        }
    }

    /// Add the loaded product to the cart; no-op until it has loaded
    pub fn add_to_cart<D>(state: &StoreState, store: &D)
    where
        D: Dispatch + ?Sized,
    {
        if let Some(product) = state.product.loaded() {
            store.dispatch(Action::AddToCart(product.id));
        }
    }
}
