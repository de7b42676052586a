//! Client Store
//!
//! Single state tree updated only by dispatching [`Action`]s through the
//! pure reducer [`StoreState::apply`].

use kernel::id::ProductId;
use tokio::sync::watch;

use crate::models::{Product, UserProfile};
use crate::remote::Remote;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    CurrentUserPending,
    CurrentUserLoaded(UserProfile),
    CurrentUserFailed(String),
    ProductPending,
    ProductLoaded(Product),
    ProductFailed(String),
    AddToCart(ProductId),
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct StoreState {
    pub current_user: Remote<UserProfile>,
    pub product: Remote<Product>,
    /// Product IDs in the order they were added
    pub cart: Vec<ProductId>,
}

impl StoreState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::CurrentUserPending => self.current_user = Remote::Loading,
            Action::CurrentUserLoaded(user) => self.current_user = Remote::Loaded(user),
            Action::CurrentUserFailed(message) => self.current_user = Remote::Failed(message),
            Action::ProductPending => self.product = Remote::Loading,
            Action::ProductLoaded(product) => self.product = Remote::Loaded(product),
            Action::ProductFailed(message) => self.product = Remote::Failed(message),
            Action::AddToCart(id) => self.cart.push(id),
        }
    }

    /// The signed-in user, if the session has loaded
    pub fn user(&self) -> Option<&UserProfile> {
        self.current_user.loaded()
    }
}

pub trait Dispatch: Send + Sync {
    fn dispatch(&self, action: Action);
}

/// Store backed by a `watch` channel
#[derive(Debug, Clone)]
pub struct Store {
    state: watch::Sender<StoreState>,
}

impl Store {
    pub fn new() -> Self {
        Self::with_state(StoreState::default())
    }

    pub fn with_state(state: StoreState) -> Self {
        let (state, _) = watch::channel(state);
        Self { state }
    }

    /// Snapshot of the current state
    pub fn state(&self) -> StoreState {
        self.state.borrow().clone()
    }

    /// Receiver notified after every dispatch
    pub fn subscribe(&self) -> watch::Receiver<StoreState> {
        self.state.subscribe()
    }
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Dispatch for Store {
    fn dispatch(&self, action: Action) {
        tracing::trace!(?action, "Dispatch");
        self.state.send_modify(|state| state.apply(action));
    }
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;
    use std::sync::Mutex;

    /// Dispatcher that only records actions
    #[derive(Debug, Default)]
    pub struct RecordingDispatch {
        actions: Mutex<Vec<Action>>,
    }

    impl RecordingDispatch {
        pub fn actions(&self) -> Vec<Action> {
            self.actions.lock().unwrap().clone()
        }
    }

    impl Dispatch for RecordingDispatch {
        fn dispatch(&self, action: Action) {
            self.actions.lock().unwrap().push(action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::fixtures;

    #[test]
    fn test_reducer() {
        let mut state = StoreState::default();
        state.apply(Action::CurrentUserPending);
        assert_eq!(state.current_user, Remote::Loading);

        state.apply(Action::CurrentUserLoaded(fixtures::user(1)));
        assert_eq!(state.user().map(|u| u.id.get()), Some(1));

        state.apply(Action::ProductFailed("Not Found".to_string()));
        assert_eq!(state.product.error(), Some("Not Found"));
        assert_eq!(state.user().map(|u| u.id.get()), Some(1));

        state.apply(Action::AddToCart(ProductId::new(5)));
        state.apply(Action::AddToCart(ProductId::new(5)));
        assert_eq!(state.cart, vec![ProductId::new(5), ProductId::new(5)]);
    }

    #[tokio::test]
    async fn test_subscribers_see_dispatches() {
        let store = Store::new();
        let mut rx = store.subscribe();

        store.dispatch(Action::ProductPending);
        rx.changed().await.unwrap();
        assert_eq!(rx.borrow_and_update().product, Remote::Loading);

        store.dispatch(Action::AddToCart(ProductId::new(2)));
        rx.changed().await.unwrap();
        assert_eq!(store.state().cart, vec![ProductId::new(2)]);
    }
}
