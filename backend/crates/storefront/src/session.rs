//! Current-User Session
//!
//! Resolves the stored bearer token to the signed-in user.

use crate::api::StorefrontApi;
use crate::store::{Action, Dispatch};
use crate::token::TokenStore;

pub const NO_TOKEN_STORED: &str = "No token stored";

/// Load the current user into the store
///
/// Dispatches `CurrentUserPending` followed by exactly one of
/// `CurrentUserLoaded` or `CurrentUserFailed`. A transport or decode
/// failure also drops the stored token; an error envelope does not.
pub async fn get_current_user<A, T, D>(api: &A, tokens: &T, store: &D)
where
    A: StorefrontApi,
    T: TokenStore + ?Sized,
    D: Dispatch + ?Sized,
{
    store.dispatch(Action::CurrentUserPending);

    let Some(token) = tokens.token() else {
        store.dispatch(Action::CurrentUserFailed(NO_TOKEN_STORED.to_string()));
        return;
    };

    match api.authenticate(&token).await {
        Ok(envelope) => match envelope.data {
            Some(user) => {
                tracing::debug!(user_id = %user.id, "Current user loaded");
                store.dispatch(Action::CurrentUserLoaded(user));
            }
            None => {
                let message = envelope.error_message();
                tracing::debug!(error = %message, "Current user rejected");
                store.dispatch(Action::CurrentUserFailed(message));
            }
        },
        Err(e) => {
            tracing::warn!(error = %e, "Current user request failed");
            store.dispatch(Action::CurrentUserFailed(e.to_string()));
            if tokens.token().is_some() {
                tokens.remove_token();
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fake::FakeApi;
    use super::*;
    use crate::remote::Remote;
    use crate::store::Store;
    use crate::store::recording::RecordingDispatch;
    use crate::token::MemoryTokenStore;
    use serde_json::json;

    #[tokio::test]
    async fn test_no_token_stored() {
        let api = FakeApi::default();
        let store = RecordingDispatch::default();

        get_current_user(&api, &MemoryTokenStore::new(), &store).await;

        assert_eq!(
            store.actions(),
            vec![
                Action::CurrentUserPending,
                Action::CurrentUserFailed("No token stored".to_string()),
            ]
        );
        assert!(api.calls().is_empty());
    }

    #[tokio::test]
    async fn test_success() {
        let api = FakeApi::with_authenticate(json!({
            "message": "Successful",
            "data": { "id": 7, "name": "Ada", "email": "ada@example.com" }
        }));
        let tokens = MemoryTokenStore::with_token("tok");
        let store = Store::new();

        get_current_user(&api, &tokens, &store).await;

        assert_eq!(api.calls(), vec!["authenticate tok".to_string()]);
        assert_eq!(store.state().current_user.loaded().map(|u| u.id.get()), Some(7));
        assert_eq!(tokens.token().as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_missing_data_carries_server_error() {
        let api = FakeApi::with_authenticate(json!({ "data": null, "error": "expired" }));
        let tokens = MemoryTokenStore::with_token("tok");
        let store = RecordingDispatch::default();

        get_current_user(&api, &tokens, &store).await;

        assert_eq!(
            store.actions(),
            vec![
                Action::CurrentUserPending,
                Action::CurrentUserFailed("expired".to_string()),
            ]
        );
        // an error envelope is not a transport failure
        assert!(tokens.token().is_some());
    }

    #[tokio::test]
    async fn test_missing_data_without_error() {
        let api = FakeApi::with_authenticate(json!({ "message": "Successful" }));
        let tokens = MemoryTokenStore::with_token("tok");
        let store = Store::new();

        get_current_user(&api, &tokens, &store).await;

        assert_eq!(
            store.state().current_user,
            Remote::Failed("Unknown error".to_string())
        );
    }

    #[tokio::test]
    async fn test_failure_clears_token() {
        let api = FakeApi::default();
        let tokens = MemoryTokenStore::with_token("tok");
        let store = RecordingDispatch::default();

        get_current_user(&api, &tokens, &store).await;

        let actions = store.actions();
        assert_eq!(actions.len(), 2);
        assert!(matches!(actions[1], Action::CurrentUserFailed(_)));
        assert_eq!(tokens.token(), None);
    }

    #[tokio::test]
    async fn test_undecodable_body_clears_token() {
        let api = FakeApi::with_authenticate(json!({ "data": { "id": "not-a-number" } }));
        let tokens = MemoryTokenStore::with_token("tok");
        let store = Store::new();

        get_current_user(&api, &tokens, &store).await;

        assert!(store.state().current_user.error().is_some());
        assert_eq!(tokens.token(), None);
    }
}
