//! Bearer Token Signing
//!
//! `<token_id>.<base64url(HMAC-SHA256(secret, token_id))>`

use hmac::{Hmac, Mac};
use platform::crypto::{from_base64url, to_base64url};
use sha2::Sha256;
use uuid::Uuid;

use crate::error::{AuthError, AuthResult};

type HmacSha256 = Hmac<Sha256>;

/// Signs and verifies bearer token strings
#[derive(Clone, Copy)]
pub struct TokenSigner<'a> {
    secret: &'a [u8; 32],
}

impl<'a> TokenSigner<'a> {
    pub fn new(secret: &'a [u8; 32]) -> Self {
        Self { secret }
    }

    fn mac(&self, token_id: &str) -> AuthResult<HmacSha256> {
        let mut mac = HmacSha256::new_from_slice(self.secret)
            .map_err(|e| AuthError::Internal(format!("HMAC key rejected: {e}")))?;
        mac.update(token_id.as_bytes());
        Ok(mac)
    }

    /// Build the bearer string for a token ID
    pub fn sign(&self, token_id: Uuid) -> AuthResult<String> {
        let id = token_id.to_string();
        let signature = self.mac(&id)?.finalize().into_bytes();
        Ok(format!("{id}.{}", to_base64url(&signature)))
    }

    /// Verify the signature and return the embedded token ID
    pub fn verify(&self, token: &str) -> AuthResult<Uuid> {
        let (id, signature_b64) = token.split_once('.').ok_or(AuthError::TokenInvalid)?;

        let signature = from_base64url(signature_b64).map_err(|_| AuthError::TokenInvalid)?;
        // verify_slice compares in constant time
        self.mac(id)?
            .verify_slice(&signature)
            .map_err(|_| AuthError::TokenInvalid)?;

        id.parse().map_err(|_| AuthError::TokenInvalid)
    }
}
