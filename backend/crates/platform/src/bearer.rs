//! Bearer credential extraction
//!
//! Reads the token from an `Authorization: Bearer <token>` header.

use http::{HeaderMap, header};

/// Error when extracting a bearer token
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BearerError {
    #[error("Missing Authorization header")]
    Missing,
    #[error("Malformed Authorization header")]
    Malformed,
}

/// Extract the bearer token from request headers
///
/// The scheme is matched case-insensitively; surrounding whitespace is ignored.
///
/// ## Returns
/// * `Ok(String)` - The raw token
/// * `Err(BearerError::Missing)` - No `Authorization` header
/// * `Err(BearerError::Malformed)` - Non-ASCII value, other scheme, or empty token
pub fn extract_bearer(headers: &HeaderMap) -> Result<String, BearerError> {
    let value = headers
        .get(header::AUTHORIZATION)
        .ok_or(BearerError::Missing)?
        .to_str()
        .map_err(|_| BearerError::Malformed)?
        .trim();

    let (scheme, token) = value.split_once(' ').ok_or(BearerError::Malformed)?;
    if !scheme.eq_ignore_ascii_case("bearer") {
        return Err(BearerError::Malformed);
    }

    let token = token.trim();
    if token.is_empty() {
        return Err(BearerError::Malformed);
    }
    Ok(token.to_string())
}

/// `Authorization` header value for a token
pub fn bearer_value(token: &str) -> String {
    format!("Bearer {token}")
}

#[cfg(test)]
mod tests {
    use super::*;
    use http::HeaderValue;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn test_extracts_token() {
        assert_eq!(extract_bearer(&headers("Bearer abc.def")).unwrap(), "abc.def");
        assert_eq!(extract_bearer(&headers("bearer  abc ")).unwrap(), "abc");
    }

    #[test]
    fn test_missing_header() {
        assert_eq!(extract_bearer(&HeaderMap::new()), Err(BearerError::Missing));
    }

    #[test]
    fn test_malformed_header() {
        assert_eq!(extract_bearer(&headers("Basic dXNlcjpwYXNz")), Err(BearerError::Malformed));
        assert_eq!(extract_bearer(&headers("Bearer")), Err(BearerError::Malformed));
        assert_eq!(extract_bearer(&headers("Bearer   ")), Err(BearerError::Malformed));
    }

    #[test]
    fn test_bearer_value() {
        assert_eq!(bearer_value("t0k"), "Bearer t0k");
    }
}
