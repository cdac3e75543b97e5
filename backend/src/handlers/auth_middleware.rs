use std::future::Future;
use std::sync::Arc;
use axum::{
    extract::FromRequestParts,
    http::{header::AUTHORIZATION, request::Parts},
};
use sha2::{Digest, Sha256};
use tracing::warn;

use crate::error::ApiError;
use crate::AppState;

/// Proof that the request carried the inbox bearer token. Handlers that take
/// this extractor are only reached with a matching `Authorization` header.
#[derive(Clone, Copy, Debug)]
pub struct InboxAccess;

fn bearer_token(parts: &Parts) -> Option<&str> {
    parts
        .headers
        .get(AUTHORIZATION)
        .and_then(|header| header.to_str().ok())
        .and_then(|header| header.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

// Compares digests so the comparison time does not depend on where the
// supplied token first differs from the secret.
fn token_matches(supplied: &str, expected: &str) -> bool {
    Sha256::digest(supplied.as_bytes()) == Sha256::digest(expected.as_bytes())
}

impl FromRequestParts<Arc<AppState>> for InboxAccess {
    type Rejection = ApiError;

    fn from_request_parts(
        parts: &mut Parts,
        state: &Arc<AppState>,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        let expected = state.config.admin_token.clone();
        let supplied = bearer_token(parts).map(str::to_owned);
        async move {
            let expected = expected.ok_or(ApiError::InboxNotConfigured)?;

            let supplied = supplied.ok_or_else(|| {
                ApiError::Unauthorized("No authorization token provided".to_string())
            })?;

            if !token_matches(&supplied, &expected) {
                warn!("Rejected contact inbox request with an invalid token");
                return Err(ApiError::Unauthorized("Invalid token".to_string()));
            }

            Ok(InboxAccess)
        }
    }
}
