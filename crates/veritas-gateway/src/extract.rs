//! Caller principal extraction.
//!
//! The registry's execution environment supplies the caller identity per
//! call; over HTTP that environment is this gateway, and the principal
//! travels in the `x-identity` header as a 40-hex-digit address (optional
//! `0x` prefix). Routes that mutate state reject requests without it before
//! the registry is consulted.

use crate::error::ApiError;
use axum::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use veritas_registry::prelude::Identity;

/// Header carrying the caller principal.
pub const IDENTITY_HEADER: &str = "x-identity";

/// Extractor for the caller principal on mutating routes.
#[derive(Debug, Clone, Copy)]
pub struct CallerIdentity(pub Identity);

#[async_trait]
impl<S: Send + Sync> FromRequestParts<S> for CallerIdentity {
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let value = parts
            .headers
            .get(IDENTITY_HEADER)
            .ok_or_else(|| ApiError::unauthenticated("missing x-identity header"))?;
        let text = value
            .to_str()
            .map_err(|_| ApiError::bad_request("x-identity header is not valid ascii"))?;
        let identity = text
            .parse::<Identity>()
            .map_err(|err| ApiError::bad_request(format!("invalid x-identity header: {err}")))?;
        Ok(Self(identity))
    }
}
