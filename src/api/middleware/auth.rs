//! Bearer token authentication extractors.
//!
//! # Header Format
//!
//! ```text
//! Authorization: Bearer <token>
//! ```
//!
//! Handlers opt in per argument:
//!
//! - `identity: Identity` - the route requires a valid token
//! - `identity: Option<Identity>` - a token is optional, but one that is
//!   supplied must be valid
//! - [`BearerToken`] - the raw token, for handlers that report on it themselves
//!
//! Rejections are [`AppError`]s, so a 401 carries `WWW-Authenticate: Bearer`.

use axum::{
    extract::{FromRequestParts, OptionalFromRequestParts},
    http::{header, request::Parts},
};
use axum_auth::AuthBearer;

use crate::{domain::entities::Identity, error::AppError, state::AppState};

/// The bearer token of a request, or `None` without an `Authorization` header.
#[derive(Debug)]
pub struct BearerToken(pub Option<String>);

impl<S> FromRequestParts<S> for BearerToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        if !parts.headers.contains_key(header::AUTHORIZATION) {
            return Ok(Self(None));
        }

        let AuthBearer(token) = AuthBearer::from_request_parts(parts, &())
            .await
            .map_err(|_| AppError::invalid_token("Authorization header is not a Bearer token"))?;

        Ok(Self(Some(token)))
    }
}

impl FromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let BearerToken(token) = BearerToken::from_request_parts(parts, state).await?;
        let token = token.ok_or_else(AppError::missing_token)?;

        state.auth_service.authenticate(&token).await
    }
}

impl OptionalFromRequestParts<AppState> for Identity {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Option<Self>, Self::Rejection> {
        match BearerToken::from_request_parts(parts, state).await? {
            BearerToken(Some(token)) => state.auth_service.authenticate(&token).await.map(Some),
            BearerToken(None) => Ok(None),
        }
    }
}
