//! Handlers for account endpoints.

use axum::{Json, extract::State, http::StatusCode};
use validator::Validate;

use crate::api::dto::auth::{
    AuthResponse, LoginRequest, RegisterRequest, UserResponse, VerifyResponse,
};
use crate::api::extract::AppJson;
use crate::api::middleware::BearerToken;
use crate::error::AppError;
use crate::state::AppState;

/// Creates an account and returns it with its first token.
///
/// # Endpoint
///
/// `POST /auth/register`
///
/// # Request Body
///
/// ```json
/// { "email": "alice@example.com", "password": "correct horse" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `invalid_input` for a malformed payload and
/// `duplicate_identity` if the email is already registered.
pub async fn register_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<RegisterRequest>,
) -> Result<(StatusCode, Json<AuthResponse>), AppError> {
    payload.validate()?;

    let session = state
        .auth_service
        .register(&payload.email, &payload.password)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthResponse {
            user: session.user.into(),
            token: session.token,
        }),
    ))
}

/// Exchanges credentials for a fresh token.
///
/// # Endpoint
///
/// `POST /auth/login`
///
/// # Errors
///
/// Returns 400 Bad Request with `invalid_credentials` whether the email is
/// unknown or the password is wrong.
pub async fn login_handler(
    State(state): State<AppState>,
    AppJson(payload): AppJson<LoginRequest>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate()?;

    let session = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    Ok(Json(AuthResponse {
        user: session.user.into(),
        token: session.token,
    }))
}

/// Returns the account behind the bearer token.
///
/// # Endpoint
///
/// `GET /auth/verify`
///
/// # Errors
///
/// Returns 401 Unauthorized with `missing_token` or `invalid_token`.
pub async fn verify_handler(
    State(state): State<AppState>,
    BearerToken(token): BearerToken,
) -> Result<Json<VerifyResponse>, AppError> {
    let user = state.auth_service.verify(token.as_deref()).await?;

    Ok(Json(VerifyResponse {
        user: UserResponse::from(user),
    }))
}
