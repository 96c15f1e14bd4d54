//! Handler for short URL redirect.

use axum::{
    extract::{Path, State},
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};

use crate::error::AppError;
use crate::state::AppState;

/// Redirects a slug to its original URL and counts the visit.
///
/// # Endpoint
///
/// `GET /{slug}`
///
/// # Responses
///
/// - **302 Found** with `Location` set to the stored URL
/// - **404 Not Found** with an empty body for an unknown slug
/// - **500** if the store fails
pub async fn redirect_handler(
    Path(slug): Path<String>,
    State(state): State<AppState>,
) -> Response {
    match state.link_service.resolve(&slug).await {
        Ok(link) => {
            tracing::debug!(slug = %slug, visits = link.visits, "Redirecting");
            (StatusCode::FOUND, [(header::LOCATION, link.original)]).into_response()
        }
        Err(AppError::NotFound { .. }) => StatusCode::NOT_FOUND.into_response(),
        Err(e) => e.into_response(),
    }
}
