//! Handlers for link management endpoints (create, list, delete).

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde_json::json;
use uuid::Uuid;

use crate::api::dto::link::{LinkResponse, MessageResponse, ShortenRequest};
use crate::api::extract::AppJson;
use crate::domain::entities::Identity;
use crate::error::AppError;
use crate::state::AppState;

/// Creates a short link.
///
/// # Endpoint
///
/// `POST /url/shorten`
///
/// # Authentication
///
/// Optional. With a valid bearer token the link is owned by the caller;
/// without one it is anonymous. A token that is supplied but invalid is
/// rejected rather than ignored.
///
/// # Request Body
///
/// ```json
/// { "url": "https://example.com/some/long/path", "slug": "my-link" }
/// ```
///
/// # Errors
///
/// Returns 400 Bad Request with `invalid_url`, `invalid_slug` or `slug_taken`.
pub async fn shorten_handler(
    State(state): State<AppState>,
    identity: Option<Identity>,
    AppJson(payload): AppJson<ShortenRequest>,
) -> Result<(StatusCode, Json<LinkResponse>), AppError> {
    let link = state
        .link_service
        .shorten(&payload.url, payload.slug.as_deref(), identity.as_ref())
        .await?;

    let short_url = state.link_service.short_url(&link.slug);

    Ok((StatusCode::CREATED, Json(LinkResponse::new(link, short_url))))
}

/// Lists the caller's links, newest first.
///
/// # Endpoint
///
/// `GET /url/user`
pub async fn list_links_handler(
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<Vec<LinkResponse>>, AppError> {
    let links = state.link_service.list_owned(&identity).await?;

    let items = links
        .into_iter()
        .map(|link| {
            let short_url = state.link_service.short_url(&link.slug);
            LinkResponse::new(link, short_url)
        })
        .collect();

    Ok(Json(items))
}

/// Permanently deletes one of the caller's links.
///
/// # Endpoint
///
/// `DELETE /url/{id}`
///
/// # Errors
///
/// Returns 404 Not Found if the id is malformed, unknown, or owned by someone
/// else.
pub async fn delete_link_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    identity: Identity,
) -> Result<Json<MessageResponse>, AppError> {
    let id = Uuid::parse_str(&id).map_err(|_| {
        AppError::not_found("URL not found or unauthorized", json!({ "id": id }))
    })?;

    state.link_service.delete_owned(id, &identity).await?;

    Ok(Json(MessageResponse {
        message: "URL deleted successfully",
    }))
}
