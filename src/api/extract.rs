//! Body extractors whose rejections use the service error format.

use axum::extract::FromRequest;

use crate::error::AppError;

/// `axum::Json` that rejects malformed bodies with `invalid_input`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct AppJson<T>(pub T);
