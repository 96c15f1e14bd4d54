//! Application error type and its HTTP mapping.
//!
//! Every failure in the service is an [`AppError`]. Handlers return
//! `Result<_, AppError>` and the [`IntoResponse`] impl turns the error into a
//! JSON body of the form:
//!
//! ```json
//! { "error": { "code": "slug_taken", "message": "...", "details": {} } }
//! ```

use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::{HeaderValue, StatusCode, header},
    response::{IntoResponse, Response},
};
use serde::Serialize;
use serde_json::{Value, json};

#[derive(Serialize)]
struct ErrorBody {
    error: ErrorInfo,
}

/// Serializable error payload.
#[derive(Debug, Serialize)]
pub struct ErrorInfo {
    pub code: &'static str,
    pub message: String,
    pub details: Value,
}

/// Service-wide error taxonomy.
///
/// `code` is the short machine-readable reason returned to clients
/// (`invalid_url`, `slug_taken`, `invalid_token`, ...).
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{message}")]
    Validation {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    Conflict {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    Unauthorized {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    NotFound {
        code: &'static str,
        message: String,
        details: Value,
    },
    #[error("{message}")]
    Internal {
        code: &'static str,
        message: String,
        details: Value,
    },
}

impl AppError {
    pub fn bad_request(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Validation {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn conflict(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Conflict {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn unauthorized(code: &'static str, message: impl Into<String>, details: Value) -> Self {
        Self::Unauthorized {
            code,
            message: message.into(),
            details,
        }
    }

    pub fn not_found(message: impl Into<String>, details: Value) -> Self {
        Self::NotFound {
            code: "not_found",
            message: message.into(),
            details,
        }
    }

    pub fn internal(message: impl Into<String>, details: Value) -> Self {
        Self::Internal {
            code: "internal_error",
            message: message.into(),
            details,
        }
    }

    pub fn invalid_url(reason: impl Into<String>) -> Self {
        Self::bad_request(
            "invalid_url",
            "Invalid URL",
            json!({ "reason": reason.into() }),
        )
    }

    pub fn slug_taken(slug: &str) -> Self {
        Self::conflict(
            "slug_taken",
            "Slug already exists. Choose another one.",
            json!({ "slug": slug }),
        )
    }

    pub fn duplicate_identity() -> Self {
        Self::conflict("duplicate_identity", "User already exists", json!({}))
    }

    pub fn invalid_credentials() -> Self {
        Self::bad_request("invalid_credentials", "Invalid credentials", json!({}))
    }

    pub fn missing_token() -> Self {
        Self::unauthorized(
            "missing_token",
            "No token provided",
            json!({ "reason": "Authorization header is missing" }),
        )
    }

    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::unauthorized(
            "invalid_token",
            "Token is not valid",
            json!({ "reason": reason.into() }),
        )
    }

    /// The short machine-readable reason for this error.
    pub fn code(&self) -> &'static str {
        match self {
            AppError::Validation { code, .. }
            | AppError::Conflict { code, .. }
            | AppError::Unauthorized { code, .. }
            | AppError::NotFound { code, .. }
            | AppError::Internal { code, .. } => *code,
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation { .. } | AppError::Conflict { .. } => StatusCode::BAD_REQUEST,
            AppError::Unauthorized { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Internal { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn to_error_info(&self) -> ErrorInfo {
        match self {
            AppError::Validation {
                code,
                message,
                details,
            }
            | AppError::Conflict {
                code,
                message,
                details,
            }
            | AppError::Unauthorized {
                code,
                message,
                details,
            }
            | AppError::NotFound {
                code,
                message,
                details,
            } => ErrorInfo {
                code: *code,
                message: message.clone(),
                details: details.clone(),
            },
            // Store failures carry driver text; keep it in the logs only.
            AppError::Internal { code, message, .. } => ErrorInfo {
                code: *code,
                message: message.clone(),
                details: json!({}),
            },
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        if let AppError::Internal { message, details, .. } = &self {
            tracing::error!(%message, %details, "Request failed with internal error");
        }

        let status = self.status_code();
        let body = ErrorBody {
            error: self.to_error_info(),
        };

        let mut response = (status, Json(body)).into_response();
        if status == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Bearer"));
        }
        response
    }
}

impl From<sqlx::Error> for AppError {
    fn from(e: sqlx::Error) -> Self {
        AppError::internal("Database error", json!({ "source": e.to_string() }))
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        let details = serde_json::to_value(e.field_errors()).unwrap_or_else(|_| json!({}));
        AppError::bad_request("invalid_input", "Request validation failed", details)
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        AppError::bad_request(
            "invalid_input",
            "Malformed request body",
            json!({ "reason": rejection.body_text() }),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_conflict_maps_to_bad_request() {
        assert_eq!(
            AppError::slug_taken("abc").status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AppError::duplicate_identity().status_code(),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_codes() {
        assert_eq!(AppError::slug_taken("abc").code(), "slug_taken");
        assert_eq!(AppError::missing_token().code(), "missing_token");
        assert_eq!(AppError::invalid_token("expired").code(), "invalid_token");
        assert_eq!(AppError::not_found("gone", json!({})).code(), "not_found");
        assert_eq!(AppError::invalid_url("no scheme").code(), "invalid_url");
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let err = AppError::internal("Database error", json!({ "source": "pool timed out" }));
        let info = err.to_error_info();
        assert_eq!(info.code, "internal_error");
        assert_eq!(info.details, json!({}));
    }

    #[test]
    fn test_unauthorized_response_has_challenge_header() {
        let response = AppError::missing_token().into_response();
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(
            response.headers().get(header::WWW_AUTHENTICATE).unwrap(),
            "Bearer"
        );
    }

    #[test]
    fn test_display_uses_message() {
        let err = AppError::invalid_credentials();
        assert_eq!(err.to_string(), "Invalid credentials");
    }
}
