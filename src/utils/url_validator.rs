//! Target URL validation.
//!
//! Short links store the target exactly as submitted; this module only decides
//! whether the submission is acceptable.

use url::Url;

/// Longest target URL accepted, in bytes.
pub const MAX_URL_LENGTH: usize = 2048;

/// Reasons a target URL is rejected.
#[derive(Debug, thiserror::Error)]
pub enum TargetUrlError {
    #[error("Invalid URL format: {0}")]
    InvalidFormat(String),

    #[error("Only HTTP and HTTPS protocols are allowed")]
    UnsupportedProtocol,

    #[error("URL must include a host")]
    MissingHost,

    #[error("URL exceeds 2048 characters")]
    TooLong,
}

/// Checks that `input` is a well-formed absolute HTTP(S) URL.
///
/// # Rules
///
/// 1. Must parse as an absolute URL (relative references are rejected)
/// 2. Scheme must be `http` or `https`
/// 3. Must have a non-empty host
/// 4. At most [`MAX_URL_LENGTH`] bytes
///
/// # Security
///
/// Rejects `javascript:`, `data:`, `file:` and other schemes that would turn
/// the redirect endpoint into an injection vector.
///
/// # Examples
///
/// ```ignore
/// assert!(validate_target_url("https://example.com/path?q=1").is_ok());
/// assert!(validate_target_url("example.com").is_err());
/// assert!(validate_target_url("javascript:alert(1)").is_err());
/// ```
pub fn validate_target_url(input: &str) -> Result<(), TargetUrlError> {
    if input.len() > MAX_URL_LENGTH {
        return Err(TargetUrlError::TooLong);
    }

    let url = Url::parse(input).map_err(|e| TargetUrlError::InvalidFormat(e.to_string()))?;

    match url.scheme() {
        "http" | "https" => {}
        _ => return Err(TargetUrlError::UnsupportedProtocol),
    }

    match url.host_str() {
        Some(host) if !host.is_empty() => Ok(()),
        _ => Err(TargetUrlError::MissingHost),
    }
}
