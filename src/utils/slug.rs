//! Slug generation and validation utilities.
//!
//! Generated slugs come from OS entropy encoded as URL-safe base64; custom
//! slugs supplied by callers are checked against a fixed character set and a
//! list of reserved route words.

use crate::error::AppError;
use base64::Engine as _;
use serde_json::json;

/// Length of random bytes before base64 encoding (8 characters after encoding).
const SLUG_LENGTH_BYTES: usize = 6;

/// Accepted length range for custom slugs.
pub const CUSTOM_SLUG_MIN_LEN: usize = 3;
pub const CUSTOM_SLUG_MAX_LEN: usize = 32;

/// Slugs that would shadow a top-level route.
const RESERVED_SLUGS: &[&str] = &["health", "auth", "url", "api"];

/// Generates a random 8-character slug over the URL-safe base64 alphabet.
///
/// 48 bits of entropy; the registry retries on the rare collision.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the system random number generator fails.
pub fn generate_slug() -> Result<String, AppError> {
    let mut buffer = [0u8; SLUG_LENGTH_BYTES];

    getrandom::fill(&mut buffer).map_err(|e| {
        AppError::internal(
            "Failed to generate random slug",
            json!({ "source": e.to_string() }),
        )
    })?;

    Ok(base64::engine::general_purpose::URL_SAFE_NO_PAD.encode(buffer))
}

/// Validates a caller-provided slug.
///
/// # Rules
///
/// - Length: 3-32 characters
/// - Allowed characters: ASCII letters, digits, `-` and `_`
/// - Cannot be a reserved route word
///
/// # Errors
///
/// Returns [`AppError::Validation`] (`invalid_slug`) if any rule is violated.
pub fn validate_custom_slug(slug: &str) -> Result<(), AppError> {
    if slug.len() < CUSTOM_SLUG_MIN_LEN || slug.len() > CUSTOM_SLUG_MAX_LEN {
        return Err(AppError::bad_request(
            "invalid_slug",
            "Slug must be 3-32 characters",
            json!({ "provided_length": slug.len() }),
        ));
    }

    if !slug
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        return Err(AppError::bad_request(
            "invalid_slug",
            "Slug can only contain letters, digits, hyphens and underscores",
            json!({ "slug": slug }),
        ));
    }

    if RESERVED_SLUGS.contains(&slug.to_ascii_lowercase().as_str()) {
        return Err(AppError::bad_request(
            "invalid_slug",
            "This slug is reserved",
            json!({ "slug": slug }),
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_slug_has_correct_length() {
        let slug = generate_slug().unwrap();
        assert_eq!(slug.len(), 8);
    }

    #[test]
    fn test_generate_slug_url_safe_characters() {
        let slug = generate_slug().unwrap();
        assert!(
            slug.chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
        );
        assert!(!slug.contains('='));
    }

    #[test]
    fn test_generate_slug_produces_unique_slugs() {
        let slugs: HashSet<String> = (0..1000).map(|_| generate_slug().unwrap()).collect();
        assert_eq!(slugs.len(), 1000);
    }

    #[test]
    fn test_generated_slug_passes_custom_validation() {
        for _ in 0..100 {
            let slug = generate_slug().unwrap();
            if RESERVED_SLUGS.contains(&slug.as_str()) {
                continue;
            }
            assert!(validate_custom_slug(&slug).is_ok(), "{slug}");
        }
    }

    #[test]
    fn test_validate_short_slug() {
        assert!(validate_custom_slug("abc").is_ok());
    }

    #[test]
    fn test_validate_mixed_case_and_symbols() {
        assert!(validate_custom_slug("My_Link-2024").is_ok());
    }

    #[test]
    fn test_validate_maximum_length() {
        assert!(validate_custom_slug(&"a".repeat(32)).is_ok());
        assert!(validate_custom_slug(&"a".repeat(33)).is_err());
    }

    #[test]
    fn test_validate_too_short() {
        let err = validate_custom_slug("ab").unwrap_err();
        assert_eq!(err.code(), "invalid_slug");
        assert!(err.to_string().contains("3-32 characters"));
    }

    #[test]
    fn test_validate_special_characters() {
        assert!(validate_custom_slug("my/slug").is_err());
        assert!(validate_custom_slug("my slug").is_err());
        assert!(validate_custom_slug("slug?x=1").is_err());
    }

    #[test]
    fn test_validate_reserved_slugs() {
        for &reserved in RESERVED_SLUGS {
            assert!(
                validate_custom_slug(reserved).is_err(),
                "Reserved slug '{}' should be invalid",
                reserved
            );
        }
        assert!(validate_custom_slug("HEALTH").is_err());
    }

    #[test]
    fn test_validate_empty_string() {
        assert!(validate_custom_slug("").is_err());
    }
}
