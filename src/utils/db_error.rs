//! Mapping of PostgreSQL constraint violations to domain errors.

use crate::error::AppError;

/// Unique constraint guarding `users.email`.
pub const USERS_EMAIL_KEY: &str = "users_email_key";
/// Unique constraint guarding `short_links.slug`.
pub const SHORT_LINKS_SLUG_KEY: &str = "short_links_slug_key";

/// Returns the name of the violated unique constraint, if `e` is one.
pub fn unique_violation_constraint(e: &sqlx::Error) -> Option<&str> {
    let db_err = e.as_database_error()?;

    if !db_err.is_unique_violation() {
        return None;
    }

    db_err.constraint()
}

/// Converts an insert error into the matching conflict, falling back to
/// [`AppError::Internal`] for anything else.
pub fn map_insert_error(e: sqlx::Error, slug: Option<&str>) -> AppError {
    match unique_violation_constraint(&e) {
        Some(USERS_EMAIL_KEY) => AppError::duplicate_identity(),
        Some(SHORT_LINKS_SLUG_KEY) => AppError::slug_taken(slug.unwrap_or_default()),
        _ => e.into(),
    }
}
