//! Utility functions shared across layers.
//!
//! - [`slug`] - Slug generation and validation
//! - [`url_validator`] - Target URL validation
//! - [`db_error`] - PostgreSQL constraint violation mapping

pub mod db_error;
pub mod slug;
pub mod url_validator;
