//! Core domain entities representing the business data model.
//!
//! # Entity Types
//!
//! - [`User`] - A registered account
//! - [`ShortLink`] - A slug to target URL mapping with its visit counter
//! - [`Identity`] - The authenticated caller resolved from a bearer token
//!
//! Entities follow the "New Type" pattern with separate structs for creation
//! (`NewUser`, `NewShortLink`).

pub mod identity;
pub mod link;
pub mod user;

pub use identity::Identity;
pub use link::{NewShortLink, ShortLink};
pub use user::{NewUser, User};
