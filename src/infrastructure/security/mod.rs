//! Credential primitives: password hashing and bearer token signing.
//!
//! - [`password`] - Argon2id hashing and verification
//! - [`jwt`] - HS256 token issuing and validation

pub mod jwt;
pub mod password;
