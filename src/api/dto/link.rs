//! DTOs for link endpoints.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::ShortLink;

/// Request to shorten a URL.
///
/// The URL and slug are checked by the link service so that their failures
/// carry the `invalid_url` and `invalid_slug` codes.
#[derive(Debug, Deserialize)]
pub struct ShortenRequest {
    pub url: String,

    /// Desired slug; a random one is generated when absent.
    #[serde(default)]
    pub slug: Option<String>,
}

/// JSON representation of a short link.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LinkResponse {
    pub id: Uuid,
    pub original: String,
    pub short_url: String,
    pub slug: String,
    pub visits: i64,
    pub created_at: DateTime<Utc>,
}

impl LinkResponse {
    pub fn new(link: ShortLink, short_url: String) -> Self {
        Self {
            id: link.id,
            original: link.original,
            short_url,
            slug: link.slug,
            visits: link.visits,
            created_at: link.created_at,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}
