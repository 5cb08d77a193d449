//! Shared DTOs for the client/server boundary.
//!
//! DESIGN
//! ======
//! These types mirror the rows and JSON bodies the backend returns so serde
//! round-trips stay lossless between SSR, server functions, and hydration.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Name of the cookie carrying the signed-in user's backend access token.
pub const ACCESS_TOKEN_COOKIE: &str = "sb-access-token";

/// Role value that unlocks the admin area.
pub const ADMIN_ROLE: &str = "admin";

/// The authenticated user's identity record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Profile {
    /// Identity-provider user id.
    pub id: String,
    pub email: Option<String>,
    pub username: Option<String>,
    pub avatar_url: Option<String>,
    /// Application role (`"authenticated"` for ordinary users).
    #[serde(default)]
    pub role: String,
}

impl Profile {
    /// Name shown in the header: username, then email, then a generic label.
    #[must_use]
    pub fn display_name(&self) -> &str {
        self.username
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or(self.email.as_deref())
            .unwrap_or("Member")
    }

    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == ADMIN_ROLE
    }
}

/// A series as offered in pickers and listings (`select id, title`).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesOption {
    pub id: String,
    pub title: String,
}

/// A public playlist card.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Playlist {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub cover_url: Option<String>,
}

/// Row counts shown on the admin dashboard.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogStats {
    pub series: u64,
    pub episodes: u64,
    pub playlists: u64,
    pub profiles: u64,
}

/// Validated payload for inserting an episode.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewEpisode {
    pub series_id: String,
    pub title: String,
    pub episode_number: u32,
    pub video_url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub thumbnail_url: Option<String>,
}

impl NewEpisode {
    /// Check field-level constraints shared by the form and the server function.
    ///
    /// # Errors
    ///
    /// Returns the user-facing message for the first violated constraint.
    pub fn check(&self) -> Result<(), &'static str> {
        if self.series_id.trim().is_empty() {
            return Err("Choose a series.");
        }
        if self.title.trim().is_empty() {
            return Err("Enter a title.");
        }
        if self.episode_number == 0 {
            return Err("Episode number must be 1 or higher.");
        }
        if !is_http_url(&self.video_url) {
            return Err("Video URL must be an http(s) link.");
        }
        if self.thumbnail_url.as_deref().is_some_and(|u| !is_http_url(u)) {
            return Err("Thumbnail URL must be an http(s) link.");
        }
        Ok(())
    }
}

pub(crate) fn is_http_url(raw: &str) -> bool {
    url::Url::parse(raw.trim())
        .map(|u| matches!(u.scheme(), "http" | "https") && u.host_str().is_some())
        .unwrap_or(false)
}
