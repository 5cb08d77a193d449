//! Access-token resolution against the backend's auth API.
//!
//! Tokens are issued elsewhere; this service only looks a token up
//! (`GET /auth/v1/user`) and revokes it (`POST /auth/v1/logout`).

#[cfg(test)]
#[path = "identity_test.rs"]
mod identity_test;

use std::sync::Arc;

use async_trait::async_trait;
use episodes_ui::net::types::Profile;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::config::SupabaseConfig;

#[derive(Debug, thiserror::Error)]
pub enum IdentityError {
    #[error("identity request failed: {0}")]
    Request(String),
    #[error("identity service returned status {0}")]
    Status(u16),
    #[error("identity response parse failed: {0}")]
    Parse(String),
}

/// Resolves access tokens to profiles.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// `Ok(None)` when the token is unknown, expired, or revoked.
    async fn fetch_profile(&self, access_token: &str) -> Result<Option<Profile>, IdentityError>;

    async fn revoke(&self, access_token: &str) -> Result<(), IdentityError>;
}

pub type SharedIdentity = Arc<dyn IdentityProvider>;

// =============================================================================
// WIRE SHAPE
// =============================================================================

#[derive(Debug, Default, Deserialize)]
pub(crate) struct UserMetadata {
    username: Option<String>,
    user_name: Option<String>,
    avatar_url: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(crate) struct AppMetadata {
    role: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SupabaseUser {
    id: String,
    email: Option<String>,
    role: Option<String>,
    #[serde(default)]
    user_metadata: UserMetadata,
    #[serde(default)]
    app_metadata: AppMetadata,
}

/// Application role comes from `app_metadata.role` when set, else the token role.
pub(crate) fn profile_from_user(user: SupabaseUser) -> Profile {
    let role = user
        .app_metadata
        .role
        .or(user.role)
        .unwrap_or_else(|| "authenticated".to_owned());
    Profile {
        id: user.id,
        email: user.email,
        username: user.user_metadata.username.or(user.user_metadata.user_name),
        avatar_url: user.user_metadata.avatar_url,
        role,
    }
}

// =============================================================================
// SUPABASE IDENTITY
// =============================================================================

pub struct SupabaseIdentity {
    http: reqwest::Client,
    auth_url: String,
    anon_key: String,
}

impl SupabaseIdentity {
    #[must_use]
    pub fn new(http: reqwest::Client, config: &SupabaseConfig) -> Self {
        Self {
            http,
            auth_url: format!("{}/auth/v1", config.url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
        }
    }
}

#[async_trait]
impl IdentityProvider for SupabaseIdentity {
    async fn fetch_profile(&self, access_token: &str) -> Result<Option<Profile>, IdentityError> {
        let response = self
            .http
            .get(format!("{}/user", self.auth_url))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        match response.status().as_u16() {
            401 | 403 => return Ok(None),
            200..=299 => {}
            other => return Err(IdentityError::Status(other)),
        }

        let user: SupabaseUser = response
            .json()
            .await
            .map_err(|e| IdentityError::Parse(e.to_string()))?;
        Ok(Some(profile_from_user(user)))
    }

    async fn revoke(&self, access_token: &str) -> Result<(), IdentityError> {
        let response = self
            .http
            .post(format!("{}/logout", self.auth_url))
            .header("apikey", &self.anon_key)
            .header(AUTHORIZATION, format!("Bearer {access_token}"))
            .send()
            .await
            .map_err(|e| IdentityError::Request(e.to_string()))?;

        let status = response.status().as_u16();
        if (200..300).contains(&status) || status == 401 {
            Ok(())
        } else {
            Err(IdentityError::Status(status))
        }
    }
}

/// No auth backend: every visitor is a guest.
pub struct UnconfiguredIdentity;

#[async_trait]
impl IdentityProvider for UnconfiguredIdentity {
    async fn fetch_profile(&self, _access_token: &str) -> Result<Option<Profile>, IdentityError> {
        Ok(None)
    }

    async fn revoke(&self, _access_token: &str) -> Result<(), IdentityError> {
        Ok(())
    }
}
