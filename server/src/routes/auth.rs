//! Auth routes: identity lookup and sign-out for the browser session.
//!
//! The access-token cookie is set by the identity provider's own sign-in flow;
//! these handlers only read and clear it.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use axum::extract::State;
use axum::http::StatusCode;
use axum::http::request::Parts;
use axum::response::{IntoResponse, Json};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use episodes_ui::net::types::{ACCESS_TOKEN_COOKIE, Profile};
use time::Duration;

use crate::state::AppState;

// =============================================================================
// TOKEN EXTRACTOR
// =============================================================================

/// Access token from the session cookie, if one is present and non-empty.
pub struct AccessToken(pub Option<String>);

impl<S: Send + Sync> axum::extract::FromRequestParts<S> for AccessToken {
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let jar = CookieJar::from_headers(&parts.headers);
        let token = jar
            .get(ACCESS_TOKEN_COOKIE)
            .map(Cookie::value)
            .filter(|v| !v.is_empty())
            .map(str::to_owned);
        Ok(Self(token))
    }
}

// =============================================================================
// HANDLERS
// =============================================================================

/// `GET /api/auth/me`: 200 with the profile, 401 for guests, 502 when the
/// identity service fails.
pub async fn me(State(state): State<AppState>, AccessToken(token): AccessToken) -> Result<Json<Profile>, StatusCode> {
    let token = token.ok_or(StatusCode::UNAUTHORIZED)?;
    match state.identity.fetch_profile(&token).await {
        Ok(Some(profile)) => Ok(Json(profile)),
        Ok(None) => Err(StatusCode::UNAUTHORIZED),
        Err(e) => {
            tracing::warn!(error = %e, "identity lookup failed");
            Err(StatusCode::BAD_GATEWAY)
        }
    }
}

/// `POST /api/auth/logout`: revoke upstream (best effort), clear the cookie.
pub async fn logout(State(state): State<AppState>, AccessToken(token): AccessToken) -> impl IntoResponse {
    if let Some(token) = token {
        if let Err(e) = state.identity.revoke(&token).await {
            tracing::warn!(error = %e, "token revocation failed; clearing cookie anyway");
        }
    }

    let cookie = Cookie::build((ACCESS_TOKEN_COOKIE, ""))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.config.cookie_secure)
        .max_age(Duration::ZERO);

    (CookieJar::new().add(cookie), StatusCode::NO_CONTENT)
}
