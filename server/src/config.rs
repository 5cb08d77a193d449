//! Server configuration parsed from environment variables.
//!
//! Every option has a default except the backend pair, which must be set
//! together or not at all. With no backend configured the site still serves
//! pages; catalog listings degrade to empty and everyone is a guest.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_SITE_URL: &str = "https://hentaiclick.tv";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_HTTP_REQUEST_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_HTTP_CONNECT_TIMEOUT_SECS: u64 = 5;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// A variable is set but cannot be parsed.
    #[error("invalid {var}: {value:?}")]
    Invalid { var: &'static str, value: String },

    /// One half of a required pair is missing.
    #[error("{present} is set but {missing} is not")]
    Incomplete { present: &'static str, missing: &'static str },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HttpTimeouts {
    pub request_secs: u64,
    pub connect_secs: u64,
}

/// Backend-as-a-service project endpoint and public key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SupabaseConfig {
    /// Project base URL without trailing slash.
    pub url: String,
    pub anon_key: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Public base URL used in robots.txt and the sitemap.
    pub site_url: String,
    pub port: u16,
    pub supabase: Option<SupabaseConfig>,
    pub timeouts: HttpTimeouts,
    /// Whether cookies set by the server carry the `Secure` attribute.
    pub cookie_secure: bool,
}

impl ServerConfig {
    /// Build typed config from the process environment.
    ///
    /// Optional:
    /// - `NEXT_PUBLIC_SITE_URL`: default `https://hentaiclick.tv`
    /// - `PORT`: default 3000
    /// - `SUPABASE_URL` + `SUPABASE_ANON_KEY`: both or neither
    /// - `HTTP_REQUEST_TIMEOUT_SECS`: default 15
    /// - `HTTP_CONNECT_TIMEOUT_SECS`: default 5
    /// - `COOKIE_SECURE`: default true when the site URL is `https://`
    ///
    /// # Errors
    ///
    /// Returns an error for unparsable numbers/booleans or a half-set backend pair.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build typed config from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Same as [`ServerConfig::from_env`].
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let site_url = resolve_site_url(lookup("NEXT_PUBLIC_SITE_URL").as_deref());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let supabase = parse_supabase(lookup("SUPABASE_URL"), lookup("SUPABASE_ANON_KEY"))?;
        let timeouts = HttpTimeouts {
            request_secs: parse_or(
                "HTTP_REQUEST_TIMEOUT_SECS",
                lookup("HTTP_REQUEST_TIMEOUT_SECS"),
                DEFAULT_HTTP_REQUEST_TIMEOUT_SECS,
            )?,
            connect_secs: parse_or(
                "HTTP_CONNECT_TIMEOUT_SECS",
                lookup("HTTP_CONNECT_TIMEOUT_SECS"),
                DEFAULT_HTTP_CONNECT_TIMEOUT_SECS,
            )?,
        };
        let cookie_secure = match lookup("COOKIE_SECURE") {
            Some(raw) => parse_bool(&raw).ok_or(ConfigError::Invalid { var: "COOKIE_SECURE", value: raw })?,
            None => site_url.starts_with("https://"),
        };

        Ok(Self { site_url, port, supabase, timeouts, cookie_secure })
    }
}

/// Public base URL: the configured value without trailing `/`, or the default
/// when unset or blank.
#[must_use]
pub fn resolve_site_url(raw: Option<&str>) -> String {
    raw.map(str::trim)
        .filter(|s| !s.is_empty())
        .map_or_else(|| DEFAULT_SITE_URL.to_owned(), |s| s.trim_end_matches('/').to_owned())
}

pub(crate) fn parse_bool(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

fn parse_or<T: std::str::FromStr>(var: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|_| ConfigError::Invalid { var, value }),
    }
}

fn parse_supabase(url: Option<String>, key: Option<String>) -> Result<Option<SupabaseConfig>, ConfigError> {
    let url = url.filter(|s| !s.trim().is_empty());
    let key = key.filter(|s| !s.trim().is_empty());
    match (url, key) {
        (None, None) => Ok(None),
        (Some(_), None) => Err(ConfigError::Incomplete { present: "SUPABASE_URL", missing: "SUPABASE_ANON_KEY" }),
        (None, Some(_)) => Err(ConfigError::Incomplete { present: "SUPABASE_ANON_KEY", missing: "SUPABASE_URL" }),
        (Some(url), Some(anon_key)) => {
            Ok(Some(SupabaseConfig { url: url.trim().trim_end_matches('/').to_owned(), anon_key: anon_key.trim().to_owned() }))
        }
    }
}
