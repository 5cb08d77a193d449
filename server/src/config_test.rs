use std::collections::HashMap;

use super::*;

fn config_from(pairs: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
    let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    ServerConfig::from_lookup(|key| vars.get(key).cloned())
}

#[test]
fn defaults_when_environment_empty() {
    let cfg = config_from(&[]).unwrap();
    assert_eq!(cfg.site_url, DEFAULT_SITE_URL);
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.supabase, None);
    assert_eq!(
        cfg.timeouts,
        HttpTimeouts {
            request_secs: DEFAULT_HTTP_REQUEST_TIMEOUT_SECS,
            connect_secs: DEFAULT_HTTP_CONNECT_TIMEOUT_SECS
        }
    );
    assert!(cfg.cookie_secure);
}

#[test]
fn parses_overrides() {
    let cfg = config_from(&[
        ("NEXT_PUBLIC_SITE_URL", "http://localhost:3000/"),
        ("PORT", "8080"),
        ("SUPABASE_URL", "https://abcd.supabase.co/"),
        ("SUPABASE_ANON_KEY", " anon-key "),
        ("HTTP_REQUEST_TIMEOUT_SECS", "30"),
        ("HTTP_CONNECT_TIMEOUT_SECS", "2"),
    ])
    .unwrap();
    assert_eq!(cfg.site_url, "http://localhost:3000");
    assert_eq!(cfg.port, 8080);
    assert_eq!(
        cfg.supabase,
        Some(SupabaseConfig { url: "https://abcd.supabase.co".to_owned(), anon_key: "anon-key".to_owned() })
    );
    assert_eq!(cfg.timeouts, HttpTimeouts { request_secs: 30, connect_secs: 2 });
    assert!(!cfg.cookie_secure, "http site URL should not imply secure cookies");
}

#[test]
fn cookie_secure_explicit_override() {
    let cfg = config_from(&[("NEXT_PUBLIC_SITE_URL", "http://localhost:3000"), ("COOKIE_SECURE", "yes")]).unwrap();
    assert!(cfg.cookie_secure);

    let cfg = config_from(&[("COOKIE_SECURE", "off")]).unwrap();
    assert!(!cfg.cookie_secure);
}

#[test]
fn invalid_values_are_rejected() {
    let err = config_from(&[("PORT", "eighty")]).unwrap_err();
    assert_eq!(err.to_string(), r#"invalid PORT: "eighty""#);

    let err = config_from(&[("COOKIE_SECURE", "maybe")]).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "COOKIE_SECURE", .. }));
}

#[test]
fn half_configured_backend_is_rejected() {
    let err = config_from(&[("SUPABASE_URL", "https://abcd.supabase.co")]).unwrap_err();
    assert_eq!(err.to_string(), "SUPABASE_URL is set but SUPABASE_ANON_KEY is not");

    let err = config_from(&[("SUPABASE_ANON_KEY", "k")]).unwrap_err();
    assert!(matches!(err, ConfigError::Incomplete { present: "SUPABASE_ANON_KEY", .. }));
}

#[test]
fn blank_backend_pair_counts_as_unset() {
    let cfg = config_from(&[("SUPABASE_URL", "  "), ("SUPABASE_ANON_KEY", "")]).unwrap();
    assert_eq!(cfg.supabase, None);
}

#[test]
fn resolve_site_url_defaults_and_trims() {
    assert_eq!(resolve_site_url(None), "https://hentaiclick.tv");
    assert_eq!(resolve_site_url(Some("")), "https://hentaiclick.tv");
    assert_eq!(resolve_site_url(Some("   ")), "https://hentaiclick.tv");
    assert_eq!(resolve_site_url(Some("https://example.com")), "https://example.com");
    assert_eq!(resolve_site_url(Some("https://example.com/")), "https://example.com");
}

#[test]
fn parse_bool_variants() {
    for raw in ["1", "true", "YES", " On "] {
        assert_eq!(parse_bool(raw), Some(true), "expected true for {raw:?}");
    }
    for raw in ["0", "false", "No", "off"] {
        assert_eq!(parse_bool(raw), Some(false), "expected false for {raw:?}");
    }
    assert_eq!(parse_bool(""), None);
    assert_eq!(parse_bool("maybe"), None);
}
