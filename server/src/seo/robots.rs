//! robots.txt policy.

#[cfg(test)]
#[path = "robots_test.rs"]
mod robots_test;

use std::fmt::Write;

use serde::Serialize;

use crate::config::resolve_site_url;

/// Path prefixes crawlers must not visit.
pub const DISALLOWED_PATHS: [&str; 4] = ["/admin/", "/profile/", "/api/", "/auth/"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RobotsRule {
    pub user_agent: String,
    pub allow: String,
    pub disallow: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RobotsPolicy {
    pub rules: Vec<RobotsRule>,
    pub sitemap: String,
}

/// Build the crawler policy for the given base URL (default when unset).
#[must_use]
pub fn robots_policy(site_url: Option<&str>) -> RobotsPolicy {
    let base = resolve_site_url(site_url);
    RobotsPolicy {
        rules: vec![RobotsRule {
            user_agent: "*".to_owned(),
            allow: "/".to_owned(),
            disallow: DISALLOWED_PATHS.iter().map(|p| (*p).to_owned()).collect(),
        }],
        sitemap: format!("{base}/sitemap.xml"),
    }
}

impl RobotsPolicy {
    /// Render as a robots.txt document.
    #[must_use]
    pub fn to_text(&self) -> String {
        let mut out = String::new();
        for rule in &self.rules {
            let _ = writeln!(out, "User-Agent: {}", rule.user_agent);
            let _ = writeln!(out, "Allow: {}", rule.allow);
            for path in &rule.disallow {
                let _ = writeln!(out, "Disallow: {path}");
            }
            out.push('\n');
        }
        let _ = writeln!(out, "Sitemap: {}", self.sitemap);
        out
    }
}
