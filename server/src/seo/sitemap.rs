//! sitemap.xml for the public routes.

#[cfg(test)]
#[path = "sitemap_test.rs"]
mod sitemap_test;

use std::fmt::Write;

/// Indexable routes, relative to the site root.
pub const PUBLIC_ROUTES: [&str; 2] = ["/", "/playlists"];

/// Render a sitemap listing [`PUBLIC_ROUTES`] under `base` (no trailing slash).
#[must_use]
pub fn render_sitemap(base: &str) -> String {
    let mut out = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for route in PUBLIC_ROUTES {
        let loc = if route == "/" { format!("{base}/") } else { format!("{base}{route}") };
        let _ = writeln!(out, "  <url><loc>{}</loc></url>", escape_xml(&loc));
    }
    out.push_str("</urlset>\n");
    out
}

fn escape_xml(raw: &str) -> String {
    raw.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
