//! Remote image host allow-list.
//!
//! Only images served from the site's CDNs or managed storage are rendered;
//! everything else falls back to a placeholder.

#[cfg(test)]
#[path = "images_test.rs"]
mod images_test;

/// A host pattern images may be loaded from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageHost {
    /// Exact hostname match.
    Exact(&'static str),
    /// Any strict subdomain of the given domain.
    Subdomains(&'static str),
}

impl ImageHost {
    #[must_use]
    pub fn matches(self, host: &str) -> bool {
        let host = host.to_ascii_lowercase();
        match self {
            Self::Exact(name) => host == name,
            Self::Subdomains(domain) => host
                .strip_suffix(domain)
                .is_some_and(|prefix| prefix.len() > 1 && prefix.ends_with('.')),
        }
    }
}

pub const ALLOWED_IMAGE_HOSTS: [ImageHost; 3] = [
    ImageHost::Exact("cdn.hentaiclick.tv"),
    ImageHost::Exact("img.hentaiclick.tv"),
    ImageHost::Subdomains("supabase.co"),
];

/// Whether `raw` is an http(s) URL on an allow-listed host.
#[must_use]
pub fn is_allowed_image_url(raw: &str) -> bool {
    let Ok(url) = url::Url::parse(raw.trim()) else {
        return false;
    };
    if !matches!(url.scheme(), "http" | "https") {
        return false;
    }
    url.host_str()
        .is_some_and(|host| ALLOWED_IMAGE_HOSTS.iter().any(|h| h.matches(host)))
}
