use crate::types::Image;

/// Placeholder shown wherever a record has no usable image
pub const FALLBACK_IMAGE_URL: &str = "https://images.unsplash.com/photo-1560518883-ce09059eeffa?ixlib=rb-4.0.3&auto=format&fit=crop&w=800&q=80";

/// Turns media references from the content store into URLs a browser can load.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    base_url: String,
}

impl ImageResolver {
    /// `base_url` is the content store origin; trailing slashes are ignored
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Resolve an image, substituting [`FALLBACK_IMAGE_URL`] when it is missing
    pub fn resolve(&self, image: Option<&Image>) -> String {
        self.resolve_or(image, FALLBACK_IMAGE_URL)
    }

    /// Resolve an image, substituting `fallback` when it is missing
    pub fn resolve_or(&self, image: Option<&Image>, fallback: &str) -> String {
        let url = image.and_then(|image| image.url.as_deref());
        self.resolve_url_or(url, fallback)
    }

    /// Resolve a bare url string
    pub fn resolve_url(&self, url: Option<&str>) -> String {
        self.resolve_url_or(url, FALLBACK_IMAGE_URL)
    }

    fn resolve_url_or(&self, url: Option<&str>, fallback: &str) -> String {
        let url = match url.map(str::trim) {
            Some(url) if !url.is_empty() => url,
            _ => return fallback.to_string(),
        };

        if has_scheme(url) {
            return url.to_string();
        }

        format!("{}/{}", self.base_url, url.trim_start_matches('/'))
    }
}

/// RFC 3986 scheme check: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
fn has_scheme(url: &str) -> bool {
    let Some((scheme, _)) = url.split_once(':') else {
        return false;
    };

    let mut chars = scheme.chars();
    match chars.next() {
        Some(first) if first.is_ascii_alphabetic() => {}
        _ => return false,
    }

    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
}
