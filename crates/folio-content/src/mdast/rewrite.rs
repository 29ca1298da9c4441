//! Image URL rewriting.
//!
//! The image pass hands every raw image URL to a [`UrlRewriter`] before
//! storing it on the section. [`IdentityRewriter`] leaves URLs alone;
//! [`BaseUrlRewriter`] resolves relative references against a base URL.

use folio_core::ImageConfig;

/// Normalizes a raw URL found in the document.
pub trait UrlRewriter {
    /// Return the normalized form of `url`.
    fn rewrite(&self, url: &str) -> String;
}

impl<F> UrlRewriter for F
where
    F: Fn(&str) -> String,
{
    fn rewrite(&self, url: &str) -> String {
        self(url)
    }
}

/// Passes URLs through unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct IdentityRewriter;

impl UrlRewriter for IdentityRewriter {
    fn rewrite(&self, url: &str) -> String {
        url.to_string()
    }
}

/// Resolves relative URLs against a base URL.
///
/// - Absolute URLs (`scheme:` or `//host`) are returned unchanged.
/// - Root-relative paths (`/img.png`) are joined to the origin of the base,
///   or kept as they are when the base has no scheme.
/// - Everything else is joined to the base, with a leading `./` dropped.
#[derive(Debug, Clone)]
pub struct BaseUrlRewriter {
    base: String,
}

impl BaseUrlRewriter {
    pub fn new(base: impl Into<String>) -> Self {
        let mut base = base.into();
        if !base.ends_with('/') {
            base.push('/');
        }
        Self { base }
    }

    pub fn base(&self) -> &str {
        &self.base
    }

    /// `scheme://host` portion of the base, empty when the base has no scheme.
    fn origin(&self) -> &str {
        let Some(scheme_end) = self.base.find("://") else {
            return "";
        };
        let host_start = scheme_end + 3;
        match self.base[host_start..].find('/') {
            Some(pos) => &self.base[..host_start + pos],
            None => &self.base,
        }
    }
}

impl UrlRewriter for BaseUrlRewriter {
    fn rewrite(&self, url: &str) -> String {
        if url.is_empty() || is_absolute(url) {
            return url.to_string();
        }
        if let Some(path) = url.strip_prefix('/') {
            return format!("{}/{path}", self.origin());
        }
        let relative = url.strip_prefix("./").unwrap_or(url);
        format!("{}{relative}", self.base)
    }
}

/// Build the rewriter selected by the image configuration.
pub fn rewriter_from_config(config: &ImageConfig) -> Box<dyn UrlRewriter> {
    match config.base_url.as_deref() {
        Some(base) if !base.trim().is_empty() => Box::new(BaseUrlRewriter::new(base.trim())),
        _ => Box::new(IdentityRewriter),
    }
}

fn is_absolute(url: &str) -> bool {
    if url.starts_with("//") || url.starts_with('#') {
        return true;
    }
    // RFC 3986 scheme: ALPHA *( ALPHA / DIGIT / "+" / "-" / "." ) ":"
    match url.find(':') {
        Some(pos) if pos > 0 => {
            let scheme = &url[..pos];
            scheme.starts_with(|c: char| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
        }
        _ => false,
    }
}
