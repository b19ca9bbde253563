//! Location
//!
//! `window.location` over a parsed URL.

use url::Url;

use crate::PageResult;

/// Location state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    url: Url,
}

impl Location {
    pub fn new(url: &str) -> PageResult<Self> {
        Ok(Self { url: Url::parse(url)? })
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    /// Full URL
    pub fn href(&self) -> &str {
        self.url.as_str()
    }

    /// Pathname (`/`, `/about.html`)
    pub fn pathname(&self) -> &str {
        self.url.path()
    }

    /// Hash/fragment (including #), empty when absent
    pub fn hash(&self) -> String {
        self.url
            .fragment()
            .filter(|f| !f.is_empty())
            .map(|f| format!("#{f}"))
            .unwrap_or_default()
    }

    /// Origin
    pub fn origin(&self) -> String {
        self.url.origin().ascii_serialization()
    }

    /// Resolve a link target against this location
    pub fn resolve(&self, href: &str) -> PageResult<Url> {
        Ok(self.url.join(href)?)
    }

    /// Whether `other` is this document with only the fragment changed
    pub fn is_same_document(&self, other: &Url) -> bool {
        let mut a = self.url.clone();
        let mut b = other.clone();
        a.set_fragment(None);
        b.set_fragment(None);
        a == b
    }

    pub(crate) fn set(&mut self, url: Url) {
        self.url = url;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parts() {
        let location = Location::new("https://example.lv/services.html#pricing").unwrap();

        assert_eq!(location.pathname(), "/services.html");
        assert_eq!(location.hash(), "#pricing");
        assert_eq!(location.origin(), "https://example.lv");
    }

    #[test]
    fn test_resolve_relative() {
        let location = Location::new("https://example.lv/blog/post.html").unwrap();

        assert_eq!(
            location.resolve("thank_you.html").unwrap().as_str(),
            "https://example.lv/blog/thank_you.html"
        );
        assert_eq!(location.resolve("/#about").unwrap().as_str(), "https://example.lv/#about");
    }

    #[test]
    fn test_same_document() {
        let location = Location::new("https://example.lv/").unwrap();

        assert!(location.is_same_document(&location.resolve("#contact").unwrap()));
        assert!(!location.is_same_document(&location.resolve("about.html#x").unwrap()));
    }

    #[test]
    fn test_rejects_garbage() {
        assert!(Location::new("not a url").is_err());
    }
}
