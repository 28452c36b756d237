use crate::UrlError;
use std::fmt;
use url::Url;

/// A URL in canonical form
///
/// Two raw URLs that canonicalize to the same `CanonicalUrl` refer to the same
/// page. Equality and hashing go through the canonical string, so this type is
/// the only thing the crawler ever compares URLs by.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CanonicalUrl(Url);

impl CanonicalUrl {
    /// Returns the canonical string form
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Returns the underlying parsed URL
    pub fn as_url(&self) -> &Url {
        &self.0
    }

    /// Returns the host of this URL
    pub fn host_str(&self) -> Option<&str> {
        self.0.host_str()
    }

    /// Resolves a possibly relative reference against this URL
    ///
    /// The result is not canonicalized.
    pub fn join(&self, reference: &str) -> Option<Url> {
        self.0.join(reference).ok()
    }
}

impl fmt::Display for CanonicalUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0.as_str())
    }
}

impl AsRef<str> for CanonicalUrl {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}

/// Canonicalizes a URL string, reporting why it was rejected
///
/// # Normalization Steps
///
/// 1. Resolve `raw` against `base` when a base is given, otherwise parse it
///    as an absolute URL
/// 2. Reject anything that is not `http`/`https` or has no host
/// 3. Remove the fragment (everything after #)
/// 4. Remove trailing slashes from the path, except for the root `/`
///
/// The query string is kept as-is. Host and path are otherwise left alone
/// (the `url` crate already lowercases hosts of special schemes).
///
/// # Examples
///
/// ```
/// use docs_survey::url::try_canonicalize;
///
/// let url = try_canonicalize("https://example.com/docs/page/#intro", None).unwrap();
/// assert_eq!(url.as_str(), "https://example.com/docs/page");
/// ```
pub fn try_canonicalize(
    raw: &str,
    base: Option<&CanonicalUrl>,
) -> Result<CanonicalUrl, UrlError> {
    let raw = raw.trim();

    let mut url = match base {
        Some(base) => base.0.join(raw),
        None => Url::parse(raw),
    }
    .map_err(|e| UrlError::Parse(e.to_string()))?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(UrlError::InvalidScheme(url.scheme().to_string()));
    }

    if url.host_str().map_or(true, str::is_empty) {
        return Err(UrlError::MissingHost);
    }

    url.set_fragment(None);

    let path = url.path();
    if path.len() > 1 && path.ends_with('/') {
        let trimmed = path.trim_end_matches('/');
        let trimmed = if trimmed.is_empty() { "/" } else { trimmed }.to_string();
        url.set_path(&trimmed);
    }

    Ok(CanonicalUrl(url))
}

/// Canonicalizes a URL string
///
/// Returns `None` when the result is not a well-formed absolute `http(s)` URL.
/// This never fails loudly; invalid URLs are meant to be dropped quietly.
///
/// # Examples
///
/// ```
/// use docs_survey::canonicalize;
///
/// let page = canonicalize("https://x.com/a/", None).unwrap();
/// assert_eq!(page.as_str(), "https://x.com/a");
///
/// let root = canonicalize("https://x.com/", None).unwrap();
/// assert_eq!(root.as_str(), "https://x.com/");
/// assert!(canonicalize("not a url", None).is_none());
/// ```
pub fn canonicalize(raw: &str, base: Option<&CanonicalUrl>) -> Option<CanonicalUrl> {
    try_canonicalize(raw, base).ok()
}

/// Canonicalizes an already parsed URL
pub fn canonicalize_url(url: &Url) -> Option<CanonicalUrl> {
    canonicalize(url.as_str(), None)
}
