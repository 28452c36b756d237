use url::Url;

/// Extracts the domain from a URL
///
/// This function retrieves the host portion of a URL and converts it to lowercase.
/// If the URL has no host, it returns None.
///
/// # Examples
///
/// ```
/// use url::Url;
/// use docs_survey::url::extract_domain;
///
/// let url = Url::parse("https://learn.example.com/path").unwrap();
/// assert_eq!(extract_domain(&url), Some("learn.example.com".to_string()));
/// ```
pub fn extract_domain(url: &Url) -> Option<String> {
    url.host_str().map(|h| h.to_lowercase())
}

/// Checks whether a URL lives on the allowed domain
///
/// The comparison is an exact, case-insensitive host match. Subdomains of the
/// allowed domain are treated as different sites.
pub fn is_same_domain(url: &Url, allowed_domain: &str) -> bool {
    url.host_str()
        .map(|host| host.eq_ignore_ascii_case(allowed_domain))
        .unwrap_or(false)
}
