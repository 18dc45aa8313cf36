/// Normalises a tracked target into the form matched against result links
///
/// Accepts either a bare domain or a full URL. The scheme, a leading `www.`,
/// and everything from the first `/`, `?` or `#` onwards are dropped, and the
/// result is lowercased, so every page under the same host matches.
///
/// Returns `None` when nothing usable remains.
///
/// # Examples
///
/// ```
/// use serp_velocity::rank::normalize_domain;
///
/// assert_eq!(normalize_domain("https://www.Example.com/"), Some("example.com".to_string()));
/// assert_eq!(normalize_domain("example.com/blog/post"), Some("example.com".to_string()));
/// assert_eq!(normalize_domain("  "), None);
/// ```
pub fn normalize_domain(target: &str) -> Option<String> {
    let lower = target.trim().to_lowercase();

    let without_scheme = match lower.find("://") {
        Some(index) => &lower[index + 3..],
        None => lower.as_str(),
    };

    let host = without_scheme
        .split(['/', '?', '#'])
        .next()
        .unwrap_or_default();

    let host = host.strip_prefix("www.").unwrap_or(host);

    if host.is_empty() {
        None
    } else {
        Some(host.to_string())
    }
}
