use url::Url;

/// Final `/`-separated segment of a link; the whole link if it has no `/`.
pub fn file_name_of(link: &str) -> &str {
    link.rsplit('/').next().unwrap_or(link)
}

/// ASCII case-insensitive substring check used to pick driver links.
pub fn contains_marker(href: &str, marker: &str) -> bool {
    href.to_ascii_lowercase()
        .contains(&marker.to_ascii_lowercase())
}

/// ASCII case-insensitive suffix check, e.g. `has_extension(link, ".zip")`.
pub fn has_extension(link: &str, extension: &str) -> bool {
    let (link, extension) = (link.as_bytes(), extension.as_bytes());
    link.len() >= extension.len()
        && link[link.len() - extension.len()..].eq_ignore_ascii_case(extension)
}

/// Resolves root-relative links (`/path`, `//host/path`) against the page
/// they were found on. Everything else is returned untouched.
pub fn normalize_link(href: &str, page_url: &str) -> String {
    if !href.starts_with('/') {
        return href.to_string();
    }
    match Url::parse(page_url).and_then(|base| base.join(href)) {
        Ok(url) => url.into(),
        Err(_) => href.to_string(),
    }
}
