use crate::{has_extension, normalize_link, HarvestSettings};

/// Turns raw `href` values into the ordered list of archives worth processing:
/// root-relative links are resolved, denied releases dropped, and only links
/// ending in the archive extension kept.
pub fn select_candidates<I>(hrefs: I, settings: &HarvestSettings) -> Vec<String>
where
    I: IntoIterator<Item = String>,
{
    let normalized = hrefs
        .into_iter()
        .map(|href| normalize_link(&href, &settings.page_url));
    settings
        .deny_list
        .filter(normalized)
        .into_iter()
        .filter(|link| has_extension(link, &settings.archive_extension))
        .collect()
}
