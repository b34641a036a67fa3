//! Profile link extraction and user-handle derivation.

use regex::Regex;
use std::collections::BTreeSet;
use std::sync::LazyLock;
use url::Url;

/// Host whose profile links are followed.
pub const PROFILE_HOST: &str = "github.com";

/// Characters trimmed from the end of a matched link.
const TRAILING_STRIP: &[char] = &['/', '.', ',', ')'];

static PROFILE_LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?:https?://)?(?:www\.)?github\.com/[A-Za-z0-9_.\-]+")
        .expect("profile link pattern is valid")
});

/// Finds profile links in document text and hyperlink annotations.
///
/// Links are normalised (scheme added, trailing punctuation stripped) and
/// deduplicated. The set is ordered, so downstream processing is
/// deterministic for a given document.
pub fn extract_links(text: &str, annotation_uris: &[String]) -> BTreeSet<String> {
    let from_annotations = annotation_uris
        .iter()
        .filter(|uri| uri.contains(PROFILE_HOST))
        .map(String::as_str);
    let from_text = PROFILE_LINK.find_iter(text).map(|m| m.as_str());

    from_annotations
        .chain(from_text)
        .map(normalize_link)
        .filter(|link| !link.is_empty())
        .collect()
}

/// Adds an `https://` scheme when missing and strips trailing `/.,)`.
pub fn normalize_link(raw: &str) -> String {
    let raw = raw.trim();
    let qualified = if raw.starts_with("http://") || raw.starts_with("https://") {
        raw.to_string()
    } else {
        format!("https://{raw}")
    };
    qualified.trim_end_matches(TRAILING_STRIP).to_string()
}

/// Derives the user handle from a profile link's first path segment.
///
/// Returns `None` for links without one (e.g. `https://github.com`).
pub fn user_handle(link: &str) -> Option<String> {
    let url = Url::parse(link).ok()?;
    url.path_segments()?
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_string)
}

/// Derives the distinct user handles for a set of links, in link order.
pub fn user_handles<'a>(links: impl IntoIterator<Item = &'a String>) -> Vec<String> {
    let mut seen = BTreeSet::new();
    links
        .into_iter()
        .filter_map(|link| user_handle(link))
        .filter(|handle| seen.insert(handle.to_lowercase()))
        .collect()
}
