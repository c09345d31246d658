use crate::utils::is_space;
use regex::Regex;
use std::sync::LazyLock;

/// First `<title>` element, attributes allowed, contents may span lines
static TITLE_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?is)<title[^>]*>(.*?)</title>").expect("title pattern is valid")
});

/// Extracts the page title from raw markup
///
/// Only the first `<title>` element is considered. Runs of whitespace
/// (newlines included) collapse to a single space and the result is
/// trimmed; an empty result is treated as no title.
pub fn extract_title(markup: &str) -> Option<String> {
    let captures = TITLE_RE.captures(markup)?;
    let raw = captures.get(1)?.as_str();

    let title = collapse_whitespace(raw);
    if title.is_empty() { None } else { Some(title) }
}

/// Collapses every whitespace run to one space and trims both ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split(is_space)
        .filter(|word| !word.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
