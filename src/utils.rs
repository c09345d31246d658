use url::Url;

/// Resolves a possibly relative reference against the page URL
///
/// Follows standard URL-joining rules, so relative paths, root-relative
/// paths, protocol-relative references and absolute URLs all work. Returns
/// `None` when the reference cannot be joined.
pub fn resolve_url(base: &Url, reference: &str) -> Option<Url> {
    match base.join(reference) {
        Ok(url) => Some(url),
        Err(e) => {
            ::log::debug!("Could not join {:?} onto {}: {}", reference, base, e);
            None
        }
    }
}

/// Whitespace as markup text sees it: Unicode whitespace plus the
/// information separators U+001C..=U+001F
pub fn is_space(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}
