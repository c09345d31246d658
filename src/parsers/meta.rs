use crate::parsers::IMAGE_KEYS;
use crate::utils::is_space;
use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Attribute that can carry the metadata key on a `<meta>` tag
#[derive(Debug, Clone, Copy)]
enum KeyAttr {
    Property,
    Name,
}

impl KeyAttr {
    fn as_str(self) -> &'static str {
        match self {
            KeyAttr::Property => "property",
            KeyAttr::Name => "name",
        }
    }
}

/// Where the `content` attribute sits relative to the key attribute
#[derive(Clone, Copy)]
enum ContentOrder {
    After,
    Before,
}

/// Pattern priority. The first of these that matches anywhere wins,
/// regardless of where in the document the other patterns would match.
const PATTERN_ORDER: [(KeyAttr, ContentOrder); 4] = [
    (KeyAttr::Property, ContentOrder::After),
    (KeyAttr::Property, ContentOrder::Before),
    (KeyAttr::Name, ContentOrder::After),
    (KeyAttr::Name, ContentOrder::Before),
];

/// Builds the `<meta>` pattern for one attribute/order combination.
/// Only the tag syntax is case-insensitive; the capture keeps its case.
fn build_pattern(key: &str, attr: KeyAttr, order: ContentOrder) -> Result<Regex, regex::Error> {
    let key_part = format!(r#"{}=["']{}["']"#, attr.as_str(), regex::escape(key));
    let content_part = r#"content=["']([^"']+)["']"#;

    let pattern = match order {
        ContentOrder::After => format!(r"<meta[^>]+{}[^>]+{}", key_part, content_part),
        ContentOrder::Before => format!(r"<meta[^>]+{}[^>]+{}", content_part, key_part),
    };

    RegexBuilder::new(&pattern).case_insensitive(true).build()
}

/// The four compiled patterns for one metadata key, in priority order
#[derive(Debug)]
pub struct MetaMatcher {
    key: String,
    patterns: Vec<Regex>,
}

impl MetaMatcher {
    /// Compile the patterns for `key`
    pub fn new(key: &str) -> Result<Self, regex::Error> {
        let patterns = PATTERN_ORDER
            .into_iter()
            .map(|(attr, order)| build_pattern(key, attr, order))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            key: key.to_string(),
            patterns,
        })
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    /// Finds the `content` value of the first matching `<meta>` tag
    ///
    /// Scanning stops at the first pattern that matches. The value is
    /// trimmed; a value that is blank after trimming counts as absent.
    pub fn find(&self, markup: &str) -> Option<String> {
        for (priority, regex) in self.patterns.iter().enumerate() {
            if let Some(captures) = regex.captures(markup) {
                let value = captures
                    .get(1)
                    .map(|m| m.as_str().trim_matches(is_space))
                    .unwrap_or("");
                ::log::trace!(
                    "Matched {} with pattern {}: {:?}",
                    self.key,
                    priority + 1,
                    value
                );
                if value.is_empty() {
                    return None;
                }
                return Some(value.to_string());
            }
        }

        None
    }
}

/// Matchers for the image keys, compiled once
static IMAGE_MATCHERS: LazyLock<Vec<MetaMatcher>> = LazyLock::new(|| {
    IMAGE_KEYS
        .iter()
        .map(|key| MetaMatcher::new(key).expect("escaped key pattern is valid"))
        .collect()
});

/// Finds the `content` value of the first `<meta>` tag carrying `key`
/// as its `property` or `name` attribute.
///
/// Patterns are tried in a fixed order (property/content, content/property,
/// name/content, content/name) and scanning stops at the first hit. The
/// image keys use precompiled patterns; other keys are compiled per call.
pub fn extract_meta(markup: &str, key: &str) -> Option<String> {
    if let Some(matcher) = IMAGE_MATCHERS.iter().find(|m| m.key() == key) {
        return matcher.find(markup);
    }

    match MetaMatcher::new(key) {
        Ok(matcher) => matcher.find(markup),
        Err(e) => {
            ::log::warn!("Skipping meta patterns for {}: {}", key, e);
            None
        }
    }
}
