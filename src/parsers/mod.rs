pub mod meta;
pub mod title;


use crate::results::PreviewMetadata;
use crate::utils::resolve_url;
use url::Url;

/// Metadata keys consulted for the preview image, in preference order
pub const IMAGE_KEYS: [&str; 2] = ["og:image", "twitter:image"];

/// Main parser that combines the individual extractors
pub struct Parser;

impl Parser {
    /// Extract preview metadata from a fetched page
    ///
    /// The image is taken from `og:image`, falling back to `twitter:image`,
    /// and resolved against `final_url`. A reference that cannot be joined
    /// is reported as-is.
    pub fn extract(markup: &str, final_url: &Url) -> PreviewMetadata {
        let image_url = Self::extract_image(markup).map(|raw| {
            match resolve_url(final_url, &raw) {
                Some(url) => url.to_string(),
                None => {
                    ::log::warn!("Keeping unresolvable image reference {:?}", raw);
                    raw
                }
            }
        });

        let title = title::extract_title(markup);

        ::log::debug!(
            "Extracted from {}: image={:?}, title={:?}",
            final_url,
            image_url,
            title
        );

        PreviewMetadata::new(image_url, title)
    }

    /// Raw (unresolved) image reference, preferring `og:image`
    pub fn extract_image(markup: &str) -> Option<String> {
        IMAGE_KEYS
            .iter()
            .find_map(|key| meta::extract_meta(markup, key))
    }
}
