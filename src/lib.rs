pub mod config;
pub mod crawlers;
pub mod parsers;
pub mod previews;
pub mod report;
pub mod results;
pub mod utils;

// Re-export commonly used types for convenience
pub use config::FetchConfig;
pub use previews::Previews;
pub use results::{PreviewMetadata, ReportRow};
