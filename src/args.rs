use clap::{Parser, ValueEnum};
use og_preview::report::ReportFormat;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "og-preview")]
#[command(about = "Fetches pages and reports their Open Graph / Twitter preview image and title")]
#[command(version)]
pub struct Args {
    /// Pages to inspect (defaults to the built-in list)
    pub urls: Vec<String>,

    /// Path to a JSON configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Per-request timeout in seconds
    #[arg(short, long)]
    pub timeout: Option<u64>,

    /// User-Agent header to send
    #[arg(long)]
    pub user_agent: Option<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

/// Convert from CLI argument format to the report format
pub fn convert_format(arg: FormatArg) -> ReportFormat {
    match arg {
        FormatArg::Text => ReportFormat::Text,
        FormatArg::Json => ReportFormat::Json,
    }
}
