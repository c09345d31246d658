use crate::results::{PreviewMetadata, ReportRow, RowStatus};
use serde::Serialize;
use std::io::{self, Write};

/// Printed in place of a missing image URL
pub const IMAGE_NOT_FOUND: &str = "NOT_FOUND";

/// Printed in place of a missing title
pub const TITLE_NOT_FOUND: &str = "No title found";

/// Output format of the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReportFormat {
    /// Indented plain-text blocks, one per URL
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

/// Formats a single row as a plain-text block, blank separator included
pub fn format_row(row: &ReportRow) -> String {
    format!(
        "- Link: {}\n  - Image URL: {}\n  - Image description: {}\n  - Debug: status={}, final={}\n\n",
        row.requested_url,
        row.metadata.image_url.as_deref().unwrap_or(IMAGE_NOT_FOUND),
        row.metadata.title.as_deref().unwrap_or(TITLE_NOT_FOUND),
        row.status,
        row.final_url,
    )
}

#[derive(Serialize)]
struct JsonRow<'a> {
    requested_url: &'a str,
    final_url: Option<&'a str>,
    status: Option<u16>,
    #[serde(flatten)]
    metadata: &'a PreviewMetadata,
    error: Option<&'a str>,
}

impl<'a> From<&'a ReportRow> for JsonRow<'a> {
    fn from(row: &'a ReportRow) -> Self {
        let (final_url, status, error) = match row.status {
            RowStatus::Http(code) => (Some(row.final_url.as_str()), Some(code), None),
            RowStatus::Error => (None, None, Some(row.final_url.as_str())),
        };
        Self {
            requested_url: &row.requested_url,
            final_url,
            status,
            metadata: &row.metadata,
            error,
        }
    }
}

/// Formats a single row as one line of JSON
pub fn format_row_json(row: &ReportRow) -> serde_json::Result<String> {
    serde_json::to_string(&JsonRow::from(row))
}

/// Writes all rows in order in the requested format
pub fn write_report<W: Write>(
    out: &mut W,
    rows: &[ReportRow],
    format: ReportFormat,
) -> io::Result<()> {
    for row in rows {
        match format {
            ReportFormat::Text => out.write_all(format_row(row).as_bytes())?,
            ReportFormat::Json => {
                let line = format_row_json(row).map_err(io::Error::other)?;
                writeln!(out, "{}", line)?;
            }
        }
    }
    out.flush()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ok_row() -> ReportRow {
        ReportRow {
            requested_url: "https://example.com/".to_string(),
            final_url: "https://www.example.com/".to_string(),
            status: RowStatus::Http(200),
            metadata: PreviewMetadata::new(
                Some("https://www.example.com/og.png".to_string()),
                Some("Example Home".to_string()),
            ),
        }
    }

    fn error_row() -> ReportRow {
        ReportRow::failed("https://down.example/", "request timed out: deadline elapsed")
    }

    #[test]
    fn test_text_block() {
        assert_eq!(
            format_row(&ok_row()),
            "- Link: https://example.com/\n\
             \x20 - Image URL: https://www.example.com/og.png\n\
             \x20 - Image description: Example Home\n\
             \x20 - Debug: status=200, final=https://www.example.com/\n\n"
        );
    }

    #[test]
    fn test_sentinels_for_missing_metadata() {
        let row = ReportRow {
            metadata: PreviewMetadata::default(),
            ..ok_row()
        };
        let text = format_row(&row);
        assert!(text.contains("  - Image URL: NOT_FOUND\n"));
        assert!(text.contains("  - Image description: No title found\n"));
    }

    #[test]
    fn test_error_block() {
        let text = format_row(&error_row());
        assert!(text.starts_with("- Link: https://down.example/\n"));
        assert!(text.contains("  - Image URL: NOT_FOUND\n"));
        assert!(text.contains("  - Debug: status=ERR, final=request timed out: deadline elapsed\n"));
        assert!(text.ends_with("\n\n"));
    }

    #[test]
    fn test_json_rows() {
        let value: serde_json::Value =
            serde_json::from_str(&format_row_json(&ok_row()).unwrap()).unwrap();
        assert_eq!(value["status"], 200);
        assert_eq!(value["final_url"], "https://www.example.com/");
        assert_eq!(value["image_url"], "https://www.example.com/og.png");
        assert_eq!(value["title"], "Example Home");
        assert!(value["error"].is_null());

        let value: serde_json::Value =
            serde_json::from_str(&format_row_json(&error_row()).unwrap()).unwrap();
        assert!(value["status"].is_null());
        assert!(value["final_url"].is_null());
        assert!(value["image_url"].is_null());
        assert_eq!(value["error"], "request timed out: deadline elapsed");
    }

    #[test]
    fn test_write_report_keeps_order() {
        let mut out = Vec::new();
        write_report(&mut out, &[ok_row(), error_row()], ReportFormat::Text).unwrap();
        let text = String::from_utf8(out).unwrap();
        let first = text.find("https://example.com/").unwrap();
        let second = text.find("https://down.example/").unwrap();
        assert!(first < second);
        assert_eq!(text.matches("- Link: ").count(), 2);

        let mut out = Vec::new();
        write_report(&mut out, &[ok_row(), error_row()], ReportFormat::Json).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().lines().count(), 2);
    }
}
