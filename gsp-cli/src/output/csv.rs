//! CSV output formatting for data export.
//!
//! Fields containing a comma, quote or line break are quoted, with inner quotes
//! doubled.

/// CSV output formatter
pub struct CsvOutput;

impl CsvOutput {
    /// Format a header row followed by data rows
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
        let mut output = headers
            .iter()
            .map(|h| Self::escape_value(h))
            .collect::<Vec<_>>()
            .join(",");

        for row in rows {
            output.push('\n');
            output.push_str(
                &row.iter()
                    .map(|v| Self::escape_value(v))
                    .collect::<Vec<_>>()
                    .join(","),
            );
        }

        output
    }

    /// Escape a string value for CSV
    fn escape_value(s: &str) -> String {
        if s.contains(',') || s.contains('\n') || s.contains('\r') || s.contains('"') {
            format!("\"{}\"", s.replace('"', "\"\""))
        } else {
            s.to_string()
        }
    }
}
