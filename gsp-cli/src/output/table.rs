//! Table output formatting using the `tabled` crate
//!
//! Rounded tables sized to the terminal, numeric columns right-aligned.

use super::OutputConfig;
use tabled::{
    builder::Builder,
    settings::{object::Columns, style::Style, Alignment, Modify, Width},
    Table,
};

/// Table output formatter
pub struct TableOutput;

impl TableOutput {
    /// Create a table from a header row and rows of strings
    ///
    /// Every column after the first is right-aligned.
    pub fn from_rows(headers: &[&str], rows: &[Vec<String>], config: &OutputConfig) -> String {
        if rows.is_empty() {
            return "(no results)".to_string();
        }

        let mut builder = Builder::default();
        builder.push_record(headers.iter().copied());
        for row in rows {
            builder.push_record(row.iter().map(|s| s.as_str()));
        }

        let mut table = builder.build();
        if headers.len() > 1 {
            table.with(Modify::new(Columns::new(1..)).with(Alignment::right()));
        }
        Self::finish(table, config)
    }

    /// Format a simple key-value table
    pub fn format_key_value(pairs: &[(&str, String)], config: &OutputConfig) -> String {
        let mut builder = Builder::default();
        for (key, value) in pairs {
            builder.push_record([*key, value.as_str()]);
        }

        let mut table = builder.build();
        table.with(Modify::new(Columns::first()).with(Alignment::right()));
        Self::finish(table, config)
    }

    /// Render a dense square matrix with node indices on both axes
    pub fn matrix(rows: &[Vec<f64>], config: &OutputConfig) -> String {
        if rows.is_empty() {
            return "(empty matrix)".to_string();
        }

        let labels: Vec<String> = (0..rows.len()).map(|j| j.to_string()).collect();
        let mut headers = vec![""];
        headers.extend(labels.iter().map(String::as_str));

        let rows: Vec<Vec<String>> = rows
            .iter()
            .enumerate()
            .map(|(i, row)| {
                std::iter::once(i.to_string())
                    .chain(row.iter().map(|&v| config.number(v)))
                    .collect()
            })
            .collect();

        Self::from_rows(&headers, &rows, config)
    }

    fn finish(mut table: Table, config: &OutputConfig) -> String {
        if config.compact {
            table.with(Style::blank());
        } else {
            table.with(Style::rounded());
        }

        if config.should_wrap() {
            table.with(Width::wrap(config.effective_width()));
        }

        table.to_string()
    }
}
