//! Command handler functions for the covsum CLI.
//!
//! Each `cmd_*` function returns its output as a `String`, making them easy
//! to test without capturing stdout.

use anyhow::{Context, Result};
use clap::ValueEnum;

use crate::model::Options;
use crate::pipeline::process_coverage;
use crate::report::{JsonFormatter, MarkdownFormatter, ReportFormatter, TextFormatter};

/// Output style for the summary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Style {
    Text,
    Markdown,
    Json,
}

impl Style {
    fn formatter(self) -> &'static dyn ReportFormatter {
        match self {
            Style::Text => &TextFormatter,
            Style::Markdown => &MarkdownFormatter,
            Style::Json => &JsonFormatter,
        }
    }
}

pub fn cmd_summary(path: &str, options: &Options, style: Style) -> Result<String> {
    let report = process_coverage(path, options)
        .with_context(|| format!("Failed to summarize coverage report '{path}'"))?;
    let output = report
        .format(style.formatter())
        .context("Failed to format coverage report")?;
    Ok(output)
}
