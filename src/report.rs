//! Output formatting for coverage summaries.

use std::fmt::Write;

use crate::error::Result;
use crate::model::{CoverageReport, FileReport};

impl CoverageReport {
    /// Format using a specific formatter.
    pub fn format(&self, formatter: &dyn ReportFormatter) -> Result<String> {
        formatter.format(self)
    }
}

/// Trait for formatting coverage reports.
pub trait ReportFormatter {
    /// Format the report to a string.
    fn format(&self, report: &CoverageReport) -> Result<String>;
}

/// Render a percentage, or `-` when the report did not provide it.
fn percent(value: f64) -> String {
    if value.is_nan() {
        "-".to_string()
    } else {
        format!("{value:.1}%")
    }
}

/// The label shown for a file: its path, falling back to the class name.
fn label(file: &FileReport) -> &str {
    file.filename
        .as_deref()
        .or(file.name.as_deref())
        .unwrap_or("<unknown>")
}

/// Plain text formatter.
pub struct TextFormatter;

impl ReportFormatter for TextFormatter {
    fn format(&self, report: &CoverageReport) -> Result<String> {
        let mut out = String::new();
        let rates = &report.rates;

        writeln!(
            out,
            "Coverage: {} (lines {}, branches {})",
            percent(rates.total),
            percent(rates.line),
            percent(rates.branch)
        )?;

        if report.files.is_empty() {
            return Ok(out);
        }

        out.push('\n');
        writeln!(
            out,
            "{:<50} {:>8} {:>8} {:>8}  MISSING",
            "FILE", "TOTAL", "LINE", "BRANCH"
        )?;
        writeln!(out, "{}", "-".repeat(88))?;
        for file in &report.files {
            writeln!(
                out,
                "{:<50} {:>8} {:>8} {:>8}  {}",
                label(file),
                percent(file.rates.total),
                percent(file.rates.line),
                percent(file.rates.branch),
                file.missing.join(", ")
            )?;
        }

        Ok(out)
    }
}

/// Markdown formatter.
pub struct MarkdownFormatter;

impl ReportFormatter for MarkdownFormatter {
    fn format(&self, report: &CoverageReport) -> Result<String> {
        let mut md = String::new();
        let rates = &report.rates;

        writeln!(md, "### Coverage: {}\n", percent(rates.total))?;
        writeln!(
            md,
            "Lines: **{}**, branches: **{}**",
            percent(rates.line),
            percent(rates.branch)
        )?;

        if report.files.is_empty() {
            md.push_str("\nNo files to report.\n");
            return Ok(md);
        }

        md.push_str("\n| File | Total | Line | Branch | Missing |\n");
        md.push_str("|:-----|------:|-----:|-------:|:--------|\n");
        for file in &report.files {
            let missing = file
                .missing
                .iter()
                .map(|token| format!("`{token}`"))
                .collect::<Vec<_>>()
                .join(", ");
            writeln!(
                md,
                "| `{}` | {} | {} | {} | {} |",
                label(file),
                percent(file.rates.total),
                percent(file.rates.line),
                percent(file.rates.branch),
                missing
            )?;
        }

        Ok(md)
    }
}

/// JSON formatter. Missing rates are written as `null`.
pub struct JsonFormatter;

impl ReportFormatter for JsonFormatter {
    fn format(&self, report: &CoverageReport) -> Result<String> {
        let mut json = serde_json::to_string_pretty(report)?;
        json.push('\n');
        Ok(json)
    }
}
