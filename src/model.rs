//! Summary values produced from a Cobertura document. Everything here is
//! plain data; the pipeline builds it and formatters render it.

use serde::{Deserialize, Serialize};

/// Coverage percentages in the range 0..=100.
///
/// `line` and `branch` are NaN when the report lacks the attribute.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RateSummary {
    pub total: f64,
    pub line: f64,
    pub branch: f64,
}

impl RateSummary {
    /// Whether every line (and branch, when reported) is covered.
    #[must_use]
    pub fn is_fully_covered(&self) -> bool {
        self.total == 100.0
    }
}

/// Coverage of one class entry of the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FileReport {
    #[serde(flatten)]
    pub rates: RateSummary,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    /// Missed lines as interval tokens, e.g. `["3", "7-9"]`.
    pub missing: Vec<String>,
}

/// The complete result of summarizing a single report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoverageReport {
    #[serde(flatten)]
    pub rates: RateSummary,
    pub files: Vec<FileReport>,
}

/// Knobs for [`crate::pipeline::process_coverage`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Options {
    /// Leave files with a total rate of exactly 100 out of the report.
    pub skip_covered: bool,
}
