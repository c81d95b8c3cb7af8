//! Coverage percentages from `line-rate` / `branch-rate` attributes.

use crate::document::Element;
use crate::model::RateSummary;

/// Read a fractional rate attribute as a percentage. Missing or unparseable
/// values become NaN.
fn percent(element: &Element, attr: &str) -> f64 {
    element
        .attr(attr)
        .and_then(|value| value.trim().parse::<f64>().ok())
        .map_or(f64::NAN, |rate| rate * 100.0)
}

/// Zero and NaN both count as "no rate".
fn is_reported(rate: f64) -> bool {
    rate != 0.0 && !rate.is_nan()
}

/// Compute the rates of the coverage root or of a single class.
///
/// `total` averages line and branch rates only when both are non-zero;
/// otherwise it is the line rate alone. A report with no branches therefore
/// scores on lines only instead of being dragged down by a 0% branch rate.
#[must_use]
pub fn calculate_rates(element: &Element) -> RateSummary {
    let line = percent(element, "line-rate");
    let branch = percent(element, "branch-rate");
    let total = if is_reported(line) && is_reported(branch) {
        (line + branch) / 2.0
    } else {
        line
    };
    RateSummary {
        total,
        line,
        branch,
    }
}
