use log::debug;

use crate::document::Element;
use crate::error::{CovsumError, Result};
use crate::loader::{resolve_path, DocumentLoader, FsLoader};
use crate::missing::generate_missing;
use crate::model::{CoverageReport, FileReport, Options};
use crate::normalize::{filter_present, process_packages, ClassRecord};
use crate::rates::calculate_rates;

/// Locate, read and summarize a Cobertura report. `path` may be a glob
/// pattern, in which case its first match is used.
pub fn process_coverage(path: &str, options: &Options) -> Result<CoverageReport> {
    process_coverage_with(&FsLoader, path, options)
}

/// [`process_coverage`] with a caller-provided loader.
pub fn process_coverage_with<L: DocumentLoader + ?Sized>(
    loader: &L,
    path: &str,
    options: &Options,
) -> Result<CoverageReport> {
    let resolved = resolve_path(loader, path)?;
    let xml = loader.read_file(&resolved)?;
    let document = loader.parse_xml(&xml)?;
    debug!("Parsed {} ({} bytes)", resolved.display(), xml.len());
    summarize(&document, options)
}

/// Summarize an already parsed document whose root is `<coverage>`.
pub fn summarize(document: &Element, options: &Options) -> Result<CoverageReport> {
    let coverage = document
        .child("coverage")
        .ok_or_else(|| CovsumError::Shape("missing <coverage> root element".to_string()))?;

    let classes = filter_present(process_packages(coverage.get("packages")));
    debug!("Found {} classes", classes.len());

    let files: Vec<FileReport> = classes
        .into_iter()
        .map(file_report)
        .filter(|file| !(options.skip_covered && file.rates.is_fully_covered()))
        .collect();

    Ok(CoverageReport {
        rates: calculate_rates(coverage),
        files,
    })
}

fn file_report(class: ClassRecord<'_>) -> FileReport {
    FileReport {
        rates: calculate_rates(class.element()),
        filename: class.filename().map(str::to_string),
        name: class.name().map(str::to_string),
        missing: generate_missing(class.lines()),
    }
}
