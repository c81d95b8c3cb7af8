//! Locating and reading a report from disk.

use std::path::{Path, PathBuf};

use log::{debug, warn};

use crate::document::Element;
use crate::error::{CovsumError, Result};
use crate::parsers::xml::XmlTreeParser;
use crate::parsers::Parser;

/// Everything the pipeline needs from the outside world.
pub trait DocumentLoader {
    /// Paths matching a glob pattern, in the provider's order.
    fn expand_glob(&self, pattern: &str) -> Result<Vec<PathBuf>>;

    fn read_file(&self, path: &Path) -> Result<String>;

    /// Parse report text into an element tree.
    fn parse_xml(&self, text: &str) -> Result<Element> {
        XmlTreeParser.parse(text)
    }
}

/// Loader backed by the local file system.
pub struct FsLoader;

impl DocumentLoader for FsLoader {
    fn expand_glob(&self, pattern: &str) -> Result<Vec<PathBuf>> {
        Ok(readable_matches(glob::glob(pattern)?))
    }

    fn read_file(&self, path: &Path) -> Result<String> {
        Ok(std::fs::read_to_string(path)?)
    }
}

/// Keep the matched paths, skipping entries that could not be read.
fn readable_matches<E: std::fmt::Display>(
    entries: impl IntoIterator<Item = std::result::Result<PathBuf, E>>,
) -> Vec<PathBuf> {
    entries
        .into_iter()
        .filter_map(|entry| entry.map_err(|e| warn!("Skipping unreadable path: {e}")).ok())
        .collect()
}

/// Whether `path` contains glob wildcards.
#[must_use]
pub fn has_glob_magic(path: &str) -> bool {
    path.contains(['*', '?', '['])
}

/// Turn a path or glob pattern into a concrete path. A pattern resolves to
/// its first match.
pub fn resolve_path<L: DocumentLoader + ?Sized>(loader: &L, path: &str) -> Result<PathBuf> {
    if !has_glob_magic(path) {
        return Ok(PathBuf::from(path));
    }

    let matches = loader.expand_glob(path)?;
    if matches.len() > 1 {
        warn!(
            "Pattern '{}' matches {} files, using {}",
            path,
            matches.len(),
            matches[0].display()
        );
    }
    let resolved = matches
        .into_iter()
        .next()
        .ok_or_else(|| CovsumError::PathResolution(path.to_string()))?;
    debug!("Resolved '{}' to {}", path, resolved.display());
    Ok(resolved)
}
