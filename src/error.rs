use thiserror::Error;

#[derive(Error, Debug)]
pub enum CovsumError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML parse error at position {position}: {source}")]
    Xml {
        source: quick_xml::Error,
        position: usize,
    },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid glob pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    #[error("No file matches pattern: {0}")]
    PathResolution(String),

    #[error("Not a Cobertura report: {0}")]
    Shape(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Formatting error")]
    Fmt(#[from] std::fmt::Error),
}

pub type Result<T> = std::result::Result<T, CovsumError>;
