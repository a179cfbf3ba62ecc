use thiserror::Error;

/// All errors that the crate can generate
#[derive(Error, Debug)]
pub enum PDFError {
    #[error(transparent)]
    /// An I/O error occurred while writing the document or reading a layout
    Io(#[from] std::io::Error),

    #[error("failed to parse layout: {0}")]
    /// [serde_json] failed to parse a layout description
    Config(#[from] serde_json::Error),

    #[error("invalid layout: {0}")]
    /// The page geometry can't hold any text
    InvalidLayout(String),
}
