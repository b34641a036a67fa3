//! Document extraction error types.

use thiserror::Error;

/// Errors that can occur while extracting a document.
#[derive(Debug, Error)]
pub enum ExtractError {
    /// Input document does not exist.
    #[error("PDF not found at {path}")]
    NotFound { path: String },

    /// Failed to read the document.
    #[error("Failed to read file '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Native text layer extraction failed.
    #[error("Native extraction failed: {message}")]
    Native { message: String },

    /// OCR tooling failed.
    #[error("OCR failed: {message}")]
    Ocr { message: String },
}
