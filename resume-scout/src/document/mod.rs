//! Résumé text extraction.
//!
//! Reads the native text layer and link annotations of a PDF, falling back
//! to OCR when the text layer is too thin to be useful (scanned documents).

mod error;
mod native;
mod ocr;

pub use error::ExtractError;

use std::path::Path;
use tracing::{debug, info, warn};

/// Text and link targets extracted from a document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExtractedDocument {
    /// Cleaned plain-text transcript.
    pub text: String,

    /// URI targets of hyperlink annotations.
    pub annotation_uris: Vec<String>,
}

impl ExtractedDocument {
    /// Creates a document from a transcript with no annotations.
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            annotation_uris: Vec::new(),
        }
    }

    /// Returns the first `max_chars` characters of the transcript.
    #[must_use]
    pub fn snippet(&self, max_chars: usize) -> String {
        self.text.chars().take(max_chars).collect()
    }
}

/// Controls the OCR fallback.
#[derive(Debug, Clone, Copy)]
pub struct ExtractOptions {
    /// Native text shorter than this (in characters) triggers OCR.
    pub min_text_length: usize,

    /// Whether the OCR fallback may run at all.
    pub ocr: bool,

    /// Rasterisation resolution for OCR.
    pub ocr_dpi: u32,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            min_text_length: 100,
            ocr: true,
            ocr_dpi: 300,
        }
    }
}

/// Trims every line and drops empty ones.
#[must_use]
pub fn clean_text(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join("\n")
}

/// Extracts a best-effort transcript and link annotations from a PDF.
///
/// Only a missing or unreadable file is an error. A broken text layer or
/// failing OCR tools degrade to whatever text could be recovered.
///
/// # Errors
///
/// Returns [`ExtractError::NotFound`] or [`ExtractError::IoError`].
pub async fn extract_document(
    path: &Path,
    options: &ExtractOptions,
) -> Result<ExtractedDocument, ExtractError> {
    if !path.exists() {
        return Err(ExtractError::NotFound {
            path: path.display().to_string(),
        });
    }

    let bytes = tokio::fs::read(path)
        .await
        .map_err(|e| ExtractError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;

    let (native_text, annotation_uris) =
        match tokio::task::spawn_blocking(move || {
            (native::extract_text(&bytes), native::annotation_uris(&bytes))
        })
        .await
        {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "PDF parser aborted");
                (
                    Err(ExtractError::Native {
                        message: e.to_string(),
                    }),
                    Ok(Vec::new()),
                )
            }
        };

    let mut text = match native_text {
        Ok(text) => clean_text(&text),
        Err(e) => {
            warn!(error = %e, "Native extraction warning");
            String::new()
        }
    };
    let annotation_uris = annotation_uris.unwrap_or_else(|e| {
        warn!(error = %e, "Failed to read link annotations");
        Vec::new()
    });
    debug!(
        chars = text.chars().count(),
        annotations = annotation_uris.len(),
        "Native extraction complete"
    );

    if options.ocr && text.chars().count() < options.min_text_length {
        info!("Low text detected, switching to OCR");
        match ocr::ocr_text(path, options.ocr_dpi).await {
            Ok(ocr_text) if ocr_text.chars().count() > text.chars().count() => text = ocr_text,
            Ok(_) => debug!("OCR did not recover more text"),
            Err(e) => warn!(error = %e, "OCR extraction warning"),
        }
    }

    Ok(ExtractedDocument {
        text,
        annotation_uris,
    })
}
