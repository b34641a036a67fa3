//! OCR fallback through the `pdftoppm` and `tesseract` command-line tools.

use super::clean_text;
use super::error::ExtractError;
use std::path::{Path, PathBuf};
use std::process::Stdio;
use tokio::process::Command;
use tracing::debug;

/// Rasterises every page and runs OCR on each image, in page order.
pub(crate) async fn ocr_text(pdf_path: &Path, dpi: u32) -> Result<String, ExtractError> {
    let temp_dir = tempfile::tempdir().map_err(|e| ExtractError::Ocr {
        message: format!("Failed to create temp directory: {e}"),
    })?;

    let prefix = temp_dir.path().join("page");
    let dpi = dpi.to_string();
    run_tool(
        Command::new("pdftoppm")
            .args(["-r", dpi.as_str(), "-png"])
            .arg(pdf_path)
            .arg(&prefix),
    )
    .await?;

    let images = page_images(temp_dir.path())?;
    debug!(pages = images.len(), "Rasterised document for OCR");

    let mut text = String::new();
    for image in &images {
        let page_text = run_tool(Command::new("tesseract").arg(image).arg("stdout")).await?;
        text.push_str(&page_text);
        text.push('\n');
    }

    Ok(clean_text(&text))
}

/// Lists rendered page images in page order.
fn page_images(dir: &Path) -> Result<Vec<PathBuf>, ExtractError> {
    let entries = std::fs::read_dir(dir).map_err(|e| ExtractError::Ocr {
        message: format!("Failed to list rendered pages: {e}"),
    })?;

    let mut images: Vec<PathBuf> = entries
        .filter_map(Result::ok)
        .map(|entry| entry.path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "png"))
        .collect();
    // pdftoppm zero-pads page numbers, so lexical order is page order.
    images.sort();
    Ok(images)
}

/// Runs a tool to completion and returns its stdout.
async fn run_tool(command: &mut Command) -> Result<String, ExtractError> {
    let program = command.as_std().get_program().to_string_lossy().into_owned();
    let output = command
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .output()
        .await
        .map_err(|e| ExtractError::Ocr {
            message: format!("Failed to execute {program}: {e}"),
        })?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(ExtractError::Ocr {
            message: format!("{program} failed: {stderr}"),
        });
    }

    Ok(String::from_utf8_lossy(&output.stdout).into_owned())
}
