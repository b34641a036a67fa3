//! File content retrieval and manifest dispatch.

use crate::discovery::RepositorySummary;
use crate::github::CodeHost;
use crate::manifests::{lenient, ManifestKind, ManifestRecord};
use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use tracing::{debug, warn};

/// Decodes base64 API content into text.
///
/// Line breaks inserted by the API are ignored and invalid UTF-8 sequences
/// are replaced.
pub fn decode_content(encoded: &str) -> Result<String, base64::DecodeError> {
    let compact: String = encoded.chars().filter(|c| !c.is_ascii_whitespace()).collect();
    let bytes = STANDARD.decode(compact)?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Parses decoded content for the manifest at `path`.
///
/// JSON manifests are decoded first; content that is not JSON yields
/// `None` (no ecosystem) rather than an empty record. Other parse failures
/// keep the ecosystem with an empty dependency map.
pub fn parse_manifest(path: &str, content: &str) -> Option<ManifestRecord> {
    let kind = ManifestKind::from_path(path)?;

    let dependencies = if kind.is_json() {
        let value: serde_json::Value = match serde_json::from_str(content) {
            Ok(value) => value,
            Err(e) => {
                warn!(path, error = %e, "Manifest is not valid JSON, skipping");
                return None;
            }
        };
        kind.parse_json(&value).map(|result| lenient(path, result))
    } else {
        kind.dependencies(path, content)
    };

    Some(ManifestRecord {
        path: path.to_string(),
        ecosystem: kind.ecosystem(),
        dependencies,
    })
}

/// Fetches and parses one manifest from a repository's default branch.
///
/// Returns `None` when the file cannot be fetched or decoded, or is not a
/// recognised manifest.
pub async fn fetch_manifest<H: CodeHost + ?Sized>(
    host: &H,
    repository: &RepositorySummary,
    path: &str,
) -> Option<ManifestRecord> {
    let file = match host
        .file_content(&repository.full_name, path, &repository.default_branch)
        .await
    {
        Ok(file) => file,
        Err(e) => {
            warn!(path, error = %e, "Failed to fetch file content");
            return None;
        }
    };

    if !file.encoding.is_empty() && file.encoding != "base64" {
        warn!(path, encoding = %file.encoding, "Unsupported content encoding");
        return None;
    }

    let content = match decode_content(&file.content) {
        Ok(content) => content,
        Err(e) => {
            warn!(path, error = %e, "Failed to decode file content");
            return None;
        }
    };

    let record = parse_manifest(path, &content);
    if let Some(record) = &record {
        debug!(
            path,
            ecosystem = %record.ecosystem,
            dependencies = record.dependencies.as_ref().map_or(0, |deps| deps.len()),
            "Parsed manifest"
        );
    }
    record
}
