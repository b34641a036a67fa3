//! Native text layer and link annotation extraction.

use super::error::ExtractError;
use lopdf::{Document, Object};

/// Extracts the text layer from PDF bytes.
pub(crate) fn extract_text(bytes: &[u8]) -> Result<String, ExtractError> {
    pdf_extract::extract_text_from_mem(bytes).map_err(|e| ExtractError::Native {
        message: e.to_string(),
    })
}

/// Collects the URI targets of every link annotation in the document.
pub(crate) fn annotation_uris(bytes: &[u8]) -> Result<Vec<String>, ExtractError> {
    let document = Document::load_mem(bytes).map_err(|e| ExtractError::Native {
        message: e.to_string(),
    })?;

    let mut uris = Vec::new();
    for page_id in document.get_pages().into_values() {
        let Ok(page) = document.get_dictionary(page_id) else {
            continue;
        };
        let Some(annotations) = page
            .get(b"Annots")
            .ok()
            .and_then(|annots| document.dereference(annots).ok())
            .and_then(|(_, annots)| annots.as_array().ok())
        else {
            continue;
        };
        uris.extend(
            annotations
                .iter()
                .filter_map(|annotation| link_target(&document, annotation)),
        );
    }
    Ok(uris)
}

/// Follows `annotation → /A → /URI`.
fn link_target(document: &Document, annotation: &Object) -> Option<String> {
    let (_, annotation) = document.dereference(annotation).ok()?;
    let action = annotation.as_dict().ok()?.get(b"A").ok()?;
    let (_, action) = document.dereference(action).ok()?;
    let uri = action.as_dict().ok()?.get(b"URI").ok()?;
    let (_, uri) = document.dereference(uri).ok()?;
    Some(String::from_utf8_lossy(uri.as_str().ok()?).into_owned())
}
