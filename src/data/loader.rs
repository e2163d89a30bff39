//! Reading germicule input from JSON

use crate::data::germicule::{GermiculeItem, GermiculeMeta};
use crate::error::{GermiculeError, Result};
use serde::Deserialize;
use std::path::Path;

/// Accepted top-level documents: a bare member list or the full meta object.
/// Members must be tried first, a derived struct also accepts sequences.
#[derive(Deserialize)]
#[serde(untagged)]
enum Document {
    Members(Vec<GermiculeItem>),
    Meta(GermiculeMeta),
}

/// Parse a germicule document from a JSON string
pub fn parse_meta(text: &str) -> Result<GermiculeMeta> {
    let meta = match serde_json::from_str::<Document>(text)? {
        Document::Meta(meta) => meta,
        Document::Members(members) => GermiculeMeta::new(members),
    };

    log::debug!(
        "Parsed {} top-level germicules and {} declared clusters",
        meta.germicules.as_ref().map_or(0, Vec::len),
        meta.clusters.as_ref().map_or(0, Vec::len)
    );

    Ok(meta)
}

/// Load a germicule document from a JSON file
pub fn load_meta(path: impl AsRef<Path>) -> Result<GermiculeMeta> {
    let path = path.as_ref();
    log::info!("Reading germicule file: {}", path.display());

    if !path.exists() {
        return Err(GermiculeError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let text = std::fs::read_to_string(path)?;
    parse_meta(&text)
}
