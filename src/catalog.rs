use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::info;

use crate::model::entity::Fish;
use crate::sheet::{parse_sheet, SheetError};

/// How a catalog file is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogFormat {
    /// A saved spreadsheet query response.
    #[default]
    Sheet,
    /// A JSON array of already normalized fishes.
    Entries,
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid sheet response: {0}")]
    Sheet(#[from] SheetError),
    #[error("invalid catalog entries: {0}")]
    Entries(#[from] serde_json::Error),
}

pub fn parse_catalog(raw: &str, format: CatalogFormat) -> Result<Vec<Fish>, CatalogError> {
    let catalog = match format {
        CatalogFormat::Sheet => parse_sheet(raw)?,
        CatalogFormat::Entries => serde_json::from_str(raw)?,
    };
    Ok(catalog)
}

pub fn read_catalog<R: Read>(mut reader: R, format: CatalogFormat) -> Result<Vec<Fish>, CatalogError> {
    let mut raw = String::new();
    reader.read_to_string(&mut raw)?;
    parse_catalog(&raw, format)
}

pub fn load_catalog(path: impl AsRef<Path>, format: CatalogFormat) -> Result<Vec<Fish>, CatalogError> {
    let path = path.as_ref();
    let raw = std::fs::read_to_string(path)?;
    let catalog = parse_catalog(&raw, format)?;
    info!(path = %path.display(), ?format, fishes = catalog.len(), "loaded catalog");
    Ok(catalog)
}
