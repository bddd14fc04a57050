//! Normalizes a spreadsheet query response into catalog entries.
//!
//! The response is JSON, possibly wrapped in a callback, of the shape
//! `{"table": {"rows": [{"c": [cell, ...]}, ...]}}` where each cell is
//! `null` or `{"v": value, ...}`. Columns used:
//!
//! | column | meaning |
//! |---|---|
//! | 1 | fish name |
//! | 2 | comma separated locations |
//! | 4 | primary trait |
//! | 6, 8, 10, 12 | optional further traits |
//! | 15 | catch change |
//!
//! Rows whose first two cells are `null` are spacers and get skipped.

use serde::Deserialize;
use serde_json::Value;
use thiserror::Error;
use tracing::{debug, warn};

use crate::model::entity::{Fish, Location, Trait};

const NAME_COLUMN: usize = 1;
const LOCATIONS_COLUMN: usize = 2;
const PRIMARY_TRAIT_COLUMN: usize = 4;
const EXTRA_TRAIT_COLUMNS: [usize; 4] = [6, 8, 10, 12];
const CATCH_CHANGE_COLUMN: usize = 15;

#[derive(Debug, Error)]
pub enum SheetError {
    #[error("response does not contain a JSON object")]
    MissingPayload,
    #[error("malformed JSON payload: {0}")]
    Json(#[from] serde_json::Error),
    #[error("row {row} is malformed: {source}")]
    MalformedRow {
        row: usize,
        #[source]
        source: ColumnError,
    },
}

#[derive(Debug, Clone, Error, PartialEq)]
pub enum ColumnError {
    #[error("column {0} is missing")]
    Missing(usize),
    #[error("column {0} is empty")]
    Null(usize),
    #[error("column {0} is not a string")]
    NotString(usize),
    #[error("column {0} is not a number")]
    NotNumber(usize),
}

#[derive(Debug, Deserialize)]
struct Response {
    table: Table,
}

#[derive(Debug, Deserialize)]
struct Table {
    rows: Vec<Row>,
}

#[derive(Debug, Deserialize)]
struct Row {
    c: Vec<Option<Cell>>,
}

#[derive(Debug, Deserialize)]
struct Cell {
    #[serde(default)]
    v: Value,
}

impl Row {
    fn cell(&self, column: usize) -> Result<Option<&Value>, ColumnError> {
        match self.c.get(column) {
            None => Err(ColumnError::Missing(column)),
            Some(cell) => Ok(cell.as_ref().map(|cell| &cell.v)),
        }
    }

    fn string(&self, column: usize) -> Result<&str, ColumnError> {
        self.optional_string(column)?.ok_or(ColumnError::Null(column))
    }

    fn optional_string(&self, column: usize) -> Result<Option<&str>, ColumnError> {
        match self.cell(column)? {
            None => Ok(None),
            Some(value) => value.as_str().map(Some).ok_or(ColumnError::NotString(column)),
        }
    }

    fn number(&self, column: usize) -> Result<f64, ColumnError> {
        self.cell(column)?
            .ok_or(ColumnError::Null(column))?
            .as_f64()
            .ok_or(ColumnError::NotNumber(column))
    }

    fn is_spacer(&self) -> bool {
        matches!(self.c.as_slice(), [None, None, ..])
    }

    fn to_fish(&self) -> Result<Fish, ColumnError> {
        let name = self.string(NAME_COLUMN)?.to_string();
        let locations = parse_locations(self.string(LOCATIONS_COLUMN)?);

        let mut traits: Vec<Trait> = vec![self.string(PRIMARY_TRAIT_COLUMN)?.trim().to_string()];
        for column in EXTRA_TRAIT_COLUMNS {
            if let Some(extra) = self.optional_string(column)? {
                let extra = extra.trim();
                if !extra.is_empty() {
                    traits.push(extra.to_string());
                }
            }
        }

        let catch_change = self.number(CATCH_CHANGE_COLUMN)?;
        Ok(Fish { name, locations, traits, catch_change })
    }
}

/// Splits a comma separated location list, dropping labels that are not one
/// of the four locations. Order and repeats are kept.
pub fn parse_locations(raw: &str) -> Vec<Location> {
    raw.split(',')
        .filter_map(|label| {
            let label = label.trim();
            let location = Location::from_label(label);
            if location.is_none() && !label.is_empty() {
                debug!(label, "ignoring unknown location");
            }
            location
        })
        .collect()
}

/// Cuts the outermost `{...}` out of a raw response body.
fn extract_payload(raw: &str) -> Result<&str, SheetError> {
    match (raw.find('{'), raw.rfind('}')) {
        (Some(start), Some(end)) if start < end => Ok(&raw[start..=end]),
        _ => Err(SheetError::MissingPayload),
    }
}

pub fn parse_sheet(raw: &str) -> Result<Vec<Fish>, SheetError> {
    let response: Response = serde_json::from_str(extract_payload(raw)?)?;

    let mut catalog = Vec::with_capacity(response.table.rows.len());
    for (index, row) in response.table.rows.iter().enumerate() {
        match row.to_fish() {
            Ok(fish) => catalog.push(fish),
            Err(_) if row.is_spacer() => continue,
            Err(source) => {
                warn!(row = index, %source, "rejecting sheet");
                return Err(SheetError::MalformedRow { row: index, source });
            }
        }
    }

    debug!(rows = response.table.rows.len(), fishes = catalog.len(), "parsed sheet");
    Ok(catalog)
}
