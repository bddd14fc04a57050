use thiserror::Error;

use crate::catalog::CatalogError;
use crate::config::ConfigError;
use crate::selection::SelectionError;
use crate::telemetry::TelemetryError;

/// Everything the command line tool can fail with. The optimizer itself
/// never fails.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("catalog error: {0}")]
    Catalog(#[from] CatalogError),
    #[error("selection error: {0}")]
    Selection(#[from] SelectionError),
    #[error("output error: {0}")]
    Output(#[from] serde_json::Error),
}
