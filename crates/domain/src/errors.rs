//! Error types used throughout the engine

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for SiteGauge
///
/// The pure reconciliation components never fail; dirty field data degrades
/// to neutral values instead. Errors originate at the repository ports and
/// the row-ingestion boundary.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum SiteGaugeError {
    #[error("Data store error: {0}")]
    DataStore(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for SiteGauge operations
pub type Result<T> = std::result::Result<T, SiteGaugeError>;
