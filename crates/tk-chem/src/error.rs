//! Chemical lookup errors.

use thiserror::Error;
use tk_core::TkError;

/// Result type for chemical lookups.
pub type ChemResult<T> = Result<T, ChemError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ChemError {
    /// No catalog entry for the requested id.
    #[error("Unknown chemical: {id}")]
    NotFound { id: String },
}

impl From<ChemError> for TkError {
    fn from(err: ChemError) -> Self {
        match err {
            ChemError::NotFound { .. } => TkError::InvalidArg {
                what: "unknown chemical id",
            },
        }
    }
}
