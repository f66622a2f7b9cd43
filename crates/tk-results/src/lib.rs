//! tk-results: saved design cases and result caching.
//!
//! The engine never owns state; frontends inject a [`DesignStore`] to keep the
//! current design and named cases for comparison and export.

pub mod hash;
pub mod store;
pub mod types;

pub use hash::compute_case_id;
pub use store::{DesignStore, FileDesignStore, MemoryDesignStore};
pub use types::*;

pub type ResultsResult<T> = Result<T, ResultsError>;

#[derive(thiserror::Error, Debug)]
pub enum ResultsError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Case not found: {name}")]
    CaseNotFound { name: String },

    #[error("Invalid case name: {name:?}")]
    InvalidName { name: String },
}
