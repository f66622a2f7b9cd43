//! Error types for the tk-app service layer.

use std::path::PathBuf;

/// Application error type that wraps errors from the backend crates and
/// provides one error interface for every frontend.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Case file error: {0}")]
    Project(String),

    #[error("Failed to read case file: {path}")]
    CaseFileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Case file validation failed: {0}")]
    Validation(String),

    #[error("Case not found: {0}")]
    CaseNotFound(String),

    #[error("Sizing error: {0}")]
    Sizing(#[from] tk_sizing::SizingError),

    #[error("Chemical error: {0}")]
    Chemical(#[from] tk_chem::ChemError),

    #[error("Results error: {0}")]
    Results(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<tk_project::ProjectError> for AppError {
    fn from(err: tk_project::ProjectError) -> Self {
        use tk_project::ProjectError;
        match err {
            ProjectError::Validation(e) => AppError::Validation(e.to_string()),
            ProjectError::CaseNotFound { id } => AppError::CaseNotFound(id),
            ProjectError::Sizing(e) => AppError::Sizing(e),
            ProjectError::Chemical(e) => AppError::Chemical(e),
            other => AppError::Project(other.to_string()),
        }
    }
}

impl From<tk_results::ResultsError> for AppError {
    fn from(err: tk_results::ResultsError) -> Self {
        match err {
            tk_results::ResultsError::CaseNotFound { name } => AppError::CaseNotFound(name),
            other => AppError::Results(other.to_string()),
        }
    }
}
