//! tk-project: case file format, validation, and resolution into sizing requests.

pub mod migrate;
pub mod resolve;
pub mod schema;
pub mod validate;

pub use migrate::{LATEST_VERSION, migrate_to_latest};
pub use resolve::{resolve_case, resolve_case_by_id};
pub use schema::*;
pub use validate::{ValidationError, validate_case_file};

pub type ProjectResult<T> = Result<T, ProjectError>;

#[derive(thiserror::Error, Debug)]
pub enum ProjectError {
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    #[error("Migration error: {what}")]
    Migration { what: String },

    #[error("Case not found: {id}")]
    CaseNotFound { id: String },

    #[error("Chemical error: {0}")]
    Chemical(#[from] tk_chem::ChemError),

    #[error("Sizing error: {0}")]
    Sizing(#[from] tk_sizing::SizingError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub fn load_yaml(path: &std::path::Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let mut file: CaseFile = serde_yaml::from_str(&content)?;
    file = migrate_to_latest(file)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_yaml(path: &std::path::Path, file: &CaseFile) -> ProjectResult<()> {
    validate_case_file(file)?;
    let content = serde_yaml::to_string(file)?;
    std::fs::write(path, content)?;
    Ok(())
}

pub fn load_json(path: &std::path::Path) -> ProjectResult<CaseFile> {
    let content = std::fs::read_to_string(path)?;
    let mut file: CaseFile = serde_json::from_str(&content)?;
    file = migrate_to_latest(file)?;
    validate_case_file(&file)?;
    Ok(file)
}

pub fn save_json(path: &std::path::Path, file: &CaseFile) -> ProjectResult<()> {
    validate_case_file(file)?;
    let content = serde_json::to_string_pretty(file)?;
    std::fs::write(path, content)?;
    Ok(())
}
