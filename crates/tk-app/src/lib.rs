//! Shared application service layer for tankflow.
//!
//! Frontends (the CLI today) go through this crate for case files, cached
//! designs, saved-case comparison and tabular reports, so the sizing engine
//! stays free of I/O and session state.

pub mod design_service;
pub mod error;
pub mod project_service;
pub mod report;

// Re-export key types for convenience
pub use design_service::{
    CaseComparison, DesignOptions, DesignOutcome, ENGINE_VERSION, compare_cases, ensure_design,
    run_design,
};
pub use error::{AppError, AppResult};
pub use project_service::{CaseSummary, list_cases, load_case_file, resolve_case};
pub use report::{
    ParameterRow, TANK_TABLE_HEADERS, comparison_table, design_parameter_rows, tank_table_rows,
    to_json_pretty, write_comparison_csv, write_series_csv, write_tank_csv,
};
