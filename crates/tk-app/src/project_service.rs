//! Case file loading and introspection.

use std::path::Path;
use tk_chem::ChemicalLookup;
use tk_project::CaseFile;
use tk_sizing::DesignRequest;

use crate::error::{AppError, AppResult};

/// Summary of a case for listing.
#[derive(Debug, Clone)]
pub struct CaseSummary {
    pub id: String,
    pub name: String,
    pub chemical_id: Option<String>,
    pub production_rate_tpd: f64,
    pub holding_period_days: f64,
    pub num_tanks: u32,
}

/// Load a case file; `.json` is read as JSON, anything else as YAML.
pub fn load_case_file(path: &Path) -> AppResult<CaseFile> {
    if !path.exists() {
        return Err(AppError::CaseFileRead {
            path: path.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        });
    }

    let is_json = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
    let file = if is_json {
        tk_project::load_json(path)?
    } else {
        tk_project::load_yaml(path)?
    };
    Ok(file)
}

pub fn list_cases(file: &CaseFile) -> Vec<CaseSummary> {
    file.cases
        .iter()
        .map(|c| CaseSummary {
            id: c.id.clone(),
            name: c.name.clone(),
            chemical_id: c.chemical_id.clone(),
            production_rate_tpd: c.production_rate_tpd,
            holding_period_days: c.holding_period_days,
            num_tanks: c.num_tanks,
        })
        .collect()
}

pub fn resolve_case(
    file: &CaseFile,
    case_id: &str,
    chemicals: &dyn ChemicalLookup,
) -> AppResult<DesignRequest> {
    Ok(tk_project::resolve_case_by_id(file, case_id, chemicals)?)
}
