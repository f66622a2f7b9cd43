//! Case file validation logic.

use crate::schema::{CaseDef, CaseFile};
use std::collections::HashSet;
use tk_sizing::constants::defaults;
use tk_sizing::{DesignRequest, SizingError};

#[derive(thiserror::Error, Debug)]
pub enum ValidationError {
    #[error("Duplicate ID: {id} in {context}")]
    DuplicateId { id: String, context: String },

    #[error("Invalid value: {field} = {value} ({reason})")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Unsupported version: {version}")]
    UnsupportedVersion { version: u32 },
}

pub fn validate_case_file(file: &CaseFile) -> Result<(), ValidationError> {
    if file.version > crate::migrate::LATEST_VERSION {
        return Err(ValidationError::UnsupportedVersion {
            version: file.version,
        });
    }

    let mut case_ids = HashSet::new();
    for case in &file.cases {
        if !case_ids.insert(&case.id) {
            return Err(ValidationError::DuplicateId {
                id: case.id.clone(),
                context: format!("case file '{}'", file.name),
            });
        }
        validate_case(case)?;
    }

    Ok(())
}

fn validate_case(case: &CaseDef) -> Result<(), ValidationError> {
    if case.id.trim().is_empty() {
        return Err(ValidationError::InvalidValue {
            field: "id".to_string(),
            value: format!("{:?}", case.id),
            reason: "case id must not be empty".to_string(),
        });
    }

    // Chemical-dependent fields are checked with stand-in defaults here; the
    // catalog values are checked again when the case is resolved.
    let provisional = DesignRequest {
        production_rate_tpd: case.production_rate_tpd,
        holding_period_days: case.holding_period_days,
        density_kg_m3: case.density_kg_m3.unwrap_or(defaults::DENSITY_KG_M3),
        chemical_name: String::new(),
        max_fill_fraction: case.max_fill_fraction,
        corrosion_allowance_mm: case
            .corrosion_allowance_mm
            .unwrap_or(defaults::CORROSION_ALLOWANCE_MM),
        num_tanks: case.num_tanks,
        design_margin: case.design_margin,
        allowable_stress_design_mpa: case.allowable_stress_design_mpa,
        allowable_stress_test_mpa: case.allowable_stress_test_mpa,
    };

    provisional.validate().map_err(|e| match e {
        SizingError::InvalidInput {
            field,
            value,
            reason,
        } => ValidationError::InvalidValue {
            field: format!("case '{}' {}", case.id, field),
            value: value.to_string(),
            reason: reason.to_string(),
        },
        other => ValidationError::InvalidValue {
            field: format!("case '{}'", case.id),
            value: String::new(),
            reason: other.to_string(),
        },
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn file_with(cases: Vec<CaseDef>) -> CaseFile {
        CaseFile {
            version: crate::migrate::LATEST_VERSION,
            name: "test".to_string(),
            cases,
        }
    }

    #[test]
    fn accepts_defaults() {
        let file = file_with(vec![CaseDef::new("a", "A", 100.0, 7.0)]);
        assert!(validate_case_file(&file).is_ok());
    }

    #[test]
    fn rejects_duplicate_ids() {
        let file = file_with(vec![
            CaseDef::new("a", "A", 100.0, 7.0),
            CaseDef::new("a", "A again", 50.0, 3.0),
        ]);
        assert!(matches!(
            validate_case_file(&file),
            Err(ValidationError::DuplicateId { .. })
        ));
    }

    #[test]
    fn rejects_out_of_range_values() {
        let mut case = CaseDef::new("a", "A", 100.0, 7.0);
        case.max_fill_fraction = 1.5;
        let err = validate_case_file(&file_with(vec![case])).unwrap_err();
        assert!(err.to_string().contains("max_fill_fraction"));

        let mut case = CaseDef::new("b", "B", 100.0, 7.0);
        case.density_kg_m3 = Some(-1.0);
        assert!(validate_case_file(&file_with(vec![case])).is_err());

        let case = CaseDef::new("c", "C", 0.0, 7.0);
        assert!(validate_case_file(&file_with(vec![case])).is_err());
    }

    #[test]
    fn rejects_future_version() {
        let mut file = file_with(vec![]);
        file.version = crate::migrate::LATEST_VERSION + 1;
        assert!(matches!(
            validate_case_file(&file),
            Err(ValidationError::UnsupportedVersion { .. })
        ));
    }

    #[test]
    fn rejects_blank_id() {
        let file = file_with(vec![CaseDef::new("  ", "Blank", 100.0, 7.0)]);
        assert!(matches!(
            validate_case_file(&file),
            Err(ValidationError::InvalidValue { .. })
        ));
    }
}
