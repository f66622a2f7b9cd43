//! Turn a case definition into a validated sizing request.
//!
//! Precedence for each chemical-dependent field: value set on the case, then the
//! catalog entry for `chemical_id`, then the engine default.

use tk_chem::ChemicalLookup;
use tk_sizing::DesignRequest;
use tracing::debug;

use crate::schema::{CaseDef, CaseFile};
use crate::{ProjectError, ProjectResult};

pub fn resolve_case(case: &CaseDef, chemicals: &dyn ChemicalLookup) -> ProjectResult<DesignRequest> {
    let chemical = case
        .chemical_id
        .as_deref()
        .map(|id| chemicals.require(id))
        .transpose()?;

    let mut builder = DesignRequest::builder(case.production_rate_tpd, case.holding_period_days)
        .max_fill_fraction(case.max_fill_fraction)
        .num_tanks(case.num_tanks)
        .design_margin(case.design_margin)
        .allowable_stress_design_mpa(case.allowable_stress_design_mpa)
        .allowable_stress_test_mpa(case.allowable_stress_test_mpa);

    if let Some(chem) = &chemical {
        debug!(case = %case.id, chemical = %chem.id, "using catalog properties");
        builder = builder
            .chemical_name(chem.name.clone())
            .density_kg_m3(chem.density_kg_m3)
            .corrosion_allowance_mm(chem.corrosion_allowance_mm);
    }
    if let Some(name) = &case.chemical_name {
        builder = builder.chemical_name(name.clone());
    }
    if let Some(density) = case.density_kg_m3 {
        builder = builder.density_kg_m3(density);
    }
    if let Some(ca) = case.corrosion_allowance_mm {
        builder = builder.corrosion_allowance_mm(ca);
    }

    Ok(builder.build()?)
}

pub fn resolve_case_by_id(
    file: &CaseFile,
    case_id: &str,
    chemicals: &dyn ChemicalLookup,
) -> ProjectResult<DesignRequest> {
    let case = file
        .cases
        .iter()
        .find(|c| c.id == case_id)
        .ok_or_else(|| ProjectError::CaseNotFound {
            id: case_id.to_string(),
        })?;
    resolve_case(case, chemicals)
}
