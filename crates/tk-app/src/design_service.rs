//! Design execution, cache reuse, and saved-case comparison.

use serde::Serialize;
use tk_core::units::{to_m, to_m3};
use tk_results::{DesignStore, SavedCase, compute_case_id};
use tk_sizing::{
    DesignRequest, DesignResult, ThicknessSeries, design_tank, generate_thickness_series,
};
use tracing::{debug, info};

use crate::error::{AppError, AppResult};

/// Version stamped into case ids; a new engine invalidates cached designs.
pub const ENGINE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Debug, Clone)]
pub struct DesignOptions {
    pub use_cache: bool,
    /// Keep the design in the store under this name
    pub save_as: Option<String>,
}

impl Default for DesignOptions {
    fn default() -> Self {
        Self {
            use_cache: true,
            save_as: None,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct DesignOutcome {
    pub case_id: String,
    pub request: DesignRequest,
    pub result: DesignResult,
    pub series: ThicknessSeries,
    pub loaded_from_cache: bool,
}

/// Size the tanks and build the thickness chart series for one request.
pub fn run_design(request: &DesignRequest) -> AppResult<DesignOutcome> {
    let result = design_tank(request)?;
    let series = generate_thickness_series(request)?;
    Ok(DesignOutcome {
        case_id: compute_case_id(request, ENGINE_VERSION),
        request: request.clone(),
        result,
        series,
        loaded_from_cache: false,
    })
}

/// Reuse a stored design with the same request hash, or compute a new one.
pub fn ensure_design(
    store: &mut dyn DesignStore,
    request: &DesignRequest,
    options: &DesignOptions,
) -> AppResult<DesignOutcome> {
    let case_id = compute_case_id(request, ENGINE_VERSION);

    let cached = if options.use_cache {
        store
            .list_cases()?
            .into_iter()
            .find(|c| c.case_id == case_id)
    } else {
        None
    };

    let outcome = match cached {
        Some(saved) => {
            debug!(case = %saved.name, "reusing stored design");
            DesignOutcome {
                series: generate_thickness_series(&saved.request)?,
                case_id,
                request: saved.request,
                result: saved.result,
                loaded_from_cache: true,
            }
        }
        None => run_design(request)?,
    };

    if let Some(name) = &options.save_as {
        let already_saved = store
            .load_case(name)
            .is_ok_and(|existing| existing.case_id == outcome.case_id);
        if !already_saved {
            let saved = SavedCase::new(
                name.clone(),
                outcome.request.clone(),
                outcome.result.clone(),
                ENGINE_VERSION,
            );
            store.save_case(&saved)?;
            info!(case = %name, "saved design case");
        }
    }

    Ok(outcome)
}

/// One column of a side-by-side case comparison.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CaseComparison {
    pub name: String,
    pub chemical: String,
    pub production_rate_tpd: f64,
    pub holding_period_days: f64,
    pub num_tanks: u32,
    pub diameter_m: f64,
    pub height_m: f64,
    pub actual_volume_m3: f64,
    pub shell_thickness_mm: f64,
    pub bottom_thickness_mm: f64,
    pub roof_thickness_mm: f64,
    pub bund_volume_m3: f64,
}

impl CaseComparison {
    fn from_saved(case: &SavedCase) -> Self {
        let r = &case.result;
        Self {
            name: case.name.clone(),
            chemical: case.request.chemical_name.clone(),
            production_rate_tpd: case.request.production_rate_tpd,
            holding_period_days: case.request.holding_period_days,
            num_tanks: case.request.num_tanks,
            diameter_m: to_m(r.dimensions.diameter),
            height_m: to_m(r.dimensions.height),
            actual_volume_m3: to_m3(r.dimensions.actual_volume),
            shell_thickness_mm: r.shell.shell_thickness_mm,
            bottom_thickness_mm: r.bottom_thickness_mm,
            roof_thickness_mm: r.roof_thickness_mm,
            bund_volume_m3: to_m3(r.bund_volume),
        }
    }
}

/// Compare named cases in the order given.
pub fn compare_cases(store: &dyn DesignStore, names: &[String]) -> AppResult<Vec<CaseComparison>> {
    if names.len() < 2 {
        return Err(AppError::InvalidInput(
            "Comparison needs at least two cases".to_string(),
        ));
    }

    names
        .iter()
        .map(|name| {
            let case = store.load_case(name)?;
            Ok(CaseComparison::from_saved(&case))
        })
        .collect()
}
