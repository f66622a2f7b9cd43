//! Case file schema definitions.

use serde::{Deserialize, Serialize};
use tk_sizing::constants::defaults;

/// A collection of named sizing cases, usually one file per plant area.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseFile {
    pub version: u32,
    pub name: String,
    #[serde(default)]
    pub cases: Vec<CaseDef>,
}

/// One sizing case.
///
/// Optional fields fall back to the chemical catalog entry named by
/// `chemical_id`, then to the engine defaults.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CaseDef {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub chemical_name: Option<String>,
    pub production_rate_tpd: f64,
    pub holding_period_days: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub density_kg_m3: Option<f64>,
    #[serde(default = "default_max_fill_fraction")]
    pub max_fill_fraction: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub corrosion_allowance_mm: Option<f64>,
    #[serde(default = "default_num_tanks")]
    pub num_tanks: u32,
    #[serde(default = "default_design_margin")]
    pub design_margin: f64,
    #[serde(default = "default_allowable_stress_design_mpa")]
    pub allowable_stress_design_mpa: f64,
    #[serde(default = "default_allowable_stress_test_mpa")]
    pub allowable_stress_test_mpa: f64,
}

impl CaseDef {
    /// A case with every optional field at its default.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        production_rate_tpd: f64,
        holding_period_days: f64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            chemical_id: None,
            chemical_name: None,
            production_rate_tpd,
            holding_period_days,
            density_kg_m3: None,
            max_fill_fraction: default_max_fill_fraction(),
            corrosion_allowance_mm: None,
            num_tanks: default_num_tanks(),
            design_margin: default_design_margin(),
            allowable_stress_design_mpa: default_allowable_stress_design_mpa(),
            allowable_stress_test_mpa: default_allowable_stress_test_mpa(),
        }
    }
}

fn default_max_fill_fraction() -> f64 {
    defaults::MAX_FILL_FRACTION
}

fn default_num_tanks() -> u32 {
    defaults::NUM_TANKS
}

fn default_design_margin() -> f64 {
    defaults::DESIGN_MARGIN
}

fn default_allowable_stress_design_mpa() -> f64 {
    defaults::ALLOWABLE_STRESS_DESIGN_MPA
}

fn default_allowable_stress_test_mpa() -> f64 {
    defaults::ALLOWABLE_STRESS_TEST_MPA
}
