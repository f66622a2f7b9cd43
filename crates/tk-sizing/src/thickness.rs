//! Shell, bottom and roof plate thickness.
//!
//! Shell thickness follows the API 650 one-foot method: the hydrostatic head is
//! taken one foot above the bottom (H − 1 ft) to account for the restraint of the
//! bottom-to-shell joint. The equations are the US customary forms
//!
//! ```text
//! td = 2.6 · D · (H − 1) · G / Sd      (design, product)
//! tt = 2.6 · D · (H − 1) / St          (hydrotest, water)
//! ```
//!
//! with D and H in ft, stresses in psi and thickness in inches.

use serde::{Deserialize, Serialize};
use tk_core::units::constants::{FT_PER_M, MM_PER_IN, PSI_PER_MPA, WATER_DENSITY_KG_M3};
use tk_core::units::{Length, to_m};

use crate::constants::{
    MIN_BOTTOM_THICKNESS_MM, MIN_ROOF_THICKNESS_MM, MIN_SHELL_THICKNESS_IN,
    ONE_FOOT_METHOD_COEFF, ONE_FOOT_OFFSET_FT,
    OVERSIZE_PLATE_STEP_MM, STANDARD_PLATE_THICKNESSES_MM,
};
use crate::request::DesignRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShellThickness {
    /// Governing thickness incl. corrosion allowance and the 3/16 in minimum
    pub required_thickness_mm: f64,
    /// Plate actually specified (>= required)
    pub shell_thickness_mm: f64,
    /// Design-condition thickness before corrosion allowance
    pub design_thickness_mm: f64,
    /// Hydrotest thickness before corrosion allowance
    pub test_thickness_mm: f64,
}

pub fn compute_shell_thickness(
    diameter: Length,
    height: Length,
    request: &DesignRequest,
) -> ShellThickness {
    let diameter_ft = to_m(diameter) * FT_PER_M;
    let height_ft = to_m(height) * FT_PER_M;
    let specific_gravity = request.density_kg_m3 / WATER_DENSITY_KG_M3;
    let sd_psi = request.allowable_stress_design_mpa * PSI_PER_MPA;
    let st_psi = request.allowable_stress_test_mpa * PSI_PER_MPA;

    // Too short for the one-foot correction: no hydrostatic contribution.
    let (design_in, test_in) = if height_ft <= ONE_FOOT_OFFSET_FT {
        (0.0, 0.0)
    } else {
        let head_ft = height_ft - ONE_FOOT_OFFSET_FT;
        let hoop = ONE_FOOT_METHOD_COEFF * diameter_ft * head_ft;
        (hoop * specific_gravity / sd_psi, hoop / st_psi)
    };

    let with_ca_in = design_in.max(test_in) + request.corrosion_allowance_mm / MM_PER_IN;
    let required_in = with_ca_in.max(MIN_SHELL_THICKNESS_IN);
    let required_thickness_mm = required_in * MM_PER_IN;

    ShellThickness {
        required_thickness_mm,
        shell_thickness_mm: round_to_standard_plate(required_thickness_mm),
        design_thickness_mm: design_in * MM_PER_IN,
        test_thickness_mm: test_in * MM_PER_IN,
    }
}

/// Smallest stock plate at least `thickness_mm` thick.
///
/// Beyond the thickest stock plate, the next multiple of 6 mm is used.
pub fn round_to_standard_plate(thickness_mm: f64) -> f64 {
    STANDARD_PLATE_THICKNESSES_MM
        .iter()
        .copied()
        .find(|&std| std >= thickness_mm)
        .unwrap_or_else(|| (thickness_mm / OVERSIZE_PLATE_STEP_MM).ceil() * OVERSIZE_PLATE_STEP_MM)
}

/// Bottom plate: fixed minimum plus corrosion allowance, not rounded to stock.
pub fn compute_bottom_thickness(request: &DesignRequest) -> f64 {
    MIN_BOTTOM_THICKNESS_MM + request.corrosion_allowance_mm
}

/// Roof plate: fixed minimum plus corrosion allowance, not rounded to stock.
pub fn compute_roof_thickness(request: &DesignRequest) -> f64 {
    MIN_ROOF_THICKNESS_MM + request.corrosion_allowance_mm
}
