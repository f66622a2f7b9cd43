//! Design constants for API 650 atmospheric tanks.

/// Height-to-diameter ratio used when sizing a tank.
pub const TARGET_ASPECT_RATIO: f64 = 1.7;

/// Dimensions are rounded to this many decimal places (0.1 m).
pub const DIMENSION_DECIMALS: i32 = 1;

/// Commercial plate stock, ascending (mm).
pub const STANDARD_PLATE_THICKNESSES_MM: [f64; 14] = [
    5.0, 6.0, 8.0, 10.0, 12.0, 16.0, 19.0, 22.0, 25.0, 28.0, 32.0, 38.0, 44.0, 50.0,
];

/// Step used past the end of the plate table (mm).
pub const OVERSIZE_PLATE_STEP_MM: f64 = 6.0;

/// Leading constant of the one-foot method equations (US customary units).
pub const ONE_FOOT_METHOD_COEFF: f64 = 2.6;

/// Head is evaluated this far above the bottom (ft).
pub const ONE_FOOT_OFFSET_FT: f64 = 1.0;

/// Minimum shell thickness including corrosion allowance (3/16 in).
pub const MIN_SHELL_THICKNESS_IN: f64 = 0.1875;

pub const MIN_BOTTOM_THICKNESS_MM: f64 = 6.0;
pub const MIN_ROOF_THICKNESS_MM: f64 = 5.0;

/// Bund capacity as a multiple of tank capacity.
pub const BUND_CAPACITY_FACTOR: f64 = 1.1;

/// Height multipliers for the thickness sensitivity series.
pub const SERIES_HEIGHT_FACTORS: [f64; 11] =
    [0.5, 0.6, 0.7, 0.8, 0.9, 1.0, 1.1, 1.2, 1.3, 1.4, 1.5];

pub mod defaults {
    pub const DENSITY_KG_M3: f64 = 1000.0;
    pub const CHEMICAL_NAME: &str = "Water";
    pub const MAX_FILL_FRACTION: f64 = 0.85;
    pub const CORROSION_ALLOWANCE_MM: f64 = 1.5;
    pub const NUM_TANKS: u32 = 2;
    pub const DESIGN_MARGIN: f64 = 0.10;
    /// SS316L design-condition allowable stress.
    pub const ALLOWABLE_STRESS_DESIGN_MPA: f64 = 138.0;
    /// SS316L hydrotest allowable stress.
    pub const ALLOWABLE_STRESS_TEST_MPA: f64 = 207.0;
}
