//! Tank diameter and height for a target volume.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tk_core::round_to_decimals;
use tk_core::units::{Length, Volume, m, m3, to_m3};

use crate::constants::{DIMENSION_DECIMALS, TARGET_ASPECT_RATIO};

/// Buildable tank dimensions.
///
/// `diameter` and `height` are rounded to 0.1 m and `actual_volume` is computed
/// from those rounded values, so it can differ from the requested volume by the
/// rounding residual.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankDimensions {
    pub diameter: Length,
    pub height: Length,
    pub actual_volume: Volume,
    /// Height over diameter of the rounded dimensions (0 when diameter is 0)
    pub aspect_ratio: f64,
}

/// Volume of a vertical cylinder (m³).
pub fn cylinder_volume_m3(diameter_m: f64, height_m: f64) -> f64 {
    PI * diameter_m * diameter_m / 4.0 * height_m
}

/// Solve `V = π/4 · D² · H` with `H = k · D` and round to shop tolerance.
///
/// Expects a non-negative volume.
pub fn optimize_dimensions(volume_per_tank: Volume) -> TankDimensions {
    let v = to_m3(volume_per_tank);
    let k = TARGET_ASPECT_RATIO;

    let diameter = (4.0 * v / (PI * k)).cbrt();
    let height = k * diameter;

    let diameter = round_to_decimals(diameter, DIMENSION_DECIMALS);
    let height = round_to_decimals(height, DIMENSION_DECIMALS);

    let aspect_ratio = if diameter == 0.0 {
        0.0
    } else {
        height / diameter
    };

    TankDimensions {
        diameter: m(diameter),
        height: m(height),
        actual_volume: m3(cylinder_volume_m3(diameter, height)),
        aspect_ratio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tk_core::units::to_m;

    #[test]
    fn worked_example_dimensions() {
        let dims = optimize_dimensions(m3(392.53));
        assert_eq!(to_m(dims.diameter), 6.6);
        assert_eq!(to_m(dims.height), 11.3);
        assert!((to_m3(dims.actual_volume) - 386.59).abs() < 0.01);
        assert!((dims.aspect_ratio - 11.3 / 6.6).abs() < 1e-12);
    }

    #[test]
    fn actual_volume_uses_rounded_dimensions() {
        let dims = optimize_dimensions(m3(1000.0));
        let d = to_m(dims.diameter);
        let h = to_m(dims.height);
        assert_eq!(to_m3(dims.actual_volume), PI * d * d / 4.0 * h);
        assert_eq!(round_to_decimals(d, 1), d);
        assert_eq!(round_to_decimals(h, 1), h);
    }

    #[test]
    fn tiny_volume_reports_zero_aspect_ratio() {
        let dims = optimize_dimensions(m3(1.0e-4));
        assert_eq!(to_m(dims.diameter), 0.0);
        assert_eq!(dims.aspect_ratio, 0.0);
        assert_eq!(to_m3(dims.actual_volume), 0.0);
    }

    #[test]
    fn zero_volume() {
        let dims = optimize_dimensions(m3(0.0));
        assert_eq!(to_m(dims.height), 0.0);
        assert_eq!(dims.aspect_ratio, 0.0);
    }
}
