//! Shell thickness vs height at constant tank volume, for charting.

use std::f64::consts::PI;

use serde::{Deserialize, Serialize};
use tk_core::units::{Length, m, to_m, to_m3};

use crate::constants::SERIES_HEIGHT_FACTORS;
use crate::dimensions::optimize_dimensions;
use crate::error::SizingResult;
use crate::request::DesignRequest;
use crate::thickness::compute_shell_thickness;
use crate::volume::compute_storage_volume;

pub const SERIES_TITLE: &str = "Shell Thickness vs Tank Height";
pub const SERIES_X_TITLE: &str = "Tank Height (m)";
pub const SERIES_Y_TITLE: &str = "Shell Thickness (mm)";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessPoint {
    pub height_factor: f64,
    pub height: Length,
    /// Diameter that keeps the per-tank volume at this height
    pub diameter: Length,
    pub shell_thickness_mm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThicknessSeries {
    pub title: String,
    pub x_title: String,
    pub y_title: String,
    pub points: Vec<ThicknessPoint>,
}

impl ThicknessSeries {
    /// (height m, shell thickness mm) pairs in series order.
    pub fn pairs(&self) -> Vec<(f64, f64)> {
        self.points
            .iter()
            .map(|p| (to_m(p.height), p.shell_thickness_mm))
            .collect()
    }
}

/// Sweep height from 0.5x to 1.5x the optimised height, re-solving diameter to
/// hold volume constant. Zero heights are skipped.
pub fn generate_thickness_series(request: &DesignRequest) -> SizingResult<ThicknessSeries> {
    let storage = compute_storage_volume(request)?;
    let volume_m3 = to_m3(storage.volume_per_tank);
    let base_height_m = to_m(optimize_dimensions(storage.volume_per_tank).height);

    let points = SERIES_HEIGHT_FACTORS
        .iter()
        .filter_map(|&height_factor| {
            let height_m = base_height_m * height_factor;
            if height_m == 0.0 {
                return None;
            }
            let diameter_m = (4.0 * volume_m3 / (PI * height_m)).sqrt();
            let shell = compute_shell_thickness(m(diameter_m), m(height_m), request);
            Some(ThicknessPoint {
                height_factor,
                height: m(height_m),
                diameter: m(diameter_m),
                shell_thickness_mm: shell.shell_thickness_mm,
            })
        })
        .collect();

    Ok(ThicknessSeries {
        title: SERIES_TITLE.to_string(),
        x_title: SERIES_X_TITLE.to_string(),
        y_title: SERIES_Y_TITLE.to_string(),
        points,
    })
}
