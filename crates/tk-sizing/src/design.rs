//! Full tank design: volume → dimensions → plates → bund → spec table.

use serde::{Deserialize, Serialize};
use tk_core::round_to_decimals;
use tk_core::units::{Volume, to_m, to_m3};
use tracing::{debug, info};

use crate::constants::BUND_CAPACITY_FACTOR;
use crate::dimensions::{TankDimensions, optimize_dimensions};
use crate::error::SizingResult;
use crate::request::DesignRequest;
use crate::thickness::{
    ShellThickness, compute_bottom_thickness, compute_roof_thickness, compute_shell_thickness,
};
use crate::volume::{VolumeBreakdown, compute_storage_volume};

/// One row of the tank specification table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TankSpec {
    pub tank_no: u32,
    pub chemical: String,
    /// Actual tank volume, 0.1 m³ resolution
    pub capacity_m3: f64,
    pub diameter_m: f64,
    pub height_m: f64,
    pub shell_thickness_mm: f64,
    pub bottom_thickness_mm: f64,
    pub roof_thickness_mm: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignResult {
    pub storage: VolumeBreakdown,
    pub dimensions: TankDimensions,
    pub shell: ShellThickness,
    pub bottom_thickness_mm: f64,
    pub roof_thickness_mm: f64,
    pub bund_volume: Volume,
    /// One entry per tank, numbered from 1
    pub tank_specs: Vec<TankSpec>,
}

/// Secondary containment sized to 110% of the tank it serves.
pub fn compute_bund_volume(actual_tank_volume: Volume) -> Volume {
    actual_tank_volume * BUND_CAPACITY_FACTOR
}

pub fn design_tank(request: &DesignRequest) -> SizingResult<DesignResult> {
    request.validate()?;

    let storage = compute_storage_volume(request)?;
    let dimensions = optimize_dimensions(storage.volume_per_tank);
    debug!(
        diameter_m = to_m(dimensions.diameter),
        height_m = to_m(dimensions.height),
        actual_volume_m3 = to_m3(dimensions.actual_volume),
        "dimensions"
    );

    let shell = compute_shell_thickness(dimensions.diameter, dimensions.height, request);
    debug!(
        required_mm = shell.required_thickness_mm,
        shell_mm = shell.shell_thickness_mm,
        "shell thickness"
    );

    let bottom_thickness_mm = compute_bottom_thickness(request);
    let roof_thickness_mm = compute_roof_thickness(request);
    let bund_volume = compute_bund_volume(dimensions.actual_volume);

    let tank_specs = (1..=request.num_tanks)
        .map(|tank_no| TankSpec {
            tank_no,
            chemical: request.chemical_name.clone(),
            capacity_m3: round_to_decimals(to_m3(dimensions.actual_volume), 1),
            diameter_m: to_m(dimensions.diameter),
            height_m: to_m(dimensions.height),
            shell_thickness_mm: shell.shell_thickness_mm,
            bottom_thickness_mm,
            roof_thickness_mm,
        })
        .collect();

    info!(
        "Tank design completed: {} tanks, {}m x {}m",
        request.num_tanks,
        to_m(dimensions.diameter),
        to_m(dimensions.height)
    );

    Ok(DesignResult {
        storage,
        dimensions,
        shell,
        bottom_thickness_mm,
        roof_thickness_mm,
        bund_volume,
        tank_specs,
    })
}
