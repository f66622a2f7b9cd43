//! Storage volume from production rate and holding period.

use serde::{Deserialize, Serialize};
use tk_core::units::{Mass, Volume, constants::KG_PER_TONNE, m3, tonnes};
use tk_core::ensure_finite;
use tracing::debug;

use crate::error::SizingResult;
use crate::request::DesignRequest;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct VolumeBreakdown {
    /// Product accumulated over the holding period
    pub total_mass: Mass,
    /// Liquid volume of that product
    pub total_volume: Volume,
    /// Liquid volume grossed up for the fill fraction
    pub geometric_volume: Volume,
    /// Geometric volume carried by each tank
    pub volume_per_tank: Volume,
}

pub fn compute_storage_volume(request: &DesignRequest) -> SizingResult<VolumeBreakdown> {
    request.validate()?;

    let total_mass_t = request.adjusted_production_rate_tpd() * request.holding_period_days;
    let total_volume_m3 = total_mass_t * KG_PER_TONNE / request.density_kg_m3;
    let geometric_volume_m3 = total_volume_m3 / request.max_fill_fraction;
    let volume_per_tank_m3 = geometric_volume_m3 / f64::from(request.num_tanks);

    ensure_finite(volume_per_tank_m3, "volume per tank")?;

    debug!(
        total_mass_t,
        total_volume_m3,
        geometric_volume_m3,
        volume_per_tank_m3,
        "storage volume"
    );

    Ok(VolumeBreakdown {
        total_mass: tonnes(total_mass_t),
        total_volume: m3(total_volume_m3),
        geometric_volume: m3(geometric_volume_m3),
        volume_per_tank: m3(volume_per_tank_m3),
    })
}
