// tk-core/src/units.rs

use uom::si::f64::{
    Length as UomLength, Mass as UomMass, MassDensity as UomMassDensity, Volume as UomVolume,
};

// Public canonical unit types (SI, f64)
pub type Length = UomLength;
pub type Mass = UomMass;
pub type Density = UomMassDensity;
pub type Volume = UomVolume;

#[inline]
pub fn m(v: f64) -> Length {
    use uom::si::length::meter;
    Length::new::<meter>(v)
}

#[inline]
pub fn m3(v: f64) -> Volume {
    use uom::si::volume::cubic_meter;
    Volume::new::<cubic_meter>(v)
}

/// Metric tonnes.
#[inline]
pub fn tonnes(v: f64) -> Mass {
    use uom::si::mass::kilogram;
    Mass::new::<kilogram>(v * constants::KG_PER_TONNE)
}

#[inline]
pub fn kg_per_m3(v: f64) -> Density {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    Density::new::<kilogram_per_cubic_meter>(v)
}

/// Read-back helpers in the units the sizing reports use.
#[inline]
pub fn to_m(v: Length) -> f64 {
    use uom::si::length::meter;
    v.get::<meter>()
}

#[inline]
pub fn to_m3(v: Volume) -> f64 {
    use uom::si::volume::cubic_meter;
    v.get::<cubic_meter>()
}

#[inline]
pub fn to_kg_per_m3(v: Density) -> f64 {
    use uom::si::mass_density::kilogram_per_cubic_meter;
    v.get::<kilogram_per_cubic_meter>()
}

#[inline]
pub fn to_tonnes(v: Mass) -> f64 {
    use uom::si::mass::kilogram;
    v.get::<kilogram>() / constants::KG_PER_TONNE
}

/// Conversion factors as published with the API 650 US-customary equations.
///
/// These are the rounded handbook values rather than the exact uom factors, so
/// thickness results line up with hand calculations.
pub mod constants {
    pub const FT_PER_M: f64 = 3.28084;
    pub const PSI_PER_MPA: f64 = 145.038;
    pub const MM_PER_IN: f64 = 25.4;
    pub const KG_PER_TONNE: f64 = 1000.0;
    /// Reference density for specific gravity.
    pub const WATER_DENSITY_KG_M3: f64 = 1000.0;
}
