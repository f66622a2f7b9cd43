//! Sizing request and its validated builder.

use serde::{Deserialize, Serialize};

use crate::constants::defaults;
use crate::error::{SizingError, SizingResult};

/// Everything the engine needs to size a set of identical tanks.
///
/// Build with [`DesignRequest::builder`], which fills the documented defaults and
/// validates on `build()`. The engine validates again on entry, so a request
/// assembled field by field is still checked before any arithmetic runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesignRequest {
    /// Production rate (tonnes/day)
    pub production_rate_tpd: f64,
    /// Storage period (days)
    pub holding_period_days: f64,
    /// Liquid density (kg/m³)
    pub density_kg_m3: f64,
    /// Display name only; carried into the tank specification rows
    pub chemical_name: String,
    /// Usable fraction of geometric volume, in (0, 1]
    pub max_fill_fraction: f64,
    /// Added to every computed minimum thickness (mm)
    pub corrosion_allowance_mm: f64,
    /// Identical tanks sharing the total volume
    pub num_tanks: u32,
    /// Fractional margin on production rate (0 = none)
    pub design_margin: f64,
    /// Allowable stress, design condition (MPa)
    pub allowable_stress_design_mpa: f64,
    /// Allowable stress, hydrostatic test condition (MPa)
    pub allowable_stress_test_mpa: f64,
}

impl DesignRequest {
    pub fn builder(production_rate_tpd: f64, holding_period_days: f64) -> DesignRequestBuilder {
        DesignRequestBuilder {
            request: DesignRequest {
                production_rate_tpd,
                holding_period_days,
                density_kg_m3: defaults::DENSITY_KG_M3,
                chemical_name: defaults::CHEMICAL_NAME.to_string(),
                max_fill_fraction: defaults::MAX_FILL_FRACTION,
                corrosion_allowance_mm: defaults::CORROSION_ALLOWANCE_MM,
                num_tanks: defaults::NUM_TANKS,
                design_margin: defaults::DESIGN_MARGIN,
                allowable_stress_design_mpa: defaults::ALLOWABLE_STRESS_DESIGN_MPA,
                allowable_stress_test_mpa: defaults::ALLOWABLE_STRESS_TEST_MPA,
            },
        }
    }

    /// Production rate with the design margin applied (tonnes/day).
    pub fn adjusted_production_rate_tpd(&self) -> f64 {
        self.production_rate_tpd * (1.0 + self.design_margin)
    }

    pub fn validate(&self) -> SizingResult<()> {
        positive("production_rate_tpd", self.production_rate_tpd)?;
        positive("holding_period_days", self.holding_period_days)?;
        positive("density_kg_m3", self.density_kg_m3)?;

        let fill = finite("max_fill_fraction", self.max_fill_fraction)?;
        if fill <= 0.0 || fill > 1.0 {
            return Err(SizingError::InvalidInput {
                field: "max_fill_fraction",
                value: fill,
                reason: "must be in (0, 1]",
            });
        }

        non_negative("corrosion_allowance_mm", self.corrosion_allowance_mm)?;

        if self.num_tanks == 0 {
            return Err(SizingError::InvalidInput {
                field: "num_tanks",
                value: 0.0,
                reason: "at least one tank is required",
            });
        }

        non_negative("design_margin", self.design_margin)?;
        positive("allowable_stress_design_mpa", self.allowable_stress_design_mpa)?;
        positive("allowable_stress_test_mpa", self.allowable_stress_test_mpa)?;
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> SizingResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SizingError::InvalidInput {
            field,
            value,
            reason: "must be finite",
        })
    }
}

fn positive(field: &'static str, value: f64) -> SizingResult<()> {
    if finite(field, value)? <= 0.0 {
        return Err(SizingError::InvalidInput {
            field,
            value,
            reason: "must be positive",
        });
    }
    Ok(())
}

fn non_negative(field: &'static str, value: f64) -> SizingResult<()> {
    if finite(field, value)? < 0.0 {
        return Err(SizingError::InvalidInput {
            field,
            value,
            reason: "must not be negative",
        });
    }
    Ok(())
}

#[derive(Debug, Clone)]
pub struct DesignRequestBuilder {
    request: DesignRequest,
}

impl DesignRequestBuilder {
    pub fn density_kg_m3(mut self, v: f64) -> Self {
        self.request.density_kg_m3 = v;
        self
    }

    pub fn chemical_name(mut self, name: impl Into<String>) -> Self {
        self.request.chemical_name = name.into();
        self
    }

    pub fn max_fill_fraction(mut self, v: f64) -> Self {
        self.request.max_fill_fraction = v;
        self
    }

    pub fn corrosion_allowance_mm(mut self, v: f64) -> Self {
        self.request.corrosion_allowance_mm = v;
        self
    }

    pub fn num_tanks(mut self, n: u32) -> Self {
        self.request.num_tanks = n;
        self
    }

    pub fn design_margin(mut self, v: f64) -> Self {
        self.request.design_margin = v;
        self
    }

    pub fn allowable_stress_design_mpa(mut self, v: f64) -> Self {
        self.request.allowable_stress_design_mpa = v;
        self
    }

    pub fn allowable_stress_test_mpa(mut self, v: f64) -> Self {
        self.request.allowable_stress_test_mpa = v;
        self
    }

    pub fn build(self) -> SizingResult<DesignRequest> {
        self.request.validate()?;
        Ok(self.request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builder_fills_defaults() {
        let req = DesignRequest::builder(50.0, 10.0).build().unwrap();
        assert_eq!(req.density_kg_m3, 1000.0);
        assert_eq!(req.chemical_name, "Water");
        assert_eq!(req.max_fill_fraction, 0.85);
        assert_eq!(req.corrosion_allowance_mm, 1.5);
        assert_eq!(req.num_tanks, 2);
        assert_eq!(req.design_margin, 0.10);
        assert_eq!(req.allowable_stress_design_mpa, 138.0);
        assert_eq!(req.allowable_stress_test_mpa, 207.0);
    }

    #[test]
    fn margin_scales_rate() {
        let req = DesignRequest::builder(100.0, 7.0)
            .design_margin(0.25)
            .build()
            .unwrap();
        assert_eq!(req.adjusted_production_rate_tpd(), 125.0);
    }

    #[test]
    fn rejects_non_positive_rate_and_period() {
        let err = DesignRequest::builder(0.0, 7.0).build().unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidInput {
                field: "production_rate_tpd",
                ..
            }
        ));

        let err = DesignRequest::builder(10.0, -1.0).build().unwrap_err();
        assert!(matches!(
            err,
            SizingError::InvalidInput {
                field: "holding_period_days",
                ..
            }
        ));
    }

    #[test]
    fn fill_fraction_bounds() {
        assert!(
            DesignRequest::builder(10.0, 7.0)
                .max_fill_fraction(1.0)
                .build()
                .is_ok()
        );
        for bad in [0.0, -0.2, 1.01, f64::NAN] {
            let err = DesignRequest::builder(10.0, 7.0)
                .max_fill_fraction(bad)
                .build()
                .unwrap_err();
            assert!(matches!(
                err,
                SizingError::InvalidInput {
                    field: "max_fill_fraction",
                    ..
                }
            ));
        }
    }

    #[test]
    fn rejects_zero_tanks_and_negative_allowances() {
        assert!(DesignRequest::builder(10.0, 7.0).num_tanks(0).build().is_err());
        assert!(
            DesignRequest::builder(10.0, 7.0)
                .corrosion_allowance_mm(-0.5)
                .build()
                .is_err()
        );
        assert!(
            DesignRequest::builder(10.0, 7.0)
                .allowable_stress_test_mpa(0.0)
                .build()
                .is_err()
        );
        assert!(
            DesignRequest::builder(10.0, 7.0)
                .design_margin(-0.1)
                .build()
                .is_err()
        );
    }

    #[test]
    fn zero_allowance_and_margin_are_valid() {
        let req = DesignRequest::builder(10.0, 7.0)
            .corrosion_allowance_mm(0.0)
            .design_margin(0.0)
            .build();
        assert!(req.is_ok());
    }
}
