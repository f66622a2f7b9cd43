//! tk-sizing: API 650 sizing engine for atmospheric storage tanks.
//!
//! Pipeline, each stage a pure function of its inputs:
//! - storage volume from production rate and holding period
//! - tank diameter/height at a fixed height-to-diameter ratio
//! - shell thickness by the one-foot method, rounded up to plate stock
//! - bottom and roof minimum thickness plus corrosion allowance
//! - bund (secondary containment) volume
//!
//! `design_tank` runs the whole pipeline; `generate_thickness_series` produces
//! the shell-thickness-vs-height curve for the same request.
//!
//! # Example
//!
//! ```
//! use tk_sizing::{DesignRequest, design_tank};
//!
//! let request = DesignRequest::builder(100.0, 7.0)
//!     .density_kg_m3(1049.0)
//!     .design_margin(0.0)
//!     .build()
//!     .unwrap();
//!
//! let result = design_tank(&request).unwrap();
//! assert_eq!(result.tank_specs.len(), 2);
//! println!("shell: {} mm", result.shell.shell_thickness_mm);
//! ```

pub mod constants;
pub mod design;
pub mod dimensions;
pub mod error;
pub mod request;
pub mod series;
pub mod thickness;
pub mod volume;

// Re-exports
pub use design::{DesignResult, TankSpec, compute_bund_volume, design_tank};
pub use dimensions::{TankDimensions, cylinder_volume_m3, optimize_dimensions};
pub use error::{SizingError, SizingResult};
pub use request::{DesignRequest, DesignRequestBuilder};
pub use series::{ThicknessPoint, ThicknessSeries, generate_thickness_series};
pub use thickness::{
    ShellThickness, compute_bottom_thickness, compute_roof_thickness, compute_shell_thickness,
    round_to_standard_plate,
};
pub use volume::{VolumeBreakdown, compute_storage_volume};
