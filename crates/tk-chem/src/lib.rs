//! tk-chem: chemical property data for tank sizing.
//!
//! Provides:
//! - `ChemicalLookup`, the typed lookup interface consumed by case resolution
//! - `ChemicalCatalog`, a built-in table of common stored liquids
//! - Search and category filtering for pickers
//!
//! Sizing only ever reads a chemical's density, display name and corrosion
//! allowance; the remaining fields are informational.
//!
//! # Example
//!
//! ```
//! use tk_chem::{ChemicalCatalog, ChemicalLookup};
//!
//! let catalog = ChemicalCatalog::builtin();
//! let acid = catalog.lookup("sulfuric_acid").unwrap();
//! assert_eq!(acid.density_kg_m3, 1840.0);
//! ```

pub mod catalog;
pub mod error;

pub use catalog::{ChemicalCatalog, ChemicalLookup, ChemicalProperties, Corrosivity};
pub use error::{ChemError, ChemResult};
