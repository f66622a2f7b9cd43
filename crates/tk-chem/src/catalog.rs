use serde::{Deserialize, Serialize};
use tk_core::units::{Density, kg_per_m3};

use crate::{ChemError, ChemResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Corrosivity {
    Low,
    Moderate,
    High,
    VeryHigh,
}

impl Corrosivity {
    pub fn label(self) -> &'static str {
        match self {
            Corrosivity::Low => "Low",
            Corrosivity::Moderate => "Moderate",
            Corrosivity::High => "High",
            Corrosivity::VeryHigh => "Very High",
        }
    }
}

/// Properties of a stored liquid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChemicalProperties {
    pub id: String,
    pub name: String,
    pub formula: String,
    pub density_kg_m3: f64,
    pub boiling_point_c: f64,
    pub corrosivity: Corrosivity,
    pub recommended_material: String,
    pub corrosion_allowance_mm: f64,
    pub category: String,
}

impl ChemicalProperties {
    pub fn density(&self) -> Density {
        kg_per_m3(self.density_kg_m3)
    }

    pub fn matches_query(&self, query: &str) -> bool {
        let query = query.trim().to_ascii_lowercase();
        if query.is_empty() {
            return true;
        }

        self.id.to_ascii_lowercase().contains(&query)
            || self.name.to_ascii_lowercase().contains(&query)
            || self.formula.to_ascii_lowercase().contains(&query)
            || self.category.to_ascii_lowercase().contains(&query)
    }
}

/// Source of chemical properties keyed by id.
///
/// `None` means the id is unknown. Implementations may be backed by anything
/// (the built-in table, a plant database, a fixture in tests).
pub trait ChemicalLookup {
    fn lookup(&self, id: &str) -> Option<ChemicalProperties>;

    fn require(&self, id: &str) -> ChemResult<ChemicalProperties> {
        self.lookup(id).ok_or_else(|| ChemError::NotFound { id: id.to_string() })
    }
}

#[derive(Debug, Clone, Default)]
pub struct ChemicalCatalog {
    entries: Vec<ChemicalProperties>,
}

#[allow(clippy::too_many_arguments)]
fn entry(
    id: &str,
    name: &str,
    formula: &str,
    density_kg_m3: f64,
    boiling_point_c: f64,
    corrosivity: Corrosivity,
    recommended_material: &str,
    corrosion_allowance_mm: f64,
    category: &str,
) -> ChemicalProperties {
    ChemicalProperties {
        id: id.to_string(),
        name: name.to_string(),
        formula: formula.to_string(),
        density_kg_m3,
        boiling_point_c,
        corrosivity,
        recommended_material: recommended_material.to_string(),
        corrosion_allowance_mm,
        category: category.to_string(),
    }
}

impl ChemicalCatalog {
    pub fn from_entries(entries: Vec<ChemicalProperties>) -> Self {
        Self { entries }
    }

    /// The stock liquids shipped with the tool.
    pub fn builtin() -> Self {
        Self::from_entries(vec![
            entry(
                "acetic_acid",
                "Acetic Acid",
                "CH3COOH",
                1049.0,
                118.1,
                Corrosivity::High,
                "SS316L",
                1.5,
                "Organic Acid",
            ),
            entry(
                "ethyl_acetate",
                "Ethyl Acetate",
                "C4H8O2",
                902.0,
                77.1,
                Corrosivity::Low,
                "SS304/SS316",
                0.5,
                "Ester",
            ),
            entry(
                "ethanol",
                "Ethanol (95%)",
                "C2H5OH",
                810.0,
                78.4,
                Corrosivity::Low,
                "SS304/SS316",
                0.5,
                "Alcohol",
            ),
            entry(
                "water",
                "Water (Process)",
                "H2O",
                1000.0,
                100.0,
                Corrosivity::Low,
                "Carbon Steel",
                1.5,
                "Inorganic",
            ),
            entry(
                "sulfuric_acid",
                "Sulfuric Acid (98%)",
                "H2SO4",
                1840.0,
                337.0,
                Corrosivity::VeryHigh,
                "SS316L/Hastelloy C",
                3.0,
                "Inorganic Acid",
            ),
        ])
    }

    pub fn entries(&self) -> &[ChemicalProperties] {
        &self.entries
    }

    /// (id, display name) pairs in catalog order, for pickers.
    pub fn choices(&self) -> Vec<(&str, &str)> {
        self.entries
            .iter()
            .map(|e| (e.id.as_str(), e.name.as_str()))
            .collect()
    }

    pub fn by_category(&self, category: &str) -> Vec<&ChemicalProperties> {
        self.entries
            .iter()
            .filter(|e| e.category == category)
            .collect()
    }

    pub fn search(&self, query: &str) -> Vec<&ChemicalProperties> {
        self.entries
            .iter()
            .filter(|e| e.matches_query(query))
            .collect()
    }
}

impl ChemicalLookup for ChemicalCatalog {
    fn lookup(&self, id: &str) -> Option<ChemicalProperties> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tk_core::units::to_kg_per_m3;

    #[test]
    fn ids_are_unique() {
        let catalog = ChemicalCatalog::builtin();
        let mut seen = HashSet::new();
        for entry in catalog.entries() {
            assert!(seen.insert(entry.id.as_str()), "duplicate id: {}", entry.id);
        }
    }

    #[test]
    fn lookup_known_and_unknown() {
        let catalog = ChemicalCatalog::builtin();
        let ethanol = catalog.lookup("ethanol").expect("ethanol should be in catalog");
        assert_eq!(ethanol.name, "Ethanol (95%)");
        assert_eq!(to_kg_per_m3(ethanol.density()), 810.0);

        assert!(catalog.lookup("mercury").is_none());
        assert!(matches!(
            catalog.require("mercury"),
            Err(ChemError::NotFound { .. })
        ));
    }

    #[test]
    fn search_matches_formula_and_category() {
        let catalog = ChemicalCatalog::builtin();

        let by_formula = catalog.search("h2so4");
        assert_eq!(by_formula.len(), 1);
        assert_eq!(by_formula[0].id, "sulfuric_acid");

        let acids = catalog.search("acid");
        assert!(acids.iter().any(|e| e.id == "acetic_acid"));
        assert!(acids.iter().any(|e| e.id == "sulfuric_acid"));

        assert_eq!(catalog.search("  ").len(), catalog.entries().len());
    }

    #[test]
    fn category_filter_is_exact() {
        let catalog = ChemicalCatalog::builtin();
        let esters = catalog.by_category("Ester");
        assert_eq!(esters.len(), 1);
        assert_eq!(esters[0].id, "ethyl_acetate");
        assert!(catalog.by_category("ester").is_empty());
    }

    #[test]
    fn choices_follow_catalog_order() {
        let catalog = ChemicalCatalog::builtin();
        let choices = catalog.choices();
        assert_eq!(choices[0], ("acetic_acid", "Acetic Acid"));
        assert_eq!(choices.len(), 5);
    }
}
