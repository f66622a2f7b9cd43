use std::path::Path;
use tk_chem::ChemicalCatalog;

#[test]
fn demo_case_file_loads_and_resolves() {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../demos/chemical_storage.yaml");
    let file = tk_project::load_yaml(&path)
        .unwrap_or_else(|e| panic!("Failed to load {}: {}", path.display(), e));
    assert_eq!(file.cases.len(), 3);

    let catalog = ChemicalCatalog::builtin();
    for case in &file.cases {
        tk_project::resolve_case(case, &catalog)
            .unwrap_or_else(|e| panic!("Failed to resolve {}: {}", case.id, e));
    }

    let acetic = tk_project::resolve_case_by_id(&file, "acetic_acid_7d", &catalog).unwrap();
    assert_eq!(acetic.density_kg_m3, 1049.0);
    assert_eq!(acetic.design_margin, 0.0);

    let water = tk_project::resolve_case_by_id(&file, "process_water", &catalog).unwrap();
    assert_eq!(water.corrosion_allowance_mm, 3.0);
    assert_eq!(water.max_fill_fraction, 0.85);
}
