//! Smoke test for the tk-app service layer against the bundled demo file.

use std::path::PathBuf;
use tk_app::{list_cases, load_case_file, resolve_case, run_design};
use tk_chem::ChemicalCatalog;
use tk_core::units::to_m;

fn demo_path() -> PathBuf {
    let mut path = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    path.pop(); // crates
    path.pop(); // repo root
    path.push("demos");
    path.push("chemical_storage.yaml");
    path
}

#[test]
fn demo_cases_load_and_design() {
    let file = load_case_file(&demo_path()).expect("demo case file should load");
    let cases = list_cases(&file);
    assert_eq!(cases.len(), 3);

    let catalog = ChemicalCatalog::builtin();
    for summary in &cases {
        let request = resolve_case(&file, &summary.id, &catalog).unwrap();
        let outcome = run_design(&request).unwrap();
        assert_eq!(outcome.result.tank_specs.len() as u32, summary.num_tanks);
        assert!(!outcome.series.points.is_empty());
    }
}

#[test]
fn acetic_acid_case_matches_hand_calculation() {
    let file = load_case_file(&demo_path()).unwrap();
    let request = resolve_case(&file, "acetic_acid_7d", &ChemicalCatalog::builtin()).unwrap();
    assert_eq!(request.chemical_name, "Acetic Acid");

    let outcome = run_design(&request).unwrap();
    assert!((to_m(outcome.result.dimensions.diameter) - 6.6).abs() < 1e-9);
    assert!((to_m(outcome.result.dimensions.height) - 11.3).abs() < 1e-9);
    assert_eq!(outcome.result.shell.shell_thickness_mm, 5.0);
}

#[test]
fn missing_file_is_reported() {
    let err = load_case_file(&PathBuf::from("does/not/exist.yaml")).unwrap_err();
    assert!(matches!(err, tk_app::AppError::CaseFileRead { .. }));
}

#[test]
fn unknown_case_id_is_reported() {
    let file = load_case_file(&demo_path()).unwrap();
    let err = resolve_case(&file, "caustic", &ChemicalCatalog::builtin()).unwrap_err();
    assert!(matches!(err, tk_app::AppError::CaseNotFound(id) if id == "caustic"));
}
