use tk_project::*;

fn sample_file() -> CaseFile {
    let mut acid = CaseDef::new("acid", "Acid tanks", 100.0, 7.0);
    acid.chemical_id = Some("acetic_acid".to_string());
    acid.design_margin = 0.0;

    let mut water = CaseDef::new("water", "Water buffer", 400.0, 2.0);
    water.num_tanks = 1;
    water.density_kg_m3 = Some(998.0);

    CaseFile {
        version: LATEST_VERSION,
        name: "Roundtrip".to_string(),
        cases: vec![acid, water],
    }
}

#[test]
fn roundtrip_yaml() {
    let file = sample_file();
    let path = std::env::temp_dir().join("tk_project_roundtrip.yaml");

    save_yaml(&path, &file).unwrap();
    let loaded = load_yaml(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn roundtrip_json() {
    let file = sample_file();
    let path = std::env::temp_dir().join("tk_project_roundtrip.json");

    save_json(&path, &file).unwrap();
    let loaded = load_json(&path).unwrap();

    assert_eq!(file, loaded);
}

#[test]
fn minimal_yaml_gets_defaults() {
    let yaml = r#"
version: 1
name: Minimal
cases:
  - id: only
    name: Only case
    production_rate_tpd: 10
    holding_period_days: 3
"#;
    let file: CaseFile = serde_yaml::from_str(yaml).unwrap();
    validate_case_file(&file).unwrap();

    let case = &file.cases[0];
    assert_eq!(case.num_tanks, 2);
    assert_eq!(case.max_fill_fraction, 0.85);
    assert_eq!(case.design_margin, 0.10);
    assert!(case.density_kg_m3.is_none());
}

#[test]
fn save_refuses_invalid_file() {
    let mut file = sample_file();
    file.cases[1].num_tanks = 0;
    let path = std::env::temp_dir().join("tk_project_invalid.yaml");
    assert!(matches!(
        save_yaml(&path, &file),
        Err(ProjectError::Validation(_))
    ));
}
