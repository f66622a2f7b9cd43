//! Tabular views of a design for display and CSV export.

use std::io::Write;

use serde::Serialize;
use tk_core::units::to_m;
use tk_sizing::{DesignRequest, DesignResult, ThicknessSeries};

use crate::design_service::CaseComparison;
use crate::error::AppResult;

pub const TANK_TABLE_HEADERS: [&str; 8] = [
    "Tank No",
    "Chemical",
    "Capacity (m³)",
    "Diameter (m)",
    "Height (m)",
    "Shell Thickness (mm)",
    "Bottom Thickness (mm)",
    "Roof Thickness (mm)",
];

/// One line of the design basis table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ParameterRow {
    pub parameter: String,
    pub value: String,
    pub basis: String,
}

fn row(parameter: &str, value: String, basis: &str) -> ParameterRow {
    ParameterRow {
        parameter: parameter.to_string(),
        value,
        basis: basis.to_string(),
    }
}

pub fn tank_table_rows(result: &DesignResult) -> Vec<[String; 8]> {
    result
        .tank_specs
        .iter()
        .map(|spec| {
            [
                spec.tank_no.to_string(),
                spec.chemical.clone(),
                format!("{:.1}", spec.capacity_m3),
                format!("{:.1}", spec.diameter_m),
                format!("{:.1}", spec.height_m),
                spec.shell_thickness_mm.to_string(),
                spec.bottom_thickness_mm.to_string(),
                spec.roof_thickness_mm.to_string(),
            ]
        })
        .collect()
}

pub fn design_parameter_rows(request: &DesignRequest) -> Vec<ParameterRow> {
    vec![
        row(
            "Production Rate",
            format!("{} TPD", request.production_rate_tpd),
            "User Input",
        ),
        row(
            "Holding Period",
            format!("{} days", request.holding_period_days),
            "User Input",
        ),
        row(
            "Design Margin",
            format!("{}%", request.design_margin * 100.0),
            "User Input",
        ),
        row(
            "Density",
            format!("{} kg/m³", request.density_kg_m3),
            &request.chemical_name,
        ),
        row(
            "Fill Fraction",
            format!("{}%", request.max_fill_fraction * 100.0),
            "API 650",
        ),
        row(
            "Corrosion Allowance",
            format!("{} mm", request.corrosion_allowance_mm),
            "API 650",
        ),
        row(
            "Number of Tanks",
            request.num_tanks.to_string(),
            "User Input",
        ),
        row(
            "Allowable Stress (design)",
            format!("{} MPa", request.allowable_stress_design_mpa),
            "Material",
        ),
        row(
            "Allowable Stress (hydrotest)",
            format!("{} MPa", request.allowable_stress_test_mpa),
            "Material",
        ),
    ]
}

/// Tank specification table as CSV, header row first.
pub fn write_tank_csv<W: Write>(result: &DesignResult, writer: W) -> AppResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(TANK_TABLE_HEADERS)?;
    for r in tank_table_rows(result) {
        csv.write_record(&r)?;
    }
    csv.flush()?;
    Ok(())
}

pub fn write_series_csv<W: Write>(series: &ThicknessSeries, writer: W) -> AppResult<()> {
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(["height_m", "diameter_m", "shell_thickness_mm"])?;
    for p in &series.points {
        csv.write_record([
            format!("{:.2}", to_m(p.height)),
            format!("{:.2}", to_m(p.diameter)),
            p.shell_thickness_mm.to_string(),
        ])?;
    }
    csv.flush()?;
    Ok(())
}

/// Saved cases as columns: header row is "Parameter" then the case names,
/// each following row is one quantity across the cases.
pub fn comparison_table(columns: &[CaseComparison]) -> (Vec<String>, Vec<Vec<String>>) {
    let mut headers = vec!["Parameter".to_string()];
    headers.extend(columns.iter().map(|c| c.name.clone()));

    let field = |label: &str, f: fn(&CaseComparison) -> String| {
        let mut row = vec![label.to_string()];
        row.extend(columns.iter().map(f));
        row
    };
    let rows = vec![
        field("Chemical", |c| c.chemical.clone()),
        field("Production Rate (TPD)", |c| c.production_rate_tpd.to_string()),
        field("Holding Period (days)", |c| c.holding_period_days.to_string()),
        field("Number of Tanks", |c| c.num_tanks.to_string()),
        field("Diameter (m)", |c| format!("{:.1}", c.diameter_m)),
        field("Height (m)", |c| format!("{:.1}", c.height_m)),
        field("Capacity (m³)", |c| format!("{:.1}", c.actual_volume_m3)),
        field("Shell Thickness (mm)", |c| c.shell_thickness_mm.to_string()),
        field("Bottom Thickness (mm)", |c| c.bottom_thickness_mm.to_string()),
        field("Roof Thickness (mm)", |c| c.roof_thickness_mm.to_string()),
        field("Bund Volume (m³)", |c| format!("{:.1}", c.bund_volume_m3)),
    ];
    (headers, rows)
}

pub fn write_comparison_csv<W: Write>(columns: &[CaseComparison], writer: W) -> AppResult<()> {
    let (headers, rows) = comparison_table(columns);
    let mut csv = csv::Writer::from_writer(writer);
    csv.write_record(&headers)?;
    for r in rows {
        csv.write_record(&r)?;
    }
    csv.flush()?;
    Ok(())
}

/// Pretty JSON for any report value (outcomes, series, comparisons).
pub fn to_json_pretty<T: Serialize>(value: &T) -> AppResult<String> {
    Ok(serde_json::to_string_pretty(value)?)
}
