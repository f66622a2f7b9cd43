use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io;
use std::path::{Path, PathBuf};
use tk_app::{
    AppError, AppResult, DesignOptions, DesignOutcome, TANK_TABLE_HEADERS, compare_cases,
    comparison_table, design_parameter_rows, ensure_design, list_cases, load_case_file,
    resolve_case, tank_table_rows, to_json_pretty, write_comparison_csv, write_series_csv,
    write_tank_csv,
};
use tk_chem::{ChemicalCatalog, ChemicalLookup};
use tk_core::units::{to_m, to_m3, to_tonnes};
use tk_results::{DesignStore, FileDesignStore};
use tk_sizing::DesignRequest;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "tankflow")]
#[command(about = "Tankflow CLI - API 650 atmospheric storage tank sizing", long_about = None)]
struct Cli {
    /// Log engine stages to stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Size a set of storage tanks
    Design {
        #[command(flatten)]
        input: InputArgs,
        /// Save the design in the case store under this name
        #[arg(long)]
        save: Option<String>,
        /// Skip stored designs and recompute
        #[arg(long)]
        no_cache: bool,
        #[command(flatten)]
        store: StoreArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Shell thickness against tank height (0.5x to 1.5x the optimal height)
    Series {
        #[command(flatten)]
        input: InputArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// List built-in chemicals
    Chemicals {
        /// Filter by id, name, formula or category
        query: Option<String>,
        /// Only chemicals in this category (e.g. "Organic Acid")
        #[arg(long)]
        category: Option<String>,
    },
    /// Validate case file syntax and values
    Validate {
        /// Path to the case file (YAML, or JSON by extension)
        case_file: PathBuf,
    },
    /// List cases in a case file
    Cases {
        /// Path to the case file
        case_file: PathBuf,
    },
    /// List saved designs, or show one
    ShowCase {
        /// Saved case name; lists all when omitted
        name: Option<String>,
        #[command(flatten)]
        store: StoreArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Remove a saved design
    DeleteCase {
        name: String,
        #[command(flatten)]
        store: StoreArgs,
    },
    /// Compare saved designs side by side
    Compare {
        #[arg(required = true, num_args = 2..)]
        names: Vec<String>,
        #[command(flatten)]
        store: StoreArgs,
        #[arg(long, value_enum, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
}

#[derive(Copy, Clone, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Table,
    Csv,
    Json,
}

/// Where the request comes from: a case file entry or flags. Flags override
/// case file and catalog values.
#[derive(Args)]
struct InputArgs {
    /// Case file holding the request
    #[arg(long, requires = "case")]
    case_file: Option<PathBuf>,
    /// Case id within --case-file
    #[arg(long, requires = "case_file")]
    case: Option<String>,
    /// Production rate (tonnes/day)
    #[arg(long, required_unless_present = "case_file")]
    rate: Option<f64>,
    /// Holding period (days)
    #[arg(long, required_unless_present = "case_file")]
    days: Option<f64>,
    /// Built-in chemical id; sets density, name and corrosion allowance
    #[arg(long)]
    chemical: Option<String>,
    /// Liquid density (kg/m³)
    #[arg(long)]
    density: Option<f64>,
    /// Maximum fill fraction, in (0, 1]
    #[arg(long)]
    fill: Option<f64>,
    /// Corrosion allowance (mm)
    #[arg(long)]
    corrosion_allowance: Option<f64>,
    /// Number of tanks
    #[arg(long)]
    tanks: Option<u32>,
    /// Design margin on production rate (0.10 = 10%)
    #[arg(long)]
    margin: Option<f64>,
    /// Allowable stress, design condition (MPa)
    #[arg(long)]
    stress_design: Option<f64>,
    /// Allowable stress, hydrostatic test (MPa)
    #[arg(long)]
    stress_test: Option<f64>,
}

#[derive(Args)]
struct StoreArgs {
    /// Saved case directory
    #[arg(long, default_value = ".tankflow")]
    store: PathBuf,
}

fn main() -> AppResult<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Design {
            input,
            save,
            no_cache,
            store,
            format,
        } => cmd_design(&input, save, !no_cache, &store.store, format),
        Commands::Series { input, format } => cmd_series(&input, format),
        Commands::Chemicals { query, category } => {
            cmd_chemicals(query.as_deref(), category.as_deref())
        }
        Commands::Validate { case_file } => cmd_validate(&case_file),
        Commands::Cases { case_file } => cmd_cases(&case_file),
        Commands::ShowCase {
            name,
            store,
            format,
        } => cmd_show_case(name.as_deref(), &store.store, format),
        Commands::DeleteCase { name, store } => cmd_delete_case(&name, &store.store),
        Commands::Compare {
            names,
            store,
            format,
        } => cmd_compare(&names, &store.store, format),
    }
}

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn build_request(input: &InputArgs, catalog: &ChemicalCatalog) -> AppResult<DesignRequest> {
    let mut request = match (&input.case_file, &input.case) {
        (Some(path), Some(case_id)) => {
            let file = load_case_file(path)?;
            resolve_case(&file, case_id, catalog)?
        }
        _ => {
            let rate = input
                .rate
                .ok_or_else(|| AppError::InvalidInput("--rate is required".to_string()))?;
            let days = input
                .days
                .ok_or_else(|| AppError::InvalidInput("--days is required".to_string()))?;
            DesignRequest::builder(rate, days).build()?
        }
    };

    if let Some(id) = &input.chemical {
        let chem = catalog.require(id)?;
        request.chemical_name = chem.name;
        request.density_kg_m3 = chem.density_kg_m3;
        request.corrosion_allowance_mm = chem.corrosion_allowance_mm;
    }

    if let Some(v) = input.rate {
        request.production_rate_tpd = v;
    }
    if let Some(v) = input.days {
        request.holding_period_days = v;
    }
    if let Some(v) = input.density {
        request.density_kg_m3 = v;
    }
    if let Some(v) = input.fill {
        request.max_fill_fraction = v;
    }
    if let Some(v) = input.corrosion_allowance {
        request.corrosion_allowance_mm = v;
    }
    if let Some(v) = input.tanks {
        request.num_tanks = v;
    }
    if let Some(v) = input.margin {
        request.design_margin = v;
    }
    if let Some(v) = input.stress_design {
        request.allowable_stress_design_mpa = v;
    }
    if let Some(v) = input.stress_test {
        request.allowable_stress_test_mpa = v;
    }

    request.validate()?;
    Ok(request)
}

fn cmd_design(
    input: &InputArgs,
    save_as: Option<String>,
    use_cache: bool,
    store_dir: &Path,
    format: OutputFormat,
) -> AppResult<()> {
    let request = build_request(input, &ChemicalCatalog::builtin())?;
    debug!(store = %store_dir.display(), use_cache, "opening case store");
    let mut store = FileDesignStore::new(store_dir.to_path_buf())?;
    let options = DesignOptions { use_cache, save_as };
    let outcome = ensure_design(&mut store, &request, &options)?;

    match format {
        OutputFormat::Json => println!("{}", to_json_pretty(&outcome)?),
        OutputFormat::Csv => write_tank_csv(&outcome.result, io::stdout().lock())?,
        OutputFormat::Table => print_design(&outcome, options.save_as.as_deref()),
    }
    Ok(())
}

fn print_design(outcome: &DesignOutcome, saved_as: Option<&str>) {
    if outcome.loaded_from_cache {
        println!("✓ Loaded from store: {}", outcome.case_id);
    } else {
        println!("✓ Design completed: {}", outcome.case_id);
    }
    if let Some(name) = saved_as {
        println!("  Saved as: {}", name);
    }

    println!("\nDesign basis:");
    let rows: Vec<Vec<String>> = design_parameter_rows(&outcome.request)
        .into_iter()
        .map(|r| vec![r.parameter, r.value, r.basis])
        .collect();
    print_table(&["Parameter", "Value", "Basis"], &rows);

    let result = &outcome.result;
    let storage = &result.storage;
    println!("\nStorage volume:");
    println!("  Total mass:        {:.2} t", to_tonnes(storage.total_mass));
    println!("  Liquid volume:     {:.2} m³", to_m3(storage.total_volume));
    println!("  Geometric volume:  {:.2} m³", to_m3(storage.geometric_volume));
    println!("  Volume per tank:   {:.2} m³", to_m3(storage.volume_per_tank));

    let dims = &result.dimensions;
    println!("\nTank geometry:");
    println!("  Diameter:          {:.1} m", to_m(dims.diameter));
    println!("  Height:            {:.1} m", to_m(dims.height));
    println!("  Actual volume:     {:.2} m³", to_m3(dims.actual_volume));
    println!("  H/D:               {:.2}", dims.aspect_ratio);

    let shell = &result.shell;
    println!("\nThickness:");
    println!("  Design condition:  {:.3} mm", shell.design_thickness_mm);
    println!("  Test condition:    {:.3} mm", shell.test_thickness_mm);
    println!("  Required shell:    {:.3} mm", shell.required_thickness_mm);
    println!("  Shell plate:       {} mm", shell.shell_thickness_mm);
    println!("  Bottom plate:      {} mm", result.bottom_thickness_mm);
    println!("  Roof plate:        {} mm", result.roof_thickness_mm);
    println!("  Bund volume:       {:.2} m³", to_m3(result.bund_volume));

    println!("\nTank specifications:");
    let rows: Vec<Vec<String>> = tank_table_rows(result)
        .into_iter()
        .map(Vec::from)
        .collect();
    print_table(&TANK_TABLE_HEADERS, &rows);
}

fn cmd_series(input: &InputArgs, format: OutputFormat) -> AppResult<()> {
    let request = build_request(input, &ChemicalCatalog::builtin())?;
    let series = tk_sizing::generate_thickness_series(&request)?;

    match format {
        OutputFormat::Json => println!("{}", to_json_pretty(&series)?),
        OutputFormat::Csv => write_series_csv(&series, io::stdout().lock())?,
        OutputFormat::Table => {
            println!("{}", series.title);
            let rows: Vec<Vec<String>> = series
                .points
                .iter()
                .map(|p| {
                    vec![
                        format!("{:.1}", p.height_factor),
                        format!("{:.2}", to_m(p.height)),
                        format!("{:.2}", to_m(p.diameter)),
                        p.shell_thickness_mm.to_string(),
                    ]
                })
                .collect();
            print_table(
                &[
                    "Factor",
                    series.x_title.as_str(),
                    "Diameter (m)",
                    series.y_title.as_str(),
                ],
                &rows,
            );
        }
    }
    Ok(())
}

fn cmd_chemicals(query: Option<&str>, category: Option<&str>) -> AppResult<()> {
    let catalog = ChemicalCatalog::builtin();
    let query = query.unwrap_or("");
    let matches: Vec<_> = match category {
        Some(cat) => catalog
            .by_category(cat)
            .into_iter()
            .filter(|c| c.matches_query(query))
            .collect(),
        None => catalog.search(query),
    };
    let rows: Vec<Vec<String>> = matches
        .into_iter()
        .map(|c| {
            vec![
                c.id.clone(),
                c.name.clone(),
                c.formula.clone(),
                format!("{}", c.density_kg_m3),
                c.corrosivity.label().to_string(),
                c.recommended_material.clone(),
                format!("{}", c.corrosion_allowance_mm),
                c.category.clone(),
            ]
        })
        .collect();

    if rows.is_empty() {
        println!("No chemicals match");
    } else {
        print_table(
            &[
                "Id",
                "Name",
                "Formula",
                "Density (kg/m³)",
                "Corrosivity",
                "Material",
                "CA (mm)",
                "Category",
            ],
            &rows,
        );
    }
    Ok(())
}

fn cmd_validate(case_file: &Path) -> AppResult<()> {
    println!("Validating case file: {}", case_file.display());
    let file = load_case_file(case_file)?;
    println!("✓ Case file is valid ({} cases)", file.cases.len());
    Ok(())
}

fn cmd_cases(case_file: &Path) -> AppResult<()> {
    let file = load_case_file(case_file)?;
    let cases = list_cases(&file);

    if cases.is_empty() {
        println!("No cases found in case file");
    } else {
        println!("Cases in '{}':", file.name);
        for c in cases {
            println!(
                "  {} - {} ({}, {} TPD x {} days, {} tanks)",
                c.id,
                c.name,
                c.chemical_id.as_deref().unwrap_or("water"),
                c.production_rate_tpd,
                c.holding_period_days,
                c.num_tanks
            );
        }
    }
    Ok(())
}

fn cmd_show_case(name: Option<&str>, store_dir: &Path, format: OutputFormat) -> AppResult<()> {
    let store = FileDesignStore::new(store_dir.to_path_buf())?;

    let Some(name) = name else {
        let cases = store.list_cases()?;
        if cases.is_empty() {
            println!("No saved cases in {}", store_dir.display());
        } else {
            println!("Saved cases:");
            for c in cases {
                println!("  {} ({}, {})", c.name, c.request.chemical_name, c.timestamp);
            }
        }
        return Ok(());
    };

    let case = store.load_case(name)?;
    match format {
        OutputFormat::Json => println!("{}", to_json_pretty(&case)?),
        OutputFormat::Csv => write_tank_csv(&case.result, io::stdout().lock())?,
        OutputFormat::Table => {
            println!("Case: {}", case.name);
            println!("  Id:       {}", case.case_id);
            println!("  Saved:    {}", case.timestamp);
            println!("  Engine:   {}", case.engine_version);
            println!();
            let rows: Vec<Vec<String>> = tank_table_rows(&case.result)
                .into_iter()
                .map(Vec::from)
                .collect();
            print_table(&TANK_TABLE_HEADERS, &rows);
        }
    }
    Ok(())
}

fn cmd_delete_case(name: &str, store_dir: &Path) -> AppResult<()> {
    let mut store = FileDesignStore::new(store_dir.to_path_buf())?;
    if !store.has_case(name) {
        return Err(AppError::CaseNotFound(name.to_string()));
    }
    store.delete_case(name)?;
    println!("✓ Deleted case: {}", name);
    Ok(())
}

fn cmd_compare(names: &[String], store_dir: &Path, format: OutputFormat) -> AppResult<()> {
    let store = FileDesignStore::new(store_dir.to_path_buf())?;
    let columns = compare_cases(&store, names)?;

    match format {
        OutputFormat::Json => println!("{}", to_json_pretty(&columns)?),
        OutputFormat::Csv => write_comparison_csv(&columns, io::stdout().lock())?,
        OutputFormat::Table => {
            let (headers, rows) = comparison_table(&columns);
            let headers: Vec<&str> = headers.iter().map(String::as_str).collect();
            print_table(&headers, &rows);
        }
    }
    Ok(())
}

fn print_table(headers: &[&str], rows: &[Vec<String>]) {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.chars().count());
        }
    }

    let line = |cells: Vec<&str>| {
        let padded: Vec<String> = cells
            .iter()
            .zip(&widths)
            .map(|(c, w)| format!("{}{}", c, " ".repeat(w - c.chars().count())))
            .collect();
        println!("  {}", padded.join("  ").trim_end());
    };

    line(headers.to_vec());
    let rule: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    line(rule.iter().map(String::as_str).collect());
    for row in rows {
        line(row.iter().map(String::as_str).collect());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_id_needs_case_file() {
        let result = Cli::try_parse_from(["tankflow", "design", "--case", "acid_7d"]);
        assert!(result.is_err());

        let result = Cli::try_parse_from([
            "tankflow",
            "design",
            "--case",
            "acid_7d",
            "--rate",
            "100",
            "--days",
            "7",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn case_file_and_flags_parse() {
        let cli = Cli::try_parse_from([
            "tankflow",
            "series",
            "--case-file",
            "demos/chemical_storage.yaml",
            "--case",
            "acetic_acid_7d",
        ])
        .unwrap();
        assert!(matches!(cli.command, Commands::Series { .. }));

        let cli = Cli::try_parse_from(["tankflow", "design", "--rate", "100", "--days", "7"]);
        assert!(cli.is_ok());
    }
}
