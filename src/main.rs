use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use qubie_net::assignment::Enumeration;
use qubie_net::catalog::{load_catalog, read_catalog, CatalogFormat};
use qubie_net::config::{AppConfig, DEFAULT_CONFIG_PATH};
use qubie_net::error::AppError;
use qubie_net::optimize::group_potential;
use qubie_net::selection::validate_selection;
use qubie_net::{build_groups, telemetry, Fish, Location, Optimizer, PlacementResult, Qubie};
use tracing::info;

#[derive(Parser, Debug)]
#[command(
    name = "qubie-net",
    about = "Find the net locations that catch the most fish for up to four qubies",
    version
)]
struct Cli {
    /// Configuration file (defaults to ./qubie-net.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    /// Override the configured log level/filter
    #[arg(long, global = true)]
    log_level: Option<String>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the qubies found in the catalog
    Groups(CatalogArgs),
    /// Compute the best placement for the selected qubies
    Place(PlaceArgs),
}

#[derive(Args, Debug)]
struct CatalogArgs {
    /// Catalog file; read from stdin when neither this nor the config names one
    #[arg(long)]
    catalog: Option<PathBuf>,
    /// Layout of the catalog file
    #[arg(long, value_enum)]
    format: Option<FormatArg>,
}

#[derive(Args, Debug)]
struct PlaceArgs {
    #[command(flatten)]
    catalog: CatalogArgs,
    /// Qubie names to place (at most four)
    qubies: Vec<String>,
    /// How candidate placements are enumerated
    #[arg(long, value_enum)]
    enumeration: Option<EnumerationArg>,
    /// Print the placement as JSON
    #[arg(long)]
    json: bool,
    /// Also show what each qubie catches alone at each location
    #[arg(long)]
    breakdown: bool,
    /// Reject names no fish carries as a trait
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Sheet,
    Entries,
}

impl From<FormatArg> for CatalogFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Sheet => CatalogFormat::Sheet,
            FormatArg::Entries => CatalogFormat::Entries,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum EnumerationArg {
    Distinct,
    Full,
}

impl From<EnumerationArg> for Enumeration {
    fn from(value: EnumerationArg) -> Self {
        match value {
            EnumerationArg::Distinct => Enumeration::Distinct,
            EnumerationArg::Full => Enumeration::FullPermutations,
        }
    }
}

fn main() {
    if let Err(err) = run_cli() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run_cli() -> Result<(), AppError> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => AppConfig::load(path)?,
        None => AppConfig::load_or_default(DEFAULT_CONFIG_PATH)?,
    };
    if let Some(level) = cli.log_level {
        config.log_level = level;
    }
    telemetry::init(&config.log_level)?;

    match cli.command {
        Command::Groups(args) => run_groups(&config, args),
        Command::Place(args) => run_place(&config, args),
    }
}

fn load(config: &AppConfig, args: &CatalogArgs) -> Result<Vec<Fish>, AppError> {
    let format = args.format.map(CatalogFormat::from).unwrap_or(config.catalog.format);
    let catalog = match args.catalog.as_ref().or(config.catalog.path.as_ref()) {
        Some(path) => load_catalog(path, format)?,
        None => {
            info!(?format, "reading catalog from stdin");
            read_catalog(std::io::stdin().lock(), format)?
        }
    };
    Ok(catalog)
}

fn run_groups(config: &AppConfig, args: CatalogArgs) -> Result<(), AppError> {
    let catalog = load(config, &args)?;
    let groups = build_groups(&catalog);

    let width = groups.iter().map(|g| g.name.len()).max().unwrap_or(0);
    for group in &groups {
        println!("{:<width$}  {}", group.name, group.len());
    }
    Ok(())
}

fn run_place(config: &AppConfig, args: PlaceArgs) -> Result<(), AppError> {
    let catalog = load(config, &args.catalog)?;
    let groups = build_groups(&catalog);
    let selected = validate_selection(&groups, &args.qubies, args.strict)?;

    let enumeration = args.enumeration.map(Enumeration::from).unwrap_or(config.enumeration);
    let result = Optimizer::new(enumeration).place(&groups, &selected);

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        render_placement(&result);
    }

    if args.breakdown {
        render_breakdown(&groups, &selected);
    }
    Ok(())
}

fn render_placement(result: &PlacementResult<'_>) {
    println!("{:<10}{}", "Location", "Qubie");
    for location in Location::DISPLAY_ORDER {
        if let Some(name) = result.assignment.get(location) {
            println!("{:<10}{}", location.label(), name);
        }
    }
    println!("\nExpected score: {}", result.score);
}

fn render_breakdown(groups: &[Qubie<'_>], selected: &[&str]) {
    println!("\nCatch per location if placed alone");
    print!("{:<16}", "Qubie");
    for location in Location::DISPLAY_ORDER {
        print!("{:>10}", location.label());
    }
    println!();
    for potential in group_potential(groups, selected) {
        print!("{:<16}", potential.name);
        for location in Location::DISPLAY_ORDER {
            print!("{:>10.2}", potential.at(location));
        }
        println!();
    }
}
