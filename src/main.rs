//! Folio CLI
//!
//! Command-line interface for the portfolio:
//! - Inspect the project catalog
//! - Validate the dataset
//! - Resolve paths through the site's route table
//! - Host the built front end

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use serde_json::json;
use std::path::PathBuf;

use folio::catalog::Dataset;
use folio::config::{generate_default_config, Config};
use folio::detail::{DetailState, DetailView, NOT_FOUND_HEADING};
use folio::routing::{Route, SiteRouter};
use folio::server::{self, AppState};

#[derive(Parser)]
#[command(name = "folio")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Personal portfolio: project catalog and static host")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Config file (default: search standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Dataset JSON file (default: the bundled dataset)
    #[arg(long, global = true)]
    pub dataset: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table, global = true)]
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List projects in catalog order
    List,

    /// Show one project's details
    Show {
        /// Project id
        id: String,
    },

    /// Check that the dataset loads and ids are unique
    Validate,

    /// Resolve a path to the view that renders it
    Route {
        /// Browser path, e.g. /projects/trex
        path: String,
    },

    /// Serve the built front end
    Serve {
        /// Host to bind to
        #[arg(long)]
        host: Option<String>,
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,
        /// Directory with the built front end
        #[arg(long)]
        dist_dir: Option<PathBuf>,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logging depends on the config, so a bad config file or FOLIO_* value
    // ends the run with an error instead of a log line nobody sees.
    let config_path = cli.config.clone().or_else(Config::default_path);
    let config = match &config_path {
        Some(path) => Config::load_with_env(path)
            .with_context(|| format!("Invalid configuration in {:?}", path))?,
        None => Config::from_env().context("Invalid configuration")?,
    };

    folio::telemetry::init(&config.logging);

    match &config_path {
        Some(path) => tracing::info!("Loaded config from {:?}", path),
        None => tracing::debug!("Using default config with environment overrides"),
    }

    match cli.command {
        Commands::List => {
            let dataset = load_dataset(&cli.dataset, &config)?;
            print_list(&dataset, cli.format)?;
        }

        Commands::Show { ref id } => {
            let dataset = load_dataset(&cli.dataset, &config)?;
            print_detail(&dataset, id, cli.format)?;
        }

        Commands::Validate => {
            let dataset = load_dataset(&cli.dataset, &config)?;
            validate(&dataset)?;
        }

        Commands::Route { ref path } => {
            let dataset = load_dataset(&cli.dataset, &config)?;
            print_route(&dataset, path, cli.format)?;
        }

        Commands::Serve {
            host,
            port,
            dist_dir,
        } => {
            let dataset = load_dataset(&cli.dataset, &config)?;

            let mut server_config = config.server.clone();
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }
            if let Some(dir) = dist_dir {
                server_config.dist_dir = dir;
            }

            tracing::info!("Folio v{}", env!("CARGO_PKG_VERSION"));
            tracing::info!("Serving {:?} with {} projects", server_config.dist_dir, dataset.len());

            let state = AppState::new(dataset, server_config)?;
            server::serve(state).await?;
        }

        Commands::Config { output } => {
            let content = generate_default_config();
            match output {
                Some(path) => {
                    std::fs::write(&path, content)
                        .with_context(|| format!("Failed to write {:?}", path))?;
                    println!("Config written to {:?}", path);
                }
                None => print!("{}", content),
            }
        }
    }

    Ok(())
}

/// CLI flag, then config, then the bundled dataset
fn load_dataset(flag: &Option<PathBuf>, config: &Config) -> Result<Dataset> {
    match flag.as_ref().or(config.catalog.dataset_path.as_ref()) {
        Some(path) => Dataset::from_path(path)
            .with_context(|| format!("Failed to load dataset {:?}", path)),
        None => Dataset::bundled().context("Bundled dataset is malformed"),
    }
}

fn print_list(dataset: &Dataset, format: OutputFormat) -> Result<()> {
    let cards = folio::cards(dataset);

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&cards)?),
        OutputFormat::Table => {
            println!("{:<20} {:>6}  {:<32} {}", "ID", "YEAR", "NAME", "LINK");
            println!("{}", "-".repeat(80));
            for card in &cards {
                println!("{:<20} {:>6}  {:<32} {}", card.id, card.year, card.name, card.href);
            }
            println!("\n{} projects", cards.len());
        }
    }

    Ok(())
}

fn print_detail(dataset: &Dataset, id: &str, format: OutputFormat) -> Result<()> {
    let mut view = DetailView::new();
    view.resolve(dataset, id);

    let project = match view.state() {
        DetailState::Resolved(project) => project,
        _ => bail!("{}: {}", NOT_FOUND_HEADING, id),
    };

    match format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(project)?),
        OutputFormat::Table => {
            println!("{}", project.name);
            println!("{}", "=".repeat(project.name.chars().count()));
            println!("Year:         {}", project.year);
            println!("Technologies: {}", project.technologies);
            println!("Picture:      {}", project.picture);
            println!();
            println!("{}", project.description);
        }
    }

    Ok(())
}

fn validate(dataset: &Dataset) -> Result<()> {
    let duplicates = dataset.duplicate_ids();

    if duplicates.is_empty() {
        println!("OK: {} projects, all ids unique", dataset.len());
        return Ok(());
    }

    for dup in &duplicates {
        let positions: Vec<String> = dup.positions.iter().map(|p| p.to_string()).collect();
        println!("Duplicate id '{}' at positions {}", dup.id, positions.join(", "));
    }
    bail!("{} duplicated project id(s)", duplicates.len())
}

fn print_route(dataset: &Dataset, path: &str, format: OutputFormat) -> Result<()> {
    let router = SiteRouter::new();
    let route = router.resolve(path);

    let project_exists = route
        .as_ref()
        .and_then(Route::project_id)
        .map(|id| dataset.find(id).is_some());

    match format {
        OutputFormat::Json => {
            let body = json!({
                "path": path,
                "route": route,
                "project_exists": project_exists,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        OutputFormat::Table => match &route {
            Some(route) => {
                println!("{} -> {} ({})", path, route.kind().label(), route.kind().pattern());
                if let (Some(id), Some(exists)) = (route.project_id(), project_exists) {
                    let status = if exists { "found" } else { "not found" };
                    println!("project '{}': {}", id, status);
                }
            }
            None => println!("{} -> Page Not Found", path),
        },
    }

    if route.is_none() {
        bail!("No route matches {}", path);
    }
    Ok(())
}
