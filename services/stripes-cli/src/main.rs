//! Warming-stripes demo CLI.
//!
//! Thin consumer of the extraction and overlay crates, standing in for a
//! dashboard UI:
//! - `extract` opens the dataset, snaps a coordinate to the nearest grid
//!   cell, and prints the annual anomaly series a stripes plot would render
//! - `grid` ensures the one-time map-overlay file exists

use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use anomaly_extractor::{extract, nearest_cell, AnnualAnomalySeries};
use grid_overlay::{ensure_grid, global_grid_nodes, FsOverlayStore};
use noaa_netcdf::NoaaDataset;
use stripes_common::Coordinate;

#[derive(Parser, Debug)]
#[command(name = "stripes-cli")]
#[command(about = "NOAA temperature-anomaly extraction and grid overlay generation")]
struct Cli {
    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Extract the annual anomaly series nearest to a coordinate
    Extract {
        /// Path to the NOAA NetCDF anomaly file
        #[arg(long, env = "STRIPES_DATASET")]
        dataset: PathBuf,

        /// Query longitude in decimal degrees
        #[arg(long)]
        lon: f64,

        /// Query latitude in decimal degrees
        #[arg(long)]
        lat: f64,

        /// Name of the anomaly variable
        #[arg(long, default_value = noaa_netcdf::DEFAULT_VARIABLE)]
        variable: String,

        /// Print the series as JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Ensure the global grid overlay file exists
    Grid {
        /// Output path for the overlay file
        #[arg(long, default_value = "grid.json")]
        output: PathBuf,

        /// Grid step in degrees
        #[arg(long, default_value = "5.0")]
        step: f64,
    },
}

fn main() -> Result<()> {
    // Load environment from .env file if present
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let level = match cli.log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    match cli.command {
        Command::Extract {
            dataset,
            lon,
            lat,
            variable,
            json,
        } => run_extract(dataset, Coordinate::new(lon, lat), &variable, json),
        Command::Grid { output, step } => run_grid(output, step),
    }
}

fn run_extract(dataset: PathBuf, query: Coordinate, variable: &str, json: bool) -> Result<()> {
    if !query.is_finite() {
        bail!("longitude and latitude must be finite numbers");
    }

    // A dataset that fails to open is fatal; there is nothing to fall back to.
    let grid = NoaaDataset::open_variable(&dataset, variable)
        .with_context(|| format!("opening dataset {}", dataset.display()))?;

    let cell = nearest_cell(&grid, query.lon, query.lat)?;
    let series = extract(&grid, query.lon, query.lat)?;
    info!(
        query = %query,
        cell_lon = cell.lon,
        cell_lat = cell.lat,
        years = series.len(),
        "extracted annual series"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&series)?);
        return Ok(());
    }

    println!(
        "Nearest cell to {}: lon {:.2}, lat {:.2}",
        query, cell.lon, cell.lat
    );
    if series.is_empty() {
        println!("No data at this cell.");
        return Ok(());
    }
    print_table(&series);
    Ok(())
}

fn print_table(series: &AnnualAnomalySeries) {
    println!("{:>6}  {:>12}", "year", "anomaly");
    for entry in series.iter() {
        println!("{:>6}  {:>12.4}", entry.year, entry.value);
    }
    // The bounds a stripes renderer would use for its color scale.
    if let (Some(min), Some(max)) = (series.min_value(), series.max_value()) {
        println!("range: {:.4} to {:.4}", min, max);
    }
}

fn run_grid(output: PathBuf, step: f64) -> Result<()> {
    if !step.is_finite() || step <= 0.0 {
        bail!("grid step must be a positive number of degrees");
    }

    let (x_nodes, y_nodes) = global_grid_nodes(step);
    let mut store = FsOverlayStore::new(&output);
    let generated = ensure_grid(&mut store, &x_nodes, &y_nodes)
        .with_context(|| format!("writing grid overlay {}", output.display()))?;

    if generated {
        println!("Wrote grid overlay to {}", output.display());
    } else {
        println!("Grid overlay already exists at {}", output.display());
    }
    Ok(())
}
