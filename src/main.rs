mod catalog;
mod config;
mod format;
mod pointing;
mod watch;
mod web;

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

use crate::catalog::Catalog;
use crate::config::Config;
use crate::format::{format_table, low_elevation_notice};
use crate::pointing::{build_report, GeoPoint};
use crate::watch::{ObserverWatch, WatchOptions};
use crate::web::AppState;

#[derive(Parser)]
#[command(name = "sat-pointer")]
#[command(about = "Antenna pointing angles toward geostationary satellites")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Print elevation, azimuth and visibility for every satellite
    Point {
        /// Observer as "lat,lon"; falls back to the configured observer
        #[arg(allow_hyphen_values = true)]
        coordinates: Option<String>,
        #[arg(long)]
        config: Option<String>,
        /// Satellite catalog YAML, overriding the configured one
        #[arg(long)]
        catalog: Option<PathBuf>,
        /// Include satellites classified as hidden
        #[arg(long)]
        all: bool,
        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },
    /// Validate a configuration file and the catalog it points at
    Validate { config: String },
    /// Re-read an observer file periodically and print changes
    Watch {
        observer_file: PathBuf,
        #[arg(long)]
        config: Option<String>,
    },
    /// Serve the pointing API
    Serve {
        #[arg(long)]
        config: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Point {
            coordinates,
            config,
            catalog,
            all,
            json,
        } => point(coordinates.as_deref(), config.as_deref(), catalog, all, json),
        Commands::Validate { config } => validate(&config),
        Commands::Watch {
            observer_file,
            config,
        } => watch(observer_file, config.as_deref()).await,
        Commands::Serve { config } => serve(config.as_deref()).await,
    }
}

fn load_config(path: Option<&str>) -> Option<Config> {
    let Some(path) = path else {
        return Some(Config::default());
    };
    match Config::from_file(path) {
        Ok(config) => Some(config),
        Err(e) => {
            eprintln!("Config error in {}: {}", path, e);
            None
        }
    }
}

fn load_catalog(config: &Config, override_path: Option<PathBuf>) -> Option<Catalog> {
    let result = match override_path {
        Some(path) => Catalog::from_file(&path).map_err(|e| e.to_string()),
        None => config.load_catalog().map_err(|e| e.to_string()),
    };
    match result {
        Ok(catalog) => Some(catalog),
        Err(e) => {
            eprintln!("Catalog error: {}", e);
            None
        }
    }
}

fn point(
    coordinates: Option<&str>,
    config_path: Option<&str>,
    catalog_path: Option<PathBuf>,
    all: bool,
    json: bool,
) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };
    let Some(catalog) = load_catalog(&config, catalog_path) else {
        return ExitCode::FAILURE;
    };

    let observer = match coordinates {
        Some(c) => match GeoPoint::from_coordinates(c) {
            Some(o) => o,
            None => {
                eprintln!("Invalid coordinates {:?}, expected \"lat,lon\"", c);
                return ExitCode::FAILURE;
            }
        },
        None => match config.observer() {
            Ok(Some(o)) => o,
            _ => {
                eprintln!("No observer given and none configured");
                return ExitCode::FAILURE;
            }
        },
    };

    let report = build_report(&observer, &catalog, &config.visibility);
    let report = if all || config.show_hidden {
        report
    } else {
        report.visible()
    };

    if json {
        match serde_json::to_string_pretty(&report) {
            Ok(s) => println!("{}", s),
            Err(e) => {
                eprintln!("Serialization error: {}", e);
                return ExitCode::FAILURE;
            }
        }
    } else {
        println!("Observer {}", report.observer);
        print!("{}", format_table(&report.satellites, config.units));
        if let Some(notice) = low_elevation_notice(&report) {
            println!("{}", notice);
        }
    }
    ExitCode::SUCCESS
}

fn validate(path: &str) -> ExitCode {
    let Some(config) = load_config(Some(path)) else {
        return ExitCode::FAILURE;
    };
    let Some(catalog) = load_catalog(&config, None) else {
        return ExitCode::FAILURE;
    };

    println!("Config is valid ({} satellites)", catalog.len());
    println!(
        "  visibility: hidden <= {}° < poor < {}° <= good",
        config.visibility.poor_deg, config.visibility.good_deg
    );
    for sat in catalog.satellites() {
        println!(
            "  {}: {} @ {:.1}°, {:.0} km",
            sat.id, sat.name, sat.position.longitude_deg, sat.altitude_km
        );
    }
    ExitCode::SUCCESS
}

async fn watch(observer_file: PathBuf, config_path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };
    let Some(catalog) = load_catalog(&config, None) else {
        return ExitCode::FAILURE;
    };
    let interval = match config.refresh_interval() {
        Ok(i) => i,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    let options = WatchOptions {
        observer_file,
        interval,
        units: config.units,
        show_hidden: config.show_hidden,
    };
    watch::run_watch(ObserverWatch::new(catalog, config.visibility), options).await;
    ExitCode::SUCCESS
}

async fn serve(config_path: Option<&str>) -> ExitCode {
    let Some(config) = load_config(config_path) else {
        return ExitCode::FAILURE;
    };
    let Some(catalog) = load_catalog(&config, None) else {
        return ExitCode::FAILURE;
    };

    if let Err(e) = web::run_server(AppState::new(config, catalog)).await {
        log::error!("Server error: {}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
