//! Njira CLI
//!
//! Plans routes between place names or coordinates on OpenRouteService,
//! runs an interactive session with history and CSV export, and manages an
//! account on the optional route backend.

#![allow(clippy::print_stdout)]

mod app;
mod session;

use std::path::{Path, PathBuf};

use anyhow::{Context, bail};
use application::{PlannedRoute, route_to_geojson};
use clap::{Args, Parser, Subcommand};
use domain::{AxisOrder, CoordinateSystem, TravelMode};
use infrastructure::{AppConfig, init_tracing};
use tokio::io::BufReader;

use crate::app::{App, describe_save};
use crate::session::{SessionOptions, run_session};

/// Njira CLI
#[derive(Parser)]
#[command(name = "njira")]
#[command(author, version, about = "Route planning on OpenRouteService", long_about = None)]
struct Cli {
    /// Verbosity level
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Configuration file (default: njira.toml in the working directory)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// How numeric locations are read
#[derive(Args, Debug, Default)]
struct InputOptions {
    /// Coordinate system of numeric input, e.g. `wgs84`, `utm:36S`, `epsg:32736`
    #[arg(long)]
    crs: Option<CoordinateSystem>,

    /// Order of a WGS-84 pair: `lonlat` or `latlon`
    #[arg(long)]
    axis_order: Option<AxisOrder>,
}

impl InputOptions {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(crs) = self.crs {
            config.resolver.crs = crs;
        }
        if let Some(axis_order) = self.axis_order {
            config.resolver.axis_order = axis_order;
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Plan a route between two locations
    ///
    /// Locations are place names or numeric pairs.
    /// Example: njira route "Lilongwe" "Blantyre" --mode bike
    Route {
        /// Start location
        origin: String,

        /// End location
        destination: String,

        /// Travel mode: car, walk or bike
        #[arg(short, long, default_value = "car")]
        mode: TravelMode,

        #[command(flatten)]
        input: InputOptions,

        /// Write the route as GeoJSON to this file
        #[arg(long)]
        geojson: Option<PathBuf>,

        /// Upload the route to the backend
        #[arg(long)]
        save: bool,
    },

    /// Start an interactive session reading routes from stdin
    Session {
        /// Default travel mode
        #[arg(short, long, default_value = "car")]
        mode: TravelMode,

        #[command(flatten)]
        input: InputOptions,

        /// Upload every successful route to the backend
        #[arg(long)]
        save: bool,
    },

    /// Create an account on the route backend
    Register {
        /// Account name
        username: String,

        /// Account password (falls back to backend.password)
        #[arg(long, env = "NJIRA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },

    /// Log in to the route backend and print the session token
    Login {
        /// Account name
        username: String,

        /// Account password (falls back to backend.password)
        #[arg(long, env = "NJIRA_PASSWORD", hide_env_values = true)]
        password: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config =
        AppConfig::load_from(cli.config.as_deref()).context("Failed to load configuration")?;
    if cli.verbose > 0 {
        config.logging.filter = log_filter_from_verbosity(cli.verbose).to_string();
    }
    init_tracing(&config.logging)?;

    match cli.command {
        Commands::Route {
            origin,
            destination,
            mode,
            input,
            geojson,
            save,
        } => {
            input.apply(&mut config);
            let mut app = App::from_config(&config)?;
            let planned = app.planner().plan(&origin, &destination, mode).await?;

            println!("📍 From: {} ({})", planned.origin_text, planned.origin);
            println!("📍 To:   {} ({})", planned.destination_text, planned.destination);
            if let Some(failure) = &planned.outcome.failure {
                bail!("No route: {failure}");
            }
            println!("🛣️  {}", planned.outcome.route.label());

            if let Some(path) = geojson {
                write_geojson(&path, &planned)?;
                println!("✅ GeoJSON written to {}", path.display());
            }
            if save {
                let result = app.save(&planned).await;
                if let Some(message) = describe_save(&result) {
                    println!("{message}");
                }
            }
        },

        Commands::Session { mode, input, save } => {
            input.apply(&mut config);
            let mut app = App::from_config(&config)?;
            let options = SessionOptions { mode, save };
            let history = run_session(
                &mut app,
                options,
                BufReader::new(tokio::io::stdin()),
                &mut std::io::stdout(),
            )
            .await?;
            println!("👋 {} routes planned", history.len());
        },

        Commands::Register { username, password } => {
            let app = App::from_config(&config)?;
            let credentials = app.credentials_for(&username, password)?;
            app.sync().register(&credentials).await?;
            println!("✅ Account '{username}' created");
        },

        Commands::Login { username, password } => {
            let app = App::from_config(&config)?;
            let credentials = app.credentials_for(&username, password)?;
            let token = app.sync().login(&credentials).await?;
            println!("{}", token.expose());
        },
    }

    Ok(())
}

/// Map the `-v` count to a log filter
const fn log_filter_from_verbosity(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

fn write_geojson(path: &Path, planned: &PlannedRoute) -> anyhow::Result<()> {
    let document = route_to_geojson(
        &planned.outcome.route,
        &planned.origin_text,
        &planned.destination_text,
        planned.mode,
    )?;
    std::fs::write(path, document)
        .with_context(|| format!("Failed to write {}", path.display()))
}
