//! view-router
//!
//! Inspects and exercises a client-side route table.
//!
//! # Architecture Overview
//!
//! ```text
//!   routes.toml ──▶ config::loader ──▶ RouteTable (Arc, immutable)
//!                                          │
//!   navigate steps ──▶ navigation::Router ─┤
//!                          │               ▼
//!                          │        resolve(path) ──▶ Route | NotFound
//!                          ▼
//!                    HistoryAdapter (web / hash / memory)
//!                          │
//!                          ▼
//!                    NavigationState ──▶ stdout (JSON)
//! ```

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand};
use serde_json::json;

use view_router::cli::Step;
use view_router::config::loader::load_config;
use view_router::observability::logging::init_logging;
use view_router::{Router, RouterConfig};

#[derive(Parser)]
#[command(name = "view-router")]
#[command(about = "Inspect and exercise a client-side route table", long_about = None)]
struct Cli {
    /// Route configuration file (TOML). Defaults to the built-in table.
    #[arg(short, long)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List registered routes in match order
    Routes,
    /// Resolve a location against the table
    Resolve {
        /// In-app location; query and hash are ignored for matching
        path: String,
    },
    /// Run navigation steps and print each resulting state
    Navigate {
        /// push:/p, replace:/p, name:N, back, forward, external:URL
        #[arg(required = true)]
        steps: Vec<Step>,
    },
}

fn main() -> Result<ExitCode, Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => RouterConfig::default(),
    };
    init_logging(&config.observability);

    tracing::info!(
        mode = ?config.history.mode,
        base = %config.history.base,
        routes = config.routes.len(),
        "Configuration loaded"
    );

    let mut router = Router::from_config(&config)?;

    match cli.command {
        Commands::Routes => {
            let routes = router.table().routes();
            println!("{}", serde_json::to_string_pretty(&routes)?);
        }
        Commands::Resolve { path } => {
            let resolved = router.resolve_location(&path);
            let found = resolved.is_ok();
            let out = json!({ "path": path, "route": resolved.ok() });
            println!("{}", serde_json::to_string_pretty(&out)?);
            if !found {
                return Ok(ExitCode::from(2));
            }
        }
        Commands::Navigate { steps } => {
            println!("{}", serde_json::to_string(&router.current())?);
            for step in &steps {
                match step.apply(&mut router)? {
                    Some(state) => println!("{}", serde_json::to_string(&state)?),
                    None => println!("{}", json!({ "step": format!("{step:?}"), "ignored": true })),
                }
            }
        }
    }

    Ok(ExitCode::SUCCESS)
}
