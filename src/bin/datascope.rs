//! Datascope CLI Binary
//!
//! Thin command-line surface: runs a docs deploy plan with the
//! first-failure-stops-all policy, surfacing the failing step's exit code.

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};
use datascope::config::DatascopeConfig;
use datascope::deploy::DeployPlan;
use datascope::logging::init_logging;
use owo_colors::OwoColorize;
use tracing::{error, info};

#[derive(Parser)]
#[command(name = "datascope", version, about = "Dataset metadata state tools")]
struct Cli {
    /// Configuration file (defaults to ./datascope.toml when present)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run a deploy plan, stopping at the first failing step
    Deploy {
        /// TOML file listing the steps
        #[arg(long, default_value = "deploy.toml")]
        plan: PathBuf,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{} {}", "error:".red().bold(), e);
            process::exit(1);
        }
    };

    let mut logging = config.logging.clone();
    if cli.verbose {
        logging.level = "debug".to_string();
    }
    if let Err(e) = init_logging(Some(&logging)) {
        eprintln!("Failed to initialize logging: {e}");
        process::exit(1);
    }

    match cli.command {
        Command::Deploy { plan } => {
            info!(plan = %plan.display(), "loading deploy plan");
            let plan = match DeployPlan::from_path(&plan) {
                Ok(plan) => plan,
                Err(e) => {
                    error!("invalid deploy plan: {e}");
                    eprintln!("{} {}", "error:".red().bold(), e);
                    process::exit(1);
                }
            };
            match plan.run() {
                Ok(()) => {
                    println!("{} {} steps completed", "ok:".green().bold(), plan.steps.len());
                }
                Err(e) => {
                    eprintln!("{} {}", "error:".red().bold(), e);
                    process::exit(e.exit_code());
                }
            }
        }
    }
}

fn load_config(cli: &Cli) -> Result<DatascopeConfig, datascope::error::SetupError> {
    match &cli.config {
        Some(path) => DatascopeConfig::load_from(path),
        None => DatascopeConfig::load(),
    }
}
