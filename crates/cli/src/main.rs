use crate::error::CliError;
use clap::Parser;
use commands::Commands;
use model::spec::AnalyzerSpec;
use std::collections::HashMap;
use tracing::{Level, info};

mod commands;
mod env;
mod error;
mod output;

#[derive(Parser)]
#[command(name = "cirrus", version = "0.1.0", about = "Cloud analyzer provisioning tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    // Initialize logger
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Provision {
            config,
            env_file,
            output,
        } => {
            let overrides = match env_file {
                Some(path) => env::load_env_file(path)?,
                None => HashMap::new(),
            };
            let token = env::resolve_access_token(&overrides)?;
            let spec = load_spec(config.as_deref()).await?;

            let report = provisioner::run::run(&spec, &token).await?;
            info!("Data pipeline analyzer initialized successfully");

            match output {
                Some(path) => output::write_json(&report, path).await?,
                None => output::print_json(&report)?,
            }
        }
        Commands::Render { config, output } => {
            let spec = load_spec(config.as_deref()).await?;
            match output {
                Some(path) => output::write_json(&spec, path).await?,
                None => output::print_json(&spec)?,
            }
        }
    }

    Ok(())
}

async fn load_spec(path: Option<&str>) -> Result<AnalyzerSpec, CliError> {
    match path {
        Some(path) => {
            // Read the spec file and parse it
            let source = tokio::fs::read_to_string(path).await?;
            let spec = serde_json::from_str(&source)?;
            Ok(spec)
        }
        None => Ok(AnalyzerSpec::starter()),
    }
}
