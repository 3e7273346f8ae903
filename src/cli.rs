use crate::error::Result;
use clap::{Parser, Subcommand};
use serde::de::DeserializeOwned;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(
    name = "farmbrain",
    version,
    about = "Crop advisory and soil analysis for Indian agriculture"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to config.yaml
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v for debug, -vv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Generate a crop advisory for a crop and soil sample
    Advise {
        /// Crop name (e.g. rice, wheat)
        #[arg(long)]
        crop: String,

        /// JSON file with the soil sample
        #[arg(long)]
        soil: PathBuf,

        /// Optional JSON file with current weather
        #[arg(long)]
        weather: Option<PathBuf>,
    },
    /// Analyse a soil sample and list suitable crops
    Analyze {
        /// JSON file with the soil sample
        #[arg(long)]
        soil: PathBuf,
    },
    /// List available crops
    Crops {
        /// List all crops (the default; accepted for compatibility)
        #[arg(long)]
        list: bool,

        /// Filter by season: kharif, rabi, zaid
        #[arg(long)]
        season: Option<String>,
    },
    /// Start the HTTP API server
    Serve {
        /// Host to bind to (defaults to config)
        #[arg(long)]
        host: Option<String>,

        /// Port to serve on (defaults to config)
        #[arg(long)]
        port: Option<u16>,
    },
}

impl Cli {
    /// Filter directive for the requested verbosity, if any was given.
    pub fn log_directive(&self) -> Option<&'static str> {
        match self.verbose {
            0 => None,
            1 => Some("debug"),
            _ => Some("trace"),
        }
    }
}

/// Read a JSON input file. Deserialization runs the model's validation, so
/// an out-of-range field surfaces here with its name.
pub fn load_input<T: DeserializeOwned>(path: &Path) -> Result<T> {
    let content = std::fs::read_to_string(path)?;
    let value = serde_json::from_str(&content)?;
    tracing::debug!(path = %path.display(), "loaded input file");
    Ok(value)
}
