use anyhow::Context;
use clap::Parser;
use farmbrain::api;
use farmbrain::cli::{load_input, Cli, Commands};
use farmbrain::config::Config;
use farmbrain::error::FarmBrainError;
use farmbrain::logic::{CropAdvisor, CropCatalogue, SoilAnalyzer};
use farmbrain::models::{SoilSample, WeatherObservation};
use farmbrain::ui::{render_advisory, render_crop_table, render_soil_report};
use std::path::Path;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Load configuration
    let config = match Config::load(cli.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            eprintln!("Copy config/config.yaml.example to config/config.yaml or pass --config");
            std::process::exit(1);
        }
    };

    init_logging(&cli, &config);

    match cli.command {
        Commands::Advise {
            crop,
            soil,
            weather,
        } => match advise(&crop, &soil, weather.as_deref()) {
            Ok(report) => print!("{}", report),
            Err(e) => match e.downcast_ref::<FarmBrainError>() {
                Some(FarmBrainError::NotFound(_)) => {
                    eprintln!(
                        "Error: Crop '{}' not found. Use 'farmbrain crops --list' to see available crops.",
                        crop
                    );
                    std::process::exit(1);
                }
                _ => return Err(e),
            },
        },
        Commands::Analyze { soil } => print!("{}", analyze(&soil)?),
        Commands::Crops { season, .. } => print!("{}", list_crops(season.as_deref())),
        Commands::Serve { host, port } => {
            let mut server = config.server;
            if let Some(host) = host {
                server.host = host;
            }
            if let Some(port) = port {
                server.port = port;
            }
            api::serve(&server).await?;
        }
    }

    Ok(())
}

/// `-v` wins over `RUST_LOG`, which wins over the configured level.
/// Logs go to stderr so reports on stdout stay clean.
fn init_logging(cli: &Cli, config: &Config) {
    let filter = match cli.log_directive() {
        Some(directive) => EnvFilter::new(directive),
        None => EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&config.logging.level)),
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Render an advisory. The crop is resolved before any input file is read.
fn advise(
    crop_name: &str,
    soil_path: &Path,
    weather_path: Option<&Path>,
) -> anyhow::Result<String> {
    let catalogue = CropCatalogue::new();
    let crop = catalogue.find(crop_name)?;

    let soil: SoilSample = load_input(soil_path)
        .with_context(|| format!("Failed to load soil sample from {}", soil_path.display()))?;
    let weather: Option<WeatherObservation> = weather_path
        .map(|path| {
            load_input(path)
                .with_context(|| format!("Failed to load weather from {}", path.display()))
        })
        .transpose()?;

    let advisory = CropAdvisor::new().advise(crop, &soil, weather.as_ref());
    Ok(render_advisory(&advisory))
}

fn analyze(soil_path: &Path) -> anyhow::Result<String> {
    let soil: SoilSample = load_input(soil_path)
        .with_context(|| format!("Failed to load soil sample from {}", soil_path.display()))?;

    let analyzer = SoilAnalyzer::new(Arc::new(CropCatalogue::new()));
    let recommendations = analyzer.analyze(&soil);
    let suitable = analyzer.suitable_crops(&soil);
    Ok(render_soil_report(&recommendations, &suitable))
}

fn list_crops(season: Option<&str>) -> String {
    let catalogue = CropCatalogue::new();
    let crops = match season {
        Some(season) => catalogue.by_season(season),
        None => catalogue.all(),
    };
    render_crop_table(&crops)
}
