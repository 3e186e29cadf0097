//! Roof Retrofit - Entry Point
//!
//! Builds a roof, generates a zone layout for the chosen priority, prints
//! the performance summary and full report, then exports the design as JSON.

use std::path::PathBuf;

use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tracing_subscriber::EnvFilter;

use roof_retrofit::core::error::Result;
use roof_retrofit::output::render_summary;
use roof_retrofit::{Priority, RegionalConfig, RoofAnalyzer};

/// Roof retrofit analysis - zone layout and performance estimates
#[derive(Parser, Debug)]
#[command(name = "roof-retrofit")]
#[command(about = "Generate a roof zone layout and estimate its energy, water and cost performance")]
struct Args {
    /// Roof width across the ridge (m)
    #[arg(long, default_value_t = 50.0)]
    width: f64,

    /// Roof length along the ridge (m)
    #[arg(long, default_value_t = 40.0)]
    length: f64,

    /// Roof pitch (degrees)
    #[arg(long, default_value_t = 15.0)]
    pitch: f64,

    /// Layout priority: energy, environment or balanced
    #[arg(long, default_value = "energy")]
    priority: String,

    /// Random seed for a reproducible layout
    #[arg(long)]
    seed: Option<u64>,

    /// Regional calibration file (TOML); defaults to Denmark
    #[arg(long)]
    config: Option<PathBuf>,

    /// Output path for the JSON export
    #[arg(long, short = 'o', default_value = "roof_design.json")]
    output: PathBuf,

    /// Skip writing the JSON export
    #[arg(long)]
    no_export: bool,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("roof_retrofit=info")),
        )
        .init();

    let args = Args::parse();

    let config = match &args.config {
        Some(path) => RegionalConfig::load(path)?,
        None => RegionalConfig::default(),
    };

    let seed = args.seed.unwrap_or_else(|| rand::random());
    tracing::info!("Layout seed: {}", seed);
    let mut rng = ChaCha8Rng::seed_from_u64(seed);

    println!("3D Roof Analysis Tool");
    println!("====================");

    let mut analyzer = RoofAnalyzer::with_config(config);
    let roof = analyzer.create_roof(args.width, args.length, args.pitch)?;
    println!(
        "Created roof: {}m × {}m, pitch {}°",
        roof.width(),
        roof.length(),
        roof.pitch()
    );

    let priority = Priority::parse(&args.priority);
    if priority.as_str() != args.priority {
        tracing::warn!(
            "Unknown priority '{}', using {} weights",
            args.priority,
            priority
        );
    }

    println!("\nOptimizing layout for {} priority...", priority);
    let zone_count = analyzer.optimize_layout(priority, &mut rng)?.len();
    println!("Generated {} zones", zone_count);

    let metrics = analyzer.calculate_performance()?;
    println!();
    print!("{}", render_summary(&metrics));

    println!("\n{}", analyzer.generate_report()?);

    if !args.no_export {
        analyzer.export_json(&args.output)?;
        println!("Roof design exported to {}", args.output.display());
    }

    Ok(())
}
