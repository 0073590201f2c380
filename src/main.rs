use clap::Parser;
use log::debug;
use std::path::PathBuf;

use config::ConfigError;
use smartmeal_preprocess::config::load_config;
use smartmeal_preprocess::{PreprocessConfig, Preprocessor};

/// Generate the Smart Meal recipe dataset
#[derive(Parser)]
#[command(name = "smartmeal-preprocess", version, about)]
struct Cli {
    /// Number of sample recipes to generate
    #[arg(short = 'n', long)]
    count: Option<usize>,

    /// Seed for reproducible sample data
    #[arg(short, long)]
    seed: Option<u64>,

    /// Output JSON path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file (defaults to ./preprocess.toml when present)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

impl Cli {
    /// Settings from file and environment, with flags applied last
    fn load_config(&self) -> Result<PreprocessConfig, ConfigError> {
        let loaded = match &self.config {
            Some(path) => load_config(Some(path.as_path()))?,
            None => PreprocessConfig::load()?,
        };
        Ok(loaded.with_overrides(self.count, self.seed, self.output.clone()))
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    let config = cli.load_config()?;
    debug!("{:?}", config);

    println!("Smart Meal Recipe Preprocessing");
    println!("{}", "=".repeat(50));
    println!("\nCreating sample recipes...");

    let mut builder = Preprocessor::builder()
        .sample(config.count)
        .output(config.output_path.clone());
    if let Some(seed) = config.seed {
        builder = builder.seed(seed);
    }
    let output = builder.build()?;

    println!("\nGenerated {} sample recipes", output.recipes.len());
    println!("\nRecipes saved to: {}", config.output_path.display());
    println!("\nPreprocessing complete!");

    println!("\nDataset Statistics:");
    println!("Total recipes: {}", output.recipes.len());
    print!("\n{}", output.report);

    Ok(())
}
