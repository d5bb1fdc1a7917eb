use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::GenerationMode;

#[derive(Debug, Parser)]
#[command(name = "campaign-gen", about = "fabricated marketing-campaign test data generator")]
pub struct Args {
    #[arg(long, env = "CAMPAIGN_GEN_CONFIG", default_value = "config.yaml")]
    pub config: PathBuf,
    /// Seed for the local random generator; same seed, same batch.
    #[arg(long, env = "CAMPAIGN_GEN_SEED", default_value_t = 42)]
    pub seed: u64,
    /// Override the generation mode from the config file.
    #[arg(long, value_enum)]
    pub mode: Option<GenerationMode>,
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate feedback records and POST them to the configured endpoint.
    Push {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Generate the sales and campaign/product CSV files.
    Sales {
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
}
