use clap::Parser;
use tracing_subscriber::EnvFilter;

use campaign_gen::cli::{Args, Command};
use campaign_gen::config::AppConfig;
use campaign_gen::dispatch;
use campaign_gen::error::GenResult;

fn init_tracing(level: &str) {
    // RUST_LOG wins over the configured level.
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[tokio::main]
async fn main() -> GenResult<()> {
    let args = Args::parse();
    let config = AppConfig::load(&args.config)?;
    init_tracing(&config.log.level);
    tracing::info!(config = %args.config.display(), "config file loaded");

    let mode = args.mode.unwrap_or(config.generation.mode);

    match args.command {
        Command::Push { count } => {
            let response = dispatch::push_feedback(&config, mode, args.seed, count).await?;
            println!("delivered {count} feedback records: HTTP {}", response.status);
        }
        Command::Sales { count } => {
            dispatch::write_sales_files(&config, mode, args.seed, count).await?;
            println!(
                "wrote {} rows to {} and {}",
                count,
                config.csv.sales_file.display(),
                config.csv.campaign_product_file.display()
            );
        }
    }

    Ok(())
}
