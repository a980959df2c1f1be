use std::time::Duration;

use anyhow::{bail, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use dealer_client::DealerClient;
use lotview_core::{Config, ReviewPipeline};
use nlu_client::NluClient;

#[derive(Parser)]
#[command(name = "lotview", about = "Drive the dealership review pipeline")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List dealerships, optionally filtered by state
    Dealers {
        #[arg(long)]
        state: Option<String>,
    },
    /// Show a single dealership
    Dealer { id: i64 },
    /// Fetch sentiment-enriched reviews for a dealership
    Reviews { dealer_id: i64 },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("lotview=info".parse()?))
        .init();

    let config = Config::from_env();
    config.log_redacted();

    let timeout = Duration::from_secs(config.http_timeout_secs);
    let source = DealerClient::new(&config.dealer_api_url, &config.review_api_url)
        .with_timeout(timeout);
    let analyzer = NluClient::new(&config.nlu_url, &config.nlu_api_key).with_timeout(timeout);
    let pipeline = ReviewPipeline::new(source, analyzer);

    let cli = Cli::parse();
    match cli.command {
        Command::Dealers { state } => {
            let dealers = match state {
                Some(st) => pipeline.dealers_by_state(&st).await,
                None => pipeline.dealers().await,
            };
            println!("{}", serde_json::to_string_pretty(&dealers)?);
        }
        Command::Dealer { id } => match pipeline.dealer(id).await {
            Some(dealer) => println!("{}", serde_json::to_string_pretty(&dealer)?),
            None => bail!("no dealer with id {id}"),
        },
        Command::Reviews { dealer_id } => {
            let reviews = pipeline.reviews(dealer_id).await;
            println!("{}", serde_json::to_string_pretty(&reviews)?);
        }
    }

    Ok(())
}
