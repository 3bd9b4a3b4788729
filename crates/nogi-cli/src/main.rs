mod search;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Parser)]
#[command(name = "nogi-cli")]
#[command(about = "Restaurant search across Google Maps and Tabelog")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Search an area for a keyword and list places above a rating
    Search {
        /// Area to search in (e.g., 銀座)
        #[arg(long)]
        area: String,
        /// Cuisine or other keyword (e.g., 焼肉)
        #[arg(long)]
        keyword: String,
        /// Minimum Google Maps rating, 2.0 to 5.0
        #[arg(long, default_value_t = nogi_core::query::DEFAULT_RATING_THRESHOLD)]
        min_rating: f64,
        /// Print records as JSON instead of text cards
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = nogi_core::load_app_config()?;
    // Logs go to stderr so `--json` output stays machine readable.
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Commands::Search {
            area,
            keyword,
            min_rating,
            json,
        } => search::run_search(&config, &area, &keyword, min_rating, json).await,
    }
}
