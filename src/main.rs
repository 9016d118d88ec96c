use clap::Parser;

use anilog::cli::{self, Cli};
use anilog::shared::config::AppConfig;
use anilog::shared::utils::logger;

#[tokio::main]
async fn main() {
    // Load environment variables
    dotenvy::dotenv().ok();
    logger::init_logger();

    let cli = Cli::parse();
    let config = AppConfig::from_env();

    if let Err(e) = cli::run(cli, config).await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
