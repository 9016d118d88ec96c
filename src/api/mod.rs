pub mod error;
pub mod routes;

pub use routes::{router, SharedService};

use crate::log_info;
use crate::modules::watchlist::application::WatchlistService;
use crate::shared::config::AppConfig;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Run the HTTP API until the process is stopped.
pub async fn serve(config: &AppConfig, service: WatchlistService) -> anyhow::Result<()> {
    let shared: SharedService = Arc::new(Mutex::new(service));
    let app = router(shared);

    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    log_info!("Anime tracker API listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
