use std::env;
use std::path::PathBuf;

const DEFAULT_DATA_FILE: &str = "anime_data.json";
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 8000;

/// Runtime configuration, read from the environment.
///
/// `.env` files are honored via dotenvy before this is built.
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Path to the JSON watchlist document
    pub data_file: PathBuf,
    /// Bind host for the HTTP API
    pub host: String,
    /// Bind port for the HTTP API
    pub port: u16,
}

impl AppConfig {
    pub fn from_env() -> Self {
        let data_file = env::var("ANILOG_DATA_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from(DEFAULT_DATA_FILE));

        let host = env::var("ANILOG_HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string());

        let port = env::var("ANILOG_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(DEFAULT_PORT);

        Self {
            data_file,
            host,
            port,
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
        }
    }
}
