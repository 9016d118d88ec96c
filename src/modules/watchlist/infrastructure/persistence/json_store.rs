use crate::modules::watchlist::domain::entities::AnimeEntry;
use crate::modules::watchlist::domain::repositories::{WatchlistDocument, WatchlistStore};
use crate::shared::errors::AppResult;
use crate::{log_debug, log_warn};
use async_trait::async_trait;
use std::ffi::OsString;
use std::io::ErrorKind;
use std::path::PathBuf;
use tokio::fs;

/// Flat-file store: the whole watchlist lives in one JSON document.
///
/// Writes go to a sibling `.tmp` file first and are renamed into place, so
/// a crash mid-write never leaves a half-written document behind.
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut os: OsString = self.path.as_os_str().to_owned();
        os.push(".tmp");
        PathBuf::from(os)
    }

    fn parse(&self, bytes: &[u8]) -> WatchlistDocument {
        if let Ok(document) = serde_json::from_slice::<WatchlistDocument>(bytes) {
            return document;
        }

        // Legacy format: a bare array of entries with no id counter
        if let Ok(entries) = serde_json::from_slice::<Vec<AnimeEntry>>(bytes) {
            log_debug!(
                "Migrating legacy watchlist document at {}",
                self.path.display()
            );
            return WatchlistDocument::from_entries(entries);
        }

        log_warn!(
            "Watchlist document at {} is unparsable, starting from an empty watchlist",
            self.path.display()
        );
        WatchlistDocument::default()
    }
}

#[async_trait]
impl WatchlistStore for JsonFileStore {
    async fn load(&self) -> AppResult<WatchlistDocument> {
        match fs::read(&self.path).await {
            Ok(bytes) => Ok(self.parse(&bytes)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(WatchlistDocument::default()),
            Err(e) => Err(e.into()),
        }
    }

    async fn save(&self, document: &WatchlistDocument) -> AppResult<()> {
        let json = serde_json::to_vec_pretty(document)?;

        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).await?;
            }
        }

        let temp_path = self.temp_path();
        fs::write(&temp_path, &json).await?;
        fs::rename(&temp_path, &self.path).await?;

        log_debug!(
            "Saved {} entries to {}",
            document.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}
