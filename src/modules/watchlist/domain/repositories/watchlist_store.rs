use crate::modules::watchlist::domain::entities::AnimeEntry;
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// The full persisted state of one tracker instance.
///
/// The id counter is stored beside the entries so ids issued before a
/// restart are never reissued, even after deletions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WatchlistDocument {
    pub next_id: u64,
    pub entries: Vec<AnimeEntry>,
}

impl WatchlistDocument {
    /// Rebuild a document from a bare entry list (the legacy on-disk
    /// format, which carried no counter).
    pub fn from_entries(entries: Vec<AnimeEntry>) -> Self {
        let next_id = entries.iter().map(|e| e.id).max().unwrap_or(0) + 1;
        Self { next_id, entries }
    }
}

impl Default for WatchlistDocument {
    fn default() -> Self {
        Self {
            next_id: 1,
            entries: Vec::new(),
        }
    }
}

/// Durable backing for the whole watchlist. Whole-document reads and
/// writes only; no partial updates are exposed.
#[async_trait]
pub trait WatchlistStore: Send + Sync {
    /// Read the backing document. A missing or unparsable document loads
    /// as an empty one rather than failing the caller.
    async fn load(&self) -> AppResult<WatchlistDocument>;

    /// Overwrite the backing document with the current state.
    async fn save(&self, document: &WatchlistDocument) -> AppResult<()>;
}
