use crate::modules::watchlist::domain::repositories::{WatchlistDocument, WatchlistStore};
use crate::shared::errors::AppResult;
use async_trait::async_trait;
use std::sync::Mutex;

/// In-memory store behind the same contract as the durable ones.
///
/// Useful for tests and embedded callers that want no disk state.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<WatchlistDocument>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_document(document: WatchlistDocument) -> Self {
        Self {
            document: Mutex::new(document),
        }
    }

    /// Current persisted state, for inspection in tests
    pub fn snapshot(&self) -> WatchlistDocument {
        self.document.lock().unwrap().clone()
    }
}

#[async_trait]
impl WatchlistStore for MemoryStore {
    async fn load(&self) -> AppResult<WatchlistDocument> {
        Ok(self.document.lock().unwrap().clone())
    }

    async fn save(&self, document: &WatchlistDocument) -> AppResult<()> {
        *self.document.lock().unwrap() = document.clone();
        Ok(())
    }
}
