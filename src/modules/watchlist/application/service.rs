use crate::modules::watchlist::domain::{
    AnimeEntry, WatchStatus, WatchlistDocument, WatchlistStore,
};
use crate::shared::errors::{AppError, AppResult};
use crate::shared::utils::Validator;
use crate::{log_debug, log_info};
use std::collections::HashMap;
use std::sync::Arc;

/// Aggregate numbers over the whole watchlist
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct WatchlistStats {
    pub total: usize,
    pub by_status: HashMap<WatchStatus, usize>,
    pub total_episodes_watched: i64,
    /// Mean over rated entries, rounded to 2 decimals; None when nothing is rated
    pub average_rating: Option<f32>,
}

/// The watchlist engine: single source of truth for entries and their
/// invariants.
///
/// Every mutation validates first, applies in memory, then writes the whole
/// document through the store. The service holds no locks; a multi-request
/// adapter is expected to serialize access around it (the HTTP layer wraps
/// it in a mutex).
pub struct WatchlistService {
    store: Arc<dyn WatchlistStore>,
    entries: Vec<AnimeEntry>,
    next_id: u64,
}

impl WatchlistService {
    /// Build the service from whatever the store currently holds.
    pub async fn load(store: Arc<dyn WatchlistStore>) -> AppResult<Self> {
        let document = store.load().await?;

        // A hand-edited document may carry a counter below an existing id;
        // clamp so already-issued ids are never handed out again.
        let floor = document
            .entries
            .iter()
            .map(|e| e.id)
            .max()
            .map_or(1, |max| max + 1);
        let next_id = document.next_id.max(floor);

        log_debug!(
            "Loaded watchlist with {} entries (next id {})",
            document.entries.len(),
            next_id
        );

        Ok(Self {
            store,
            entries: document.entries,
            next_id,
        })
    }

    fn document(&self) -> WatchlistDocument {
        WatchlistDocument {
            next_id: self.next_id,
            entries: self.entries.clone(),
        }
    }

    async fn persist(&self) -> AppResult<()> {
        self.store.save(&self.document()).await
    }

    fn entry_mut(&mut self, id: u64) -> AppResult<&mut AnimeEntry> {
        self.entries
            .iter_mut()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Anime with ID {} not found", id)))
    }

    /// Add a new anime to the watchlist.
    pub async fn add(
        &mut self,
        title: &str,
        total_episodes: i32,
        status: WatchStatus,
    ) -> AppResult<AnimeEntry> {
        Validator::validate_title(title)?;
        Validator::validate_episode_count(total_episodes)?;

        if self.entries.iter().any(|e| e.title_matches(title)) {
            return Err(AppError::AlreadyExists(format!(
                "Anime '{}' already exists in your watchlist",
                title
            )));
        }

        let entry = AnimeEntry::new(self.next_id, title.to_string(), total_episodes, status);
        self.next_id += 1;
        self.entries.push(entry.clone());
        self.persist().await?;

        log_info!("Added '{}' with id {}", entry.title, entry.id);
        Ok(entry)
    }

    /// Change the watch status of an entry.
    pub async fn update_status(&mut self, id: u64, status: WatchStatus) -> AppResult<AnimeEntry> {
        let entry = self.entry_mut(id)?;
        entry.set_status(status);
        let updated = entry.clone();
        self.persist().await?;

        log_debug!("Entry {} status set to {}", id, status);
        Ok(updated)
    }

    /// Record watch progress. Reaching a known episode total marks the
    /// entry completed.
    pub async fn update_episodes(&mut self, id: u64, episodes_watched: i32) -> AppResult<AnimeEntry> {
        let entry = self.entry_mut(id)?;
        Validator::validate_episode_progress(episodes_watched, entry.total_episodes)?;

        entry.set_episodes_watched(episodes_watched);
        let updated = entry.clone();
        self.persist().await?;

        log_debug!("Entry {} progress set to {} episodes", id, episodes_watched);
        Ok(updated)
    }

    /// Rate an entry on the 0-10 scale.
    pub async fn rate(&mut self, id: u64, rating: f32) -> AppResult<AnimeEntry> {
        Validator::validate_rating(rating)?;

        let entry = self.entry_mut(id)?;
        entry.set_rating(rating);
        let updated = entry.clone();
        self.persist().await?;

        log_debug!("Entry {} rated {}/10", id, rating);
        Ok(updated)
    }

    pub fn get_by_id(&self, id: u64) -> Option<AnimeEntry> {
        self.entries.iter().find(|e| e.id == id).cloned()
    }

    /// All entries in insertion order.
    pub fn list_all(&self) -> Vec<AnimeEntry> {
        self.entries.clone()
    }

    pub fn list_by_status(&self, status: WatchStatus) -> Vec<AnimeEntry> {
        self.entries
            .iter()
            .filter(|e| e.status == status)
            .cloned()
            .collect()
    }

    /// Remove an entry. Its id is never reissued.
    pub async fn delete(&mut self, id: u64) -> AppResult<()> {
        let position = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or_else(|| AppError::NotFound(format!("Anime with ID {} not found", id)))?;

        let removed = self.entries.remove(position);
        self.persist().await?;

        log_info!("Deleted '{}' (id {})", removed.title, removed.id);
        Ok(())
    }

    /// Case-insensitive substring search on titles. An empty query matches
    /// everything.
    pub fn search(&self, query: &str) -> Vec<AnimeEntry> {
        let query = query.to_lowercase();
        self.entries
            .iter()
            .filter(|e| e.title.to_lowercase().contains(&query))
            .cloned()
            .collect()
    }

    pub fn statistics(&self) -> WatchlistStats {
        let mut by_status: HashMap<WatchStatus, usize> =
            WatchStatus::ALL.iter().map(|s| (*s, 0)).collect();
        for entry in &self.entries {
            *by_status.entry(entry.status).or_insert(0) += 1;
        }

        let total_episodes_watched = self
            .entries
            .iter()
            .map(|e| e.episodes_watched as i64)
            .sum();

        let ratings: Vec<f32> = self.entries.iter().filter_map(|e| e.rating).collect();
        let average_rating = if ratings.is_empty() {
            None
        } else {
            let mean = ratings.iter().sum::<f32>() / ratings.len() as f32;
            Some((mean * 100.0).round() / 100.0)
        };

        WatchlistStats {
            total: self.entries.len(),
            by_status,
            total_episodes_watched,
            average_rating,
        }
    }
}
