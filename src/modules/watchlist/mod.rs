pub mod application;
pub mod domain;
pub mod infrastructure;

// Re-exports for easy external access
pub use application::{WatchlistService, WatchlistStats};
pub use domain::{AnimeEntry, WatchStatus, WatchlistDocument, WatchlistStore};
pub use infrastructure::{JsonFileStore, MemoryStore};
