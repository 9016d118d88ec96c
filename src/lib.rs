pub mod api;
pub mod cli;
pub mod modules;
pub mod shared;

// Re-exports for embedding callers
pub use modules::watchlist::{
    AnimeEntry, JsonFileStore, MemoryStore, WatchStatus, WatchlistDocument, WatchlistService,
    WatchlistStats, WatchlistStore,
};
pub use shared::{AppConfig, AppError, AppResult};
