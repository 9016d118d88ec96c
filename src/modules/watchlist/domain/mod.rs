pub mod entities;
pub mod repositories;
pub mod value_objects;

// Re-exports for easy access
pub use entities::AnimeEntry;
pub use repositories::{WatchlistDocument, WatchlistStore};
pub use value_objects::WatchStatus;
