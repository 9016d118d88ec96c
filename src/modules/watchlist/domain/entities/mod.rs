pub mod anime_entry;

pub use anime_entry::AnimeEntry;
