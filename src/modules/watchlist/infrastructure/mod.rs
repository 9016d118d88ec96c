pub mod persistence;

pub use persistence::{JsonFileStore, MemoryStore};
