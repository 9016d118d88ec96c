// Shared kernel: cross-cutting concerns used by every module

pub mod config; // Environment-driven runtime configuration
pub mod errors; // Shared error types
pub mod utils; // Logging and validation helpers

// Re-exports for convenience
pub use config::AppConfig;
pub use errors::{AppError, AppResult};
