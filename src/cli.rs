//! Command-line adapter over the watchlist engine.
//!
//! Each subcommand maps 1:1 onto an engine operation. Domain failures are
//! reported as plain messages; argument-shape errors are left to clap.

use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use std::sync::Arc;

use crate::api;
use crate::modules::watchlist::application::WatchlistService;
use crate::modules::watchlist::domain::{AnimeEntry, WatchStatus, WatchlistStore};
use crate::modules::watchlist::infrastructure::JsonFileStore;
use crate::shared::config::AppConfig;
use crate::shared::errors::AppError;

#[derive(Debug, Parser)]
#[command(name = "anilog", version, about = "Track your anime watchlist")]
pub struct Cli {
    /// Path to the watchlist document (overrides ANILOG_DATA_FILE)
    #[arg(long, global = true)]
    pub data_file: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new anime to the watchlist
    Add {
        title: String,
        /// Total episode count; 0 when unknown
        #[arg(default_value_t = 0)]
        total_episodes: i32,
        /// Initial watch status (defaults to "Plan to Watch")
        status: Option<String>,
    },
    /// List all anime, or only those with the given status
    List { status: Option<String> },
    /// Update one field of an entry
    Update {
        id: u64,
        #[arg(value_enum)]
        field: UpdateField,
        value: String,
    },
    /// Delete an entry
    Delete { id: u64 },
    /// Search entries by title
    Search { query: String },
    /// Show watchlist statistics
    Stats,
    /// Run the HTTP API server
    Serve,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum UpdateField {
    Status,
    Episodes,
    Rating,
}

pub async fn run(cli: Cli, mut config: AppConfig) -> anyhow::Result<()> {
    if let Some(path) = cli.data_file {
        config.data_file = path;
    }

    let store: Arc<dyn WatchlistStore> = Arc::new(JsonFileStore::new(&config.data_file));
    let mut service = WatchlistService::load(store).await?;

    match cli.command {
        Command::Add {
            title,
            total_episodes,
            status,
        } => {
            let status = match status {
                Some(raw) => raw.parse::<WatchStatus>()?,
                None => WatchStatus::default(),
            };
            let entry = service.add(&title, total_episodes, status).await?;
            println!("✓ Added: {}", entry.title);
            println!("{}", format_entry(&entry));
        }

        Command::List { status } => {
            let (header, entries) = match status {
                Some(raw) => {
                    let status = raw.parse::<WatchStatus>()?;
                    (status.to_string(), service.list_by_status(status))
                }
                None => ("All Anime".to_string(), service.list_all()),
            };
            println!("\n=== {} ===", header);
            print_entries(&entries);
        }

        Command::Update { id, field, value } => {
            let entry = match field {
                UpdateField::Status => {
                    let entry = service.update_status(id, value.parse()?).await?;
                    println!("✓ Updated status to: {}", entry.status);
                    entry
                }
                UpdateField::Episodes => {
                    let entry = service.update_episodes(id, value.parse::<i32>()?).await?;
                    println!("✓ Updated episodes watched to: {}", entry.episodes_watched);
                    entry
                }
                UpdateField::Rating => {
                    let rating = value.parse::<f32>()?;
                    let entry = service.rate(id, rating).await?;
                    println!("✓ Updated rating to: {}/10", rating);
                    entry
                }
            };
            println!("{}", format_entry(&entry));
        }

        Command::Delete { id } => {
            let entry = service
                .get_by_id(id)
                .ok_or_else(|| AppError::NotFound(format!("Anime with ID {} not found", id)))?;
            service.delete(id).await?;
            println!("✓ Deleted: {}", entry.title);
        }

        Command::Search { query } => {
            let results = service.search(&query);
            println!("\n=== Search results for '{}' ===", query);
            print_entries(&results);
        }

        Command::Stats => {
            let stats = service.statistics();
            println!("\n=== Watchlist Statistics ===");
            println!("Total anime: {}", stats.total);
            println!("Total episodes watched: {}", stats.total_episodes_watched);
            if let Some(avg) = stats.average_rating {
                println!("Average rating: {}/10", avg);
            }
            println!("\nBy Status:");
            for status in WatchStatus::ALL {
                let count = stats.by_status.get(&status).copied().unwrap_or(0);
                if count > 0 {
                    println!("  {}: {}", status, count);
                }
            }
        }

        Command::Serve => {
            api::serve(&config, service).await?;
        }
    }

    Ok(())
}

fn format_entry(entry: &AnimeEntry) -> String {
    let rating = match entry.rating {
        Some(r) => format!("{}/10", r),
        None => "Not rated".to_string(),
    };
    let episodes = if entry.total_episodes > 0 {
        format!("{}/{}", entry.episodes_watched, entry.total_episodes)
    } else {
        entry.episodes_watched.to_string()
    };

    format!(
        "[{}] {}\n    Status: {}\n    Episodes: {}\n    Rating: {}",
        entry.id, entry.title, entry.status, episodes, rating
    )
}

fn print_entries(entries: &[AnimeEntry]) {
    if entries.is_empty() {
        println!("No anime found.");
        return;
    }
    for entry in entries {
        println!("{}\n", format_entry(entry));
    }
}
