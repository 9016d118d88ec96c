use crate::shared::errors::AppError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Watch status of a tracked anime.
///
/// Serialized with the human-readable labels of the persisted document
/// format, so data files written by older versions keep loading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WatchStatus {
    #[serde(rename = "Plan to Watch")]
    PlanToWatch,
    Watching,
    Completed,
    #[serde(rename = "On Hold")]
    OnHold,
    Dropped,
}

impl WatchStatus {
    pub const ALL: [WatchStatus; 5] = [
        WatchStatus::PlanToWatch,
        WatchStatus::Watching,
        WatchStatus::Completed,
        WatchStatus::OnHold,
        WatchStatus::Dropped,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            WatchStatus::PlanToWatch => "Plan to Watch",
            WatchStatus::Watching => "Watching",
            WatchStatus::Completed => "Completed",
            WatchStatus::OnHold => "On Hold",
            WatchStatus::Dropped => "Dropped",
        }
    }

    /// Comma-separated list of valid labels, for error messages
    pub fn options() -> String {
        Self::ALL
            .iter()
            .map(|s| s.display_name())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

impl Default for WatchStatus {
    fn default() -> Self {
        WatchStatus::PlanToWatch
    }
}

impl fmt::Display for WatchStatus {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for WatchStatus {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "plan to watch" | "plan_to_watch" | "plantowatch" => Ok(WatchStatus::PlanToWatch),
            "watching" => Ok(WatchStatus::Watching),
            "completed" => Ok(WatchStatus::Completed),
            "on hold" | "on_hold" | "onhold" => Ok(WatchStatus::OnHold),
            "dropped" => Ok(WatchStatus::Dropped),
            _ => Err(AppError::InvalidInput(format!(
                "Invalid status '{}'. Choose from: {}",
                s,
                WatchStatus::options()
            ))),
        }
    }
}
