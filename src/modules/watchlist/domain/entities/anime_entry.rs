use crate::modules::watchlist::domain::value_objects::WatchStatus;
use chrono::{DateTime, NaiveDateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// One anime's watch record.
///
/// The entry only exposes mutators that keep `updated_at` fresh; all range
/// and uniqueness validation happens in the service before anything here is
/// touched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnimeEntry {
    pub id: u64,
    pub title: String,
    pub status: WatchStatus,
    pub episodes_watched: i32,
    /// Total episode count; 0 means unknown/unbounded
    pub total_episodes: i32,
    pub rating: Option<f32>,
    #[serde(alias = "added_date", deserialize_with = "flexible_datetime")]
    pub added_at: DateTime<Utc>,
    #[serde(alias = "updated_date", deserialize_with = "flexible_datetime")]
    pub updated_at: DateTime<Utc>,
}

/// Accept both our RFC 3339 timestamps and the offset-less ISO strings the
/// legacy documents carry (those are taken as UTC).
fn flexible_datetime<'de, D>(deserializer: D) -> Result<DateTime<Utc>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = String::deserialize(deserializer)?;
    if let Ok(dt) = DateTime::parse_from_rfc3339(&raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    raw.parse::<NaiveDateTime>()
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(serde::de::Error::custom)
}

impl AnimeEntry {
    pub fn new(id: u64, title: String, total_episodes: i32, status: WatchStatus) -> Self {
        let now = Utc::now();
        Self {
            id,
            title,
            status,
            episodes_watched: 0,
            total_episodes,
            rating: None,
            added_at: now,
            updated_at: now,
        }
    }

    pub fn set_status(&mut self, status: WatchStatus) {
        self.status = status;
        self.updated_at = Utc::now();
    }

    /// Record watch progress. Reaching a known episode total flips the
    /// status to `Completed` automatically.
    pub fn set_episodes_watched(&mut self, episodes_watched: i32) {
        self.episodes_watched = episodes_watched;
        if self.total_episodes > 0 && episodes_watched == self.total_episodes {
            self.status = WatchStatus::Completed;
        }
        self.updated_at = Utc::now();
    }

    pub fn set_rating(&mut self, rating: f32) {
        self.rating = Some(rating);
        self.updated_at = Utc::now();
    }

    pub fn title_matches(&self, other: &str) -> bool {
        self.title.to_lowercase() == other.to_lowercase()
    }
}
