//! Score history ("achievements")
//!
//! An append-only map from a `YYYY-MM-DD HH:MM:SS` timestamp to the score a
//! session finished with, persisted as a single JSON object. Submitting the
//! same score twice in a row is ignored for the lifetime of the log, so a
//! results screen that re-submits does not duplicate the entry.

use std::collections::BTreeMap;
use std::{fmt, io};

use chrono::{DateTime, Local, TimeZone};

use crate::persistence::Store;

/// Document name in the store
pub const DOCUMENT: &str = "achievements";

#[derive(Debug, Clone)]
pub struct AchievementLog {
    store: Store,
    /// Timestamp keys sort chronologically
    entries: BTreeMap<String, u64>,
    /// Last score accepted by this process
    last_saved: Option<u64>,
}

impl AchievementLog {
    /// Load the history from `store`; missing or malformed data starts empty
    pub fn load(store: Store) -> Self {
        let entries: BTreeMap<String, u64> = store.load(DOCUMENT).unwrap_or_default();
        log::info!("Loaded {} achievement entries", entries.len());
        Self {
            store,
            entries,
            last_saved: None,
        }
    }

    /// Record `score` at the current wall-clock time. Returns `false` when the
    /// score repeats the previous submission and nothing was written.
    pub fn save_achievement(&mut self, score: u64) -> io::Result<bool> {
        let timestamp = now_timestamp();
        self.append_at(&timestamp, score)
    }

    /// Record `score` under an explicit timestamp key
    pub fn append_at(&mut self, timestamp: &str, score: u64) -> io::Result<bool> {
        if self.last_saved == Some(score) {
            log::debug!("Skipping duplicate score {}", score);
            return Ok(false);
        }
        self.entries.insert(timestamp.to_string(), score);
        self.last_saved = Some(score);
        self.store.save(DOCUMENT, &self.entries)?;
        log::info!("Achievement saved: {} -> {}", timestamp, score);
        Ok(true)
    }

    /// `(timestamp, score)` oldest first
    pub fn entries(&self) -> impl Iterator<Item = (&str, u64)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), *v))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn best(&self) -> Option<u64> {
        self.entries.values().copied().max()
    }

    /// Drop every entry and the duplicate guard
    pub fn clear(&mut self) -> io::Result<()> {
        self.entries.clear();
        self.last_saved = None;
        self.store.save(DOCUMENT, &self.entries)?;
        log::info!("Achievements cleared");
        Ok(())
    }
}

/// Key format for history entries
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Format a moment as a history key, in that moment's own zone
pub fn format_timestamp<Tz>(at: &DateTime<Tz>) -> String
where
    Tz: TimeZone,
    Tz::Offset: fmt::Display,
{
    at.format(TIMESTAMP_FORMAT).to_string()
}

/// Local wall-clock time
fn now_timestamp() -> String {
    format_timestamp(&Local::now())
}
