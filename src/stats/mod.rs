//! Aggregate statistics: distributions, streaks, points and check-ins.
//!
//! The distribution helpers are pure functions over an entry slice.
//! [`MoodStats`] is the persisted activity blob: login streak, lifetime
//! points, the last login date, and the mood check-in history.

use crate::constants::{
    KEY_MOOD_STATS, STREAK_ADVANCED, STREAK_BONUS_MULTIPLIER, STREAK_LEGENDARY, STREAK_MASTER,
};
use crate::errors::{AppResult, StorageError};
use crate::journal::{Entry, Mood};
use crate::sentiment::Sentiment;
use crate::storage::{set_with_retry, KeyValueStore};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use tracing::{debug, info};

/// Entry counts per sentiment. All three buckets are always present.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SentimentDistribution {
    pub positive: usize,
    pub negative: usize,
    pub neutral: usize,
}

impl SentimentDistribution {
    /// Count for one sentiment bucket.
    pub fn count(&self, sentiment: Sentiment) -> usize {
        match sentiment {
            Sentiment::Positive => self.positive,
            Sentiment::Negative => self.negative,
            Sentiment::Neutral => self.neutral,
        }
    }
}

/// Tallies entries per sentiment.
pub fn sentiment_distribution(entries: &[Entry]) -> SentimentDistribution {
    let mut dist = SentimentDistribution::default();
    for entry in entries {
        match entry.sentiment {
            Sentiment::Positive => dist.positive += 1,
            Sentiment::Negative => dist.negative += 1,
            Sentiment::Neutral => dist.neutral += 1,
        }
    }
    dist
}

/// Tallies entries per mood, zero-filled over the whole mood enumeration.
pub fn mood_distribution(entries: &[Entry]) -> BTreeMap<Mood, usize> {
    let mut counts: BTreeMap<Mood, usize> = Mood::ALL.iter().map(|m| (*m, 0)).collect();
    for entry in entries {
        *counts.entry(entry.mood).or_insert(0) += 1;
    }
    counts
}

/// Date of the earliest-created entry (minimum timestamp), or `None` when
/// the collection is empty. Callers render the empty case as "N/A".
pub fn first_entry_date(entries: &[Entry]) -> Option<NaiveDate> {
    entries
        .iter()
        .min_by_key(|e| e.timestamp)
        .map(|e| e.date)
}

/// Achievement rank derived from the current streak length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StreakRank {
    Beginner,
    Advanced,
    Master,
    Legendary,
}

impl fmt::Display for StreakRank {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            StreakRank::Beginner => "Beginner",
            StreakRank::Advanced => "Advanced",
            StreakRank::Master => "Master",
            StreakRank::Legendary => "Legendary",
        };
        write!(f, "{}", label)
    }
}

/// One mood check-in: a free-form mood word recorded on a given day.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodCheckin {
    /// The mood word as the user typed it (lowercased).
    pub mood: String,
    /// The day the check-in was recorded.
    pub date: NaiveDate,
}

/// Persisted activity blob: streak, points, last login, check-in history.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct MoodStats {
    /// Consecutive-day login count.
    pub streak: u32,
    /// Lifetime points: exactly one per distinct calendar day of login.
    pub points: u64,
    /// Most recent day a login was recorded.
    pub last_login_date: Option<NaiveDate>,
    /// Mood check-in history, oldest first.
    pub mood_history: Vec<MoodCheckin>,
}

impl MoodStats {
    /// Loads the blob from storage, starting zeroed if none is stored.
    ///
    /// # Errors
    ///
    /// Returns an error if storage cannot be read or the blob does not
    /// decode.
    pub fn load(storage: &dyn KeyValueStore) -> AppResult<Self> {
        match storage.get(KEY_MOOD_STATS)? {
            Some(raw) => serde_json::from_str(&raw)
                .map_err(|source| StorageError::Corrupt {
                    key: KEY_MOOD_STATS,
                    source,
                })
                .map_err(Into::into),
            None => Ok(MoodStats::default()),
        }
    }

    /// Persists the blob.
    ///
    /// # Errors
    ///
    /// Returns an error if encoding or the (once-retried) write fails.
    pub fn persist(&self, storage: &dyn KeyValueStore) -> AppResult<()> {
        let blob = serde_json::to_string(self).map_err(|source| StorageError::Encode {
            key: KEY_MOOD_STATS,
            source,
        })?;
        set_with_retry(storage, KEY_MOOD_STATS, &blob)
    }

    /// Records a login for `today` and updates streak and points.
    ///
    /// Streak rules: first login ever starts at 1; a login the day after
    /// the previous one increments; a repeat login on the same day changes
    /// nothing; any gap longer than one day resets to 1. Points go up by
    /// one only on the first login of a calendar day, so calling this twice
    /// on the same day cannot inflate them.
    ///
    /// Returns `true` when `today` was a new login day.
    pub fn record_login(&mut self, today: NaiveDate) -> bool {
        let new_day = self.last_login_date != Some(today);

        match self.last_login_date {
            None => {
                self.streak = 1;
            }
            Some(last) if last == today => {
                // Already counted today; streak stands.
            }
            Some(last) if last.succ_opt() == Some(today) => {
                self.streak += 1;
            }
            Some(_) => {
                // Broken streak
                self.streak = 1;
            }
        }

        if new_day {
            self.points += 1;
            info!("Login recorded for {} (streak {})", today, self.streak);
        } else {
            debug!("Login already recorded for {}", today);
        }
        self.last_login_date = Some(today);
        new_day
    }

    /// Appends a mood check-in for `today`.
    pub fn record_checkin(&mut self, mood: &str, today: NaiveDate) {
        self.mood_history.push(MoodCheckin {
            mood: mood.trim().to_lowercase(),
            date: today,
        });
    }

    /// Tallies check-ins per mood word.
    pub fn checkin_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for checkin in &self.mood_history {
            *counts.entry(checkin.mood.as_str()).or_insert(0) += 1;
        }
        counts
    }

    /// Display-only bonus: the streak doubled. Never folded into `points`.
    pub fn bonus_points(&self) -> u32 {
        self.streak * STREAK_BONUS_MULTIPLIER
    }

    /// Achievement rank for the current streak.
    pub fn rank(&self) -> StreakRank {
        if self.streak >= STREAK_LEGENDARY {
            StreakRank::Legendary
        } else if self.streak >= STREAK_MASTER {
            StreakRank::Master
        } else if self.streak >= STREAK_ADVANCED {
            StreakRank::Advanced
        } else {
            StreakRank::Beginner
        }
    }
}
