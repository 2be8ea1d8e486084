//! Diary entry data model.
//!
//! Defines the [`Entry`] record, the fixed [`Mood`] enumeration with its
//! display colors, and the [`EntryDraft`] input that the store turns into
//! a persisted entry.

use crate::constants::DATE_FORMAT_DISPLAY;
use crate::sentiment::Sentiment;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The fixed set of moods a diary entry can be tagged with.
///
/// The mood is chosen by the user at save time and is independent of the
/// sentiment derived from the text. Each mood carries a display emoji and
/// a hex color used by presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Mood {
    Happy,
    Sad,
    Angry,
    Calm,
    Depressed,
    Thoughts,
}

impl Mood {
    /// All moods in display order.
    pub const ALL: [Mood; 6] = [
        Mood::Happy,
        Mood::Sad,
        Mood::Angry,
        Mood::Calm,
        Mood::Depressed,
        Mood::Thoughts,
    ];

    /// Human-readable label.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Happy => "Happy",
            Mood::Sad => "Sad",
            Mood::Angry => "Angry",
            Mood::Calm => "Calm",
            Mood::Depressed => "Depressed",
            Mood::Thoughts => "Thoughts",
        }
    }

    /// Display emoji.
    pub fn emoji(&self) -> &'static str {
        match self {
            Mood::Happy => "😊",
            Mood::Sad => "😢",
            Mood::Angry => "😠",
            Mood::Calm => "😌",
            Mood::Depressed => "😭",
            Mood::Thoughts => "💭",
        }
    }

    /// Hex display color.
    pub fn color(&self) -> &'static str {
        match self {
            Mood::Happy => "#FFD166",
            Mood::Sad => "#06D6A0",
            Mood::Angry => "#EF476F",
            Mood::Calm => "#118AB2",
            Mood::Depressed => "#073B4C",
            Mood::Thoughts => "#7209B7",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

impl FromStr for Mood {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "happy" => Ok(Mood::Happy),
            "sad" => Ok(Mood::Sad),
            "angry" => Ok(Mood::Angry),
            "calm" => Ok(Mood::Calm),
            "depressed" => Ok(Mood::Depressed),
            "thoughts" => Ok(Mood::Thoughts),
            other => Err(format!(
                "unknown mood '{}' (expected happy, sad, angry, calm, depressed or thoughts)",
                other
            )),
        }
    }
}

/// One diary record.
///
/// Entries are immutable once created except through the store's explicit
/// edit operation, which replaces text, date, mood and sentiment together
/// while keeping the entry's id and collection position.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Stable identity, assigned once at creation and never reused.
    pub id: u64,
    /// The entry text (non-empty after trimming).
    pub text: String,
    /// Calendar date chosen by the user; may differ from the creation time.
    pub date: NaiveDate,
    /// Milliseconds since the Unix epoch of creation or last edit.
    pub timestamp: i64,
    /// Sentiment computed from `text` at save time.
    pub sentiment: Sentiment,
    /// Mood chosen by the user at save time.
    pub mood: Mood,
}

impl Entry {
    /// Renders `date` in the M/D/YYYY display format.
    ///
    /// Date search matches by substring against this string, so it is part
    /// of the filtering contract, not just presentation.
    pub fn display_date(&self) -> String {
        self.date.format(DATE_FORMAT_DISPLAY).to_string()
    }
}

/// User input for creating or editing an entry.
///
/// The store derives the sentiment and timestamp itself; a draft carries
/// only what the user chooses.
#[derive(Debug, Clone)]
pub struct EntryDraft {
    /// The entry text.
    pub text: String,
    /// Calendar date the entry is about.
    pub date: NaiveDate,
    /// The user's chosen mood tag.
    pub mood: Mood,
}

impl EntryDraft {
    /// Convenience constructor.
    pub fn new(text: impl Into<String>, date: NaiveDate, mood: Mood) -> Self {
        Self {
            text: text.into(),
            date,
            mood,
        }
    }
}
