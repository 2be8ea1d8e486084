//! Constants used throughout the application.
//!
//! This module contains all constants used in the Solace application, organized
//! into logical groups. Having constants centralized makes them easier to find,
//! modify, and reference consistently.

// Application Metadata
/// The name of the application.
pub const APP_NAME: &str = "solace";
/// The description of the application used in CLI help text.
pub const APP_DESCRIPTION: &str = "A passcode-gated mood journal with streaks and guidance";

// Storage Keys
/// Key under which the serialized entry collection is persisted.
pub const KEY_ENTRIES: &str = "diaryEntries";
/// Key under which the diary passcode is persisted.
pub const KEY_PASSCODE: &str = "diaryPasscode";
/// Key under which the streak/points/check-in blob is persisted.
pub const KEY_MOOD_STATS: &str = "moodStats";

// Passcode Policy
/// Factory passcode used until the user stores their own.
pub const DEFAULT_PASSCODE: &str = "1234";
/// Minimum number of characters a new passcode must have.
pub const MIN_PASSCODE_LEN: usize = 4;

// Entry Validation
/// Maximum entry length accepted at the input boundary.
pub const MAX_ENTRY_CHARS: usize = 1000;

// Sentiment Word Lists
/// Words whose presence counts toward a Positive classification.
pub const POSITIVE_WORDS: &[&str] = &[
    "happy",
    "joy",
    "great",
    "awesome",
    "amazing",
    "love",
    "wonderful",
];
/// Words whose presence counts toward a Negative classification.
pub const NEGATIVE_WORDS: &[&str] = &[
    "sad",
    "angry",
    "bad",
    "hate",
    "terrible",
    "awful",
    "depressed",
];

// Configuration Keys & Environment Variables
/// Environment variable for specifying the Solace data directory.
pub const ENV_VAR_SOLACE_DIR: &str = "SOLACE_DIR";
/// Environment variable for the preferred song-search language.
pub const ENV_VAR_SOLACE_LANGUAGE: &str = "SOLACE_LANGUAGE";
/// Environment variable holding the YouTube Data API key, if any.
pub const ENV_VAR_YOUTUBE_API_KEY: &str = "SOLACE_YOUTUBE_API_KEY";
/// Standard environment variable for the user's home directory.
pub const ENV_VAR_HOME: &str = "HOME";
/// Default sub-directory name for Solace data within the user's home directory.
pub const DEFAULT_DATA_SUBDIR: &str = ".solace";
/// File name of the SQLite database inside the data directory.
pub const DB_FILE_NAME: &str = "solace.db";
/// Default language used when searching for mood songs.
pub const DEFAULT_SONG_LANGUAGE: &str = "English";

// Date/Time Logic
/// Date format string for ISO date format (YYYY-MM-DD).
pub const DATE_FORMAT_ISO: &str = "%Y-%m-%d";
/// Date format string for compact date format (YYYYMMDD).
pub const DATE_FORMAT_COMPACT: &str = "%Y%m%d";
/// Display format for entry dates (M/D/YYYY, no zero padding).
///
/// Date search matches by substring containment against this rendering,
/// so changing it changes which searches hit.
pub const DATE_FORMAT_DISPLAY: &str = "%-m/%-d/%Y";

// Content Providers
/// Quote shown when the quote API is unreachable or returns garbage.
pub const DEFAULT_QUOTE: &str = "Stay strong. Brighter days are ahead.";
/// Base URL of the quote API.
pub const QUOTE_API_BASE_URL: &str = "https://zenquotes.io";
/// Base URL of the YouTube Data API.
pub const YOUTUBE_API_BASE_URL: &str = "https://www.googleapis.com";
/// Maximum number of songs requested per mood search.
pub const MAX_SONG_RESULTS: u32 = 5;

// Streak & Points
/// Display-only bonus points awarded per streak day.
pub const STREAK_BONUS_MULTIPLIER: u32 = 2;
/// Streak length at which the Legendary rank is reached.
pub const STREAK_LEGENDARY: u32 = 30;
/// Streak length at which the Master rank is reached.
pub const STREAK_MASTER: u32 = 14;
/// Streak length at which the Advanced rank is reached.
pub const STREAK_ADVANCED: u32 = 7;

// Logging Configuration
/// Default log filter when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
