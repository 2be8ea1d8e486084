/*!
# Solace

Solace is a passcode-gated mood journal engine. Users record diary entries
tagged with a mood, get a simple sentiment classification of what they
wrote, and can filter, export and summarize their journal. A login streak
with points rewards showing up daily, and a mood check-in surfaces matched
guidance content (a daily goal, a breathing exercise, a journal prompt,
a quote, songs).

## Core Features

- Create, edit and delete diary entries (newest first, edits in place)
- Passcode gate over all diary access, with a reset flow
- Keyword-count sentiment classification at save time
- Sentiment and date filtering, plain-text export
- Sentiment/mood distributions, first-entry date, login streak and points
- Mood check-ins with guidance content and quote/song suggestions

## Architecture

The codebase follows a modular architecture with clear separation of concerns:

- `cli`: Command-line interface handling using clap
- `config`: Configuration loading and validation
- `errors`: Error handling infrastructure
- `storage`: Durable key-value storage (SQLite) behind a trait
- `journal`: Entry and mood data model
- `sentiment`: Keyword-count sentiment classifier
- `store`: The ordered entry collection with write-through persistence
- `passcode`: The access gate state machine
- `filter`: Sentiment/date filtering over entry snapshots
- `stats`: Distributions, streaks, points and check-ins
- `advisor`: Mood-keyed guidance tables
- `content`: Quote and song providers (non-fatal collaborators)
- `session`: The per-session context object tying it all together

## Usage Example

```
use chrono::NaiveDate;
use solace::journal::{EntryDraft, Mood};
use solace::session::Session;
use solace::storage::MemoryStore;

fn main() -> solace::AppResult<()> {
    let mut session = Session::open(MemoryStore::new())?;

    let today = NaiveDate::from_ymd_opt(2024, 6, 1).unwrap();
    assert!(session.unlock("1234", today)?);

    let draft = EntryDraft::new("What a wonderful day", today, Mood::Happy);
    let entry = session.save_entry(draft, 1_717_200_000_000)?;
    println!("Saved entry {} ({})", entry.id, entry.sentiment);
    Ok(())
}
```
*/

/// Mood-keyed guidance tables (goals, breathing, prompts)
pub mod advisor;
/// Command-line interface for parsing and handling user arguments
pub mod cli;
/// Configuration loading and management
pub mod config;
/// Constants used throughout the application
pub mod constants;
/// Quote and song content providers
pub mod content;
/// Error types and utilities for error handling
pub mod errors;
/// Sentiment/date filtering over entry snapshots
pub mod filter;
/// Diary entry data model
pub mod journal;
/// Passcode gate state machine
pub mod passcode;
/// Per-session context object
pub mod session;
/// Keyword-count sentiment classification
pub mod sentiment;
/// Aggregate statistics: distributions, streaks, points
pub mod stats;
/// Durable key-value storage
pub mod storage;
/// The ordered diary entry collection
pub mod store;

// Re-export important types for convenience
pub use cli::CliArgs;
pub use config::Config;
pub use errors::{AppError, AppResult};
pub use filter::FilterCriteria;
pub use journal::{Entry, EntryDraft, Mood};
pub use passcode::{AccessState, PasscodeGate};
pub use sentiment::Sentiment;
pub use session::Session;
pub use stats::MoodStats;
pub use store::EntryStore;
