/*!
# Solace - A Mood Journal

Solace is a command-line mood journal. Diary entries are guarded by a
passcode, tagged with a mood, classified for sentiment when saved, and
summarized into distributions, streaks and points. A mood check-in prints
guidance content matched to how you feel.

## Usage

```
solace <COMMAND>

Commands:
  save      Write a new diary entry
  list      List diary entries, optionally filtered
  edit      Replace the entry at a position (from `list`, starting at 1)
  delete    Delete the entry at a position (from `list`, starting at 1)
  export    Print all entries as a shareable text blob
  stats     Show journal insights: distributions, streak, points
  passcode  Set a new passcode (at least 4 digits)
  checkin   Record how you feel right now and get guidance for it
```

## Configuration

The application can be configured with the following environment variables:
- `SOLACE_DIR`: Directory for the journal database (defaults to ~/.solace)
- `SOLACE_LANGUAGE`: Language for song suggestions (defaults to "English")
- `SOLACE_YOUTUBE_API_KEY`: API key for song search; songs are skipped without it
*/

use chrono::{DateTime, Local, NaiveDate};
use solace::advisor;
use solace::cli::{parse_date_arg, CliArgs, Command};
use solace::config::{ensure_data_dir_exists, Config};
use solace::constants::{DATE_FORMAT_DISPLAY, DEFAULT_LOG_FILTER, MAX_ENTRY_CHARS};
use solace::content::{QuoteClient, SongClient};
use solace::errors::{AppResult, StoreError};
use solace::journal::EntryDraft;
use solace::session::Session;
use solace::stats;
use solace::storage::Database;
use solace::FilterCriteria;
use std::io::{self, Write};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

fn main() {
    // Structured logging to stderr; RUST_LOG overrides the default filter
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(io::stderr)
        .init();

    let args = CliArgs::parse();
    debug!("CLI arguments: {:?}", args);

    if let Err(e) = run(args) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(args: CliArgs) -> AppResult<()> {
    // Obtain current date/time once at the beginning
    let now: DateTime<Local> = Local::now();
    let today: NaiveDate = now.date_naive();

    info!("Loading configuration");
    let config = Config::load()?;
    config.validate()?;

    ensure_data_dir_exists(&config.data_dir)?;
    let db = Database::open(&config.db_path())?;
    let mut session = Session::open(db)?;

    match args.command {
        Command::Save { text, date, mood } => {
            unlock(&mut session, args.passcode, today)?;
            enforce_text_limit(&text);
            let date = resolve_date(date, today)?;
            let entry = session.save_entry(
                EntryDraft::new(text, date, mood),
                now.timestamp_millis(),
            )?;
            println!(
                "Saved entry for {} ({} {}, sentiment {}).",
                entry.display_date(),
                entry.mood.emoji(),
                entry.mood.label(),
                entry.sentiment
            );
        }

        Command::List { sentiment, date } => {
            unlock(&mut session, args.passcode, today)?;
            let criteria = FilterCriteria {
                sentiment,
                date_contains: date,
            };
            let matches = session.filtered_entries(&criteria)?;

            if matches.is_empty() {
                if criteria.is_empty() {
                    println!("Your journal is empty. Write your first entry with `solace save`.");
                } else {
                    println!("No entries match your filters.");
                }
                return Ok(());
            }
            for (i, entry) in matches.iter().enumerate() {
                println!(
                    "{}. 📅 {} | {} {} [{}]",
                    i + 1,
                    entry.display_date(),
                    entry.mood.emoji(),
                    entry.mood.label(),
                    entry.sentiment
                );
                println!("   {}", entry.text);
            }
        }

        Command::Edit {
            position,
            text,
            date,
            mood,
        } => {
            unlock(&mut session, args.passcode, today)?;
            if text.is_none() && date.is_none() && mood.is_none() {
                fail("Nothing to change. Pass --text, --date or --mood.");
            }
            let index = display_position_to_index(position);

            let entries = session.entries()?;
            let current = entries
                .get(index)
                .cloned()
                .ok_or(StoreError::OutOfRange {
                    position: index,
                    len: entries.len(),
                })?;

            let new_text = text.unwrap_or(current.text);
            enforce_text_limit(&new_text);
            let new_date = resolve_date(date, current.date)?;
            let new_mood = mood.unwrap_or(current.mood);

            let entry = session.update_entry(
                index,
                EntryDraft::new(new_text, new_date, new_mood),
                now.timestamp_millis(),
            )?;
            println!(
                "Updated entry {} ({} {}, sentiment {}).",
                position,
                entry.mood.emoji(),
                entry.mood.label(),
                entry.sentiment
            );
        }

        Command::Delete { position, yes } => {
            unlock(&mut session, args.passcode, today)?;
            let index = display_position_to_index(position);
            if !yes && !confirm(&format!("Delete entry {}? This cannot be undone.", position)) {
                println!("Kept the entry.");
                return Ok(());
            }
            let removed = session.delete_entry(index)?;
            println!("Deleted the entry from {}.", removed.display_date());
        }

        Command::Export => {
            unlock(&mut session, args.passcode, today)?;
            let blob = session.export()?;
            if blob.is_empty() {
                println!("There are no entries to export.");
            } else {
                println!("{}", blob);
            }
        }

        Command::Stats => {
            unlock(&mut session, args.passcode, today)?;
            let entries = session.entries()?;

            println!("Your Journal Insights");
            println!("  Total entries: {}", entries.len());
            let first = stats::first_entry_date(entries)
                .map(|d| d.format(DATE_FORMAT_DISPLAY).to_string())
                .unwrap_or_else(|| "N/A".to_string());
            println!("  First entry:   {}", first);

            let sentiment = stats::sentiment_distribution(entries);
            println!("  Sentiment:     Positive {} | Negative {} | Neutral {}",
                sentiment.positive, sentiment.negative, sentiment.neutral);

            println!("  Moods:");
            for (mood, count) in stats::mood_distribution(entries) {
                println!("    {} {:<9} {}", mood.emoji(), mood.label(), count);
            }

            let activity = session.stats();
            println!(
                "  Streak:        {} day(s) ({}), +{} bonus points",
                activity.streak,
                activity.rank(),
                activity.bonus_points()
            );
            println!("  Points:        {}", activity.points);
        }

        Command::Passcode { new } => {
            session.begin_passcode_reset();
            session.set_passcode(&new)?;
            println!("Passcode updated successfully.");
        }

        Command::Checkin { mood, language } => {
            session.record_checkin(&mood, today)?;
            let mood_key = mood.trim().to_lowercase();
            println!("You're feeling: {}", capitalize(&mood_key));

            let guidance = advisor::guidance(&mood_key);
            println!();
            println!("Today's Mood Goal");
            println!("  {}", guidance.goal);
            println!("Breathing Exercise");
            println!("  {}", guidance.breathing);
            println!("Journal Prompt");
            println!("  {}", guidance.journal_prompt);

            println!();
            println!("“{}”", QuoteClient::new().fetch_quote());

            let language = language.unwrap_or(config.song_language);
            let songs = SongClient::new(config.youtube_api_key).fetch_songs(&mood_key, &language);
            if !songs.is_empty() {
                println!();
                println!("Songs for this mood:");
                for song in songs {
                    println!("  {} — {}", song.title, song.playback_url);
                }
            }

            let counts = session.stats().checkin_counts();
            if counts.len() > 1 || counts.values().any(|&c| c > 1) {
                println!();
                println!("Your check-ins so far:");
                for (mood, count) in counts {
                    println!("  {}: {}", capitalize(mood), count);
                }
            }
        }
    }

    Ok(())
}

/// Resolves the diary passcode (flag or interactive prompt) and unlocks
/// the session. Exits with a message on a mismatch.
fn unlock(
    session: &mut Session<Database>,
    passcode_arg: Option<String>,
    today: NaiveDate,
) -> AppResult<()> {
    let code = match passcode_arg {
        Some(code) => code,
        None => rpassword::prompt_password("Enter passcode: ")?,
    };
    if !session.unlock(&code, today)? {
        fail("Incorrect passcode. Please try again.");
    }
    Ok(())
}

/// Parses an optional date argument, defaulting to `fallback`.
fn resolve_date(arg: Option<String>, fallback: NaiveDate) -> AppResult<NaiveDate> {
    match arg {
        Some(raw) => parse_date_arg(&raw).map_err(|e| {
            solace::AppError::Config(format!(
                "Invalid date '{}': {} (expected YYYY-MM-DD or YYYYMMDD)",
                raw, e
            ))
        }),
        None => Ok(fallback),
    }
}

/// Converts a 1-based display position into a store index.
fn display_position_to_index(position: usize) -> usize {
    match position.checked_sub(1) {
        Some(index) => index,
        None => fail("Positions start at 1; run `solace list` to see them."),
    }
}

/// Caps entry text length at the input boundary, as the editor UI would.
fn enforce_text_limit(text: &str) {
    let chars = text.chars().count();
    if chars > MAX_ENTRY_CHARS {
        fail(&format!(
            "Entry text is limited to {} characters (got {}).",
            MAX_ENTRY_CHARS, chars
        ));
    }
}

/// Prompts for a yes/no answer on stdin, defaulting to no.
fn confirm(question: &str) -> bool {
    print!("{} [y/N] ", question);
    io::stdout().flush().ok();

    let mut input = String::new();
    if io::stdin().read_line(&mut input).is_err() {
        return false;
    }
    matches!(input.trim().to_lowercase().as_str(), "y" | "yes")
}

/// Prints a user-facing message and exits without a stack of error context.
fn fail(message: &str) -> ! {
    eprintln!("{}", message);
    std::process::exit(1);
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}
