//! Command-line interface for the solace application.

use crate::constants::{APP_DESCRIPTION, APP_NAME, DATE_FORMAT_COMPACT, DATE_FORMAT_ISO};
use crate::journal::Mood;
use crate::sentiment::Sentiment;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};

/// A passcode-gated mood journal with streaks and guidance
#[derive(Parser, Debug)]
#[command(name = APP_NAME, about = APP_DESCRIPTION)]
#[command(author, version, long_about = None)]
pub struct CliArgs {
    /// Passcode for diary access; prompted for interactively when omitted
    #[arg(short, long, global = true)]
    pub passcode: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Write a new diary entry
    Save {
        /// The entry text (up to 1000 characters)
        #[arg(long)]
        text: String,

        /// Entry date (YYYY-MM-DD or YYYYMMDD); defaults to today
        #[arg(long)]
        date: Option<String>,

        /// Mood tag: happy, sad, angry, calm, depressed or thoughts
        #[arg(long, default_value = "happy")]
        mood: Mood,
    },

    /// List diary entries, optionally filtered
    List {
        /// Keep only entries with this sentiment (positive, negative, neutral)
        #[arg(long)]
        sentiment: Option<Sentiment>,

        /// Keep only entries whose date (M/D/YYYY) contains this text
        #[arg(long)]
        date: Option<String>,
    },

    /// Replace the entry at a position (from `list`, starting at 1)
    Edit {
        /// Position of the entry to edit
        position: usize,

        /// New text; keeps the current text when omitted
        #[arg(long)]
        text: Option<String>,

        /// New date (YYYY-MM-DD or YYYYMMDD); keeps the current date when omitted
        #[arg(long)]
        date: Option<String>,

        /// New mood tag; keeps the current mood when omitted
        #[arg(long)]
        mood: Option<Mood>,
    },

    /// Delete the entry at a position (from `list`, starting at 1)
    Delete {
        /// Position of the entry to delete
        position: usize,

        /// Skip the confirmation prompt
        #[arg(long)]
        yes: bool,
    },

    /// Print all entries as a shareable text blob
    Export,

    /// Show journal insights: distributions, streak, points
    Stats,

    /// Set a new passcode (at least 4 digits)
    Passcode {
        /// The new passcode
        #[arg(long)]
        new: String,
    },

    /// Record how you feel right now and get guidance for it
    Checkin {
        /// A mood word, e.g. sad, depression, alone, angry, happy
        mood: String,

        /// Language for song suggestions; overrides SOLACE_LANGUAGE
        #[arg(long)]
        language: Option<String>,
    },
}

impl CliArgs {
    /// Parse command-line arguments.
    pub fn parse() -> Self {
        <CliArgs as Parser>::parse_from(std::env::args())
    }
}

/// Parses a date argument in YYYY-MM-DD or YYYYMMDD format.
pub fn parse_date_arg(date_str: &str) -> Result<NaiveDate, chrono::ParseError> {
    NaiveDate::parse_from_str(date_str, DATE_FORMAT_ISO)
        .or_else(|_| NaiveDate::parse_from_str(date_str, DATE_FORMAT_COMPACT))
}
