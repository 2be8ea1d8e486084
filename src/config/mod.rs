//! Configuration management for the solace application.
//!
//! This module handles loading and validating configuration settings from
//! environment variables, with sensible defaults. It supports configuring
//! the data directory, the song-search language, and the optional video
//! API key.
//!
//! # Environment Variables
//!
//! - `SOLACE_DIR`: Path to the data directory (defaults to ~/.solace)
//! - `SOLACE_LANGUAGE`: Language used when searching for mood songs (defaults to "English")
//! - `SOLACE_YOUTUBE_API_KEY`: API key for song search; song search is disabled without it
//! - `HOME`: Used for expanding the default data directory path

use crate::constants::{
    DB_FILE_NAME, DEFAULT_DATA_SUBDIR, DEFAULT_SONG_LANGUAGE, ENV_VAR_HOME, ENV_VAR_SOLACE_DIR,
    ENV_VAR_SOLACE_LANGUAGE, ENV_VAR_YOUTUBE_API_KEY,
};
use crate::errors::{AppError, AppResult};
use std::env;
use std::fmt;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Configuration for the solace application.
pub struct Config {
    /// Directory where the database file lives.
    ///
    /// Loaded from `SOLACE_DIR`, falling back to `~/.solace`. The path is
    /// expanded with `shellexpand` so `~` and environment references work.
    pub data_dir: PathBuf,

    /// Language used in the song search query.
    pub song_language: String,

    /// API key for the video search API, if configured.
    pub youtube_api_key: Option<String>,
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("data_dir", &self.data_dir)
            .field("song_language", &self.song_language)
            .field(
                "youtube_api_key",
                &self.youtube_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Config {
    /// Loads configuration from environment variables with sensible defaults.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory resolves to an
    /// empty path (no `SOLACE_DIR` and no usable `HOME`).
    pub fn load() -> AppResult<Self> {
        let data_dir_str = env::var(ENV_VAR_SOLACE_DIR).unwrap_or_else(|_| {
            let home = env::var(ENV_VAR_HOME).unwrap_or_default();
            if home.is_empty() {
                DEFAULT_DATA_SUBDIR.to_string()
            } else {
                format!("{}/{}", home, DEFAULT_DATA_SUBDIR)
            }
        });
        let data_dir = PathBuf::from(shellexpand::tilde(&data_dir_str).into_owned());

        let song_language = env::var(ENV_VAR_SOLACE_LANGUAGE)
            .unwrap_or_else(|_| DEFAULT_SONG_LANGUAGE.to_string());

        let youtube_api_key = env::var(ENV_VAR_YOUTUBE_API_KEY)
            .ok()
            .filter(|key| !key.trim().is_empty());

        let config = Config {
            data_dir,
            song_language,
            youtube_api_key,
        };
        debug!("Loaded configuration: {:?}", config);
        Ok(config)
    }

    /// Validates the loaded configuration.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Config` if the data directory did not resolve to
    /// an absolute path or the song language is blank.
    pub fn validate(&self) -> AppResult<()> {
        if self.data_dir.as_os_str().is_empty() || !self.data_dir.is_absolute() {
            return Err(AppError::Config(format!(
                "Data directory could not be determined. Set {} to an absolute path or ensure HOME is set.",
                ENV_VAR_SOLACE_DIR
            )));
        }
        if self.song_language.trim().is_empty() {
            return Err(AppError::Config(
                "Song language cannot be blank".to_string(),
            ));
        }
        Ok(())
    }

    /// Full path of the SQLite database file.
    pub fn db_path(&self) -> PathBuf {
        self.data_dir.join(DB_FILE_NAME)
    }
}

/// Creates the data directory if it does not already exist.
///
/// # Errors
///
/// Returns an I/O error if the directory cannot be created.
pub fn ensure_data_dir_exists(dir: &Path) -> AppResult<()> {
    if !dir.exists() {
        debug!("Creating data directory {:?}", dir);
        fs::create_dir_all(dir)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        env::remove_var(ENV_VAR_SOLACE_DIR);
        env::remove_var(ENV_VAR_SOLACE_LANGUAGE);
        env::remove_var(ENV_VAR_YOUTUBE_API_KEY);
    }

    #[test]
    #[serial]
    fn test_load_defaults() {
        clear_env();
        env::set_var(ENV_VAR_HOME, "/home/someone");

        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/home/someone/.solace"));
        assert_eq!(config.song_language, "English");
        assert!(config.youtube_api_key.is_none());
        assert!(config.validate().is_ok());
        assert_eq!(
            config.db_path(),
            PathBuf::from("/home/someone/.solace/solace.db")
        );
    }

    #[test]
    #[serial]
    fn test_load_explicit_dir_and_language() {
        clear_env();
        env::set_var(ENV_VAR_SOLACE_DIR, "/tmp/solace-test");
        env::set_var(ENV_VAR_SOLACE_LANGUAGE, "Telugu");

        let config = Config::load().unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/tmp/solace-test"));
        assert_eq!(config.song_language, "Telugu");

        clear_env();
    }

    #[test]
    #[serial]
    fn test_blank_api_key_treated_as_absent() {
        clear_env();
        env::set_var(ENV_VAR_HOME, "/home/someone");
        env::set_var(ENV_VAR_YOUTUBE_API_KEY, "   ");

        let config = Config::load().unwrap();
        assert!(config.youtube_api_key.is_none());

        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_unresolvable_dir() {
        clear_env();
        env::set_var(ENV_VAR_HOME, "");

        let config = Config::load().unwrap();
        assert!(config.validate().is_err());

        clear_env();
    }

    #[test]
    fn test_debug_redacts_api_key() {
        let config = Config {
            data_dir: PathBuf::from("/tmp"),
            song_language: "English".to_string(),
            youtube_api_key: Some("secret-key".to_string()),
        };
        let debug = format!("{:?}", config);
        assert!(!debug.contains("secret-key"));
        assert!(debug.contains("REDACTED"));
    }
}
