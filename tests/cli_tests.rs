//! End-to-end tests of the solace binary.
//!
//! Each test runs against its own scratch data directory, so state never
//! leaks between tests and the binary's own persistence is what carries
//! data from one invocation to the next.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// A solace command pointed at the given scratch directory.
fn solace(dir: &TempDir) -> Command {
    let mut cmd = Command::cargo_bin("solace").unwrap();
    cmd.env("SOLACE_DIR", dir.path())
        .env_remove("SOLACE_YOUTUBE_API_KEY")
        .env_remove("RUST_LOG");
    cmd
}

#[test]
fn test_save_and_list_round_trip() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args([
            "save",
            "--passcode",
            "1234",
            "--text",
            "I feel so sad and alone today",
            "--mood",
            "sad",
            "--date",
            "2024-06-01",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiment Negative"));

    solace(&dir)
        .args(["list", "--passcode", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("I feel so sad and alone today"))
        .stdout(predicate::str::contains("6/1/2024"))
        .stdout(predicate::str::contains("[Negative]"));
}

#[test]
fn test_wrong_passcode_is_rejected() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["list", "--passcode", "0000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect passcode"));
}

#[test]
fn test_empty_entry_is_rejected() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("empty"));

    solace(&dir)
        .args(["list", "--passcode", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Your journal is empty"));
}

#[test]
fn test_oversized_entry_is_rejected_at_boundary() {
    let dir = TempDir::new().unwrap();
    let long_text = "a".repeat(1001);

    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", &long_text])
        .assert()
        .failure()
        .stderr(predicate::str::contains("1000 characters"));
}

#[test]
fn test_passcode_change_flow() {
    let dir = TempDir::new().unwrap();

    // Too short is rejected
    solace(&dir)
        .args(["passcode", "--new", "12"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 4"));

    // A valid new code replaces the default
    solace(&dir)
        .args(["passcode", "--new", "5678"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Passcode updated"));

    solace(&dir)
        .args(["list", "--passcode", "5678"])
        .assert()
        .success();

    solace(&dir)
        .args(["list", "--passcode", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Incorrect passcode"));
}

#[test]
fn test_edit_reclassifies_sentiment() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", "awful start", "--mood", "angry"])
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiment Negative"));

    solace(&dir)
        .args([
            "edit",
            "1",
            "--passcode",
            "1234",
            "--text",
            "turned into a wonderful day",
            "--mood",
            "happy",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sentiment Positive"));

    solace(&dir)
        .args(["list", "--passcode", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("turned into a wonderful day"));
}

#[test]
fn test_edit_requires_some_change() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", "something"])
        .assert()
        .success();

    solace(&dir)
        .args(["edit", "1", "--passcode", "1234"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Nothing to change"));
}

#[test]
fn test_delete_with_confirmation_flag() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", "disposable"])
        .assert()
        .success();

    solace(&dir)
        .args(["delete", "1", "--passcode", "1234", "--yes"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));

    solace(&dir)
        .args(["delete", "1", "--passcode", "1234", "--yes"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No entry at position"));
}

#[test]
fn test_delete_prompt_defaults_to_keeping() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", "precious"])
        .assert()
        .success();

    // An empty stdin answers the [y/N] prompt with "no"
    solace(&dir)
        .args(["delete", "1", "--passcode", "1234"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Kept the entry"));

    solace(&dir)
        .args(["list", "--passcode", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("precious"));
}

#[test]
fn test_export_blob_format() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args([
            "save", "--passcode", "1234", "--text", "a quiet win", "--mood", "calm",
            "--date", "2024-01-09",
        ])
        .assert()
        .success();

    solace(&dir)
        .args(["export", "--passcode", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("📅 1/9/2024 | 😌 Calm"))
        .stdout(predicate::str::contains("Sentiment: Neutral"))
        .stdout(predicate::str::contains("a quiet win"))
        .stdout(predicate::str::contains("---"));
}

#[test]
fn test_stats_summarize_journal_and_streak() {
    let dir = TempDir::new().unwrap();

    for (text, mood) in [
        ("great day", "happy"),
        ("another great one", "happy"),
        ("rough patch", "sad"),
    ] {
        solace(&dir)
            .args(["save", "--passcode", "1234", "--text", text, "--mood", mood])
            .assert()
            .success();
    }

    solace(&dir)
        .args(["stats", "--passcode", "1234"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Total entries: 3"))
        .stdout(predicate::str::contains("Positive 2"))
        .stdout(predicate::str::contains("Happy"))
        .stdout(predicate::str::contains("Streak:        1 day(s) (Beginner)"))
        .stdout(predicate::str::contains("Points:        1"));
}

#[test]
fn test_filtered_list_by_sentiment() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", "pure joy"])
        .assert()
        .success();
    solace(&dir)
        .args(["save", "--passcode", "1234", "--text", "plain notes"])
        .assert()
        .success();

    solace(&dir)
        .args(["list", "--passcode", "1234", "--sentiment", "positive"])
        .assert()
        .success()
        .stdout(predicate::str::contains("pure joy"))
        .stdout(predicate::str::contains("plain notes").not());

    solace(&dir)
        .args(["list", "--passcode", "1234", "--sentiment", "negative"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No entries match your filters"));
}

#[test]
fn test_checkin_prints_guidance_without_diary_access() {
    let dir = TempDir::new().unwrap();

    // No passcode needed for a check-in
    solace(&dir)
        .args(["checkin", "sad"])
        .assert()
        .success()
        .stdout(predicate::str::contains("You're feeling: Sad"))
        .stdout(predicate::str::contains("short walk outside"))
        .stdout(predicate::str::contains("inhale 4s, hold 5s, exhale 6s"))
        .stdout(predicate::str::contains("causing your sadness"));
}

#[test]
fn test_checkin_unknown_mood_gets_default_guidance() {
    let dir = TempDir::new().unwrap();

    solace(&dir)
        .args(["checkin", "perplexed"])
        .assert()
        .success()
        .stdout(predicate::str::contains("one kind thing for yourself"));
}
