//! Keyword-count sentiment classification.
//!
//! The classifier is a deliberately simple heuristic: it checks the entry
//! text for a fixed list of positive and negative words and compares the
//! counts. It is not natural-language analysis and does not try to be.

use crate::constants::{NEGATIVE_WORDS, POSITIVE_WORDS};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The sentiment derived from an entry's text at save time.
///
/// Stored on the entry and never recomputed on read, so reclassifying
/// only happens through an explicit edit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Sentiment {
    /// More positive than negative words were found.
    Positive,
    /// More negative than positive words were found.
    Negative,
    /// The counts were equal, including the zero-zero case.
    Neutral,
}

impl fmt::Display for Sentiment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Sentiment::Positive => "Positive",
            Sentiment::Negative => "Negative",
            Sentiment::Neutral => "Neutral",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Sentiment {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "positive" => Ok(Sentiment::Positive),
            "negative" => Ok(Sentiment::Negative),
            "neutral" => Ok(Sentiment::Neutral),
            other => Err(format!(
                "unknown sentiment '{}' (expected positive, negative or neutral)",
                other
            )),
        }
    }
}

/// Classifies text as Positive, Negative or Neutral.
///
/// Matching is case-insensitive substring containment, not word-boundary
/// tokenization, so "unhappy" counts as "happy". Each list word contributes
/// at most one to its count regardless of how often it repeats.
///
/// # Examples
///
/// ```
/// use solace::sentiment::{classify, Sentiment};
///
/// assert_eq!(classify("What a wonderful, amazing day"), Sentiment::Positive);
/// assert_eq!(classify("I feel so sad and alone today"), Sentiment::Negative);
/// assert_eq!(classify(""), Sentiment::Neutral);
/// ```
pub fn classify(text: &str) -> Sentiment {
    let lower = text.to_lowercase();

    let positive_count = POSITIVE_WORDS
        .iter()
        .filter(|word| lower.contains(*word))
        .count();
    let negative_count = NEGATIVE_WORDS
        .iter()
        .filter(|word| lower.contains(*word))
        .count();

    if positive_count > negative_count {
        Sentiment::Positive
    } else if negative_count > positive_count {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_positive() {
        assert_eq!(classify("Today was great, truly awesome"), Sentiment::Positive);
        assert_eq!(classify("I LOVE this"), Sentiment::Positive);
    }

    #[test]
    fn test_classify_negative() {
        assert_eq!(classify("I feel so sad and alone today"), Sentiment::Negative);
        assert_eq!(classify("terrible, awful, bad"), Sentiment::Negative);
    }

    #[test]
    fn test_classify_neutral_on_tie() {
        // One word from each list
        assert_eq!(classify("happy but sad"), Sentiment::Neutral);
        // No words from either list
        assert_eq!(classify("the weather was fine"), Sentiment::Neutral);
        assert_eq!(classify(""), Sentiment::Neutral);
    }

    #[test]
    fn test_classify_counts_each_word_once() {
        // "sad" three times still counts once; two positive words win
        assert_eq!(
            classify("sad sad sad but happy and wonderful"),
            Sentiment::Positive
        );
    }

    #[test]
    fn test_classify_substring_containment() {
        // Containment test, not tokenization: "unhappy" contains "happy"
        assert_eq!(classify("I am unhappy"), Sentiment::Positive);
    }

    #[test]
    fn test_classify_all_words_of_one_list() {
        for word in crate::constants::NEGATIVE_WORDS {
            assert_eq!(classify(word), Sentiment::Negative, "word: {}", word);
        }
        for word in crate::constants::POSITIVE_WORDS {
            assert_eq!(classify(word), Sentiment::Positive, "word: {}", word);
        }
    }

    #[test]
    fn test_sentiment_from_str() {
        assert_eq!("positive".parse::<Sentiment>().unwrap(), Sentiment::Positive);
        assert_eq!("Negative".parse::<Sentiment>().unwrap(), Sentiment::Negative);
        assert_eq!(" NEUTRAL ".parse::<Sentiment>().unwrap(), Sentiment::Neutral);
        assert!("cheerful".parse::<Sentiment>().is_err());
    }
}
