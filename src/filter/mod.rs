//! Sentiment and date filtering over an entry snapshot.
//!
//! Both predicates are AND-combined when present; an absent predicate
//! matches everything. Date search is substring containment against the
//! entry's *formatted* date string, not a structured range query: "1/2"
//! matches Jan 2 of any year but also Nov 2 ("11/2/..."). That looseness
//! is part of the contract; see DESIGN.md.

use crate::journal::Entry;
use crate::sentiment::Sentiment;

/// Optional predicates for narrowing an entry list.
#[derive(Debug, Clone, Default)]
pub struct FilterCriteria {
    /// Keep only entries with exactly this sentiment.
    pub sentiment: Option<Sentiment>,
    /// Keep only entries whose displayed date contains this substring.
    pub date_contains: Option<String>,
}

impl FilterCriteria {
    /// True when no predicate is set (everything matches).
    pub fn is_empty(&self) -> bool {
        self.sentiment.is_none() && self.date_contains.is_none()
    }

    /// Whether `entry` passes every predicate that is set.
    pub fn matches(&self, entry: &Entry) -> bool {
        let sentiment_ok = match self.sentiment {
            Some(wanted) => entry.sentiment == wanted,
            None => true,
        };
        let date_ok = match &self.date_contains {
            Some(needle) => entry.display_date().contains(needle.trim()),
            None => true,
        };
        sentiment_ok && date_ok
    }
}

/// Filters `entries`, preserving their relative order.
pub fn apply<'a>(entries: &'a [Entry], criteria: &FilterCriteria) -> Vec<&'a Entry> {
    entries.iter().filter(|e| criteria.matches(e)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::{EntryDraft, Mood};
    use crate::storage::MemoryStore;
    use crate::store::EntryStore;
    use chrono::NaiveDate;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn seeded() -> Vec<Entry> {
        let storage = MemoryStore::new();
        let mut store = EntryStore::load(&storage).unwrap();
        let rows = [
            ("great start", date(2024, 1, 2), Mood::Happy),
            ("a bad afternoon", date(2024, 1, 2), Mood::Angry),
            ("nothing notable", date(2024, 11, 2), Mood::Thoughts),
            ("love this amazing park", date(2024, 3, 15), Mood::Calm),
        ];
        for (i, (text, d, mood)) in rows.iter().enumerate() {
            store
                .save(&storage, EntryDraft::new(*text, *d, *mood), i as i64)
                .unwrap();
        }
        store.all().to_vec()
    }

    #[test]
    fn test_no_criteria_matches_all_in_order() {
        let entries = seeded();
        let criteria = FilterCriteria::default();
        assert!(criteria.is_empty());

        let result = apply(&entries, &criteria);
        assert_eq!(result.len(), entries.len());
        let ids: Vec<u64> = result.iter().map(|e| e.id).collect();
        let expected: Vec<u64> = entries.iter().map(|e| e.id).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_sentiment_filter_preserves_order() {
        let entries = seeded();
        let criteria = FilterCriteria {
            sentiment: Some(Sentiment::Positive),
            date_contains: None,
        };

        let result = apply(&entries, &criteria);
        assert_eq!(result.len(), 2);
        assert!(result.iter().all(|e| e.sentiment == Sentiment::Positive));
        // Newest-first order of the backing collection is kept
        assert_eq!(result[0].text, "love this amazing park");
        assert_eq!(result[1].text, "great start");
    }

    #[test]
    fn test_date_substring_filter() {
        let entries = seeded();
        let criteria = FilterCriteria {
            sentiment: None,
            date_contains: Some("1/2/2024".to_string()),
        };

        let result = apply(&entries, &criteria);
        // "1/2/2024" is contained in both "1/2/2024" and "11/2/2024"
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_date_filter_trims_input() {
        let entries = seeded();
        let criteria = FilterCriteria {
            sentiment: None,
            date_contains: Some("  3/15  ".to_string()),
        };

        let result = apply(&entries, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "love this amazing park");
    }

    #[test]
    fn test_predicates_and_combine() {
        let entries = seeded();
        let criteria = FilterCriteria {
            sentiment: Some(Sentiment::Positive),
            date_contains: Some("1/2".to_string()),
        };

        let result = apply(&entries, &criteria);
        assert_eq!(result.len(), 1);
        assert_eq!(result[0].text, "great start");
    }

    #[test]
    fn test_no_matches_is_empty_not_error() {
        let entries = seeded();
        let criteria = FilterCriteria {
            sentiment: Some(Sentiment::Negative),
            date_contains: Some("12/25".to_string()),
        };
        assert!(apply(&entries, &criteria).is_empty());
    }
}
