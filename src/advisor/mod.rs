//! Mood-keyed guidance content.
//!
//! A fixed lookup from a mood word to a daily goal, a breathing pattern
//! and a journal prompt. The keys are the free-form mood words users type
//! at check-in (not the diary's mood tags); anything unrecognized falls
//! back to the default row. No state, no failure modes.

use std::fmt;

/// Timed breathing cycle in seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BreathingPattern {
    pub inhale: u8,
    pub hold: u8,
    pub exhale: u8,
}

impl fmt::Display for BreathingPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "inhale {}s, hold {}s, exhale {}s",
            self.inhale, self.hold, self.exhale
        )
    }
}

/// Guidance bundle for one mood.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Guidance {
    /// Small actionable goal for the day.
    pub goal: &'static str,
    /// Breathing exercise matched to the mood.
    pub breathing: BreathingPattern,
    /// Writing prompt for the journal.
    pub journal_prompt: &'static str,
}

/// Looks up guidance for a mood word.
///
/// Matching is case-insensitive on the trimmed input. Unknown or empty
/// moods get the default row.
///
/// # Examples
///
/// ```
/// use solace::advisor::guidance;
///
/// let sad = guidance("sad");
/// assert_eq!(sad.breathing.inhale, 4);
/// assert_eq!(sad.breathing.hold, 5);
///
/// // Unrecognized moods fall back to the default row
/// assert_eq!(guidance("perplexed"), guidance(""));
/// ```
pub fn guidance(mood: &str) -> Guidance {
    match mood.trim().to_lowercase().as_str() {
        "sad" => Guidance {
            goal: "🌤 Try taking a short walk outside to lift your spirit",
            breathing: BreathingPattern {
                inhale: 4,
                hold: 5,
                exhale: 6,
            },
            journal_prompt:
                "Write about what might be causing your sadness and one small thing that could help",
        },
        "depression" => Guidance {
            goal: "🧩 Break tasks into small pieces and celebrate each one",
            breathing: BreathingPattern {
                inhale: 5,
                hold: 2,
                exhale: 7,
            },
            journal_prompt: "List three things you appreciate about yourself, no matter how small",
        },
        "alone" => Guidance {
            goal: "📱 Reach out to a friend or family member today",
            breathing: BreathingPattern {
                inhale: 4,
                hold: 4,
                exhale: 6,
            },
            journal_prompt: "Describe a connection you value and how you might nurture it",
        },
        "angry" => Guidance {
            goal: "🧊 Pause and count to 10. Let calmness return",
            breathing: BreathingPattern {
                inhale: 4,
                hold: 0,
                exhale: 6,
            },
            journal_prompt:
                "Write about what triggered your anger and how you might respond differently",
        },
        "happy" => Guidance {
            goal: "🌟 Share your joy with someone today!",
            breathing: BreathingPattern {
                inhale: 4,
                hold: 2,
                exhale: 4,
            },
            journal_prompt: "Capture this happy moment in detail to revisit later",
        },
        _ => Guidance {
            goal: "🎯 Do one kind thing for yourself today",
            breathing: BreathingPattern {
                inhale: 4,
                hold: 4,
                exhale: 6,
            },
            journal_prompt: "Reflect on something you learned about yourself recently",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_moods_have_distinct_rows() {
        let moods = ["sad", "depression", "alone", "angry", "happy"];
        for mood in moods {
            assert_ne!(guidance(mood), guidance("unknown"), "mood: {}", mood);
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive_and_trims() {
        assert_eq!(guidance("  SAD "), guidance("sad"));
        assert_eq!(guidance("Happy"), guidance("happy"));
    }

    #[test]
    fn test_unknown_and_empty_fall_back_to_default() {
        let fallback = guidance("");
        assert_eq!(guidance("confused"), fallback);
        assert_eq!(fallback.breathing.inhale, 4);
        assert_eq!(fallback.breathing.hold, 4);
        assert_eq!(fallback.breathing.exhale, 6);
    }

    #[test]
    fn test_breathing_patterns_match_moods() {
        assert_eq!(
            guidance("angry").breathing,
            BreathingPattern {
                inhale: 4,
                hold: 0,
                exhale: 6
            }
        );
        assert_eq!(
            guidance("depression").breathing,
            BreathingPattern {
                inhale: 5,
                hold: 2,
                exhale: 7
            }
        );
    }

    #[test]
    fn test_breathing_display() {
        let text = guidance("happy").breathing.to_string();
        assert_eq!(text, "inhale 4s, hold 2s, exhale 4s");
    }
}
