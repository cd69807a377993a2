//! Answer matching for typed mode sessions.
//!
//! The comparison contract is exact: trim surrounding whitespace and
//! lowercase both sides, then compare for equality. No fuzzy matching and
//! no accent folding.

use serde::{Deserialize, Serialize};

/// Result of comparing a typed answer to the stored translation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub is_correct: bool,
    /// The stored translation, for display after an incorrect answer.
    pub correct_translation: String,
}

/// Compare a typed answer to the correct translation.
pub fn compare_answer(typed: &str, correct: &str) -> MatchResult {
    MatchResult {
        is_correct: normalize(typed) == normalize(correct),
        correct_translation: correct.to_string(),
    }
}

fn normalize(s: &str) -> String {
    s.trim().to_lowercase()
}
