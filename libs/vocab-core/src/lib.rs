//! Core vocabulary-training library shared by the wordkeep applications.
//!
//! Provides:
//! - Domain types (UserProfile, Dictionary, WordEntry, Language)
//! - Dictionary store operations that preserve profile invariants
//! - Quiz session engine (sampling, scoring, summary)
//! - Answer matching for typed mode

pub mod error;
pub mod matching;
pub mod session;
pub mod store;
pub mod types;

pub use error::{Result, StoreError};
pub use matching::{compare_answer, MatchResult};
pub use session::{Advance, ClampNotice, QuizSession, SessionSummary};
pub use store::{search_words, MAX_WORD_LEN};
pub use types::{
    Dictionary, Language, QuizMode, SessionConfig, TrainingStats, UserProfile, WordEntry,
    WordInput,
};
