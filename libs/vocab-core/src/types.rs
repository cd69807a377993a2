//! Core types for the vocabulary trainer.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Supported languages. A closed set: anything outside it is rejected when
/// parsing user input, so an unsupported language cannot enter the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Language {
    Portuguese,
    English,
    Spanish,
    French,
    German,
    Italian,
    Japanese,
    Korean,
    Chinese,
    Russian,
    Arabic,
    Hindi,
}

impl Language {
    pub const ALL: [Language; 12] = [
        Self::Portuguese,
        Self::English,
        Self::Spanish,
        Self::French,
        Self::German,
        Self::Italian,
        Self::Japanese,
        Self::Korean,
        Self::Chinese,
        Self::Russian,
        Self::Arabic,
        Self::Hindi,
    ];

    /// Display name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Portuguese => "Portuguese",
            Self::English => "English",
            Self::Spanish => "Spanish",
            Self::French => "French",
            Self::German => "German",
            Self::Italian => "Italian",
            Self::Japanese => "Japanese",
            Self::Korean => "Korean",
            Self::Chinese => "Chinese",
            Self::Russian => "Russian",
            Self::Arabic => "Arabic",
            Self::Hindi => "Hindi",
        }
    }

    /// Short 2-letter code used in listings and selectors.
    pub fn code(self) -> &'static str {
        match self {
            Self::Portuguese => "PT",
            Self::English => "EN",
            Self::Spanish => "ES",
            Self::French => "FR",
            Self::German => "DE",
            Self::Italian => "IT",
            Self::Japanese => "JP",
            Self::Korean => "KR",
            Self::Chinese => "CN",
            Self::Russian => "RU",
            Self::Arabic => "AR",
            Self::Hindi => "HI",
        }
    }

    /// Flag emoji for listings.
    pub fn flag(self) -> &'static str {
        match self {
            Self::Portuguese => "🇧🇷",
            Self::English => "🇬🇧",
            Self::Spanish => "🇪🇸",
            Self::French => "🇫🇷",
            Self::German => "🇩🇪",
            Self::Italian => "🇮🇹",
            Self::Japanese => "🇯🇵",
            Self::Korean => "🇰🇷",
            Self::Chinese => "🇨🇳",
            Self::Russian => "🇷🇺",
            Self::Arabic => "🇸🇦",
            Self::Hindi => "🇮🇳",
        }
    }

    /// Parse from a display name or a 2-letter code, case-insensitively.
    pub fn parse(input: &str) -> Option<Self> {
        let input = input.trim();
        Self::ALL.iter().copied().find(|lang| {
            lang.name().eq_ignore_ascii_case(input) || lang.code().eq_ignore_ascii_case(input)
        })
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The whole persisted document. Exists only after onboarding; its absence
/// in storage is the signal to run the onboarding flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub name: String,
    pub dictionaries: Vec<Dictionary>,
}

impl UserProfile {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            dictionaries: Vec::new(),
        }
    }
}

/// A language pair and the words collected for it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Dictionary {
    pub id: Uuid,
    pub source_language: Language,
    pub target_language: Language,
    /// Most-recently-added first.
    pub words: Vec<WordEntry>,
}

impl Dictionary {
    pub fn new(source_language: Language, target_language: Language) -> Self {
        Self {
            id: Uuid::new_v4(),
            source_language,
            target_language,
            words: Vec::new(),
        }
    }

    /// True when this dictionary covers the same unordered language pair.
    pub fn covers_pair(&self, source: Language, target: Language) -> bool {
        (self.source_language == source && self.target_language == target)
            || (self.source_language == target && self.target_language == source)
    }
}

/// A single vocabulary entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WordEntry {
    pub id: Uuid,
    pub word: String,
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phonetics: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meaning: Option<String>,
    /// Back-reference to the owning dictionary; a lookup relation, not an
    /// ownership edge.
    pub dictionary_id: Uuid,
    /// Creation or last-edit time.
    pub timestamp: DateTime<Utc>,
}

/// Form input for creating or editing a word entry.
#[derive(Debug, Clone, Default)]
pub struct WordInput {
    pub word: String,
    pub translation: String,
    pub phonetics: Option<String>,
    pub meaning: Option<String>,
}

/// Quiz presentation mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuizMode {
    /// Show the word, reveal the translation, self-grade.
    Flip,
    /// Type the translation; graded by exact normalized comparison.
    Typed,
}

impl Default for QuizMode {
    fn default() -> Self {
        Self::Typed
    }
}

impl QuizMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Flip => "flip",
            Self::Typed => "typed",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s {
            "flip" => Some(Self::Flip),
            "typed" => Some(Self::Typed),
            _ => None,
        }
    }
}

/// Configuration for one training session.
#[derive(Debug, Clone, Copy)]
pub struct SessionConfig {
    pub mode: QuizMode,
    /// Requested number of words to train; clamped to the available range.
    pub sample_size: usize,
}

/// Tallies of the last finished session for a dictionary.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrainingStats {
    pub correct_count: u32,
    pub incorrect_count: u32,
    pub total_words: usize,
    pub timestamp: DateTime<Utc>,
}

impl TrainingStats {
    /// Share of correct answers, rounded to a whole percentage.
    pub fn correct_percentage(&self) -> u32 {
        if self.total_words == 0 {
            return 0;
        }
        ((self.correct_count as f64 / self.total_words as f64) * 100.0).round() as u32
    }
}
