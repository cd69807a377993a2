//! Dictionary store operations.
//!
//! Pure, synchronous mutations over the profile document. Every operation
//! validates before mutating, so a returned error means the prior state is
//! intact. Persisting the updated profile is the caller's job.

use crate::error::{Result, StoreError};
use crate::types::{Dictionary, Language, UserProfile, WordEntry, WordInput};
use chrono::Utc;
use uuid::Uuid;

/// Maximum length of the `word` field, in characters.
pub const MAX_WORD_LEN: usize = 240;

impl UserProfile {
    pub fn dictionary(&self, id: Uuid) -> Option<&Dictionary> {
        self.dictionaries.iter().find(|d| d.id == id)
    }

    pub fn dictionary_mut(&mut self, id: Uuid) -> Option<&mut Dictionary> {
        self.dictionaries.iter_mut().find(|d| d.id == id)
    }

    /// Create a new empty dictionary for a language pair and append it to
    /// the profile (append order is display order).
    ///
    /// The unordered pair must be unique across the profile, and the two
    /// languages must differ.
    pub fn create_dictionary(
        &mut self,
        source: Language,
        target: Language,
    ) -> Result<Dictionary> {
        if source == target {
            return Err(StoreError::InvalidPair {
                source_language: source,
                target_language: target,
            });
        }
        if self.dictionaries.iter().any(|d| d.covers_pair(source, target)) {
            return Err(StoreError::DuplicatePair {
                source_language: source,
                target_language: target,
            });
        }

        let dictionary = Dictionary::new(source, target);
        self.dictionaries.push(dictionary.clone());
        Ok(dictionary)
    }

    /// Remove a dictionary and all of its words. Irreversible; the caller
    /// is expected to have confirmed with the user.
    pub fn delete_dictionary(&mut self, id: Uuid) -> Result<Dictionary> {
        let position = self
            .dictionaries
            .iter()
            .position(|d| d.id == id)
            .ok_or(StoreError::NotFound {
                kind: "dictionary",
                id,
            })?;
        Ok(self.dictionaries.remove(position))
    }
}

impl Dictionary {
    /// Create a new word entry, or edit an existing one when `editing_id`
    /// is given.
    ///
    /// New entries are prepended (newest-first display order). Edited
    /// entries keep their id and position and get a fresh timestamp.
    pub fn upsert_word(
        &mut self,
        input: WordInput,
        editing_id: Option<Uuid>,
    ) -> Result<&WordEntry> {
        let word = input.word.trim();
        let translation = input.translation.trim();

        if word.is_empty() {
            return Err(StoreError::Validation {
                field: "word",
                reason: "must not be empty",
            });
        }
        if word.chars().count() > MAX_WORD_LEN {
            return Err(StoreError::Validation {
                field: "word",
                reason: "must not exceed 240 characters",
            });
        }
        if translation.is_empty() {
            return Err(StoreError::Validation {
                field: "translation",
                reason: "must not be empty",
            });
        }

        let word = word.to_string();
        let translation = translation.to_string();
        let phonetics = normalize_optional(input.phonetics);
        let meaning = normalize_optional(input.meaning);

        match editing_id {
            Some(id) => {
                let entry = self
                    .words
                    .iter_mut()
                    .find(|w| w.id == id)
                    .ok_or(StoreError::NotFound { kind: "word", id })?;
                entry.word = word;
                entry.translation = translation;
                entry.phonetics = phonetics;
                entry.meaning = meaning;
                entry.timestamp = Utc::now();
                Ok(entry)
            }
            None => {
                let entry = WordEntry {
                    id: Uuid::new_v4(),
                    word,
                    translation,
                    phonetics,
                    meaning,
                    dictionary_id: self.id,
                    timestamp: Utc::now(),
                };
                self.words.insert(0, entry);
                Ok(&self.words[0])
            }
        }
    }

    /// Remove a word entry by id.
    pub fn delete_word(&mut self, id: Uuid) -> Result<WordEntry> {
        let position = self
            .words
            .iter()
            .position(|w| w.id == id)
            .ok_or(StoreError::NotFound { kind: "word", id })?;
        Ok(self.words.remove(position))
    }
}

/// Case-insensitive substring search over the `word` field. Relative order
/// is preserved; an empty term returns everything.
pub fn search_words<'a>(words: &'a [WordEntry], term: &str) -> Vec<&'a WordEntry> {
    if term.is_empty() {
        return words.iter().collect();
    }
    let term = term.to_lowercase();
    words
        .iter()
        .filter(|w| w.word.to_lowercase().contains(&term))
        .collect()
}

fn normalize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
