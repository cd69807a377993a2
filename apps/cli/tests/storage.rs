//! Integration tests for the JSON persistence gateway.

use chrono::Utc;
use pretty_assertions::assert_eq;
use std::fs;
use tempfile::tempdir;
use uuid::Uuid;
use vocab_core::{Language, TrainingStats, UserProfile, WordInput};
use wordkeep_cli::storage::JsonStorage;

#[test]
fn missing_profile_means_onboarding() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path()).unwrap();
    assert!(storage.load().unwrap().is_none());
}

#[test]
fn profile_round_trips() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path()).unwrap();

    let mut profile = UserProfile::new("Ana");
    let dict = profile
        .create_dictionary(Language::Portuguese, Language::English)
        .unwrap();
    profile
        .dictionary_mut(dict.id)
        .unwrap()
        .upsert_word(
            WordInput {
                word: "casa".to_string(),
                translation: "house".to_string(),
                phonetics: Some("ˈka.zɐ".to_string()),
                meaning: None,
            },
            None,
        )
        .unwrap();

    storage.save(&profile).unwrap();
    let loaded = storage.load().unwrap().expect("profile should exist");

    assert_eq!(loaded.name, "Ana");
    assert_eq!(loaded.dictionaries.len(), 1);
    let loaded_dict = &loaded.dictionaries[0];
    assert_eq!(loaded_dict.id, dict.id);
    assert_eq!(loaded_dict.source_language, Language::Portuguese);
    assert_eq!(loaded_dict.target_language, Language::English);
    assert_eq!(loaded_dict.words.len(), 1);
    assert_eq!(loaded_dict.words[0].word, "casa");
    assert_eq!(loaded_dict.words[0].phonetics.as_deref(), Some("ˈka.zɐ"));
    assert_eq!(loaded_dict.words[0].dictionary_id, dict.id);
}

#[test]
fn save_overwrites_the_whole_document() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path()).unwrap();

    let mut profile = UserProfile::new("Ana");
    profile
        .create_dictionary(Language::Portuguese, Language::English)
        .unwrap();
    storage.save(&profile).unwrap();

    profile
        .create_dictionary(Language::French, Language::German)
        .unwrap();
    storage.save(&profile).unwrap();

    let loaded = storage.load().unwrap().unwrap();
    assert_eq!(loaded.dictionaries.len(), 2);
}

#[test]
fn corrupt_profile_is_set_aside_and_treated_as_absent() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path()).unwrap();

    fs::write(storage.profile_path(), "{ not json at all").unwrap();

    assert!(storage.load().unwrap().is_none());
    assert!(!storage.profile_path().exists());
    assert!(dir.path().join("profile.json.corrupt").exists());

    // A fresh save works normally afterwards.
    storage.save(&UserProfile::new("Ana")).unwrap();
    assert!(storage.load().unwrap().is_some());
}

#[test]
fn stats_round_trip_per_dictionary() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path()).unwrap();
    let dict_id = Uuid::new_v4();

    assert!(storage.load_stats(dict_id).unwrap().is_none());

    let stats = TrainingStats {
        correct_count: 2,
        incorrect_count: 1,
        total_words: 3,
        timestamp: Utc::now(),
    };
    storage.save_stats(dict_id, &stats).unwrap();

    let loaded = storage.load_stats(dict_id).unwrap().expect("stats saved");
    assert_eq!(loaded.correct_count, 2);
    assert_eq!(loaded.incorrect_count, 1);
    assert_eq!(loaded.total_words, 3);
    assert_eq!(loaded.correct_percentage(), 67);

    // Stats are keyed per dictionary.
    assert!(storage.load_stats(Uuid::new_v4()).unwrap().is_none());
}

#[test]
fn newer_stats_replace_older_ones() {
    let dir = tempdir().unwrap();
    let storage = JsonStorage::open(dir.path()).unwrap();
    let dict_id = Uuid::new_v4();

    let first = TrainingStats {
        correct_count: 1,
        incorrect_count: 2,
        total_words: 3,
        timestamp: Utc::now(),
    };
    storage.save_stats(dict_id, &first).unwrap();

    let second = TrainingStats {
        correct_count: 3,
        incorrect_count: 0,
        total_words: 3,
        timestamp: Utc::now(),
    };
    storage.save_stats(dict_id, &second).unwrap();

    let loaded = storage.load_stats(dict_id).unwrap().unwrap();
    assert_eq!(loaded.correct_count, 3);
    assert_eq!(loaded.incorrect_count, 0);
}
