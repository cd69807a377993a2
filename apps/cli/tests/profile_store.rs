//! End-to-end scenarios through the profile store.
//!
//! Mutations follow the application flow: clone the current snapshot,
//! apply store operations, hand the result back with `set`.

use pretty_assertions::assert_eq;
use std::cell::Cell;
use std::path::Path;
use std::rc::Rc;
use tempfile::tempdir;
use vocab_core::{search_words, Language, StoreError, UserProfile, WordInput};
use wordkeep_cli::storage::JsonStorage;
use wordkeep_cli::store::ProfileStore;

fn open_store(dir: &Path) -> ProfileStore {
    ProfileStore::open(JsonStorage::open(dir).unwrap()).unwrap()
}

#[test]
fn onboarding_then_create_add_and_search() {
    let dir = tempdir().unwrap();
    let mut store = open_store(dir.path());
    assert!(store.get().is_none());

    store.set(UserProfile::new("Ana")).unwrap();

    let mut profile = store.get().unwrap().clone();
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
                ..WordInput::default()
            },
            None,
        )
        .unwrap();
    store.set(profile).unwrap();

    let words = &store.get().unwrap().dictionaries[0].words;
    assert_eq!(search_words(words, "cas").len(), 1);
    assert_eq!(search_words(words, "xyz").len(), 0);

    // Reopening from the same directory sees the persisted state.
    let reopened = open_store(dir.path());
    let profile = reopened.get().expect("profile persisted");
    assert_eq!(profile.name, "Ana");
    assert_eq!(profile.dictionaries.len(), 1);
    assert_eq!(profile.dictionaries[0].words[0].word, "casa");
}

#[test]
fn duplicate_pairs_are_rejected_in_both_directions() {
    let dir = tempdir().unwrap();
    let mut store = open_store(dir.path());
    store.set(UserProfile::new("Ana")).unwrap();

    let mut profile = store.get().unwrap().clone();
    profile
        .create_dictionary(Language::Portuguese, Language::English)
        .unwrap();
    store.set(profile).unwrap();

    // A rejected mutation happens on a clone and is never handed back, so
    // neither the store nor the disk sees it.
    let mut attempt = store.get().unwrap().clone();
    let err = attempt
        .create_dictionary(Language::Portuguese, Language::English)
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicatePair { .. }));

    let err = attempt
        .create_dictionary(Language::English, Language::Portuguese)
        .unwrap_err();
    assert!(matches!(err, StoreError::DuplicatePair { .. }));

    assert_eq!(store.get().unwrap().dictionaries.len(), 1);
    let reopened = open_store(dir.path());
    assert_eq!(reopened.get().unwrap().dictionaries.len(), 1);
}

#[test]
fn delete_dictionary_persists() {
    let dir = tempdir().unwrap();
    let mut store = open_store(dir.path());
    store.set(UserProfile::new("Ana")).unwrap();

    let mut profile = store.get().unwrap().clone();
    let dict = profile
        .create_dictionary(Language::Portuguese, Language::English)
        .unwrap();
    profile
        .create_dictionary(Language::Spanish, Language::French)
        .unwrap();
    store.set(profile).unwrap();

    let mut profile = store.get().unwrap().clone();
    profile.delete_dictionary(dict.id).unwrap();
    store.set(profile).unwrap();

    let reopened = open_store(dir.path());
    let dictionaries = &reopened.get().unwrap().dictionaries;
    assert_eq!(dictionaries.len(), 1);
    assert_eq!(dictionaries[0].source_language, Language::Spanish);
}

#[test]
fn subscribers_run_after_every_accepted_mutation() {
    let dir = tempdir().unwrap();
    let mut store = open_store(dir.path());

    let seen = Rc::new(Cell::new(0));
    let counter = Rc::clone(&seen);
    store.subscribe(move |_profile| counter.set(counter.get() + 1));

    store.set(UserProfile::new("Ana")).unwrap();
    assert_eq!(seen.get(), 1);

    let mut profile = store.get().unwrap().clone();
    profile
        .create_dictionary(Language::Portuguese, Language::English)
        .unwrap();
    store.set(profile).unwrap();
    assert_eq!(seen.get(), 2);
}
