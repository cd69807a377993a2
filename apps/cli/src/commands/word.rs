//! Word entry commands.

use super::{
    confirm, find_dictionary, find_word, format_timestamp, pair_label, require_profile, short_id,
};
use crate::store::ProfileStore;
use anyhow::{anyhow, Result};
use vocab_core::{search_words, WordEntry, WordInput};

pub fn add(
    store: &mut ProfileStore,
    selector: &str,
    word: &str,
    translation: &str,
    phonetics: Option<String>,
    meaning: Option<String>,
) -> Result<()> {
    let mut profile = require_profile(store)?.clone();
    let dictionary_id = find_dictionary(&profile, selector)?.id;

    let dictionary = profile
        .dictionary_mut(dictionary_id)
        .ok_or_else(|| anyhow!("dictionary disappeared mid-operation"))?;
    let input = WordInput {
        word: word.to_string(),
        translation: translation.to_string(),
        phonetics,
        meaning,
    };
    let entry = dictionary.upsert_word(input, None)?;
    println!("Added \"{}\" → \"{}\"", entry.word, entry.translation);

    store.set(profile)?;
    Ok(())
}

pub fn edit(
    store: &mut ProfileStore,
    selector: &str,
    word_selector: &str,
    word: Option<String>,
    translation: Option<String>,
    phonetics: Option<String>,
    meaning: Option<String>,
) -> Result<()> {
    let mut profile = require_profile(store)?.clone();
    let dictionary_id = find_dictionary(&profile, selector)?.id;

    let dictionary = profile
        .dictionary_mut(dictionary_id)
        .ok_or_else(|| anyhow!("dictionary disappeared mid-operation"))?;
    let existing = find_word(dictionary, word_selector)?;
    let editing_id = existing.id;

    // Omitted fields keep their current value; passing an empty string
    // clears an optional field.
    let input = WordInput {
        word: word.unwrap_or_else(|| existing.word.clone()),
        translation: translation.unwrap_or_else(|| existing.translation.clone()),
        phonetics: phonetics.or_else(|| existing.phonetics.clone()),
        meaning: meaning.or_else(|| existing.meaning.clone()),
    };

    let entry = dictionary.upsert_word(input, Some(editing_id))?;
    println!("Updated \"{}\" → \"{}\"", entry.word, entry.translation);

    store.set(profile)?;
    Ok(())
}

pub fn remove(
    store: &mut ProfileStore,
    selector: &str,
    word_selector: &str,
    assume_yes: bool,
) -> Result<()> {
    let mut profile = require_profile(store)?.clone();
    let dictionary_id = find_dictionary(&profile, selector)?.id;

    let dictionary = profile
        .dictionary_mut(dictionary_id)
        .ok_or_else(|| anyhow!("dictionary disappeared mid-operation"))?;
    let entry = find_word(dictionary, word_selector)?;
    let id = entry.id;
    let label = entry.word.clone();

    if !confirm(&format!("Delete \"{label}\"?"), assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    dictionary.delete_word(id)?;
    store.set(profile)?;

    println!("Deleted \"{label}\".");
    Ok(())
}

pub fn list(store: &ProfileStore, selector: &str) -> Result<()> {
    let profile = require_profile(store)?;
    let dictionary = find_dictionary(profile, selector)?;

    println!(
        "{}  — {} word(s)",
        pair_label(dictionary),
        dictionary.words.len()
    );
    for entry in &dictionary.words {
        print_entry(entry);
    }
    Ok(())
}

pub fn search(store: &ProfileStore, selector: &str, term: &str) -> Result<()> {
    let profile = require_profile(store)?;
    let dictionary = find_dictionary(profile, selector)?;

    let hits = search_words(&dictionary.words, term);
    println!("{} result(s) for \"{term}\"", hits.len());
    for entry in hits {
        print_entry(entry);
    }
    Ok(())
}

fn print_entry(entry: &WordEntry) {
    let phonetics = entry
        .phonetics
        .as_deref()
        .map(|p| format!("  /{p}/"))
        .unwrap_or_default();
    println!(
        "  {}  {} → {}{}  ({})",
        short_id(entry.id),
        entry.word,
        entry.translation,
        phonetics,
        format_timestamp(&entry.timestamp),
    );
    if let Some(meaning) = &entry.meaning {
        println!("      {meaning}");
    }
}
