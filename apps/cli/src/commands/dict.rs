//! Dictionary commands.

use super::{confirm, find_dictionary, pair_label, require_profile, short_id};
use crate::store::ProfileStore;
use anyhow::{anyhow, Result};
use vocab_core::Language;

pub fn create(store: &mut ProfileStore, source: &str, target: &str) -> Result<()> {
    let source = parse_language(source)?;
    let target = parse_language(target)?;

    let mut profile = require_profile(store)?.clone();
    let dictionary = profile.create_dictionary(source, target)?;
    store.set(profile)?;

    println!(
        "Created {}  ({})",
        pair_label(&dictionary),
        short_id(dictionary.id)
    );
    Ok(())
}

pub fn list(store: &ProfileStore) -> Result<()> {
    let profile = require_profile(store)?;
    if profile.dictionaries.is_empty() {
        println!("No dictionaries yet. Create one with `wordkeep dict new <source> <target>`.");
        return Ok(());
    }

    println!("{}'s dictionaries:", profile.name);
    for dictionary in &profile.dictionaries {
        let count = dictionary.words.len();
        let unit = if count == 1 { "word" } else { "words" };
        println!(
            "  {}  {}  — {count} {unit}",
            short_id(dictionary.id),
            pair_label(dictionary),
        );
    }
    Ok(())
}

pub fn delete(store: &mut ProfileStore, selector: &str, assume_yes: bool) -> Result<()> {
    let profile = require_profile(store)?;
    let dictionary = find_dictionary(profile, selector)?;
    let id = dictionary.id;
    let label = pair_label(dictionary);
    let count = dictionary.words.len();

    let question =
        format!("Delete the {label} dictionary? This permanently removes its {count} word(s).");
    if !confirm(&question, assume_yes)? {
        println!("Cancelled.");
        return Ok(());
    }

    let mut profile = require_profile(store)?.clone();
    profile.delete_dictionary(id)?;
    store.set(profile)?;

    println!("Deleted {label}.");
    Ok(())
}

fn parse_language(input: &str) -> Result<Language> {
    Language::parse(input).ok_or_else(|| {
        let supported = Language::ALL
            .iter()
            .map(|lang| format!("{} ({})", lang.name(), lang.code()))
            .collect::<Vec<_>>()
            .join(", ");
        anyhow!("unsupported language '{input}'; supported: {supported}")
    })
}
