//! CLI command implementations, one module per area.

pub mod dict;
pub mod profile;
pub mod stats;
pub mod train;
pub mod word;

use crate::store::ProfileStore;
use anyhow::{bail, Result};
use chrono::{DateTime, Local, Utc};
use std::io::{self, Write};
use uuid::Uuid;
use vocab_core::{Dictionary, Language, UserProfile, WordEntry};

/// Current profile, or an error pointing at onboarding.
fn require_profile(store: &ProfileStore) -> Result<&UserProfile> {
    match store.get() {
        Some(profile) => Ok(profile),
        None => bail!("no profile yet; run `wordkeep init <name>` first"),
    }
}

/// Resolve a dictionary from a selector: full id, unambiguous id prefix, or
/// a language pair like `pt-en` (either order, since pairs are unique
/// unordered).
fn find_dictionary<'a>(profile: &'a UserProfile, selector: &str) -> Result<&'a Dictionary> {
    if let Ok(id) = selector.parse::<Uuid>() {
        if let Some(dict) = profile.dictionary(id) {
            return Ok(dict);
        }
    }

    let mut prefix_hits = profile
        .dictionaries
        .iter()
        .filter(|d| d.id.to_string().starts_with(selector));
    if let Some(dict) = prefix_hits.next() {
        if prefix_hits.next().is_some() {
            bail!("dictionary selector '{selector}' is ambiguous");
        }
        return Ok(dict);
    }

    if let Some((a, b)) = selector.split_once('-') {
        if let (Some(a), Some(b)) = (Language::parse(a), Language::parse(b)) {
            if let Some(dict) = profile.dictionaries.iter().find(|d| d.covers_pair(a, b)) {
                return Ok(dict);
            }
        }
    }

    bail!("no dictionary matches '{selector}'; try `wordkeep dict list`")
}

/// Resolve a word entry from a selector: exact source text (must be
/// unambiguous), full id, or unambiguous id prefix.
fn find_word<'a>(dictionary: &'a Dictionary, selector: &str) -> Result<&'a WordEntry> {
    let mut text_hits = dictionary
        .words
        .iter()
        .filter(|w| w.word.eq_ignore_ascii_case(selector));
    if let Some(entry) = text_hits.next() {
        if text_hits.next().is_some() {
            bail!("'{selector}' matches more than one entry; use the word id instead");
        }
        return Ok(entry);
    }

    if let Ok(id) = selector.parse::<Uuid>() {
        if let Some(entry) = dictionary.words.iter().find(|w| w.id == id) {
            return Ok(entry);
        }
    }

    let mut prefix_hits = dictionary
        .words
        .iter()
        .filter(|w| w.id.to_string().starts_with(selector));
    if let Some(entry) = prefix_hits.next() {
        if prefix_hits.next().is_some() {
            bail!("word selector '{selector}' is ambiguous");
        }
        return Ok(entry);
    }

    bail!("no word matches '{selector}' in this dictionary")
}

/// Ask a yes/no question on stdin; `assume_yes` skips the prompt.
fn confirm(question: &str, assume_yes: bool) -> Result<bool> {
    if assume_yes {
        return Ok(true);
    }
    let answer = prompt_line(&format!("{question} [y/N] "))?;
    Ok(matches!(answer.trim().to_lowercase().as_str(), "y" | "yes"))
}

/// Print a prompt and read one line from stdin.
fn prompt_line(prompt: &str) -> Result<String> {
    print!("{prompt}");
    io::stdout().flush()?;
    let mut line = String::new();
    let read = io::stdin().read_line(&mut line)?;
    if read == 0 {
        bail!("input closed");
    }
    Ok(line.trim_end_matches(['\n', '\r']).to_string())
}

/// First segment of an id, enough to select with in practice.
fn short_id(id: Uuid) -> String {
    id.to_string().chars().take(8).collect()
}

fn format_timestamp(timestamp: &DateTime<Utc>) -> String {
    timestamp
        .with_timezone(&Local)
        .format("%d/%m/%Y %H:%M")
        .to_string()
}

/// `🇧🇷 Portuguese → 🇬🇧 English` style label.
fn pair_label(dictionary: &Dictionary) -> String {
    format!(
        "{} {} → {} {}",
        dictionary.source_language.flag(),
        dictionary.source_language.name(),
        dictionary.target_language.flag(),
        dictionary.target_language.name(),
    )
}
