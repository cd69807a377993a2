//! Last-session stats display.

use super::{find_dictionary, format_timestamp, pair_label, require_profile};
use crate::store::ProfileStore;
use anyhow::Result;

pub fn show(store: &ProfileStore, selector: &str) -> Result<()> {
    let profile = require_profile(store)?;
    let dictionary = find_dictionary(profile, selector)?;

    match store.storage().load_stats(dictionary.id)? {
        Some(stats) => {
            println!(
                "Last session for {} ({}):",
                pair_label(dictionary),
                format_timestamp(&stats.timestamp)
            );
            println!(
                "  {} correct, {} incorrect out of {} word(s) ({}%)",
                stats.correct_count,
                stats.incorrect_count,
                stats.total_words,
                stats.correct_percentage()
            );
        }
        None => println!("No training recorded for this dictionary yet."),
    }
    Ok(())
}
