//! Interactive training session.

use super::{find_dictionary, pair_label, prompt_line, require_profile};
use crate::store::ProfileStore;
use anyhow::{bail, Result};
use rand::rngs::StdRng;
use rand::SeedableRng;
use vocab_core::{QuizMode, QuizSession, SessionConfig, TrainingStats};

/// Run one session over the selected dictionary and persist its tallies.
///
/// `count` defaults to the whole dictionary; out-of-range values are
/// clamped by the engine and surfaced as a note. `seed` fixes the shuffle
/// for reproducible sessions.
pub fn run(
    store: &ProfileStore,
    selector: &str,
    count: Option<usize>,
    mode: QuizMode,
    seed: Option<u64>,
) -> Result<()> {
    let profile = require_profile(store)?;
    let dictionary = find_dictionary(profile, selector)?;
    if dictionary.words.is_empty() {
        bail!("this dictionary has no words yet; add some with `wordkeep word add`");
    }

    let dictionary_id = dictionary.id;
    let label = pair_label(dictionary);
    let words = dictionary.words.clone();

    let config = SessionConfig {
        mode,
        sample_size: count.unwrap_or(words.len()),
    };
    let mut rng = match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let (mut session, notice) = QuizSession::start(&words, config, &mut rng);
    if let Some(notice) = notice {
        println!(
            "note: requested {} words, training {}",
            notice.requested, notice.actual
        );
    }
    println!("Training {label} — {} word(s)", session.len());
    println!("(type :shuffle to restart with a new order, :quit to stop)\n");

    while let Some(word) = session.current().cloned() {
        println!(
            "Word {} of {} ({}%)",
            session.position() + 1,
            session.len(),
            session.progress_percent()
        );
        match &word.phonetics {
            Some(phonetics) => println!("  {}  /{}/", word.word, phonetics),
            None => println!("  {}", word.word),
        }

        let result = match mode {
            QuizMode::Typed => {
                let answer = loop {
                    let line = prompt_line("translation> ")?;
                    match line.trim() {
                        "" => continue,
                        ":quit" => return Ok(()),
                        ":shuffle" => {
                            session.reshuffle(&mut rng);
                            println!("Reshuffled; starting over.\n");
                            break None;
                        }
                        _ => break Some(line),
                    }
                };
                match answer {
                    Some(answer) => session.submit_answer(&answer),
                    None => continue,
                }
            }
            QuizMode::Flip => {
                match prompt_line("press Enter to reveal ")?.trim() {
                    ":quit" => return Ok(()),
                    ":shuffle" => {
                        session.reshuffle(&mut rng);
                        println!("Reshuffled; starting over.\n");
                        continue;
                    }
                    _ => {}
                }
                println!("  → {}", word.translation);
                if let Some(meaning) = &word.meaning {
                    println!("    ({meaning})");
                }
                let correct = loop {
                    let line = prompt_line("did you get it right? [y/n] ")?;
                    match line.trim().to_lowercase().as_str() {
                        "y" | "yes" => break true,
                        "n" | "no" => break false,
                        _ => {}
                    }
                };
                session.mark(correct)
            }
        };

        if let Some(result) = result {
            if result.is_correct {
                println!("  correct!\n");
            } else {
                println!(
                    "  incorrect — the translation is \"{}\"\n",
                    result.correct_translation
                );
            }
        }
        session.advance();
    }

    let summary = session.summary();
    println!(
        "Session finished: {} correct, {} incorrect out of {} ({}%)",
        summary.correct_count,
        summary.incorrect_count,
        summary.total_words,
        summary.correct_percentage()
    );

    let stats = TrainingStats::from(summary);
    store.storage().save_stats(dictionary_id, &stats)?;
    Ok(())
}
