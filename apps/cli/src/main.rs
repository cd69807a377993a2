use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use vocab_core::QuizMode;
use wordkeep_cli::commands;
use wordkeep_cli::storage::JsonStorage;
use wordkeep_cli::store::ProfileStore;

#[derive(Parser)]
#[command(name = "wordkeep", version, about = "Personal vocabulary trainer")]
struct Cli {
    /// Data directory override (defaults to WORDKEEP_DATA_DIR or the
    /// platform data dir).
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Create your profile (first run).
    Init {
        /// Display name for the profile.
        name: String,
    },
    /// Manage dictionaries.
    Dict {
        #[command(subcommand)]
        command: DictCommand,
    },
    /// Manage words in a dictionary.
    Word {
        #[command(subcommand)]
        command: WordCommand,
    },
    /// Run a training session over a dictionary.
    Train {
        /// Dictionary id, id prefix, or language pair like `pt-en`.
        dictionary: String,
        /// Number of words to train (defaults to all of them).
        #[arg(long)]
        count: Option<usize>,
        #[arg(long, value_enum, default_value = "typed")]
        mode: Mode,
        /// Fix the shuffle seed for a reproducible session.
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Show the last training summary for a dictionary.
    Stats {
        /// Dictionary id, id prefix, or language pair like `pt-en`.
        dictionary: String,
    },
}

#[derive(Subcommand)]
enum DictCommand {
    /// Create a dictionary for a language pair.
    New {
        /// Source language name or code (e.g. `Portuguese` or `pt`).
        source: String,
        /// Target language name or code.
        target: String,
    },
    /// List all dictionaries.
    List,
    /// Delete a dictionary and all of its words.
    Delete {
        dictionary: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum WordCommand {
    /// Add a word to a dictionary.
    Add {
        dictionary: String,
        word: String,
        translation: String,
        /// Pronunciation annotation.
        #[arg(long)]
        phonetics: Option<String>,
        /// Free-text gloss.
        #[arg(long)]
        meaning: Option<String>,
    },
    /// Edit an existing word; omitted fields keep their current value.
    Edit {
        dictionary: String,
        /// Word text or id (prefix) of the entry to edit.
        word: String,
        #[arg(long = "word")]
        new_word: Option<String>,
        #[arg(long)]
        translation: Option<String>,
        #[arg(long)]
        phonetics: Option<String>,
        #[arg(long)]
        meaning: Option<String>,
    },
    /// Delete a word.
    Rm {
        dictionary: String,
        /// Word text or id (prefix) of the entry to delete.
        word: String,
        /// Skip the confirmation prompt.
        #[arg(long)]
        yes: bool,
    },
    /// List all words, newest first.
    List { dictionary: String },
    /// Search words by source text (case-insensitive substring).
    Search { dictionary: String, term: String },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Mode {
    Flip,
    Typed,
}

impl From<Mode> for QuizMode {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Flip => QuizMode::Flip,
            Mode::Typed => QuizMode::Typed,
        }
    }
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let storage = match &cli.data_dir {
        Some(dir) => JsonStorage::open(dir.clone())?,
        None => JsonStorage::open_default()?,
    };
    let mut store = ProfileStore::open(storage)?;

    match cli.command {
        Command::Init { name } => commands::profile::init(&mut store, &name),
        Command::Dict { command } => match command {
            DictCommand::New { source, target } => {
                commands::dict::create(&mut store, &source, &target)
            }
            DictCommand::List => commands::dict::list(&store),
            DictCommand::Delete { dictionary, yes } => {
                commands::dict::delete(&mut store, &dictionary, yes)
            }
        },
        Command::Word { command } => match command {
            WordCommand::Add {
                dictionary,
                word,
                translation,
                phonetics,
                meaning,
            } => commands::word::add(&mut store, &dictionary, &word, &translation, phonetics, meaning),
            WordCommand::Edit {
                dictionary,
                word,
                new_word,
                translation,
                phonetics,
                meaning,
            } => commands::word::edit(
                &mut store,
                &dictionary,
                &word,
                new_word,
                translation,
                phonetics,
                meaning,
            ),
            WordCommand::Rm {
                dictionary,
                word,
                yes,
            } => commands::word::remove(&mut store, &dictionary, &word, yes),
            WordCommand::List { dictionary } => commands::word::list(&store, &dictionary),
            WordCommand::Search { dictionary, term } => {
                commands::word::search(&store, &dictionary, &term)
            }
        },
        Command::Train {
            dictionary,
            count,
            mode,
            seed,
        } => commands::train::run(&store, &dictionary, count, mode.into(), seed),
        Command::Stats { dictionary } => commands::stats::show(&store, &dictionary),
    }
}
