//! JSON persistence gateway.
//!
//! The whole profile lives in a single `profile.json` document inside the
//! data directory and is rewritten after every accepted mutation. Last
//! session tallies per dictionary live next to it in `stats.json`.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;
use uuid::Uuid;
use vocab_core::{TrainingStats, UserProfile};

const PROFILE_FILE: &str = "profile.json";
const STATS_FILE: &str = "stats.json";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("io error: {0}")]
    Io(#[from] io::Error),

    #[error("serialization error: {0}")]
    Serde(#[from] serde_json::Error),
}

type Result<T> = std::result::Result<T, StorageError>;

/// Resolve the data directory: `WORDKEEP_DATA_DIR` override, else the
/// platform-local data dir.
pub fn default_data_dir() -> PathBuf {
    if let Ok(dir) = std::env::var("WORDKEEP_DATA_DIR") {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("wordkeep")
}

/// File-backed storage for the profile document and training stats.
pub struct JsonStorage {
    dir: PathBuf,
}

impl JsonStorage {
    pub fn open_default() -> Result<Self> {
        Self::open(default_data_dir())
    }

    pub fn open(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    pub fn profile_path(&self) -> PathBuf {
        self.dir.join(PROFILE_FILE)
    }

    /// Load the stored profile. `None` means "no profile yet" and drives
    /// the onboarding flow.
    ///
    /// A document that no longer parses is set aside with a `.corrupt`
    /// suffix and treated as absent, so the next save cannot silently
    /// overwrite it.
    pub fn load(&self) -> Result<Option<UserProfile>> {
        let path = self.profile_path();
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };

        match serde_json::from_str(&contents) {
            Ok(profile) => Ok(Some(profile)),
            Err(e) => {
                tracing::warn!("stored profile is unreadable ({e}), starting over");
                let backup = path.with_extension("json.corrupt");
                if let Err(rename_err) = fs::rename(&path, &backup) {
                    tracing::warn!("could not set aside corrupt profile: {rename_err}");
                }
                Ok(None)
            }
        }
    }

    /// Serialize the whole profile and rewrite the document.
    pub fn save(&self, profile: &UserProfile) -> Result<()> {
        let json = serde_json::to_string_pretty(profile)?;
        fs::write(self.profile_path(), json)?;
        Ok(())
    }

    /// Last finished session for a dictionary, if any.
    pub fn load_stats(&self, dictionary_id: Uuid) -> Result<Option<TrainingStats>> {
        let mut map = self.read_stats_map()?;
        Ok(map.remove(&dictionary_id))
    }

    /// Record the last finished session for a dictionary.
    pub fn save_stats(&self, dictionary_id: Uuid, stats: &TrainingStats) -> Result<()> {
        let mut map = self.read_stats_map()?;
        map.insert(dictionary_id, stats.clone());
        let json = serde_json::to_string_pretty(&map)?;
        fs::write(self.dir.join(STATS_FILE), json)?;
        Ok(())
    }

    fn read_stats_map(&self) -> Result<HashMap<Uuid, TrainingStats>> {
        let path = self.dir.join(STATS_FILE);
        let contents = match fs::read_to_string(&path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(HashMap::new()),
            Err(e) => return Err(e.into()),
        };
        match serde_json::from_str(&contents) {
            Ok(map) => Ok(map),
            Err(e) => {
                tracing::warn!("stats file is unreadable ({e}), discarding it");
                Ok(HashMap::new())
            }
        }
    }
}
