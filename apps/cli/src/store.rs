//! Profile store: the single owned profile document.
//!
//! All mutation goes snapshot-then-set: callers clone the current profile,
//! apply store operations to the clone, and hand it back with `set`, which
//! persists before swapping it in. A rejected mutation never reaches the
//! store, so storage always holds the last accepted state.

use crate::storage::{JsonStorage, StorageError};
use vocab_core::UserProfile;

type Subscriber = Box<dyn Fn(&UserProfile)>;

pub struct ProfileStore {
    storage: JsonStorage,
    profile: Option<UserProfile>,
    subscribers: Vec<Subscriber>,
}

impl ProfileStore {
    /// Open the store over a storage gateway, loading any existing profile.
    pub fn open(storage: JsonStorage) -> Result<Self, StorageError> {
        let profile = storage.load()?;
        Ok(Self {
            storage,
            profile,
            subscribers: Vec::new(),
        })
    }

    /// Current snapshot. `None` until onboarding completes.
    pub fn get(&self) -> Option<&UserProfile> {
        self.profile.as_ref()
    }

    /// Replace the profile: persist first, then swap in and notify
    /// subscribers.
    pub fn set(&mut self, profile: UserProfile) -> Result<(), StorageError> {
        self.storage.save(&profile)?;
        self.profile = Some(profile);
        if let Some(profile) = &self.profile {
            for subscriber in &self.subscribers {
                subscriber(profile);
            }
        }
        Ok(())
    }

    /// Register a change listener, called after every accepted mutation.
    pub fn subscribe(&mut self, f: impl Fn(&UserProfile) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    pub fn storage(&self) -> &JsonStorage {
        &self.storage
    }
}
