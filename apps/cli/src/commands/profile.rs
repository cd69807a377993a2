//! Onboarding.

use crate::store::ProfileStore;
use anyhow::{bail, Result};
use vocab_core::UserProfile;

/// Create the profile. Refuses to overwrite an existing one: the name is
/// chosen once and immutable thereafter.
pub fn init(store: &mut ProfileStore, name: &str) -> Result<()> {
    if let Some(existing) = store.get() {
        bail!(
            "a profile for {} already exists in {}",
            existing.name,
            store.storage().dir().display()
        );
    }
    let name = name.trim();
    if name.is_empty() {
        bail!("profile name must not be empty");
    }

    store.set(UserProfile::new(name))?;
    println!("Welcome, {name}! Create a dictionary with `wordkeep dict new <source> <target>`.");
    Ok(())
}
