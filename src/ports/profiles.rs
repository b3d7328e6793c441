//! Profile persistence port trait

use crate::domain::{Configuration, HarmonicResult};

/// Trait for saving and restoring named configuration profiles
pub trait ProfileStore {
    /// Save (or overwrite) a profile under `config.name`
    fn save(&mut self, config: &Configuration) -> HarmonicResult<()>;

    /// Load the profile called `name`
    fn load(&self, name: &str) -> HarmonicResult<Configuration>;

    /// Names of all stored profiles, sorted
    fn list(&self) -> HarmonicResult<Vec<String>>;

    /// Remove the profile called `name`
    fn delete(&mut self, name: &str) -> HarmonicResult<()>;
}
