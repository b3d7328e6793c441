//! Configuration profiles as JSON files
//!
//! One pretty-printed `<name>.json` per profile inside a single directory.

use std::path::{Path, PathBuf};

use crate::domain::{Configuration, HarmonicError, HarmonicResult};
use crate::ports::ProfileStore;

/// Name of the profile that can never be deleted
pub const DEFAULT_PROFILE: &str = "Default";

pub struct JsonProfileStore {
    dir: PathBuf,
}

impl JsonProfileStore {
    /// Open a store rooted at `dir`, creating the directory if needed
    pub fn open(dir: impl Into<PathBuf>) -> HarmonicResult<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir)?;
        log::debug!("profile store at {}", dir.display());
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, name: &str) -> HarmonicResult<PathBuf> {
        let name = sanitize_name(name)?;
        Ok(self.dir.join(format!("{name}.json")))
    }
}

/// Reject names that are empty, contain path separators or "..", or use
/// anything other than alphanumerics, spaces, hyphens and underscores.
pub fn sanitize_name(name: &str) -> HarmonicResult<String> {
    let trimmed = name.trim();
    if trimmed.is_empty() {
        return Err(HarmonicError::Config("Profile name cannot be empty".to_string()));
    }
    if trimmed.contains("..") || trimmed.contains('/') || trimmed.contains('\\') {
        return Err(HarmonicError::Config(format!("Invalid profile name '{trimmed}'")));
    }
    if !trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_')
    {
        return Err(HarmonicError::Config(format!(
            "Profile name '{trimmed}' contains invalid characters"
        )));
    }
    Ok(trimmed.to_string())
}

impl ProfileStore for JsonProfileStore {
    fn save(&mut self, config: &Configuration) -> HarmonicResult<()> {
        let path = self.path_for(&config.name)?;
        let json = serde_json::to_string_pretty(config)?;
        std::fs::write(&path, json)?;
        log::info!("saved profile '{}' to {}", config.name.trim(), path.display());
        Ok(())
    }

    fn load(&self, name: &str) -> HarmonicResult<Configuration> {
        let path = self.path_for(name)?;
        if !path.exists() {
            return Err(HarmonicError::Config(format!("Profile '{}' not found", name.trim())));
        }
        let json = std::fs::read_to_string(&path)?;
        Ok(serde_json::from_str(&json)?)
    }

    fn list(&self) -> HarmonicResult<Vec<String>> {
        let mut names: Vec<String> = std::fs::read_dir(&self.dir)?
            .filter_map(|entry| {
                let entry = entry.ok()?;
                let path = entry.path();
                if path.extension()?.to_str()? == "json" {
                    path.file_stem()?.to_str().map(String::from)
                } else {
                    None
                }
            })
            .collect();
        names.sort();
        Ok(names)
    }

    fn delete(&mut self, name: &str) -> HarmonicResult<()> {
        let path = self.path_for(name)?;
        if name.trim() == DEFAULT_PROFILE {
            return Err(HarmonicError::Config(
                "Cannot delete the Default profile".to_string(),
            ));
        }
        if !path.exists() {
            return Err(HarmonicError::Config(format!("Profile '{}' not found", name.trim())));
        }
        std::fs::remove_file(&path)?;
        log::info!("deleted profile '{}'", name.trim());
        Ok(())
    }
}
