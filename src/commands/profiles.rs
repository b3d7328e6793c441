//! Profile commands: save, list and delete stored configurations

use crate::domain::HarmonicResult;
use crate::ports::ProfileStore;
use crate::state::Session;

pub fn save(store: &mut dyn ProfileStore, session: &Session, name: &str) -> HarmonicResult<()> {
    let mut config = session.config();
    config.name = name.trim().to_string();
    store.save(&config)?;
    println!("Saved profile '{}'", config.name);
    Ok(())
}

pub fn list(store: &dyn ProfileStore) -> HarmonicResult<()> {
    let names = store.list()?;
    if names.is_empty() {
        println!("No saved profiles");
    }
    for name in names {
        println!("{name}");
    }
    Ok(())
}

pub fn delete(store: &mut dyn ProfileStore, name: &str) -> HarmonicResult<()> {
    store.delete(name)?;
    println!("Deleted profile '{}'", name.trim());
    Ok(())
}
