//! Persistence for named command sets
//!
//! Each saved set is one flat JSON file, `<name>.saved_args`, in the program's
//! home directory. There is no schema versioning; readers tolerate missing
//! keys by falling back to option defaults.

use crate::error::{ConfigError, StoreError, StoreResult};
use crate::options::Options;
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// File extension for saved command sets
const SAVED_EXT: &str = "saved_args";

/// Environment variable overriding the home directory
pub const HOME_ENV: &str = "PLING_HOME";

/// Resolve the program's home directory.
///
/// `PLING_HOME` wins when set; otherwise saved sets and the credential file
/// live alongside the installed binary, as they always have.
pub fn home_dir() -> Result<PathBuf, ConfigError> {
    if let Some(home) = env::var_os(HOME_ENV) {
        return Ok(PathBuf::from(home));
    }
    env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(Path::to_path_buf))
        .ok_or(ConfigError::NoHomeDir)
}

fn record_path(dir: &Path, name: &str) -> PathBuf {
    dir.join(format!("{}.{}", name, SAVED_EXT))
}

/// Save a command set under `name`, silently overwriting any existing record
pub fn save(dir: &Path, name: &str, options: &Options) -> StoreResult<()> {
    let json = serde_json::to_string(options).map_err(|e| StoreError::Corrupt {
        name: name.to_string(),
        error: e.to_string(),
    })?;
    fs::write(record_path(dir, name), json)?;
    Ok(())
}

/// Recall the command set saved under `name`
pub fn recall(dir: &Path, name: &str) -> StoreResult<Options> {
    let path = record_path(dir, name);
    if !path.is_file() {
        return Err(StoreError::NotFound(name.to_string()));
    }
    let raw = fs::read_to_string(&path)?;
    serde_json::from_str(&raw).map_err(|e| StoreError::Corrupt {
        name: name.to_string(),
        error: e.to_string(),
    })
}

/// List the names of all saved command sets, sorted
///
/// A missing or empty home directory yields an empty list, not an error.
pub fn list(dir: &Path) -> StoreResult<Vec<String>> {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(_) => return Ok(Vec::new()),
    };

    let mut names = Vec::new();
    for entry in entries {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) == Some(SAVED_EXT) {
            if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                names.push(stem.to_string());
            }
        }
    }
    names.sort();
    Ok(names)
}
