//! Custom blacklist: file-backed extension of the built-in lexicon.
//!
//! The built-in common-password tables ship with the crate and need no
//! setup. Deployments that want to ban additional passwords (leaked
//! site-specific lists, org policy words) load them here once at startup.

use std::collections::HashSet;
use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static CUSTOM_BLACKLIST: RwLock<Option<HashSet<String>>> = RwLock::new(None);

#[derive(Error, Debug)]
pub enum BlacklistError {
    #[error("Blacklist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read blacklist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Blacklist file is empty")]
    EmptyFile,
}

/// Returns the blacklist file path.
///
/// Priority:
/// 1. Environment variable `PWD_FORGE_BLACKLIST_PATH`
/// 2. Default path `./assets/blacklist.txt`
pub fn get_blacklist_path() -> PathBuf {
    std::env::var("PWD_FORGE_BLACKLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/blacklist.txt"))
}

/// Loads the custom blacklist from the configured file.
///
/// One password per line, case-insensitive. Idempotent: a second call
/// returns the already-loaded entry count. Returns an error if the file is
/// missing, unreadable or empty; the built-in lexicon keeps working either
/// way.
pub fn init_blacklist() -> Result<usize, BlacklistError> {
    let path = get_blacklist_path();
    init_blacklist_from_path(&path)
}

/// Loads the custom blacklist from an explicit path instead of the
/// environment.
pub fn init_blacklist_from_path<P: AsRef<std::path::Path>>(
    path: P,
) -> Result<usize, BlacklistError> {
    {
        let guard = CUSTOM_BLACKLIST.read().unwrap();
        if let Some(set) = guard.as_ref() {
            return Ok(set.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!(
            "Blacklist initialization FAILED: FileNotFound {}",
            path.display()
        );
        return Err(BlacklistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!(
            "Blacklist initialization FAILED: Empty file {}",
            path.display()
        );
        return Err(BlacklistError::EmptyFile);
    }

    let set: HashSet<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();

    let count = set.len();
    {
        let mut guard = CUSTOM_BLACKLIST.write().unwrap();
        *guard = Some(set);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Custom blacklist loaded: {} passwords from {:?}", count, path);

    Ok(count)
}

/// Returns a copy of the loaded custom blacklist, `None` before init.
pub fn get_blacklist() -> Option<HashSet<String>> {
    let guard = CUSTOM_BLACKLIST.read().unwrap();
    guard.clone()
}

/// Membership test against the custom blacklist only (case-insensitive).
///
/// Returns `false` when no blacklist has been loaded. The full
/// common-password check lives in [`crate::patterns::is_common_password`],
/// which consults the built-in tables first.
pub fn is_blacklisted(password: &str) -> bool {
    let guard = CUSTOM_BLACKLIST.read().unwrap();
    guard
        .as_ref()
        .map(|bl| bl.contains(&password.to_lowercase()))
        .unwrap_or(false)
}

/// Resets the custom blacklist for testing purposes.
#[cfg(test)]
pub fn reset_blacklist_for_testing() {
    let mut guard = CUSTOM_BLACKLIST.write().unwrap();
    *guard = None;
}
