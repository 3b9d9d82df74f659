//! Common-word list management.
//!
//! A small builtin list is always active; an external file can extend it.
//! Lookups are substring scans over leet-normalized input, so entries are
//! plain lowercase words.

use std::path::PathBuf;
use std::sync::RwLock;
use thiserror::Error;

static EXTRA_WORDS: RwLock<Option<Vec<String>>> = RwLock::new(None);

/// Words matched even when no external list is loaded.
const BUILTIN_WORDS: [&str; 9] = [
    "password",
    "motdepasse",
    "qwerty",
    "azerty",
    "welcome",
    "admin",
    "letmein",
    "football",
    "monkey",
];

#[derive(Error, Debug)]
pub enum WordlistError {
    #[error("Wordlist file not found: {0}")]
    FileNotFound(PathBuf),
    #[error("Failed to read wordlist file: {0}")]
    ReadError(#[from] std::io::Error),
    #[error("Wordlist file is empty")]
    EmptyFile,
}

/// Returns the wordlist file path.
///
/// Priority:
/// 1. Environment variable `PWD_WORDLIST_PATH`
/// 2. Default path `./assets/wordlist.txt`
pub fn wordlist_path() -> PathBuf {
    std::env::var("PWD_WORDLIST_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./assets/wordlist.txt"))
}

/// Loads the extra common-word list from an external file.
///
/// Optional: the detector falls back to the builtin list when this is never
/// called. Returns the number of loaded words.
///
/// # Environment Variable
///
/// Set `PWD_WORDLIST_PATH` to specify a custom wordlist file location.
/// If not set, defaults to `./assets/wordlist.txt`.
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
///
/// # Example
///
/// ```rust,ignore
/// unsafe { std::env::set_var("PWD_WORDLIST_PATH", "/etc/myapp/wordlist.txt"); }
/// pwd_meter::init_wordlist()?;
/// ```
pub fn init_wordlist() -> Result<usize, WordlistError> {
    let path = wordlist_path();
    init_wordlist_from_path(&path)
}

/// Loads the extra common-word list from a specific file path.
///
/// Use this when you need to pass the path directly instead of relying on
/// environment variables. Idempotent: after the first successful load,
/// further calls return the loaded count without touching the file.
///
/// # Arguments
///
/// * `path` - Path to the wordlist file
///
/// # Errors
///
/// Returns error if:
/// - File does not exist
/// - File cannot be read
/// - File is empty
pub fn init_wordlist_from_path<P: AsRef<std::path::Path>>(path: P) -> Result<usize, WordlistError> {
    {
        let guard = EXTRA_WORDS.read().unwrap();
        if let Some(words) = guard.as_ref() {
            return Ok(words.len());
        }
    }

    let path = path.as_ref();

    if !path.exists() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: FileNotFound {}", path.display());
        return Err(WordlistError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;

    if content.trim().is_empty() {
        #[cfg(feature = "tracing")]
        tracing::error!("Wordlist initialization FAILED: Empty file {}", path.display());
        return Err(WordlistError::EmptyFile);
    }

    let mut words: Vec<String> = content
        .lines()
        .map(|l| l.trim().to_lowercase())
        .filter(|l| !l.is_empty())
        .collect();
    words.sort();
    words.dedup();

    let count = words.len();
    {
        let mut guard = EXTRA_WORDS.write().unwrap();
        *guard = Some(words);
    }

    #[cfg(feature = "tracing")]
    tracing::info!("Wordlist initialized: {} words from {:?}", count, path);

    Ok(count)
}

/// Scans `normalized` for the first common word it contains.
///
/// Builtin words are checked before loaded extras. The input is expected to
/// be lowercased and leet-normalized already.
pub(crate) fn find_common_word(normalized: &str) -> Option<String> {
    for word in BUILTIN_WORDS {
        if normalized.contains(word) {
            return Some(word.to_string());
        }
    }

    let guard = EXTRA_WORDS.read().unwrap();
    if let Some(words) = guard.as_ref() {
        for word in words {
            if normalized.contains(word.as_str()) {
                return Some(word.clone());
            }
        }
    }

    None
}

/// Resets the wordlist for testing purposes.
#[cfg(test)]
pub fn reset_wordlist_for_testing() {
    let mut guard = EXTRA_WORDS.write().unwrap();
    *guard = None;
}
