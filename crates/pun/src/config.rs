#![forbid(unsafe_code)]

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Configuration for the pun engine and its collaborator binaries.
///
/// Loaded from a JSON file; every field has a default so a partial (or
/// absent) file works.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PunConfig {
    /// GloVe-format text file with the word vectors
    #[serde(default = "default_vectors_path")]
    pub vectors_path: PathBuf,
    /// JSON array of ignored words (stopwords); punctuation is always added
    #[serde(default = "default_ignored_path")]
    pub ignored_path: PathBuf,
    /// JSON array of banned words
    #[serde(default = "default_banned_path")]
    pub banned_path: PathBuf,
    /// neighborhood size for the similarity query
    #[serde(default = "default_top_k")]
    pub top_k: usize,
    /// bind address for the HTTP collaborator
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
}

fn default_vectors_path() -> PathBuf {
    PathBuf::from("data/vectors.txt")
}

fn default_ignored_path() -> PathBuf {
    PathBuf::from("data/ignored_words.json")
}

fn default_banned_path() -> PathBuf {
    PathBuf::from("data/bad_words.json")
}

fn default_top_k() -> usize {
    crate::engine::DEFAULT_TOP_K
}

fn default_bind_addr() -> String {
    "0.0.0.0:3030".to_string()
}

impl Default for PunConfig {
    fn default() -> Self {
        Self {
            vectors_path: default_vectors_path(),
            ignored_path: default_ignored_path(),
            banned_path: default_banned_path(),
            top_k: default_top_k(),
            bind_addr: default_bind_addr(),
        }
    }
}

/// Load configuration from `path`; a missing or unparsable file falls back
/// to the defaults.
pub fn load_config(path: &Path) -> PunConfig {
    match fs::read_to_string(path) {
        Ok(content) => serde_json::from_str(&content).unwrap_or_else(|e| {
            log::warn!("{} is not valid config ({}), using defaults", path.display(), e);
            PunConfig::default()
        }),
        Err(_) => PunConfig::default(),
    }
}
