#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]

//! Static word sets for the pun engine.
//!
//! Two sets are loaded at startup and never mutated: *ignored* words are
//! excluded from subword candidacy (stopwords, punctuation) and *banned*
//! words are forbidden as output. A missing backing file is not an error;
//! it just means an empty set.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

// string.punctuation, one token per mark; the word tokenizer emits these as
// standalone tokens and the ignored set filters them out of candidacy.
const PUNCTUATION: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Immutable set of lowercase words.
#[derive(Clone, Debug, Default)]
pub struct WordSet {
    words: HashSet<String>,
}

impl WordSet {
    /// An empty set.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a set from words, lowercasing each.
    pub fn from_words<I, S>(words: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            words: words
                .into_iter()
                .map(|w| w.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Load a set from a JSON string-array file.
    ///
    /// A missing file yields an empty set (logged, non-fatal), matching the
    /// "no blacklist configured" deployment. A file that exists but does not
    /// parse also degrades to empty, with a warning.
    pub fn load(path: &Path) -> Self {
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(_) => {
                log::info!("{} does not exist, it will be ignored", path.display());
                return Self::empty();
            }
        };
        match serde_json::from_str::<Vec<String>>(&content) {
            Ok(list) => {
                let set = Self::from_words(list);
                log::info!("loaded {} with {} words", path.display(), set.len());
                set
            }
            Err(e) => {
                log::warn!("{} is not a JSON word list ({}), treating as empty", path.display(), e);
                Self::empty()
            }
        }
    }

    /// Extend the set with every ASCII punctuation mark as a one-character
    /// word. Used for the ignored set so punctuation tokens never become
    /// candidates.
    pub fn with_punctuation(mut self) -> Self {
        self.words
            .extend(PUNCTUATION.chars().map(|c| c.to_string()));
        self
    }

    /// Membership test. The set stores lowercase words; callers lowercase
    /// the probe first.
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }

    /// Number of words in the set.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn temp_file(name: &str, content: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!("safety-test-{}-{}", std::process::id(), name));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn missing_file_yields_empty_set() {
        let set = WordSet::load(Path::new("/nonexistent/words.json"));
        assert!(set.is_empty());
    }

    #[test]
    fn loads_json_array() {
        let path = temp_file("list.json", r#"["The", "a", "AN"]"#);
        let set = WordSet::load(&path);
        fs::remove_file(&path).unwrap();
        assert_eq!(set.len(), 3);
        assert!(set.contains("the"));
        assert!(set.contains("an"));
        assert!(!set.contains("The"));
    }

    #[test]
    fn garbled_file_yields_empty_set() {
        let path = temp_file("garbled.json", "not json at all");
        let set = WordSet::load(&path);
        fs::remove_file(&path).unwrap();
        assert!(set.is_empty());
    }

    #[test]
    fn from_words_lowercases() {
        let set = WordSet::from_words(["Rock", "BAND"]);
        assert!(set.contains("rock"));
        assert!(set.contains("band"));
    }

    #[test]
    fn punctuation_extension() {
        let set = WordSet::from_words(["the"]).with_punctuation();
        assert!(set.contains(","));
        assert!(set.contains("!"));
        assert!(set.contains("the"));
        assert!(!set.contains("word"));
    }
}
