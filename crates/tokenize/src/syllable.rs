#![forbid(unsafe_code)]

use std::collections::{HashMap, HashSet};

/// Default vowel letters used for nucleus detection.
pub const DEFAULT_VOWELS: &str = "aeiouy";

// An onset must appear in at least this share of the reference lexicon to
// count as legal.
const ONSET_FREQUENCY_THRESHOLD: f64 = 0.001;

/// Legality-principle syllable splitter.
///
/// Legal word-initial consonant clusters (onsets) are harvested from a
/// reference lexicon at construction. Tokenization scans a word from the
/// end: each syllable grows until a vowel nucleus is found, then keeps
/// absorbing consonants only while the accumulated cluster is still a legal
/// onset. The same word always yields the same split for a fixed lexicon.
pub struct SyllableTokenizer {
    legal_onsets: HashSet<String>,
    vowels: Vec<char>,
}

impl SyllableTokenizer {
    /// Build a tokenizer from a reference lexicon, using [`DEFAULT_VOWELS`].
    pub fn new<I, S>(lexicon: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self::with_vowels(lexicon, DEFAULT_VOWELS)
    }

    /// Build a tokenizer with an explicit vowel inventory.
    pub fn with_vowels<I, S>(lexicon: I, vowels: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let vowels: Vec<char> = vowels.chars().collect();

        let mut counts: HashMap<String, usize> = HashMap::new();
        let mut total = 0usize;
        for word in lexicon {
            total += 1;
            let onset = onset_of(word.as_ref(), &vowels);
            if !onset.is_empty() {
                *counts.entry(onset).or_insert(0) += 1;
            }
        }

        let legal_onsets = counts
            .into_iter()
            .filter(|(_, n)| (*n as f64 / total as f64) > ONSET_FREQUENCY_THRESHOLD)
            .map(|(onset, _)| onset)
            .collect();

        Self {
            legal_onsets,
            vowels,
        }
    }

    /// Split a single word into an ordered, non-empty sequence of syllables.
    ///
    /// The concatenation of the returned strings equals the input with case
    /// preserved. A word that cannot be segmented (no vowel nucleus) comes
    /// back as a single atomic syllable; there is no failure path.
    pub fn tokenize(&self, token: &str) -> Vec<String> {
        if token.is_empty() {
            return vec![String::new()];
        }

        // Scan right-to-left; `syllable` and `cluster` accumulate in scan
        // order and are reversed back at the end.
        let mut syllables: Vec<Vec<char>> = Vec::new();
        let mut syllable: Vec<char> = Vec::new();
        let mut cluster: Vec<char> = Vec::new();
        let mut seen_vowel = false;
        let mut has_onset = false;

        for ch in token.chars().rev() {
            let lower = lowercase(ch);
            if !seen_vowel {
                syllable.push(ch);
                seen_vowel = self.is_vowel(lower);
            } else if self.is_legal_onset(lower, &cluster) {
                syllable.push(ch);
                cluster.push(lower);
                has_onset = true;
            } else if self.is_vowel(lower) && !has_onset {
                // vowel cluster (diphthong) before any onset consonant
                syllable.push(ch);
                cluster.push(lower);
            } else {
                syllables.push(std::mem::take(&mut syllable));
                syllable.push(ch);
                cluster.clear();
                seen_vowel = self.is_vowel(lower);
                has_onset = false;
            }
        }
        syllables.push(syllable);

        syllables
            .into_iter()
            .rev()
            .map(|chars| chars.into_iter().rev().collect())
            .collect()
    }

    fn is_vowel(&self, lower: char) -> bool {
        self.vowels.contains(&lower)
    }

    // Would prepending `lower` to the collected cluster still read as a
    // legal onset? The cluster is stored in scan order, so the forward
    // spelling is `lower` followed by the cluster reversed.
    fn is_legal_onset(&self, lower: char, cluster: &[char]) -> bool {
        let mut onset = String::with_capacity(cluster.len() + 1);
        onset.push(lower);
        onset.extend(cluster.iter().rev());
        self.legal_onsets.contains(&onset)
    }
}

/// Leading consonant cluster of a word, lowercased; empty for vowel-initial
/// words.
fn onset_of(word: &str, vowels: &[char]) -> String {
    let mut onset = String::new();
    for ch in word.chars() {
        let lower = lowercase(ch);
        if vowels.contains(&lower) {
            return onset;
        }
        onset.push(lower);
    }
    onset
}

fn lowercase(ch: char) -> char {
    ch.to_lowercase().next().unwrap_or(ch)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Small lexicon yielding legal onsets {b, r, th, h, l, t}.
    fn lexicon() -> Vec<&'static str> {
        vec!["band", "rock", "third", "hello", "low", "help", "toe", "the", "hill"]
    }

    #[test]
    fn splits_at_onset_boundaries() {
        let tok = SyllableTokenizer::new(lexicon());
        assert_eq!(tok.tokenize("hello"), vec!["hel", "lo"]);
    }

    #[test]
    fn single_syllable_words_stay_whole() {
        let tok = SyllableTokenizer::new(lexicon());
        assert_eq!(tok.tokenize("third"), vec!["third"]);
        assert_eq!(tok.tokenize("band"), vec!["band"]);
    }

    #[test]
    fn case_is_preserved() {
        let tok = SyllableTokenizer::new(lexicon());
        assert_eq!(tok.tokenize("Hello"), vec!["Hel", "lo"]);
        assert_eq!(tok.tokenize("Hello").concat(), "Hello");
    }

    #[test]
    fn concatenation_reconstructs_the_word() {
        let tok = SyllableTokenizer::new(lexicon());
        for word in ["hello", "banana", "Third", "rhythm", "toe"] {
            assert_eq!(tok.tokenize(word).concat(), word, "word: {word}");
        }
    }

    #[test]
    fn vowel_less_word_is_atomic() {
        let tok = SyllableTokenizer::new(lexicon());
        assert_eq!(tok.tokenize("pfft"), vec!["pfft"]);
    }

    #[test]
    fn same_word_same_split() {
        let tok = SyllableTokenizer::new(lexicon());
        assert_eq!(tok.tokenize("hello"), tok.tokenize("hello"));
    }

    #[test]
    fn three_syllable_split() {
        // onsets {b, n} from this lexicon
        let tok = SyllableTokenizer::new(["band", "nod"]);
        assert_eq!(tok.tokenize("banana"), vec!["ba", "na", "na"]);
    }

    #[test]
    fn empty_lexicon_still_tokenizes() {
        let tok = SyllableTokenizer::new(Vec::<&str>::new());
        let syllables = tok.tokenize("hello");
        assert!(!syllables.is_empty());
        assert_eq!(syllables.concat(), "hello");
    }
}
