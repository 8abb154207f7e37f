#![forbid(unsafe_code)]

use safety::WordSet;
use tokenize::SyllableTokenizer;
use vocab::Vocabulary;

/// A contiguous syllable window that matches a vocabulary entry, with the
/// syllables around it.
///
/// `matched` is the lowercase concatenation of the window; `prefix`,
/// the window, and `suffix` together reconstruct the word's syllable
/// sequence in order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubwordCandidate {
    /// syllables before the matched window, case preserved
    pub prefix: Vec<String>,
    /// lowercase concatenation of the matched window
    pub matched: String,
    /// syllables after the matched window, case preserved
    pub suffix: Vec<String>,
}

impl SubwordCandidate {
    /// Splice a replacement into the window's place.
    pub fn compose(&self, replacement: &str) -> String {
        let mut out = self.prefix.concat();
        out.push_str(replacement);
        out.push_str(&self.suffix.concat());
        out
    }
}

/// A word of the input phrase together with its syllables and every
/// vocabulary-matching subword window found in it.
pub struct SubwordFinder {
    /// original surface text
    pub word: String,
    /// syllable split of `word`
    pub syllables: Vec<String>,
    /// candidate windows, longest first, left-to-right within a length
    pub candidates: Vec<SubwordCandidate>,
}

impl SubwordFinder {
    /// Tokenize `word` into syllables and enumerate its candidate windows.
    ///
    /// A single-syllable word has exactly one possible window, the whole
    /// lowercase word. A longer word contributes every contiguous window of
    /// 2 or more syllables; single syllables of a longer word are never
    /// candidates. Windows are kept only when the vocabulary knows them and
    /// the ignored set does not.
    pub fn new(
        word: &str,
        tokenizer: &SyllableTokenizer,
        vocabulary: &dyn Vocabulary,
        ignored: &WordSet,
    ) -> Self {
        let syllables = tokenizer.tokenize(word);
        let mut candidates = Vec::new();

        if syllables.len() == 1 {
            let matched = word.to_lowercase();
            if vocabulary.contains(&matched) && !ignored.contains(&matched) {
                candidates.push(SubwordCandidate {
                    prefix: Vec::new(),
                    matched,
                    suffix: Vec::new(),
                });
            }
        } else {
            for window in (2..=syllables.len()).rev() {
                for offset in 0..=(syllables.len() - window) {
                    let matched = syllables[offset..offset + window].concat().to_lowercase();
                    if !vocabulary.contains(&matched) || ignored.contains(&matched) {
                        continue;
                    }
                    candidates.push(SubwordCandidate {
                        prefix: syllables[..offset].to_vec(),
                        matched,
                        suffix: syllables[offset + window..].to_vec(),
                    });
                }
            }
        }

        Self {
            word: word.to_string(),
            syllables,
            candidates,
        }
    }

    /// Whether this word can take part in substitution at all.
    pub fn has_candidates(&self) -> bool {
        !self.candidates.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use vocab::Neighbor;

    /// Vocabulary that knows an explicit word list and nothing else.
    struct Listed(HashSet<String>);

    impl Listed {
        fn of(words: &[&str]) -> Self {
            Self(words.iter().map(|w| w.to_string()).collect())
        }
    }

    impl Vocabulary for Listed {
        fn contains(&self, word: &str) -> bool {
            self.0.contains(word)
        }
        fn nearest_neighbors(&self, _word: &str, _k: usize) -> Vec<Neighbor> {
            Vec::new()
        }
    }

    /// Vocabulary that contains every string.
    struct Everything;

    impl Vocabulary for Everything {
        fn contains(&self, _word: &str) -> bool {
            true
        }
        fn nearest_neighbors(&self, _word: &str, _k: usize) -> Vec<Neighbor> {
            Vec::new()
        }
    }

    // legal onsets {b, n}; splits "banana" -> ["ba", "na", "na"]
    fn tokenizer() -> SyllableTokenizer {
        SyllableTokenizer::new(["band", "nod"])
    }

    #[test]
    fn single_syllable_word_has_one_candidate() {
        let finder = SubwordFinder::new(
            "Band",
            &tokenizer(),
            &Listed::of(&["band"]),
            &WordSet::empty(),
        );
        assert_eq!(finder.syllables, vec!["Band"]);
        assert_eq!(
            finder.candidates,
            vec![SubwordCandidate {
                prefix: vec![],
                matched: "band".to_string(),
                suffix: vec![],
            }]
        );
    }

    #[test]
    fn single_syllable_out_of_vocabulary_has_none() {
        let finder =
            SubwordFinder::new("band", &tokenizer(), &Listed::of(&[]), &WordSet::empty());
        assert!(!finder.has_candidates());
    }

    #[test]
    fn single_syllable_ignored_has_none() {
        let finder = SubwordFinder::new(
            "band",
            &tokenizer(),
            &Listed::of(&["band"]),
            &WordSet::from_words(["band"]),
        );
        assert!(!finder.has_candidates());
    }

    #[test]
    fn windows_cover_every_span_of_two_or_more() {
        // With an all-accepting vocabulary the candidates are exactly the
        // contiguous spans of length 2..=N, longest first.
        let finder = SubwordFinder::new("banana", &tokenizer(), &Everything, &WordSet::empty());
        let matched: Vec<&str> = finder.candidates.iter().map(|c| c.matched.as_str()).collect();
        assert_eq!(matched, vec!["banana", "bana", "nana"]);
    }

    #[test]
    fn length_one_windows_are_excluded_for_longer_words() {
        let finder = SubwordFinder::new("banana", &tokenizer(), &Everything, &WordSet::empty());
        assert!(finder.candidates.iter().all(|c| c.matched != "ba" && c.matched != "na"));
    }

    #[test]
    fn candidate_reconstructs_the_syllable_sequence() {
        let finder = SubwordFinder::new("Banana", &tokenizer(), &Everything, &WordSet::empty());
        for candidate in &finder.candidates {
            let mut rebuilt: Vec<String> = candidate.prefix.clone();
            rebuilt.push(candidate.matched.clone());
            rebuilt.extend(candidate.suffix.iter().cloned());
            assert_eq!(
                rebuilt.concat().to_lowercase(),
                finder.syllables.concat().to_lowercase()
            );
        }
    }

    #[test]
    fn ignored_filters_windows() {
        let finder = SubwordFinder::new(
            "banana",
            &tokenizer(),
            &Everything,
            &WordSet::from_words(["nana"]),
        );
        assert!(finder.candidates.iter().all(|c| c.matched != "nana"));
        assert!(finder.candidates.iter().any(|c| c.matched == "banana"));
    }

    #[test]
    fn compose_splices_replacement() {
        let candidate = SubwordCandidate {
            prefix: vec!["ba".to_string()],
            matched: "nana".to_string(),
            suffix: vec![],
        };
        assert_eq!(candidate.compose("zooka"), "bazooka");
    }
}
