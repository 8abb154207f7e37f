#![forbid(unsafe_code)]

use rand::distributions::{Distribution, WeightedIndex};
use rand::seq::SliceRandom;
use rand::Rng;

use safety::WordSet;
use tokenize::{words, SyllableTokenizer};
use vocab::{Neighbor, Vocabulary};

use crate::subword::SubwordFinder;

/// Default neighborhood size for the similarity query.
pub const DEFAULT_TOP_K: usize = 10;

/// Fixed message returned when the sampled replacement hits the blacklist.
/// The rejected word itself is never surfaced.
pub const APOLOGY: &str = "I generated a really bad word but it was silenced by a \
bad words blacklist. I'm using a language model trained from Wikipedia articles, \
so it's possible more really bad words may be unaccounted for. I'm sorry if this \
happens, it's fully unintentional.";

/// Terminal result of one generation request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Pun {
    /// the substituted phrase
    Text(String),
    /// a banned replacement was suppressed; the payload is [`APOLOGY`]
    Apology(&'static str),
    /// no word in the input had any viable subword
    NoCandidates,
}

/// Everything `generate` needs, loaded once at startup and shared read-only
/// for the process lifetime.
///
/// This is the explicit replacement for the original's module-level model
/// and word-set globals: construct it once, share it behind an `Arc`, and
/// pass a fresh random source per call.
pub struct PunContext {
    vocabulary: Box<dyn Vocabulary + Send + Sync>,
    syllables: SyllableTokenizer,
    ignored: WordSet,
    banned: WordSet,
}

impl PunContext {
    /// Assemble a context from already-loaded parts.
    pub fn new(
        vocabulary: Box<dyn Vocabulary + Send + Sync>,
        syllables: SyllableTokenizer,
        ignored: WordSet,
        banned: WordSet,
    ) -> Self {
        Self {
            vocabulary,
            syllables,
            ignored,
            banned,
        }
    }

    /// Load the embedding model and word sets named by `config`.
    ///
    /// The syllable splitter takes the embedding vocabulary itself as its
    /// reference lexicon, so no separate corpus file is needed. This is the
    /// expensive blocking call; do it once, off any latency-sensitive path.
    pub fn load(config: &crate::config::PunConfig) -> std::io::Result<Self> {
        log::info!("loading language model");
        let model = vocab::EmbeddingModel::load(&config.vectors_path)?;
        let syllables = SyllableTokenizer::new(model.iter_words());
        log::info!("language model successfully loaded");
        let ignored = WordSet::load(&config.ignored_path).with_punctuation();
        let banned = WordSet::load(&config.banned_path);
        Ok(Self::new(Box::new(model), syllables, ignored, banned))
    }

    /// Generate a pun variant of `text` by swapping one subword of one word
    /// for a similarity-weighted neighbor.
    ///
    /// Pure function of the input, the context, and `rng`: a fixed seed
    /// reproduces the result exactly, and concurrent calls never interfere.
    /// `top_k` bounds the similarity neighborhood ([`DEFAULT_TOP_K`] is the
    /// usual choice).
    pub fn generate<R: Rng>(&self, text: &str, top_k: usize, rng: &mut R) -> Pun {
        // Hyphens separate words.
        let text = text.replace('-', " ");

        let finders: Vec<SubwordFinder> = words(&text)
            .iter()
            .map(|w| {
                SubwordFinder::new(w, &self.syllables, self.vocabulary.as_ref(), &self.ignored)
            })
            .collect();
        let mut out: Vec<String> = finders.iter().map(|f| f.word.clone()).collect();

        let eligible: Vec<usize> = finders
            .iter()
            .enumerate()
            .filter(|(_, f)| f.has_candidates())
            .map(|(i, _)| i)
            .collect();
        let Some(&chosen) = eligible.choose(rng) else {
            return Pun::NoCandidates;
        };
        let finder = &finders[chosen];
        let Some(candidate) = finder.candidates.choose(rng) else {
            return Pun::NoCandidates;
        };

        let neighbors = self
            .vocabulary
            .nearest_neighbors(&candidate.matched, top_k);
        let Some(replacement) = sample_weighted(&neighbors, rng) else {
            // a neighborhood can be empty when the vocabulary is tiny
            return Pun::NoCandidates;
        };

        if self.banned.contains(&replacement.to_lowercase()) {
            log::debug!("replacement for {:?} rejected by the blacklist", candidate.matched);
            return Pun::Apology(APOLOGY);
        }

        let replacement = recase(&finder.word, candidate.prefix.is_empty(), replacement);
        log::debug!(
            "{}[{}]{} {} -> {}",
            candidate.prefix.concat(),
            candidate.matched,
            candidate.suffix.concat(),
            candidate.matched,
            replacement
        );
        out[chosen] = candidate.compose(&replacement);
        Pun::Text(out.join(" "))
    }
}

/// Weighted random pick among neighbors, similarity scores as weights.
///
/// Cosine scores can be negative and `WeightedIndex` rejects negative
/// weights, so scores are clamped to zero first; when everything clamps to
/// zero the pick degrades to uniform.
fn sample_weighted<'a, R: Rng>(neighbors: &'a [Neighbor], rng: &mut R) -> Option<&'a str> {
    if neighbors.is_empty() {
        return None;
    }
    let weights: Vec<f32> = neighbors.iter().map(|n| n.score.max(0.0)).collect();
    let index = match WeightedIndex::new(&weights) {
        Ok(dist) => dist.sample(rng),
        Err(_) => rng.gen_range(0..neighbors.len()),
    };
    neighbors.get(index).map(|n| n.word.as_str())
}

// Embedding vocabularies are lowercase; when the replacement starts the new
// word and the original word was capitalized, carry the capital over.
fn recase(original: &str, replaces_start: bool, replacement: &str) -> String {
    if replaces_start && original.chars().next().is_some_and(|c| c.is_uppercase()) {
        let mut chars = replacement.chars();
        if let Some(first) = chars.next() {
            return first.to_uppercase().chain(chars).collect();
        }
    }
    replacement.to_string()
}
