#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]

//! Read-only word-vector vocabulary with nearest-neighbor queries.
//!
//! The engine only needs two things from a vocabulary: a membership test and
//! a "k most similar words" query. Those live on the [`Vocabulary`] trait so
//! tests can stub the neighborhood; [`EmbeddingModel`] is the real
//! implementation over GloVe-format text vectors (`word v1 v2 …` per line),
//! loaded once at startup and shared read-only afterwards.

use std::cmp::Ordering;
use std::collections::HashMap;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use rayon::prelude::*;

/// One entry of a nearest-neighbor result: a word and its similarity score,
/// higher meaning more similar.
#[derive(Clone, Debug, PartialEq)]
pub struct Neighbor {
    /// the neighboring word
    pub word: String,
    /// cosine similarity to the query word
    pub score: f32,
}

/// Membership and similarity queries over a fixed vocabulary.
pub trait Vocabulary {
    /// Whether `word` is part of the vocabulary. Lookups are exact; callers
    /// lowercase beforehand.
    fn contains(&self, word: &str) -> bool;

    /// Up to `k` most similar words to `word`, best first, the query word
    /// itself excluded. Returns fewer than `k` entries in a sparse
    /// neighborhood and nothing for out-of-vocabulary queries.
    fn nearest_neighbors(&self, word: &str, k: usize) -> Vec<Neighbor>;
}

/// Fixed mapping from word to embedding vector.
///
/// Vectors are L2-normalized at load so similarity reduces to a dot
/// product. Never mutated after construction.
pub struct EmbeddingModel {
    vectors: HashMap<String, Vec<f32>>,
    dim: usize,
}

impl EmbeddingModel {
    /// Load vectors from a GloVe-style text file: one `word v1 v2 …` entry
    /// per line. Lines with a wrong dimension or unparsable components are
    /// skipped with a warning; the dimension is fixed by the first good
    /// line. IO failure is the only hard error.
    pub fn load(path: &Path) -> std::io::Result<Self> {
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut vectors = HashMap::new();
        let mut dim = 0usize;
        for (lineno, line) in reader.lines().enumerate() {
            let line = line?;
            let mut parts = line.split_whitespace();
            let Some(word) = parts.next() else { continue };
            let components: Option<Vec<f32>> = parts.map(|p| p.parse().ok()).collect();
            let Some(vector) = components else {
                log::warn!("{}:{}: unparsable vector, skipped", path.display(), lineno + 1);
                continue;
            };
            if vector.is_empty() {
                continue;
            }
            if dim == 0 {
                dim = vector.len();
            } else if vector.len() != dim {
                log::warn!(
                    "{}:{}: expected {} components, got {}, skipped",
                    path.display(),
                    lineno + 1,
                    dim,
                    vector.len()
                );
                continue;
            }
            vectors.insert(word.to_string(), normalize(vector));
        }
        log::info!("loaded {} word vectors from {}", vectors.len(), path.display());
        Ok(Self { vectors, dim })
    }

    /// Build a model directly from `(word, vector)` pairs. Vectors are
    /// normalized; an inconsistent dimension is the caller's bug and simply
    /// scores low.
    pub fn from_entries<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = (S, Vec<f32>)>,
        S: Into<String>,
    {
        let mut vectors = HashMap::new();
        let mut dim = 0usize;
        for (word, vector) in entries {
            if dim == 0 {
                dim = vector.len();
            }
            vectors.insert(word.into(), normalize(vector));
        }
        Self { vectors, dim }
    }

    /// Number of words in the vocabulary.
    pub fn len(&self) -> usize {
        self.vectors.len()
    }

    /// Whether the vocabulary is empty.
    pub fn is_empty(&self) -> bool {
        self.vectors.is_empty()
    }

    /// Embedding dimension (0 for an empty model).
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Iterate over every word in the vocabulary, in no particular order.
    pub fn iter_words(&self) -> impl Iterator<Item = &str> {
        self.vectors.keys().map(|w| w.as_str())
    }
}

impl Vocabulary for EmbeddingModel {
    fn contains(&self, word: &str) -> bool {
        self.vectors.contains_key(word)
    }

    fn nearest_neighbors(&self, word: &str, k: usize) -> Vec<Neighbor> {
        let Some(query) = self.vectors.get(word) else {
            return Vec::new();
        };

        // Linear scan over the whole vocabulary; this is the CPU-heavy part
        // of a request, so fan it out.
        let mut neighbors: Vec<Neighbor> = self
            .vectors
            .par_iter()
            .filter(|(other, _)| other.as_str() != word)
            .map(|(other, vector)| Neighbor {
                word: other.clone(),
                score: dot(query, vector),
            })
            .collect();

        // Best first; ties broken by word so results are reproducible.
        neighbors.sort_by(|a, b| {
            b.score
                .partial_cmp(&a.score)
                .unwrap_or(Ordering::Equal)
                .then_with(|| a.word.cmp(&b.word))
        });
        neighbors.truncate(k);
        neighbors
    }
}

fn dot(a: &[f32], b: &[f32]) -> f32 {
    a.iter().zip(b.iter()).map(|(x, y)| x * y).sum()
}

fn normalize(mut vector: Vec<f32>) -> Vec<f32> {
    let norm: f32 = vector.iter().map(|x| x * x).sum::<f32>().sqrt();
    if norm > 0.0 {
        for x in &mut vector {
            *x /= norm;
        }
    }
    vector
}
