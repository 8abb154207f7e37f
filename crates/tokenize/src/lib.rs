#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]

//! Tokenizers for the pun engine.
//!
//! Two layers of splitting, both deterministic:
//! - `word` — punctuation-aware word tokenization of free text
//! - `syllable` — legality-principle syllable splitting of a single word,
//!   trained on a reference lexicon

/// Punctuation-aware word tokenizer.
pub mod word;
/// Legality-principle syllable tokenizer.
pub mod syllable;

pub use syllable::SyllableTokenizer;
pub use word::words;
