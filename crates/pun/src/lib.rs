#![forbid(unsafe_code)]
#![deny(missing_docs, unused_must_use)]

//! Pun generation engine: swap a subword of one word for a
//! similarity-weighted neighbor from a word-vector vocabulary.
//!
//! Layout (important files):
//! - `subword.rs` — `SubwordFinder` / `SubwordCandidate` window enumeration
//! - `engine.rs` — `PunContext::generate`, weighted sampling, safety filter
//! - `config.rs` — JSON configuration with full defaulting
//! - `bin/repl.rs` — interactive collaborator with reroll
//! - `bin/server.rs` — HTTP collaborator with a readiness signal
//!
//! The context is built once at startup (the expensive part) and shared
//! read-only; every `generate` call takes its own random source, so a
//! seeded run is reproducible and concurrent calls never interfere.

/// Engine configuration.
pub mod config;
/// Substitution engine and its terminal result type.
pub mod engine;
/// Subword candidate enumeration.
pub mod subword;

pub use config::{load_config, PunConfig};
pub use engine::{Pun, PunContext, APOLOGY, DEFAULT_TOP_K};
pub use subword::{SubwordCandidate, SubwordFinder};

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Seeded RNG for reproducible generation.
pub fn make_rng(seed: u64) -> ChaCha8Rng {
    ChaCha8Rng::seed_from_u64(seed)
}

/// Independent RNG for a fresh request (or a reroll).
pub fn fresh_rng() -> ChaCha8Rng {
    ChaCha8Rng::from_entropy()
}
