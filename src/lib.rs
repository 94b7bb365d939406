//! # arrtillery
//!
//! Generic helpers over in-memory sequences (`[T]`).
//!
//! Every function is independent and stateless. Some return a new `Vec`,
//! some return a borrowed view, and some rewrite the caller's slice in place.
//! Which one applies is part of each function's contract.
//!
//! ## Modules
//!
//! - [`seq`]: transform, filter, predicate tests, clamped slicing
//! - [`random`]: seeded generators, Fisher-Yates shuffle, unique sampling
//! - [`collections`]: deduplication and duplicate counting for `Eq + Hash` elements
//! - [`error`]: [`SequenceError`]
//!
//! ## Design Philosophy
//!
//! - **Two capability tiers**: most operations accept any `T`; only the
//!   hash-keyed ones require `T: Eq + Hash`
//! - **Total where possible**: empty inputs and out-of-range slice bounds are
//!   handled, not rejected; only oversized sampling returns an error
//! - **Injectable randomness**: clock-seeded by default, `_with` variants take
//!   any `rand::Rng` for reproducible runs

pub mod collections;
pub mod error;
pub mod random;
pub mod seq;

pub use collections::{count_duplicates, deduplicate};
pub use error::{Result, SequenceError};
pub use random::{
    create_rng, random_unique, random_unique_with, shuffle, shuffle_with, SeedSource,
};
pub use seq::{every, filter, for_each, safe_slice, some};
