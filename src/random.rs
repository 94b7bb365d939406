//! Random number generation, shuffling, and unique sampling.
//!
//! Provides seeded RNG construction, Fisher-Yates shuffle, and sampling of
//! `n` distinct positions without replacement.
//!
//! # Reproducibility
//!
//! [`shuffle`] and [`random_unique`] build a fresh generator on every call,
//! seeded from the wall clock. For reproducible runs pass your own generator
//! to [`shuffle_with`] / [`random_unique_with`], typically one built by
//! [`create_rng`] or [`SeedSource::Fixed`]. The underlying algorithm
//! (SmallRng) is deterministic for a given seed on the same platform.

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::error::{Result, SequenceError};

/// Counts clock-seeded generators so calls inside one clock tick differ.
static CLOCK_CALLS: AtomicU64 = AtomicU64::new(0);

/// Where a generator's seed comes from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SeedSource {
    /// Wall clock in nanoseconds, mixed with a per-process call counter.
    #[default]
    Clock,
    /// A fixed seed. Same seed, same sequence.
    Fixed(u64),
}

impl SeedSource {
    /// Resolves this source to a concrete seed.
    pub fn seed(self) -> u64 {
        match self {
            SeedSource::Clock => clock_seed(),
            SeedSource::Fixed(seed) => seed,
        }
    }

    /// Builds a generator seeded from this source.
    pub fn rng(self) -> SmallRng {
        let seed = self.seed();
        if self == SeedSource::Clock {
            log::trace!("seeding generator from clock: {seed:#018x}");
        }
        create_rng(seed)
    }
}

/// Creates a fast, seeded random number generator.
///
/// Uses `SmallRng` (Xoshiro256++) for high performance.
/// The sequence is deterministic for a given seed on the same platform.
///
/// # Examples
/// ```
/// use arrtillery::random::create_rng;
/// use rand::Rng;
/// let mut rng = create_rng(42);
/// let x: f64 = rng.random();
/// assert!(x >= 0.0 && x < 1.0);
/// ```
pub fn create_rng(seed: u64) -> SmallRng {
    SmallRng::seed_from_u64(seed)
}

fn clock_seed() -> u64 {
    // Truncation keeps the fast-moving low bits.
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map_or(0, |d| d.as_nanos() as u64);
    let call = CLOCK_CALLS.fetch_add(1, Ordering::Relaxed);
    nanos ^ call.wrapping_mul(0x9E37_79B9_7F4A_7C15)
}

/// Shuffles `seq` in place with a clock-seeded generator.
///
/// See [`shuffle_with`] for the algorithm.
///
/// # Examples
/// ```
/// use arrtillery::random::shuffle;
/// let mut v = vec![1, 2, 3, 4, 5];
/// shuffle(&mut v);
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle<T>(seq: &mut [T]) {
    shuffle_with(seq, &mut SeedSource::Clock.rng());
}

/// Fisher-Yates (Durstenfeld) in-place shuffle.
///
/// Produces a uniformly random permutation: each of the n! permutations
/// is equally likely.
///
/// # Algorithm
/// Modern variant due to Durstenfeld (1964), popularized by Knuth as
/// "Algorithm P". Iterates backwards, swapping each element with a
/// uniformly chosen earlier (or same) position.
///
/// Reference: Knuth (1997), *TAOCP* Vol. 2, §3.4.2, Algorithm P.
///
/// # Complexity
/// Time: O(n), Space: O(1) (in-place)
///
/// # Examples
/// ```
/// use arrtillery::random::{create_rng, shuffle_with};
/// let mut v = vec![1, 2, 3, 4, 5];
/// let mut rng = create_rng(42);
/// shuffle_with(&mut v, &mut rng);
/// // v is now a permutation of [1, 2, 3, 4, 5]
/// v.sort();
/// assert_eq!(v, vec![1, 2, 3, 4, 5]);
/// ```
pub fn shuffle_with<T, R: Rng>(seq: &mut [T], rng: &mut R) {
    let n = seq.len();
    if n <= 1 {
        return;
    }
    for i in (1..n).rev() {
        let j = rng.random_range(0..=i);
        seq.swap(i, j);
    }
}

/// Picks `n` elements at distinct positions with a clock-seeded generator.
///
/// See [`random_unique_with`] for the mutation and aliasing contract.
///
/// # Errors
/// Returns [`SequenceError::InvalidArgument`] if `n > seq.len()`.
///
/// # Examples
/// ```
/// use arrtillery::random::random_unique;
/// let mut v = vec![1, 2, 3, 4, 5];
/// let picked = random_unique(&mut v, 3).unwrap();
/// assert_eq!(picked.len(), 3);
/// assert!(random_unique(&mut v, 6).is_err());
/// ```
pub fn random_unique<T>(seq: &mut [T], n: usize) -> Result<&mut [T]> {
    // Rejected calls never build a generator.
    if n > seq.len() {
        return Err(reject(n, seq.len()));
    }
    random_unique_with(seq, n, &mut SeedSource::Clock.rng())
}

/// Picks `n` elements at distinct positions, uniformly without replacement.
///
/// The whole of `seq` is shuffled in place with [`shuffle_with`], and the
/// first `n` slots are returned. The result is a view into `seq`, so the
/// caller's element order changes as a side effect. Because every
/// permutation is equally likely, every `n`-subset of positions is too.
///
/// When `n > seq.len()` the input is left untouched.
///
/// # Errors
/// Returns [`SequenceError::InvalidArgument`] if `n > seq.len()`.
///
/// # Complexity
/// Time: O(len), Space: O(1)
///
/// # Examples
/// ```
/// use arrtillery::random::{create_rng, random_unique_with};
/// let mut v = vec![10, 20, 30, 40];
/// let mut rng = create_rng(7);
/// let picked = random_unique_with(&mut v, 2, &mut rng).unwrap();
/// assert_eq!(picked.len(), 2);
/// assert_ne!(picked[0], picked[1]);
/// ```
pub fn random_unique_with<'a, T, R: Rng>(
    seq: &'a mut [T],
    n: usize,
    rng: &mut R,
) -> Result<&'a mut [T]> {
    if n > seq.len() {
        return Err(reject(n, seq.len()));
    }
    shuffle_with(seq, rng);
    Ok(&mut seq[..n])
}

fn reject(requested: usize, len: usize) -> SequenceError {
    log::debug!("rejecting sample of {requested} from sequence of length {len}");
    SequenceError::InvalidArgument { requested, len }
}
