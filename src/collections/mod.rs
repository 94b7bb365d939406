//! Operations that need comparable (`Eq + Hash`) elements.

mod unique;

pub use unique::{count_duplicates, deduplicate};
