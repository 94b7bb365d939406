//! Error type shared by the fallible sequence operations.
//!
//! Only sampling can fail today; every other operation is total over its
//! input domain, including empty sequences and out-of-range slice bounds.

use thiserror::Error;

/// Error returned when a sequence operation receives an argument outside its
/// domain.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SequenceError {
    /// More elements were requested than the sequence holds.
    #[error("n cannot be greater than the length of the sequence (n = {requested}, length = {len})")]
    InvalidArgument { requested: usize, len: usize },
}

pub type Result<T> = std::result::Result<T, SequenceError>;
