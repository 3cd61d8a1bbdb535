//! Error types for committee training and query selection.

use std::error;
use std::fmt;

/// A specialized `Result` whose error type is [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Errors surfaced to the caller.
/// Every failure propagates;
/// there is no partial-result mode anywhere in this crate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The labeled or unlabeled partition is empty,
    /// so committee training or querying is impossible.
    EmptyPartition {
        /// Number of rows with a known label.
        labeled: usize,
        /// Number of rows whose label is missing.
        unlabeled: usize,
    },
    /// The external fit function failed for some committee member.
    /// The cause text of the underlying failure is preserved.
    Training {
        /// Message of the underlying failure.
        cause: String,
    },
    /// A parameter takes an unacceptable value,
    /// e.g., a committee of fewer than 2 members
    /// or an unrecognized disagreement-measure name.
    InvalidConfiguration(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyPartition { labeled, unlabeled } => {
                write!(
                    f,
                    "the sample cannot be partitioned: \
                     {labeled} labeled and {unlabeled} unlabeled rows. \
                     Both partitions must be non-empty."
                )
            },
            Self::Training { cause } => {
                write!(f, "committee training failed: {cause}")
            },
            Self::InvalidConfiguration(msg) => {
                write!(f, "invalid configuration: {msg}")
            },
        }
    }
}

impl error::Error for Error {}
