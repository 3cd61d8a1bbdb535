//! The files in `sample/` directory define the partially labeled
//! observation matrix and its labeled/unlabeled partition.

pub(crate) mod feature_struct;
pub(crate) mod sample_struct;
pub(crate) mod sample_reader;
pub(crate) mod partition;


pub use feature_struct::Feature;
pub use sample_struct::Sample;
pub use sample_reader::SampleReader;
pub use partition::Partition;

/// The missing-label sentinel.
/// A row whose target equals this value belongs to
/// the unlabeled partition.
/// `NaN` is used since it can never be a class label.
pub const MISSING: f64 = f64::NAN;
