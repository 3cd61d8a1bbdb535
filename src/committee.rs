//! The files in `committee/` directory define
//! the bagging committee trainer and its prediction output.

pub(crate) mod bagging;
pub(crate) mod committee_struct;
pub(crate) mod predictions;


pub use bagging::Bagging;
pub use committee_struct::Committee;
pub use predictions::CommitteePredictions;
