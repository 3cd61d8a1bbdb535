//! The files in `query/` directory define the query selector and
//! the query-by-committee orchestrator.

pub(crate) mod selector;
pub(crate) mod qbc;


pub use selector::select;
pub use qbc::{
    QueryByCommittee,
    QueryOutcome,
};
