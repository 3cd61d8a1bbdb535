//! Common checkers and helper functions.

pub(crate) mod checker;
pub(crate) mod utils;
