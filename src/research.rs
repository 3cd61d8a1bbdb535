//! Research utilities:
//! an active-learning session loop with round-by-round logging.

pub(crate) mod simulation;


pub use simulation::{
    Simulation,
    Round,
    rounds_to_json,
};
