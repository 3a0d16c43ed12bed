//! Domain model shared by the asynchronous parts of the crate.

pub mod errors;
pub mod outcome;
pub mod state;

pub use self::errors::{OutcomeError, SquareError};
pub use self::outcome::{Outcome, OutcomeKind};
pub use self::state::ComputationState;
