pub mod delegation;
pub mod metrics;
pub mod prompt;
pub mod providers;

pub use delegation::{BoundedDelegate, GenerationOutcome, SolveError};
