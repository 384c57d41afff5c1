//! Request and response bodies for the HTTP API.

pub mod models;
pub mod solve;

pub use models::ModelsResponse;
pub use solve::{Greeting, MathProblem, SolveResponse, SolveStatus};
