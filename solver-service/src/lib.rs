//! solver-service: solves math problems by delegating to a generative language
//! model under a bounded deadline.

pub mod config;
pub mod dtos;
pub mod handlers;
pub mod services;
pub mod startup;
