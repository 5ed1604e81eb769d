//! Evenly Domain Models

/// Expense commands and the inputs they are built from
pub mod expenses;

/// Domain errors
pub mod errors;

pub use errors::Error;
