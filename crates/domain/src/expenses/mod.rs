/// Commands
pub mod commands;

/// Loosely-typed action payloads
pub mod inputs;

/// Deep link query extraction
pub mod links;

pub use commands::{Command, CommandType, Source};
pub use inputs::{Extra, Extras};
