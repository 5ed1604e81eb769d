//! Voice command bridge
//!
//! Turns assistant actions and `evenly://` deep links into expense commands
//! and forwards them to the application over a method channel.

/// Command adapter
pub mod adapter;

/// Method channel seam
pub mod channel;

/// Bridge configuration
pub mod config;

/// Platform intents
pub mod intent;

/// Logging setup
pub mod telemetry;

pub use adapter::CommandAdapter;
pub use channel::{MethodCall, MethodChannel, UnboundedChannel};
pub use config::BridgeConfig;
pub use intent::Intent;
