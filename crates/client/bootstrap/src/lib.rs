//! Shared bootstrap utilities for scoreboard front-ends.
//!
//! Provides configuration loading and session assembly that can be reused by
//! the operator console, display followers, or other front-end crates.
pub mod builder;
pub mod config;

pub use builder::{SessionBuilder, SessionSetup};
pub use config::SessionConfig;
