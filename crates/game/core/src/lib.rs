//! Deterministic scoreboard rules and data types shared across roles.
//!
//! `game-core` defines the canonical live-game record ([`GameState`]) and the
//! pure transitions over it. All state mutation flows through
//! [`engine::GameEngine`]; the runtime persists and replicates whatever the
//! engine produces, and display surfaces only ever read copies.
pub mod config;
pub mod engine;
pub mod error;
pub mod result;
pub mod state;

pub use config::GameConfig;
pub use engine::{EngineError, GameEngine, innings_pitched};
pub use error::{ErrorSeverity, GameError};
pub use result::{ResultCode, format_result_for_animation};
pub use state::{
    Base, CountField, GameState, Half, Inning, LastResult, BallCount, PitcherStats, Runners,
    StatField, Team, TeamPair, TeamStats, UndoEntry,
};
