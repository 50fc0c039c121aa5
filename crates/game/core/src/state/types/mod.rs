pub mod board;
pub mod history;
pub mod stats;
pub mod team;

pub use board::{BallCount, Base, CountField, Half, Inning, Runners};
pub use history::{LastResult, UndoEntry};
pub use stats::{PitcherStats, StatField, TeamStats};
pub use team::{Team, TeamPair};
