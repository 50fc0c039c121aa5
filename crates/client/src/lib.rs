//! Scoreboard front-ends: the operator console and the display follower.
//!
//! # Architecture
//!
//! ```text
//! scoreboard (binary, composition root)
//!   ├─→ client-bootstrap (config + session assembly)
//!   ├─→ console  (writer role: line commands → Session operations)
//!   └─→ display  (subscriber role: channel + periodic reload → rendering)
//! ```
//!
//! Broadcasts only reach displays on the console's own hub, so displays in a
//! separate process rely on the periodic reload.
pub mod console;
pub mod display;
pub mod logging;

pub use console::{Command, CommandOutcome};
pub use display::{DisplayFollower, render_board};
