//! Live scoreboard binary.
//!
//! Composition root that assembles a session through `client-bootstrap` and
//! hands it to the front-end for its role:
//! 1. Writer (operator console) reads commands from stdin. With
//!    `SCOREBOARD_LOCAL_DISPLAYS` set, display followers run in the same
//!    process on the console's replication hub and see every broadcast.
//! 2. Subscriber (display) follows the replication channel and reloads
//!    periodically from the persistence chain. A display in its own process
//!    has no publisher on its hub, so it picks changes up by reloading.
//!
//! # Examples
//!
//! ```bash
//! # Operator console against a scoreboard API
//! SCOREBOARD_API_URL=http://localhost:8080/api cargo run -p scoreboard-client
//!
//! # Operator console with a display following it in-process
//! SCOREBOARD_LOCAL_DISPLAYS=1 cargo run -p scoreboard-client
//!
//! # Display following the same API
//! SCOREBOARD_ROLE=display SCOREBOARD_API_URL=http://localhost:8080/api cargo run -p scoreboard-client
//! ```

use anyhow::Result;
use client_bootstrap::{SessionBuilder, SessionConfig, SessionSetup};
use game_core::GameError;
use runtime::{Role, Session};
use scoreboard_client::{Command, CommandOutcome, DisplayFollower, logging, render_board};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::task::JoinSet;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    // 1. Load configuration from environment
    let config = SessionConfig::from_env();
    let session_id = config.session_id_or_generate();

    // 2. Setup logging
    logging::setup_logging(&session_id)?;

    tracing::info!("Starting scoreboard");
    tracing::info!("Role: {}", config.role());
    tracing::info!(
        "Remote store: {}",
        config.api_url.as_deref().unwrap_or("in-memory")
    );

    // 3. Build the session and load the persisted state
    let SessionSetup {
        config,
        hub,
        session,
        season_stats,
    } = SessionBuilder::new(config).build().await?;

    tracing::info!(
        remote_available = session.is_remote_available(),
        "Session ready"
    );

    // 4. Run the front-end for this role
    match session.role() {
        Role::Writer => {
            let mut displays = JoinSet::new();
            for index in 0..config.local_displays {
                let setup = SessionBuilder::new(config.for_display())
                    .hub(hub.clone())
                    .build()
                    .await?;
                tracing::info!(index, "Local display following the console");
                displays.spawn(DisplayFollower::new(setup.session, setup.season_stats).run());
            }

            let session = run_console(session).await?;
            session.close().await;
            displays.shutdown().await;
        }
        Role::Subscriber => {
            tokio::select! {
                _ = DisplayFollower::new(session, season_stats).run() => {}
                _ = tokio::signal::ctrl_c() => tracing::info!("Interrupted"),
            }
        }
    }

    tracing::info!("Scoreboard shutdown complete");
    Ok(())
}

/// Operator loop: one command per line until `quit` or end of input.
///
/// Hands the session back so pending remote saves can be flushed.
async fn run_console(mut session: Session) -> Result<Session> {
    println!("{}\n", render_board(session.state(), &session.config().game_config));
    println!("type 'help' for commands");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };

        match command.apply(&mut session) {
            Ok(CommandOutcome::Redraw(note)) => {
                if let Some(note) = note {
                    println!("{}", note);
                }
                println!(
                    "{}\n",
                    render_board(session.state(), &session.config().game_config)
                );
            }
            Ok(CommandOutcome::Message(message)) => println!("{}", message),
            Ok(CommandOutcome::Quit) => break,
            Err(err) => {
                let severity = err.severity();
                if severity.is_internal() {
                    tracing::error!(
                        severity = severity.as_str(),
                        code = err.error_code(),
                        "Command '{}' failed: {}",
                        line.trim(),
                        err
                    );
                } else {
                    tracing::warn!(
                        severity = severity.as_str(),
                        code = err.error_code(),
                        "Command '{}' rejected: {}",
                        line.trim(),
                        err
                    );
                }
                println!("error: {}", err);
            }
        }
    }

    Ok(session)
}
