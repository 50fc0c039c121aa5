//! Display surface: follows the writer and renders the board as text.
use std::fmt::Write as _;

use game_core::{GameConfig, GameState, Half, ResultCode, Team};
use runtime::{ReplicationMessage, SeasonStatsCache, Session, Subscription};
use tokio::time::MissedTickBehavior;

/// Renders the line score, count, bases and the current matchup.
pub fn render_board(state: &GameState, config: &GameConfig) -> String {
    let mut out = String::new();
    let innings = state.scores.home.len().max(state.scores.away.len());
    let name_width = Team::BOTH
        .iter()
        .map(|team| team_label(state, *team).chars().count())
        .max()
        .unwrap_or(0);

    let _ = write!(out, "{:width$} ", "", width = name_width);
    for inning in 1..=innings {
        let _ = write!(out, "{:>3}", inning);
    }
    let _ = writeln!(out, " |  R  H  E");

    for team in Team::BOTH {
        let _ = write!(out, "{:width$} ", team_label(state, team), width = name_width);
        for cell in 0..innings {
            match state.scores[team].get(cell) {
                Some(runs) => {
                    let _ = write!(out, "{:>3}", runs);
                }
                None => out.push_str("  -"),
            }
        }
        let stats = &state.stats[team];
        let _ = writeln!(
            out,
            " | {:>2} {:>2} {:>2}",
            state.total_runs(team),
            stats.h,
            stats.e
        );
    }

    let half = match state.inning.half {
        Half::Top => "TOP",
        Half::Bottom => "BOT",
    };
    let bases = if state.runners.is_empty() {
        "empty".to_string()
    } else {
        [
            (state.runners.first, "1B"),
            (state.runners.second, "2B"),
            (state.runners.third, "3B"),
        ]
        .into_iter()
        .filter_map(|(occupied, label)| occupied.then_some(label))
        .collect::<Vec<_>>()
        .join(" ")
    };
    let _ = writeln!(
        out,
        "{} {}   B:{} S:{} O:{}   bases: {}",
        half,
        state.inning.number,
        state.count.ball,
        state.count.strike,
        state.count.out,
        bases
    );

    let today: Vec<&str> = state
        .current_batter_results()
        .iter()
        .map(|code| code.label())
        .collect();
    let batting = state.batting_team();
    let _ = writeln!(
        out,
        "at bat: #{} {}   today: {}",
        state.current_batter[batting] + 1,
        state.current_batter_name().unwrap_or("-"),
        if today.is_empty() {
            "-".to_string()
        } else {
            today.join(" ")
        }
    );

    let pitching = state.pitching_team();
    let line = &state.pitcher_stats[pitching];
    let _ = write!(
        out,
        "pitching: {}   IP {:.1}  K {}  BB {}  R {}  PC {}",
        state.current_pitcher_name(config).unwrap_or("-"),
        line.innings,
        line.strikeouts,
        line.walks,
        line.runs,
        line.pitch_count
    );

    out
}

fn team_label(state: &GameState, team: Team) -> &str {
    let name = state.teams[team].trim();
    match (name.is_empty(), team) {
        (false, _) => name,
        (true, Team::Home) => "HOME",
        (true, Team::Away) => "AWAY",
    }
}

/// Keeps a subscriber session current and prints the board when it changes.
///
/// Messages from the channel are applied as they arrive; every reload interval
/// the session also reloads through the persistence chain, which is the only
/// way to recover broadcasts that were missed.
pub struct DisplayFollower {
    session: Session,
    subscription: Subscription,
    season_stats: Option<SeasonStatsCache>,
    last_board: String,
    last_announced: i64,
}

impl DisplayFollower {
    pub fn new(session: Session, season_stats: Option<SeasonStatsCache>) -> Self {
        let subscription = session.subscribe();
        let last_announced = session
            .state()
            .last_result
            .map(|last| last.timestamp)
            .unwrap_or_default();
        Self {
            session,
            subscription,
            season_stats,
            last_board: String::new(),
            last_announced,
        }
    }

    /// Runs until every publisher on the channel is gone.
    pub async fn run(mut self) {
        let mut reload = tokio::time::interval(self.session.config().reload_interval);
        reload.set_missed_tick_behavior(MissedTickBehavior::Delay);

        self.redraw().await;
        loop {
            tokio::select! {
                message = self.subscription.recv() => {
                    let Some(message) = message else {
                        tracing::info!("Replication channel closed, display stopping");
                        break;
                    };
                    self.handle_message(message).await;
                }
                _ = reload.tick() => {
                    self.session.load_state().await;
                    self.announce_polled_result();
                    self.redraw().await;
                }
            }
        }
    }

    async fn handle_message(&mut self, message: ReplicationMessage) {
        tracing::debug!(kind = message.kind(), "Received replication message");
        let timestamp = message.timestamp();
        match self.session.apply_update(message) {
            Some(result) => self.announce(result, timestamp),
            None => self.redraw().await,
        }
    }

    /// Picks up a result announcement that only reached us through the store.
    fn announce_polled_result(&mut self) {
        if let Some(last) = self.session.state().last_result
            && last.timestamp > self.last_announced
        {
            self.announce(last.result, last.timestamp);
        }
    }

    fn announce(&mut self, result: ResultCode, timestamp: i64) {
        if timestamp <= self.last_announced {
            return;
        }
        self.last_announced = timestamp;
        println!(
            "\n>>> {} <<<  {}\n",
            game_core::format_result_for_animation(result.as_ref()),
            result.label()
        );
    }

    async fn redraw(&mut self) {
        let mut board = render_board(self.session.state(), &self.session.config().game_config);

        if let Some(stats) = self.season_stats.as_mut() {
            let batter = self.session.current_batter_name().map(str::to_string);
            let pitcher = self.session.current_pitcher_name().map(str::to_string);

            if let Some(name) = batter
                && let Some(line) = stats.batter(&name).await
            {
                let _ = write!(
                    board,
                    "\nseason {}: AVG {:.3}  HR {}  RBI {}  OPS {:.3}",
                    name, line.avg, line.hr, line.rbi, line.ops
                );
            }
            if let Some(name) = pitcher
                && let Some(line) = stats.pitcher(&name).await
            {
                let _ = write!(
                    board,
                    "\nseason {}: ERA {:.2}  K/9 {:.2}",
                    name, line.era, line.k9
                );
            }
        }

        if board != self.last_board {
            println!("{}\n", board);
            self.last_board = board;
        }
    }
}

#[cfg(test)]
mod tests {
    use game_core::{GameConfig, GameEngine, GameState, ResultCode};

    use super::render_board;

    #[test]
    fn test_board_shows_matchup_and_line_score() {
        let mut state = GameState::new();
        state.teams.away = "Giants".into();
        state.lineup.away[0] = "Sakamoto".into();
        state.lineup.home[4] = "Murakami".into();
        state.positions.home[4] = "投".into();
        state.scores.home.truncate(11);

        let mut engine = GameEngine::new(&mut state);
        engine.record_at_bat(ResultCode::Double);
        engine.previous_batter();
        engine.adjust_score(1).unwrap();
        engine.toggle_runner(game_core::Base::Second);

        let board = render_board(&state, &GameConfig::default());
        let lines: Vec<&str> = board.lines().collect();

        assert!(lines[1].starts_with("Giants"));
        assert!(lines[1].ends_with("|  1  1  0"));
        assert!(lines[2].starts_with("HOME"));
        assert!(lines[2].contains("  -"));
        assert!(lines[3].starts_with("TOP 1"));
        assert!(lines[3].ends_with("bases: 2B"));
        assert!(lines[4].contains("#1 Sakamoto"));
        assert!(lines[4].ends_with("today: 二塁打"));
        assert!(lines[5].starts_with("pitching: Murakami"));
    }
}
