//! Operator console: parses line commands and applies them to a writer session.
//!
//! Lineup slots are entered 1-based, the way they read on the scorecard.
use std::str::FromStr;

use game_core::{Base, CountField, ResultCode, StatField, Team};
use runtime::Session;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Command {
    Ball,
    Strike,
    Out,
    Result(ResultCode),
    Undo,
    ResetCount,
    ClearCount(CountField),
    ToggleRunner(Base),
    ClearRunners,
    NextInning,
    PreviousInning,
    Score(i32),
    Stat {
        team: Team,
        field: StatField,
        delta: i32,
    },
    NextBatter,
    PreviousBatter,
    TeamName {
        team: Team,
        name: String,
    },
    Lineup {
        team: Team,
        slot: usize,
        name: String,
    },
    Position {
        team: Team,
        slot: usize,
        label: String,
    },
    Pitcher {
        team: Team,
        name: String,
    },
    NewGame,
    Show,
    Help,
    Quit,
}

/// What the console should do after a command ran.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    /// State changed (or was requested); redraw the board.
    Redraw(Option<String>),
    /// Print a message without redrawing.
    Message(String),
    Quit,
}

pub const HELP: &str = "\
ball | strike | out                 pitch-by-pitch count
result <code>                       record an at-bat (single, double, strikeout, dp, sac_fly, ...)
undo                                undo the last recorded at-bat
reset [ball|strike|out]             clear the count, or one field of it
runner <1|2|3> | clear-runners      toggle a base, or empty the bases
inning <next|prev>                  change the half-inning
score <+n|-n>                       adjust the batting team's current inning
hits|errors <home|away> <+n|-n>     adjust H or E
batter <next|prev>                  move through the batting order
team <home|away> <name>             set a team name
lineup <home|away> <1-9> <name>     set a batter
position <home|away> <1-9> <label>  set a defensive position
pitcher <home|away> [name]          set (or clear) the designated pitcher
new-game | show | help | quit";

impl FromStr for Command {
    type Err = String;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let verb = words
            .next()
            .ok_or_else(|| "empty command".to_string())?
            .to_ascii_lowercase();
        let args: Vec<&str> = words.collect();

        let command = match (verb.as_str(), args.as_slice()) {
            ("ball" | "b", []) => Self::Ball,
            ("strike" | "s", []) => Self::Strike,
            ("out" | "o", []) => Self::Out,
            ("result" | "r", [code]) => Self::Result(parse_result(code)?),
            ("undo" | "u", []) => Self::Undo,
            ("reset", []) => Self::ResetCount,
            ("reset", [field]) => Self::ClearCount(
                field
                    .parse()
                    .map_err(|_| format!("unknown count field '{field}'"))?,
            ),
            ("runner", [base]) => Self::ToggleRunner(
                base.parse()
                    .map_err(|_| format!("unknown base '{base}'"))?,
            ),
            ("clear-runners", []) => Self::ClearRunners,
            ("inning", ["next"]) => Self::NextInning,
            ("inning", ["prev"]) => Self::PreviousInning,
            ("score", [delta]) => Self::Score(parse_delta(delta)?),
            ("hits" | "errors", [team, delta]) => Self::Stat {
                team: parse_team(team)?,
                field: if verb == "hits" {
                    StatField::Hits
                } else {
                    StatField::Errors
                },
                delta: parse_delta(delta)?,
            },
            ("batter", ["next"]) => Self::NextBatter,
            ("batter", ["prev"]) => Self::PreviousBatter,
            ("team", [team, name @ ..]) if !name.is_empty() => Self::TeamName {
                team: parse_team(team)?,
                name: name.join(" "),
            },
            ("lineup", [team, slot, name @ ..]) if !name.is_empty() => Self::Lineup {
                team: parse_team(team)?,
                slot: parse_slot(slot)?,
                name: name.join(" "),
            },
            ("position", [team, slot, label]) => Self::Position {
                team: parse_team(team)?,
                slot: parse_slot(slot)?,
                label: label.to_string(),
            },
            ("pitcher", [team, name @ ..]) => Self::Pitcher {
                team: parse_team(team)?,
                name: name.join(" "),
            },
            ("new-game", []) => Self::NewGame,
            ("show", []) => Self::Show,
            ("help" | "?", []) => Self::Help,
            ("quit" | "exit" | "q", []) => Self::Quit,
            _ => return Err(format!("unrecognized command '{}'", line.trim())),
        };
        Ok(command)
    }
}

fn parse_result(code: &str) -> Result<ResultCode, String> {
    code.parse()
        .map_err(|_| format!("unknown result code '{code}'"))
}

fn parse_team(team: &str) -> Result<Team, String> {
    team.parse().map_err(|_| format!("unknown team '{team}'"))
}

fn parse_delta(delta: &str) -> Result<i32, String> {
    delta
        .trim_start_matches('+')
        .parse()
        .map_err(|_| format!("'{delta}' is not a number"))
}

fn parse_slot(slot: &str) -> Result<usize, String> {
    match slot.parse::<usize>() {
        Ok(slot) if slot >= 1 => Ok(slot - 1),
        _ => Err(format!("lineup slot '{slot}' must be 1 or higher")),
    }
}

impl Command {
    /// Applies the command to a writer session.
    pub fn apply(self, session: &mut Session) -> runtime::Result<CommandOutcome> {
        let note = match self {
            Self::Ball => session
                .add_ball()?
                .then(|| "ball four, batter takes first".to_string()),
            Self::Strike => session
                .add_strike()?
                .then(|| "strike three, side retired".to_string()),
            Self::Out => session.add_out()?.then(|| "side retired".to_string()),
            Self::Result(code) => {
                session.record_at_bat(code)?;
                Some(format!("{} ({})", code.label(), code.animation_label()))
            }
            Self::Undo => {
                if session.undo_last_result()? {
                    Some("last result undone".to_string())
                } else {
                    return Ok(CommandOutcome::Message("nothing to undo".to_string()));
                }
            }
            Self::ResetCount => {
                session.reset_count()?;
                None
            }
            Self::ClearCount(field) => {
                session.clear_count_field(field)?;
                None
            }
            Self::ToggleRunner(base) => {
                session.toggle_runner(base)?;
                None
            }
            Self::ClearRunners => {
                session.clear_runners()?;
                None
            }
            Self::NextInning => {
                session.advance_inning()?;
                None
            }
            Self::PreviousInning => {
                session.previous_inning()?;
                None
            }
            Self::Score(delta) => {
                session.adjust_score(delta)?;
                None
            }
            Self::Stat { team, field, delta } => {
                session.adjust_stat(team, field, delta)?;
                None
            }
            Self::NextBatter => {
                session.next_batter()?;
                None
            }
            Self::PreviousBatter => {
                session.previous_batter()?;
                None
            }
            Self::TeamName { team, name } => {
                session.set_team_name(team, &name)?;
                None
            }
            Self::Lineup { team, slot, name } => {
                session.set_lineup_entry(team, slot, &name)?;
                None
            }
            Self::Position { team, slot, label } => {
                session.set_position(team, slot, &label)?;
                None
            }
            Self::Pitcher { team, name } => {
                session.set_pitcher(team, &name)?;
                None
            }
            Self::NewGame => {
                session.reset_game()?;
                Some("new game".to_string())
            }
            Self::Show => None,
            Self::Help => return Ok(CommandOutcome::Message(HELP.to_string())),
            Self::Quit => return Ok(CommandOutcome::Quit),
        };
        Ok(CommandOutcome::Redraw(note))
    }
}
