use crate::config::GameConfig;

use super::Team;

/// Which side of the inning is being played.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase")]
pub enum Half {
    /// Away team bats.
    #[default]
    Top,
    /// Home team bats.
    Bottom,
}

impl Half {
    pub const fn batting_team(self) -> Team {
        match self {
            Self::Top => Team::Away,
            Self::Bottom => Team::Home,
        }
    }

    pub const fn pitching_team(self) -> Team {
        self.batting_team().opponent()
    }
}

/// Current inning number (1-based, capped at [`GameConfig::MAX_INNINGS`]) and half.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Inning {
    pub number: u32,
    pub half: Half,
}

impl Inning {
    pub const fn new(number: u32, half: Half) -> Self {
        Self { number, half }
    }

    /// Index into the line score for this inning, if it is on the board.
    pub fn score_index(&self) -> Option<usize> {
        let index = usize::try_from(self.number).ok()?.checked_sub(1)?;
        (index < GameConfig::MAX_INNINGS).then_some(index)
    }
}

impl Default for Inning {
    fn default() -> Self {
        Self::new(1, Half::Top)
    }
}

/// Balls, strikes and outs of the plate appearance in progress.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BallCount {
    pub ball: u8,
    pub strike: u8,
    pub out: u8,
}

/// Individual field of [`BallCount`] the operator can clear.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum CountField {
    Ball,
    Strike,
    Out,
}

/// Occupied bases.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Runners {
    pub first: bool,
    pub second: bool,
    pub third: bool,
}

impl Runners {
    pub const EMPTY: Self = Self {
        first: false,
        second: false,
        third: false,
    };

    pub fn base_mut(&mut self, base: Base) -> &mut bool {
        match base {
            Base::First => &mut self.first,
            Base::Second => &mut self.second,
            Base::Third => &mut self.third,
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Base {
    #[strum(serialize = "first", serialize = "1")]
    First,
    #[strum(serialize = "second", serialize = "2")]
    Second,
    #[strum(serialize = "third", serialize = "3")]
    Third,
}
