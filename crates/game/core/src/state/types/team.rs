use std::ops::{Index, IndexMut};

/// One side of the game.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display, strum::EnumString, strum::AsRefStr,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Team {
    Home,
    Away,
}

impl Team {
    pub const BOTH: [Team; 2] = [Team::Away, Team::Home];

    pub const fn opponent(self) -> Self {
        match self {
            Self::Home => Self::Away,
            Self::Away => Self::Home,
        }
    }
}

/// A value kept once per team, serialized as `{"home": .., "away": ..}`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamPair<T> {
    pub home: T,
    pub away: T,
}

impl<T> TeamPair<T> {
    pub const fn new(home: T, away: T) -> Self {
        Self { home, away }
    }

    pub fn get(&self, team: Team) -> &T {
        match team {
            Team::Home => &self.home,
            Team::Away => &self.away,
        }
    }

    pub fn get_mut(&mut self, team: Team) -> &mut T {
        match team {
            Team::Home => &mut self.home,
            Team::Away => &mut self.away,
        }
    }
}

impl<T: Clone> TeamPair<T> {
    /// Both sides start from the same value.
    pub fn splat(value: T) -> Self {
        Self {
            home: value.clone(),
            away: value,
        }
    }
}

impl<T> Index<Team> for TeamPair<T> {
    type Output = T;

    fn index(&self, team: Team) -> &T {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamPair<T> {
    fn index_mut(&mut self, team: Team) -> &mut T {
        self.get_mut(team)
    }
}
