//! Runtime configuration shared by the session and its adapters.

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use game_core::GameConfig;

/// Which side of the replication channel a session sits on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Role {
    /// Operator console: the only role that mutates, persists remotely and publishes.
    #[default]
    Writer,
    /// Display surface: renders whatever it last received or loaded.
    Subscriber,
}

impl Role {
    pub const fn is_writer(self) -> bool {
        matches!(self, Self::Writer)
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Role::Writer => "writer",
            Role::Subscriber => "subscriber",
        };
        write!(f, "{}", label)
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "writer" | "operator" | "admin" => Ok(Self::Writer),
            "subscriber" | "display" | "viewer" => Ok(Self::Subscriber),
            other => Err(format!("unknown session role '{other}'")),
        }
    }
}

/// Runtime configuration shared across the session and its adapters.
#[derive(Debug, Clone)]
pub struct RuntimeConfig {
    pub game_config: GameConfig,
    pub role: Role,
    /// Upper bound for the remote health probe.
    pub health_timeout: Duration,
    /// Name of the replication bus shared by every session of one game.
    pub channel_name: String,
    /// Messages buffered per subscriber before the slowest one starts losing them.
    pub channel_capacity: usize,
    /// Key of the local cache slot.
    pub cache_key: String,
    /// How often a subscriber falls back to reloading from the persistence chain.
    pub reload_interval: Duration,
}

impl RuntimeConfig {
    pub const DEFAULT_KEY: &'static str = "baseballScoreboard";

    pub fn for_role(role: Role) -> Self {
        Self {
            role,
            ..Self::default()
        }
    }
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            game_config: GameConfig::default(),
            role: Role::Writer,
            health_timeout: Duration::from_secs(3),
            channel_name: Self::DEFAULT_KEY.to_string(),
            channel_capacity: 64,
            cache_key: Self::DEFAULT_KEY.to_string(),
            reload_interval: Duration::from_secs(2),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_aliases() {
        assert_eq!("operator".parse::<Role>().unwrap(), Role::Writer);
        assert_eq!(" Display ".parse::<Role>().unwrap(), Role::Subscriber);
        assert!("referee".parse::<Role>().is_err());
    }
}
