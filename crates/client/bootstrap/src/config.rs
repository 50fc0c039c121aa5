//! Session configuration structures and loaders.
use std::env;
use std::path::PathBuf;
use std::time::Duration;

use runtime::{Role, RuntimeConfig};

/// Configuration required to bootstrap a scoreboard session.
#[derive(Clone, Debug, Default)]
pub struct SessionConfig {
    pub runtime: RuntimeConfig,
    /// Base URL of the scoreboard API; `None` keeps the remote store in memory.
    pub api_url: Option<String>,
    /// Base URL of the season statistics service.
    pub stats_url: Option<String>,
    pub cache_dir: Option<PathBuf>,
    pub session_id: Option<String>,
    /// Display followers run next to the operator console, sharing its
    /// replication hub. Ignored for subscriber processes.
    pub local_displays: usize,
}

impl SessionConfig {
    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `SCOREBOARD_ROLE` - `writer`/`operator` or `subscriber`/`display` (default: writer)
    /// - `SCOREBOARD_API_URL` - Scoreboard API base URL (default: in-memory store)
    /// - `SCOREBOARD_STATS_URL` - Season stats service base URL (default: none)
    /// - `SCOREBOARD_HEALTH_TIMEOUT_MS` - Health probe timeout (default: 3000)
    /// - `SCOREBOARD_CACHE_DIR` - Local cache directory (default: platform-specific)
    /// - `SCOREBOARD_CHANNEL` - Replication channel name (default: baseballScoreboard)
    /// - `SCOREBOARD_CHANNEL_CAPACITY` - Messages buffered per subscriber (default: 64)
    /// - `SCOREBOARD_RELOAD_INTERVAL_MS` - Display reload interval (default: 2000)
    /// - `SCOREBOARD_SESSION_ID` - Session identifier for log files (default: timestamp)
    /// - `SCOREBOARD_LOCAL_DISPLAYS` - Displays following the console in-process (default: 0)
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(role) = read_env::<Role>("SCOREBOARD_ROLE") {
            config.runtime.role = role;
        } else if let Ok(raw) = env::var("SCOREBOARD_ROLE") {
            tracing::warn!("Ignoring unknown SCOREBOARD_ROLE '{}'", raw);
        }

        config.api_url = read_url("SCOREBOARD_API_URL");
        config.stats_url = read_url("SCOREBOARD_STATS_URL");

        if let Some(ms) = read_env::<u64>("SCOREBOARD_HEALTH_TIMEOUT_MS") {
            config.runtime.health_timeout = Duration::from_millis(ms);
        }

        config.cache_dir = env::var("SCOREBOARD_CACHE_DIR").ok().map(PathBuf::from);

        if let Ok(name) = env::var("SCOREBOARD_CHANNEL")
            && !name.trim().is_empty()
        {
            config.runtime.channel_name = name.trim().to_string();
        }

        if let Some(capacity) = read_env::<usize>("SCOREBOARD_CHANNEL_CAPACITY") {
            config.runtime.channel_capacity = capacity.max(1);
        }

        if let Some(ms) = read_env::<u64>("SCOREBOARD_RELOAD_INTERVAL_MS") {
            config.runtime.reload_interval = Duration::from_millis(ms.max(100));
        }

        config.session_id = env::var("SCOREBOARD_SESSION_ID").ok();

        if let Some(count) = read_env::<usize>("SCOREBOARD_LOCAL_DISPLAYS") {
            config.local_displays = count;
        }

        config
    }

    pub fn role(&self) -> Role {
        self.runtime.role
    }

    /// Same persistence and channel settings, in the subscriber role.
    pub fn for_display(&self) -> Self {
        let mut config = self.clone();
        config.runtime.role = Role::Subscriber;
        config.local_displays = 0;
        config
    }

    /// Configured session id, or one derived from the current time.
    pub fn session_id_or_generate(&self) -> String {
        self.session_id.clone().unwrap_or_else(|| {
            format!(
                "{}-{}",
                self.runtime.role,
                chrono::Local::now().format("%Y%m%d-%H%M%S")
            )
        })
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_url(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|url| url.trim().to_string())
        .filter(|url| !url.is_empty())
}
