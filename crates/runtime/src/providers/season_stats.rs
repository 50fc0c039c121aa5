//! Season-long player statistics, looked up by player name.
//!
//! Displays show a season line next to the current batter and pitcher. The
//! lookup is an external query service; [`SeasonStatsCache`] keeps it from
//! being hit again until the resolved player actually changes.
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::api::{Result, RuntimeError};

/// Season batting line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BattingLine {
    pub avg: f64,
    pub hr: u32,
    pub rbi: u32,
    pub ops: f64,
}

/// Season pitching line.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PitchingLine {
    pub era: f64,
    /// Strikeouts per nine innings.
    pub k9: f64,
}

/// Query service for season statistics.
///
/// Implementations return `Ok(None)` when the player is unknown.
#[async_trait]
pub trait SeasonStatsProvider: Send + Sync {
    async fn batting(&self, name: &str) -> Result<Option<BattingLine>>;

    async fn pitching(&self, name: &str) -> Result<Option<PitchingLine>>;
}

/// Change-detection cache holding one lookup per role.
///
/// The provider is only consulted when the requested name differs from the
/// previous one for that role. Failed lookups are not remembered.
pub struct SeasonStatsCache {
    provider: Arc<dyn SeasonStatsProvider>,
    batter: Option<(String, Option<BattingLine>)>,
    pitcher: Option<(String, Option<PitchingLine>)>,
}

impl SeasonStatsCache {
    pub fn new(provider: Arc<dyn SeasonStatsProvider>) -> Self {
        Self {
            provider,
            batter: None,
            pitcher: None,
        }
    }

    pub async fn batter(&mut self, name: &str) -> Option<BattingLine> {
        if let Some((cached, line)) = &self.batter
            && cached == name
        {
            return line.clone();
        }

        match self.provider.batting(name).await {
            Ok(line) => {
                self.batter = Some((name.to_string(), line.clone()));
                line
            }
            Err(err) => {
                tracing::warn!("Batting lookup for '{}' failed: {}", name, err);
                None
            }
        }
    }

    pub async fn pitcher(&mut self, name: &str) -> Option<PitchingLine> {
        if let Some((cached, line)) = &self.pitcher
            && cached == name
        {
            return line.clone();
        }

        match self.provider.pitching(name).await {
            Ok(line) => {
                self.pitcher = Some((name.to_string(), line.clone()));
                line
            }
            Err(err) => {
                tracing::warn!("Pitching lookup for '{}' failed: {}", name, err);
                None
            }
        }
    }
}

#[derive(Deserialize)]
struct PlayerRow {
    id: Value,
    #[serde(default)]
    name: String,
}

#[derive(Deserialize)]
struct BattingRow {
    #[serde(default)]
    player_id: Option<Value>,
    #[serde(default)]
    batting_average: f64,
    #[serde(default)]
    home_runs: u32,
    #[serde(default)]
    rbis: u32,
    #[serde(default)]
    ops: f64,
}

#[derive(Deserialize)]
struct PitchingRow {
    #[serde(default)]
    player_id: Option<Value>,
    #[serde(default)]
    era: f64,
    #[serde(default)]
    innings_pitched: f64,
    #[serde(default)]
    strikeouts: u32,
}

/// Rows that can be matched back to the player they belong to.
trait PlayerScoped {
    fn player_id(&self) -> Option<&Value>;
}

impl PlayerScoped for BattingRow {
    fn player_id(&self) -> Option<&Value> {
        self.player_id.as_ref()
    }
}

impl PlayerScoped for PitchingRow {
    fn player_id(&self) -> Option<&Value> {
        self.player_id.as_ref()
    }
}

impl From<BattingRow> for BattingLine {
    fn from(row: BattingRow) -> Self {
        Self {
            avg: row.batting_average,
            hr: row.home_runs,
            rbi: row.rbis,
            ops: row.ops,
        }
    }
}

impl From<PitchingRow> for PitchingLine {
    fn from(row: PitchingRow) -> Self {
        let k9 = if row.innings_pitched > 0.0 {
            f64::from(row.strikeouts) * 9.0 / row.innings_pitched
        } else {
            0.0
        };
        Self { era: row.era, k9 }
    }
}

/// Player ids come back as numbers or numeric strings depending on the driver.
fn id_key(id: &Value) -> String {
    match id {
        Value::String(text) => text.trim().to_string(),
        other => other.to_string(),
    }
}

/// Stats service reached over HTTP.
///
/// Names are resolved through `GET {base}/players` first. Season rows then
/// come from `GET {base}/batting-stats?player_id=..` and
/// `GET {base}/pitching-stats?player_id=..` as a JSON array, most recent
/// season first. Rows belonging to other players are skipped even if the
/// service ignores the filter.
#[derive(Clone)]
pub struct HttpSeasonStatsProvider {
    client: Client,
    base_url: String,
}

impl HttpSeasonStatsProvider {
    const REQUEST_TIMEOUT: Duration = Duration::from_secs(5);

    pub fn new(base_url: impl Into<String>) -> Result<Self> {
        let client = Client::builder()
            .timeout(Self::REQUEST_TIMEOUT)
            .build()
            .map_err(|err| RuntimeError::SeasonStats {
                name: String::new(),
                message: err.to_string(),
            })?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }

    async fn get_rows<T>(&self, name: &str, path: &str, query: &[(&str, &str)]) -> Result<Vec<T>>
    where
        T: for<'de> Deserialize<'de>,
    {
        let failure = |message: String| RuntimeError::SeasonStats {
            name: name.to_string(),
            message,
        };

        let response = self
            .client
            .get(format!("{}/{}", self.base_url, path))
            .query(query)
            .send()
            .await
            .map_err(|err| failure(err.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(failure(format!("status {}: {}", status, body)));
        }

        response
            .json()
            .await
            .map_err(|err| failure(err.to_string()))
    }

    /// Player id registered under `name`, `None` when nobody matches.
    async fn resolve_player(&self, name: &str) -> Result<Option<String>> {
        let players: Vec<PlayerRow> = self.get_rows(name, "players", &[]).await?;
        let wanted = name.trim();
        Ok(players
            .iter()
            .find(|player| player.name.trim() == wanted)
            .map(|player| id_key(&player.id)))
    }

    async fn latest_row<T>(&self, kind: &str, name: &str) -> Result<Option<T>>
    where
        T: for<'de> Deserialize<'de> + PlayerScoped,
    {
        let Some(player_id) = self.resolve_player(name).await? else {
            tracing::debug!("No registered player named '{}'", name);
            return Ok(None);
        };

        let rows: Vec<T> = self
            .get_rows(
                name,
                &format!("{}-stats", kind),
                &[("player_id", player_id.as_str())],
            )
            .await?;
        Ok(rows.into_iter().find(|row| {
            row.player_id()
                .is_none_or(|id| id_key(id) == player_id)
        }))
    }
}

#[async_trait]
impl SeasonStatsProvider for HttpSeasonStatsProvider {
    async fn batting(&self, name: &str) -> Result<Option<BattingLine>> {
        let row: Option<BattingRow> = self.latest_row("batting", name).await?;
        Ok(row.map(BattingLine::from))
    }

    async fn pitching(&self, name: &str) -> Result<Option<PitchingLine>> {
        let row: Option<PitchingRow> = self.latest_row("pitching", name).await?;
        Ok(row.map(PitchingLine::from))
    }
}
