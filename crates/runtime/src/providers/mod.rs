//! Adapters for read-only services consulted by display surfaces.
mod season_stats;

pub use season_stats::{
    BattingLine, HttpSeasonStatsProvider, PitchingLine, SeasonStatsCache, SeasonStatsProvider,
};
