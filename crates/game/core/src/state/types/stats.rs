/// R/H/E columns of the line score.
///
/// `r` is derived from the inning scores and refreshed by the engine whenever
/// a score cell changes; `h` and `e` are plain accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TeamStats {
    pub r: u32,
    pub h: u32,
    pub e: u32,
}

/// Accumulator of [`TeamStats`] the operator adjusts by hand.
#[derive(Clone, Copy, Debug, PartialEq, Eq, strum::EnumString, strum::AsRefStr)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum StatField {
    #[strum(serialize = "h", serialize = "hits")]
    Hits,
    #[strum(serialize = "e", serialize = "errors")]
    Errors,
}

/// Derived line of the pitcher currently working for one team.
///
/// `innings` and `runs` are recomputed from `outs` and the opposing line score;
/// the remaining fields are accumulators.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
pub struct PitcherStats {
    /// Innings pitched in baseball notation: `1.1` means one inning and one out.
    pub innings: f64,
    pub strikeouts: u32,
    pub walks: u32,
    pub runs: u32,
    pub pitch_count: u32,
    pub outs: u32,
}
