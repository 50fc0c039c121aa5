//! At-bat result codes.
//!
//! A result code is the operator's classification of how one plate
//! appearance ended. The code decides which counters move: hits feed the
//! batting team's `h`, strikeouts and fielded outs feed the pitching team's
//! derived line.

/// Outcome of one batter's turn.
///
/// Wire form is the snake_case name (`"homerun"`, `"sac_fly"`, ...), matching
/// both the persisted document and the replication messages.
#[derive(
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    strum::Display,
    strum::EnumString,
    strum::AsRefStr,
    strum::EnumIter,
)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum ResultCode {
    Single,
    Double,
    Triple,
    Homerun,
    Walk,
    /// Hit by pitch.
    Hbp,
    Error,
    Strikeout,
    Groundout,
    Flyout,
    Lineout,
    Sacrifice,
    /// Fielder's choice.
    Fc,
    /// Double play.
    Dp,
    SacFly,
}

impl ResultCode {
    /// Returns true for results that count toward the team's `H` column.
    pub const fn is_hit(self) -> bool {
        matches!(
            self,
            Self::Single | Self::Double | Self::Triple | Self::Homerun
        )
    }

    pub const fn is_strikeout(self) -> bool {
        matches!(self, Self::Strikeout)
    }

    /// Outs charged to the pitcher's line when this result is recorded.
    ///
    /// Only the pitcher's derived line moves; the visible out count is driven
    /// separately by [`crate::GameEngine::add_out`].
    pub const fn pitcher_outs(self) -> u32 {
        match self {
            Self::Strikeout | Self::Groundout | Self::Flyout | Self::Lineout => 1,
            Self::Dp => 2,
            _ => 0,
        }
    }

    /// Short scoreboard label shown in a batter's result badges.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Single => "単打",
            Self::Double => "二塁打",
            Self::Triple => "三塁打",
            Self::Homerun => "本塁打",
            Self::Walk => "四球",
            Self::Hbp => "死球",
            Self::Error => "エラー",
            Self::Strikeout => "三振",
            Self::Groundout => "ゴロ",
            Self::Flyout => "フライ",
            Self::Lineout => "ライナー",
            Self::Sacrifice => "犠打",
            Self::Fc => "野選",
            Self::Dp => "併殺",
            Self::SacFly => "犠飛",
        }
    }

    /// Banner text for the result overlay on display surfaces.
    pub const fn animation_label(self) -> &'static str {
        match self {
            Self::Single => "SINGLE",
            Self::Double => "DOUBLE",
            Self::Triple => "TRIPLE",
            Self::Homerun => "HOMERUN",
            Self::Walk => "WALK",
            Self::Hbp => "HIT BY PITCH",
            Self::Error => "ERROR",
            Self::Strikeout => "STRIKEOUT",
            Self::Groundout | Self::Flyout | Self::Lineout => "OUT",
            Self::Sacrifice => "SACRIFICE",
            Self::Fc => "FIELDER CHOICE",
            Self::Dp => "DOUBLE PLAY",
            Self::SacFly => "SAC FLY",
        }
    }
}

/// Maps a raw result code to its overlay banner.
///
/// Only exact wire names are recognized. Anything else, including a known
/// code in different case, falls back to the uppercased input.
pub fn format_result_for_animation(code: &str) -> String {
    use strum::IntoEnumIterator;

    match ResultCode::iter().find(|result| result.as_ref() == code) {
        Some(result) => result.animation_label().to_string(),
        None => code.to_uppercase(),
    }
}
