//! Individual cast lines.

use serde::{Deserialize, Serialize};

/// The value of a single cast line.
///
/// Three coins are tossed per line. Counting heads as 3 and tails as 2, the
/// sum gives the traditional ritual number: 6 (old yin), 7 (young yang),
/// 8 (young yin) or 9 (old yang). Old lines are changing lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LineValue {
    /// Old yin (6): no heads. Probability 1/8.
    YinChanging,
    /// Young yang (7): one head. Probability 3/8.
    YangStable,
    /// Young yin (8): two heads. Probability 3/8.
    YinStable,
    /// Old yang (9): three heads. Probability 1/8.
    YangChanging,
}

impl LineValue {
    /// All four values in ritual-number order.
    pub const ALL: [Self; 4] = [
        Self::YinChanging,
        Self::YangStable,
        Self::YinStable,
        Self::YangChanging,
    ];

    /// The line produced by a given number of heads (0-3).
    ///
    /// Counts above 3 are treated as 3.
    pub fn from_heads(heads: u8) -> Self {
        match heads {
            0 => Self::YinChanging,
            1 => Self::YangStable,
            2 => Self::YinStable,
            _ => Self::YangChanging,
        }
    }

    /// The ritual number (6, 7, 8 or 9).
    pub fn ritual_number(self) -> u8 {
        match self {
            Self::YinChanging => 6,
            Self::YangStable => 7,
            Self::YinStable => 8,
            Self::YangChanging => 9,
        }
    }

    /// Whether the line is unbroken.
    pub fn is_yang(self) -> bool {
        matches!(self, Self::YangStable | Self::YangChanging)
    }

    /// Whether the line is about to turn into its opposite.
    pub fn is_changing(self) -> bool {
        matches!(self, Self::YinChanging | Self::YangChanging)
    }

    /// The line drawn as text, with a marker on changing lines.
    pub fn glyph(self) -> &'static str {
        match self {
            Self::YinChanging => "━━━   ━━━ x",
            Self::YangStable => "━━━━━━━━━",
            Self::YinStable => "━━━   ━━━",
            Self::YangChanging => "━━━━━━━━━ o",
        }
    }
}

impl std::fmt::Display for LineValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::YinChanging => write!(f, "old yin"),
            Self::YangStable => write!(f, "young yang"),
            Self::YinStable => write!(f, "young yin"),
            Self::YangChanging => write!(f, "old yang"),
        }
    }
}

/// One line of a casting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CastLine {
    /// Position, 1 (bottom) to 6 (top).
    pub position: u8,
    /// Heads among the three coins.
    pub heads: u8,
    /// The resulting line value.
    pub value: LineValue,
}

impl std::fmt::Display for CastLine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {} ({})",
            self.position,
            self.value.glyph(),
            self.value.ritual_number()
        )
    }
}
