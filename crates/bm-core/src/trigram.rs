//! The eight trigrams (bagua).
//!
//! A trigram is a stack of three lines. Its pattern is stored as three bits
//! with bit 0 as the bottom line and a set bit meaning an unbroken (yang)
//! line. Two trigrams stacked upper-over-lower form a hexagram.

use serde::{Deserialize, Serialize};

/// One of the eight trigrams, in King Wen's "Later Heaven" family order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Trigram {
    /// ☰ Qian, the Creative.
    Heaven,
    /// ☷ Kun, the Receptive.
    Earth,
    /// ☳ Zhen, the Arousing.
    Thunder,
    /// ☵ Kan, the Abysmal.
    Water,
    /// ☶ Gen, Keeping Still.
    Mountain,
    /// ☴ Xun, the Gentle.
    Wind,
    /// ☲ Li, the Clinging.
    Fire,
    /// ☱ Dui, the Joyous.
    Lake,
}

impl Trigram {
    /// All eight trigrams.
    pub const ALL: [Self; 8] = [
        Self::Heaven,
        Self::Earth,
        Self::Thunder,
        Self::Water,
        Self::Mountain,
        Self::Wind,
        Self::Fire,
        Self::Lake,
    ];

    /// The Unicode trigram glyph.
    pub fn symbol(self) -> char {
        match self {
            Self::Heaven => '☰',
            Self::Lake => '☱',
            Self::Fire => '☲',
            Self::Thunder => '☳',
            Self::Wind => '☴',
            Self::Water => '☵',
            Self::Mountain => '☶',
            Self::Earth => '☷',
        }
    }

    /// The English image name ("Heaven", "Lake", ...).
    pub fn name(self) -> &'static str {
        match self {
            Self::Heaven => "Heaven",
            Self::Earth => "Earth",
            Self::Thunder => "Thunder",
            Self::Water => "Water",
            Self::Mountain => "Mountain",
            Self::Wind => "Wind",
            Self::Fire => "Fire",
            Self::Lake => "Lake",
        }
    }

    /// The Chinese name of the trigram.
    pub fn chinese_name(self) -> &'static str {
        match self {
            Self::Heaven => "乾",
            Self::Earth => "坤",
            Self::Thunder => "震",
            Self::Water => "坎",
            Self::Mountain => "艮",
            Self::Wind => "巽",
            Self::Fire => "離",
            Self::Lake => "兌",
        }
    }

    /// The trigram's attribute, as the commentaries describe its character.
    pub fn attribute(self) -> &'static str {
        match self {
            Self::Heaven => "strong",
            Self::Earth => "devoted",
            Self::Thunder => "inciting movement",
            Self::Water => "dangerous",
            Self::Mountain => "resting",
            Self::Wind => "penetrating",
            Self::Fire => "light-giving",
            Self::Lake => "joyful",
        }
    }

    /// Three-bit line pattern, bottom line in bit 0, yang = 1.
    pub fn bits(self) -> u8 {
        match self {
            Self::Earth => 0b000,
            Self::Thunder => 0b001,
            Self::Water => 0b010,
            Self::Lake => 0b011,
            Self::Mountain => 0b100,
            Self::Fire => 0b101,
            Self::Wind => 0b110,
            Self::Heaven => 0b111,
        }
    }

    /// The trigram with the given three-bit pattern. Higher bits are ignored.
    pub fn from_bits(bits: u8) -> Self {
        match bits & 0b111 {
            0b000 => Self::Earth,
            0b001 => Self::Thunder,
            0b010 => Self::Water,
            0b011 => Self::Lake,
            0b100 => Self::Mountain,
            0b101 => Self::Fire,
            0b110 => Self::Wind,
            _ => Self::Heaven,
        }
    }

    /// Parse a trigram from its English name, Chinese name, or glyph.
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim();
        Self::ALL.into_iter().find(|t| {
            t.name().eq_ignore_ascii_case(s)
                || t.chinese_name() == s
                || s.chars().eq(std::iter::once(t.symbol()))
        })
    }
}

impl std::fmt::Display for Trigram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.symbol(), self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bits_roundtrip_every_trigram() {
        for t in Trigram::ALL {
            assert_eq!(Trigram::from_bits(t.bits()), t);
        }
    }

    #[test]
    fn bits_are_distinct() {
        let mut seen = [false; 8];
        for t in Trigram::ALL {
            assert!(!seen[t.bits() as usize], "{t} shares bits");
            seen[t.bits() as usize] = true;
        }
    }

    #[test]
    fn symbols_follow_unicode_block() {
        // U+2630..U+2637 encode yang as an unbroken line, bottom line last.
        for t in Trigram::ALL {
            let offset = t.symbol() as u32 - 0x2630;
            let expected = ((!t.bits().reverse_bits()) >> 5) & 0b111;
            assert_eq!(offset as u8, expected, "{t}");
        }
    }

    #[test]
    fn parse_accepts_names_and_glyphs() {
        assert_eq!(Trigram::parse("heaven"), Some(Trigram::Heaven));
        assert_eq!(Trigram::parse(" Lake "), Some(Trigram::Lake));
        assert_eq!(Trigram::parse("坎"), Some(Trigram::Water));
        assert_eq!(Trigram::parse("☶"), Some(Trigram::Mountain));
        assert_eq!(Trigram::parse("☶☶"), None);
        assert_eq!(Trigram::parse("volcano"), None);
    }

    #[test]
    fn display() {
        assert_eq!(Trigram::Heaven.to_string(), "☰ Heaven");
        assert_eq!(Trigram::Earth.to_string(), "☷ Earth");
    }
}
