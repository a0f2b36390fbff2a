//! The hexagram data model.

use serde::Serialize;

use crate::trigram::Trigram;

/// Minimum commentary passages for a fully authored entry.
pub const FULL_COMMENTARY: usize = 2;
/// Minimum general interpretations for a fully authored entry.
pub const FULL_INTERPRETATIONS: usize = 5;

/// Authored text for one changing line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LineText {
    /// Line position, 1 (bottom) to 6 (top).
    pub position: u8,
    /// The line statement.
    pub text: &'static str,
}

/// One of the 64 hexagrams with its authored content.
///
/// Entries are static: the catalog hands out `&'static Hexagram` references
/// and nothing ever mutates them. Richness varies between entries; only the
/// number, name, trigrams, judgment and image are guaranteed to be present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Hexagram {
    /// King Wen sequence number (1-64).
    pub number: u8,
    /// English name, e.g. "The Creative".
    pub name: &'static str,
    /// Chinese name, e.g. "乾".
    pub chinese_name: Option<&'static str>,
    /// The upper (outer) trigram.
    pub upper: Trigram,
    /// The lower (inner) trigram.
    pub lower: Trigram,
    /// The judgment text.
    pub judgment: &'static str,
    /// The image text.
    pub image: &'static str,
    /// Commentary passages, in reading order.
    pub commentary: &'static [&'static str],
    /// Changing-line statements keyed by position.
    pub changing_lines: &'static [LineText],
    /// General interpretation passages.
    pub interpretations: &'static [&'static str],
}

impl Hexagram {
    /// The six-bit line pattern: lower trigram in bits 0-2, upper in bits 3-5.
    pub fn pattern(&self) -> u8 {
        (self.upper.bits() << 3) | self.lower.bits()
    }

    /// The compact glyph, upper trigram symbol followed by the lower one.
    pub fn symbol(&self) -> String {
        [self.upper.symbol(), self.lower.symbol()].iter().collect()
    }

    /// The statement for a changing line, if one was authored.
    pub fn line_text(&self, position: u8) -> Option<&'static str> {
        self.changing_lines
            .iter()
            .find(|l| l.position == position)
            .map(|l| l.text)
    }

    /// Whether the entry carries the full set of commentary, line texts and
    /// interpretations.
    pub fn is_fully_authored(&self) -> bool {
        self.commentary.len() >= FULL_COMMENTARY
            && self.interpretations.len() >= FULL_INTERPRETATIONS
            && (1..=6).all(|p| self.line_text(p).is_some())
    }
}

impl std::fmt::Display for Hexagram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.number, self.name)?;
        if let Some(chinese) = self.chinese_name {
            write!(f, " ({chinese})")?;
        }
        Ok(())
    }
}
