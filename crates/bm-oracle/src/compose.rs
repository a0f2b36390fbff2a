//! Interpretation composer.
//!
//! Turns a hexagram and the positions of its changing lines into the text a
//! caller shows: one representative interpretation for compact consumers,
//! plus the full judgment, image, commentary and line notes for rich ones.
//! Sparse entries compose without error; missing parts come out empty.

use bm_core::Hexagram;
use serde::{Deserialize, Serialize};

/// The statement attached to one changing line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineNote {
    /// Line position, 1 (bottom) to 6 (top).
    pub position: u8,
    /// The line statement.
    pub text: String,
}

impl std::fmt::Display for LineNote {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line {}: {}", self.position, self.text)
    }
}

/// Text selected for one reading.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Composition {
    /// The judgment.
    pub judgment: String,
    /// The image.
    pub image: String,
    /// Commentary passages, possibly empty.
    pub commentary: Vec<String>,
    /// Notes for changing lines that have authored text, ascending.
    pub line_notes: Vec<LineNote>,
    /// The representative interpretation.
    pub chosen_interpretation: String,
    /// Every interpretation passage.
    pub interpretations: Vec<String>,
}

/// The representative interpretation: the first passage, or the judgment
/// when the entry has none.
pub fn representative(hexagram: &Hexagram) -> &'static str {
    hexagram
        .interpretations
        .first()
        .copied()
        .unwrap_or(hexagram.judgment)
}

/// Compose the reading text for `hexagram` with the given changing lines.
///
/// Positions may arrive unsorted or repeated; positions without authored
/// text are skipped.
pub fn compose(hexagram: &Hexagram, changing: &[u8]) -> Composition {
    let mut positions = changing.to_vec();
    positions.sort_unstable();
    positions.dedup();

    let line_notes = positions
        .into_iter()
        .filter_map(|position| {
            hexagram.line_text(position).map(|text| LineNote {
                position,
                text: text.to_string(),
            })
        })
        .collect();

    Composition {
        judgment: hexagram.judgment.to_string(),
        image: hexagram.image.to_string(),
        commentary: hexagram.commentary.iter().map(|s| s.to_string()).collect(),
        line_notes,
        chosen_interpretation: representative(hexagram).to_string(),
        interpretations: hexagram
            .interpretations
            .iter()
            .map(|s| s.to_string())
            .collect(),
    }
}
