//! Divination sessions.
//!
//! `Diviner` drives castings through an [`IChingAdapter`] and turns them into
//! caller-facing artifacts: a [`DivinationRecord`], an augmented query, or a
//! statistics snapshot. The base fields always come from the adapter's
//! narrowed tuple. When the enhanced engine is bound, [`EnhancedDetail`] is
//! projected from the same reading and attached alongside, never in place of
//! the base fields.

use std::fmt::Write;

use bm_core::Trigram;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::adapter::{IChingAdapter, format_divination_text};
use crate::cast::LineValue;
use crate::compose::LineNote;
use crate::config::OracleConfig;
use crate::engine::{EngineKind, Reading};
use crate::error::OracleResult;

/// Name of the casting method reported in statistics.
pub const CASTING_METHOD: &str = "three-coin";

/// A hexagram referenced by number and name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RelatedHexagram {
    /// King Wen number.
    pub number: u8,
    /// Hexagram name.
    pub name: String,
}

/// Fields only the enhanced engine provides.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EnhancedDetail {
    /// Chinese name, if authored.
    pub chinese_name: Option<String>,
    /// Compact glyph, upper trigram first.
    pub symbol: String,
    /// Upper trigram.
    pub upper: Trigram,
    /// Lower trigram.
    pub lower: Trigram,
    /// The judgment.
    pub judgment: String,
    /// The image.
    pub image: String,
    /// Commentary passages.
    pub commentary: Vec<String>,
    /// Every interpretation passage.
    pub interpretations: Vec<String>,
    /// Positions of changing lines, ascending. Empty for lookups.
    pub changing_lines: Vec<u8>,
    /// Statements for the changing lines that have one.
    pub line_notes: Vec<LineNote>,
    /// The cast line values, bottom first. Empty for lookups.
    pub lines: Vec<LineValue>,
    /// The hexagram the changing lines lead to.
    pub transformed: Option<RelatedHexagram>,
}

impl EnhancedDetail {
    /// Project the enhanced fields out of a reading.
    ///
    /// Returns `None` for readings from the classic engine.
    pub fn project(reading: &Reading) -> Option<Self> {
        let detail = reading.detail.as_ref()?;
        let hexagram = detail.hexagram;
        let composition = &detail.composition;
        Some(Self {
            chinese_name: hexagram.chinese_name.map(str::to_string),
            symbol: hexagram.symbol(),
            upper: hexagram.upper,
            lower: hexagram.lower,
            judgment: composition.judgment.clone(),
            image: composition.image.clone(),
            commentary: composition.commentary.clone(),
            interpretations: composition.interpretations.clone(),
            changing_lines: reading
                .cast
                .as_ref()
                .map(|c| c.changing.clone())
                .unwrap_or_default(),
            line_notes: composition.line_notes.clone(),
            lines: reading
                .cast
                .as_ref()
                .map(|c| c.values().to_vec())
                .unwrap_or_default(),
            transformed: detail.transformed.map(|h| RelatedHexagram {
                number: h.number,
                name: h.name.to_string(),
            }),
        })
    }
}

/// The result of one divination.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationRecord {
    /// Always `true`: a bound engine has no failure path.
    pub success: bool,
    /// King Wen number.
    pub hexagram_number: u8,
    /// Hexagram name.
    pub hexagram_name: String,
    /// The representative interpretation.
    pub interpretation: String,
    /// The display line, see [`format_divination_text`].
    pub formatted_text: String,
    /// When the lines were cast.
    pub cast_at: DateTime<Utc>,
    /// Whether the enhanced engine produced this record.
    #[serde(default)]
    pub enhanced: bool,
    /// Positions of the changing lines, ascending. Present only on enhanced
    /// records.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub changing_lines: Option<Vec<u8>>,
    /// Enhanced-only fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<EnhancedDetail>,
}

impl DivinationRecord {
    /// Whether the enhanced engine produced this record.
    pub fn is_enhanced(&self) -> bool {
        self.enhanced
    }
}

/// Hexagram information attached to an augmented query or a lookup.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationInfo {
    /// King Wen number.
    pub hexagram_number: u8,
    /// Hexagram name.
    pub hexagram_name: String,
    /// The representative interpretation.
    pub interpretation: String,
    /// The display line.
    pub formatted_text: String,
    /// Enhanced-only fields.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<EnhancedDetail>,
}

impl DivinationInfo {
    fn from_reading(reading: &Reading) -> Self {
        let (number, name, interpretation) = reading.narrow();
        Self {
            formatted_text: format_divination_text(number, &name, &interpretation),
            hexagram_number: number,
            hexagram_name: name,
            interpretation,
            detail: EnhancedDetail::project(reading),
        }
    }
}

/// Health indicator reported in statistics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SystemStatus {
    /// The catalog is loaded and verified.
    Operational,
}

impl std::fmt::Display for SystemStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Operational => write!(f, "operational"),
        }
    }
}

/// Static facts about the divination system.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DivinationStatistics {
    /// Number of hexagrams in the catalog.
    pub total_hexagrams: usize,
    /// Number of trigrams.
    pub total_trigrams: usize,
    /// Entries with full commentary, line texts and interpretations.
    pub fully_authored: usize,
    /// The bound engine.
    pub engine: EngineKind,
    /// How lines are cast.
    pub casting_method: String,
    /// Health indicator.
    pub system_status: SystemStatus,
}

/// A divination session over one adapter.
#[derive(Debug)]
pub struct Diviner {
    adapter: IChingAdapter,
}

impl Diviner {
    /// Create a session with the engine and seed from `config`.
    pub fn new(config: OracleConfig) -> OracleResult<Self> {
        Ok(Self {
            adapter: IChingAdapter::new(&config)?,
        })
    }

    /// Which engine is bound.
    pub fn engine_kind(&self) -> EngineKind {
        self.adapter.engine_kind()
    }

    /// Cast one hexagram and report it.
    pub fn perform_simple_divination(&mut self) -> DivinationRecord {
        let reading = self.adapter.cast_reading();
        let info = DivinationInfo::from_reading(&reading);
        tracing::info!(
            number = info.hexagram_number,
            engine = %self.engine_kind(),
            "divination performed"
        );
        DivinationRecord {
            success: true,
            hexagram_number: info.hexagram_number,
            hexagram_name: info.hexagram_name,
            interpretation: info.interpretation,
            formatted_text: info.formatted_text,
            cast_at: Utc::now(),
            enhanced: info.detail.is_some(),
            changing_lines: info.detail.as_ref().map(|d| d.changing_lines.clone()),
            detail: info.detail,
        }
    }

    /// Cast one hexagram and weave it into `query`.
    ///
    /// The returned text always contains `query` verbatim.
    pub fn divine_query_augmentation(&mut self, query: &str) -> (String, DivinationInfo) {
        let reading = self.adapter.cast_reading();
        let info = DivinationInfo::from_reading(&reading);
        let augmented = augment_query(query, &info);
        tracing::info!(
            number = info.hexagram_number,
            query_len = query.len(),
            "query augmented"
        );
        (augmented, info)
    }

    /// Look up hexagram `number` (1-64) without casting.
    pub fn hexagram_details(&self, number: u8) -> OracleResult<DivinationInfo> {
        let reading = self.adapter.lookup_reading(number)?;
        Ok(DivinationInfo::from_reading(&reading))
    }

    /// Catalog size, bound engine and health.
    pub fn get_divination_statistics(&self) -> DivinationStatistics {
        let catalog = self.adapter.catalog();
        DivinationStatistics {
            total_hexagrams: catalog.len(),
            total_trigrams: catalog.trigrams().len(),
            fully_authored: catalog.fully_authored(),
            engine: self.engine_kind(),
            casting_method: CASTING_METHOD.to_string(),
            system_status: SystemStatus::Operational,
        }
    }
}

/// Append the divination to a query.
fn augment_query(query: &str, info: &DivinationInfo) -> String {
    let mut out = format!(
        "{query}\n\n[Bibliomantic consultation]\n{}",
        info.formatted_text
    );
    if let Some(detail) = &info.detail {
        // Writing into a String cannot fail.
        let _ = write!(out, "\nJudgment: {}", detail.judgment);
        for note in &detail.line_notes {
            let _ = write!(out, "\n{note}");
        }
        if let Some(t) = &detail.transformed {
            let _ = write!(out, "\nMoving toward: Hexagram {} - {}", t.number, t.name);
        }
    }
    out
}
