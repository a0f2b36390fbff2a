//! Divination engines.
//!
//! An [`Engine`] answers two requests: cast a new hexagram, or look one up by
//! number. Both return a [`Reading`]. The classic engine fills in only the
//! base fields; the enhanced engine also attaches the composed content in
//! [`Reading::detail`]. Which engine runs is decided once, from
//! [`EngineKind`], when the adapter is built.

pub mod classic;
pub mod enhanced;

pub use classic::ClassicEngine;
pub use enhanced::EnhancedEngine;

use bm_core::{Catalog, Hexagram};
use serde::{Deserialize, Serialize};

use crate::cast::{CastResult, CoinSource};
use crate::compose::Composition;
use crate::error::OracleResult;

/// Which engine variant answers requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineKind {
    /// Name and a one-line reading per hexagram.
    Classic,
    /// Full authored content, changing lines, and the transformed hexagram.
    #[default]
    Enhanced,
}

impl EngineKind {
    /// Parse an engine kind from a user-supplied string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "classic" | "minimal" | "original" => Some(Self::Classic),
            "enhanced" | "rich" | "full" => Some(Self::Enhanced),
            _ => None,
        }
    }

    /// Build the engine for this kind over a loaded catalog.
    pub fn build(self, catalog: &'static Catalog) -> Box<dyn Engine> {
        match self {
            Self::Classic => Box::new(ClassicEngine::new(catalog)),
            Self::Enhanced => Box::new(EnhancedEngine::new(catalog)),
        }
    }
}

impl std::fmt::Display for EngineKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Classic => write!(f, "classic"),
            Self::Enhanced => write!(f, "enhanced"),
        }
    }
}

/// Content the enhanced engine attaches to a reading.
#[derive(Debug, Clone)]
pub struct ReadingDetail {
    /// The primary hexagram.
    pub hexagram: &'static Hexagram,
    /// The composed text.
    pub composition: Composition,
    /// The hexagram reached once the changing lines turn, if any change.
    pub transformed: Option<&'static Hexagram>,
}

/// An engine's answer to a cast or lookup.
#[derive(Debug, Clone)]
pub struct Reading {
    /// King Wen number.
    pub number: u8,
    /// Hexagram name.
    pub name: String,
    /// The representative interpretation.
    pub interpretation: String,
    /// The lines that produced the reading; `None` for lookups.
    pub cast: Option<CastResult>,
    /// Composed content; only the enhanced engine fills this in.
    pub detail: Option<ReadingDetail>,
}

impl Reading {
    /// Narrow to the `(number, name, interpretation)` contract.
    pub fn narrow(&self) -> (u8, String, String) {
        (self.number, self.name.clone(), self.interpretation.clone())
    }
}

/// A divination engine.
pub trait Engine: Send + Sync {
    /// Which variant this is.
    fn kind(&self) -> EngineKind;

    /// The catalog the engine reads from.
    fn catalog(&self) -> &'static Catalog;

    /// Cast six lines with `coins` and read the result.
    fn cast(&self, coins: &mut dyn CoinSource) -> Reading;

    /// Read hexagram `number` without casting.
    fn lookup(&self, number: u8) -> OracleResult<Reading>;
}
