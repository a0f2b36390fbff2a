//! The enhanced engine: composed content, changing lines, and the
//! transformed hexagram.

use bm_core::{Catalog, Hexagram};

use super::{Engine, EngineKind, Reading, ReadingDetail};
use crate::cast::{CastResult, CoinSource, cast_hexagram};
use crate::compose::compose;
use crate::error::OracleResult;

/// Engine that reads the full authored content of the catalog.
#[derive(Debug, Clone, Copy)]
pub struct EnhancedEngine {
    catalog: &'static Catalog,
}

impl EnhancedEngine {
    /// Create an enhanced engine over a loaded catalog.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    fn read(&self, hexagram: &'static Hexagram, cast: Option<CastResult>) -> Reading {
        let changing = cast.as_ref().map(|c| c.changing.as_slice()).unwrap_or(&[]);
        let composition = compose(hexagram, changing);
        let transformed = cast
            .as_ref()
            .and_then(CastResult::relating_pattern)
            .map(|p| self.catalog.resolve(p));

        Reading {
            number: hexagram.number,
            name: hexagram.name.to_string(),
            interpretation: composition.chosen_interpretation.clone(),
            cast,
            detail: Some(ReadingDetail {
                hexagram,
                composition,
                transformed,
            }),
        }
    }
}

impl Engine for EnhancedEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Enhanced
    }

    fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    fn cast(&self, coins: &mut dyn CoinSource) -> Reading {
        let cast = cast_hexagram(coins, self.catalog);
        let hexagram = self.catalog.resolve(cast.pattern);
        self.read(hexagram, Some(cast))
    }

    fn lookup(&self, number: u8) -> OracleResult<Reading> {
        tracing::debug!(number, engine = "enhanced", "hexagram lookup");
        let hexagram = self.catalog.lookup(number)?;
        Ok(self.read(hexagram, None))
    }
}
