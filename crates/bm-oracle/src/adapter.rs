//! The compatibility adapter.
//!
//! `IChingAdapter` exposes the same three operations whichever engine it is
//! bound to. Enhanced readings are narrowed to the base tuple here; the
//! optional detail is re-exposed only by the session one layer up.

use bm_core::{Catalog, CoreError};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::config::OracleConfig;
use crate::engine::{Engine, EngineKind, Reading};
use crate::error::OracleResult;

/// Format a reading as `"I Ching Hexagram {number} - {name}: {interpretation}"`.
pub fn format_divination_text(number: u8, name: &str, interpretation: &str) -> String {
    format!("I Ching Hexagram {number} - {name}: {interpretation}")
}

/// One fixed contract over either engine.
pub struct IChingAdapter {
    engine: Box<dyn Engine>,
    rng: StdRng,
}

impl IChingAdapter {
    /// Bind the engine named by `config` and seed its coin source.
    ///
    /// Fails only if the catalog does not pass its integrity check.
    pub fn new(config: &OracleConfig) -> OracleResult<Self> {
        let catalog = Catalog::load()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        tracing::debug!(engine = %config.engine, seeded = config.seed.is_some(), "adapter bound");
        Ok(Self {
            engine: config.engine.build(catalog),
            rng,
        })
    }

    /// Which engine is bound.
    pub fn engine_kind(&self) -> EngineKind {
        self.engine.kind()
    }

    /// The catalog behind the bound engine.
    pub fn catalog(&self) -> &'static Catalog {
        self.engine.catalog()
    }

    /// Cast a hexagram with three coins per line.
    pub fn generate_hexagram_by_coins(&mut self) -> (u8, String, String) {
        self.cast_reading().narrow()
    }

    /// Name and interpretation of hexagram `number` (1-64).
    pub fn get_hexagram_by_number(&self, number: u8) -> OracleResult<(String, String)> {
        let (_, name, interpretation) = self.lookup_reading(number)?.narrow();
        Ok((name, interpretation))
    }

    /// Format a reading for display.
    pub fn format_divination_text(&self, number: u8, name: &str, interpretation: &str) -> String {
        format_divination_text(number, name, interpretation)
    }

    pub(crate) fn cast_reading(&mut self) -> Reading {
        self.engine.cast(&mut self.rng)
    }

    pub(crate) fn lookup_reading(&self, number: u8) -> OracleResult<Reading> {
        if !(1..=64).contains(&number) {
            tracing::warn!(number, "hexagram number out of range");
            return Err(CoreError::InvalidHexagramNumber(number).into());
        }
        self.engine.lookup(number)
    }
}

impl std::fmt::Debug for IChingAdapter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("IChingAdapter")
            .field("engine", &self.engine.kind())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn adapter(kind: EngineKind) -> IChingAdapter {
        IChingAdapter::new(&OracleConfig::default().with_engine(kind).with_seed(42)).unwrap()
    }

    const BOTH: [EngineKind; 2] = [EngineKind::Classic, EngineKind::Enhanced];

    #[test]
    fn format_is_exact() {
        assert_eq!(
            format_divination_text(1, "The Creative", "Test interpretation"),
            "I Ching Hexagram 1 - The Creative: Test interpretation"
        );
        for kind in BOTH {
            assert_eq!(
                adapter(kind).format_divination_text(1, "Test", "Test interp"),
                "I Ching Hexagram 1 - Test: Test interp"
            );
        }
    }

    #[test]
    fn generate_returns_valid_tuple() {
        for kind in BOTH {
            let mut a = adapter(kind);
            for _ in 0..50 {
                let (number, name, interpretation) = a.generate_hexagram_by_coins();
                assert!((1..=64).contains(&number));
                assert!(!name.is_empty());
                assert!(interpretation.len() > 10);
            }
        }
    }

    #[test]
    fn lookup_the_creative() {
        for kind in BOTH {
            let (name, interpretation) = adapter(kind).get_hexagram_by_number(1).unwrap();
            assert_eq!(name, "The Creative");
            assert!(interpretation.to_lowercase().contains("creative force"));
        }
    }

    #[test]
    fn lookup_rejects_out_of_range() {
        for kind in BOTH {
            for n in [0, 65, 255] {
                let err = adapter(kind).get_hexagram_by_number(n).unwrap_err();
                assert!(err.is_invalid_input());
            }
        }
    }

    #[test]
    fn engines_agree_on_names() {
        let classic = adapter(EngineKind::Classic);
        let enhanced = adapter(EngineKind::Enhanced);
        for n in 1..=64 {
            let (a, _) = classic.get_hexagram_by_number(n).unwrap();
            let (b, _) = enhanced.get_hexagram_by_number(n).unwrap();
            assert_eq!(a, b);
        }
    }

    #[test]
    fn same_seed_casts_same_hexagram_on_both_engines() {
        let mut classic = adapter(EngineKind::Classic);
        let mut enhanced = adapter(EngineKind::Enhanced);
        for _ in 0..20 {
            let (a, name_a, _) = classic.generate_hexagram_by_coins();
            let (b, name_b, _) = enhanced.generate_hexagram_by_coins();
            assert_eq!(a, b);
            assert_eq!(name_a, name_b);
        }
    }

    #[test]
    fn bound_engine_is_fixed() {
        assert_eq!(adapter(EngineKind::Classic).engine_kind(), EngineKind::Classic);
        assert_eq!(adapter(EngineKind::Enhanced).engine_kind(), EngineKind::Enhanced);
    }

    #[test]
    fn debug_names_engine() {
        let s = format!("{:?}", adapter(EngineKind::Classic));
        assert!(s.contains("Classic"));
    }
}
