//! Line casting by the three-coin method.
//!
//! Each of the six lines is built from three independent fair coin tosses.
//! The heads count picks the line value, the yin/yang polarity of the six
//! lines forms a [`LinePattern`], and the catalog's King Wen table turns the
//! pattern into a hexagram number.

pub mod line;

pub use line::{CastLine, LineValue};

use bm_core::{Catalog, LinePattern};
use rand::{Rng, RngCore};
use serde::Serialize;

/// A source of fair coin tosses.
///
/// Every random number generator is a coin source. Tests can implement this
/// directly to script exact outcomes.
pub trait CoinSource {
    /// Toss one coin; `true` is heads.
    fn toss(&mut self) -> bool;
}

impl<R: RngCore> CoinSource for R {
    fn toss(&mut self) -> bool {
        self.random_bool(0.5)
    }
}

/// The outcome of casting six lines.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CastResult {
    /// The lines, bottom (position 1) first.
    pub lines: [CastLine; 6],
    /// The primary pattern; changing status is ignored.
    pub pattern: LinePattern,
    /// King Wen number of the primary hexagram.
    pub number: u8,
    /// Positions of the changing lines, ascending.
    pub changing: Vec<u8>,
}

impl CastResult {
    /// Resolve six cast lines against the catalog.
    pub fn from_lines(lines: [CastLine; 6], catalog: &Catalog) -> Self {
        let pattern = LinePattern::from_lines(lines.map(|l| l.value.is_yang()));
        let changing = lines
            .iter()
            .filter(|l| l.value.is_changing())
            .map(|l| l.position)
            .collect();
        Self {
            lines,
            pattern,
            number: catalog.number_for(pattern),
            changing,
        }
    }

    /// Bit mask of the changing lines, bit 0 for the bottom line.
    ///
    /// Read from the line values, not from `changing`.
    pub fn changing_mask(&self) -> u8 {
        self.lines
            .iter()
            .enumerate()
            .filter(|(_, l)| l.value.is_changing())
            .fold(0u8, |acc, (i, _)| acc | (1 << i))
    }

    /// Whether any line is changing.
    pub fn has_changing_lines(&self) -> bool {
        self.lines.iter().any(|l| l.value.is_changing())
    }

    /// The pattern reached once every changing line has turned.
    ///
    /// `None` when no line is changing: the situation is static.
    pub fn relating_pattern(&self) -> Option<LinePattern> {
        self.has_changing_lines()
            .then(|| self.pattern.flipped(self.changing_mask()))
    }

    /// The line values, bottom first.
    pub fn values(&self) -> [LineValue; 6] {
        self.lines.map(|l| l.value)
    }
}

impl std::fmt::Display for CastResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Drawn top line first, the way a hexagram is read on the page.
        for (i, line) in self.lines.iter().rev().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{line}")?;
        }
        Ok(())
    }
}

/// Cast a single line at `position` from three coin tosses.
pub fn cast_line<C: CoinSource + ?Sized>(coins: &mut C, position: u8) -> CastLine {
    let heads = (0..3).map(|_| u8::from(coins.toss())).sum();
    CastLine {
        position,
        heads,
        value: LineValue::from_heads(heads),
    }
}

/// Cast six lines and resolve them to a hexagram.
pub fn cast_hexagram<C: CoinSource + ?Sized>(coins: &mut C, catalog: &Catalog) -> CastResult {
    let lines = [1, 2, 3, 4, 5, 6].map(|position| cast_line(coins, position));
    let result = CastResult::from_lines(lines, catalog);
    tracing::debug!(
        number = result.number,
        pattern = %result.pattern,
        changing = ?result.changing,
        "cast hexagram"
    );
    result
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;
    use std::collections::VecDeque;

    /// Coin source that replays a fixed sequence of tosses.
    pub(crate) struct ScriptedCoins(VecDeque<bool>);

    impl ScriptedCoins {
        /// Three tosses per line, bottom line first, giving `heads` heads each.
        pub(crate) fn from_heads(heads: [u8; 6]) -> Self {
            let tosses = heads
                .iter()
                .flat_map(|&h| (0..3).map(move |i| i < h))
                .collect();
            Self(tosses)
        }
    }

    impl CoinSource for ScriptedCoins {
        fn toss(&mut self) -> bool {
            self.0.pop_front().unwrap_or(false)
        }
    }

    fn catalog() -> &'static Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn all_heads_is_the_creative_turning_into_the_receptive() {
        let mut coins = ScriptedCoins::from_heads([3; 6]);
        let result = cast_hexagram(&mut coins, catalog());
        assert_eq!(result.number, 1);
        assert_eq!(result.pattern.bits(), 0b111_111);
        assert_eq!(result.changing, vec![1, 2, 3, 4, 5, 6]);
        let relating = result.relating_pattern().unwrap();
        assert_eq!(catalog().resolve(relating).number, 2);
    }

    #[test]
    fn stable_lines_have_no_relating_pattern() {
        // One head = young yang, two heads = young yin.
        let mut coins = ScriptedCoins::from_heads([1, 1, 1, 2, 2, 2]);
        let result = cast_hexagram(&mut coins, catalog());
        assert_eq!(result.number, 11);
        assert!(result.changing.is_empty());
        assert_eq!(result.relating_pattern(), None);
    }

    #[test]
    fn single_changing_line() {
        // Water over fire with an old yin in the second place.
        let mut coins = ScriptedCoins::from_heads([1, 0, 1, 2, 1, 2]);
        let result = cast_hexagram(&mut coins, catalog());
        assert_eq!(result.number, 63);
        assert_eq!(result.changing, vec![2]);
        assert_eq!(result.changing_mask(), 0b000_010);
        let relating = result.relating_pattern().unwrap();
        assert_eq!(relating.bits(), 0b010_111);
        assert_eq!(catalog().resolve(relating).number, 5);
    }

    #[test]
    fn relating_pattern_follows_line_values() {
        let mut coins = ScriptedCoins::from_heads([1, 0, 1, 2, 1, 2]);
        let mut result = cast_hexagram(&mut coins, catalog());
        let expected = result.relating_pattern();

        // Positions outside 1-6 in the changing list must not be shifted.
        result.changing = vec![0, 9, 200];
        assert_eq!(result.changing_mask(), 0b000_010);
        assert_eq!(result.relating_pattern(), expected);

        result.changing.clear();
        assert!(result.has_changing_lines());
        assert_eq!(result.relating_pattern(), expected);
    }

    #[test]
    fn line_positions_and_heads_are_recorded() {
        let mut coins = ScriptedCoins::from_heads([0, 1, 2, 3, 2, 1]);
        let result = cast_hexagram(&mut coins, catalog());
        let positions: Vec<u8> = result.lines.iter().map(|l| l.position).collect();
        let heads: Vec<u8> = result.lines.iter().map(|l| l.heads).collect();
        assert_eq!(positions, vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(heads, vec![0, 1, 2, 3, 2, 1]);
        assert_eq!(result.values()[0], LineValue::YinChanging);
    }

    #[test]
    fn seeded_casts_are_reproducible() {
        let mut a = StdRng::seed_from_u64(42);
        let mut b = StdRng::seed_from_u64(42);
        for _ in 0..20 {
            assert_eq!(
                cast_hexagram(&mut a, catalog()),
                cast_hexagram(&mut b, catalog())
            );
        }
    }

    #[test]
    fn line_distribution_matches_three_coins() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut counts = [0u32; 4];
        let casts: u32 = 2000;
        for _ in 0..casts {
            for v in cast_hexagram(&mut rng, catalog()).values() {
                counts[v.ritual_number() as usize - 6] += 1;
            }
        }
        let total = f64::from(casts * 6);
        let [six, seven, eight, nine] = counts.map(|c| f64::from(c) / total);

        assert!(six < seven && six < eight, "old yin should be rare: {counts:?}");
        assert!(nine < seven && nine < eight, "old yang should be rare: {counts:?}");
        for (observed, expected) in [(six, 0.125), (seven, 0.375), (eight, 0.375), (nine, 0.125)]
        {
            assert!(
                (observed - expected).abs() < 0.03,
                "observed {observed:.3}, expected {expected}"
            );
        }
    }

    #[test]
    fn every_pattern_is_reachable() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut seen = [false; 64];
        for _ in 0..5000 {
            seen[usize::from(cast_hexagram(&mut rng, catalog()).number) - 1] = true;
        }
        assert!(seen.iter().all(|&s| s), "unreached: {seen:?}");
    }

    #[test]
    fn display_draws_top_line_first() {
        let mut coins = ScriptedCoins::from_heads([3, 2, 2, 2, 2, 2]);
        let result = cast_hexagram(&mut coins, catalog());
        let drawn = result.to_string();
        let rows: Vec<&str> = drawn.lines().collect();
        assert_eq!(rows.len(), 6);
        assert!(rows[0].starts_with("6 "));
        assert!(rows[5].starts_with("1 ") && rows[5].ends_with("o (9)"));
    }
}
