//! The hexagram catalog and the King Wen pattern table.
//!
//! A six-bit line pattern (bit 0 = bottom line, yang = 1) does not map to a
//! King Wen number by any arithmetic rule, so resolution goes through the
//! explicit [`KING_WEN_BY_PATTERN`] table. The catalog checks the table and
//! the authored content against each other once, on first load, and refuses
//! to serve anything if they disagree.

use std::sync::LazyLock;

use serde::{Deserialize, Serialize};

use crate::content;
use crate::error::{CoreError, CoreResult};
use crate::hexagram::Hexagram;
use crate::trigram::Trigram;

/// Number of hexagrams in the catalog.
pub const HEXAGRAM_COUNT: usize = 64;

/// King Wen number for every six-bit line pattern, indexed by the pattern.
///
/// Row `r` holds the patterns whose upper trigram has bits `r`; the column is
/// the lower trigram's bits.
pub const KING_WEN_BY_PATTERN: [u8; HEXAGRAM_COUNT] = [
    // lower: ☷   ☳   ☵   ☱   ☶   ☲   ☴   ☰
    2, 24, 7, 19, 15, 36, 46, 11, // upper ☷
    16, 51, 40, 54, 62, 55, 32, 34, // upper ☳
    8, 3, 29, 60, 39, 63, 48, 5, // upper ☵
    45, 17, 47, 58, 31, 49, 28, 43, // upper ☱
    23, 27, 4, 41, 52, 22, 18, 26, // upper ☶
    35, 21, 64, 38, 56, 30, 50, 14, // upper ☲
    20, 42, 59, 61, 53, 37, 57, 9, // upper ☴
    12, 25, 6, 10, 33, 13, 44, 1, // upper ☰
];

static CATALOG: LazyLock<CoreResult<Catalog>> =
    LazyLock::new(|| Catalog::build(content::all(), &KING_WEN_BY_PATTERN));

/// A validated six-bit line pattern.
///
/// Bit 0 is the bottom line; a set bit is a yang line. Every value of this
/// type is below 64, so resolving it through a loaded [`Catalog`] cannot fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct LinePattern(u8);

impl LinePattern {
    /// Mask of the six line bits.
    pub const MASK: u8 = 0b11_1111;

    /// Wrap raw bits, rejecting values above 63.
    pub fn new(bits: u8) -> CoreResult<Self> {
        if bits & !Self::MASK == 0 {
            Ok(Self(bits))
        } else {
            Err(CoreError::UnresolvedPattern(bits))
        }
    }

    /// Build a pattern from yang flags listed bottom to top.
    pub fn from_lines(yang: [bool; 6]) -> Self {
        let bits = yang
            .iter()
            .enumerate()
            .fold(0u8, |acc, (i, &is_yang)| acc | (u8::from(is_yang) << i));
        Self(bits)
    }

    /// Stack an upper trigram over a lower one.
    pub fn from_trigrams(upper: Trigram, lower: Trigram) -> Self {
        Self((upper.bits() << 3) | lower.bits())
    }

    /// Every pattern, 0 through 63.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=Self::MASK).map(Self)
    }

    /// The raw bits.
    pub fn bits(self) -> u8 {
        self.0
    }

    /// Whether the line at `position` (1-6) is yang.
    pub fn is_yang(self, position: u8) -> bool {
        (1..=6).contains(&position) && self.0 & (1 << (position - 1)) != 0
    }

    /// The pattern with the lines set in `mask` inverted.
    pub fn flipped(self, mask: u8) -> Self {
        Self((self.0 ^ mask) & Self::MASK)
    }

    /// The lower (inner) trigram.
    pub fn lower(self) -> Trigram {
        Trigram::from_bits(self.0)
    }

    /// The upper (outer) trigram.
    pub fn upper(self) -> Trigram {
        Trigram::from_bits(self.0 >> 3)
    }
}

impl TryFrom<u8> for LinePattern {
    type Error = CoreError;

    fn try_from(bits: u8) -> CoreResult<Self> {
        Self::new(bits)
    }
}

impl From<LinePattern> for u8 {
    fn from(pattern: LinePattern) -> Self {
        pattern.0
    }
}

impl std::fmt::Display for LinePattern {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:06b}", self.0)
    }
}

/// The 64 hexagrams, indexed by King Wen number and by line pattern.
#[derive(Debug)]
pub struct Catalog {
    entries: Vec<&'static Hexagram>,
    by_pattern: [u8; HEXAGRAM_COUNT],
}

impl Catalog {
    /// The process-wide catalog.
    ///
    /// Built and checked on first call; later calls return the same instance
    /// or the same integrity error.
    pub fn load() -> CoreResult<&'static Catalog> {
        CATALOG.as_ref().map_err(Clone::clone)
    }

    /// Build a catalog from entries in King Wen order and a pattern table,
    /// verifying that they are complete and agree with each other.
    pub fn build(
        entries: impl IntoIterator<Item = &'static Hexagram>,
        table: &[u8; HEXAGRAM_COUNT],
    ) -> CoreResult<Self> {
        let catalog = Self {
            entries: entries.into_iter().collect(),
            by_pattern: *table,
        };
        match catalog.verify() {
            Ok(()) => {
                tracing::info!(
                    hexagrams = catalog.entries.len(),
                    fully_authored = catalog.fully_authored(),
                    "hexagram catalog verified"
                );
                Ok(catalog)
            }
            Err(e) => {
                tracing::error!(error = %e, "hexagram catalog rejected");
                Err(e)
            }
        }
    }

    fn verify(&self) -> CoreResult<()> {
        if self.entries.len() != HEXAGRAM_COUNT {
            return Err(CoreError::Integrity(format!(
                "expected {HEXAGRAM_COUNT} hexagrams, found {}",
                self.entries.len()
            )));
        }

        for (i, h) in self.entries.iter().enumerate() {
            if usize::from(h.number) != i + 1 {
                return Err(CoreError::Integrity(format!(
                    "entry {} is numbered {}",
                    i + 1,
                    h.number
                )));
            }
            let mut seen = [false; 6];
            for line in h.changing_lines {
                if !(1..=6).contains(&line.position) {
                    return Err(CoreError::Integrity(format!(
                        "hexagram {} has a line statement at position {}",
                        h.number, line.position
                    )));
                }
                let slot = &mut seen[usize::from(line.position) - 1];
                if *slot {
                    return Err(CoreError::Integrity(format!(
                        "hexagram {} has two statements for line {}",
                        h.number, line.position
                    )));
                }
                *slot = true;
            }
        }

        let mut claimed = [false; HEXAGRAM_COUNT];
        for (bits, &number) in self.by_pattern.iter().enumerate() {
            if !(1..=64).contains(&number) {
                return Err(CoreError::Integrity(format!(
                    "pattern {bits:06b} maps to {number}"
                )));
            }
            let slot = &mut claimed[usize::from(number) - 1];
            if *slot {
                return Err(CoreError::Integrity(format!(
                    "hexagram {number} is claimed by more than one pattern"
                )));
            }
            *slot = true;
        }

        for h in &self.entries {
            let mapped = self.by_pattern[usize::from(h.pattern())];
            if mapped != h.number {
                return Err(CoreError::Integrity(format!(
                    "hexagram {} ({}{}) resolves to {mapped} by pattern",
                    h.number,
                    h.upper.symbol(),
                    h.lower.symbol()
                )));
            }
        }

        Ok(())
    }

    /// Number of hexagrams.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog is empty. A verified catalog never is.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a hexagram by King Wen number.
    pub fn lookup(&self, number: u8) -> CoreResult<&'static Hexagram> {
        if !(1..=64).contains(&number) {
            tracing::warn!(number, "rejected hexagram lookup");
            return Err(CoreError::InvalidHexagramNumber(number));
        }
        Ok(self.entries[usize::from(number) - 1])
    }

    /// Look up a hexagram by raw six-bit pattern.
    pub fn lookup_by_pattern(&self, bits: u8) -> CoreResult<&'static Hexagram> {
        Ok(self.resolve(LinePattern::new(bits)?))
    }

    /// Resolve a validated pattern.
    pub fn resolve(&self, pattern: LinePattern) -> &'static Hexagram {
        let number = self.number_for(pattern);
        self.entries[usize::from(number) - 1]
    }

    /// The King Wen number for a pattern.
    pub fn number_for(&self, pattern: LinePattern) -> u8 {
        self.by_pattern[usize::from(pattern.bits())]
    }

    /// All hexagrams in King Wen order.
    pub fn iter(&self) -> impl Iterator<Item = &'static Hexagram> + '_ {
        self.entries.iter().copied()
    }

    /// The eight trigrams.
    pub fn trigrams(&self) -> &'static [Trigram] {
        &Trigram::ALL
    }

    /// How many entries carry the full set of authored content.
    pub fn fully_authored(&self) -> usize {
        self.entries.iter().filter(|h| h.is_fully_authored()).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn catalog() -> &'static Catalog {
        Catalog::load().unwrap()
    }

    #[test]
    fn loads_sixty_four() {
        assert_eq!(catalog().len(), 64);
        assert!(!catalog().is_empty());
        assert_eq!(catalog().trigrams().len(), 8);
    }

    #[test]
    fn lookup_returns_matching_number() {
        for n in 1..=64u8 {
            assert_eq!(catalog().lookup(n).unwrap().number, n);
        }
    }

    #[test]
    fn lookup_rejects_out_of_range() {
        assert_eq!(
            catalog().lookup(0).unwrap_err(),
            CoreError::InvalidHexagramNumber(0)
        );
        assert_eq!(
            catalog().lookup(65).unwrap_err(),
            CoreError::InvalidHexagramNumber(65)
        );
    }

    #[test]
    fn pattern_table_is_a_bijection() {
        let mut numbers: Vec<u8> = LinePattern::all()
            .map(|p| catalog().lookup_by_pattern(p.bits()).unwrap().number)
            .collect();
        numbers.sort_unstable();
        assert_eq!(numbers, (1..=64).collect::<Vec<u8>>());
    }

    #[test]
    fn lookup_by_pattern_rejects_seven_bits() {
        assert_eq!(
            catalog().lookup_by_pattern(64).unwrap_err(),
            CoreError::UnresolvedPattern(64)
        );
    }

    #[test]
    fn well_known_patterns() {
        assert_eq!(catalog().lookup_by_pattern(0b111_111).unwrap().number, 1);
        assert_eq!(catalog().lookup_by_pattern(0b000_000).unwrap().number, 2);
        assert_eq!(catalog().lookup_by_pattern(0b000_111).unwrap().number, 11);
        assert_eq!(catalog().lookup_by_pattern(0b111_000).unwrap().number, 12);
        assert_eq!(catalog().lookup_by_pattern(0b010_101).unwrap().number, 63);
        assert_eq!(catalog().lookup_by_pattern(0b101_010).unwrap().number, 64);
    }

    #[test]
    fn entry_trigrams_agree_with_pattern() {
        for h in catalog().iter() {
            let p = LinePattern::from_trigrams(h.upper, h.lower);
            assert_eq!(p.upper(), h.upper);
            assert_eq!(p.lower(), h.lower);
            assert_eq!(catalog().resolve(p).number, h.number);
        }
    }

    #[test]
    fn counts_fully_authored() {
        assert_eq!(catalog().fully_authored(), 6);
    }

    #[test]
    fn build_rejects_missing_entries() {
        let err = Catalog::build(content::UPPER_CANON.iter(), &KING_WEN_BY_PATTERN)
            .unwrap_err();
        assert!(matches!(err, CoreError::Integrity(msg) if msg.contains("found 30")));
    }

    #[test]
    fn build_rejects_duplicate_table_entry() {
        let mut table = KING_WEN_BY_PATTERN;
        table[0] = 1;
        let err = Catalog::build(content::all(), &table).unwrap_err();
        assert!(matches!(err, CoreError::Integrity(msg) if msg.contains("more than one")));
    }

    #[test]
    fn build_rejects_swapped_table_entries() {
        let mut table = KING_WEN_BY_PATTERN;
        table.swap(0, 63);
        let err = Catalog::build(content::all(), &table).unwrap_err();
        assert!(matches!(err, CoreError::Integrity(msg) if msg.contains("by pattern")));
    }

    #[test]
    fn build_rejects_out_of_order_entries() {
        let entries = content::LOWER_CANON.iter().chain(content::UPPER_CANON.iter());
        let err = Catalog::build(entries, &KING_WEN_BY_PATTERN).unwrap_err();
        assert!(matches!(err, CoreError::Integrity(msg) if msg.contains("numbered 31")));
    }

    #[test]
    fn line_pattern_from_lines() {
        let p = LinePattern::from_lines([true, false, false, false, false, false]);
        assert_eq!(p.bits(), 0b000_001);
        assert!(p.is_yang(1));
        assert!(!p.is_yang(2));
        assert!(!p.is_yang(7));
        assert_eq!(p.to_string(), "000001");
    }

    #[test]
    fn line_pattern_serde_rejects_large_values() {
        let p: LinePattern = serde_json::from_str("63").unwrap();
        assert_eq!(p.bits(), 63);
        assert!(serde_json::from_str::<LinePattern>("64").is_err());
    }

    proptest! {
        #[test]
        fn every_six_bit_pattern_resolves(bits in 0u8..64) {
            let h = catalog().lookup_by_pattern(bits).unwrap();
            prop_assert_eq!(h.pattern(), bits);
        }

        #[test]
        fn flipping_twice_is_identity(bits in 0u8..64, mask in 0u8..64) {
            let p = LinePattern::new(bits).unwrap();
            prop_assert_eq!(p.flipped(mask).flipped(mask), p);
        }

        #[test]
        fn any_number_past_64_is_invalid(n in 65u8..=255) {
            prop_assert_eq!(
                catalog().lookup(n).unwrap_err(),
                CoreError::InvalidHexagramNumber(n)
            );
        }
    }
}
