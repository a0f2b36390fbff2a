//! Authored hexagram content.
//!
//! The text is split the traditional way: the upper canon holds hexagrams
//! 1-30 and the lower canon 31-64. A handful of entries are fully authored
//! (commentary, all six line statements, five or more interpretations); the
//! rest carry a judgment, an image and a single interpretation, built with
//! [`brief`].

mod lower_canon;
mod upper_canon;

pub use lower_canon::LOWER_CANON;
pub use upper_canon::UPPER_CANON;

use crate::hexagram::Hexagram;
use crate::trigram::Trigram;

/// Every authored entry, in King Wen order.
pub fn all() -> impl Iterator<Item = &'static Hexagram> {
    UPPER_CANON.iter().chain(LOWER_CANON.iter())
}

/// Build an entry that has only the required fields and one interpretation.
#[allow(clippy::too_many_arguments)]
pub(crate) const fn brief(
    number: u8,
    name: &'static str,
    chinese_name: &'static str,
    upper: Trigram,
    lower: Trigram,
    judgment: &'static str,
    image: &'static str,
    interpretations: &'static [&'static str],
) -> Hexagram {
    Hexagram {
        number,
        name,
        chinese_name: Some(chinese_name),
        upper,
        lower,
        judgment,
        image,
        commentary: &[],
        changing_lines: &[],
        interpretations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canons_split_at_thirty() {
        assert_eq!(UPPER_CANON.len(), 30);
        assert_eq!(LOWER_CANON.len(), 34);
        assert_eq!(UPPER_CANON[29].number, 30);
        assert_eq!(LOWER_CANON[0].number, 31);
    }

    #[test]
    fn every_entry_has_required_text() {
        for h in all() {
            assert!(!h.name.is_empty(), "hexagram {} has no name", h.number);
            assert!(!h.judgment.is_empty(), "{h} has no judgment");
            assert!(!h.image.is_empty(), "{h} has no image");
            assert!(!h.interpretations.is_empty(), "{h} has no interpretation");
        }
    }

    #[test]
    fn the_creative_is_fully_authored() {
        let h = &UPPER_CANON[0];
        assert_eq!(h.name, "The Creative");
        assert_eq!(h.chinese_name, Some("乾"));
        assert_eq!(h.symbol(), "☰☰");
        assert!(h.judgment.to_lowercase().contains("perseverance"));
        assert!(h.image.to_lowercase().contains("heaven"));
        assert!(h.interpretations.len() >= 5);
        assert_eq!(h.changing_lines.len(), 6);
        assert!(h.commentary.len() >= 2);
        assert!(h.interpretations[0].to_lowercase().contains("creative force"));
    }

    #[test]
    fn fully_authored_entries() {
        let full: Vec<u8> = all()
            .filter(|h| h.is_fully_authored())
            .map(|h| h.number)
            .collect();
        assert_eq!(full, vec![1, 2, 11, 12, 63, 64]);
    }
}
