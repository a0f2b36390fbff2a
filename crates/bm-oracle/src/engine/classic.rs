//! The classic engine: a name and a one-line reading per hexagram.

use bm_core::{Catalog, CoreError};

use super::{Engine, EngineKind, Reading};
use crate::cast::{CoinSource, cast_hexagram};
use crate::error::OracleResult;

/// One-line readings, indexed by King Wen number minus one.
pub const CLASSIC_READINGS: [&str; 64] = [
    "Pure creative force. Initiative and persistence bring success.",
    "Pure receptivity. Yield, support, and follow a good lead.",
    "Chaotic beginnings. Persevere and gather helpers.",
    "Inexperience. Seek instruction with a sincere mind.",
    "Nourished waiting. Patience until the time is right.",
    "Dispute. Seek mediation; do not push to the end.",
    "Discipline and organization under sound leadership.",
    "Union. Join with others and build mutual support.",
    "Small restraints. Gentle influence accumulates slowly.",
    "Careful conduct. Tread courteously in delicate matters.",
    "Harmony. Heaven and earth in accord; a time to flourish.",
    "Stagnation. Withdraw and keep your integrity.",
    "Fellowship. Shared aims bring people together.",
    "Great possession. Abundance held with modesty.",
    "Modesty. Humility brings lasting success.",
    "Enthusiasm. Inspire others toward a real goal.",
    "Following. Adapt to the time and serve what is right.",
    "Decay. Repair what has been spoiled.",
    "Approach. Favourable forces draw near; act while they rise.",
    "Contemplation. Observe clearly before acting.",
    "Biting through. Remove the obstacle decisively and fairly.",
    "Grace. Beauty adorns substance but cannot replace it.",
    "Splitting apart. Hold still while decline runs its course.",
    "Return. The light comes back; let it grow naturally.",
    "Innocence. Act from sincerity, not calculation.",
    "Great restraint. Store strength and knowledge for later.",
    "Nourishment. Mind what you take in and what you give.",
    "Great excess. The load is too heavy; change gently but decisively.",
    "The abyss. Flow through danger like water, keeping your nature.",
    "Clarity. Cling to what is right and your light holds steady.",
    "Attraction. Stay open and receptive to influence.",
    "Endurance. Keep your direction while renewing your means.",
    "Retreat. Withdraw strategically while you can.",
    "Great power. Use strength only in accord with what is right.",
    "Progress. Advance openly and share the credit.",
    "Darkened light. Hide your brightness and endure.",
    "The family. Order close to home makes order elsewhere.",
    "Opposition. Seek small agreements despite differences.",
    "Obstruction. Pause, seek counsel, and look within.",
    "Deliverance. Release tension, forgive, and move on.",
    "Decrease. Simplify and give up what is not essential.",
    "Increase. A time of gain; undertake worthwhile things.",
    "Breakthrough. State the truth plainly and resolve the matter.",
    "Temptation. Beware what seems small but grows fast.",
    "Gathering. Give the group a shared purpose.",
    "Pushing upward. Grow step by step, patiently.",
    "Exhaustion. Hold your purpose when words are not heard.",
    "The well. Return to the deep, shared source.",
    "Revolution. Change fundamentally when the time is ripe.",
    "The cauldron. Transform what is valuable into nourishment.",
    "Shock. Stay composed; the fright leaves you clearer.",
    "Stillness. Quiet the mind and cease needless action.",
    "Gradual progress. Take each step in its proper order.",
    "Subordinate position. Act with tact and a long view.",
    "Abundance. Enjoy the peak and act while it lasts.",
    "The wanderer. Be courteous and keep moving.",
    "Gentle penetration. Steady influence toward a clear aim.",
    "Joy. Share it freely from an inner steadiness.",
    "Dispersion. Dissolve rigidity and reunite around a larger aim.",
    "Limitation. Set boundaries that shape but do not choke.",
    "Inner truth. Sincerity reaches even the hardest hearts.",
    "Small excess. Attend to small matters; do not reach too high.",
    "After completion. Guard what is achieved against decline.",
    "Before completion. Success is near; cross with care.",
];

/// Engine that reports the catalog name and a one-line reading.
///
/// Casts still go through the three-coin method, but changing lines are not
/// reported.
#[derive(Debug, Clone, Copy)]
pub struct ClassicEngine {
    catalog: &'static Catalog,
}

impl ClassicEngine {
    /// Create a classic engine over a loaded catalog.
    pub fn new(catalog: &'static Catalog) -> Self {
        Self { catalog }
    }

    fn reading(&self, number: u8) -> OracleResult<Reading> {
        let hexagram = self.catalog.lookup(number)?;
        let interpretation = CLASSIC_READINGS
            .get(usize::from(number) - 1)
            .ok_or(CoreError::InvalidHexagramNumber(number))?;
        Ok(Reading {
            number,
            name: hexagram.name.to_string(),
            interpretation: interpretation.to_string(),
            cast: None,
            detail: None,
        })
    }
}

impl Engine for ClassicEngine {
    fn kind(&self) -> EngineKind {
        EngineKind::Classic
    }

    fn catalog(&self) -> &'static Catalog {
        self.catalog
    }

    fn cast(&self, coins: &mut dyn CoinSource) -> Reading {
        let cast = cast_hexagram(coins, self.catalog);
        let hexagram = self.catalog.resolve(cast.pattern);
        let index = usize::from(hexagram.number) - 1;
        Reading {
            number: hexagram.number,
            name: hexagram.name.to_string(),
            interpretation: CLASSIC_READINGS[index].to_string(),
            cast: Some(cast),
            detail: None,
        }
    }

    fn lookup(&self, number: u8) -> OracleResult<Reading> {
        tracing::debug!(number, engine = "classic", "hexagram lookup");
        self.reading(number)
    }
}
