//! Three-coin I Ching casting, interpretation, and divination sessions.
//!
//! Casting runs over an injectable [`CoinSource`], so a seeded or scripted
//! source makes every reading reproducible. Two engines answer requests: the
//! classic engine returns a name and a one-line reading, the enhanced engine
//! composes the full authored content. Both sit behind [`IChingAdapter`],
//! whose three operations never change shape, and [`Diviner`] layers the
//! optional enhanced detail on top.

pub mod adapter;
pub mod cast;
pub mod compose;
pub mod config;
pub mod engine;
pub mod error;
pub mod session;

pub use adapter::{IChingAdapter, format_divination_text};
pub use cast::{CastLine, CastResult, CoinSource, LineValue, cast_hexagram};
pub use compose::{Composition, LineNote, compose};
pub use config::OracleConfig;
pub use engine::{Engine, EngineKind, Reading};
pub use error::{OracleError, OracleResult};
pub use session::{
    DivinationInfo, DivinationRecord, DivinationStatistics, Diviner, EnhancedDetail,
    SystemStatus,
};
