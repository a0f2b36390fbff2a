//! Configuration for a divination session.

use crate::engine::EngineKind;

/// Configuration for an adapter or session.
#[derive(Debug, Clone, Default)]
pub struct OracleConfig {
    /// Which engine answers requests.
    pub engine: EngineKind,
    /// RNG seed for reproducible castings. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl OracleConfig {
    /// Set the engine.
    pub fn with_engine(mut self, engine: EngineKind) -> Self {
        self.engine = engine;
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Shorthand for binding the classic engine.
    pub fn classic(self) -> Self {
        self.with_engine(EngineKind::Classic)
    }
}
