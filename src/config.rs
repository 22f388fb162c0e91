use serde::{Deserialize, Serialize};

/// Tuning knobs for batch scoring.
///
/// Serde-friendly so hosts can embed it in their own config files; every
/// field has a default, so an empty table is a valid config.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EngineConfig {
    /// Candidate count at which a batch moves to the rayon pool when the
    /// `parallel` feature is enabled. Below it the batch stays on the
    /// calling thread; fork/join overhead beats the win on small batches.
    /// Has no effect without the feature.
    #[serde(default = "EngineConfig::default_parallel_threshold")]
    pub parallel_threshold: usize,
}

impl EngineConfig {
    pub(crate) fn default_parallel_threshold() -> usize {
        256
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: Self::default_parallel_threshold(),
        }
    }
}
