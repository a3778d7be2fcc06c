//! Node-operator configuration for the state-transition core.

use serde::{Deserialize, Serialize};

/// Chain-level configuration.
///
/// Only values that are genuinely operator-chosen live here; everything a
/// proposal can tune is a chain parameter in the dynamic properties store.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub struct ChainConfig {
    /// How long a proposal stays open for approvals before the maintenance
    /// pass resolves it, in milliseconds. The effective expiration is
    /// rounded up to the next maintenance boundary.
    pub proposal_expiration_ms: i64,
}

impl Default for ChainConfig {
    fn default() -> Self {
        Self {
            // 3 days
            proposal_expiration_ms: 259_200_000,
        }
    }
}
