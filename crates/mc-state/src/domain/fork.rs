//! Protocol-upgrade milestones.
//!
//! A milestone activates network-wide at some block version boundary and is
//! monotonic: once the fork controller reports it active, it stays active.
//! How activation is decided (block version counting across the witness
//! schedule) belongs to the block pipeline; this core only consumes the
//! answer through the [`crate::ports::ForkController`] port.

use serde::{Deserialize, Serialize};

/// Named protocol-upgrade milestones that gate chain parameters.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ForkMilestone {
    /// Introduced the total energy limit parameter.
    EnergyLimit,
    /// Second protocol revision; retires `TotalEnergyLimit` in favor of
    /// `TotalEnergyCurrentLimit`.
    ProtocolV2,
    /// Third protocol revision; multi-sign, adaptive energy, and the
    /// associated fee parameters.
    ProtocolV3,
}
