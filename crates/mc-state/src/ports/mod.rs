//! Store and fork-controller abstractions.
//!
//! The node's persistence engine sits behind these ports; the core only
//! ever sees synchronous, typed access. In-memory implementations live in
//! [`crate::adapters::memory`].

mod fork;
mod stores;

pub use fork::ForkController;
pub use stores::{
    AccountStore, DynamicPropertiesStore, ProposalStore, WitnessScheduleStore, WitnessStore,
};
