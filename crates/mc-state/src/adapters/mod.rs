//! Adapters implementing the state-layer ports.

pub mod memory;

pub use memory::{
    MemoryAccountStore, MemoryForkController, MemoryPropertiesStore, MemoryProposalStore,
    MemoryWitnessStore,
};
