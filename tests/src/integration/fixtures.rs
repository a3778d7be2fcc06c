//! Shared world-building helpers for the integration flows.

use mc_state::adapters::memory::{
    MemoryAccountStore, MemoryForkController, MemoryPropertiesStore, MemoryProposalStore,
    MemoryWitnessStore,
};
use mc_state::{
    AccountStore, ChainConfig, ChainContext, DynamicPropertiesStore, ProposalStore, WitnessStore,
};
use shared_types::{Account, Address, Witness};

/// Installs a log subscriber so `RUST_LOG` surfaces controller activity
/// when a flow fails. Safe to call from every test.
#[cfg(test)]
pub fn init_tracing() {
    use tracing_subscriber::EnvFilter;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

/// One fully wired in-memory chain world.
pub struct World {
    pub accounts: MemoryAccountStore,
    pub properties: MemoryPropertiesStore,
    pub proposals: MemoryProposalStore,
    pub witnesses: MemoryWitnessStore,
    pub fork: MemoryForkController,
    pub config: ChainConfig,
}

impl World {
    /// A world with `count` active witnesses at addresses 1..=count, each
    /// holding a funded account, the head at time zero, and the first
    /// maintenance boundary one interval away.
    pub fn with_witnesses(count: u8) -> Self {
        let mut accounts = MemoryAccountStore::new();
        let mut witnesses = MemoryWitnessStore::new();
        for i in 1..=count {
            let address = Address::repeat(i);
            accounts.put(Account::with_balance(address, 1_000_000));
            witnesses.put(Witness::new(address, true));
        }

        let mut properties = MemoryPropertiesStore::new();
        properties.save_head_block_time(0);
        let interval = properties.maintenance_interval();
        properties.save_next_maintenance_time(interval);

        Self {
            accounts,
            properties,
            proposals: MemoryProposalStore::new(),
            witnesses,
            fork: MemoryForkController::new(),
            config: ChainConfig::default(),
        }
    }

    pub fn ctx(&mut self) -> ChainContext<'_> {
        ChainContext {
            accounts: &mut self.accounts,
            properties: &mut self.properties,
            proposals: &mut self.proposals,
            witnesses: &self.witnesses,
            schedule: &self.witnesses,
            fork: &self.fork,
            config: &self.config,
        }
    }

    pub fn witness(i: u8) -> Address {
        Address::repeat(i)
    }

    /// Records approvals out of band, standing in for the approval
    /// transaction path that lives outside this core.
    pub fn approve(&mut self, id: u64, approvers: &[u8]) {
        let mut proposal = self.proposals.get(id).unwrap().unwrap();
        for i in approvers {
            proposal.approvals.insert(Address::repeat(*i));
        }
        self.proposals.put(proposal).unwrap();
    }

    /// Moves chain time to the maintenance boundary at which proposal `id`
    /// expires, so the next controller pass resolves it.
    pub fn advance_to_expiration_of(&mut self, id: u64) {
        let expiration = self.proposals.get(id).unwrap().unwrap().expiration_time;
        self.properties.save_head_block_time(expiration);
        self.properties.save_next_maintenance_time(expiration);
    }
}
