//! In-memory store implementations.
//!
//! Deterministic `BTreeMap`-backed stores for tests and the simulator.
//! The production node plugs its persistence engine into the same ports.

use crate::domain::errors::StateError;
use crate::domain::fork::ForkMilestone;
use crate::domain::ledger::FEE_SINK_ADDRESS;
use crate::domain::params::ChainParameter;
use crate::domain::proposal::Proposal;
use crate::ports::{
    AccountStore, DynamicPropertiesStore, ForkController, ProposalStore, WitnessScheduleStore,
    WitnessStore,
};
use shared_types::{Account, Address, Witness};
use std::collections::{BTreeMap, BTreeSet};

// =============================================================================
// ACCOUNTS
// =============================================================================

/// In-memory account ledger, seeded with the fee-sink account.
pub struct MemoryAccountStore {
    accounts: BTreeMap<Address, Account>,
}

impl MemoryAccountStore {
    #[must_use]
    pub fn new() -> Self {
        let mut accounts = BTreeMap::new();
        accounts.insert(
            FEE_SINK_ADDRESS,
            Account::with_balance(FEE_SINK_ADDRESS, 0),
        );
        Self { accounts }
    }
}

impl Default for MemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl AccountStore for MemoryAccountStore {
    fn get(&self, address: &Address) -> Option<Account> {
        self.accounts.get(address).cloned()
    }

    fn put(&mut self, account: Account) {
        self.accounts.insert(account.address, account);
    }
}

// =============================================================================
// DYNAMIC PROPERTIES
// =============================================================================

/// In-memory dynamic chain properties.
pub struct MemoryPropertiesStore {
    params: BTreeMap<u32, i64>,
    authorities: BTreeMap<u32, Address>,
    total_supply: i64,
    latest_proposal_num: u64,
    next_maintenance_time: i64,
    head_block_time: i64,
}

impl MemoryPropertiesStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            params: BTreeMap::new(),
            authorities: BTreeMap::new(),
            total_supply: 0,
            latest_proposal_num: 0,
            next_maintenance_time: 0,
            head_block_time: 0,
        }
    }
}

impl Default for MemoryPropertiesStore {
    fn default() -> Self {
        Self::new()
    }
}

impl DynamicPropertiesStore for MemoryPropertiesStore {
    fn get_param(&self, param: ChainParameter) -> i64 {
        self.params
            .get(&param.id())
            .copied()
            .unwrap_or_else(|| param.default_value())
    }

    fn save_param(&mut self, param: ChainParameter, value: i64) {
        self.params.insert(param.id(), value);
    }

    fn get_authority(&self, param: ChainParameter) -> Option<Address> {
        self.authorities.get(&param.id()).copied()
    }

    fn save_authority(&mut self, param: ChainParameter, address: Address) {
        self.authorities.insert(param.id(), address);
    }

    fn total_supply(&self) -> i64 {
        self.total_supply
    }

    fn save_total_supply(&mut self, value: i64) {
        self.total_supply = value;
    }

    fn latest_proposal_num(&self) -> u64 {
        self.latest_proposal_num
    }

    fn save_latest_proposal_num(&mut self, num: u64) {
        self.latest_proposal_num = num;
    }

    fn next_maintenance_time(&self) -> i64 {
        self.next_maintenance_time
    }

    fn save_next_maintenance_time(&mut self, time: i64) {
        self.next_maintenance_time = time;
    }

    fn head_block_time(&self) -> i64 {
        self.head_block_time
    }

    fn save_head_block_time(&mut self, time: i64) {
        self.head_block_time = time;
    }
}

// =============================================================================
// PROPOSALS
// =============================================================================

/// In-memory proposal store.
pub struct MemoryProposalStore {
    proposals: BTreeMap<u64, Proposal>,
    /// Ids that report a backend failure on read, for fault-injection tests.
    failing_ids: BTreeSet<u64>,
}

impl MemoryProposalStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            proposals: BTreeMap::new(),
            failing_ids: BTreeSet::new(),
        }
    }

    /// Makes reads of `id` fail with a backend error until cleared.
    pub fn fail_reads_of(&mut self, id: u64) {
        self.failing_ids.insert(id);
    }

    pub fn clear_read_failures(&mut self) {
        self.failing_ids.clear();
    }
}

impl Default for MemoryProposalStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ProposalStore for MemoryProposalStore {
    fn get(&self, id: u64) -> Result<Option<Proposal>, StateError> {
        if self.failing_ids.contains(&id) {
            return Err(StateError::Backend(format!(
                "injected read failure for proposal {id}"
            )));
        }
        Ok(self.proposals.get(&id).cloned())
    }

    fn put(&mut self, proposal: Proposal) -> Result<(), StateError> {
        self.proposals.insert(proposal.id, proposal);
        Ok(())
    }
}

// =============================================================================
// WITNESSES
// =============================================================================

/// In-memory witness registry, doubling as the active schedule: the
/// schedule is every registered witness whose active flag is set, in
/// address order.
pub struct MemoryWitnessStore {
    witnesses: BTreeMap<Address, Witness>,
}

impl MemoryWitnessStore {
    #[must_use]
    pub fn new() -> Self {
        Self {
            witnesses: BTreeMap::new(),
        }
    }
}

impl Default for MemoryWitnessStore {
    fn default() -> Self {
        Self::new()
    }
}

impl WitnessStore for MemoryWitnessStore {
    fn get(&self, address: &Address) -> Option<Witness> {
        self.witnesses.get(address).cloned()
    }

    fn put(&mut self, witness: Witness) {
        self.witnesses.insert(witness.address, witness);
    }
}

impl WitnessScheduleStore for MemoryWitnessStore {
    fn active_witnesses(&self) -> Vec<Address> {
        self.witnesses
            .values()
            .filter(|witness| witness.is_active)
            .map(|witness| witness.address)
            .collect()
    }
}

// =============================================================================
// FORK CONTROLLER
// =============================================================================

/// Fork controller over an explicit activation set. Monotonic by
/// construction: milestones can be activated, never deactivated.
pub struct MemoryForkController {
    active: BTreeSet<ForkMilestone>,
}

impl MemoryForkController {
    #[must_use]
    pub fn new() -> Self {
        Self {
            active: BTreeSet::new(),
        }
    }

    pub fn activate(&mut self, milestone: ForkMilestone) {
        self.active.insert(milestone);
    }
}

impl Default for MemoryForkController {
    fn default() -> Self {
        Self::new()
    }
}

impl ForkController for MemoryForkController {
    fn passes(&self, milestone: ForkMilestone) -> bool {
        self.active.contains(&milestone)
    }
}
