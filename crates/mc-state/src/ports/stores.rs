use crate::domain::errors::StateError;
use crate::domain::ledger::FEE_SINK_ADDRESS;
use crate::domain::params::ChainParameter;
use crate::domain::proposal::Proposal;
use shared_types::{Account, Address, Witness};

/// Account ledger abstraction.
pub trait AccountStore {
    fn get(&self, address: &Address) -> Option<Account>;
    fn put(&mut self, account: Account);

    fn has(&self, address: &Address) -> bool {
        self.get(address).is_some()
    }

    /// The reserved fee-sink account's address.
    fn fee_sink_address(&self) -> Address {
        FEE_SINK_ADDRESS
    }
}

/// Dynamic chain properties: governance-tunable parameters plus the
/// chain-level counters the core reads and maintains.
///
/// `get_param` returns the parameter's genesis default while unset, so a
/// one-shot parameter reads as the 0 sentinel until activated.
pub trait DynamicPropertiesStore {
    fn get_param(&self, param: ChainParameter) -> i64;
    fn save_param(&mut self, param: ChainParameter, value: i64);

    /// Address-valued parameters (supply authorities). `None` until a
    /// proposal sets them; there is no implicit default authority.
    fn get_authority(&self, param: ChainParameter) -> Option<Address>;
    fn save_authority(&mut self, param: ChainParameter, address: Address);

    /// Explicitly persisted circulating-supply counter. Never recomputed
    /// by scanning accounts.
    fn total_supply(&self) -> i64;
    fn save_total_supply(&mut self, value: i64);

    fn latest_proposal_num(&self) -> u64;
    fn save_latest_proposal_num(&mut self, num: u64);

    /// The upcoming maintenance boundary, in ms. Governance time comes
    /// from here, never from the local clock.
    fn next_maintenance_time(&self) -> i64;
    fn save_next_maintenance_time(&mut self, time: i64);

    /// Timestamp of the head block, in ms.
    fn head_block_time(&self) -> i64;
    fn save_head_block_time(&mut self, time: i64);

    // Typed accessors for the parameters this core consults directly.

    fn maintenance_interval(&self) -> i64 {
        self.get_param(ChainParameter::MaintenanceInterval)
    }

    fn create_account_fee_in_system_contract(&self) -> i64 {
        self.get_param(ChainParameter::CreateAccountFeeInSystemContract)
    }

    fn allow_multi_sign(&self) -> i64 {
        self.get_param(ChainParameter::AllowMultiSign)
    }

    fn supply_increase_authority(&self) -> Option<Address> {
        self.get_authority(ChainParameter::SupplyIncreaseAuthority)
    }

    fn supply_decrease_authority(&self) -> Option<Address> {
        self.get_authority(ChainParameter::SupplyDecreaseAuthority)
    }
}

/// Proposal records by id. Reads can fail transiently (`StateError`); the
/// governance scan treats that as skip-and-continue, never as a retry loop.
pub trait ProposalStore {
    fn get(&self, id: u64) -> Result<Option<Proposal>, StateError>;
    fn put(&mut self, proposal: Proposal) -> Result<(), StateError>;
}

/// Witness registry (all registered witnesses, active or not).
pub trait WitnessStore {
    fn get(&self, address: &Address) -> Option<Witness>;
    fn put(&mut self, witness: Witness);

    fn has(&self, address: &Address) -> bool {
        self.get(address).is_some()
    }
}

/// The active witness production schedule, in stable order. Read fresh at
/// every vote tally; never snapshotted at proposal creation.
pub trait WitnessScheduleStore {
    fn active_witnesses(&self) -> Vec<Address>;
}
