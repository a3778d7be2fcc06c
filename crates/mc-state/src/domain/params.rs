//! # Chain Parameter Registry
//!
//! Every governance-tunable value is identified by a small contiguous id.
//! One declarative rule table ([`PARAM_RULES`]) drives both proposal-time
//! validation and approval-time application, so the two paths can never
//! diverge. Rules carry numeric bounds, activation-flag restrictions,
//! one-shot guards, version gates, preconditions on other parameters, and
//! the authority-address decoding rules.

use crate::context::ChainContext;
use crate::domain::errors::ParamError;
use crate::domain::fork::ForkMilestone;
use serde::{Deserialize, Serialize};
use shared_types::Address;
use tracing::debug;

// =============================================================================
// PARAMETER IDS
// =============================================================================

/// Governance-tunable chain parameters, in id order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[repr(u32)]
pub enum ChainParameter {
    MaintenanceInterval = 0,
    AccountUpgradeCost = 1,
    CreateAccountFee = 2,
    TransactionFee = 3,
    AssetIssueFee = 4,
    WitnessPayPerBlock = 5,
    WitnessStandbyAllowance = 6,
    CreateAccountFeeInSystemContract = 7,
    CreateAccountBandwidthRate = 8,
    AllowContractCreation = 9,
    RemoveGenesisWitnessPower = 10,
    EnergyFee = 11,
    ExchangeCreateFee = 12,
    MaxCpuTimeOfOneTx = 13,
    AllowAccountNameUpdate = 14,
    AllowDuplicateAssetNames = 15,
    AllowResourceDelegation = 16,
    TotalEnergyLimit = 17,
    AllowVmAssetTransfer = 18,
    TotalEnergyCurrentLimit = 19,
    AllowMultiSign = 20,
    AllowAdaptiveEnergy = 21,
    AccountPermissionUpdateFee = 22,
    MultiSignFee = 23,
    SupplyIncreaseAuthority = 24,
    SupplyDecreaseAuthority = 25,
}

impl ChainParameter {
    /// Number of defined parameters; ids are contiguous in `0..COUNT`.
    pub const COUNT: u32 = 26;

    /// The numeric id of this parameter.
    #[must_use]
    pub const fn id(self) -> u32 {
        self as u32
    }

    /// Looks a parameter up by id.
    #[must_use]
    pub fn from_id(id: u32) -> Option<Self> {
        PARAM_RULES.get(id as usize).map(|rule| rule.param)
    }

    /// The validation/application rule for this parameter.
    #[must_use]
    pub fn rule(self) -> &'static ParamRule {
        &PARAM_RULES[self.id() as usize]
    }

    /// Genesis default for an integer parameter. Activation flags and
    /// one-shot parameters start at the 0 sentinel.
    #[must_use]
    pub fn default_value(self) -> i64 {
        match self {
            // 6 hours
            ChainParameter::MaintenanceInterval => 21_600_000,
            ChainParameter::MaxCpuTimeOfOneTx => 50,
            _ => 0,
        }
    }
}

// =============================================================================
// RULE TABLE
// =============================================================================

/// Shape of a parameter's value.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParamKind {
    /// Plain integer with inclusive bounds.
    Integer { min: i64, max: i64 },
    /// Feature flag: the only proposable value is the literal 1.
    ActivationFlag,
    /// Hex-encoded address of an existing account.
    AuthorityAddress,
}

/// One row of the rule table.
#[derive(Clone, Copy, Debug)]
pub struct ParamRule {
    pub param: ChainParameter,
    pub kind: ParamKind,
    /// Once set to a non-zero value, the parameter can never change again.
    /// Validation rejects new proposals; application is check-and-set.
    pub one_shot: bool,
    /// Milestone that must be active before the parameter may be proposed.
    pub version_gate: Option<ForkMilestone>,
    /// Milestone after which the parameter may no longer be proposed.
    pub retired_after: Option<ForkMilestone>,
    /// Another parameter that must currently hold `1` first.
    pub requires_active: Option<ChainParameter>,
}

const fn integer(param: ChainParameter, min: i64, max: i64) -> ParamRule {
    ParamRule {
        param,
        kind: ParamKind::Integer { min, max },
        one_shot: false,
        version_gate: None,
        retired_after: None,
        requires_active: None,
    }
}

const fn flag(param: ChainParameter) -> ParamRule {
    ParamRule {
        param,
        kind: ParamKind::ActivationFlag,
        one_shot: false,
        version_gate: None,
        retired_after: None,
        requires_active: None,
    }
}

const FEE_MAX: i64 = 100_000_000_000_000_000;
const SMALL_FEE_MAX: i64 = 100_000_000_000;

/// The rule table, indexed by parameter id.
pub static PARAM_RULES: [ParamRule; ChainParameter::COUNT as usize] = [
    // 0: bounded between 81 seconds and one day
    integer(ChainParameter::MaintenanceInterval, 81_000, 86_400_000),
    integer(ChainParameter::AccountUpgradeCost, 0, FEE_MAX),
    integer(ChainParameter::CreateAccountFee, 0, FEE_MAX),
    integer(ChainParameter::TransactionFee, 0, FEE_MAX),
    integer(ChainParameter::AssetIssueFee, 0, FEE_MAX),
    integer(ChainParameter::WitnessPayPerBlock, 0, FEE_MAX),
    integer(ChainParameter::WitnessStandbyAllowance, 0, FEE_MAX),
    integer(ChainParameter::CreateAccountFeeInSystemContract, 0, FEE_MAX),
    integer(ChainParameter::CreateAccountBandwidthRate, 0, FEE_MAX),
    flag(ChainParameter::AllowContractCreation),
    // 10: one-shot; stripping the genesis witnesses of their standing power
    // happens at most once in a chain's lifetime
    ParamRule {
        one_shot: true,
        ..flag(ChainParameter::RemoveGenesisWitnessPower)
    },
    integer(ChainParameter::EnergyFee, i64::MIN, i64::MAX),
    integer(ChainParameter::ExchangeCreateFee, i64::MIN, i64::MAX),
    integer(ChainParameter::MaxCpuTimeOfOneTx, 10, 100),
    flag(ChainParameter::AllowAccountNameUpdate),
    flag(ChainParameter::AllowDuplicateAssetNames),
    flag(ChainParameter::AllowResourceDelegation),
    // 17: only proposable inside the EnergyLimit..ProtocolV2 window
    ParamRule {
        version_gate: Some(ForkMilestone::EnergyLimit),
        retired_after: Some(ForkMilestone::ProtocolV2),
        ..integer(ChainParameter::TotalEnergyLimit, 0, FEE_MAX)
    },
    ParamRule {
        requires_active: Some(ChainParameter::AllowDuplicateAssetNames),
        ..flag(ChainParameter::AllowVmAssetTransfer)
    },
    ParamRule {
        version_gate: Some(ForkMilestone::ProtocolV2),
        ..integer(ChainParameter::TotalEnergyCurrentLimit, 0, FEE_MAX)
    },
    ParamRule {
        one_shot: true,
        version_gate: Some(ForkMilestone::ProtocolV3),
        ..flag(ChainParameter::AllowMultiSign)
    },
    ParamRule {
        one_shot: true,
        version_gate: Some(ForkMilestone::ProtocolV3),
        ..flag(ChainParameter::AllowAdaptiveEnergy)
    },
    ParamRule {
        version_gate: Some(ForkMilestone::ProtocolV3),
        ..integer(ChainParameter::AccountPermissionUpdateFee, 0, SMALL_FEE_MAX)
    },
    ParamRule {
        version_gate: Some(ForkMilestone::ProtocolV3),
        ..integer(ChainParameter::MultiSignFee, 0, SMALL_FEE_MAX)
    },
    ParamRule {
        param: ChainParameter::SupplyIncreaseAuthority,
        kind: ParamKind::AuthorityAddress,
        one_shot: false,
        version_gate: None,
        retired_after: None,
        requires_active: None,
    },
    ParamRule {
        param: ChainParameter::SupplyDecreaseAuthority,
        kind: ParamKind::AuthorityAddress,
        one_shot: false,
        version_gate: None,
        retired_after: None,
        requires_active: None,
    },
];

// =============================================================================
// VALIDATION & APPLICATION
// =============================================================================

fn parse_value(value: &str) -> Result<i64, ParamError> {
    value.trim().parse::<i64>().map_err(|_| ParamError::InvalidNumber {
        value: value.to_string(),
    })
}

fn decode_authority(value: &str, ctx: &ChainContext<'_>) -> Result<Address, ParamError> {
    let address = Address::from_hex(value)?;
    if !ctx.accounts.has(&address) {
        return Err(ParamError::AuthorityAccountMissing {
            address: address.to_hex(),
        });
    }
    Ok(address)
}

/// Validates a single proposed `{id -> value}` entry against the rule table.
///
/// Run at proposal creation. Pure with respect to state: only reads.
pub fn validate_param(id: u32, value: &str, ctx: &ChainContext<'_>) -> Result<(), ParamError> {
    let param = ChainParameter::from_id(id).ok_or(ParamError::UnknownParameter { id })?;
    let rule = param.rule();

    if let Some(gate) = rule.version_gate {
        if !ctx.fork.passes(gate) {
            return Err(ParamError::VersionGateInactive { param, gate });
        }
    }
    if let Some(milestone) = rule.retired_after {
        if ctx.fork.passes(milestone) {
            return Err(ParamError::ParameterRetired { param, milestone });
        }
    }
    if let Some(requires) = rule.requires_active {
        if ctx.properties.get_param(requires) != 1 {
            return Err(ParamError::PreconditionNotMet { param, requires });
        }
    }
    if rule.one_shot && ctx.properties.get_param(param) != 0 {
        return Err(ParamError::AlreadyActivated { param });
    }

    match rule.kind {
        ParamKind::Integer { min, max } => {
            let parsed = parse_value(value)?;
            if parsed < min || parsed > max {
                return Err(ParamError::OutOfRange { param, min, max });
            }
        }
        ParamKind::ActivationFlag => {
            if parse_value(value)? != 1 {
                return Err(ParamError::NotActivationValue { param });
            }
        }
        ParamKind::AuthorityAddress => {
            decode_authority(value, ctx)?;
        }
    }
    Ok(())
}

/// Applies a single approved `{id -> value}` entry through the same table.
///
/// One-shot parameters are check-and-set: if the stored value already left
/// the 0 sentinel (a concurrently approved proposal won the race), the
/// write is skipped rather than overwritten.
pub fn apply_param(id: u32, value: &str, ctx: &mut ChainContext<'_>) -> Result<(), ParamError> {
    let param = ChainParameter::from_id(id).ok_or(ParamError::UnknownParameter { id })?;
    let rule = param.rule();

    match rule.kind {
        ParamKind::AuthorityAddress => {
            let address = decode_authority(value, ctx)?;
            ctx.properties.save_authority(param, address);
        }
        ParamKind::Integer { .. } | ParamKind::ActivationFlag => {
            let parsed = parse_value(value)?;
            if rule.one_shot && ctx.properties.get_param(param) != 0 {
                debug!(param = ?param, "One-shot parameter already set, skipping");
                return Ok(());
            }
            ctx.properties.save_param(param, parsed);
        }
    }
    Ok(())
}
