//! Per-transaction execution result record.

use serde::{Deserialize, Serialize};

/// Outcome code written into the transaction result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ResultCode {
    #[default]
    Success,
    Failed,
}

/// The result sink an actuator writes into during `execute`: the final
/// status and the fee actually charged (including any account-creation
/// surcharge).
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransactionResult {
    pub fee: i64,
    pub code: ResultCode,
}

impl TransactionResult {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, fee: i64, code: ResultCode) {
        self.fee = fee;
        self.code = code;
    }
}
