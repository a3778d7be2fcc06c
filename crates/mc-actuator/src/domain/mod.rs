//! Domain module for the actuator engine: contract payloads, the
//! transaction result record, and error types.

pub mod contract;
pub mod errors;
pub mod result;

pub use contract::*;
pub use errors::*;
pub use result::*;
