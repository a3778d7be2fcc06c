//! Cross-crate choreography: actuator engine, governance controller, and
//! parameter store driving one shared in-memory world.

pub mod fixtures;

mod governance_flow;
mod supply_flow;
