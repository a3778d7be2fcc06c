//! # Meridian Test Suite
//!
//! Unified test crate for cross-crate choreography:
//!
//! ```text
//! tests/src/
//! └── integration/      # Actuator + governance flows over shared state
//!     ├── fixtures.rs   # Common world-building helpers
//!     ├── governance_flow.rs
//!     └── supply_flow.rs
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p meridian-tests
//! cargo test -p meridian-tests integration::
//! ```

#![allow(dead_code)]

pub mod integration;
