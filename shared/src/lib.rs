//! Shared domain types for the Consignment Inventory Platform
//!
//! This crate contains the types and validations shared between the backend
//! services, the auth middleware, and the test suites: user roles and their
//! capability table, the distribution state machine, and field validators.

pub mod types;
pub mod validation;

pub use types::*;
pub use validation::*;
