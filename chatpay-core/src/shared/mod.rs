//! Shared errors, constants, and ABI helpers used throughout the core.

pub mod abi;
pub mod constants;
pub mod error;
