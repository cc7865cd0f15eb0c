//! Sockbuild library exports.
//!
//! The binary in `main.rs` and the integration tests both consume these
//! modules.

pub mod clean;
pub mod commands;
pub mod config;
pub mod harness;
pub mod process;
