//! CLI command implementations
//!
//! Each submodule implements a specific CLI command.

pub mod calc;
pub mod sweep;
