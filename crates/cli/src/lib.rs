//! CLI tool for querying consistent hash rings.
//!
//! Provides commands for:
//! - Looking up key owners and preference lists
//! - Inspecting ring state
//! - Checking how keys spread across nodes

pub mod commands;
pub mod config;

pub use commands::{Command, CommandResult};
pub use config::{CliConfig, NodeSpec};
