//! Subcommand implementations.
//!
//! Each submodule owns one subcommand.  The contract is uniform: take the
//! already-parsed arguments, translate them into core calls, and print the
//! results through [`OutputManager`](crate::output::OutputManager).  No
//! argument parsing and no business logic live here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod list;
pub mod wizard;
