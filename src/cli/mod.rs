//! Command implementations behind the `pgraph` binary.

pub mod commands;

pub use commands::{cmd_demo, cmd_run, OutputOptions};
