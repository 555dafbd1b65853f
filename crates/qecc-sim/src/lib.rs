#![doc = "Command implementations and batch configuration for the `qecc-sim` CLI."]

pub mod commands;
pub mod config;

pub use config::{BatchConfig, BatchEntry};
