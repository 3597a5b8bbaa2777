//! `helpdesk` - Single-operator helpdesk ticket tracker
//!
//! This crate provides the `hd` CLI on top of the `helpdesk-lib` ticket
//! store. The store owns all ticket state; everything here renders its
//! results and feeds it user input.
//!
//! # Architecture
//!
//! - [`cli`] - Command-line interface using clap
//! - [`config`] - Layered YAML/env/CLI configuration
//! - [`format`] - Output formatting (text, JSON)
//! - [`logging`] - Tracing subscriber setup
//! - [`validation`] - Intake form checks

#![forbid(unsafe_code)]
#![warn(clippy::pedantic, clippy::nursery)]
#![allow(clippy::module_name_repetitions)]

pub mod cli;
pub mod config;
pub mod format;
pub mod logging;
pub mod validation;

pub use helpdesk_lib::{Result, TicketError};

/// Run the CLI application.
///
/// This is the main entry point called from `main()`.
///
/// # Errors
///
/// Returns an error if command execution fails.
pub fn run() -> anyhow::Result<()> {
    cli::run()
}
