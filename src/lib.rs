//! Noisy Harmonic
//!
//! Generates a sine wave with a reusable additive noise buffer and smooths it
//! with Gaussian, uniform or exponential filters.
//!
//! ## Architecture (Hexagonal / Ports & Adapters)
//!
//! - `domain/` - Pure domain types, no I/O dependencies
//! - `dsp/` - Signal generation and filtering (pure functions, no I/O)
//! - `ports/` - Trait definitions for export and profile persistence
//! - `adapters/` - Implementations of ports (CSV, JSON profiles, in-memory)
//! - `state` - Session state: current configuration and noise snapshot
//! - `commands/` - Command-line handlers (driving adapters)

// Core domain (pure, no I/O)
pub mod domain;
pub mod dsp;
pub mod ports;

// Adapters (external I/O)
pub mod adapters;

// Front end
pub mod commands;
pub mod state;
pub mod utils;

use clap::Parser;

use commands::Cli;
use domain::HarmonicResult;

/// Parse the process arguments and run the selected command
pub fn run() -> HarmonicResult<()> {
    let cli = Cli::parse();
    let level = if cli.debug {
        log::LevelFilter::Debug
    } else {
        log::LevelFilter::Info
    };
    utils::logging::init_logger(level);
    commands::run(cli)
}
