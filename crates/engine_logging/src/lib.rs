#![deny(missing_docs)]
//! Shared logging utilities for the workspace.
//!
//! All crates log through the `log` facade; this crate owns the `simplelog`
//! backends so the binary and the test suites initialize them the same way.

use log::LevelFilter;
use simplelog::{ColorChoice, Config, TermLogger, TerminalMode};

/// Initializes a terminal logger at `level` for the application binary.
///
/// Safe to call more than once; later calls are ignored.
pub fn initialize_terminal(level: LevelFilter) {
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}

/// Initializes a simple terminal logger for use in unit tests.
///
/// This safely no-ops if another logger has already been initialized.
pub fn initialize_for_tests() {
    // Use debug level in debug builds, info in release builds.
    let level = if cfg!(debug_assertions) {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    // Ignore the error if a logger was already set by another test.
    let _ = TermLogger::init(level, Config::default(), TerminalMode::Mixed, ColorChoice::Auto);
}
