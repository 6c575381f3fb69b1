//! Top-level CLI wiring for the `tcpinject` binary.
//!
//! This module contains the `Cli` struct parsed by `clap`. It keeps parsing
//! and dispatch logic minimal: the concrete injection flow lives in
//! `commands::inject` and is flattened into the top-level parser because the
//! tool exposes a single operation.

use crate::CommandHandler;
use clap::Parser;

/// Top-level CLI structure parsed from program arguments.
///
/// The `Cli` struct is the entry point for command-line parsing and contains
/// the flattened injection arguments. The struct uses `clap`'s `Parser`
/// derive to provide argument parsing and `--version` handling.
#[derive(Parser)]
#[command(version, about = "One-shot TCP payload injector")]
pub struct Cli {
    /// The single injection operation supported by the tool.
    #[command(flatten)]
    pub operation: super::inject::InjectCommand,
}

impl Cli {
    /// Dispatch and execute the injection pass.
    ///
    /// This consumes the `Cli` instance and delegates to the underlying
    /// `InjectCommand::handle` implementation.
    pub fn handle(self) -> crate::error::Result<()> {
        self.operation.handle()
    }
}
