//! Library for the `tcpinject` one-shot TCP payload injector.
//!
//! This crate provides the core pieces used by the `tcpinject` binary:
//! - The `commands` module contains the CLI definition and the wiring that
//!   executes a single injection pass.
//! - The `target` module parses `host:port` target specifications.
//! - The `payload` module resolves the payload bytes from an inline string
//!   or a file.
//! - The `sender` module performs the one-shot connect-and-send sequence.
//! - The `error` module defines the error types used across the library.
//!
//! The library exposes a small `CommandHandler` trait which CLI types
//! implement to perform their respective operation when invoked by the CLI
//! entrypoint.
//!
//! Design notes:
//! - Ownership is preferred for command handlers: `handle(self)` consumes the
//!   command struct so implementations can move resources (payload buffers,
//!   file paths) without cloning.
//! - Target parsing and payload loading are kept separate from the command
//!   implementation so they can be reused and tested independently.
//! - Connection failures are not errors: the pass still counts as complete,
//!   matching the tool's fire-and-forget contract.
pub mod commands;
pub mod error;
pub mod payload;
pub mod sender;
pub mod target;

/// A thin abstraction implemented by CLI command structs to execute work.
///
/// Implementors should perform whatever IO/networking or processing the
/// command represents inside `handle`. The method takes ownership of `self`
/// so implementors can move owned fields (payload data, configuration)
/// without requiring extra cloning.
pub trait CommandHandler {
    /// Execute the command, consuming the implementor.
    fn handle(self) -> crate::error::Result<()>;
}
