//! Injector binary entrypoint.
//!
//! Parses CLI arguments and performs a single connect-and-send pass against
//! the requested target. The binary is intentionally a thin wrapper: argument
//! parsing and exit-code mapping happen here, while the real work (target
//! parsing, payload loading and the socket write) is performed by the
//! `tcpinject` library modules.
//!
//! Examples
//!
//! Send an inline payload to a local service:
//!
//! $ tcpinject --target 127.0.0.1:8080 --payload "PING"
//!
//! Send the raw contents of a file:
//!
//! $ tcpinject --target 192.168.0.17:9000 --file crash_case.bin
//!
//! The command above will:
//! 1. Parse `192.168.0.17:9000` into a host/port pair.
//! 2. Read `crash_case.bin` in binary mode (an unreadable file degrades to an
//!    empty payload).
//! 3. Open one TCP connection, write the bytes once and close the socket
//!    without waiting for a response.
//!
//! Exit codes
//! - 0: the connect/send pass ran to completion, whether or not the remote
//!   end accepted the connection.
//! - 1: usage error, malformed target or port, or a host that is not a
//!   literal dotted-decimal IPv4 address.
//!
//! Set `RUST_LOG=debug` to trace each step of the pass on stderr; runs are
//! silent otherwise.

use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    env_logger::init();

    // clap exits 2 on usage errors by default; the contract here is 1.
    // `--help`/`--version` still print to stdout and exit 0.
    let cli = match tcpinject::commands::base::Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let _ = err.print();
            return if err.use_stderr() {
                ExitCode::FAILURE
            } else {
                ExitCode::SUCCESS
            };
        }
    };

    match cli.handle() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            // Address conversion failures abort with the exit code alone.
            if !err.is_silent() {
                eprintln!("Error: {}", err);
            }
            ExitCode::FAILURE
        }
    }
}
