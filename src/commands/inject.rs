/*!
The one-shot injection command.

Wires the linear pipeline together: parse the `host:port` target, resolve
the payload bytes from the inline string or file, then perform a single
connect-and-send pass. There is no retry, no response read and no second
connection.
*/

use clap::Args;

use crate::CommandHandler;

/// Payload source options.
///
/// At least one source must be supplied. Both may be given: the inline
/// string then takes precedence and the file is never opened.
#[derive(Debug, Clone, Args)]
#[group(required = true, multiple = true)]
pub struct PayloadSource {
    /// Payload as string
    #[arg(short = 'p', long = "payload", value_name = "DATA")]
    pub payload: Option<String>,

    /// File containing payload
    #[arg(short = 'f', long = "file", value_name = "FILENAME")]
    pub file: Option<String>,
}

/// One-shot injection command arguments.
///
/// The command parses the target, loads the payload and writes it to the
/// target over a fresh TCP connection, closing the socket without waiting
/// for a response.
#[derive(Debug, Clone, Args)]
pub struct InjectCommand {
    /// Target in format host:port
    #[arg(
        short = 't',
        long = "target",
        required = true,
        value_name = "HOST:PORT"
    )]
    pub target: String,

    #[command(flatten)]
    pub source: PayloadSource,
}

impl CommandHandler for InjectCommand {
    /// Execute the injection pass.
    ///
    /// Steps, in order:
    /// 1. Parse `host:port` (split on the first colon).
    /// 2. Resolve the payload bytes (inline string wins over file).
    /// 3. Connect and write the payload once; connection failures are
    ///    swallowed.
    fn handle(self) -> crate::error::Result<()> {
        let target: crate::target::Target = self.target.parse()?;
        log::debug!("target {}", target);

        let payload = crate::payload::resolve(self.source.payload, self.source.file.as_deref());

        crate::sender::send(&target, &payload)
    }
}

#[cfg(test)]
mod tests {
    use crate::commands::base::Cli;
    use clap::Parser;

    #[test]
    fn requires_target() {
        let result = Cli::try_parse_from(["tcpinject", "--payload", "abc"]);
        assert!(result.is_err());
    }

    #[test]
    fn requires_a_payload_source() {
        let result = Cli::try_parse_from(["tcpinject", "--target", "127.0.0.1:9"]);
        assert!(result.is_err());
    }

    #[test]
    fn accepts_both_payload_sources() {
        let cli = Cli::try_parse_from([
            "tcpinject",
            "--target",
            "127.0.0.1:9",
            "--payload",
            "abc",
            "--file",
            "x.bin",
        ])
        .expect("both sources are allowed");

        assert_eq!(cli.operation.source.payload.as_deref(), Some("abc"));
        assert_eq!(cli.operation.source.file.as_deref(), Some("x.bin"));
    }

    #[test]
    fn accepts_short_options() {
        let cli = Cli::try_parse_from(["tcpinject", "-t", "10.0.0.1:9000", "-p", "abc"])
            .expect("short options parse");
        assert_eq!(cli.operation.target, "10.0.0.1:9000");
    }

    #[test]
    fn rejects_unknown_options() {
        let result = Cli::try_parse_from([
            "tcpinject",
            "--target",
            "1.2.3.4:5",
            "--payload",
            "a",
            "--bogus",
        ]);
        assert!(result.is_err());
    }
}
