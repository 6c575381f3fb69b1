use std::str::FromStr;

use crate::error::InjectorError;

/// Destination of an injection pass.
///
/// The host is kept as the raw substring from the command line; it is only
/// interpreted as a dotted-decimal IPv4 address when the socket address is
/// built, so a malformed host is not rejected here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Target {
    /// Host portion of the `host:port` specification.
    pub host: String,
    /// Destination TCP port.
    pub port: u16,
}

impl FromStr for Target {
    type Err = InjectorError;

    /// Parses a `host:port` specification, splitting on the first colon.
    ///
    /// # Errors
    /// A missing colon yields a target format error; a port substring that is
    /// not a valid `u16` yields a port conversion error.
    fn from_str(spec: &str) -> Result<Self, Self::Err> {
        let (host, port) = spec
            .split_once(':')
            .ok_or_else(|| InjectorError::target_error("Invalid target format. Use host:port"))?;

        Ok(Self {
            host: host.to_string(),
            port: port.parse()?,
        })
    }
}

impl std::fmt::Display for Target {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.host, self.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_host_and_port() {
        let target: Target = "127.0.0.1:8080".parse().expect("valid target");
        assert_eq!(target.host, "127.0.0.1");
        assert_eq!(target.port, 8080);
    }

    #[test]
    fn splits_on_first_colon() {
        // Everything after the first colon belongs to the port substring.
        let result = "10.0.0.1:90:80".parse::<Target>();
        assert!(matches!(result, Err(InjectorError::PortError(_))));
    }

    #[test]
    fn missing_colon_is_a_format_error() {
        let result = "127.0.0.1".parse::<Target>();
        assert!(matches!(result, Err(InjectorError::TargetError(_))));
    }

    #[test]
    fn non_numeric_port_is_a_port_error() {
        let result = "127.0.0.1:http".parse::<Target>();
        assert!(matches!(result, Err(InjectorError::PortError(_))));
    }

    #[test]
    fn out_of_range_port_is_a_port_error() {
        let result = "127.0.0.1:99999".parse::<Target>();
        assert!(matches!(result, Err(InjectorError::PortError(_))));
    }

    #[test]
    fn empty_host_is_accepted_at_parse_time() {
        let target: Target = ":1234".parse().expect("parses");
        assert_eq!(target.host, "");
        assert_eq!(target.port, 1234);
    }
}
