pub type Result<T> = std::result::Result<T, InjectorError>;

/// Struct to represent target format errors.
#[derive(Debug)]
pub struct TargetErrorStruct {
    /// The error message.
    msg: String,
}

/// Struct to represent port conversion errors.
#[derive(Debug)]
pub struct PortErrorStruct {
    /// The error message.
    msg: String,
}

/// Struct to represent IPv4 address conversion errors.
#[derive(Debug)]
pub struct AddressErrorStruct {
    /// The error message.
    msg: String,
}

/// Enum to represent different types of injector errors.
#[derive(Debug)]
pub enum InjectorError {
    TargetError(TargetErrorStruct),
    PortError(PortErrorStruct),
    AddressError(AddressErrorStruct),
}

impl InjectorError {
    /// Create a new target format error.
    ///
    /// # Arguments
    /// * `msg` - The error message.
    ///
    /// # Returns
    /// An `InjectorError` instance representing a target format error.
    pub fn target_error(msg: &str) -> Self {
        InjectorError::TargetError(TargetErrorStruct {
            msg: msg.to_string(),
        })
    }

    /// Whether the error is reported with an exit code alone.
    ///
    /// Address conversion failures abort the run without a diagnostic; every
    /// other error is printed to stderr by the top-level handler.
    pub fn is_silent(&self) -> bool {
        matches!(self, InjectorError::AddressError(_))
    }
}

impl std::fmt::Display for InjectorError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InjectorError::TargetError(target_err) => write!(f, "{}", target_err.msg),
            InjectorError::PortError(port_err) => {
                write!(f, "invalid port number: {}", port_err.msg)
            }
            InjectorError::AddressError(addr_err) => {
                write!(f, "invalid IPv4 address: {}", addr_err.msg)
            }
        }
    }
}

impl From<std::num::ParseIntError> for InjectorError {
    fn from(error: std::num::ParseIntError) -> Self {
        InjectorError::PortError(PortErrorStruct {
            msg: error.to_string(),
        })
    }
}

impl From<std::net::AddrParseError> for InjectorError {
    fn from(error: std::net::AddrParseError) -> Self {
        InjectorError::AddressError(AddressErrorStruct {
            msg: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    #[test]
    fn target_error_displays_its_message() {
        let err = InjectorError::target_error("Invalid target format. Use host:port");
        assert_eq!(err.to_string(), "Invalid target format. Use host:port");
        assert!(!err.is_silent());
    }

    #[test]
    fn port_error_wraps_the_parser_message() {
        let err: InjectorError = "abc".parse::<u16>().unwrap_err().into();
        assert!(err.to_string().starts_with("invalid port number:"));
        assert!(!err.is_silent());
    }

    #[test]
    fn address_error_is_silent() {
        let err: InjectorError = "localhost".parse::<Ipv4Addr>().unwrap_err().into();
        assert!(err.is_silent());
    }
}
