//! One-shot connect-and-send against a target.

use std::io::Write;
use std::net::{Ipv4Addr, SocketAddrV4, TcpStream};

use crate::target::Target;

/// Performs a single fire-and-forget TCP write of `payload` to `target`.
///
/// The host must be a literal dotted-decimal IPv4 address; hostnames are not
/// resolved. A connection failure is swallowed: the pass still counts as
/// complete and the function returns `Ok(())`. The payload is written with a
/// single call and the result is ignored, so a partial write is neither
/// detected nor retried. The socket is released on every path when the
/// stream is dropped.
///
/// # Errors
/// Returns an address conversion error when the host is not a valid literal
/// IPv4 address. The caller reports that failure with an exit code only.
pub fn send(target: &Target, payload: &[u8]) -> crate::error::Result<()> {
    let host: Ipv4Addr = target.host.parse()?;
    let addr = SocketAddrV4::new(host, target.port);

    log::debug!("connecting to {}", addr);
    match TcpStream::connect(addr) {
        Ok(mut stream) => {
            log::debug!(
                "sending {} bytes: {}",
                payload.len(),
                hex::encode(&payload[..payload.len().min(32)])
            );
            // One-shot write: partial sends are not detected or retried.
            let _ = stream.write(payload);
        }
        Err(err) => {
            // A refused or unreachable target still completes the pass.
            log::debug!("connect to {} failed: {}", addr, err);
        }
    }

    Ok(())
}
