//! Payload acquisition for an injection pass.
//!
//! The payload is an opaque byte buffer taken from exactly one of two
//! sources: an inline command-line string or the full contents of a file.
//! The inline form wins when both are supplied. An unreadable file degrades
//! to an empty payload instead of aborting the run.

/// Resolves the payload bytes for a pass.
///
/// # Arguments
/// * `literal` - Inline payload string, used verbatim when present.
/// * `file_path` - Path of a file to read in binary mode; `~` is expanded.
///
/// # Returns
/// The payload bytes. A missing or unreadable file yields an empty buffer.
pub fn resolve(literal: Option<String>, file_path: Option<&str>) -> Vec<u8> {
    if let Some(data) = literal {
        log::debug!("using inline payload ({} bytes)", data.len());
        return data.into_bytes();
    }

    let Some(path) = file_path else {
        return Vec::new();
    };

    let path = shellexpand::tilde(path);
    match std::fs::read(path.as_ref()) {
        Ok(data) => {
            log::debug!("read payload file {} ({} bytes)", path, data.len());
            data
        }
        Err(err) => {
            log::debug!(
                "could not read payload file {}: {}, sending empty payload",
                path,
                err
            );
            Vec::new()
        }
    }
}
