//! Content fingerprinting for migration scripts.
//!
//! The fingerprint, not the filename, is the canonical identity of a
//! migration: two scripts with identical content share a fingerprint no
//! matter what they are called. Line endings are normalized first so the
//! same script checked out on Windows and Unix hashes identically.

use md5::{Digest, Md5};

/// Compute the content fingerprint of a migration script.
///
/// CRLF line endings are converted to LF, the normalized bytes are run
/// through a 128-bit MD5 digest, and the result is rendered as five
/// hyphen-separated lowercase hex groups (8-4-4-4-12). The grouped shape
/// matches what other tools store in their ledger tables, so fingerprints
/// are interchangeable across migrators.
pub fn fingerprint(content: &str) -> String {
    let normalized = content.replace("\r\n", "\n");
    let mut hasher = Md5::new();
    hasher.update(normalized.as_bytes());
    let hex = format!("{:032x}", hasher.finalize());
    format!(
        "{}-{}-{}-{}-{}",
        &hex[0..8],
        &hex[8..12],
        &hex[12..16],
        &hex[16..20],
        &hex[20..32]
    )
}

#[cfg(test)]
#[path = "fingerprint_test.rs"]
mod tests;
