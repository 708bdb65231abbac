//! Integrity value object
//!
//! A content digest, or the `Ignored` sentinel meaning the digest was
//! intentionally not recorded.

use std::fmt;

/// Lock-file spelling of the `Ignored` sentinel (shared with ignored versions)
pub const IGNORED: &str = "ignored";

/// Integrity of a locked artifact
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Integrity {
    /// Content digest, e.g. `sha512:9f86d0...`
    Digest(String),
    /// Not checked
    Ignored,
}

impl Integrity {
    /// Prefix for SHA-512 digests
    pub const SHA512_PREFIX: &'static str = "sha512:";

    /// Compute the SHA-512 digest of artifact bytes
    pub fn sha512_of(content: &[u8]) -> Self {
        use sha2::{Digest, Sha512};
        let hash = Sha512::digest(content);
        Integrity::Digest(format!("{}{:x}", Self::SHA512_PREFIX, hash))
    }

    /// Read the lock-file form back
    pub fn from_lock_value(value: &str) -> Self {
        if value == IGNORED {
            Integrity::Ignored
        } else {
            Integrity::Digest(value.to_string())
        }
    }

    /// Form written to the lock file
    pub fn lock_value(&self) -> &str {
        match self {
            Integrity::Digest(digest) => digest,
            Integrity::Ignored => IGNORED,
        }
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self, Integrity::Ignored)
    }
}

impl fmt::Display for Integrity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.lock_value())
    }
}
