//! Rendering of the final chaining state.
//!
//! The digest bytes are the four state words, each written least-significant
//! byte first. Hex output is produced from those bytes, so `0x67452301`
//! renders as `"01234567"`.

use std::fmt;

use super::state::DigestState;

/// Size of the MD5 digest in bytes (128 bits = 16 bytes).
pub const DIGEST_LEN: usize = 16;

/// A 128-bit MD5 digest.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digest(pub [u8; DIGEST_LEN]);

impl Digest {
    pub fn from_state(state: &DigestState) -> Self {
        Digest(state.to_le_bytes())
    }

    /// Lowercase hex rendering, 32 characters.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    pub fn as_bytes(&self) -> &[u8; DIGEST_LEN] {
        &self.0
    }
}

impl From<Digest> for [u8; DIGEST_LEN] {
    fn from(digest: Digest) -> Self {
        digest.0
    }
}

impl From<&DigestState> for Digest {
    fn from(state: &DigestState) -> Self {
        Digest::from_state(state)
    }
}

impl AsRef<[u8]> for Digest {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

impl fmt::Debug for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Digest({self:x})")
    }
}

impl fmt::LowerHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02x}")?;
        }
        Ok(())
    }
}

impl fmt::UpperHex for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{byte:02X}")?;
        }
        Ok(())
    }
}

impl fmt::Display for Digest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::LowerHex::fmt(self, f)
    }
}

/// Encodes a final state as 32 lowercase hex characters.
pub fn encode(state: &DigestState) -> String {
    Digest::from_state(state).to_hex()
}
