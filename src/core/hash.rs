//! State Hashing for Verification
//!
//! Deterministic SHA-256 digests of leaderboard state, used to confirm that
//! a board read back from a store matches the one that was written.

use sha2::{Sha256, Digest};

/// Hash output type (256 bits / 32 bytes)
pub type StateHash = [u8; 32];

/// Deterministic hasher for ranked state.
///
/// Wraps SHA-256 with length-prefixed helpers so adjacent string fields
/// cannot alias. Order of updates is significant.
pub struct StateHasher {
    hasher: Sha256,
}

impl StateHasher {
    /// Create a new hasher with domain separator.
    pub fn new(domain: &[u8]) -> Self {
        let mut hasher = Sha256::new();
        hasher.update(domain);
        Self { hasher }
    }

    /// Create hasher for leaderboard state.
    pub fn for_leaderboard() -> Self {
        Self::new(b"SWIMSWAP_LEADERBOARD_V1")
    }

    /// Update with a u8 value.
    #[inline]
    pub fn update_u8(&mut self, value: u8) {
        self.hasher.update([value]);
    }

    /// Update with a u32 value (little-endian).
    #[inline]
    pub fn update_u32(&mut self, value: u32) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with an i64 value (little-endian).
    #[inline]
    pub fn update_i64(&mut self, value: i64) {
        self.hasher.update(value.to_le_bytes());
    }

    /// Update with a length-prefixed UTF-8 string.
    #[inline]
    pub fn update_str(&mut self, value: &str) {
        self.update_u32(value.len() as u32);
        self.hasher.update(value.as_bytes());
    }

    /// Update with an optional string (presence byte first).
    #[inline]
    pub fn update_opt_str(&mut self, value: Option<&str>) {
        match value {
            Some(s) => {
                self.update_u8(1);
                self.update_str(s);
            }
            None => self.update_u8(0),
        }
    }

    /// Finalize and return the hash.
    pub fn finalize(self) -> StateHash {
        self.hasher.finalize().into()
    }
}

/// Short hex prefix of a hash, for log lines.
pub fn short_hex(hash: &StateHash) -> String {
    hex::encode(&hash[..8])
}

// =============================================================================
// TESTS
// =============================================================================
