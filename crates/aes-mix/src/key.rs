//! Key types for the mixing primitive.

use crate::block::Block;

/// 128-bit key feeding the mixer's key schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MixKey(pub [u8; 16]);

impl From<[u8; 16]> for MixKey {
    fn from(value: [u8; 16]) -> Self {
        Self(value)
    }
}

/// Key used when no explicit mixing key is supplied. Expanding it yields the
/// fixed round constants that make table generation reproducible across
/// builds and processes.
pub const DEFAULT_MIX_KEY: MixKey = MixKey([0u8; 16]);

/// Expanded round keys for AES-128.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RoundKeys(pub [Block; 11]);

impl RoundKeys {
    /// Returns the round key at the requested index (0..=10).
    #[inline]
    pub fn get(&self, round: usize) -> &Block {
        &self.0[round]
    }
}
