//! Capability interface for the index-deriving primitive.

use aes_mix::{Block, FixedKeyAes};

/// A fixed-key 128-bit block mixer.
///
/// Implementations must be pure: the same input block yields the same output
/// for the lifetime of the value. The table generator relies on this to make
/// generation a reproducible function of the mixer's key material. Any
/// ten-round substitution-permutation block cipher with a frozen key
/// schedule qualifies, hardware-accelerated or not.
pub trait Mixer {
    /// Mixes one 128-bit block.
    fn mix(&self, block: Block) -> Block;
}

impl Mixer for FixedKeyAes {
    #[inline]
    fn mix(&self, block: Block) -> Block {
        FixedKeyAes::mix(self, block)
    }
}

impl<M: Mixer> Mixer for &M {
    #[inline]
    fn mix(&self, block: Block) -> Block {
        M::mix(self, block)
    }
}
