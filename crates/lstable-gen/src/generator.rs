//! Deterministic generation of the per-word substitution tables.

use aes_mix::FixedKeyAes;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::error::Error;
use crate::mixer::Mixer;
use crate::tables::{SboxTable, TABLE_ENTRIES, TableSet};
use crate::width::Width;

/// Fisher–Yates table generator driven by a mixing primitive.
///
/// Generation is a pure function of the mixer: the same key material yields
/// bit-identical table sets, which keeps builds reproducible and lets a set
/// be regenerated instead of persisted. Regenerating with a different mixer
/// key starts a new table epoch; states transformed under the old set
/// cannot be recovered with the new one.
pub struct TableGenerator<M = FixedKeyAes> {
    mixer: M,
}

impl TableGenerator<FixedKeyAes> {
    /// Generator backed by the built-in fixed-key mixer.
    pub fn new() -> Self {
        Self {
            mixer: FixedKeyAes::default(),
        }
    }
}

impl Default for TableGenerator<FixedKeyAes> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: Mixer> TableGenerator<M> {
    /// Generator backed by a caller-supplied mixer.
    pub fn with_mixer(mixer: M) -> Self {
        Self { mixer }
    }

    /// Produces the forward tables and their inverses for `width`.
    ///
    /// Each of the `width.words()` tables is shuffled independently and the
    /// whole set is verified (bijection and inverse identities) before it is
    /// returned; a verification failure aborts generation with an error
    /// rather than handing out a partially valid set.
    pub fn generate(&self, width: Width) -> Result<TableSet, Error> {
        let forward: Vec<SboxTable> = (0..width.words())
            .map(|_| self.shuffled_table())
            .collect();
        TableSet::from_forward(width, forward)
    }

    /// Runs one full Fisher–Yates pass over the identity permutation,
    /// walking the domain from the top down.
    fn shuffled_table(&self) -> SboxTable {
        let mut table = SboxTable::identity();
        for v in (1..TABLE_ENTRIES as u32).rev() {
            let k = self.shuffle_index(v);
            debug_assert!(k <= v, "shuffle index {k} out of range for {v}");
            table.swap(k as usize, v as usize);
        }
        table
    }

    /// Derives the swap partner for position `v`.
    ///
    /// `v` is zero-extended into the most-significant 32 bits of a block
    /// (remaining bits zero), run through the mixer, and the 128-bit output
    /// is reduced modulo `v + 1` by scanning its bits most-significant
    /// first with a running remainder. The result is uniform enough over
    /// `[0, v]` without needing a wide-integer division.
    fn shuffle_index(&self, v: u32) -> u32 {
        let mut block = [0u8; 16];
        block[..4].copy_from_slice(&v.to_be_bytes());
        let mixed = self.mixer.mix(block);

        let modulus = v + 1;
        let mut res = 0u32;
        for byte in mixed {
            for shift in (0..8).rev() {
                let bit = u32::from((byte >> shift) & 1);
                res = ((res << 1) | bit) % modulus;
            }
        }
        res
    }
}

#[cfg(feature = "parallel")]
impl<M: Mixer + Sync> TableGenerator<M> {
    /// Like [`TableGenerator::generate`], with the independent table slots
    /// fanned out across the rayon thread pool.
    pub fn generate_parallel(&self, width: Width) -> Result<TableSet, Error> {
        let forward: Vec<SboxTable> = (0..width.words())
            .into_par_iter()
            .map(|_| self.shuffled_table())
            .collect();
        TableSet::from_forward(width, forward)
    }
}
