//! Cipher context binding a table set to its width's matrix pair.

use lstable_gen::{MAX_WORDS, TableSet, Width};

use crate::error::Error;
use crate::round::{run_rounds, run_rounds_inverse};

/// An LSTable variant ready for use: a validated table set bound to the
/// diffusion pair and round count of its width.
///
/// The context is immutable after construction, so a single instance can
/// serve concurrent encryptions without locking.
pub struct LsCipher {
    tables: TableSet,
    rounds: usize,
}

impl LsCipher {
    /// Binds `tables` to a round count.
    ///
    /// The set is revalidated here so that no cipher operation can run over
    /// unverified tables, wherever the set came from.
    pub fn new(tables: TableSet, rounds: usize) -> Result<Self, Error> {
        tables.validate()?;
        Ok(Self { tables, rounds })
    }

    /// Binds `tables` to the default round count of their width.
    pub fn with_default_rounds(tables: TableSet) -> Result<Self, Error> {
        let rounds = tables.width().default_rounds();
        Self::new(tables, rounds)
    }

    /// State width of this context.
    pub fn width(&self) -> Width {
        self.tables.width()
    }

    /// Rounds applied per block.
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Encrypts one state of words in place.
    pub fn encrypt(&self, state: &mut [u16]) -> Result<(), Error> {
        run_rounds(
            state,
            self.tables.forward(),
            self.width().diffusion(),
            self.rounds,
        )
    }

    /// Decrypts one state of words in place.
    pub fn decrypt(&self, state: &mut [u16]) -> Result<(), Error> {
        run_rounds_inverse(
            state,
            self.tables.inverse(),
            self.width().inverse_diffusion(),
            self.rounds,
        )
    }

    /// Encrypts one block of `2n` bytes in place, little-endian words.
    pub fn encrypt_block(&self, block: &mut [u8]) -> Result<(), Error> {
        self.transform_block(block, |cipher, state| cipher.encrypt(state))
    }

    /// Decrypts one block of `2n` bytes in place, little-endian words.
    pub fn decrypt_block(&self, block: &mut [u8]) -> Result<(), Error> {
        self.transform_block(block, |cipher, state| cipher.decrypt(state))
    }

    fn transform_block(
        &self,
        block: &mut [u8],
        transform: impl FnOnce(&Self, &mut [u16]) -> Result<(), Error>,
    ) -> Result<(), Error> {
        let expected = self.width().block_bytes();
        if block.len() != expected {
            return Err(Error::BlockLength {
                expected,
                got: block.len(),
            });
        }

        let n = self.width().words();
        let mut state = [0u16; MAX_WORDS];
        for (word, chunk) in state.iter_mut().zip(block.chunks_exact(2)) {
            *word = u16::from_le_bytes([chunk[0], chunk[1]]);
        }
        transform(self, &mut state[..n])?;
        for (chunk, word) in block.chunks_exact_mut(2).zip(&state[..n]) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Ok(())
    }
}
