//! Key schedule and the fixed-key mixer.

use core::convert::TryInto;

use crate::block::Block;
use crate::key::{MixKey, RoundKeys, DEFAULT_MIX_KEY};
use crate::round::{add_round_key, mix_columns, shift_rows, sub_bytes};
use crate::sbox::sbox;

const RCON: [u8; 10] = [0x01, 0x02, 0x04, 0x08, 0x10, 0x20, 0x40, 0x80, 0x1b, 0x36];

fn rot_word(word: u32) -> u32 {
    word.rotate_left(8)
}

fn sub_word(word: u32) -> u32 {
    let b0 = sbox((word >> 24) as u8) as u32;
    let b1 = sbox((word >> 16) as u8) as u32;
    let b2 = sbox((word >> 8) as u8) as u32;
    let b3 = sbox(word as u8) as u32;
    (b0 << 24) | (b1 << 16) | (b2 << 8) | b3
}

/// Expands a 128-bit key into 11 round keys.
pub fn expand_key(key: &MixKey) -> RoundKeys {
    let mut w = [0u32; 44];
    for (i, chunk) in key.0.chunks_exact(4).enumerate() {
        let bytes: [u8; 4] = chunk.try_into().expect("chunk length is four");
        w[i] = u32::from_be_bytes(bytes);
    }

    for i in 4..44 {
        let mut temp = w[i - 1];
        if i % 4 == 0 {
            temp = sub_word(rot_word(temp)) ^ (u32::from(RCON[(i / 4) - 1]) << 24);
        }
        w[i] = w[i - 4] ^ temp;
    }

    let mut round_keys = [[0u8; 16]; 11];
    for (round, key_bytes) in round_keys.iter_mut().enumerate() {
        for word_idx in 0..4 {
            let bytes = w[round * 4 + word_idx].to_be_bytes();
            key_bytes[word_idx * 4..word_idx * 4 + 4].copy_from_slice(&bytes);
        }
    }

    RoundKeys(round_keys)
}

/// Ten-round AES-128 with a key schedule expanded once at construction.
///
/// The schedule is owned by the value rather than held in process-wide
/// state, so two mixers with the same key are interchangeable and a mixer
/// can be shared by reference across threads.
#[derive(Clone, Copy, Debug)]
pub struct FixedKeyAes {
    round_keys: RoundKeys,
}

impl FixedKeyAes {
    /// Builds a mixer from an explicit key.
    pub fn new(key: MixKey) -> Self {
        Self {
            round_keys: expand_key(&key),
        }
    }

    /// Encrypts one block. The output is a deterministic function of the
    /// block and the key supplied at construction.
    pub fn mix(&self, block: Block) -> Block {
        let mut state = block;

        add_round_key(&mut state, self.round_keys.get(0));

        for round in 1..10 {
            sub_bytes(&mut state);
            shift_rows(&mut state);
            mix_columns(&mut state);
            add_round_key(&mut state, self.round_keys.get(round));
        }

        sub_bytes(&mut state);
        shift_rows(&mut state);
        add_round_key(&mut state, self.round_keys.get(10));

        state
    }
}

impl Default for FixedKeyAes {
    fn default() -> Self {
        Self::new(DEFAULT_MIX_KEY)
    }
}
