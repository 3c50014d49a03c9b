//! Portable AES-128 used as a fixed-key mixing primitive.
//!
//! This crate mirrors the FIPS-197 forward direction only:
//! - Key schedule for AES-128.
//! - Single-block encryption behind [`FixedKeyAes::mix`].
//!
//! Consumers treat it as a deterministic capability `mix(block) -> block`
//! driven by a fixed, reproducible key schedule. The decryption direction is
//! never required for index derivation and is intentionally absent. The
//! implementation aims for clarity and testability rather than constant-time
//! guarantees; it should not be treated as side-channel hardened.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod block;
mod cipher;
mod key;
mod round;
mod sbox;

pub use crate::block::Block;
pub use crate::cipher::{expand_key, FixedKeyAes};
pub use crate::key::{DEFAULT_MIX_KEY, MixKey, RoundKeys};
