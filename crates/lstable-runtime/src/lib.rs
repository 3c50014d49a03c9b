//! Round engine and cipher contexts for the LSTable SPN family.
//!
//! An LSTable variant transforms a state of 8, 12, or 16 words by
//! alternating a per-word table lookup with a fixed GF(2)-linear diffusion
//! map. This crate executes those rounds over table sets produced by
//! `lstable-gen`: the free functions [`run_rounds`] and
//! [`run_rounds_inverse`] are the bare engine, while [`LsCipher`] binds a
//! validated table set to its width's matrix pair and adds a byte-block
//! surface.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod cipher;
mod error;
mod round;

pub use cipher::LsCipher;
pub use error::Error;
pub use round::{run_rounds, run_rounds_inverse};

pub use lstable_gen::{DiffusionMatrix, SboxTable, TableGenerator, TableSet, Width};
