//! Table generation for the LSTable word-oriented SPN family.
//!
//! This crate provides the building blocks shared by every LSTable variant:
//! - GF(2) diffusion matrices with fixed constants per state width.
//! - Permutation tables over the full 16-bit word domain, with validated
//!   containers and serialization for reuse across process restarts.
//! - A deterministic Fisher–Yates generator whose shuffle indices come from
//!   a fixed-key block-cipher mixing primitive.

#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod diffusion;
mod error;
mod generator;
mod matrix;
mod mixer;
mod tables;
mod width;

pub use diffusion::{DIFFUSION_12, DIFFUSION_16, DIFFUSION_8, INVERSE_DIFFUSION_16};
pub use error::Error;
pub use generator::TableGenerator;
pub use matrix::{DiffusionMatrix, MAX_WORDS};
pub use mixer::Mixer;
pub use tables::{SboxTable, TABLE_ENTRIES, TableSet};
pub use width::Width;
