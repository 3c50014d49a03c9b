//! The closed family of supported state widths.

use serde::{Deserialize, Serialize};

use crate::diffusion::{DIFFUSION_12, DIFFUSION_16, DIFFUSION_8, INVERSE_DIFFUSION_16};
use crate::error::Error;
use crate::matrix::DiffusionMatrix;

/// State width of a cipher variant, measured in 16-bit words.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Width {
    /// Eight words (128-bit block).
    W8,
    /// Twelve words (192-bit block).
    W12,
    /// Sixteen words (256-bit block).
    W16,
}

impl Width {
    /// Every supported width, narrowest first.
    pub const ALL: [Width; 3] = [Width::W8, Width::W12, Width::W16];

    /// Number of 16-bit words in one state.
    pub const fn words(self) -> usize {
        match self {
            Width::W8 => 8,
            Width::W12 => 12,
            Width::W16 => 16,
        }
    }

    /// Block size in bytes.
    pub const fn block_bytes(self) -> usize {
        self.words() * 2
    }

    /// Smallest round count exercised for this width.
    pub const fn default_rounds(self) -> usize {
        match self {
            Width::W8 => 12,
            Width::W12 => 8,
            Width::W16 => 8,
        }
    }

    /// Maps a word count onto a member of the family.
    pub fn from_words(words: usize) -> Result<Self, Error> {
        match words {
            8 => Ok(Width::W8),
            12 => Ok(Width::W12),
            16 => Ok(Width::W16),
            other => Err(Error::UnsupportedWidth(other)),
        }
    }

    /// The fixed diffusion map applied after the confusion layer.
    pub fn diffusion(self) -> &'static DiffusionMatrix {
        match self {
            Width::W8 => &DIFFUSION_8,
            Width::W12 => &DIFFUSION_12,
            Width::W16 => &DIFFUSION_16,
        }
    }

    /// The fixed inverse of [`Width::diffusion`]. The 8- and 12-word maps
    /// are involutions, so they stand in for their own inverses.
    pub fn inverse_diffusion(self) -> &'static DiffusionMatrix {
        match self {
            Width::W8 => &DIFFUSION_8,
            Width::W12 => &DIFFUSION_12,
            Width::W16 => &INVERSE_DIFFUSION_16,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn word_counts_and_block_sizes() {
        assert_eq!(Width::W8.words(), 8);
        assert_eq!(Width::W12.words(), 12);
        assert_eq!(Width::W16.words(), 16);
        for width in Width::ALL {
            assert_eq!(width.block_bytes(), width.words() * 2);
        }
    }

    #[test]
    fn from_words_roundtrip() {
        for width in Width::ALL {
            assert_eq!(Width::from_words(width.words()).unwrap(), width);
        }
        assert!(matches!(
            Width::from_words(10),
            Err(Error::UnsupportedWidth(10))
        ));
    }

    #[test]
    fn diffusion_dimensions_match() {
        for width in Width::ALL {
            assert_eq!(width.diffusion().dim(), width.words());
            assert_eq!(width.inverse_diffusion().dim(), width.words());
        }
    }
}
