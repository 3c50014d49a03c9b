//! Error type for the round engine and cipher contexts.

/// Errors surfaced by [`crate::run_rounds`] and [`crate::LsCipher`].
///
/// Width and length mismatches are caller errors detected before any word
/// is transformed; table failures come from validating a set at context
/// construction.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The state does not match the width of the tables and matrix.
    #[error("state carries {got} words, expected {expected}")]
    StateWidth {
        /// Word count required by the diffusion matrix.
        expected: usize,
        /// Word count of the supplied state.
        got: usize,
    },
    /// The table slice does not match the diffusion matrix.
    #[error("{got} substitution tables supplied, diffusion map expects {expected}")]
    TableWidth {
        /// Table count required by the diffusion matrix.
        expected: usize,
        /// Table count actually supplied.
        got: usize,
    },
    /// A byte block has the wrong length for the context's width.
    #[error("block is {got} bytes, width requires {expected}")]
    BlockLength {
        /// Byte count required by the width.
        expected: usize,
        /// Byte count actually supplied.
        got: usize,
    },
    /// The table set failed validation.
    #[error(transparent)]
    Tables(#[from] lstable_gen::Error),
}
