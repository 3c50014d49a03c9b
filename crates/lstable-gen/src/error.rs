//! Error type for table generation and validation.

/// Errors surfaced by table generation, table-set validation, and decoding.
///
/// Bijection and inverse failures indicate a defect in the mixing primitive
/// or the shuffle arithmetic; they are fatal for the affected table set and
/// are never retried. Width and count mismatches are caller errors.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A forward table does not cover the 16-bit domain exactly once.
    #[error("substitution table {table} is not a permutation of the 16-bit domain")]
    NotBijective {
        /// Index of the offending table within its set.
        table: usize,
    },
    /// An inverse table disagrees with its forward table.
    #[error("inverse table {table} disagrees with its forward table at input {value:#06x}")]
    InverseMismatch {
        /// Index of the offending table pair.
        table: usize,
        /// First input word at which the tables disagree.
        value: u16,
    },
    /// A table was built from the wrong number of entries.
    #[error("substitution table has {got} entries, expected {expected}")]
    EntryCount {
        /// Required entry count (the full 16-bit domain).
        expected: usize,
        /// Entry count actually supplied.
        got: usize,
    },
    /// A table set does not carry one table per state word.
    #[error("table set carries {got} tables, width requires {expected}")]
    TableCount {
        /// Table count required by the width.
        expected: usize,
        /// Table count actually present.
        got: usize,
    },
    /// The requested width is not part of the supported family.
    #[error("unsupported state width: {0} words")]
    UnsupportedWidth(usize),
    /// A serialized table set could not be encoded or decoded.
    #[error("table set encoding: {0}")]
    Codec(#[from] bincode::Error),
}
