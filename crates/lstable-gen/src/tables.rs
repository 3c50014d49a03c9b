//! Substitution tables and the validated per-width table set.

use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::width::Width;

/// Number of entries in one substitution table (the full 16-bit domain).
pub const TABLE_ENTRIES: usize = 1 << 16;

/// A word-to-word lookup table covering the full 16-bit domain.
///
/// A table used for encryption must be a permutation; that property is
/// enforced wherever a [`TableSet`] is constructed or decoded, so a set
/// handed to a cipher context is always bijective.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SboxTable {
    data: Box<[u16]>,
}

impl SboxTable {
    /// The identity table, mapping every word to itself. Starting point of
    /// the shuffle.
    pub fn identity() -> Self {
        Self {
            data: (0..TABLE_ENTRIES).map(|v| v as u16).collect(),
        }
    }

    /// Wraps raw entries; the vector must cover the full 16-bit domain.
    pub fn from_entries(entries: Vec<u16>) -> Result<Self, Error> {
        if entries.len() != TABLE_ENTRIES {
            return Err(Error::EntryCount {
                expected: TABLE_ENTRIES,
                got: entries.len(),
            });
        }
        Ok(Self {
            data: entries.into_boxed_slice(),
        })
    }

    /// Looks up one word.
    #[inline]
    pub fn apply(&self, word: u16) -> u16 {
        self.data[word as usize]
    }

    /// All entries, indexed by input word.
    pub fn entries(&self) -> &[u16] {
        &self.data
    }

    /// True when every 16-bit value appears exactly once.
    pub fn is_permutation(&self) -> bool {
        let mut seen = vec![0u64; TABLE_ENTRIES / 64];
        for &value in self.data.iter() {
            let slot = &mut seen[value as usize / 64];
            let mask = 1u64 << (value % 64);
            if *slot & mask != 0 {
                return false;
            }
            *slot |= mask;
        }
        true
    }

    /// Builds the table mapping each output back to its input, in a single
    /// forward pass.
    pub fn inverted(&self) -> Self {
        let mut data = vec![0u16; TABLE_ENTRIES].into_boxed_slice();
        for (input, &output) in self.data.iter().enumerate() {
            data[output as usize] = input as u16;
        }
        Self { data }
    }

    #[inline]
    pub(crate) fn swap(&mut self, a: usize, b: usize) {
        self.data.swap(a, b);
    }
}

/// Forward and inverse substitution tables for every word position of one
/// width.
///
/// Immutable once built; all constructors validate, so any value of this
/// type can be shared by reference with concurrent readers and fed to a
/// cipher context as-is.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableSet {
    width: Width,
    forward: Vec<SboxTable>,
    inverse: Vec<SboxTable>,
}

impl TableSet {
    /// Builds a set from forward tables, deriving the inverse of each, and
    /// validates the result.
    pub fn from_forward(width: Width, forward: Vec<SboxTable>) -> Result<Self, Error> {
        let inverse = forward.iter().map(SboxTable::inverted).collect();
        let set = Self {
            width,
            forward,
            inverse,
        };
        set.validate()?;
        Ok(set)
    }

    /// The width this set was generated for.
    pub fn width(&self) -> Width {
        self.width
    }

    /// Forward tables, one per word position.
    pub fn forward(&self) -> &[SboxTable] {
        &self.forward
    }

    /// Inverse tables, one per word position.
    pub fn inverse(&self) -> &[SboxTable] {
        &self.inverse
    }

    /// Checks table counts, the bijection property of every forward table,
    /// and both inverse identities over the full domain. Fails on the first
    /// violation; a set that fails here must not reach a cipher context.
    pub fn validate(&self) -> Result<(), Error> {
        let expected = self.width.words();
        if self.forward.len() != expected {
            return Err(Error::TableCount {
                expected,
                got: self.forward.len(),
            });
        }
        if self.inverse.len() != expected {
            return Err(Error::TableCount {
                expected,
                got: self.inverse.len(),
            });
        }

        for (table, (fwd, inv)) in self.forward.iter().zip(self.inverse.iter()).enumerate() {
            for half in [fwd, inv] {
                if half.entries().len() != TABLE_ENTRIES {
                    return Err(Error::EntryCount {
                        expected: TABLE_ENTRIES,
                        got: half.entries().len(),
                    });
                }
            }
            if !fwd.is_permutation() {
                return Err(Error::NotBijective { table });
            }
            for value in 0..TABLE_ENTRIES as u32 {
                let value = value as u16;
                if inv.apply(fwd.apply(value)) != value {
                    return Err(Error::InverseMismatch { table, value });
                }
            }
        }
        Ok(())
    }

    /// Serializes the set for reuse across process restarts.
    pub fn to_bytes(&self) -> Result<Vec<u8>, Error> {
        Ok(bincode::serialize(self)?)
    }

    /// Decodes a serialized set and revalidates it before handing it out.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, Error> {
        let set: Self = bincode::deserialize(bytes)?;
        set.validate()?;
        Ok(set)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn xor_table(mask: u16) -> SboxTable {
        SboxTable::from_entries((0..TABLE_ENTRIES).map(|v| v as u16 ^ mask).collect()).unwrap()
    }

    #[test]
    fn identity_is_a_permutation() {
        let table = SboxTable::identity();
        assert!(table.is_permutation());
        assert_eq!(table.apply(0x1234), 0x1234);
        assert_eq!(table.inverted(), table);
    }

    #[test]
    fn short_entry_vector_is_rejected() {
        let err = SboxTable::from_entries(vec![0u16; 100]).unwrap_err();
        assert!(matches!(err, Error::EntryCount { got: 100, .. }));
    }

    #[test]
    fn constant_table_is_not_a_permutation() {
        let table = SboxTable::from_entries(vec![7u16; TABLE_ENTRIES]).unwrap();
        assert!(!table.is_permutation());
    }

    #[test]
    fn inverted_undoes_the_forward_table() {
        let table = xor_table(0xa5c3);
        let inverse = table.inverted();
        for value in [0u16, 1, 0x00ff, 0xa5c3, 0xffff] {
            assert_eq!(inverse.apply(table.apply(value)), value);
            assert_eq!(table.apply(inverse.apply(value)), value);
        }
    }

    #[test]
    fn from_forward_rejects_non_permutations() {
        let mut tables: Vec<SboxTable> = (0..8).map(|i| xor_table(i as u16)).collect();
        tables[3] = SboxTable::from_entries(vec![0u16; TABLE_ENTRIES]).unwrap();
        let err = TableSet::from_forward(Width::W8, tables).unwrap_err();
        assert!(matches!(err, Error::NotBijective { table: 3 }));
    }

    #[test]
    fn from_forward_rejects_wrong_table_count() {
        let tables: Vec<SboxTable> = (0..5).map(|i| xor_table(i as u16)).collect();
        let err = TableSet::from_forward(Width::W8, tables).unwrap_err();
        assert!(matches!(
            err,
            Error::TableCount {
                expected: 8,
                got: 5
            }
        ));
    }

    #[test]
    fn serialization_roundtrip() {
        let tables: Vec<SboxTable> = (0..8).map(|i| xor_table(0x1111 * i as u16)).collect();
        let set = TableSet::from_forward(Width::W8, tables).unwrap();
        let bytes = set.to_bytes().unwrap();
        let decoded = TableSet::from_bytes(&bytes).unwrap();
        assert_eq!(decoded, set);
    }

    #[test]
    fn corrupted_serialization_is_rejected() {
        let tables: Vec<SboxTable> = (0..8).map(|i| xor_table(i as u16)).collect();
        let set = TableSet::from_forward(Width::W8, tables).unwrap();
        let mut bytes = set.to_bytes().unwrap();
        let mid = bytes.len() / 2;
        bytes[mid] ^= 0xff;
        assert!(TableSet::from_bytes(&bytes).is_err());
    }
}
