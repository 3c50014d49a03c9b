//! GF(2) matrix arithmetic for the word-level diffusion layer.

/// Largest supported matrix dimension, matching the widest state.
pub const MAX_WORDS: usize = 16;

/// Square binary matrix of dimension `n ≤ 16` over GF(2).
///
/// Stored row-major with each row packed into a `u16`; bit `i` of a row
/// selects column `i`, i.e. word position `i` of the state. Applied to a
/// word vector, row `j` XORs together the words at its set bits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DiffusionMatrix {
    n: usize,
    rows: [u16; MAX_WORDS],
}

impl DiffusionMatrix {
    /// Builds a matrix from packed rows. Rows past `n` must be zero and
    /// bits past column `n` must be clear.
    pub const fn from_rows(n: usize, rows: [u16; MAX_WORDS]) -> Self {
        assert!(n <= MAX_WORDS);
        Self { n, rows }
    }

    /// Returns the zero matrix of dimension `n`.
    pub fn zero(n: usize) -> Self {
        Self::from_rows(n, [0u16; MAX_WORDS])
    }

    /// Returns the identity matrix of dimension `n`.
    pub fn identity(n: usize) -> Self {
        let mut rows = [0u16; MAX_WORDS];
        for (i, row) in rows.iter_mut().enumerate().take(n) {
            *row = 1u16 << i;
        }
        Self::from_rows(n, rows)
    }

    /// Matrix dimension.
    pub fn dim(&self) -> usize {
        self.n
    }

    /// The packed rows (one `u16` per state word).
    pub fn rows(&self) -> &[u16] {
        &self.rows[..self.n]
    }

    /// Applies the matrix to a word vector, writing into `output`. Both
    /// slices must have length `n`.
    pub fn apply(&self, input: &[u16], output: &mut [u16]) {
        debug_assert_eq!(input.len(), self.n);
        debug_assert_eq!(output.len(), self.n);
        for (out, &row) in output.iter_mut().zip(self.rows.iter()) {
            let mut acc = 0u16;
            let mut bits = row;
            while bits != 0 {
                let idx = bits.trailing_zeros() as usize;
                acc ^= input[idx];
                bits &= bits - 1;
            }
            *out = acc;
        }
    }

    /// Multiplies two matrices of the same dimension (`self * rhs`).
    pub fn mul(&self, rhs: &Self) -> Self {
        assert_eq!(self.n, rhs.n, "dimension mismatch");
        let mut result = Self::zero(self.n);
        for (row_idx, &row_bits) in self.rows[..self.n].iter().enumerate() {
            let mut acc = 0u16;
            let mut bits = row_bits;
            while bits != 0 {
                let bit = bits.trailing_zeros() as usize;
                acc ^= rhs.rows[bit];
                bits &= bits - 1;
            }
            result.rows[row_idx] = acc;
        }
        result
    }

    /// Attempts to invert the matrix via Gaussian elimination. `None` means
    /// the matrix is singular and cannot define a decryptable round.
    pub fn invert(&self) -> Option<Self> {
        let mut left = self.rows;
        let mut right = Self::identity(self.n).rows;

        for col in 0..self.n {
            let mut pivot = None;
            for (row_idx, row_bits) in left.iter().enumerate().take(self.n).skip(col) {
                if (row_bits >> col) & 1 == 1 {
                    pivot = Some(row_idx);
                    break;
                }
            }
            let pivot = pivot?;
            if pivot != col {
                left.swap(pivot, col);
                right.swap(pivot, col);
            }
            for row in 0..self.n {
                if row != col && ((left[row] >> col) & 1 == 1) {
                    left[row] ^= left[col];
                    right[row] ^= right[col];
                }
            }
        }

        Some(Self::from_rows(self.n, right))
    }

    /// Returns true if the matrix is invertible over GF(2).
    pub fn is_invertible(&self) -> bool {
        self.invert().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{RngCore, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn random_matrix<R: RngCore>(rng: &mut R, n: usize) -> DiffusionMatrix {
        let mask = if n == MAX_WORDS {
            u16::MAX
        } else {
            (1u16 << n) - 1
        };
        let mut rows = [0u16; MAX_WORDS];
        for row in rows.iter_mut().take(n) {
            *row = rng.next_u32() as u16 & mask;
        }
        DiffusionMatrix::from_rows(n, rows)
    }

    fn random_invertible<R: RngCore>(rng: &mut R, n: usize) -> DiffusionMatrix {
        loop {
            let candidate = random_matrix(rng, n);
            if candidate.is_invertible() {
                return candidate;
            }
        }
    }

    #[test]
    fn identity_is_its_own_inverse() {
        for n in [8, 12, 16] {
            let id = DiffusionMatrix::identity(n);
            assert_eq!(id.invert(), Some(id));
        }
    }

    #[test]
    fn duplicate_rows_are_singular() {
        let mut rows = [0u16; MAX_WORDS];
        rows[0] = 0b1011;
        rows[1] = 0b1011;
        rows[2] = 0b0010;
        rows[3] = 0b1000;
        let m = DiffusionMatrix::from_rows(4, rows);
        assert!(m.invert().is_none());
        assert!(!m.is_invertible());
    }

    #[test]
    fn inversion_roundtrip() {
        let mut rng = ChaCha20Rng::from_seed([1u8; 32]);
        for n in [8, 12, 16] {
            for _ in 0..16 {
                let m = random_invertible(&mut rng, n);
                let inv = m.invert().expect("invertible");
                assert_eq!(m.mul(&inv), DiffusionMatrix::identity(n));
                assert_eq!(inv.mul(&m), DiffusionMatrix::identity(n));
            }
        }
    }

    #[test]
    fn apply_inverse_recovers_input() {
        let mut rng = ChaCha20Rng::from_seed([2u8; 32]);
        for n in [8, 12, 16] {
            let m = random_invertible(&mut rng, n);
            let inv = m.invert().unwrap();
            let input: Vec<u16> = (0..n).map(|_| rng.next_u32() as u16).collect();
            let mut mixed = vec![0u16; n];
            let mut recovered = vec![0u16; n];
            m.apply(&input, &mut mixed);
            inv.apply(&mixed, &mut recovered);
            assert_eq!(recovered, input);
        }
    }

    #[test]
    fn mul_matches_sequential_application() {
        let mut rng = ChaCha20Rng::from_seed([3u8; 32]);
        let a = random_invertible(&mut rng, 12);
        let b = random_invertible(&mut rng, 12);
        let input: Vec<u16> = (0..12).map(|_| rng.next_u32() as u16).collect();

        let mut via_b = vec![0u16; 12];
        let mut direct = vec![0u16; 12];
        b.apply(&input, &mut via_b);
        let mut sequential = vec![0u16; 12];
        a.apply(&via_b, &mut sequential);
        a.mul(&b).apply(&input, &mut direct);
        assert_eq!(direct, sequential);
    }
}
