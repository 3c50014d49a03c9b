//! The width-generic round engine.

use lstable_gen::{DiffusionMatrix, MAX_WORDS, SboxTable};

use crate::error::Error;

fn check_widths(state: usize, tables: usize, matrix: usize) -> Result<(), Error> {
    if state != matrix {
        return Err(Error::StateWidth {
            expected: matrix,
            got: state,
        });
    }
    if tables != matrix {
        return Err(Error::TableWidth {
            expected: matrix,
            got: tables,
        });
    }
    Ok(())
}

/// Applies `rounds` encryption rounds to `state` in place.
///
/// Each round substitutes every word through its table (confusion), then
/// replaces the state with the XOR combinations selected by the matrix rows
/// (diffusion). `rounds == 0` leaves the state untouched. The inputs are
/// checked for width agreement before any word is transformed.
pub fn run_rounds(
    state: &mut [u16],
    tables: &[SboxTable],
    matrix: &DiffusionMatrix,
    rounds: usize,
) -> Result<(), Error> {
    check_widths(state.len(), tables.len(), matrix.dim())?;

    let n = state.len();
    let mut mixed = [0u16; MAX_WORDS];
    for _ in 0..rounds {
        for ((slot, table), &word) in mixed.iter_mut().zip(tables).zip(state.iter()) {
            *slot = table.apply(word);
        }
        matrix.apply(&mixed[..n], state);
    }
    Ok(())
}

/// Applies `rounds` decryption rounds to `state` in place.
///
/// One encryption round is confusion followed by diffusion, so its inverse
/// applies the inverse diffusion map first and the inverse tables second;
/// running `rounds` such iterations undoes `rounds` encryption rounds
/// performed with the matching forward set.
pub fn run_rounds_inverse(
    state: &mut [u16],
    inv_tables: &[SboxTable],
    inv_matrix: &DiffusionMatrix,
    rounds: usize,
) -> Result<(), Error> {
    check_widths(state.len(), inv_tables.len(), inv_matrix.dim())?;

    let n = state.len();
    let mut mixed = [0u16; MAX_WORDS];
    for _ in 0..rounds {
        mixed[..n].copy_from_slice(state);
        inv_matrix.apply(&mixed[..n], state);
        for (word, table) in state.iter_mut().zip(inv_tables) {
            *word = table.apply(*word);
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lstable_gen::{SboxTable, TABLE_ENTRIES, TableSet, Width};
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha20Rng;

    fn rotate_table(offset: u16) -> SboxTable {
        SboxTable::from_entries(
            (0..TABLE_ENTRIES)
                .map(|v| (v as u16).wrapping_add(offset))
                .collect(),
        )
        .unwrap()
    }

    fn synthetic_set(width: Width) -> TableSet {
        let tables = (0..width.words())
            .map(|i| rotate_table(0x1001 * i as u16 + 3))
            .collect();
        TableSet::from_forward(width, tables).unwrap()
    }

    fn random_state<R: Rng>(rng: &mut R, n: usize) -> Vec<u16> {
        (0..n).map(|_| rng.gen()).collect()
    }

    #[test]
    fn zero_rounds_is_identity() {
        let set = synthetic_set(Width::W8);
        let mut state: Vec<u16> = (0..8).map(|i| i * 41).collect();
        let original = state.clone();
        run_rounds(&mut state, set.forward(), Width::W8.diffusion(), 0).unwrap();
        assert_eq!(state, original);
    }

    #[test]
    fn one_round_is_confusion_then_diffusion() {
        let set = synthetic_set(Width::W8);
        let matrix = Width::W8.diffusion();
        let mut rng = ChaCha20Rng::from_seed([7u8; 32]);
        let original = random_state(&mut rng, 8);

        let substituted: Vec<u16> = original
            .iter()
            .zip(set.forward())
            .map(|(&w, t)| t.apply(w))
            .collect();
        let mut expected = vec![0u16; 8];
        matrix.apply(&substituted, &mut expected);

        let mut state = original;
        run_rounds(&mut state, set.forward(), matrix, 1).unwrap();
        assert_eq!(state, expected);
    }

    #[test]
    fn decrypt_rounds_undo_encrypt_rounds_for_every_width() {
        let mut rng = ChaCha20Rng::from_seed([8u8; 32]);
        for width in Width::ALL {
            let set = synthetic_set(width);
            let rounds = width.default_rounds();
            for _ in 0..16 {
                let original = random_state(&mut rng, width.words());
                let mut state = original.clone();
                run_rounds(&mut state, set.forward(), width.diffusion(), rounds).unwrap();
                assert_ne!(state, original);
                run_rounds_inverse(
                    &mut state,
                    set.inverse(),
                    width.inverse_diffusion(),
                    rounds,
                )
                .unwrap();
                assert_eq!(state, original);
            }
        }
    }

    #[test]
    fn mismatched_state_width_is_reported() {
        let set = synthetic_set(Width::W8);
        let mut state = vec![0u16; 12];
        let err = run_rounds(&mut state, set.forward(), Width::W8.diffusion(), 1).unwrap_err();
        assert!(matches!(
            err,
            Error::StateWidth {
                expected: 8,
                got: 12
            }
        ));
    }

    #[test]
    fn mismatched_table_count_is_reported() {
        let set = synthetic_set(Width::W12);
        let mut state = vec![0u16; 8];
        let err = run_rounds(&mut state, set.forward(), Width::W8.diffusion(), 1).unwrap_err();
        assert!(matches!(
            err,
            Error::TableWidth {
                expected: 8,
                got: 12
            }
        ));
    }
}
