// Wavefront evaluation of the DP matrix, three anti-diagonals at a time.
//
// Only three rolling buffers of length `min(|a|,|b|) + 1` are ever
// materialized, plus a reverse copy of the shorter string so both inputs
// are traversed in increasing order inside every diagonal. The traversal
// has three phases:
//
//   1. Upper-left triangle: diagonals grow from length 1 to `shorter + 1`;
//      both extreme cells are boundary-initialized.
//   2. Middle band: all diagonals have full length; only the bottom cell is
//      initialized, and the "previous" buffer advances by one slot per step
//      to keep the geometry aligned.
//   3. Lower-right triangle: diagonals shrink to length 1; no boundary
//      cells, same one-slot advance.
//
// At termination the last computed cell equals the Wagner-Fischer value at
// `(|a|, |b|)` for global alignment; local alignment tracks the running
// maximum instead.

use crate::error::Result;
use crate::scratch::{Scalar, ScratchAllocator, ScratchVec};

use super::aligner::{Aligner, Distance};

/// Diagonals shorter than this are never worth fanning out.
#[cfg(feature = "parallel")]
const PARALLEL_GRAIN: usize = 256;

/// Compute one diagonal of `out.len()` cells.
fn compute_diagonal<C, D, AL>(
    aligner: &AL,
    a_reversed: &[C],
    b: &[C],
    pre_substitution: &[D],
    pre_gap: &[D],
    out: &mut [D],
    parallel: bool,
) where
    C: Copy + Sync,
    D: Distance,
    AL: Aligner<C, D>,
{
    let n = out.len();
    debug_assert!(a_reversed.len() == n && b.len() == n);
    debug_assert!(pre_substitution.len() == n && pre_gap.len() == n + 1);

    #[cfg(feature = "parallel")]
    if parallel && n >= PARALLEL_GRAIN {
        use rayon::prelude::*;
        out.par_iter_mut().enumerate().for_each(|(i, cell)| {
            *cell = aligner.cell(
                a_reversed[i],
                b[i],
                pre_substitution[i],
                pre_gap[i],
                pre_gap[i + 1],
            );
        });
        return;
    }
    #[cfg(not(feature = "parallel"))]
    let _ = parallel;

    for i in 0..n {
        out[i] = aligner.cell(
            a_reversed[i],
            b[i],
            pre_substitution[i],
            pre_gap[i],
            pre_gap[i + 1],
        );
    }
}

/// Score `first` against `second` with the given aligner, evaluating the
/// matrix one anti-diagonal at a time.
///
/// `parallel` distributes individual diagonals over the rayon pool when the
/// crate is built with the `parallel` feature; the results are identical to
/// the serial evaluation.
pub fn score_diagonally<C, D, AL, A>(
    first: &[C],
    second: &[C],
    mut aligner: AL,
    alloc: &A,
    parallel: bool,
) -> Result<D>
where
    C: Copy + Scalar + Sync,
    D: Distance,
    AL: Aligner<C, D>,
    A: ScratchAllocator,
{
    // Orient so the diagonal buffers are sized by the shorter string. The
    // substitution source is commutative by contract, so the swap is free.
    let (shorter, longer) = if first.len() <= second.len() {
        (first, second)
    } else {
        (second, first)
    };
    let shorter_len = shorter.len();
    let longer_len = longer.len();

    if shorter_len == 0 {
        // One string is empty: pure gaps (global) or nothing to match
        // (local); either way the boundary rule is the answer.
        return Ok(aligner.init(longer_len));
    }

    let shorter_dim = shorter_len + 1;
    let longer_dim = longer_len + 1;
    let diagonals_count = shorter_dim + longer_dim - 1;

    let mut previous: ScratchVec<'_, D, A> = ScratchVec::new_zeroed(shorter_dim, alloc)?;
    let mut current: ScratchVec<'_, D, A> = ScratchVec::new_zeroed(shorter_dim, alloc)?;
    let mut next: ScratchVec<'_, D, A> = ScratchVec::new_zeroed(shorter_dim, alloc)?;

    // Reverse copy of the shorter string, so every diagonal walks both
    // inputs left to right.
    let mut shorter_reversed: ScratchVec<'_, C, A> = ScratchVec::new_zeroed(shorter_len, alloc)?;
    for (slot, &item) in shorter_reversed.iter_mut().zip(shorter.iter().rev()) {
        *slot = item;
    }

    // The first two diagonals are pure boundary.
    previous[0] = aligner.init(0);
    current[0] = aligner.init(1);
    current[1] = aligner.init(1);

    // Phase 1: growing diagonals of the upper-left triangle.
    let mut diagonal_index = 2usize;
    while diagonal_index < shorter_dim {
        let interior = diagonal_index - 1; // cells between the two boundary ends
        compute_diagonal(
            &aligner,
            &shorter_reversed[shorter_len - diagonal_index + 1..],
            &longer[..interior],
            &previous[..interior],
            &current[..interior + 1],
            &mut next[1..diagonal_index],
            parallel,
        );
        next[0] = aligner.init(diagonal_index);
        next[diagonal_index] = aligner.init(diagonal_index);
        aligner.observe(&next[1..diagonal_index]);

        std::mem::swap(&mut previous, &mut current);
        std::mem::swap(&mut current, &mut next);
        diagonal_index += 1;
    }

    // Phase 2: the full-length band between the triangles.
    while diagonal_index < longer_dim {
        let cells = shorter_dim - 1;
        let band_offset = diagonal_index - shorter_dim;
        compute_diagonal(
            &aligner,
            &shorter_reversed[..cells],
            &longer[band_offset..band_offset + cells],
            &previous[..cells],
            &current[..cells + 1],
            &mut next[..cells],
            parallel,
        );
        next[cells] = aligner.init(diagonal_index);
        aligner.observe(&next[..cells]);

        std::mem::swap(&mut previous, &mut current);
        std::mem::swap(&mut current, &mut next);
        // Drop the first entry of the new "previous" so its cells stay
        // aligned with the shifted diagonal geometry.
        previous.copy_within(1.., 0);
        diagonal_index += 1;
    }

    // Phase 3: shrinking diagonals of the lower-right triangle.
    while diagonal_index < diagonals_count {
        let cells = diagonals_count - diagonal_index;
        let band_offset = diagonal_index - shorter_dim;
        compute_diagonal(
            &aligner,
            &shorter_reversed[..cells],
            &longer[band_offset..band_offset + cells],
            &previous[..cells],
            &current[..cells + 1],
            &mut next[..cells],
            parallel,
        );
        aligner.observe(&next[..cells]);

        std::mem::swap(&mut previous, &mut current);
        std::mem::swap(&mut current, &mut next);
        previous.copy_within(1.., 0);
        diagonal_index += 1;
    }

    Ok(aligner.score())
}
