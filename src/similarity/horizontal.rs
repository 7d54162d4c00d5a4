// Conventional two-row Wagner-Fischer evaluation.
//
// For small matrices the wavefront bookkeeping costs more than it saves;
// this row-major traversal with two rolling rows covers that regime and
// doubles as the reference oracle for the diagonal engine in tests.

use crate::error::Result;
use crate::scratch::{Scalar, ScratchAllocator, ScratchVec};

use super::aligner::{Aligner, Distance};

/// Score `first` against `second` row by row with two rolling rows.
pub fn score_horizontally<C, D, AL, A>(
    first: &[C],
    second: &[C],
    mut aligner: AL,
    alloc: &A,
) -> Result<D>
where
    C: Copy + Scalar,
    D: Distance,
    AL: Aligner<C, D>,
    A: ScratchAllocator,
{
    let columns = second.len() + 1;
    let mut previous: ScratchVec<'_, D, A> = ScratchVec::new_zeroed(columns, alloc)?;
    let mut current: ScratchVec<'_, D, A> = ScratchVec::new_zeroed(columns, alloc)?;

    for (j, slot) in previous.iter_mut().enumerate() {
        *slot = aligner.init(j);
    }
    aligner.observe(&previous);

    for (i, &a) in first.iter().enumerate() {
        current[0] = aligner.init(i + 1);
        for (j, &b) in second.iter().enumerate() {
            current[j + 1] = aligner.cell(a, b, previous[j], previous[j + 1], current[j]);
        }
        aligner.observe(&current);
        std::mem::swap(&mut previous, &mut current);
    }

    Ok(aligner.score())
}
