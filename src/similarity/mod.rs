// Pairwise string similarity: Levenshtein distance, Needleman-Wunsch and
// Smith-Waterman scores, single-pair and batched.
//
// One wavefront core (`diagonal`) serves every variant; it is parameterized
// by character type (byte or pre-decoded rune), distance cell width, the
// global/local recurrence, and the substitution source. Uniform Levenshtein
// picks the narrowest cell type that can hold `max(|a|, |b|) + 1`; weighted
// scores use machine-word cells since matrix entries are signed. Matrices
// small on their shorter side route to the two-row Wagner-Fischer
// evaluation instead, where the wavefront set-up cost is not worth paying.

mod aligner;
mod diagonal;
mod horizontal;

pub use aligner::{SubstitutionCost, SubstitutionMatrix, UniformCosts};

use aligner::{Distance, GlobalAligner, LocalAligner};
use diagonal::score_diagonally;
use horizontal::score_horizontally;

use crate::error::Result;
use crate::scratch::{Scalar, ScratchAllocator};
use crate::utf8;

/// Below this shorter-side length the two-row evaluation wins.
const WAVEFRONT_THRESHOLD: usize = 16;

fn uniform_global_fixed<C, D, A>(a: &[C], b: &[C], alloc: &A, parallel: bool) -> Result<D>
where
    C: Copy + Scalar + Sync,
    D: Distance,
    A: ScratchAllocator,
    UniformCosts: SubstitutionCost<C>,
{
    let aligner: GlobalAligner<UniformCosts, D> = GlobalAligner::new(UniformCosts, 1);
    if a.len().min(b.len()) < WAVEFRONT_THRESHOLD && !parallel {
        score_horizontally(a, b, aligner, alloc)
    } else {
        score_diagonally(a, b, aligner, alloc, parallel)
    }
}

/// Uniform-cost global distance with the narrowest safe cell width.
fn uniform_global<C, A>(a: &[C], b: &[C], alloc: &A, parallel: bool) -> Result<usize>
where
    C: Copy + Scalar + Sync,
    A: ScratchAllocator,
    UniformCosts: SubstitutionCost<C>,
{
    // The distance is bounded by max(|a|, |b|); pick cells that hold it.
    let max_dim = a.len().max(b.len()) + 1;
    if max_dim <= u8::MAX as usize {
        uniform_global_fixed::<C, u8, A>(a, b, alloc, parallel).map(usize::from)
    } else if max_dim <= u16::MAX as usize {
        uniform_global_fixed::<C, u16, A>(a, b, alloc, parallel).map(usize::from)
    } else {
        uniform_global_fixed::<C, usize, A>(a, b, alloc, parallel)
    }
}

/// Byte-level Levenshtein distance between `a` and `b`.
pub fn levenshtein<A: ScratchAllocator>(a: &[u8], b: &[u8], alloc: &A) -> Result<usize> {
    uniform_global(a, b, alloc, false)
}

/// Codepoint-level Levenshtein distance between two UTF-8 strings.
///
/// Pure-ASCII inputs take the byte path directly; anything else is decoded
/// to runes first, so [`crate::Error::InvalidUtf8`] is returned for
/// malformed input.
pub fn levenshtein_utf8<A: ScratchAllocator>(a: &[u8], b: &[u8], alloc: &A) -> Result<usize> {
    if a.is_ascii() && b.is_ascii() {
        return levenshtein(a, b, alloc);
    }
    let a_runes = utf8::decode_runes(a)?;
    let b_runes = utf8::decode_runes(b)?;
    uniform_global(&a_runes, &b_runes, alloc, false)
}

/// Needleman-Wunsch global alignment cost with a 256x256 substitution
/// matrix and a uniform per-gap cost.
///
/// The matrix holds costs (lower is better); the result is the total cost
/// of the cheapest end-to-end alignment.
pub fn needleman_wunsch<A: ScratchAllocator>(
    a: &[u8],
    b: &[u8],
    matrix: &SubstitutionMatrix,
    gap_cost: i8,
    alloc: &A,
) -> Result<isize> {
    let aligner: GlobalAligner<_, isize> = GlobalAligner::new(matrix, gap_cost as i32);
    if a.len().min(b.len()) < WAVEFRONT_THRESHOLD {
        score_horizontally(a, b, aligner, alloc)
    } else {
        score_diagonally(a, b, aligner, alloc, false)
    }
}

/// Smith-Waterman local alignment score with a 256x256 similarity matrix
/// and a uniform gap penalty (negative).
///
/// The matrix holds similarities (higher is better); the result is the
/// best score over all substring pairs, never below zero.
pub fn smith_waterman<A: ScratchAllocator>(
    a: &[u8],
    b: &[u8],
    matrix: &SubstitutionMatrix,
    gap_penalty: i8,
    alloc: &A,
) -> Result<isize> {
    let aligner: LocalAligner<_, isize> = LocalAligner::new(matrix, gap_penalty as i32);
    if a.len().min(b.len()) < WAVEFRONT_THRESHOLD {
        score_horizontally(a, b, aligner, alloc)
    } else {
        score_diagonally(a, b, aligner, alloc, false)
    }
}

/// Byte-level Levenshtein distances for a batch of pairs.
///
/// `out.len()` must equal `pairs.len()`. On error nothing can be assumed
/// about `out`.
pub fn levenshtein_batch<A: ScratchAllocator>(
    pairs: &[(&[u8], &[u8])],
    alloc: &A,
    out: &mut [usize],
) -> Result<()> {
    assert_eq!(pairs.len(), out.len(), "distance buffer must match pair count");
    for (slot, &(a, b)) in out.iter_mut().zip(pairs) {
        *slot = levenshtein(a, b, alloc)?;
    }
    Ok(())
}

/// Codepoint-level Levenshtein distances for a batch of UTF-8 pairs.
pub fn levenshtein_utf8_batch<A: ScratchAllocator>(
    pairs: &[(&[u8], &[u8])],
    alloc: &A,
    out: &mut [usize],
) -> Result<()> {
    assert_eq!(pairs.len(), out.len(), "distance buffer must match pair count");
    for (slot, &(a, b)) in out.iter_mut().zip(pairs) {
        *slot = levenshtein_utf8(a, b, alloc)?;
    }
    Ok(())
}

/// Needleman-Wunsch scores for a batch of pairs.
pub fn needleman_wunsch_batch<A: ScratchAllocator>(
    pairs: &[(&[u8], &[u8])],
    matrix: &SubstitutionMatrix,
    gap_cost: i8,
    alloc: &A,
    out: &mut [isize],
) -> Result<()> {
    assert_eq!(pairs.len(), out.len(), "score buffer must match pair count");
    for (slot, &(a, b)) in out.iter_mut().zip(pairs) {
        *slot = needleman_wunsch(a, b, matrix, gap_cost, alloc)?;
    }
    Ok(())
}

/// Smith-Waterman scores for a batch of pairs.
pub fn smith_waterman_batch<A: ScratchAllocator>(
    pairs: &[(&[u8], &[u8])],
    matrix: &SubstitutionMatrix,
    gap_penalty: i8,
    alloc: &A,
    out: &mut [isize],
) -> Result<()> {
    assert_eq!(pairs.len(), out.len(), "score buffer must match pair count");
    for (slot, &(a, b)) in out.iter_mut().zip(pairs) {
        *slot = smith_waterman(a, b, matrix, gap_penalty, alloc)?;
    }
    Ok(())
}

/// Parallel batched Levenshtein: pairs are distributed over the rayon
/// pool, each evaluated serially. Results are identical to
/// [`levenshtein_batch`].
#[cfg(feature = "parallel")]
pub fn levenshtein_batch_parallel<A: ScratchAllocator + Sync>(
    pairs: &[(&[u8], &[u8])],
    alloc: &A,
    out: &mut [usize],
) -> Result<()> {
    use rayon::prelude::*;
    assert_eq!(pairs.len(), out.len(), "distance buffer must match pair count");
    out.par_iter_mut()
        .zip(pairs.par_iter())
        .try_for_each(|(slot, &(a, b))| {
            *slot = levenshtein(a, b, alloc)?;
            Ok(())
        })
}

/// Parallel single-pair Levenshtein: worker threads collaborate on each
/// anti-diagonal. Worthwhile only for strings long enough that one
/// diagonal spans many cache lines.
#[cfg(feature = "parallel")]
pub fn levenshtein_parallel<A: ScratchAllocator + Sync>(
    a: &[u8],
    b: &[u8],
    alloc: &A,
) -> Result<usize> {
    uniform_global(a, b, alloc, true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::scratch::SystemAllocator;

    fn distance(a: &str, b: &str) -> usize {
        levenshtein(a.as_bytes(), b.as_bytes(), &SystemAllocator).unwrap()
    }

    #[test]
    fn spec_vectors() {
        assert_eq!(distance("kitten", "sitting"), 3);
        assert_eq!(distance("flaw", "lawn"), 2);
        assert_eq!(distance("", "abc"), 3);
    }

    #[test]
    fn metric_identities() {
        let words = ["", "a", "ab", "kitten", "sitting", "abcabc", "xyzzy"];
        for a in words {
            assert_eq!(distance(a, ""), a.len());
            assert_eq!(distance("", a), a.len());
            assert_eq!(distance(a, a), 0);
            for b in words {
                assert_eq!(distance(a, b), distance(b, a), "symmetry {a} {b}");
                for c in words {
                    assert!(
                        distance(a, c) <= distance(a, b) + distance(b, c),
                        "triangle {a} {b} {c}"
                    );
                }
            }
        }
    }

    #[test]
    fn crosses_the_wavefront_threshold_consistently() {
        // The same logical inputs, below and above the horizontal bridge
        // cutoff, must agree with a naive reference.
        fn naive(a: &[u8], b: &[u8]) -> usize {
            let mut prev: Vec<usize> = (0..=b.len()).collect();
            let mut cur = vec![0usize; b.len() + 1];
            for (i, &x) in a.iter().enumerate() {
                cur[0] = i + 1;
                for (j, &y) in b.iter().enumerate() {
                    cur[j + 1] = (prev[j] + usize::from(x != y))
                        .min(prev[j + 1] + 1)
                        .min(cur[j] + 1);
                }
                std::mem::swap(&mut prev, &mut cur);
            }
            prev[b.len()]
        }
        for len in [1usize, 8, 15, 16, 17, 40, 90] {
            let a: Vec<u8> = (0..len).map(|i| b'a' + (i % 7) as u8).collect();
            let b: Vec<u8> = (0..len + 5).map(|i| b'a' + (i % 5) as u8).collect();
            assert_eq!(
                levenshtein(&a, &b, &SystemAllocator).unwrap(),
                naive(&a, &b),
                "len={len}"
            );
        }
    }

    #[test]
    fn utf8_distance_counts_codepoints() {
        let alloc = SystemAllocator;
        // Byte distance of these is 4; rune distance is 2.
        assert_eq!(levenshtein_utf8("ää".as_bytes(), "öö".as_bytes(), &alloc).unwrap(), 2);
        // ASCII short-circuit.
        assert_eq!(levenshtein_utf8(b"abc", b"abd", &alloc).unwrap(), 1);
        // Mixed widths.
        assert_eq!(levenshtein_utf8("€".as_bytes(), b"e", &alloc).unwrap(), 1);
        assert_eq!(
            levenshtein_utf8(b"\xFF", b"ok", &alloc),
            Err(Error::InvalidUtf8)
        );
    }

    #[test]
    fn distances_at_the_u8_ladder_boundary() {
        let a = vec![b'x'; 255];
        let b: Vec<u8> = Vec::new();
        assert_eq!(levenshtein(&a, &b, &SystemAllocator).unwrap(), 255);
        let c = vec![b'y'; 255];
        assert_eq!(levenshtein(&a, &c, &SystemAllocator).unwrap(), 255);
    }

    #[test]
    fn u16_ladder_rung() {
        let a = vec![b'x'; 300];
        let b = vec![b'y'; 280];
        assert_eq!(levenshtein(&a, &b, &SystemAllocator).unwrap(), 300);
    }

    #[test]
    fn needleman_wunsch_reduces_to_levenshtein_with_unit_costs() {
        let matrix = SubstitutionMatrix::uniform(0, 1);
        let pairs: [(&[u8], &[u8]); 4] = [
            (b"kitten", b"sitting"),
            (b"GATTACA", b"GCATGCU"),
            (b"aaaa", b"aaaa"),
            (b"short", b"a significantly longer string"),
        ];
        for (a, b) in pairs {
            let nw = needleman_wunsch(a, b, &matrix, 1, &SystemAllocator).unwrap();
            let lev = levenshtein(a, b, &SystemAllocator).unwrap();
            assert_eq!(nw, lev as isize);
        }
    }

    #[test]
    fn smith_waterman_is_zero_for_disjoint_alphabets() {
        let matrix = SubstitutionMatrix::uniform(5, -4);
        let score = smith_waterman(b"aaaaaaaaaaaaaaaaaaaa", b"bbbbbbbbbbbbbbbbbbbb", &matrix, -4, &SystemAllocator)
            .unwrap();
        assert_eq!(score, 0);
    }

    #[test]
    fn smith_waterman_finds_common_core() {
        let matrix = SubstitutionMatrix::uniform(2, -1);
        let score = smith_waterman(
            b"prefix SHARED-SEGMENT suffix",
            b"other SHARED-SEGMENT trailer",
            &matrix,
            -2,
            &SystemAllocator,
        )
        .unwrap();
        // " SHARED-SEGMENT " aligns exactly: 16 matches * 2.
        assert_eq!(score, 32);
    }

    #[test]
    fn batch_matches_single_calls() {
        let pairs: Vec<(&[u8], &[u8])> = vec![
            (b"kitten", b"sitting"),
            (b"", b""),
            (b"abc", b""),
            (b"same", b"same"),
            (b"a longer left side here", b"short"),
        ];
        let mut out = vec![0usize; pairs.len()];
        levenshtein_batch(&pairs, &SystemAllocator, &mut out).unwrap();
        for (&(a, b), &got) in pairs.iter().zip(&out) {
            assert_eq!(got, levenshtein(a, b, &SystemAllocator).unwrap());
        }

        let similarity = SubstitutionMatrix::uniform(2, -1);
        let mut local = vec![0isize; pairs.len()];
        smith_waterman_batch(&pairs, &similarity, -2, &SystemAllocator, &mut local).unwrap();
        for (&(a, b), &got) in pairs.iter().zip(&local) {
            assert_eq!(got, smith_waterman(a, b, &similarity, -2, &SystemAllocator).unwrap());
        }
    }

    #[test]
    fn utf8_batch_propagates_invalid_input() {
        let alloc = SystemAllocator;
        let good: Vec<(&[u8], &[u8])> =
            vec![("αβγ".as_bytes(), "αδγ".as_bytes()), (b"ascii", b"ascil")];
        let mut out = vec![0usize; good.len()];
        levenshtein_utf8_batch(&good, &alloc, &mut out).unwrap();
        assert_eq!(out, vec![1, 1]);

        let bad: Vec<(&[u8], &[u8])> = vec![(b"ok", b"ok"), (b"\xFF", b"nope")];
        let mut out = vec![0usize; bad.len()];
        assert_eq!(
            levenshtein_utf8_batch(&bad, &alloc, &mut out),
            Err(Error::InvalidUtf8)
        );
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_paths_match_serial() {
        let a = vec![b'q'; 2000];
        let mut b = a.clone();
        for i in (0..b.len()).step_by(17) {
            b[i] = b'z';
        }
        let serial = levenshtein(&a, &b, &SystemAllocator).unwrap();
        assert_eq!(levenshtein_parallel(&a, &b, &SystemAllocator).unwrap(), serial);

        let pairs: Vec<(&[u8], &[u8])> = (0..32).map(|_| (&a[..], &b[..])).collect();
        let mut serial_out = vec![0usize; pairs.len()];
        let mut parallel_out = vec![0usize; pairs.len()];
        levenshtein_batch(&pairs, &SystemAllocator, &mut serial_out).unwrap();
        levenshtein_batch_parallel(&pairs, &SystemAllocator, &mut parallel_out).unwrap();
        assert_eq!(serial_out, parallel_out);
    }
}
