// Hash-join intersection of two string sequences.
//
// The smaller side is indexed into an open-addressing table (power-of-two
// buckets, linear probing, index + 1 stored so 0 means "empty"), the larger
// side probes it. Scratch is therefore bounded by the smaller input. Bucket
// hashes use the crate hash with a caller-supplied seed, so adversarial
// inputs can be re-keyed.

use crate::error::{Error, Result};
use crate::hash::hash;
use crate::scratch::{ScratchAllocator, ScratchVec};

use super::Sequence;

/// Bucket count for `n` entries: next power of two above `2 * n`.
fn table_size(n: usize) -> usize {
    (n * 2).next_power_of_two().max(8)
}

/// Intersect two sequences, writing matching index pairs.
///
/// Every produced pair `(i, j)` satisfies `a[i] == b[j]`; the order of the
/// pairs is unspecified. Returns the number of pairs written to `out_a` /
/// `out_b` (which must have equal lengths).
///
/// With `require_unique`, a repeated string inside either input yields
/// [`Error::ContainsDuplicates`]: build-side repeats are caught while
/// indexing, probe-side repeats when a table entry matches twice. Without
/// it, duplicates produce one pair per equal combination.
///
/// Output capacity is part of the scratch contract: running out of room in
/// `out_a`/`out_b` is reported as [`Error::BadAlloc`] and the partial
/// output must be ignored.
pub fn intersect<SA, SB, A>(
    a: &SA,
    b: &SB,
    alloc: &A,
    seed: u64,
    require_unique: bool,
    out_a: &mut [usize],
    out_b: &mut [usize],
) -> Result<usize>
where
    SA: Sequence + ?Sized,
    SB: Sequence + ?Sized,
    A: ScratchAllocator,
{
    assert_eq!(out_a.len(), out_b.len(), "output arrays must have equal lengths");

    // Index the smaller side so scratch stays bounded by it.
    let a_is_smaller = a.len() <= b.len();
    let (small_len, large_len) = if a_is_smaller {
        (a.len(), b.len())
    } else {
        (b.len(), a.len())
    };
    let small = |i: usize| if a_is_smaller { a.get(i) } else { b.get(i) };
    let large = |j: usize| if a_is_smaller { b.get(j) } else { a.get(j) };

    if small_len == 0 {
        return Ok(0);
    }

    let capacity = table_size(small_len);
    let mask = capacity - 1;
    // index + 1 per slot; 0 marks an empty bucket.
    let mut buckets: ScratchVec<'_, usize, A> = ScratchVec::new_zeroed(capacity, alloc)?;
    // One matched-bit per build entry, for probe-side duplicate detection.
    let mut matched: ScratchVec<'_, u64, A> =
        ScratchVec::new_zeroed(small_len.div_ceil(64), alloc)?;

    // Build phase.
    for i in 0..small_len {
        let key = small(i);
        let mut slot = hash(key, seed) as usize & mask;
        loop {
            match buckets[slot] {
                0 => {
                    buckets[slot] = i + 1;
                    break;
                }
                occupant => {
                    if require_unique && small(occupant - 1) == key {
                        return Err(Error::ContainsDuplicates);
                    }
                    slot = (slot + 1) & mask;
                }
            }
        }
    }

    // Probe phase.
    let mut count = 0usize;
    for j in 0..large_len {
        let key = large(j);
        let mut slot = hash(key, seed) as usize & mask;
        loop {
            match buckets[slot] {
                0 => break,
                occupant => {
                    let i = occupant - 1;
                    if small(i) == key {
                        if require_unique {
                            let (word, bit) = (i / 64, i % 64);
                            if matched[word] >> bit & 1 != 0 {
                                return Err(Error::ContainsDuplicates);
                            }
                            matched[word] |= 1u64 << bit;
                        }
                        if count == out_a.len() {
                            return Err(Error::BadAlloc);
                        }
                        let (ai, bj) = if a_is_smaller { (i, j) } else { (j, i) };
                        out_a[count] = ai;
                        out_b[count] = bj;
                        count += 1;
                    }
                    slot = (slot + 1) & mask;
                }
            }
        }
    }

    Ok(count)
}
