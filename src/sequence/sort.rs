// Lexicographic argsort and the p-gram radix sort.
//
// Both sorts are keyed on p-grams: the leading eight bytes of a string,
// zero-padded and packed big-endian, so unsigned 64-bit comparison orders
// them like a byte-wise prefix comparison. The argsort resolves p-gram ties
// with a full string comparison, which also gives shorter-prefix-first
// ordering for free (`[u8]::cmp` is exactly that).

use crate::error::Result;
use crate::scratch::{ScratchAllocator, ScratchVec};

use super::Sequence;

/// Pack the leading eight bytes of `s` as a big-endian sort key.
#[inline]
pub fn pgram(s: &[u8]) -> u64 {
    let mut buf = [0u8; 8];
    let take = s.len().min(8);
    buf[..take].copy_from_slice(&s[..take]);
    u64::from_be_bytes(buf)
}

/// Write into `order` a permutation that sorts `seq` lexicographically.
///
/// `order.len()` must equal `seq.len()`. Equal strings keep their original
/// relative order. Scratch holds one 64-bit key per string.
pub fn argsort<S, A>(seq: &S, alloc: &A, order: &mut [usize]) -> Result<()>
where
    S: Sequence + ?Sized,
    A: ScratchAllocator,
{
    let n = seq.len();
    assert_eq!(order.len(), n, "permutation buffer must match sequence length");

    let mut keys: ScratchVec<'_, u64, A> = ScratchVec::new_zeroed(n, alloc)?;
    for i in 0..n {
        keys[i] = pgram(seq.get(i));
    }
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i;
    }

    let comparator = |&a: &usize, &b: &usize| {
        keys[a]
            .cmp(&keys[b])
            .then_with(|| seq.get(a).cmp(seq.get(b)))
            .then(a.cmp(&b))
    };

    order.sort_unstable_by(comparator);
    Ok(())
}

/// Parallel variant of [`argsort`], splitting comparisons across the rayon
/// pool. The resulting permutation is identical to the serial one.
#[cfg(feature = "parallel")]
pub fn argsort_parallel<S, A>(seq: &S, alloc: &A, order: &mut [usize]) -> Result<()>
where
    S: Sequence + Sync + ?Sized,
    A: ScratchAllocator,
{
    use rayon::prelude::*;

    let n = seq.len();
    assert_eq!(order.len(), n, "permutation buffer must match sequence length");

    let mut keys: ScratchVec<'_, u64, A> = ScratchVec::new_zeroed(n, alloc)?;
    for i in 0..n {
        keys[i] = pgram(seq.get(i));
    }
    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i;
    }

    let keys = &*keys;
    order.par_sort_unstable_by(|&a, &b| {
        keys[a]
            .cmp(&keys[b])
            .then_with(|| seq.get(a).cmp(seq.get(b)))
            .then(a.cmp(&b))
    });
    Ok(())
}

/// Stable LSD radix sort of packed p-grams.
///
/// Sorts `pgrams` ascending in place and writes the applied permutation to
/// `order`: `sorted[i] == original[order[i]]`. Scratch holds one key and
/// one index per entry.
pub fn pgrams_sort<A>(pgrams: &mut [u64], alloc: &A, order: &mut [usize]) -> Result<()>
where
    A: ScratchAllocator,
{
    let n = pgrams.len();
    assert_eq!(order.len(), n, "permutation buffer must match key count");

    for (i, slot) in order.iter_mut().enumerate() {
        *slot = i;
    }
    if n <= 1 {
        return Ok(());
    }

    let mut spare_keys: ScratchVec<'_, u64, A> = ScratchVec::new_zeroed(n, alloc)?;
    let mut spare_order: ScratchVec<'_, usize, A> = ScratchVec::new_zeroed(n, alloc)?;

    // Eight passes over 8-bit digits, least significant first. Each pass is
    // a stable counting sort between the primary and spare buffers.
    for pass in 0..8 {
        let shift = pass * 8;
        let mut counts = [0usize; 256];
        for &key in pgrams.iter() {
            counts[(key >> shift) as usize & 0xFF] += 1;
        }
        if counts.iter().any(|&c| c == n) {
            continue; // all keys share this digit
        }
        let mut positions = [0usize; 256];
        let mut running = 0;
        for (digit, &count) in counts.iter().enumerate() {
            positions[digit] = running;
            running += count;
        }
        for i in 0..n {
            let key = pgrams[i];
            let digit = (key >> shift) as usize & 0xFF;
            let at = positions[digit];
            positions[digit] += 1;
            spare_keys[at] = key;
            spare_order[at] = order[i];
        }
        pgrams.copy_from_slice(&spare_keys);
        order.copy_from_slice(&spare_order);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scratch::SystemAllocator;

    #[test]
    fn pgram_packing() {
        assert_eq!(pgram(b""), 0);
        assert_eq!(pgram(b"A"), 0x4100_0000_0000_0000);
        assert_eq!(pgram(b"ABCDEFGH"), u64::from_be_bytes(*b"ABCDEFGH"));
        // Bytes past the eighth are ignored.
        assert_eq!(pgram(b"ABCDEFGHIJK"), pgram(b"ABCDEFGH"));
        // Big-endian packing orders like a prefix comparison.
        assert!(pgram(b"abc") < pgram(b"abd"));
        assert!(pgram(b"ab") < pgram(b"abc"));
    }

    #[test]
    fn argsort_spec_example() {
        let items: Vec<&[u8]> = vec![b"banana", b"apple", b"cherry"];
        let mut order = [0usize; 3];
        argsort(&items[..], &SystemAllocator, &mut order).unwrap();
        assert_eq!(items[order[0]], b"apple");
        assert_eq!(items[order[1]], b"banana");
        assert_eq!(items[order[2]], b"cherry");
    }

    #[test]
    fn argsort_is_lexicographic_shorter_prefix_first() {
        let items: Vec<&[u8]> = vec![b"abcd", b"ab", b"abc", b"", b"b", b"aB"];
        let mut order = vec![0usize; items.len()];
        argsort(&items[..], &SystemAllocator, &mut order).unwrap();
        let sorted: Vec<&[u8]> = order.iter().map(|&i| items[i]).collect();
        assert_eq!(sorted, vec![&b""[..], b"aB", b"ab", b"abc", b"abcd", b"b"]);
    }

    #[test]
    fn argsort_ties_beyond_pgram_width() {
        // Shared 8-byte prefix forces the full-comparison tie-break.
        let items: Vec<&[u8]> = vec![
            b"prefix00z",
            b"prefix00a",
            b"prefix00",
            b"prefix00az",
        ];
        let mut order = vec![0usize; items.len()];
        argsort(&items[..], &SystemAllocator, &mut order).unwrap();
        let sorted: Vec<&[u8]> = order.iter().map(|&i| items[i]).collect();
        assert_eq!(
            sorted,
            vec![&b"prefix00"[..], b"prefix00a", b"prefix00az", b"prefix00z"]
        );
    }

    #[test]
    fn argsort_order_property_on_pseudorandom_input() {
        // d(π): input[π[i]] <= input[π[i+1]] for all i.
        let mut data = vec![0u8; 4096];
        crate::bytes::fill_random(&mut data, 7);
        let items: Vec<&[u8]> = data.chunks(13).collect();
        let mut order = vec![0usize; items.len()];
        argsort(&items[..], &SystemAllocator, &mut order).unwrap();
        for pair in order.windows(2) {
            assert!(items[pair[0]] <= items[pair[1]]);
        }
        // The permutation is a bijection.
        let mut seen = vec![false; items.len()];
        for &i in &order {
            assert!(!seen[i]);
            seen[i] = true;
        }
    }

    #[test]
    fn argsort_empty_sequence() {
        let items: Vec<&[u8]> = Vec::new();
        let mut order = [0usize; 0];
        argsort(&items[..], &SystemAllocator, &mut order).unwrap();
    }

    #[test]
    fn argsort_reports_scratch_exhaustion() {
        let items: Vec<&[u8]> = vec![b"a"; 1000];
        let mut order = vec![0usize; 1000];
        let mut tiny = [0u8; 64];
        let alloc = crate::scratch::FixedBufferAllocator::new(&mut tiny);
        assert_eq!(
            argsort(&items[..], &alloc, &mut order),
            Err(crate::error::Error::BadAlloc)
        );
    }

    #[test]
    fn pgrams_sort_sorts_and_permutes() {
        let original = [
            pgram(b"delta"),
            pgram(b"alpha"),
            pgram(b"echo"),
            pgram(b"bravo"),
            pgram(b"charlie"),
        ];
        let mut keys = original;
        let mut order = [0usize; 5];
        pgrams_sort(&mut keys, &SystemAllocator, &mut order).unwrap();

        assert!(keys.windows(2).all(|w| w[0] <= w[1]));
        for (i, &key) in keys.iter().enumerate() {
            assert_eq!(key, original[order[i]]);
        }
        assert_eq!(order, [1, 3, 4, 0, 2]); // alpha bravo charlie delta echo
    }

    #[test]
    fn pgrams_sort_is_stable_for_equal_keys() {
        let mut keys = [5u64, 1, 5, 1, 5];
        let mut order = [0usize; 5];
        pgrams_sort(&mut keys, &SystemAllocator, &mut order).unwrap();
        assert_eq!(keys, [1, 1, 5, 5, 5]);
        assert_eq!(order, [1, 3, 0, 2, 4]);
    }

    #[test]
    fn pgrams_sort_full_digit_coverage() {
        // Keys differing in every byte position exercise all eight passes.
        let mut keys: Vec<u64> = (0..512u64)
            .map(|i| i.wrapping_mul(0x9E37_79B9_7F4A_7C15).rotate_left((i % 64) as u32))
            .collect();
        let mut expected = keys.clone();
        expected.sort_unstable();
        let mut order = vec![0usize; keys.len()];
        pgrams_sort(&mut keys, &SystemAllocator, &mut order).unwrap();
        assert_eq!(keys, expected);
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_argsort_matches_serial() {
        let mut data = vec![0u8; 8192];
        crate::bytes::fill_random(&mut data, 99);
        let items: Vec<&[u8]> = data.chunks(11).collect();
        let mut serial_order = vec![0usize; items.len()];
        let mut parallel_order = vec![0usize; items.len()];
        argsort(&items[..], &SystemAllocator, &mut serial_order).unwrap();
        argsort_parallel(&items[..], &SystemAllocator, &mut parallel_order).unwrap();
        assert_eq!(serial_order, parallel_order);
    }
}
