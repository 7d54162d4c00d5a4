// Unicode case folding: per-codepoint rules and the bulk folding kernel.
//
// `case_fold` walks the input in chunks. Runs of ASCII take a branchless
// SWAR path (eight bytes per step); everything else goes through
// `fold_codepoint`, which resolves the side tables with binary search.
// Malformed sequences are copied through verbatim, so the kernel is total
// over arbitrary bytes while preserving validity of well-formed input.

use super::tables::{EXPANSIONS, IRREGULAR_FOLDS, PARITY_FOLDS, RANGE_FOLDS};
use super::{decode_rune, encode_rune};

/// Case-fold a single rune into at most three runes; returns the count.
///
/// Folding is full (one-to-many allowed) and locale-independent.
pub fn fold_codepoint(rune: u32, folded: &mut [u32; 3]) -> usize {
    // ASCII: only A-Z fold.
    if rune <= 0x7F {
        folded[0] = if rune.wrapping_sub(0x41) <= 25 { rune + 0x20 } else { rune };
        return 1;
    }

    // Contiguous additive ranges.
    let slot = RANGE_FOLDS.partition_point(|r| r.last < rune);
    if let Some(r) = RANGE_FOLDS.get(slot) {
        if r.first <= rune {
            folded[0] = (rune as i64 + r.delta as i64) as u32;
            return 1;
        }
    }

    // Alternating-parity ranges (uppercase folds to its successor).
    let slot = PARITY_FOLDS.partition_point(|&(_, last)| last < rune);
    if let Some(&(first, _)) = PARITY_FOLDS.get(slot) {
        if first <= rune && (rune ^ first) & 1 == 0 {
            folded[0] = rune + 1;
            return 1;
        }
    }

    // Irregular singletons.
    if let Ok(i) = IRREGULAR_FOLDS.binary_search_by_key(&rune, |&(from, _)| from) {
        folded[0] = IRREGULAR_FOLDS[i].1;
        return 1;
    }

    // One-to-many expansions.
    if let Ok(i) = EXPANSIONS.binary_search_by_key(&rune, |e| e.from) {
        let expansion = &EXPANSIONS[i];
        folded.copy_from_slice(&expansion.to);
        return expansion.len as usize;
    }

    folded[0] = rune;
    1
}

const LOW_BITS: u64 = 0x0101_0101_0101_0101;
const HIGH_BITS: u64 = 0x8080_8080_8080_8080;

/// Branchless ASCII lowercasing of one 8-byte word with no high bits set.
#[inline(always)]
fn swar_ascii_fold(word: u64) -> u64 {
    // High bit marks bytes >= 'A', respectively >= '[' = 'Z' + 1; uppercase
    // letters are exactly the difference of the two masks. The adds cannot
    // carry between lanes because every byte is <= 0x7F.
    let ge_a = word.wrapping_add((0x80 - 0x41) * LOW_BITS) & HIGH_BITS;
    let gt_z = word.wrapping_add((0x80 - 0x5B) * LOW_BITS) & HIGH_BITS;
    let upper = ge_a & !gt_z;
    word + (upper >> 2) // 0x80 >> 2 == 0x20
}

/// Function pointer type for the bulk folding kernels.
pub type CaseFoldFn = fn(&[u8], &mut [u8]) -> usize;

/// Case-fold `src` into `dst`, returning the number of bytes written.
///
/// `dst` must hold at least `3 * src.len()` bytes: the worst case is a
/// 2-byte Greek composite folding to three 2-byte runes plus combining
/// marks. Input is expected to be well-formed UTF-8; malformed sequences
/// are copied through unchanged (best effort). Well-formed input always
/// produces well-formed output, and folding is idempotent.
pub fn case_fold(src: &[u8], dst: &mut [u8]) -> usize {
    assert!(
        dst.len() >= src.len().saturating_mul(3),
        "destination must hold 3x the source bytes"
    );
    case_fold_fn()(src, dst)
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn case_fold_fn() -> CaseFoldFn {
    use std::sync::OnceLock;
    static DISPATCH: OnceLock<CaseFoldFn> = OnceLock::new();
    *DISPATCH.get_or_init(|| {
        if crate::dispatch::runtime_caps().contains(crate::dispatch::Caps::AVX2) {
            // Safety: installed only after the AVX2 probe succeeded.
            |src, dst| unsafe { case_fold_avx2(src, dst) }
        } else {
            case_fold_serial
        }
    })
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn case_fold_fn() -> CaseFoldFn {
    case_fold_serial
}

fn case_fold_serial(src: &[u8], dst: &mut [u8]) -> usize {
    let n = src.len();
    let mut read = 0;
    let mut written = 0;

    while read < n {
        // ASCII fast path, eight bytes at a time.
        while read + 8 <= n {
            // Safety: loop guard keeps read..read+8 in bounds; dst has 3x
            // headroom, so written..written+8 is in bounds too.
            let word =
                unsafe { std::ptr::read_unaligned(src.as_ptr().add(read) as *const u64) };
            if word & HIGH_BITS != 0 {
                break;
            }
            unsafe {
                std::ptr::write_unaligned(
                    dst.as_mut_ptr().add(written) as *mut u64,
                    swar_ascii_fold(word),
                )
            };
            read += 8;
            written += 8;
        }
        if read >= n {
            break;
        }

        let byte = src[read];
        if byte <= 0x7F {
            dst[written] = if byte.wrapping_sub(0x41) <= 25 { byte + 0x20 } else { byte };
            read += 1;
            written += 1;
            continue;
        }

        match decode_rune(&src[read..]) {
            Some((rune, len)) => {
                let mut folded = [0u32; 3];
                let count = fold_codepoint(rune, &mut folded);
                for &out_rune in &folded[..count] {
                    written += encode_rune(out_rune, &mut dst[written..]);
                }
                read += len;
            }
            None => {
                // Invalid or truncated sequence: pass the byte through.
                dst[written] = byte;
                read += 1;
                written += 1;
            }
        }
    }
    written
}

/// AVX2 variant: 32-byte all-ASCII chunks fold in-register; everything
/// else takes the shared per-codepoint path.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn case_fold_avx2(src: &[u8], dst: &mut [u8]) -> usize {
    use std::arch::x86_64::*;

    let n = src.len();
    let mut read = 0;
    let mut written = 0;

    unsafe {
        let below_a = _mm256_set1_epi8(b'A' as i8 - 1);
        let above_z = _mm256_set1_epi8(b'Z' as i8 + 1);
        let case_bit = _mm256_set1_epi8(0x20);

        while read < n {
            while read + 32 <= n {
                let chunk = _mm256_loadu_si256(src.as_ptr().add(read) as *const __m256i);
                if _mm256_movemask_epi8(chunk) != 0 {
                    break;
                }
                // All ASCII: lowercase the A-Z band branchlessly.
                let upper = _mm256_and_si256(
                    _mm256_cmpgt_epi8(chunk, below_a),
                    _mm256_cmpgt_epi8(above_z, chunk),
                );
                let folded = _mm256_add_epi8(chunk, _mm256_and_si256(upper, case_bit));
                _mm256_storeu_si256(dst.as_mut_ptr().add(written) as *mut __m256i, folded);
                read += 32;
                written += 32;
            }
            if read >= n {
                break;
            }

            let byte = src[read];
            if byte <= 0x7F {
                dst[written] = if byte.wrapping_sub(0x41) <= 25 { byte + 0x20 } else { byte };
                read += 1;
                written += 1;
                continue;
            }

            match decode_rune(&src[read..]) {
                Some((rune, len)) => {
                    let mut folded = [0u32; 3];
                    let count = fold_codepoint(rune, &mut folded);
                    for &out_rune in &folded[..count] {
                        written += encode_rune(out_rune, &mut dst[written..]);
                    }
                    read += len;
                }
                None => {
                    dst[written] = byte;
                    read += 1;
                    written += 1;
                }
            }
        }
    }
    written
}
