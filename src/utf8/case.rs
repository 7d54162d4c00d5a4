// Case-insensitive substring search and three-way ordering.
//
// Both operations compare streams of *folded* runes, produced lazily by
// `FoldedRunes`: one source codepoint can yield up to three folded runes
// (ß → s s), which the iterator buffers. The search is a Rabin-Karp scan
// over folded runes with base-257 rolling hashes; candidate windows are
// confirmed by re-folding both sides. Windows advance by one source rune,
// so matches can start at any character boundary.
//
// Folded needles longer than `MAX_NEEDLE_RUNES` are unsupported and never
// match. Iteration stops at the first malformed sequence (best effort, like
// the folding kernel).

use std::cmp::Ordering;

use super::decode_rune;
use super::fold::fold_codepoint;

/// Upper bound on the folded length of a searchable needle.
pub const MAX_NEEDLE_RUNES: usize = 1024;

const HASH_BASE: u64 = 257;

/// Streaming iterator over the folded runes of a UTF-8 buffer.
struct FoldedRunes<'a> {
    text: &'a [u8],
    pos: usize,
    pending: [u32; 3],
    pending_len: u8,
    pending_idx: u8,
}

impl<'a> FoldedRunes<'a> {
    fn new(text: &'a [u8]) -> Self {
        Self { text, pos: 0, pending: [0; 3], pending_len: 0, pending_idx: 0 }
    }
}

impl Iterator for FoldedRunes<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        if self.pending_idx >= self.pending_len {
            let (rune, len) = decode_rune(&self.text[self.pos..])?;
            self.pos += len;
            let mut folded = [0u32; 3];
            self.pending_len = fold_codepoint(rune, &mut folded) as u8;
            self.pending = folded;
            self.pending_idx = 0;
        }
        let rune = self.pending[self.pending_idx as usize];
        self.pending_idx += 1;
        Some(rune)
    }
}

/// True if `window` and `needle` fold to the same rune sequence.
fn folded_eq(window: &[u8], needle: &[u8]) -> bool {
    let mut a = FoldedRunes::new(window);
    let mut b = FoldedRunes::new(needle);
    loop {
        match (a.next(), b.next()) {
            (None, None) => return true,
            (Some(x), Some(y)) if x == y => {}
            _ => return false,
        }
    }
}

/// Find the first haystack region whose case-folded runes equal the
/// case-folded needle.
///
/// Returns the byte offset of the match and its length in *haystack* bytes
/// (which can differ from the needle length). An empty needle matches at
/// offset 0 with length 0. Needles folding to more than
/// [`MAX_NEEDLE_RUNES`] runes are unsupported and return `None`.
pub fn case_insensitive_find(haystack: &[u8], needle: &[u8]) -> Option<(usize, usize)> {
    if needle.is_empty() {
        return Some((0, 0));
    }

    // Fold the needle once: hash, rune count, and powers of the hash base.
    let mut needle_hash = 0u64;
    let mut needle_len = 0usize;
    for rune in FoldedRunes::new(needle) {
        needle_hash = needle_hash.wrapping_mul(HASH_BASE).wrapping_add(rune as u64);
        needle_len += 1;
        if needle_len > MAX_NEEDLE_RUNES {
            return None;
        }
    }
    if needle_len == 0 {
        return None; // needle was malformed from the first byte
    }

    // powers[i] = HASH_BASE^i, for removing leading window runes. The
    // window holds whole source characters, so it can overshoot the needle
    // length by up to two runes of a trailing expansion.
    let mut powers = vec![1u64; needle_len + 3];
    for i in 1..powers.len() {
        powers[i] = powers[i - 1].wrapping_mul(HASH_BASE);
    }

    // The window spans whole characters of `haystack[window_start..
    // window_end]`, always the minimal span whose folded rune count reaches
    // `needle_len`. A span folding to exactly the needle sequence
    // necessarily consists of whole characters with exactly `needle_len`
    // runes, so windows that overshoot cannot match and are skipped.
    let mut window_start = 0usize;
    let mut window_end = 0usize;
    let mut window_hash = 0u64;
    let mut window_runes = 0usize;

    loop {
        // Top up with whole characters until the window is full.
        while window_runes < needle_len {
            let Some((rune, len)) = decode_rune(&haystack[window_end..]) else {
                return None; // exhausted or malformed: no further windows
            };
            let mut folded = [0u32; 3];
            let count = fold_codepoint(rune, &mut folded);
            for &folded_rune in &folded[..count] {
                window_hash = window_hash
                    .wrapping_mul(HASH_BASE)
                    .wrapping_add(folded_rune as u64);
                window_runes += 1;
            }
            window_end += len;
        }

        if window_runes == needle_len
            && window_hash == needle_hash
            && folded_eq(&haystack[window_start..window_end], needle)
        {
            return Some((window_start, window_end - window_start));
        }

        // Slide: drop the folded runes of the first source character.
        let Some((old_rune, old_len)) = decode_rune(&haystack[window_start..]) else {
            return None;
        };
        let mut old_folded = [0u32; 3];
        let old_count = fold_codepoint(old_rune, &mut old_folded);
        for &rune in &old_folded[..old_count] {
            debug_assert!(window_runes > 0);
            window_hash = window_hash
                .wrapping_sub((rune as u64).wrapping_mul(powers[window_runes - 1]));
            window_runes -= 1;
        }
        window_start += old_len;
        debug_assert!(window_start <= window_end);
    }
}

/// Three-way comparison of the case-folded rune sequences of `a` and `b`.
pub fn case_insensitive_order(a: &[u8], b: &[u8]) -> Ordering {
    let mut a_runes = FoldedRunes::new(a);
    let mut b_runes = FoldedRunes::new(b);
    loop {
        match (a_runes.next(), b_runes.next()) {
            (None, None) => return Ordering::Equal,
            (None, Some(_)) => return Ordering::Less,
            (Some(_), None) => return Ordering::Greater,
            (Some(x), Some(y)) => match x.cmp(&y) {
                Ordering::Equal => {}
                other => return other,
            },
        }
    }
}
