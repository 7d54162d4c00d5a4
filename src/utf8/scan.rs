// Newline and whitespace scanning, plus the codepoint counter/skipper.
//
// Both scanners return `(offset, matched_len)` of the first terminator in
// the buffer. The SIMD paths only locate candidate lead bytes; the match
// itself is always classified by the serial rules below, so the backends
// cannot disagree on multi-byte sequences straddling a register boundary.

/// Function pointer type for the terminator scanners.
pub type ScanFn = fn(&[u8]) -> Option<(usize, usize)>;

/// Classify a newline starting at `text[0]`, returning its byte length.
///
/// Recognizes U+000A, U+000B, U+000C, U+000D, U+0085, U+2028, U+2029, with
/// the CR+LF digraph reported as one 2-byte match. U+001C..U+001F are
/// deliberately not line terminators here.
#[inline]
fn newline_at(text: &[u8]) -> Option<usize> {
    match text[0] {
        b'\n' | 0x0B | 0x0C => Some(1),
        b'\r' => {
            if text.get(1) == Some(&b'\n') {
                Some(2)
            } else {
                Some(1)
            }
        }
        // U+0085 NEXT LINE
        0xC2 if text.get(1) == Some(&0x85) => Some(2),
        // U+2028 LINE SEPARATOR / U+2029 PARAGRAPH SEPARATOR
        0xE2 if text.len() >= 3 && text[1] == 0x80 && (text[2] == 0xA8 || text[2] == 0xA9) => {
            Some(3)
        }
        _ => None,
    }
}

/// Classify a `White_Space` character starting at `text[0]`.
///
/// The 25-character Unicode `White_Space` set (ICU `u_isspace`): it includes
/// U+2000..U+200A but not the zero-width characters U+200B..U+200D, and not
/// the separators U+001C..U+001F.
#[inline]
fn whitespace_at(text: &[u8]) -> Option<usize> {
    match text[0] {
        b' ' | b'\t' | b'\n' | 0x0B | 0x0C | b'\r' => Some(1),
        // U+0085 NEL, U+00A0 NO-BREAK SPACE
        0xC2 if matches!(text.get(1), Some(&0x85) | Some(&0xA0)) => Some(2),
        // U+1680 OGHAM SPACE MARK
        0xE1 if text.len() >= 3 && text[1] == 0x9A && text[2] == 0x80 => Some(3),
        0xE2 if text.len() >= 3 => match (text[1], text[2]) {
            // U+2000..U+200A spaces; U+200B..U+200D zero-width are excluded
            (0x80, 0x80..=0x8A) => Some(3),
            // U+2028, U+2029 separators; U+202F NARROW NO-BREAK SPACE
            (0x80, 0xA8) | (0x80, 0xA9) | (0x80, 0xAF) => Some(3),
            // U+205F MEDIUM MATHEMATICAL SPACE
            (0x81, 0x9F) => Some(3),
            _ => None,
        },
        // U+3000 IDEOGRAPHIC SPACE
        0xE3 if text.len() >= 3 && text[1] == 0x80 && text[2] == 0x80 => Some(3),
        _ => None,
    }
}

fn find_newline_serial(text: &[u8]) -> Option<(usize, usize)> {
    for i in 0..text.len() {
        if let Some(len) = newline_at(&text[i..]) {
            return Some((i, len));
        }
    }
    None
}

fn find_whitespace_serial(text: &[u8]) -> Option<(usize, usize)> {
    for i in 0..text.len() {
        if let Some(len) = whitespace_at(&text[i..]) {
            return Some((i, len));
        }
    }
    None
}

/// Candidate-byte prefilter over six lead bytes, verified serially.
#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn scan_candidates_avx2(
    text: &[u8],
    leads: [u8; 6],
    classify: fn(&[u8]) -> Option<usize>,
) -> Option<(usize, usize)> {
    use std::arch::x86_64::*;
    let n = text.len();
    let mut i = 0;

    unsafe {
        let lead_vecs = leads.map(|b| _mm256_set1_epi8(b as i8));
        while i + 32 <= n {
            let chunk = _mm256_loadu_si256(text.as_ptr().add(i) as *const __m256i);
            let mut hits = _mm256_setzero_si256();
            for lead in &lead_vecs {
                hits = _mm256_or_si256(hits, _mm256_cmpeq_epi8(chunk, *lead));
            }
            let mut mask = _mm256_movemask_epi8(hits) as u32;
            while mask != 0 {
                let at = i + mask.trailing_zeros() as usize;
                if let Some(len) = classify(&text[at..]) {
                    return Some((at, len));
                }
                mask &= mask - 1;
            }
            i += 32;
        }
    }
    while i < n {
        if let Some(len) = classify(&text[i..]) {
            return Some((i, len));
        }
        i += 1;
    }
    None
}

/// Offset and byte length of the first Unicode line terminator.
#[inline]
pub fn find_newline(text: &[u8]) -> Option<(usize, usize)> {
    find_newline_fn()(text)
}

/// Offset and byte length of the first Unicode `White_Space` character.
#[inline]
pub fn find_whitespace(text: &[u8]) -> Option<(usize, usize)> {
    find_whitespace_fn()(text)
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn find_newline_fn() -> ScanFn {
    use std::sync::OnceLock;
    static DISPATCH: OnceLock<ScanFn> = OnceLock::new();
    *DISPATCH.get_or_init(|| {
        if crate::dispatch::runtime_caps().contains(crate::dispatch::Caps::AVX2) {
            // Safety: installed only after the AVX2 probe succeeded.
            |text| unsafe {
                scan_candidates_avx2(text, [b'\n', 0x0B, 0x0C, b'\r', 0xC2, 0xE2], newline_at)
            }
        } else {
            find_newline_serial
        }
    })
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn find_whitespace_fn() -> ScanFn {
    use std::sync::OnceLock;
    static DISPATCH: OnceLock<ScanFn> = OnceLock::new();
    *DISPATCH.get_or_init(|| {
        if crate::dispatch::runtime_caps().contains(crate::dispatch::Caps::AVX2) {
            // Safety: installed only after the AVX2 probe succeeded. The six
            // multi-byte leads plus a compare against ' '..=0x0D below cover
            // every member of the set.
            |text| unsafe { find_whitespace_avx2(text) }
        } else {
            find_whitespace_serial
        }
    })
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn find_whitespace_avx2(text: &[u8]) -> Option<(usize, usize)> {
    use std::arch::x86_64::*;
    let n = text.len();
    let mut i = 0;

    unsafe {
        let space = _mm256_set1_epi8(b' ' as i8);
        // ASCII controls \t..\r form a contiguous 0x09..=0x0D band.
        let ctl_low = _mm256_set1_epi8(0x08);
        let ctl_high = _mm256_set1_epi8(0x0E);
        let leads = [0xC2u8, 0xE1, 0xE2, 0xE3].map(|b| _mm256_set1_epi8(b as i8));

        while i + 32 <= n {
            let chunk = _mm256_loadu_si256(text.as_ptr().add(i) as *const __m256i);
            let in_ctl_band = _mm256_and_si256(
                _mm256_cmpgt_epi8(chunk, ctl_low),
                _mm256_cmpgt_epi8(ctl_high, chunk),
            );
            let mut hits = _mm256_or_si256(_mm256_cmpeq_epi8(chunk, space), in_ctl_band);
            for lead in &leads {
                hits = _mm256_or_si256(hits, _mm256_cmpeq_epi8(chunk, *lead));
            }
            let mut mask = _mm256_movemask_epi8(hits) as u32;
            while mask != 0 {
                let at = i + mask.trailing_zeros() as usize;
                if let Some(len) = whitespace_at(&text[at..]) {
                    return Some((at, len));
                }
                mask &= mask - 1;
            }
            i += 32;
        }
    }
    while i < n {
        if let Some(len) = whitespace_at(&text[i..]) {
            return Some((i, len));
        }
        i += 1;
    }
    None
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn find_newline_fn() -> ScanFn {
    find_newline_serial
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn find_whitespace_fn() -> ScanFn {
    find_whitespace_serial
}

/// Skip up to `max_chars` codepoints from the front of `text`.
///
/// Returns the byte offset of the first unconsumed position and the number
/// of codepoints actually skipped. Codepoints are counted by their lead
/// (non-continuation) bytes; trailing continuation bytes of the last
/// counted codepoint are consumed, so the offset always lands on a
/// character boundary of well-formed input. Pass `usize::MAX` to count all
/// codepoints.
pub fn find_nth(text: &[u8], max_chars: usize) -> (usize, usize) {
    let n = text.len();
    let mut count = 0usize;
    let mut i = 0usize;

    // Bulk phase: count lead bytes 8 at a time while far from the limit.
    while i + 8 <= n && max_chars - count >= 8 {
        // Safety: loop guard keeps i..i+8 in bounds.
        let word = unsafe { std::ptr::read_unaligned(text.as_ptr().add(i) as *const u64) };
        // A byte is a continuation iff (b & 0xC0) == 0x80.
        let top = word & 0x8080_8080_8080_8080;
        let second = (word << 1) & 0x8080_8080_8080_8080;
        let continuations = (top & !second).count_ones() as usize;
        count += 8 - continuations;
        i += 8;
    }

    while i < n {
        if text[i] & 0xC0 != 0x80 {
            if count == max_chars {
                return (i, count);
            }
            count += 1;
        }
        i += 1;
    }
    (i, count)
}
