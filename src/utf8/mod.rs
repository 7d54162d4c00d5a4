// UTF-8 kernels: validation, newline/whitespace scanning, codepoint
// counting, Unicode case folding, and case-insensitive search/ordering.
//
// A rune is a Unicode scalar value (21 bits, no surrogates). The strict
// decoder here rejects everything RFC 3629 rejects: bad continuation bytes,
// overlong encodings, surrogates, values above U+10FFFF, and truncated
// sequences. The folding kernels are deliberately permissive instead and
// pass malformed bytes through verbatim.

mod scan;
mod tables;

pub mod case;
pub mod fold;

pub use case::{case_insensitive_find, case_insensitive_order};
pub use fold::{case_fold, fold_codepoint};
pub use scan::{find_newline, find_nth, find_whitespace};

use crate::error::{Error, Result};

/// Decode one rune at the front of `bytes`.
///
/// Returns the scalar value and its encoded length, or `None` for anything
/// malformed (strict RFC 3629 rules).
pub fn decode_rune(bytes: &[u8]) -> Option<(u32, usize)> {
    let byte1 = *bytes.first()?;

    if byte1 <= 0x7F {
        return Some((byte1 as u32, 1));
    }

    if (0xC2..=0xDF).contains(&byte1) {
        let byte2 = *bytes.get(1)?;
        if byte2 & 0xC0 != 0x80 {
            return None;
        }
        let rune = ((byte1 as u32 & 0x1F) << 6) | (byte2 as u32 & 0x3F);
        return Some((rune, 2));
    }

    if (0xE0..=0xEF).contains(&byte1) {
        if bytes.len() < 3 {
            return None;
        }
        let (byte2, byte3) = (bytes[1], bytes[2]);
        if byte2 & 0xC0 != 0x80 || byte3 & 0xC0 != 0x80 {
            return None;
        }
        if byte1 == 0xE0 && byte2 < 0xA0 {
            return None; // overlong
        }
        if byte1 == 0xED && byte2 >= 0xA0 {
            return None; // surrogate
        }
        let rune = ((byte1 as u32 & 0x0F) << 12)
            | ((byte2 as u32 & 0x3F) << 6)
            | (byte3 as u32 & 0x3F);
        return Some((rune, 3));
    }

    if (0xF0..=0xF4).contains(&byte1) {
        if bytes.len() < 4 {
            return None;
        }
        let (byte2, byte3, byte4) = (bytes[1], bytes[2], bytes[3]);
        if byte2 & 0xC0 != 0x80 || byte3 & 0xC0 != 0x80 || byte4 & 0xC0 != 0x80 {
            return None;
        }
        if byte1 == 0xF0 && byte2 < 0x90 {
            return None; // overlong
        }
        if byte1 == 0xF4 && byte2 >= 0x90 {
            return None; // above U+10FFFF
        }
        let rune = ((byte1 as u32 & 0x07) << 18)
            | ((byte2 as u32 & 0x3F) << 12)
            | ((byte3 as u32 & 0x3F) << 6)
            | (byte4 as u32 & 0x3F);
        return Some((rune, 4));
    }

    None
}

/// Encode `rune` at the front of `out`, returning the encoded length (1-4).
///
/// `out` must have at least 4 free bytes; `rune` must be a Unicode scalar.
pub fn encode_rune(rune: u32, out: &mut [u8]) -> usize {
    debug_assert!(rune <= 0x10_FFFF && !(0xD800..=0xDFFF).contains(&rune));
    if rune <= 0x7F {
        out[0] = rune as u8;
        1
    } else if rune <= 0x7FF {
        out[0] = 0xC0 | (rune >> 6) as u8;
        out[1] = 0x80 | (rune & 0x3F) as u8;
        2
    } else if rune <= 0xFFFF {
        out[0] = 0xE0 | (rune >> 12) as u8;
        out[1] = 0x80 | ((rune >> 6) & 0x3F) as u8;
        out[2] = 0x80 | (rune & 0x3F) as u8;
        3
    } else {
        out[0] = 0xF0 | (rune >> 18) as u8;
        out[1] = 0x80 | ((rune >> 12) & 0x3F) as u8;
        out[2] = 0x80 | ((rune >> 6) & 0x3F) as u8;
        out[3] = 0x80 | (rune & 0x3F) as u8;
        4
    }
}

/// Decode a whole buffer into runes, or [`Error::InvalidUtf8`].
pub fn decode_runes(text: &[u8]) -> Result<Vec<u32>> {
    let mut runes = Vec::with_capacity(text.len());
    let mut i = 0;
    while i < text.len() {
        let (rune, len) = decode_rune(&text[i..]).ok_or(Error::InvalidUtf8)?;
        runes.push(rune);
        i += len;
    }
    Ok(runes)
}

/// Function pointer type for the validation kernels.
pub type ValidFn = fn(&[u8]) -> bool;

/// True iff `text` is well-formed UTF-8 per RFC 3629.
#[inline]
pub fn valid(text: &[u8]) -> bool {
    valid_fn()(text)
}

/// Serial validator: SWAR ASCII skip, strict classifier otherwise.
fn valid_serial(text: &[u8]) -> bool {
    let n = text.len();
    let mut i = 0;

    while i < n {
        // Skip runs of ASCII eight bytes at a time.
        while i + 8 <= n {
            // Safety: loop guard keeps i..i+8 in bounds.
            let word = unsafe { std::ptr::read_unaligned(text.as_ptr().add(i) as *const u64) };
            if word & 0x8080_8080_8080_8080 != 0 {
                break;
            }
            i += 8;
        }
        if i >= n {
            break;
        }
        if text[i] <= 0x7F {
            i += 1;
            continue;
        }
        match decode_rune(&text[i..]) {
            Some((_, len)) => i += len,
            None => return false,
        }
    }
    true
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "avx2")]
unsafe fn valid_avx2(text: &[u8]) -> bool {
    use std::arch::x86_64::*;
    let n = text.len();
    let mut i = 0;

    while i < n {
        // 32-byte all-ASCII fast skip.
        unsafe {
            while i + 32 <= n {
                let chunk = _mm256_loadu_si256(text.as_ptr().add(i) as *const __m256i);
                if _mm256_movemask_epi8(chunk) != 0 {
                    break;
                }
                i += 32;
            }
        }
        if i >= n {
            break;
        }
        if text[i] <= 0x7F {
            i += 1;
            continue;
        }
        match decode_rune(&text[i..]) {
            Some((_, len)) => i += len,
            None => return false,
        }
    }
    true
}

#[cfg(target_arch = "x86_64")]
#[inline]
fn valid_fn() -> ValidFn {
    use std::sync::OnceLock;
    static DISPATCH: OnceLock<ValidFn> = OnceLock::new();
    *DISPATCH.get_or_init(|| {
        if crate::dispatch::runtime_caps().contains(crate::dispatch::Caps::AVX2) {
            // Safety: installed only after the AVX2 probe succeeded.
            |text| unsafe { valid_avx2(text) }
        } else {
            valid_serial
        }
    })
}

#[cfg(not(target_arch = "x86_64"))]
#[inline]
fn valid_fn() -> ValidFn {
    valid_serial
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ascii_and_multibyte_roundtrip() {
        for rune in [0x41u32, 0x7F, 0x80, 0x7FF, 0x800, 0xFFFF, 0x1_0000, 0x10_FFFF] {
            let mut buf = [0u8; 4];
            let len = encode_rune(rune, &mut buf);
            assert_eq!(decode_rune(&buf[..len]), Some((rune, len)), "U+{rune:04X}");
        }
    }

    #[test]
    fn valid_accepts_well_formed() {
        assert!(valid(b""));
        assert!(valid(b"plain ascii"));
        assert!(valid("αβγ δ ε ζ".as_bytes()));
        assert!(valid("日本語テキスト".as_bytes()));
        assert!(valid("🎉 emoji 🎊".as_bytes()));
        assert!(valid(b"embedded \x00 nul"));
    }

    #[test]
    fn valid_rejects_malformed() {
        assert!(!valid(b"\x80")); // lone continuation
        assert!(!valid(b"\xC2")); // truncated 2-byte
        assert!(!valid(b"\xC0\xAF")); // overlong (C0 is never a valid lead)
        assert!(!valid(b"\xE0\x80\x80")); // overlong 3-byte
        assert!(!valid(b"\xED\xA0\x80")); // surrogate U+D800
        assert!(!valid(b"\xF4\x90\x80\x80")); // above U+10FFFF
        assert!(!valid(b"\xF0\x80\x80\x80")); // overlong 4-byte
        assert!(!valid(b"ok then \xFF")); // invalid lead after ASCII run
        assert!(!valid("αβ".as_bytes().split_last().map(|(_, rest)| rest).unwrap()));
    }

    #[test]
    fn valid_ascii_skip_boundaries() {
        // Malformed byte right after a long ASCII run, at varying offsets.
        for pad in [7usize, 8, 9, 31, 32, 33, 63, 64] {
            let mut text = vec![b'a'; pad];
            text.push(0xC2);
            assert!(!valid(&text), "pad={pad}");
            let mut good = vec![b'a'; pad];
            good.extend_from_slice("é".as_bytes());
            assert!(valid(&good), "pad={pad}");
        }
    }

    #[test]
    fn decode_runes_strict() {
        assert_eq!(decode_runes("aΩ🎉".as_bytes()).unwrap(), vec![0x61, 0x3A9, 0x1F389]);
        assert_eq!(decode_runes(b"\xED\xA0\x80"), Err(Error::InvalidUtf8));
    }
}
