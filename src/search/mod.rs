// Byte, byte-set, and substring search, forward and reverse.
//
// Every kernel returns the offset of the first match in its scan direction
// as `Option<usize>`; consecutive forward searches restarted one past a
// match start therefore observe overlapping occurrences. SIMD backends are
// resolved once per operation and are observationally equivalent to the
// serial reference for every input.

mod serial;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod sse2;

/// A set of byte values as a 256-bit bitmap, queried in O(1).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteSet {
    words: [u64; 4],
}

impl ByteSet {
    /// The empty set.
    pub const fn new() -> Self {
        Self { words: [0; 4] }
    }

    /// The set of all ASCII bytes (0x00..=0x7F).
    pub const fn ascii() -> Self {
        Self { words: [u64::MAX, u64::MAX, 0, 0] }
    }

    /// Insert a byte value.
    pub const fn add(&mut self, byte: u8) {
        self.words[(byte >> 6) as usize] |= 1 << (byte & 63);
    }

    /// Membership test.
    pub const fn contains(&self, byte: u8) -> bool {
        self.words[(byte >> 6) as usize] >> (byte & 63) & 1 != 0
    }

    /// Flip membership of every byte value in place.
    pub const fn invert(&mut self) {
        self.words[0] = !self.words[0];
        self.words[1] = !self.words[1];
        self.words[2] = !self.words[2];
        self.words[3] = !self.words[3];
    }

    /// A copy with every membership flipped.
    pub const fn inverted(&self) -> Self {
        let mut copy = *self;
        copy.invert();
        copy
    }
}

impl FromIterator<u8> for ByteSet {
    fn from_iter<I: IntoIterator<Item = u8>>(iter: I) -> Self {
        let mut set = Self::new();
        for byte in iter {
            set.add(byte);
        }
        set
    }
}

/// Function pointer type for single-byte scans.
pub type FindByteFn = fn(&[u8], u8) -> Option<usize>;
/// Function pointer type for substring scans.
pub type FindFn = fn(&[u8], &[u8]) -> Option<usize>;
/// Function pointer type for byte-set scans.
pub type FindBytesetFn = fn(&[u8], &ByteSet) -> Option<usize>;

/// Offset of the first byte equal to `needle`.
#[inline]
pub fn find_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    find_byte_fn()(haystack, needle)
}

/// Offset of the last byte equal to `needle`.
#[inline]
pub fn rfind_byte(haystack: &[u8], needle: u8) -> Option<usize> {
    rfind_byte_fn()(haystack, needle)
}

/// Offset of the first occurrence of `needle`; `Some(0)` for an empty
/// needle, `None` when the needle is longer than the haystack.
#[inline]
pub fn find(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    find_fn()(haystack, needle)
}

/// Offset of the last occurrence of `needle`; `Some(haystack.len())` for an
/// empty needle.
#[inline]
pub fn rfind(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    rfind_fn()(haystack, needle)
}

/// Offset of the first byte contained in `set`. Scan for the first byte
/// *outside* a set by passing [`ByteSet::inverted`].
#[inline]
pub fn find_byteset(haystack: &[u8], set: &ByteSet) -> Option<usize> {
    find_byteset_fn()(haystack, set)
}

/// Offset of the last byte contained in `set`.
#[inline]
pub fn rfind_byteset(haystack: &[u8], set: &ByteSet) -> Option<usize> {
    rfind_byteset_fn()(haystack, set)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[cfg(target_arch = "x86_64")]
macro_rules! dispatch_x86 {
    ($fn_name:ident, $ty:ty, $avx2:expr, $sse2:expr, $serial:expr) => {
        #[inline]
        pub fn $fn_name() -> $ty {
            use std::sync::OnceLock;
            static DISPATCH: OnceLock<$ty> = OnceLock::new();
            *DISPATCH.get_or_init(|| {
                let caps = crate::dispatch::runtime_caps();
                if caps.contains(crate::dispatch::Caps::AVX2) {
                    $avx2
                } else if caps.contains(crate::dispatch::Caps::SSE2) {
                    $sse2
                } else {
                    $serial
                }
            })
        }
    };
}

#[cfg(target_arch = "x86_64")]
mod x86_dispatch {
    use super::*;

    // Safety (all closures): installed only after the matching CPU probe
    // succeeded. Byte-set scans need SSSE3 for the nibble shuffle, so the
    // middle rung stays serial for them.
    dispatch_x86!(
        find_byte_fn, FindByteFn,
        |h, n| unsafe { avx2::find_byte(h, n) },
        |h, n| unsafe { sse2::find_byte(h, n) },
        serial::find_byte
    );
    dispatch_x86!(
        rfind_byte_fn, FindByteFn,
        |h, n| unsafe { avx2::rfind_byte(h, n) },
        |h, n| unsafe { sse2::rfind_byte(h, n) },
        serial::rfind_byte
    );
    dispatch_x86!(
        find_fn, FindFn,
        |h, n| unsafe { avx2::find(h, n) },
        |h, n| unsafe { sse2::find(h, n) },
        serial::find
    );
    dispatch_x86!(
        rfind_fn, FindFn,
        |h, n| unsafe { avx2::rfind(h, n) },
        |h, n| unsafe { sse2::rfind(h, n) },
        serial::rfind
    );
    dispatch_x86!(
        find_byteset_fn, FindBytesetFn,
        |h, s| unsafe { avx2::find_byteset(h, s) },
        serial::find_byteset,
        serial::find_byteset
    );
    dispatch_x86!(
        rfind_byteset_fn, FindBytesetFn,
        |h, s| unsafe { avx2::rfind_byteset(h, s) },
        serial::rfind_byteset,
        serial::rfind_byteset
    );
}
#[cfg(target_arch = "x86_64")]
use x86_dispatch::*;

#[cfg(target_arch = "aarch64")]
mod neon_dispatch {
    use super::*;

    // Safety (all closures): NEON is mandatory on aarch64.
    #[inline]
    pub fn find_byte_fn() -> FindByteFn {
        |h, n| unsafe { neon::find_byte(h, n) }
    }
    #[inline]
    pub fn rfind_byte_fn() -> FindByteFn {
        |h, n| unsafe { neon::rfind_byte(h, n) }
    }
    #[inline]
    pub fn find_fn() -> FindFn {
        |h, n| unsafe { neon::find(h, n) }
    }
    #[inline]
    pub fn rfind_fn() -> FindFn {
        |h, n| unsafe { neon::rfind(h, n) }
    }
    #[inline]
    pub fn find_byteset_fn() -> FindBytesetFn {
        |h, s| unsafe { neon::find_byteset(h, s) }
    }
    #[inline]
    pub fn rfind_byteset_fn() -> FindBytesetFn {
        |h, s| unsafe { neon::rfind_byteset(h, s) }
    }
}
#[cfg(target_arch = "aarch64")]
use neon_dispatch::*;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod portable_dispatch {
    use super::*;

    #[inline]
    pub fn find_byte_fn() -> FindByteFn {
        serial::find_byte
    }
    #[inline]
    pub fn rfind_byte_fn() -> FindByteFn {
        serial::rfind_byte
    }
    #[inline]
    pub fn find_fn() -> FindFn {
        serial::find
    }
    #[inline]
    pub fn rfind_fn() -> FindFn {
        serial::rfind
    }
    #[inline]
    pub fn find_byteset_fn() -> FindBytesetFn {
        serial::find_byteset
    }
    #[inline]
    pub fn rfind_byteset_fn() -> FindBytesetFn {
        serial::rfind_byteset
    }
}
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
use portable_dispatch::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
