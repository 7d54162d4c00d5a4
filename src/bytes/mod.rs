// Byte-granularity memory primitives: copy, move, fill, fill_random,
// lookup, bytesum.
//
// Each primitive has a portable SWAR reference (`serial`) and SIMD backends
// (`avx2`/`sse2` on x86_64, `neon` on aarch64) that are observationally
// equivalent for every input, including empty and misaligned buffers.
// Dispatch follows the once-resolved function-pointer pattern used
// throughout the crate.
//
// The `fill_random` keystream is multiply-latency bound and shares one
// scalar kernel across all backends; its output is position-addressable, so
// a wider backend can slot in without changing the stream.

mod serial;

#[cfg(target_arch = "x86_64")]
mod avx2;
#[cfg(target_arch = "aarch64")]
mod neon;
#[cfg(target_arch = "x86_64")]
mod sse2;

/// Function pointer type for the two-slice copy kernels.
pub type CopyFn = fn(&mut [u8], &[u8]);
/// Function pointer type for the in-buffer move kernels.
pub type MoveFn = fn(&mut [u8], usize, usize, usize);
/// Function pointer type for the fill kernels.
pub type FillFn = fn(&mut [u8], u8);
/// Function pointer type for the table-lookup kernels.
pub type LookupFn = fn(&mut [u8], &[u8], &[u8; 256]);
/// Function pointer type for the byte-sum kernels.
pub type BytesumFn = fn(&[u8]) -> u64;

/// Copy `src` into `dst`. The slices must have equal lengths; they cannot
/// overlap (two Rust slices never alias mutably).
#[inline]
pub fn copy(dst: &mut [u8], src: &[u8]) {
    assert_eq!(dst.len(), src.len(), "copy requires equal lengths");
    copy_fn()(dst, src)
}

/// Move `buf[src..src + n]` to `buf[dst..dst + n]` with arbitrary overlap,
/// as if staged through an intermediate buffer.
#[inline]
pub fn move_bytes(buf: &mut [u8], src: usize, dst: usize, n: usize) {
    move_fn()(buf, src, dst, n)
}

/// Write `value` to every byte of `dst`.
#[inline]
pub fn fill(dst: &mut [u8], value: u8) {
    fill_fn()(dst, value)
}

/// Fill `dst` with a deterministic pseudo-random stream keyed by `nonce`.
///
/// The stream for a given nonce is a fixed function of byte position:
/// prefixes of longer fills equal shorter fills, and every backend produces
/// the identical stream.
#[inline]
pub fn fill_random(dst: &mut [u8], nonce: u64) {
    serial::fill_random(dst, nonce)
}

/// Write `dst[i] = table[src[i]]` for every position.
#[inline]
pub fn lookup(dst: &mut [u8], src: &[u8], table: &[u8; 256]) {
    assert_eq!(dst.len(), src.len(), "lookup requires equal lengths");
    lookup_fn()(dst, src, table)
}

/// 64-bit sum of all byte values in `src`.
#[inline]
pub fn bytesum(src: &[u8]) -> u64 {
    bytesum_fn()(src)
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

macro_rules! dispatch_x86 {
    ($fn_name:ident, $ty:ty, $avx2:expr, $sse2:expr, $serial:expr) => {
        #[cfg(target_arch = "x86_64")]
        #[inline]
        fn $fn_name() -> $ty {
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

// Safety (all closures): installed only after the matching CPU probe
// succeeded; SSE2 is baseline on every 64-bit x86.
dispatch_x86!(
    copy_fn, CopyFn,
    |dst, src| unsafe { avx2::copy(dst, src) },
    |dst, src| unsafe { sse2::copy(dst, src) },
    serial::copy
);
dispatch_x86!(
    move_fn, MoveFn,
    |buf, src, dst, n| unsafe { avx2::move_bytes(buf, src, dst, n) },
    |buf, src, dst, n| unsafe { sse2::move_bytes(buf, src, dst, n) },
    serial::move_bytes
);
dispatch_x86!(
    fill_fn, FillFn,
    |dst, value| unsafe { avx2::fill(dst, value) },
    |dst, value| unsafe { sse2::fill(dst, value) },
    serial::fill
);
// The table shuffle needs SSSE3, so below AVX2 the lookup stays serial.
dispatch_x86!(
    lookup_fn, LookupFn,
    |dst, src, table| unsafe { avx2::lookup(dst, src, table) },
    serial::lookup,
    serial::lookup
);
dispatch_x86!(
    bytesum_fn, BytesumFn,
    |src| unsafe { avx2::bytesum(src) },
    |src| unsafe { sse2::bytesum(src) },
    serial::bytesum
);

#[cfg(target_arch = "aarch64")]
mod neon_shims {
    use super::*;

    // Safety (all shims): NEON is mandatory on aarch64.
    #[inline]
    pub fn copy_fn() -> CopyFn {
        |dst, src| unsafe { neon::copy(dst, src) }
    }
    #[inline]
    pub fn move_fn() -> MoveFn {
        |buf, src, dst, n| unsafe { neon::move_bytes(buf, src, dst, n) }
    }
    #[inline]
    pub fn fill_fn() -> FillFn {
        |dst, value| unsafe { neon::fill(dst, value) }
    }
    #[inline]
    pub fn lookup_fn() -> LookupFn {
        |dst, src, table| unsafe { neon::lookup(dst, src, table) }
    }
    #[inline]
    pub fn bytesum_fn() -> BytesumFn {
        |src| unsafe { neon::bytesum(src) }
    }
}
#[cfg(target_arch = "aarch64")]
use neon_shims::*;

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
mod portable_shims {
    use super::*;

    #[inline]
    pub fn copy_fn() -> CopyFn {
        serial::copy
    }
    #[inline]
    pub fn move_fn() -> MoveFn {
        serial::move_bytes
    }
    #[inline]
    pub fn fill_fn() -> FillFn {
        serial::fill
    }
    #[inline]
    pub fn lookup_fn() -> LookupFn {
        serial::lookup
    }
    #[inline]
    pub fn bytesum_fn() -> BytesumFn {
        serial::bytesum
    }
}
#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
use portable_shims::*;

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
