// x86_64 SSE2 byte kernels (16 bytes at a time).
//
// SSE2 is baseline on x86_64, so these need no runtime probe of their own;
// they serve CPUs where the AVX2 probe fails. `lookup` has no SSE2 variant:
// the table shuffle needs SSSE3 `pshufb`, so pre-AVX2 machines take the
// serial path.

#![cfg(target_arch = "x86_64")]

use std::arch::x86_64::*;

#[target_feature(enable = "sse2")]
pub unsafe fn copy(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    let n = dst.len();
    let mut i = 0;
    unsafe {
        while i + 16 <= n {
            let chunk = _mm_loadu_si128(src.as_ptr().add(i) as *const __m128i);
            _mm_storeu_si128(dst.as_mut_ptr().add(i) as *mut __m128i, chunk);
            i += 16;
        }
    }
    while i < n {
        dst[i] = src[i];
        i += 1;
    }
}

#[target_feature(enable = "sse2")]
pub unsafe fn move_bytes(buf: &mut [u8], src: usize, dst: usize, n: usize) {
    assert!(src + n <= buf.len() && dst + n <= buf.len());
    if src == dst || n == 0 {
        return;
    }
    let base = buf.as_mut_ptr();
    let distance = src.abs_diff(dst);

    unsafe {
        if dst < src {
            let mut i = 0;
            if distance >= 16 {
                while i + 16 <= n {
                    let chunk = _mm_loadu_si128(base.add(src + i) as *const __m128i);
                    _mm_storeu_si128(base.add(dst + i) as *mut __m128i, chunk);
                    i += 16;
                }
            }
            while i < n {
                *base.add(dst + i) = *base.add(src + i);
                i += 1;
            }
        } else {
            let mut i = n;
            if distance >= 16 {
                while i >= 16 {
                    let chunk = _mm_loadu_si128(base.add(src + i - 16) as *const __m128i);
                    _mm_storeu_si128(base.add(dst + i - 16) as *mut __m128i, chunk);
                    i -= 16;
                }
            }
            while i > 0 {
                i -= 1;
                *base.add(dst + i) = *base.add(src + i);
            }
        }
    }
}

#[target_feature(enable = "sse2")]
pub unsafe fn fill(dst: &mut [u8], value: u8) {
    let n = dst.len();
    let mut i = 0;
    unsafe {
        let pattern = _mm_set1_epi8(value as i8);
        while i + 16 <= n {
            _mm_storeu_si128(dst.as_mut_ptr().add(i) as *mut __m128i, pattern);
            i += 16;
        }
    }
    while i < n {
        dst[i] = value;
        i += 1;
    }
}

#[target_feature(enable = "sse2")]
pub unsafe fn bytesum(src: &[u8]) -> u64 {
    let n = src.len();
    let mut i = 0;
    let mut sum = 0u64;
    unsafe {
        let zero = _mm_setzero_si128();
        let mut acc = _mm_setzero_si128();
        while i + 16 <= n {
            let chunk = _mm_loadu_si128(src.as_ptr().add(i) as *const __m128i);
            acc = _mm_add_epi64(acc, _mm_sad_epu8(chunk, zero));
            i += 16;
        }
        let mut lanes = [0u64; 2];
        _mm_storeu_si128(lanes.as_mut_ptr() as *mut __m128i, acc);
        sum += lanes[0] + lanes[1];
    }
    while i < n {
        sum += src[i] as u64;
        i += 1;
    }
    sum
}
