// x86_64 AVX2 byte kernels (32 bytes at a time).
//
// All functions here are `#[target_feature]`; the dispatch shims in `mod.rs`
// verify CPU support once before installing them.

#![cfg(target_arch = "x86_64")]

use std::arch::x86_64::*;

#[target_feature(enable = "avx2")]
pub unsafe fn copy(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    let n = dst.len();
    let mut i = 0;

    unsafe {
        while i + 32 <= n {
            let chunk = _mm256_loadu_si256(src.as_ptr().add(i) as *const __m256i);
            _mm256_storeu_si256(dst.as_mut_ptr().add(i) as *mut __m256i, chunk);
            i += 32;
        }
        if i + 16 <= n {
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

#[target_feature(enable = "avx2")]
pub unsafe fn move_bytes(buf: &mut [u8], src: usize, dst: usize, n: usize) {
    assert!(src + n <= buf.len() && dst + n <= buf.len());
    if src == dst || n == 0 {
        return;
    }
    let base = buf.as_mut_ptr();
    let distance = src.abs_diff(dst);

    // Vector chunks may only be used while the store cannot clobber bytes a
    // later load still needs; within a chunk the load completes first, so a
    // 32-byte step is safe whenever the regions are 32+ bytes apart or the
    // pass direction trails the overlap.
    unsafe {
        if dst < src {
            let mut i = 0;
            if distance >= 32 {
                while i + 32 <= n {
                    let chunk = _mm256_loadu_si256(base.add(src + i) as *const __m256i);
                    _mm256_storeu_si256(base.add(dst + i) as *mut __m256i, chunk);
                    i += 32;
                }
            }
            while i < n {
                *base.add(dst + i) = *base.add(src + i);
                i += 1;
            }
        } else {
            let mut i = n;
            if distance >= 32 {
                while i >= 32 {
                    let chunk = _mm256_loadu_si256(base.add(src + i - 32) as *const __m256i);
                    _mm256_storeu_si256(base.add(dst + i - 32) as *mut __m256i, chunk);
                    i -= 32;
                }
            }
            while i > 0 {
                i -= 1;
                *base.add(dst + i) = *base.add(src + i);
            }
        }
    }
}

#[target_feature(enable = "avx2")]
pub unsafe fn fill(dst: &mut [u8], value: u8) {
    let n = dst.len();
    let mut i = 0;
    unsafe {
        let pattern = _mm256_set1_epi8(value as i8);
        while i + 32 <= n {
            _mm256_storeu_si256(dst.as_mut_ptr().add(i) as *mut __m256i, pattern);
            i += 32;
        }
    }
    while i < n {
        dst[i] = value;
        i += 1;
    }
}

#[target_feature(enable = "avx2")]
pub unsafe fn lookup(dst: &mut [u8], src: &[u8], table: &[u8; 256]) {
    debug_assert_eq!(dst.len(), src.len());
    let n = dst.len();
    let mut i = 0;

    unsafe {
        // The 256-entry table as sixteen 16-byte segments, each broadcast to
        // both AVX2 lanes so `shuffle_epi8` indexes it with low nibbles.
        let mut segments = [_mm256_setzero_si256(); 16];
        for (seg, chunk) in segments.iter_mut().zip(table.chunks_exact(16)) {
            *seg = _mm256_broadcastsi128_si256(_mm_loadu_si128(chunk.as_ptr() as *const __m128i));
        }
        let low_mask = _mm256_set1_epi8(0x0F);

        while i + 32 <= n {
            let bytes = _mm256_loadu_si256(src.as_ptr().add(i) as *const __m256i);
            let lo = _mm256_and_si256(bytes, low_mask);
            let hi = _mm256_and_si256(_mm256_srli_epi16(bytes, 4), low_mask);

            let mut gathered = _mm256_setzero_si256();
            for (seg_index, seg) in segments.iter().enumerate() {
                let seg_match = _mm256_cmpeq_epi8(hi, _mm256_set1_epi8(seg_index as i8));
                let values = _mm256_shuffle_epi8(*seg, lo);
                gathered = _mm256_blendv_epi8(gathered, values, seg_match);
            }
            _mm256_storeu_si256(dst.as_mut_ptr().add(i) as *mut __m256i, gathered);
            i += 32;
        }
    }
    while i < n {
        dst[i] = table[src[i] as usize];
        i += 1;
    }
}

#[target_feature(enable = "avx2")]
pub unsafe fn bytesum(src: &[u8]) -> u64 {
    let n = src.len();
    let mut i = 0;
    let mut sum = 0u64;

    unsafe {
        let zero = _mm256_setzero_si256();
        let mut acc = _mm256_setzero_si256();
        while i + 32 <= n {
            let chunk = _mm256_loadu_si256(src.as_ptr().add(i) as *const __m256i);
            // Horizontal byte sums per 8-byte group, accumulated as u64 lanes.
            acc = _mm256_add_epi64(acc, _mm256_sad_epu8(chunk, zero));
            i += 32;
        }
        let mut lanes = [0u64; 4];
        _mm256_storeu_si256(lanes.as_mut_ptr() as *mut __m256i, acc);
        sum += lanes.iter().sum::<u64>();
    }
    while i < n {
        sum += src[i] as u64;
        i += 1;
    }
    sum
}
