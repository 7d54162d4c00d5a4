// aarch64 NEON byte kernels (16 bytes at a time).
//
// NEON is architecturally mandatory on aarch64, so these bind statically.

#![cfg(target_arch = "aarch64")]

use std::arch::aarch64::*;

pub unsafe fn copy(dst: &mut [u8], src: &[u8]) {
    debug_assert_eq!(dst.len(), src.len());
    let n = dst.len();
    let mut i = 0;
    unsafe {
        while i + 16 <= n {
            let chunk = vld1q_u8(src.as_ptr().add(i));
            vst1q_u8(dst.as_mut_ptr().add(i), chunk);
            i += 16;
        }
    }
    while i < n {
        dst[i] = src[i];
        i += 1;
    }
}

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
                    let chunk = vld1q_u8(base.add(src + i));
                    vst1q_u8(base.add(dst + i), chunk);
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
                    let chunk = vld1q_u8(base.add(src + i - 16));
                    vst1q_u8(base.add(dst + i - 16), chunk);
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

pub unsafe fn fill(dst: &mut [u8], value: u8) {
    let n = dst.len();
    let mut i = 0;
    unsafe {
        let pattern = vdupq_n_u8(value);
        while i + 16 <= n {
            vst1q_u8(dst.as_mut_ptr().add(i), pattern);
            i += 16;
        }
    }
    while i < n {
        dst[i] = value;
        i += 1;
    }
}

pub unsafe fn lookup(dst: &mut [u8], src: &[u8], table: &[u8; 256]) {
    debug_assert_eq!(dst.len(), src.len());
    let n = dst.len();
    let mut i = 0;

    unsafe {
        // vqtbl4q covers 64 table bytes per lookup; four of them plus an
        // index rebase cover the full 256-entry table.
        let t0 = vld1q_u8_x4(table.as_ptr());
        let t1 = vld1q_u8_x4(table.as_ptr().add(64));
        let t2 = vld1q_u8_x4(table.as_ptr().add(128));
        let t3 = vld1q_u8_x4(table.as_ptr().add(192));
        let step = vdupq_n_u8(64);

        while i + 16 <= n {
            let bytes = vld1q_u8(src.as_ptr().add(i));
            // Out-of-range indices yield zero, so the four quadrant lookups
            // can simply be OR-ed together.
            let mut out = vqtbl4q_u8(t0, bytes);
            let mut idx = vsubq_u8(bytes, step);
            out = vorrq_u8(out, vqtbl4q_u8(t1, idx));
            idx = vsubq_u8(idx, step);
            out = vorrq_u8(out, vqtbl4q_u8(t2, idx));
            idx = vsubq_u8(idx, step);
            out = vorrq_u8(out, vqtbl4q_u8(t3, idx));
            vst1q_u8(dst.as_mut_ptr().add(i), out);
            i += 16;
        }
    }
    while i < n {
        dst[i] = table[src[i] as usize];
        i += 1;
    }
}

pub unsafe fn bytesum(src: &[u8]) -> u64 {
    let n = src.len();
    let mut i = 0;
    let mut sum = 0u64;
    unsafe {
        while i + 16 <= n {
            let chunk = vld1q_u8(src.as_ptr().add(i));
            sum += vaddlvq_u8(chunk) as u64;
            i += 16;
        }
    }
    while i < n {
        sum += src[i] as u64;
        i += 1;
    }
    sum
}
