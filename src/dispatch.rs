// Backend capability detection.
//
// Every kernel family (bytes, search, utf8) keeps its own `OnceLock`
// function-pointer table; this module owns the capability probing those
// tables consult. The set is resolved once per process and is read-only
// afterwards.
//
// On x86_64 the probe is a runtime `is_x86_feature_detected!` check; on
// aarch64 NEON is architecturally mandatory, so the set is known at compile
// time. Anything else gets the portable serial backend.

use std::sync::OnceLock;

bitflags::bitflags! {
    /// The SIMD instruction sets a backend is allowed to assume.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct Caps: u32 {
        /// Portable scalar/SWAR code, always available.
        const SERIAL = 1 << 0;
        /// x86_64 SSE2 (baseline on every 64-bit x86).
        const SSE2 = 1 << 1;
        /// x86_64 AVX2 (Haswell and later).
        const AVX2 = 1 << 2;
        /// aarch64 Advanced SIMD.
        const NEON = 1 << 3;
    }
}

/// Capability set of the running CPU, probed once.
pub fn runtime_caps() -> Caps {
    static CAPS: OnceLock<Caps> = OnceLock::new();
    *CAPS.get_or_init(|| {
        let mut caps = Caps::SERIAL;

        #[cfg(target_arch = "x86_64")]
        {
            if is_x86_feature_detected!("sse2") {
                caps |= Caps::SSE2;
            }
            if is_x86_feature_detected!("avx2") {
                caps |= Caps::AVX2;
            }
        }

        #[cfg(target_arch = "aarch64")]
        {
            caps |= Caps::NEON;
        }

        log::debug!("resolved SIMD capabilities: {caps:?}");
        caps
    })
}

/// Name of the widest backend in a capability set, for logging and tests.
pub fn backend_name(caps: Caps) -> &'static str {
    if caps.contains(Caps::AVX2) {
        "avx2"
    } else if caps.contains(Caps::NEON) {
        "neon"
    } else if caps.contains(Caps::SSE2) {
        "sse2"
    } else {
        "serial"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serial_always_present() {
        assert!(runtime_caps().contains(Caps::SERIAL));
    }

    #[test]
    fn probe_is_stable() {
        assert_eq!(runtime_caps(), runtime_caps());
    }

    #[test]
    fn backend_name_prefers_widest() {
        assert_eq!(backend_name(Caps::SERIAL), "serial");
        assert_eq!(backend_name(Caps::SERIAL | Caps::SSE2), "sse2");
        assert_eq!(backend_name(Caps::SERIAL | Caps::SSE2 | Caps::AVX2), "avx2");
        assert_eq!(backend_name(Caps::SERIAL | Caps::NEON), "neon");
    }

    #[cfg(target_arch = "aarch64")]
    #[test]
    fn neon_is_mandatory_on_aarch64() {
        assert!(runtime_caps().contains(Caps::NEON));
    }
}
