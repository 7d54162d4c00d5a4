// Seeded 64-bit content hashing, one-shot and incremental.
//
// The algorithm is pinned to the XXH64 construction: four 64-bit lanes fed
// 32-byte stripes, a merge step, and an avalanche finalizer. The choice is
// fixed once — every backend and every chunking of the same (bytes, seed)
// input produces the identical digest, which is what the incremental state
// guarantees:
//
//   digest(update(init(s), x ++ y)) == digest(update(update(init(s), x), y))
//
// The construction is byte-order stable (all loads are little-endian) and
// imposes no alignment requirements on the caller's buffers.

/// First multiplicative prime of the pinned construction.
pub const PRIME_1: u64 = 0x9E37_79B1_85EB_CA87;
/// Second multiplicative prime.
pub const PRIME_2: u64 = 0xC2B2_AE3D_27D4_EB4F;
/// Third multiplicative prime.
pub const PRIME_3: u64 = 0x1656_67B1_9E37_79F9;
/// Fourth multiplicative prime.
pub const PRIME_4: u64 = 0x85EB_CA77_C2B2_AE63;
/// Fifth multiplicative prime.
pub const PRIME_5: u64 = 0x27D4_EB2F_1656_67C5;

#[inline(always)]
fn read_u64_le(data: &[u8]) -> u64 {
    debug_assert!(data.len() >= 8);
    // Safety: caller guarantees at least 8 readable bytes.
    u64::from_le(unsafe { std::ptr::read_unaligned(data.as_ptr() as *const u64) })
}

#[inline(always)]
fn read_u32_le(data: &[u8]) -> u32 {
    debug_assert!(data.len() >= 4);
    // Safety: caller guarantees at least 4 readable bytes.
    u32::from_le(unsafe { std::ptr::read_unaligned(data.as_ptr() as *const u32) })
}

#[inline(always)]
fn round(acc: u64, lane: u64) -> u64 {
    acc.wrapping_add(lane.wrapping_mul(PRIME_2))
        .rotate_left(31)
        .wrapping_mul(PRIME_1)
}

#[inline(always)]
fn merge_round(mut hash: u64, acc: u64) -> u64 {
    hash ^= round(0, acc);
    hash.wrapping_mul(PRIME_1).wrapping_add(PRIME_4)
}

#[inline(always)]
fn avalanche(mut hash: u64) -> u64 {
    hash ^= hash >> 33;
    hash = hash.wrapping_mul(PRIME_2);
    hash ^= hash >> 29;
    hash = hash.wrapping_mul(PRIME_3);
    hash ^= hash >> 32;
    hash
}

/// Mix the final 0..=31 tail bytes into the digest.
fn finalize(mut hash: u64, mut tail: &[u8]) -> u64 {
    while tail.len() >= 8 {
        hash ^= round(0, read_u64_le(tail));
        hash = hash.rotate_left(27).wrapping_mul(PRIME_1).wrapping_add(PRIME_4);
        tail = &tail[8..];
    }
    if tail.len() >= 4 {
        hash ^= (read_u32_le(tail) as u64).wrapping_mul(PRIME_1);
        hash = hash.rotate_left(23).wrapping_mul(PRIME_2).wrapping_add(PRIME_3);
        tail = &tail[4..];
    }
    for &byte in tail {
        hash ^= (byte as u64).wrapping_mul(PRIME_5);
        hash = hash.rotate_left(11).wrapping_mul(PRIME_1);
    }
    avalanche(hash)
}

/// One-shot seeded 64-bit hash of `data`.
pub fn hash(data: &[u8], seed: u64) -> u64 {
    let mut hash = if data.len() >= 32 {
        let mut lanes = Lanes::new(seed);
        let mut rest = data;
        while rest.len() >= 32 {
            lanes.stripe(rest);
            rest = &rest[32..];
        }
        lanes.converge()
    } else {
        seed.wrapping_add(PRIME_5)
    };
    hash = hash.wrapping_add(data.len() as u64);
    finalize(hash, &data[data.len() - data.len() % 32..])
}

/// The four stripe accumulators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Lanes {
    acc: [u64; 4],
}

impl Lanes {
    #[inline(always)]
    fn new(seed: u64) -> Self {
        Self {
            acc: [
                seed.wrapping_add(PRIME_1).wrapping_add(PRIME_2),
                seed.wrapping_add(PRIME_2),
                seed,
                seed.wrapping_sub(PRIME_1),
            ],
        }
    }

    /// Absorb one 32-byte stripe from the front of `data`.
    #[inline(always)]
    fn stripe(&mut self, data: &[u8]) {
        debug_assert!(data.len() >= 32);
        self.acc[0] = round(self.acc[0], read_u64_le(&data[0..]));
        self.acc[1] = round(self.acc[1], read_u64_le(&data[8..]));
        self.acc[2] = round(self.acc[2], read_u64_le(&data[16..]));
        self.acc[3] = round(self.acc[3], read_u64_le(&data[24..]));
    }

    /// Collapse the four lanes into the pre-finalization hash.
    fn converge(&self) -> u64 {
        let [a, b, c, d] = self.acc;
        let mut hash = a
            .rotate_left(1)
            .wrapping_add(b.rotate_left(7))
            .wrapping_add(c.rotate_left(12))
            .wrapping_add(d.rotate_left(18));
        hash = merge_round(hash, a);
        hash = merge_round(hash, b);
        hash = merge_round(hash, c);
        merge_round(hash, d)
    }
}

/// Incremental hashing state.
///
/// Accepts the input in any chunking; the digest depends only on the seed
/// and the concatenated byte stream. The state is cheap to clone and
/// supports structural equality for testing.
#[derive(Debug, Clone)]
pub struct Hasher {
    lanes: Lanes,
    buffer: [u8; 32],
    buffered: usize,
    total_len: u64,
    seed: u64,
}

impl Hasher {
    /// Fresh state for a 64-bit seed.
    pub fn new(seed: u64) -> Self {
        Self {
            lanes: Lanes::new(seed),
            buffer: [0; 32],
            buffered: 0,
            total_len: 0,
            seed,
        }
    }

    /// Absorb a chunk of input.
    pub fn update(&mut self, mut data: &[u8]) {
        self.total_len += data.len() as u64;

        // Top up a partially filled stripe buffer first.
        if self.buffered > 0 {
            let take = data.len().min(32 - self.buffered);
            self.buffer[self.buffered..self.buffered + take].copy_from_slice(&data[..take]);
            self.buffered += take;
            data = &data[take..];
            if self.buffered == 32 {
                let buffer = self.buffer;
                self.lanes.stripe(&buffer);
                self.buffered = 0;
            }
        }

        while data.len() >= 32 {
            self.lanes.stripe(data);
            data = &data[32..];
        }

        if !data.is_empty() {
            self.buffer[..data.len()].copy_from_slice(data);
            self.buffered = data.len();
        }
    }

    /// Produce the digest of everything absorbed so far.
    ///
    /// Non-destructive: the state can keep absorbing afterwards.
    pub fn digest(&self) -> u64 {
        let mut hash = if self.total_len >= 32 {
            self.lanes.converge()
        } else {
            self.seed.wrapping_add(PRIME_5)
        };
        hash = hash.wrapping_add(self.total_len);
        finalize(hash, &self.buffer[..self.buffered])
    }
}

impl PartialEq for Hasher {
    fn eq(&self, other: &Self) -> bool {
        // Stale bytes beyond `buffered` are not part of the state.
        self.lanes == other.lanes
            && self.buffered == other.buffered
            && self.buffer[..self.buffered] == other.buffer[..other.buffered]
            && self.total_len == other.total_len
            && self.seed == other.seed
    }
}

impl Eq for Hasher {}
