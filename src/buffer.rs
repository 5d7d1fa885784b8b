use rand::{RngCore, SeedableRng};
use rand_pcg::Pcg64;

/// Size of the shared write buffer; also the cap on bytes per write call.
pub const BUFFER_SIZE: usize = 10 * 1024 * 1024;

/// Fixed PRNG seed so every process generates the same byte stream.
const SEED: u64 = 1;

/// Fill a buffer of exactly `size` bytes with a reproducible pseudo-random
/// sequence. The content is non-trivial so that compressing or copy-on-write
/// backends cannot elide the write cost, but it must be identical across runs
/// for the populated tree to be deterministic — never seed from time or
/// OS entropy.
pub fn generate(size: usize) -> Vec<u8> {
    let mut rng = Pcg64::seed_from_u64(SEED);
    let mut buf = vec![0u8; size];
    rng.fill_bytes(&mut buf);
    buf
}
