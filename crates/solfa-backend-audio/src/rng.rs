//! Deterministic RNG using PCG32 with BLAKE3 seed derivation.
//!
//! Callers that want reproducible sequences seed a generator here and pass
//! it to [`generate_sequence`](crate::generate_sequence). Drill sets derive
//! one independent seed per round from a single base seed.

use rand::SeedableRng;
use rand_pcg::Pcg32;

/// Creates a PCG32 RNG from a 32-bit seed.
///
/// The seed is duplicated into both halves of the 64-bit PCG state seed.
///
/// # Arguments
/// * `seed` - 32-bit seed, e.g. from `--seed` or [`derive_round_seed`]
///
/// # Returns
/// A seeded PCG32 RNG
pub fn create_rng(seed: u32) -> Pcg32 {
    let seed64 = (seed as u64) | ((seed as u64) << 32);
    Pcg32::seed_from_u64(seed64)
}

/// Derives the seed for round `round_index` of a drill set.
///
/// Hashes the little-endian bytes of `base_seed` and `round_index` with
/// BLAKE3 and keeps the first four bytes.
///
/// # Arguments
/// * `base_seed` - Seed of the whole drill set
/// * `round_index` - Zero-based round number
///
/// # Returns
/// A derived 32-bit seed for that round
pub fn derive_round_seed(base_seed: u32, round_index: u32) -> u32 {
    let mut input = [0u8; 8];
    input[..4].copy_from_slice(&base_seed.to_le_bytes());
    input[4..].copy_from_slice(&round_index.to_le_bytes());

    let hash = blake3::hash(&input);
    let bytes = hash.as_bytes();
    u32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]])
}

/// Creates the RNG for one round of a drill set.
pub fn create_round_rng(base_seed: u32, round_index: u32) -> Pcg32 {
    create_rng(derive_round_seed(base_seed, round_index))
}
