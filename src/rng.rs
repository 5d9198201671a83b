use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg64;

/// Deterministic RNG factory for a given (seed, attempt) pair.
///
/// Implementation detail:
/// - Derives a per-attempt 64-bit seed as `seed ^ attempt`.
/// - Uses PCG 64-bit generator (rand_pcg::Pcg64) for reproducible sequences.
/// - Returned RNG is deterministic and reproducible across runs when inputs are equal.
#[inline]
pub fn rng_for_attempt(seed: u64, attempt: u64) -> impl Rng {
    let derived: u64 = seed ^ attempt;
    Pcg64::seed_from_u64(derived)
}
