//! Benchmark inputs for the dynarray container.
//!
//! Provides deterministic pseudo-random input generation so benchmark
//! runs are comparable across machines and invocations.

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

/// Generate `n` deterministic pseudo-random u64 values from `seed`.
///
/// Uses a multiplicative LCG step, so the sequence is fully determined
/// by the seed. Good enough to keep quicksort away from its sorted-input
/// worst case; not a statistical RNG.
pub fn shuffled_u64s(n: usize, seed: u64) -> Vec<u64> {
    let mut values = Vec::with_capacity(n);
    let mut state = seed.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
    for _ in 0..n {
        state = state.wrapping_mul(6364136223846793005).wrapping_add(1442695040888963407);
        values.push(state);
    }
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn generation_is_deterministic() {
        let a = shuffled_u64s(1000, 42);
        let b = shuffled_u64s(1000, 42);
        assert_eq!(a, b);
        assert_eq!(a.len(), 1000);
    }

    #[test]
    fn different_seeds_differ() {
        let a = shuffled_u64s(100, 1);
        let b = shuffled_u64s(100, 2);
        assert_ne!(a, b);
    }
}
