//! Deterministic pseudo-random numbers for event rolls.
//!
//! The engine deliberately avoids a real RNG: every roll is a pure function
//! of the step counter, so the same sequence of commands always replays the
//! same events. The generator is the classic sine-fract hash.

/// Map `seed` to an integer in `[0, modulo)`.
///
/// Equal inputs always produce equal outputs. The fractional part is taken
/// as `x - x.floor()` so a negative sine product still lands in `[0, 1)`.
/// `modulo` must be non-zero.
pub fn pseudo_random(seed: u64, modulo: u64) -> u64 {
    debug_assert!(modulo > 0, "pseudo_random requires a non-zero modulo");
    let x = (seed as f64 * 12.9898).sin() * 43758.5453;
    let frac = x - x.floor();
    ((frac * modulo as f64) as u64).min(modulo - 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn same_seed_same_value() {
        for seed in 0..50 {
            assert_eq!(pseudo_random(seed, 10), pseudo_random(seed, 10));
        }
    }

    #[test]
    fn stays_in_range() {
        for seed in 0..500 {
            for modulo in 1..=10 {
                let value = pseudo_random(seed, modulo);
                assert!(value < modulo, "seed {} modulo {} gave {}", seed, modulo, value);
            }
        }
    }

    #[test]
    fn zero_seed_rolls_zero() {
        // sin(0) is exactly 0, so the step-zero roll always lands on 0
        assert_eq!(pseudo_random(0, 10), 0);
        assert_eq!(pseudo_random(0, 3), 0);
    }

    #[test]
    fn covers_the_full_range() {
        let mut seen = [false; 10];
        for seed in 0..1000 {
            seen[pseudo_random(seed, 10) as usize] = true;
        }
        assert!(seen.iter().all(|hit| *hit), "missing residues: {:?}", seen);
    }

    #[test]
    fn varies_with_seed() {
        let values: std::collections::HashSet<u64> =
            (0..50).map(|seed| pseudo_random(seed, 10)).collect();
        assert!(values.len() > 3);
    }
}
