//! Seeded randomness for tie-breaking and decoy scatter.
//!
//! The core never draws from ambient entropy. Every random decision derives a
//! seed from the explicit turn seed handed to
//! [`TurnScheduler::advance`](crate::TurnScheduler::advance), so the same seed
//! and action sequence always reproduce the same states.

/// Deterministic random source: the same seed always yields the same value.
pub trait RngOracle: Send + Sync {
    fn next_u32(&self, seed: u64) -> u32;

    /// Picks an index in `0..len`; `len` must be non-zero.
    fn pick(&self, seed: u64, len: usize) -> usize {
        (self.next_u32(seed) as usize) % len
    }

    fn coin_flip(&self, seed: u64) -> bool {
        self.next_u32(seed) & 1 == 0
    }
}

/// PCG random number generator (PCG-XSH-RR, 64-bit state, 32-bit output).
#[derive(Clone, Copy, Debug, Default)]
pub struct PcgRng;

impl PcgRng {
    const MULTIPLIER: u64 = 6364136223846793005;
    const INCREMENT: u64 = 1442695040888963407;

    #[inline]
    fn pcg_step(state: u64) -> u64 {
        state
            .wrapping_mul(Self::MULTIPLIER)
            .wrapping_add(Self::INCREMENT)
    }

    #[inline]
    fn pcg_output(state: u64) -> u32 {
        let xorshifted = (((state >> 18) ^ state) >> 27) as u32;
        let rot = (state >> 59) as u32;
        xorshifted.rotate_right(rot)
    }
}

impl RngOracle for PcgRng {
    fn next_u32(&self, seed: u64) -> u32 {
        Self::pcg_output(Self::pcg_step(seed))
    }
}

/// Derives a per-decision seed from the turn seed.
///
/// * `turn_seed` - seed supplied with the action
/// * `turn` - turn counter of the state being advanced
/// * `subject` - guard id, or 0 for player-side rolls
/// * `context` - distinguishes several rolls made for the same subject
pub fn compute_seed(turn_seed: u64, turn: u64, subject: u32, context: u32) -> u64 {
    // SplitMix64 / FxHash style mixing
    let mut hash = turn_seed;
    hash ^= turn.wrapping_mul(0x9e3779b97f4a7c15);
    hash ^= u64::from(subject).wrapping_mul(0x517cc1b727220a95);
    hash ^= u64::from(context).wrapping_mul(0x85ebca6b);

    hash ^= hash >> 33;
    hash = hash.wrapping_mul(0xff51afd7ed558ccd);
    hash ^= hash >> 33;

    hash
}
