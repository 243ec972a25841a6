//! Catch Mechanics
//!
//! Odds of catching a creature and the random draw that decides it.

use rand::Rng;

/// Base experience at or above which the catch chance bottoms out.
pub const HARD_CATCH_THRESHOLD: u32 = 340;

/// Catch chance for the hardest creatures.
pub const MIN_CATCH_PROBABILITY: f64 = 0.05;

/// Chance of catching a creature with the given base experience.
///
/// Falls linearly from 1.0 at zero experience and is floored at 0.05 from
/// 340 upwards.
pub fn catch_probability(base_experience: u32) -> f64 {
    if base_experience >= HARD_CATCH_THRESHOLD {
        return MIN_CATCH_PROBABILITY;
    }
    1.0 - f64::from(base_experience) / 400.0
}

/// Source of uniform draws in `[0, 1)`.
pub trait CatchRoll: Send {
    fn roll(&mut self) -> f64;
}

/// Draws from the thread-local RNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomRoll;

impl CatchRoll for RandomRoll {
    fn roll(&mut self) -> f64 {
        rand::thread_rng().gen::<f64>()
    }
}

/// Always returns the same draw.
#[derive(Debug, Clone, Copy)]
pub struct FixedRoll(pub f64);

impl CatchRoll for FixedRoll {
    fn roll(&mut self) -> f64 {
        self.0
    }
}

/// Decides a catch attempt: success iff the draw is below the catch chance.
pub fn attempt_catch(base_experience: u32, roll: &mut dyn CatchRoll) -> bool {
    roll.roll() < catch_probability(base_experience)
}
