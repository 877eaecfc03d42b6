//! Player state and animation easing
//!
//! The player's lean/turn progress and death bookkeeping, plus the easing
//! curves that map those raw values to animation factors. Death is a one-way
//! transition: once `dead` is set it stays set for the rest of the session,
//! and only the death timer keeps advancing.

use crate::math::cubic_bezier;
use super::{DYING_TIME, TURNING_TIME};

/// Mutable per-session player data.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlayerState {
    /// Signed turn progress in milliseconds, clamped to +-TURNING_TIME.
    /// Negative while leaning left, positive while leaning right.
    pub turn: f32,
    /// Set on the first collision and never cleared.
    pub dead: bool,
    /// Milliseconds since death; only advances once dead.
    pub dead_timer: f32,
}

impl PlayerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flag the player as dead. Idempotent: a second call changes nothing.
    pub fn kill(&mut self) {
        self.dead = true;
    }
}

/// Map the turn accumulator to a lean factor in [-1, 1].
///
/// An S-curve: full turn maps to +-1, the middle is close to linear.
pub fn turning_factor(turn: f32) -> f32 {
    let x = turn / TURNING_TIME;
    (0.5 * std::f32::consts::PI * x).sin()
}

/// Map the death timer to an ease-out factor in [0, 1].
///
/// Reaches exactly 1.0 once the timer passes DYING_TIME.
pub fn dying_factor(timer: f32) -> f32 {
    let t = if timer >= DYING_TIME { 1.0 } else { timer / DYING_TIME };
    cubic_bezier(0.0, 0.07, 0.59, 1.0, t)
}
