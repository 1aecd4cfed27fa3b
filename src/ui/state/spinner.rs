// SPDX-License-Identifier: MPL-2.0
//! Spinner rotation advanced by the animation tick.

use std::f32::consts::TAU;

/// Spinner rotation speed in radians per tick.
const SPINNER_SPEED: f32 = 0.15;

#[derive(Debug, Clone, Copy, Default)]
pub struct SpinnerState {
    rotation: f32,
}

impl SpinnerState {
    /// Advances the rotation by one tick, wrapping at a full turn.
    pub fn tick(&mut self) {
        self.rotation += SPINNER_SPEED;
        if self.rotation > TAU {
            self.rotation -= TAU;
        }
    }

    pub fn reset(&mut self) {
        self.rotation = 0.0;
    }

    /// Current rotation angle in radians.
    #[must_use]
    pub fn rotation(&self) -> f32 {
        self.rotation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tick_advances_rotation() {
        let mut spinner = SpinnerState::default();
        spinner.tick();
        assert!(spinner.rotation() > 0.0);
    }

    #[test]
    fn rotation_wraps_after_full_turn() {
        let mut spinner = SpinnerState::default();
        for _ in 0..100 {
            spinner.tick();
        }
        assert!(spinner.rotation() <= TAU);
    }

    #[test]
    fn reset_returns_to_zero() {
        let mut spinner = SpinnerState::default();
        spinner.tick();
        spinner.reset();
        assert_eq!(spinner.rotation(), 0.0);
    }
}
