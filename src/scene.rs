//! Scene toggles and stepped lens parameters.
//!
//! Mutated only by discrete key events; every operation is a total
//! function over the valid state space and keeps clamping no matter how
//! often it is repeated.

use crate::options::{DisplayOptions, LensOptions};

/// Runtime scene state: visibility toggles plus the two stepped lens
/// parameters, with their step sizes and clamp bounds captured from
/// options at construction.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneState {
    lensing_enabled: bool,
    grid_visible: bool,
    lens_strength: f32,
    lens_radius: f32,

    strength_step: f32,
    max_strength: f32,
    radius_step: f32,
    min_radius: f32,
    max_radius: f32,
}

impl Default for SceneState {
    fn default() -> Self {
        Self::new(&DisplayOptions::default(), &LensOptions::default())
    }
}

impl SceneState {
    /// Build the initial state from display and lens options.
    #[must_use]
    pub fn new(display: &DisplayOptions, lens: &LensOptions) -> Self {
        Self {
            lensing_enabled: display.lensing_enabled,
            grid_visible: display.show_grid,
            lens_strength: lens.strength.clamp(0.0, lens.max_strength),
            lens_radius: lens.radius.clamp(lens.min_radius, lens.max_radius),
            strength_step: lens.strength_step,
            max_strength: lens.max_strength,
            radius_step: lens.radius_step,
            min_radius: lens.min_radius,
            max_radius: lens.max_radius,
        }
    }

    /// Flip grid visibility.
    pub fn toggle_grid(&mut self) {
        self.grid_visible = !self.grid_visible;
    }

    /// Flip the lensing effect on or off.
    pub fn toggle_lensing(&mut self) {
        self.lensing_enabled = !self.lensing_enabled;
    }

    /// Step lens strength up by one increment.
    pub fn increase_strength(&mut self) {
        self.lens_strength = (self.lens_strength + self.strength_step)
            .clamp(0.0, self.max_strength);
    }

    /// Step lens strength down by one increment.
    pub fn decrease_strength(&mut self) {
        self.lens_strength = (self.lens_strength - self.strength_step)
            .clamp(0.0, self.max_strength);
    }

    /// Step lens radius up by one increment.
    pub fn increase_radius(&mut self) {
        self.lens_radius = (self.lens_radius + self.radius_step)
            .clamp(self.min_radius, self.max_radius);
    }

    /// Step lens radius down by one increment.
    pub fn decrease_radius(&mut self) {
        self.lens_radius = (self.lens_radius - self.radius_step)
            .clamp(self.min_radius, self.max_radius);
    }

    /// Whether the lensing pass warps the image.
    #[must_use]
    pub fn lensing_enabled(&self) -> bool {
        self.lensing_enabled
    }

    /// Whether the space-time grid is drawn.
    #[must_use]
    pub fn grid_visible(&self) -> bool {
        self.grid_visible
    }

    /// Current lens strength.
    #[must_use]
    pub fn lens_strength(&self) -> f32 {
        self.lens_strength
    }

    /// Current lens influence radius.
    #[must_use]
    pub fn lens_radius(&self) -> f32 {
        self.lens_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggles_are_involutions() {
        let mut state = SceneState::default();
        let grid = state.grid_visible();
        state.toggle_grid();
        assert_eq!(state.grid_visible(), !grid);
        state.toggle_grid();
        assert_eq!(state.grid_visible(), grid);

        let lensing = state.lensing_enabled();
        state.toggle_lensing();
        state.toggle_lensing();
        assert_eq!(state.lensing_enabled(), lensing);
    }

    #[test]
    fn strength_steps_stay_clamped() {
        let mut state = SceneState::default();
        for _ in 0..200 {
            state.increase_strength();
        }
        assert_eq!(state.lens_strength(), 0.75);
        for _ in 0..200 {
            state.decrease_strength();
        }
        assert_eq!(state.lens_strength(), 0.0);
    }

    #[test]
    fn radius_steps_stay_clamped() {
        let mut state = SceneState::default();
        for _ in 0..200 {
            state.increase_radius();
        }
        assert_eq!(state.lens_radius(), 0.95);
        for _ in 0..200 {
            state.decrease_radius();
        }
        assert_eq!(state.lens_radius(), 0.15);
    }

    #[test]
    fn single_step_moves_by_increment() {
        let mut state = SceneState::default();
        let before = state.lens_strength();
        state.increase_strength();
        assert!((state.lens_strength() - (before + 0.02)).abs() < 1e-6);
    }

    #[test]
    fn defaults_come_from_options() {
        let state = SceneState::default();
        assert!(state.grid_visible());
        assert!(state.lensing_enabled());
        assert_eq!(state.lens_strength(), 0.16);
        assert_eq!(state.lens_radius(), 0.55);
    }
}
