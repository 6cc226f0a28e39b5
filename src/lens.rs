//! Gravitational lens displacement model.
//!
//! This is the CPU-side reference for the lensing effect: a radial falloff
//! that bends samples toward the lens center inside an influence radius and
//! leaves everything outside untouched. The GPU post-process pass
//! ([`renderer::lens_pass`](crate::renderer::lens_pass)) applies the same
//! strength/radius parameters per pixel in normalized screen space.
//!
//! All operations are total: out-of-radius samples, the exact lens center,
//! and the disabled state all resolve to the zero vector rather than an
//! error.

use glam::Vec3;

use crate::options::LensOptions;

/// Falloff exponent for the displacement magnitude. Quadratic gives a
/// smooth approach to zero at the influence boundary.
pub const FALLOFF_EXPONENT: f32 = 2.0;

/// Lens parameters handed to the rendering backend each frame.
///
/// Derived from [`SceneState`](crate::scene::SceneState) by the frame
/// composer; never stored across frames.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensParameters {
    /// World-space position of the black hole.
    pub center: Vec3,
    /// Bending strength (0 disables visually, even when `enabled`).
    pub strength: f32,
    /// Influence radius; no displacement at or beyond this distance.
    pub radius: f32,
    /// Whether the lensing pass should warp at all.
    pub enabled: bool,
}

/// Radial displacement model approximating light bending near a massive
/// body.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LensModel {
    strength: f32,
    radius: f32,
    exponent: f32,
    enabled: bool,
}

impl Default for LensModel {
    fn default() -> Self {
        let opts = LensOptions::default();
        Self {
            strength: opts.strength,
            radius: opts.radius,
            exponent: FALLOFF_EXPONENT,
            enabled: true,
        }
    }
}

impl LensModel {
    /// Create a model from the given parameter bundle.
    #[must_use]
    pub fn from_parameters(params: &LensParameters) -> Self {
        Self {
            strength: params.strength,
            radius: params.radius,
            exponent: FALLOFF_EXPONENT,
            enabled: params.enabled,
        }
    }

    /// Set the two tunable parameters.
    ///
    /// Callers are expected to hand in already-clamped values
    /// (`strength >= 0`, `radius > 0`); the model does not reject them.
    pub fn configure(&mut self, strength: f32, radius: f32) {
        self.strength = strength;
        self.radius = radius;
    }

    /// Enable or disable the lens. While disabled, [`Self::displacement`]
    /// returns zero regardless of parameters.
    pub fn toggle(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    /// Whether the lens currently bends anything.
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Displacement for a sample point relative to the lens center.
    ///
    /// Magnitude is `strength * (1 - d/radius)^p` for `d < radius`,
    /// directed toward the center. Returns the zero vector when disabled,
    /// when `d >= radius`, or when the sample sits exactly at the center
    /// (the direction is undefined there).
    #[must_use]
    pub fn displacement(&self, sample: Vec3, center: Vec3) -> Vec3 {
        if !self.enabled {
            return Vec3::ZERO;
        }

        let offset = sample - center;
        let d = offset.length();
        if d == 0.0 || d >= self.radius {
            return Vec3::ZERO;
        }

        let falloff = (1.0 - d / self.radius).powf(self.exponent);
        let toward_center = -offset / d;
        toward_center * (self.strength * falloff)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(strength: f32, radius: f32) -> LensModel {
        let mut m = LensModel::default();
        m.configure(strength, radius);
        m
    }

    #[test]
    fn zero_outside_radius() {
        let m = model(1.0, 5.0);
        assert_eq!(
            m.displacement(Vec3::new(10.0, 0.0, 0.0), Vec3::ZERO),
            Vec3::ZERO
        );
        // Exactly at the boundary counts as outside
        assert_eq!(
            m.displacement(Vec3::new(5.0, 0.0, 0.0), Vec3::ZERO),
            Vec3::ZERO
        );
    }

    #[test]
    fn zero_at_center() {
        let m = model(1.0, 5.0);
        let d = m.displacement(Vec3::ZERO, Vec3::ZERO);
        assert_eq!(d, Vec3::ZERO);
        assert!(d.is_finite());
    }

    #[test]
    fn zero_when_disabled() {
        let mut m = model(1.0, 5.0);
        m.toggle(false);
        assert_eq!(
            m.displacement(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO),
            Vec3::ZERO
        );
        m.toggle(true);
        assert_ne!(
            m.displacement(Vec3::new(1.0, 0.0, 0.0), Vec3::ZERO),
            Vec3::ZERO
        );
    }

    #[test]
    fn quadratic_falloff_at_half_radius() {
        // d = 2.5, d/radius = 0.5, magnitude = 1.0 * (1 - 0.5)^2 = 0.25,
        // directed toward the origin along -x.
        let m = model(1.0, 5.0);
        let d = m.displacement(Vec3::new(2.5, 0.0, 0.0), Vec3::ZERO);
        assert!((d.x - (-0.25)).abs() < 1e-6);
        assert_eq!(d.y, 0.0);
        assert_eq!(d.z, 0.0);
    }

    #[test]
    fn magnitude_vanishes_approaching_boundary() {
        let m = model(0.5, 4.0);
        let near = m
            .displacement(Vec3::new(3.999, 0.0, 0.0), Vec3::ZERO)
            .length();
        assert!(near < 1e-4);
    }

    #[test]
    fn respects_offset_center() {
        let m = model(1.0, 5.0);
        let center = Vec3::new(1.0, 2.0, 3.0);
        let d = m.displacement(center + Vec3::new(0.0, 2.5, 0.0), center);
        assert!((d.y - (-0.25)).abs() < 1e-6);
    }
}
