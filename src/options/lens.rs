use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Lensing effect parameters: defaults, step sizes, and clamp bounds for
/// the `+`/`-` and `[`/`]` keys.
pub struct LensOptions {
    /// Initial bending strength.
    pub strength: f32,
    /// Strength change per key press.
    pub strength_step: f32,
    /// Upper strength clamp (lower clamp is zero).
    pub max_strength: f32,
    /// Initial influence radius, as a fraction of the half-min screen
    /// dimension.
    pub radius: f32,
    /// Radius change per key press.
    pub radius_step: f32,
    /// Lower radius clamp.
    pub min_radius: f32,
    /// Upper radius clamp.
    pub max_radius: f32,
    /// Event horizon disc radius in physical pixels.
    pub horizon_radius_px: f32,
}

impl Default for LensOptions {
    fn default() -> Self {
        Self {
            strength: 0.16,
            strength_step: 0.02,
            max_strength: 0.75,
            radius: 0.55,
            radius_step: 0.02,
            min_radius: 0.15,
            max_radius: 0.95,
            horizon_radius_px: 70.0,
        }
    }
}
