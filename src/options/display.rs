use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
/// Display toggles and scene dressing parameters.
pub struct DisplayOptions {
    /// Whether the space-time grid starts visible.
    pub show_grid: bool,
    /// Whether the lensing pass starts enabled.
    pub lensing_enabled: bool,
    /// Number of background starfield points.
    pub starfield_count: u32,
    /// Seed for the starfield RNG so every run looks the same.
    pub starfield_seed: u64,
    /// Deep-space clear color (linear RGB).
    pub background_color: [f32; 3],
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            show_grid: true,
            lensing_enabled: true,
            starfield_count: 600,
            starfield_seed: 7,
            background_color: [0.02, 0.05, 0.10],
        }
    }
}
