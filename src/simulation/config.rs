use serde::Deserialize;

use crate::systems::collision::ResolutionMode;

/// Controller-facing configuration. Deserialized wholesale from JSON;
/// every field falls back to its default when missing.
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct ObstacleConfig {
    pub enabled: bool,
    /// Hard cap on the live obstacle count; creation beyond it is
    /// rejected, not silently dropped.
    pub max_obstacles: usize,
    pub default_mass: f32,
    pub default_friction: f32,
    pub default_restitution: f32,
    pub default_size: [f32; 2],
    /// Point-contact resolution strategy.
    pub resolution: ResolutionMode,
    /// Step length of the repulsion strategy.
    pub repulsion_speed: f32,
}

impl Default for ObstacleConfig {
    fn default() -> Self {
        Self {
            enabled: false,
            max_obstacles: 10,
            default_mass: 1.0,
            default_friction: 0.95,
            default_restitution: 0.8,
            default_size: [0.03, 0.03],
            resolution: ResolutionMode::Elastic,
            repulsion_speed: 0.02,
        }
    }
}

impl ObstacleConfig {
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| e.to_string())
    }
}
