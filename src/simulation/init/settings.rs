use crate::core::vec2::Vec2;
use crate::systems::collision::ResolutionMode;

use super::config::ObstacleConfig;
use super::perf_stats::TickStats;
use super::SimulationCore;

pub(super) fn set_enabled(core: &mut SimulationCore, enabled: bool) {
    core.config.enabled = enabled;
    if !enabled {
        core.registry.clear();
        core.mask.reset();
        core.injections.clear();
        core.injection_transfer.clear();
        core.obstacle_transfer.clear();
    }
}

pub(super) fn configure_from_json(core: &mut SimulationCore, json: &str) -> Result<(), String> {
    let config = ObstacleConfig::from_json(json)?;
    let disabling = core.config.enabled && !config.enabled;
    core.config = config;
    if disabling {
        set_enabled(core, false);
    }
    Ok(())
}

pub(super) fn set_resolution_mode(core: &mut SimulationCore, mode: ResolutionMode) {
    core.config.resolution = mode;
}

pub(super) fn set_max_obstacles(core: &mut SimulationCore, max: usize) {
    core.config.max_obstacles = max;
}

pub(super) fn set_defaults(
    core: &mut SimulationCore,
    mass: f32,
    friction: f32,
    restitution: f32,
    size: Vec2,
) {
    core.config.default_mass = mass;
    core.config.default_friction = friction;
    core.config.default_restitution = restitution;
    core.config.default_size = [size.x, size.y];
}

pub(super) fn enable_perf_metrics(core: &mut SimulationCore, enabled: bool) {
    core.perf_enabled = enabled;
    if !enabled {
        core.perf_stats = TickStats::default();
    }
}

pub(super) fn get_perf_stats(core: &SimulationCore) -> TickStats {
    core.perf_stats.clone()
}
