use crate::core::log::{console_log, console_warn};
use crate::core::random;
use crate::core::vec2::Vec2;
use crate::domain::obstacle::{ObstacleId, ObstacleParams};

use super::SimulationCore;

pub(super) fn add_obstacle(
    core: &mut SimulationCore,
    params: ObstacleParams,
) -> Option<ObstacleId> {
    if !core.config.enabled {
        console_warn("obstacle system is disabled, ignoring add");
        return None;
    }
    if core.registry.len() >= core.config.max_obstacles {
        console_warn("obstacle limit reached, ignoring add");
        return None;
    }
    core.registry.create(params)
}

/// Add with the configured defaults; a missing position is drawn from the
/// interior [0.2, 0.8] band like the seeded population.
pub(super) fn add_obstacle_at(
    core: &mut SimulationCore,
    pos: Option<Vec2>,
) -> Option<ObstacleId> {
    let pos = pos.unwrap_or_else(|| {
        Vec2::new(
            random::next_unit(&mut core.rng_state) * 0.6 + 0.2,
            random::next_unit(&mut core.rng_state) * 0.6 + 0.2,
        )
    });
    let cfg = &core.config;
    let params = ObstacleParams {
        pos,
        size: Vec2::new(cfg.default_size[0], cfg.default_size[1]),
        mass: cfg.default_mass,
        friction: cfg.default_friction,
        restitution: cfg.default_restitution,
    };
    add_obstacle(core, params)
}

pub(super) fn remove_obstacle(core: &mut SimulationCore, id: ObstacleId) -> bool {
    if !core.config.enabled {
        return false;
    }
    core.registry.remove(id)
}

pub(super) fn clear_obstacles(core: &mut SimulationCore) {
    core.registry.clear();
    core.mask.reset();
    core.injections.clear();
    core.injection_transfer.clear();
    core.obstacle_transfer.clear();
}

pub(super) fn reset_obstacles(core: &mut SimulationCore) {
    core.registry.reset(&mut core.rng_state);
    core.mask.rebuild(core.registry.all());
    console_log("obstacle registry reseeded");
}
