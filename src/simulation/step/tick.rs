use crate::bridge::feedback;
use crate::systems::{collision, integrator};

use super::{PhaseTimer, SimulationCore};

/// One simulation tick. Phase order is load-bearing: point contacts feed
/// impulses into the working set, integration moves it, pair contacts
/// resolve the result, and only then do the solver-facing outputs get
/// rebuilt from the settled state.
pub(super) fn tick(core: &mut SimulationCore, dt: f32) {
    let perf_on = core.perf_enabled;
    if perf_on {
        core.perf_stats.reset();
        core.perf_stats.obstacle_count = core.registry.len() as u32;
    }
    let tick_start = if perf_on { Some(PhaseTimer::start()) } else { None };

    if !core.config.enabled {
        return;
    }

    let points = core.mailbox.take();
    if perf_on {
        core.perf_stats.point_count = points.len() as u32;
    }

    // === POINT CONTACTS ===
    let mode = core.config.resolution;
    let repulsion_speed = core.config.repulsion_speed;
    if perf_on {
        let t0 = PhaseTimer::start();
        let resolved =
            collision::apply_point_collisions(&points, core.registry.all_mut(), mode, repulsion_speed);
        core.perf_stats.point_collisions = resolved;
        core.perf_stats.points_ms = t0.elapsed_ms();
    } else {
        collision::apply_point_collisions(&points, core.registry.all_mut(), mode, repulsion_speed);
    }

    // === INTEGRATION ===
    if perf_on {
        let t0 = PhaseTimer::start();
        integrator::integrate_all(core.registry.all_mut(), dt);
        core.perf_stats.integrate_ms = t0.elapsed_ms();
    } else {
        integrator::integrate_all(core.registry.all_mut(), dt);
    }

    // === PAIR CONTACTS ===
    if perf_on {
        let t0 = PhaseTimer::start();
        let (checks, resolved) = collision::apply_pair_collisions(core.registry.all_mut());
        core.perf_stats.pair_checks = checks;
        core.perf_stats.pair_collisions = resolved;
        core.perf_stats.pairs_ms = t0.elapsed_ms();
    } else {
        collision::apply_pair_collisions(core.registry.all_mut());
    }

    // === MASK REBUILD ===
    // Full rebuild every tick: obstacles moved, stale footprints must go.
    if perf_on {
        let t0 = PhaseTimer::start();
        core.mask.rebuild(core.registry.all());
        core.perf_stats.mask_ms = t0.elapsed_ms();
    } else {
        core.mask.rebuild(core.registry.all());
    }

    // === FLUID FEEDBACK ===
    core.injections.clear();
    if perf_on {
        let t0 = PhaseTimer::start();
        let issued = feedback::emit_feedback(core.registry.all(), &mut core.injections);
        core.perf_stats.injection_count = issued;
        core.perf_stats.feedback_ms = t0.elapsed_ms();
    } else {
        feedback::emit_feedback(core.registry.all(), &mut core.injections);
    }

    super::render_extract::extract_state(core);

    if perf_on {
        core.perf_stats.obstacle_count = core.registry.len() as u32;
        if let Some(start) = tick_start {
            core.perf_stats.tick_ms = start.elapsed_ms();
        }
    }

    core.frame += 1;
}
