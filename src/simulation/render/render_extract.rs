use super::SimulationCore;

/// Repack obstacle and injection state into flat f32 transfer buffers for
/// the JS overlay renderer and the fluid solver glue. Layouts:
/// obstacles `[id, x, y, vx, vy, sx, sy]`, injections
/// `[x, y, rx, ry, vx, vy]`.
pub(super) fn extract_state(core: &mut SimulationCore) {
    core.obstacle_transfer.clear();
    for o in core.registry.all() {
        core.obstacle_transfer.extend_from_slice(&[
            o.id as f32,
            o.pos.x,
            o.pos.y,
            o.vel.x,
            o.vel.y,
            o.size.x,
            o.size.y,
        ]);
    }

    core.injection_transfer.clear();
    for inj in core.injections.as_slice() {
        core.injection_transfer.extend_from_slice(&[
            inj.pos.x,
            inj.pos.y,
            inj.footprint.x,
            inj.footprint.y,
            inj.velocity.x,
            inj.velocity.y,
        ]);
    }
}
