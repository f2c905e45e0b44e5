use wasm_bindgen::prelude::*;

use crate::core::log::console_warn;
use crate::core::vec2::Vec2;
use crate::domain::obstacle::ObstacleParams;

use super::perf_stats::TickStats;
use super::SimulationCore;

/// Upper bound on a tick's delta time in seconds. A backgrounded tab can
/// hand us a multi-second gap; stepping that far in one tick would launch
/// obstacles through walls.
pub const MAX_TICK_DT: f32 = 0.1;

#[wasm_bindgen]
pub struct Simulation {
    core: SimulationCore,
}

#[wasm_bindgen]
impl Simulation {
    /// Create a simulation with an obstacle mask of the given resolution
    #[wasm_bindgen(constructor)]
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            core: SimulationCore::new(width, height),
        }
    }

    #[wasm_bindgen(getter)]
    pub fn width(&self) -> u32 { self.core.width() }

    #[wasm_bindgen(getter)]
    pub fn height(&self) -> u32 { self.core.height() }

    #[wasm_bindgen(getter)]
    pub fn frame(&self) -> u64 { self.core.frame() }

    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> usize { self.core.obstacle_count() }

    #[wasm_bindgen(getter)]
    pub fn enabled(&self) -> bool { self.core.enabled() }

    /// Enable or disable the obstacle system (disabling clears it)
    pub fn set_enabled(&mut self, enabled: bool) {
        self.core.set_enabled(enabled);
    }

    /// Replace the configuration from a JSON document
    pub fn configure_from_json(&mut self, json: String) -> Result<(), JsValue> {
        self.core
            .configure_from_json(&json)
            .map_err(|e| JsValue::from_str(&e))?;
        Ok(())
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        self.core.enable_perf_metrics(enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        self.core.get_perf_stats()
    }

    /// Add an obstacle with explicit parameters.
    /// Returns the obstacle id, or 0 when the creation was rejected.
    #[allow(clippy::too_many_arguments)]
    pub fn add_obstacle(
        &mut self,
        x: f32,
        y: f32,
        size_x: f32,
        size_y: f32,
        mass: f32,
        friction: f32,
        restitution: f32,
    ) -> u32 {
        let params = ObstacleParams {
            pos: Vec2::new(x, y),
            size: Vec2::new(size_x, size_y),
            mass,
            friction,
            restitution,
        };
        self.core.add_obstacle(params).unwrap_or(0)
    }

    /// Add an obstacle at (x, y) with the configured defaults.
    /// Returns the obstacle id, or 0 when the creation was rejected.
    pub fn add_obstacle_at(&mut self, x: f32, y: f32) -> u32 {
        self.core.add_obstacle_at(Vec2::new(x, y)).unwrap_or(0)
    }

    /// Add a default obstacle at a random interior position
    pub fn add_obstacle_random(&mut self) -> u32 {
        self.core.add_obstacle_random().unwrap_or(0)
    }

    /// Remove an obstacle by id (no-op when absent)
    pub fn remove_obstacle(&mut self, id: u32) -> bool {
        self.core.remove_obstacle(id)
    }

    /// Remove all obstacles
    pub fn clear_obstacles(&mut self) {
        self.core.clear_obstacles();
    }

    /// Clear and reseed the default random population
    pub fn reset_obstacles(&mut self) {
        self.core.reset_obstacles();
    }

    /// Store a point batch for the next tick. A malformed document is
    /// ignored (the tick proceeds without external points).
    pub fn submit_points_json(&mut self, json: &str) {
        if let Err(e) = self.core.submit_points_json(json) {
            console_warn(&format!("ignoring malformed point batch: {e}"));
        }
    }

    /// Step the simulation forward by `dt` seconds (clamped)
    pub fn tick(&mut self, dt: f32) {
        let dt = if dt.is_finite() { dt.clamp(0.0, MAX_TICK_DT) } else { 0.0 };
        self.core.tick(dt);
    }

    /// Get pointer to the RGBA obstacle mask (for JS texture upload)
    pub fn mask_ptr(&self) -> *const u8 {
        self.core.mask().as_ptr()
    }

    pub fn mask_len_bytes(&self) -> usize {
        self.core.mask().len_bytes()
    }

    pub fn mask_width(&self) -> u32 {
        self.core.mask().width()
    }

    pub fn mask_height(&self) -> u32 {
        self.core.mask().height()
    }

    /// Get pointer to the flat obstacle state: `[id, x, y, vx, vy, sx, sy]`
    /// per obstacle (for the JS overlay renderer)
    pub fn obstacle_state_ptr(&self) -> *const f32 {
        self.core.obstacle_state().as_ptr()
    }

    pub fn obstacle_state_len(&self) -> usize {
        self.core.obstacle_state().len()
    }

    /// Get pointer to the flat injections: `[x, y, rx, ry, vx, vy]` per
    /// injection (for the fluid solver glue)
    pub fn injections_ptr(&self) -> *const f32 {
        self.core.injection_data().as_ptr()
    }

    pub fn injections_len(&self) -> usize {
        self.core.injection_data().len()
    }

    pub fn injection_count(&self) -> usize {
        self.core.injections().len()
    }
}
