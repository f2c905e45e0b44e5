//! Simulation orchestration.
//!
//! `SimulationCore` owns the registry, the point mailbox, the obstacle
//! mask and the injection buffers, and runs exactly one tick per rendered
//! frame. It only orchestrates - collision and integration math live in
//! systems/, the solver-facing surfaces in bridge/.

use crate::bridge::feedback::{InjectionBuffer, VelocityInjection};
use crate::bridge::mask::ObstacleMask;
use crate::core::vec2::Vec2;
use crate::domain::obstacle::{Obstacle, ObstacleId, ObstacleParams};
use crate::domain::points::PointSample;
use crate::systems::collision::ResolutionMode;
use crate::systems::registry::ObstacleRegistry;

#[path = "perf/perf_timer.rs"]
mod perf_timer;
#[path = "perf/perf_stats.rs"]
mod perf_stats;
#[path = "init/init.rs"]
mod init;
#[path = "init/settings.rs"]
mod settings;
#[path = "commands/commands.rs"]
mod commands;
#[path = "step/tick.rs"]
mod tick;
#[path = "render/render_extract.rs"]
mod render_extract;
mod config;
mod facade;
mod mailbox;

pub use config::ObstacleConfig;
pub use facade::{Simulation, MAX_TICK_DT};
pub use perf_stats::TickStats;

use mailbox::PointMailbox;
use perf_timer::PhaseTimer;

/// The obstacle simulation core
pub struct SimulationCore {
    registry: ObstacleRegistry,
    mask: ObstacleMask,
    mailbox: PointMailbox,
    config: ObstacleConfig,
    injections: InjectionBuffer,

    // Flat f32 transfer buffers for the JS side
    injection_transfer: Vec<f32>,
    obstacle_transfer: Vec<f32>,

    // State
    frame: u64,
    rng_state: u32,

    // Perf metrics
    perf_enabled: bool,
    perf_stats: TickStats,
}

impl SimulationCore {
    /// Create a core with an obstacle mask of the given resolution.
    pub fn new(width: u32, height: u32) -> Self {
        init::create_simulation_core(width, height)
    }

    pub fn width(&self) -> u32 {
        self.mask.width()
    }

    pub fn height(&self) -> u32 {
        self.mask.height()
    }

    pub fn frame(&self) -> u64 {
        self.frame
    }

    pub fn obstacle_count(&self) -> usize {
        self.registry.len()
    }

    pub fn enabled(&self) -> bool {
        self.config.enabled
    }

    /// Enable or disable the obstacle system. Disabling clears the live
    /// set and restores the mask baseline.
    pub fn set_enabled(&mut self, enabled: bool) {
        settings::set_enabled(self, enabled);
    }

    /// Replace the whole config from JSON (missing fields take defaults).
    pub fn configure_from_json(&mut self, json: &str) -> Result<(), String> {
        settings::configure_from_json(self, json)
    }

    pub fn config(&self) -> &ObstacleConfig {
        &self.config
    }

    pub fn set_resolution_mode(&mut self, mode: ResolutionMode) {
        settings::set_resolution_mode(self, mode);
    }

    pub fn set_max_obstacles(&mut self, max: usize) {
        settings::set_max_obstacles(self, max);
    }

    pub fn set_defaults(&mut self, mass: f32, friction: f32, restitution: f32, size: Vec2) {
        settings::set_defaults(self, mass, friction, restitution, size);
    }

    /// Enable or disable per-tick perf metrics (adds timing overhead when enabled)
    pub fn enable_perf_metrics(&mut self, enabled: bool) {
        settings::enable_perf_metrics(self, enabled);
    }

    /// Get last tick perf snapshot (zeros when perf disabled)
    pub fn get_perf_stats(&self) -> TickStats {
        settings::get_perf_stats(self)
    }

    /// Add an obstacle with explicit parameters.
    ///
    /// Fails softly (None) when the system is disabled, the configured
    /// maximum is reached, or the params are invalid.
    pub fn add_obstacle(&mut self, params: ObstacleParams) -> Option<ObstacleId> {
        commands::add_obstacle(self, params)
    }

    /// Add an obstacle at `pos` using the configured defaults.
    pub fn add_obstacle_at(&mut self, pos: Vec2) -> Option<ObstacleId> {
        commands::add_obstacle_at(self, Some(pos))
    }

    /// Add a default obstacle at a random interior position.
    pub fn add_obstacle_random(&mut self) -> Option<ObstacleId> {
        commands::add_obstacle_at(self, None)
    }

    /// Remove an obstacle by id. No-op (false) if absent or disabled.
    pub fn remove_obstacle(&mut self, id: ObstacleId) -> bool {
        commands::remove_obstacle(self, id)
    }

    /// Remove all obstacles and restore the mask baseline.
    pub fn clear_obstacles(&mut self) {
        commands::clear_obstacles(self);
    }

    /// Clear, then reseed the default random population.
    pub fn reset_obstacles(&mut self) {
        commands::reset_obstacles(self);
    }

    /// Store a point batch for the next tick (last-write-wins).
    pub fn submit_points(&mut self, batch: Vec<PointSample>) {
        self.mailbox.store(batch);
    }

    /// Parse and store a point batch from the wire format. Returns the
    /// number of accepted samples.
    pub fn submit_points_json(&mut self, json: &str) -> Result<usize, String> {
        let batch = crate::domain::points::parse_batch(json)?;
        let count = batch.len();
        self.mailbox.store(batch);
        Ok(count)
    }

    /// Run one simulation tick: drain the mailbox, resolve point
    /// collisions, integrate, resolve pair collisions, rebuild the mask,
    /// collect fluid feedback, extract render state.
    pub fn tick(&mut self, dt: f32) {
        tick::tick(self, dt);
    }

    pub fn obstacles(&self) -> &[Obstacle] {
        self.registry.all()
    }

    pub fn obstacle(&self, id: ObstacleId) -> Option<&Obstacle> {
        self.registry.get(id)
    }

    pub fn mask(&self) -> &ObstacleMask {
        &self.mask
    }

    pub fn injections(&self) -> &[VelocityInjection] {
        self.injections.as_slice()
    }

    /// Flat `[x, y, rx, ry, vx, vy]` records, one per injection.
    pub fn injection_data(&self) -> &[f32] {
        &self.injection_transfer
    }

    /// Flat `[id, x, y, vx, vy, sx, sy]` records, one per obstacle.
    pub fn obstacle_state(&self) -> &[f32] {
        &self.obstacle_transfer
    }
}

#[cfg(test)]
#[path = "tests/tests.rs"]
mod tests;
