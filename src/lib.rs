//! Obstacle Engine - dynamic obstacle physics for an interactive fluid simulation
//!
//! The crate owns the movable obstacle bodies of a browser-hosted 2D fluid
//! simulation: collision with incoming pointer points, pairwise elastic
//! collisions, per-tick integration, and the occupancy mask / velocity
//! injections consumed by the external fluid solver.
//!
//! Architecture:
//! - core/        - Math and small utilities
//! - domain/      - Entity types and wire parsing
//! - systems/     - Registry, collision engine, integrator
//! - bridge/      - Obstacle map + fluid feedback seams
//! - simulation/  - Orchestration and the WASM facade

pub mod core;
pub mod domain;
pub mod systems;
pub mod bridge;
pub mod simulation;

pub use core::vec2::Vec2;
pub use domain::obstacle::{Obstacle, ObstacleId, ObstacleParams};
pub use domain::points::PointSample;
pub use systems::collision::ResolutionMode;
pub use systems::registry::ObstacleRegistry;
pub use bridge::feedback::{FluidField, VelocityInjection};
pub use bridge::mask::ObstacleMask;
pub use simulation::{ObstacleConfig, Simulation, SimulationCore, TickStats};

use wasm_bindgen::prelude::*;

// Better error messages in debug mode
#[cfg(feature = "console_error_panic_hook")]
pub fn set_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Initialize the engine
#[wasm_bindgen]
pub fn init() {
    #[cfg(feature = "console_error_panic_hook")]
    set_panic_hook();

    web_sys::console::log_1(&"🦀 Obstacle WASM Engine initialized!".into());
}

/// Get engine version
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
