use wasm_bindgen::prelude::*;

/// Per-tick timing and counter snapshot (zeros when perf is disabled).
#[wasm_bindgen]
#[derive(Clone, Default)]
pub struct TickStats {
    pub(super) tick_ms: f64,
    pub(super) points_ms: f64,
    pub(super) integrate_ms: f64,
    pub(super) pairs_ms: f64,
    pub(super) mask_ms: f64,
    pub(super) feedback_ms: f64,
    pub(super) point_count: u32,
    pub(super) point_collisions: u32,
    pub(super) pair_checks: u32,
    pub(super) pair_collisions: u32,
    pub(super) obstacle_count: u32,
    pub(super) injection_count: u32,
}

impl TickStats {
    pub(crate) fn reset(&mut self) {
        *self = TickStats::default();
    }
}

#[wasm_bindgen]
impl TickStats {
    #[wasm_bindgen(getter)]
    pub fn tick_ms(&self) -> f64 { self.tick_ms }
    #[wasm_bindgen(getter)]
    pub fn points_ms(&self) -> f64 { self.points_ms }
    #[wasm_bindgen(getter)]
    pub fn integrate_ms(&self) -> f64 { self.integrate_ms }
    #[wasm_bindgen(getter)]
    pub fn pairs_ms(&self) -> f64 { self.pairs_ms }
    #[wasm_bindgen(getter)]
    pub fn mask_ms(&self) -> f64 { self.mask_ms }
    #[wasm_bindgen(getter)]
    pub fn feedback_ms(&self) -> f64 { self.feedback_ms }
    #[wasm_bindgen(getter)]
    pub fn point_count(&self) -> u32 { self.point_count }
    #[wasm_bindgen(getter)]
    pub fn point_collisions(&self) -> u32 { self.point_collisions }
    #[wasm_bindgen(getter)]
    pub fn pair_checks(&self) -> u32 { self.pair_checks }
    #[wasm_bindgen(getter)]
    pub fn pair_collisions(&self) -> u32 { self.pair_collisions }
    #[wasm_bindgen(getter)]
    pub fn obstacle_count(&self) -> u32 { self.obstacle_count }
    #[wasm_bindgen(getter)]
    pub fn injection_count(&self) -> u32 { self.injection_count }
}
