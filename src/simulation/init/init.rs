use crate::bridge::feedback::InjectionBuffer;
use crate::bridge::mask::ObstacleMask;
use crate::systems::registry::ObstacleRegistry;

use super::config::ObstacleConfig;
use super::mailbox::PointMailbox;
use super::perf_stats::TickStats;
use super::SimulationCore;

pub(super) fn create_simulation_core(width: u32, height: u32) -> SimulationCore {
    SimulationCore {
        registry: ObstacleRegistry::new(),
        mask: ObstacleMask::new(width, height),
        mailbox: PointMailbox::new(),
        config: ObstacleConfig::default(),
        injections: InjectionBuffer::new(),
        injection_transfer: Vec::new(),
        obstacle_transfer: Vec::new(),
        frame: 0,
        rng_state: 12345,
        perf_enabled: false,
        perf_stats: TickStats::default(),
    }
}
