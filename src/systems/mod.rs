pub mod collision;
pub mod integrator;
pub mod registry;
