pub mod vec2;

pub(crate) mod log;
pub(crate) mod random;
