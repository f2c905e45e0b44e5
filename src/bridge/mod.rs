pub mod feedback;
pub mod mask;
