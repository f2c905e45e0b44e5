pub mod obstacle;
pub mod points;
