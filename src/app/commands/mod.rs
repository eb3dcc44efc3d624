pub mod digest;
pub mod render;
