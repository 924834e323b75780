pub mod base;
pub mod error;
pub mod fiber;
pub mod geometry;
pub mod imageio;
pub mod misc;
pub mod scattering;
pub mod spectrum;
