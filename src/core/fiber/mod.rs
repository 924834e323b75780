pub use super::base::*;
pub use super::error::*;
pub use super::geometry::*;
pub use super::scattering::*;
pub use super::spectrum::*;
