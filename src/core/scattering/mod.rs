pub mod angles;
pub mod attenuation;
pub mod azimuthal;
pub mod fresnel;
pub mod lobe;
pub mod longitudinal;
pub mod quadrature;

pub use angles::*;
pub use attenuation::*;
pub use azimuthal::*;
pub use fresnel::*;
pub use lobe::*;
pub use longitudinal::*;
pub use quadrature::*;
