use super::types::Float;

#[cfg(not(feature = "float-as-double"))]
mod detail {
    use super::Float;

    pub const PI: Float = std::f32::consts::PI; //3.14159265358979323846;
    pub const TWO_PI: Float = std::f32::consts::TAU;
    pub const PI_OVER_2: Float = PI / 2.0; //1.57079632679489661923
    pub const LN_2: Float = std::f32::consts::LN_2;

    pub const SQRT_TWO_PI: Float = 2.50662827463100050242; //sqrt(2 * pi)
}

#[cfg(feature = "float-as-double")]
mod detail {
    use super::Float;

    pub const PI: Float = std::f64::consts::PI; //3.14159265358979323846;
    pub const TWO_PI: Float = std::f64::consts::TAU;
    pub const PI_OVER_2: Float = PI / 2.0; //1.57079632679489661923
    pub const LN_2: Float = std::f64::consts::LN_2;

    pub const SQRT_TWO_PI: Float = 2.50662827463100050242; //sqrt(2 * pi)
}

pub use detail::*;
