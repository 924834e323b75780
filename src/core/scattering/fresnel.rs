use crate::core::base::*;

/// Unpolarized Fresnel reflectance for relative index `eta` at angle `x`,
/// using the Schlick approximation rather than the exact equations.
#[inline]
pub fn fresnel(eta: Float, x: Float) -> Float {
    let r0 = sqr((1.0 - eta) / (1.0 + eta));
    return r0 + (1.0 - r0) * Float::powi(1.0 - Float::cos(x), 5);
}

/// Fraction of radiance surviving one internal traversal of the fiber
/// cross-section at refraction angle `gamma_t`. Equals 1 when `mu_a` is 0.
/// `cos(gamma_t)` != 0 is a precondition.
#[inline]
pub fn transmittance(mu_a: Float, gamma_t: Float) -> Float {
    let cos_gamma_t = Float::cos(gamma_t);
    let mu_a_prime = mu_a / cos_gamma_t;
    return Float::exp(-2.0 * mu_a_prime * (1.0 + Float::cos(2.0 * gamma_t)));
}
