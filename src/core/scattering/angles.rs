use crate::core::base::*;

/// Entry angle for a ray hitting the cross-section at projected radius `h`.
#[inline]
pub fn gamma_i(h: Float) -> Float {
    return safe_asin(h);
}

/// Refraction angle inside the fiber for projected radius `h`.
#[inline]
pub fn gamma_t(h: Float, etap: Float) -> Float {
    return safe_asin(h / etap);
}

/// Relative index of refraction corrected for the longitudinal half-angle
/// `theta_d`. Equals `eta` at theta_d = 0 and grows toward grazing; the pole at
/// |theta_d| = pi/2 is a caller-side precondition.
#[inline]
pub fn eta_prime(eta: Float, theta_d: Float) -> Float {
    let sin_theta_d = Float::sin(theta_d);
    let cos_theta_d = Float::cos(theta_d);
    return Float::sqrt(eta * eta - sqr(sin_theta_d)) / cos_theta_d;
}

/// Net azimuthal deviation for a ray undergoing `p` internal bounces.
#[inline]
pub fn azimuthal_offset(p: usize, h: Float, etap: Float) -> Float {
    let pf = p as Float;
    return 2.0 * pf * gamma_t(h, etap) - 2.0 * gamma_i(h) + pf * PI;
}
