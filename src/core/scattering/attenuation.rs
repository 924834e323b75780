use super::angles::*;
use super::fresnel::*;
use crate::core::base::*;

/// Energy attenuation for path order `p` at projected radius `h`.
///
/// For the surface path (p = 0) `angle` is the cosine of the half-angle between
/// the incident and exitant directions and the result is the Fresnel term
/// alone, independent of `h`. For transmitted paths (p >= 1) `angle` is the
/// longitudinal half-angle theta_d, and the result combines the two boundary
/// transmissions, `p - 1` internal reflections, and one absorption traversal.
#[inline]
pub fn attenuation(p: usize, h: Float, eta: Float, etap: Float, angle: Float, mu_a: Float) -> Float {
    if p == 0 {
        return fresnel(eta, 0.5 * safe_acos(angle));
    }
    let f = fresnel(eta, safe_acos(Float::cos(angle) * Float::cos(safe_asin(h))));
    let gamma = gamma_t(h, etap);
    return sqr(1.0 - f) * Float::powi(f, p as i32 - 1) * transmittance(mu_a, gamma);
}
