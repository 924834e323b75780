use crate::core::base::*;

/// Reference truncation order for the periodic wrap summation.
pub const DETECTOR_PERIODS: i32 = 32;

/// Zero-mean Gaussian density with standard deviation `beta`, evaluated at `x`.
/// `beta` > 0 is a precondition; `beta` = 0 divides by zero.
#[inline]
pub fn gaussian(beta: Float, x: Float) -> Float {
    return Float::exp(-x * x / (2.0 * beta * beta)) / (SQRT_TWO_PI * beta);
}

/// Wrapped Gaussian detector: the 2*pi-periodic distribution of azimuthal
/// deviation, approximated by summing the base lobe over `k` integer periods
/// each side. Symmetric in `phi` and periodic up to truncation error.
#[inline]
pub fn gaussian_detector(beta: Float, phi: Float, k: i32) -> Float {
    let mut result = 0.0;
    for i in -k..k {
        result += gaussian(beta, phi - TWO_PI * i as Float);
    }
    return result;
}
