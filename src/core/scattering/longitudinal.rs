use crate::core::base::*;

#[inline]
fn i0(x: Float) -> Float {
    // I0(x) \approx Sum_i x^(2i) / (4^i (i!)^2)
    let mut val = 0.0;
    let mut x2i = 1.0;
    let mut ifact: i64 = 1;
    let mut i4: i64 = 1;
    for i in 0..10 {
        if i > 1 {
            ifact *= i;
        }
        val += x2i / (i4 as Float * sqr(ifact as Float));
        x2i *= x * x;
        i4 *= 4;
    }
    return val;
}

#[inline]
fn log_i0(x: Float) -> Float {
    if x > 12.0 {
        return x + 0.5 * (-Float::ln(TWO_PI) + Float::ln(1.0 / x) + 1.0 / (8.0 * x));
    } else {
        return Float::ln(i0(x));
    }
}

/// Longitudinal scattering density over the polar angles, with lobe width
/// `beta` (radians, > 0):
///
///   M = exp(sin(-theta_i) sin(theta_r) / v) I0(cos(-theta_i) cos(theta_r) / v)
///       / (sinh(1/v) 2v),  v = beta^2
///
/// sinh(1/v) and I0 both overflow long before `beta` becomes small, so for
/// v <= 0.1 the whole product is evaluated in log space with an asymptotic
/// log I0.
#[inline]
pub fn longitudinal(beta: Float, theta_i: Float, theta_r: Float) -> Float {
    let v = beta * beta;

    let a = Float::cos(-theta_i) * Float::cos(theta_r) / v;
    let b = Float::sin(-theta_i) * Float::sin(theta_r) / v;

    let m = if v <= 0.1 {
        Float::exp(log_i0(a) + b - 1.0 / v + LN_2 + Float::ln(1.0 / (2.0 * v)))
    } else {
        Float::exp(b) * i0(a) / (Float::sinh(1.0 / v) * 2.0 * v)
    };

    return Float::max(m, 0.0);
}
