use super::constants::*;
use super::types::Float;

#[inline]
pub fn sqr(x: Float) -> Float {
    return x * x;
}

#[inline]
pub fn radians(deg: Float) -> Float {
    return deg * (PI / 180.0);
}

#[inline]
pub fn safe_asin(x: Float) -> Float {
    assert!(x >= -1.0001 && x <= 1.0001);
    return Float::asin(Float::clamp(x, -1.0, 1.0));
}

#[inline]
pub fn safe_acos(x: Float) -> Float {
    assert!(x >= -1.0001 && x <= 1.0001);
    return Float::acos(Float::clamp(x, -1.0, 1.0));
}

/// Remaps an angle to (-pi, pi].
#[inline]
pub fn wrap_angle(phi: Float) -> Float {
    let mut phi = phi;
    while phi > PI {
        phi -= TWO_PI;
    }
    while phi <= -PI {
        phi += TWO_PI;
    }
    return phi;
}

#[inline]
pub fn gamma_correct(value: Float) -> Float {
    if value <= 0.0031308 {
        return 12.92 * value;
    } else {
        return 1.055 * Float::powf(value, 1.0 / 2.4) - 0.055;
    }
}
