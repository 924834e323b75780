use crate::core::base::*;
use std::ops;

#[derive(Debug, PartialEq, Default, Copy, Clone)]
pub struct Vector3f {
    pub x: Float,
    pub y: Float,
    pub z: Float,
}

impl Vector3f {
    #[inline]
    pub fn new(x: Float, y: Float, z: Float) -> Self {
        Vector3f { x, y, z }
    }

    #[inline]
    pub fn zero() -> Self {
        Vector3f {
            x: 0.0,
            y: 0.0,
            z: 0.0,
        }
    }

    #[inline]
    pub fn dot(&self, rhs: &Self) -> Float {
        return self.x * rhs.x + self.y * rhs.y + self.z * rhs.z;
    }

    #[inline]
    pub fn cross(a: &Self, b: &Self) -> Self {
        Vector3f {
            x: a.y * b.z - a.z * b.y,
            y: a.z * b.x - a.x * b.z,
            z: a.x * b.y - a.y * b.x,
        }
    }

    #[inline]
    pub fn length_squared(&self) -> Float {
        return self.dot(self);
    }

    #[inline]
    pub fn length(&self) -> Float {
        return Float::sqrt(self.length_squared());
    }

    #[inline]
    pub fn normalize(&self) -> Self {
        let l = self.length();
        Vector3f {
            x: self.x / l,
            y: self.y / l,
            z: self.z / l,
        }
    }
}

impl ops::Add<Vector3f> for Vector3f {
    type Output = Vector3f;

    #[inline]
    fn add(self, rhs: Vector3f) -> Vector3f {
        Vector3f::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl ops::Sub<Vector3f> for Vector3f {
    type Output = Vector3f;

    #[inline]
    fn sub(self, rhs: Vector3f) -> Vector3f {
        Vector3f::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

impl ops::Mul<Float> for Vector3f {
    type Output = Vector3f;

    #[inline]
    fn mul(self, s: Float) -> Vector3f {
        Vector3f::new(self.x * s, self.y * s, self.z * s)
    }
}

impl ops::Neg for Vector3f {
    type Output = Vector3f;

    #[inline]
    fn neg(self) -> Vector3f {
        Vector3f::new(-self.x, -self.y, -self.z)
    }
}
