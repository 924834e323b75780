use crate::core::base::*;
use std::ops;

const YWEIGHT: [Float; 3] = [0.212671, 0.715160, 0.072169];

#[derive(Debug, PartialEq, Copy, Clone)]
pub struct RGBSpectrum {
    c: [Float; 3],
}

impl RGBSpectrum {
    pub const N_SAMPLES: usize = 3;

    #[inline]
    pub fn new(r: Float, g: Float, b: Float) -> Self {
        RGBSpectrum { c: [r, g, b] }
    }

    #[inline]
    pub fn zero() -> Self {
        RGBSpectrum { c: [0.0, 0.0, 0.0] }
    }

    #[inline]
    pub fn one() -> Self {
        RGBSpectrum { c: [1.0, 1.0, 1.0] }
    }

    pub fn clamp(&self, low: Float, hi: Float) -> Self {
        let c = &self.c;
        let mut r: [Float; 3] = [0.0; 3];
        for i in 0..c.len() {
            r[i] = Float::clamp(c[i], low, hi);
        }
        return RGBSpectrum::from(r);
    }

    pub fn clamp_zero(&self) -> Self {
        return self.clamp(0.0, Float::INFINITY);
    }

    pub fn y(&self) -> Float {
        let c = &self.c;
        return YWEIGHT[0] * c[0] + YWEIGHT[1] * c[1] + YWEIGHT[2] * c[2];
    }

    pub fn to_rgb(&self) -> [Float; 3] {
        let c = &self.c;
        return *c;
    }

    pub fn is_black(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|&v| v == 0.0);
    }

    pub fn is_valid(&self) -> bool {
        let c = &self.c;
        return c.iter().all(|&v| v.is_finite());
    }

    #[inline]
    pub fn len(&self) -> usize {
        return self.c.len();
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        return false;
    }
}

impl ops::Index<usize> for RGBSpectrum {
    type Output = Float;

    fn index(&self, i: usize) -> &Self::Output {
        return &self.c[i];
    }
}

impl ops::IndexMut<usize> for RGBSpectrum {
    fn index_mut(&mut self, i: usize) -> &mut Self::Output {
        return &mut self.c[i];
    }
}

impl ops::Mul<Float> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn mul(self, s: Float) -> RGBSpectrum {
        RGBSpectrum::new(self.c[0] * s, self.c[1] * s, self.c[2] * s)
    }
}

impl ops::Mul<RGBSpectrum> for Float {
    type Output = RGBSpectrum;

    fn mul(self, rhs: RGBSpectrum) -> RGBSpectrum {
        rhs * self
    }
}

impl ops::Mul<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn mul(self, s: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum::new(self.c[0] * s.c[0], self.c[1] * s.c[1], self.c[2] * s.c[2])
    }
}

impl ops::Add<RGBSpectrum> for RGBSpectrum {
    type Output = RGBSpectrum;

    fn add(self, s: RGBSpectrum) -> RGBSpectrum {
        RGBSpectrum::new(self.c[0] + s.c[0], self.c[1] + s.c[1], self.c[2] + s.c[2])
    }
}

impl ops::AddAssign<RGBSpectrum> for RGBSpectrum {
    fn add_assign(&mut self, s: RGBSpectrum) {
        for i in 0..self.c.len() {
            self.c[i] += s.c[i];
        }
    }
}

impl ops::MulAssign<Float> for RGBSpectrum {
    fn mul_assign(&mut self, s: Float) {
        for i in 0..self.c.len() {
            self.c[i] *= s;
        }
    }
}

impl Default for RGBSpectrum {
    #[inline]
    fn default() -> Self {
        return RGBSpectrum::zero();
    }
}

impl From<Float> for RGBSpectrum {
    #[inline]
    fn from(value: Float) -> Self {
        RGBSpectrum {
            c: [value, value, value],
        }
    }
}

impl From<[Float; 3]> for RGBSpectrum {
    #[inline]
    fn from(value: [Float; 3]) -> Self {
        RGBSpectrum { c: value }
    }
}

impl From<(Float, Float, Float)> for RGBSpectrum {
    #[inline]
    fn from(value: (Float, Float, Float)) -> Self {
        RGBSpectrum {
            c: [value.0, value.1, value.2],
        }
    }
}
