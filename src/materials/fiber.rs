use crate::core::fiber::*;

pub const PATH_R: usize = 0;
pub const PATH_TT: usize = 1;
pub const PATH_TRT: usize = 2;
pub const PATH_TRRT: usize = 3;
pub const N_PATHS: usize = 4;

/// User-facing weight and width of one scattering path.
#[derive(Debug, Copy, Clone)]
pub struct ScatteringLobe {
    pub weight: Float,
    /// Lobe width in radians.
    pub beta: Float,
}

impl ScatteringLobe {
    pub fn new(weight: Float, beta: Float) -> Self {
        ScatteringLobe { weight, beta }
    }

    /// Widths are exposed to users in degrees; the model works in radians.
    pub fn from_degrees(weight: Float, beta_deg: Float) -> Self {
        ScatteringLobe {
            weight,
            beta: radians(beta_deg),
        }
    }
}

/// Exitant-side fiber frame shared by every light sample at a shading point:
/// tangent t, azimuth axes x = t x v and y = x x t, and the view angles.
#[derive(Debug, Copy, Clone)]
pub struct FiberFrame {
    pub v: Vector3f,
    pub t: Vector3f,
    pub x: Vector3f,
    pub y: Vector3f,
    pub theta_r: Float,
    pub phi_r: Float,
}

impl FiberFrame {
    pub fn new(view: &Vector3f, tangent: &Vector3f) -> Self {
        let v = view.normalize();
        let t = tangent.normalize();
        let x = Vector3f::cross(&t, &v).normalize();
        let y = Vector3f::cross(&x, &t).normalize();
        let theta_r = PI_OVER_2 - safe_acos(v.dot(&t));
        let phi_r = Float::atan2(v.dot(&x), v.dot(&y));
        FiberFrame {
            v,
            t,
            x,
            y,
            theta_r,
            phi_r,
        }
    }
}

/// Evaluates the four-path fiber scattering model (R, TT, TRT, TRRT) for
/// explicit light directions. Stateless apart from its parameters; safe to
/// share across renderer worker threads.
pub struct FiberShader {
    mu_a: Spectrum,
    eta: Float,
    lobes: [ScatteringLobe; N_PATHS],
}

impl FiberShader {
    pub fn new(mu_a: &Spectrum, eta: Float, lobes: [ScatteringLobe; N_PATHS]) -> Self {
        assert!(eta > 0.0);
        for lobe in &lobes {
            assert!(lobe.beta > 0.0);
        }
        FiberShader {
            mu_a: mu_a.clamp_zero(),
            eta,
            lobes,
        }
    }

    /// Scattering response for one light sample; the light's radiance and any
    /// visibility term are the caller's business.
    pub fn eval(&self, frame: &FiberFrame, light: &Vector3f) -> Spectrum {
        let l = light.normalize();
        let theta_i = PI_OVER_2 - safe_acos(l.dot(&frame.t));
        let phi_i = Float::atan2(l.dot(&frame.x), l.dot(&frame.y));

        let theta_d = (frame.theta_r - theta_i) * 0.5;
        let phi = wrap_angle(frame.phi_r - phi_i);
        let etap = eta_prime(self.eta, theta_d);

        let mut out = Spectrum::zero();
        for p in 0..N_PATHS {
            let lobe = self.lobes[p];
            if lobe.weight <= 0.0 {
                continue;
            }
            // The surface path measures the detector against the full angle
            // between the directions; transmitted paths use theta_d.
            let angle = if p == PATH_R {
                frame.v.dot(&l)
            } else {
                theta_d
            };
            let m = longitudinal(lobe.beta, theta_i, frame.theta_r);
            let n = azimuthal_rgb(p, lobe.beta, phi, self.eta, etap, angle, &self.mu_a);
            out += n * (m * lobe.weight);
        }
        return out;
    }

    /// Accumulates `eval` over a batch of (direction, radiance) light samples.
    pub fn shade(&self, frame: &FiberFrame, lights: &[(Vector3f, Spectrum)]) -> Spectrum {
        let mut out = Spectrum::zero();
        for (dir, li) in lights {
            out += *li * self.eval(frame, dir);
        }
        return out;
    }
}

impl Default for FiberShader {
    fn default() -> Self {
        FiberShader::new(
            &Spectrum::new(0.1, 0.2, 0.8),
            1.55,
            [ScatteringLobe::from_degrees(0.0, 8.0); N_PATHS],
        )
    }
}
