use super::angles::*;
use super::attenuation::*;
use super::lobe::*;
use super::quadrature::*;
use crate::core::base::*;
use crate::core::spectrum::*;

/// Azimuthal scattering for path order `p`: integrates attenuation times the
/// wrapped Gaussian detector over the projected radius h in [-1, 1] with the
/// fixed 32-point Gauss-Legendre rule, folded over +h/-h per abscissa.
///
/// One value is accumulated into `result` per absorption channel in `mu_a`;
/// callers must pre-zero `result` (additive semantics). The detector term is
/// evaluated once per (h, sign) pair and shared across channels, so the per
/// channel cost is confined to the attenuation factor.
pub fn azimuthal(
    result: &mut [Float],
    mu_a: &[Float],
    p: usize,
    beta: Float,
    phi: Float,
    eta: Float,
    etap: Float,
    angle: Float,
) {
    assert!(result.len() == mu_a.len());

    for i in 0..QUADRATURE_POINTS {
        let h = GAUSS_LEGENDRE_ABSCISSAS[i];
        // The half tabulated rule is applied twice per abscissa; the factor
        // 0.5 undoes the fold.
        let weight = 0.5 * GAUSS_LEGENDRE_WEIGHTS[i];
        let d_pos = gaussian_detector(beta, phi - azimuthal_offset(p, h, etap), DETECTOR_PERIODS);
        let d_neg = gaussian_detector(beta, phi - azimuthal_offset(p, -h, etap), DETECTOR_PERIODS);
        for j in 0..result.len() {
            result[j] += weight
                * (attenuation(p, h, eta, etap, angle, mu_a[j]) * d_pos
                    + attenuation(p, -h, eta, etap, angle, mu_a[j]) * d_neg);
        }
    }
}

/// Three-channel convenience wrapper over [`azimuthal`].
pub fn azimuthal_rgb(
    p: usize,
    beta: Float,
    phi: Float,
    eta: Float,
    etap: Float,
    angle: Float,
    mu_a: &Spectrum,
) -> Spectrum {
    let mut result = [0.0 as Float; RGBSpectrum::N_SAMPLES];
    azimuthal(&mut result, &mu_a.to_rgb(), p, beta, phi, eta, etap, angle);
    return Spectrum::from(result);
}
