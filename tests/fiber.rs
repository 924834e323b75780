use fiberscat::core::fiber::*;
use fiberscat::materials::*;

fn test_frame() -> FiberFrame {
    // Fiber along z, viewed side-on.
    let view = Vector3f::new(1.0, 0.0, 0.0);
    let tangent = Vector3f::new(0.0, 0.0, 1.0);
    return FiberFrame::new(&view, &tangent);
}

#[test]
fn frame_angles_for_side_view() {
    let frame = test_frame();
    assert!(Float::abs(frame.theta_r) < 1e-6);
    assert!(Float::abs(frame.phi_r) < 1e-6);
    // Frame axes are orthonormal.
    assert!(Float::abs(frame.x.dot(&frame.t)) < 1e-6);
    assert!(Float::abs(frame.x.dot(&frame.y)) < 1e-6);
    assert!(Float::abs(frame.x.length() - 1.0) < 1e-6);
    assert!(Float::abs(frame.y.length() - 1.0) < 1e-6);
}

#[test]
fn zero_weight_shader_is_black() {
    let shader = FiberShader::default();
    let frame = test_frame();
    let light = Vector3f::new(0.3, 0.8, 0.5).normalize();
    assert!(shader.eval(&frame, &light).is_black());
}

#[test]
fn enabled_paths_give_finite_response() {
    let mu_a = Spectrum::new(0.1, 0.2, 0.8);
    let lobes = [
        ScatteringLobe::from_degrees(1.0, 8.0),
        ScatteringLobe::from_degrees(1.0, 8.0),
        ScatteringLobe::from_degrees(1.0, 8.0),
        ScatteringLobe::from_degrees(1.0, 8.0),
    ];
    let shader = FiberShader::new(&mu_a, 1.55, lobes);
    let frame = test_frame();
    for light in [
        Vector3f::new(0.3, 0.8, 0.5),
        Vector3f::new(-0.6, 0.2, 0.1),
        Vector3f::new(0.9, -0.4, -0.2),
    ] {
        let out = shader.eval(&frame, &light.normalize());
        assert!(out.is_valid());
        for i in 0..3 {
            assert!(out[i] >= 0.0, "channel {} = {}", i, out[i]);
        }
    }
}

#[test]
fn single_lobe_matches_core_product() {
    let mu_a = Spectrum::new(0.1, 0.2, 0.8);
    let eta = 1.55;
    let beta = radians(10.0);
    let lobes = [
        ScatteringLobe::new(0.0, beta),
        ScatteringLobe::new(1.0, beta),
        ScatteringLobe::new(0.0, beta),
        ScatteringLobe::new(0.0, beta),
    ];
    let shader = FiberShader::new(&mu_a, eta, lobes);
    let frame = test_frame();
    let light = Vector3f::new(0.3, 0.8, 0.5).normalize();
    let out = shader.eval(&frame, &light);

    // Recompute the TT term by hand from the same geometry.
    let theta_i = PI_OVER_2 - safe_acos(light.dot(&frame.t));
    let phi_i = Float::atan2(light.dot(&frame.x), light.dot(&frame.y));
    let theta_d = (frame.theta_r - theta_i) * 0.5;
    let phi = wrap_angle(frame.phi_r - phi_i);
    let etap = eta_prime(eta, theta_d);
    let m = longitudinal(beta, theta_i, frame.theta_r);
    let n = azimuthal_rgb(PATH_TT, beta, phi, eta, etap, theta_d, &mu_a);
    for i in 0..3 {
        assert!(Float::abs(out[i] - m * n[i]) < 1e-4, "channel {}", i);
    }
}

#[test]
fn shade_accumulates_light_samples() {
    let mu_a = Spectrum::new(0.1, 0.2, 0.8);
    let lobes = [
        ScatteringLobe::from_degrees(1.0, 8.0),
        ScatteringLobe::from_degrees(0.5, 8.0),
        ScatteringLobe::from_degrees(0.25, 16.0),
        ScatteringLobe::from_degrees(0.125, 16.0),
    ];
    let shader = FiberShader::new(&mu_a, 1.55, lobes);
    let frame = test_frame();
    let dir = Vector3f::new(0.3, 0.8, 0.5).normalize();
    let single = shader.eval(&frame, &dir);

    // Two half-radiance samples of the same light equal one full sample.
    let lights = [
        (dir, Spectrum::from(0.5)),
        (dir, Spectrum::from(0.5)),
    ];
    let total = shader.shade(&frame, &lights);
    for i in 0..3 {
        assert!(Float::abs(total[i] - single[i]) < 1e-6, "channel {}", i);
    }
}
