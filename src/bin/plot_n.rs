use clap::*;

use fiberscat::core::fiber::*;

/// Sweeps the azimuthal scattering function over the relative azimuth
/// phi in [-pi, pi] for a single absorption channel and prints one value per
/// line.
#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Path order (0=R, 1=TT, 2=TRT, 3=TRRT).
    #[arg(short, long, default_value_t = 1)]
    pub p: usize,

    /// Azimuthal lobe width in degrees.
    #[arg(short, long, default_value_t = 25.0)]
    pub beta: Float,

    /// Longitudinal half-angle theta_d in radians.
    #[arg(short, long, default_value_t = 0.8)]
    pub theta_d: Float,

    /// Relative index of refraction.
    #[arg(short, long, default_value_t = 1.55)]
    pub eta: Float,

    /// Absorption coefficient of the single channel.
    #[arg(short, long, default_value_t = 0.0)]
    pub mu_a: Float,

    /// Number of phi samples over [-pi, pi].
    #[arg(short, long, default_value_t = 1024)]
    pub samples: usize,
}

fn init_logger() {
    let log_level = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_owned());
    std::env::set_var("RUST_LOG", log_level);
    env_logger::Builder::from_default_env()
        .format_target(false)
        .format_module_path(false)
        .init();
}

fn main() {
    init_logger();
    let opts = CommandOptions::parse();
    assert!(opts.p <= 3);

    let beta = radians(opts.beta);
    let etap = eta_prime(opts.eta, opts.theta_d);
    let delta = TWO_PI / opts.samples as Float;

    for i in 0..=opts.samples {
        let phi = -PI + delta * i as Float;
        let mut result = [0.0 as Float; 1];
        azimuthal(
            &mut result,
            &[opts.mu_a],
            opts.p,
            beta,
            phi,
            opts.eta,
            etap,
            opts.theta_d,
        );
        println!("{:.6}", result[0]);
    }
}
