use clap::*;
use log::*;
use rayon::prelude::*;

use fiberscat::core::fiber::*;
use fiberscat::core::imageio::*;
use fiberscat::core::misc::*;

use std::time::Instant;

/// Renders a size x size image of the azimuthal scattering function over
/// (theta_d, phi) for a fixed brown-pigment absorption, one row per theta_d.
#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Path order (0=R, 1=TT, 2=TRT, 3=TRRT).
    #[arg(value_name = "p")]
    pub p: usize,

    /// Azimuthal lobe width in degrees.
    #[arg(value_name = "beta")]
    pub beta: Float,

    /// Relative index of refraction.
    #[arg(value_name = "eta")]
    pub eta: Float,

    /// Output resolution.
    #[arg(value_name = "size")]
    pub size: usize,

    /// Output image path (.hdr keeps full dynamic range).
    #[arg(value_name = "outfile")]
    pub outfile: String,
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
    assert!(opts.size > 0);

    let p = opts.p;
    let eta = opts.eta;
    let beta = radians(opts.beta);
    let size = opts.size;
    let mu_a: [Float; 3] = [0.42, 0.70, 1.37];
    let delta = TWO_PI / size as Float;

    let reporter = ProgressReporter::new(size, "plot-s");
    let start = Instant::now();

    let mut pixels = vec![0.0 as Float; size * size * 3];
    // Rows are independent; each worker owns a disjoint row slice.
    pixels
        .par_chunks_mut(size * 3)
        .enumerate()
        .for_each(|(y, row)| {
            let theta_d = -PI + delta * (y as Float + 0.5);
            let etap = eta_prime(eta, theta_d);
            for x in 0..size {
                let phi = -PI + delta * (x as Float + 0.5);
                let angle = if p == 0 {
                    // For R the detector argument is the cosine of the full
                    // angle between the directions.
                    Float::cos(delta * 0.5 * (x as Float + 0.5))
                } else {
                    theta_d
                };
                let result = &mut row[(3 * x)..(3 * x + 3)];
                azimuthal(result, &mu_a, p, beta, phi, eta, etap, angle);
            }
            reporter.inc(1);
        });
    reporter.done();
    info!(
        "evaluated {}x{} scattering image in {:.3?}",
        size,
        size,
        start.elapsed()
    );

    if let Err(e) = write_image(&opts.outfile, &pixels, size, size) {
        error!("failed to write {}: {}", opts.outfile, e);
        std::process::exit(1);
    }
    info!("wrote {}", opts.outfile);
}
