use clap::*;

use fiberscat::core::fiber::*;

/// Sweeps the longitudinal scattering function over the exitant polar angle
/// for a fixed set of incidence angles and prints one CSV row per incidence
/// angle, suitable for piping into a plotting tool.
#[derive(Debug, Parser)]
#[clap(author, about, version)]
struct CommandOptions {
    /// Longitudinal lobe width in degrees.
    #[arg(short, long, default_value_t = 8.1)]
    pub beta: Float,

    /// Number of theta_r samples over [0, pi/2].
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

    let beta = radians(opts.beta);
    let theta_i_list: [Float; 5] = [-1.0, -1.1, -1.2, -1.3, -1.4];
    let delta = PI_OVER_2 / opts.samples as Float;

    for &theta_i in theta_i_list.iter() {
        let row: Vec<String> = (0..=opts.samples)
            .map(|i| {
                let theta_r = delta * i as Float;
                format!("{:.6}", longitudinal(beta, theta_i, theta_r))
            })
            .collect();
        println!("{}", row.join(","));
    }
}
