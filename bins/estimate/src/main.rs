use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};
use quantum::{energy::exact_ansatz_energy, HamiltonianCoefficients};
use tracing::info;
use tracing_subscriber::EnvFilter;
use vqe::{estimate, estimate_parallel, theta_scan, write_csv, EstimatorConfig};

/// Two-qubit VQE energy estimator (OND-RNG)
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// single | parallel | scan
    #[arg(long, value_enum, default_value_t = Mode::Single)]
    mode: Mode,

    /// Ansatz angle in radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    theta: f64,

    /// Sampling iterations per estimate
    #[arg(long, default_value_t = 50)]
    iterations: usize,

    /// Six comma-separated weights: const,z0,z1,z0z1,x0x1,y0y1
    #[arg(long, allow_hyphen_values = true)]
    coefficients: Option<String>,

    /// RNG seed (full reproducibility)
    #[arg(long, default_value = "default-seed")]
    seed: String,

    /// Independent registers sampling in parallel
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// Number of Rayon worker threads (0 = Rayon default)
    #[arg(long, default_value_t = 0)]
    threads: usize,

    /// Number of theta steps in scan mode
    #[arg(long, default_value_t = 24)]
    theta_steps: usize,

    /// Output CSV path for scan mode
    #[arg(long, default_value = "theta_scan.csv")]
    out: String,

    /// Debug-level logging
    #[arg(long, short)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Mode {
    Single,
    Parallel,
    Scan,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    if args.threads > 0 {
        rayon::ThreadPoolBuilder::new()
            .num_threads(args.threads)
            .build_global()
            .context("failed to build Rayon thread pool")?;
    }

    let coefficients = match &args.coefficients {
        Some(list) => parse_coefficients(list)?,
        None => HamiltonianCoefficients::h2_minimal().as_array().to_vec(),
    };
    let config = EstimatorConfig {
        theta: args.theta,
        iterations: args.iterations,
        coefficients,
        seed: args.seed.clone(),
        workers: args.workers,
    };
    let h = config.validate()?;
    info!(%h, "hamiltonian");

    match args.mode {
        Mode::Single | Mode::Parallel => {
            let stats = match args.mode {
                Mode::Parallel => estimate_parallel(&config)?,
                _ => estimate(&config)?,
            };
            let exact = exact_ansatz_energy(config.theta, &h)?;
            info!(
                theta = config.theta,
                iterations = stats.iterations,
                workers = config.workers,
                "E = {:.6} ± {:.6} (exact {:.6})",
                stats.mean,
                stats.std_error,
                exact
            );
        }
        Mode::Scan => {
            let scan = theta_scan(&config, args.theta_steps)?;
            write_csv(&args.out, &scan.points)?;
            let best = scan.best_point();
            info!(
                out = %args.out,
                "scan: min E = {:.6} at theta = {:.3} rad (exact {:.6})",
                best.sampled,
                best.theta,
                best.exact
            );
        }
    }

    Ok(())
}

fn parse_coefficients(input: &str) -> Result<Vec<f64>> {
    let values = input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<f64>()
                .with_context(|| format!("invalid coefficient '{}'", t))
        })
        .collect::<Result<Vec<_>>>()?;
    if values.is_empty() {
        bail!("--coefficients must list six values");
    }
    Ok(values)
}
