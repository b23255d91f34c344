use anyhow::{bail, Context, Result};
use clap::Parser;
use quantum::energy::exact_ansatz_energy;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;
use vqe::{convergence_study, write_csv, EstimatorConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Sampled energy error vs iteration count")]
struct Args {
    /// Ansatz angle in radians
    #[arg(long, default_value_t = 0.0, allow_hyphen_values = true)]
    theta: f64,

    /// Comma-separated list of iteration counts
    #[arg(long, default_value = "10,50,250,1250")]
    counts: String,

    /// Independent registers sampling in parallel
    #[arg(long, default_value_t = 1)]
    workers: usize,

    /// RNG seed
    #[arg(long, default_value = "conv-h2")]
    seed: String,

    /// Output CSV path
    #[arg(long, default_value = "convergence_sweep.csv")]
    out: String,

    #[arg(long, short)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    let filter = if args.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();

    let counts = parse_list(&args.counts)?;
    if counts.is_empty() {
        bail!("--counts must contain at least one integer value");
    }

    let config = EstimatorConfig::default()
        .with_theta(args.theta)
        .with_seed(args.seed.clone())
        .with_workers(args.workers);
    let h = config.validate()?;
    let exact = exact_ansatz_energy(config.theta, &h)?;

    let points = convergence_study(&config, &counts)?;
    write_csv(&args.out, &points)?;

    for p in &points {
        info!(
            "N={}  E={:.6}  se={:.3e}  |dE|={:.3e}",
            p.iterations, p.mean, p.std_error, p.abs_error
        );
        if p.abs_error > 5.0 * p.std_error && p.std_error > 0.0 {
            warn!(iterations = p.iterations, "estimate more than 5 standard errors from exact");
        }
    }
    info!(exact, out = %args.out, "done");

    Ok(())
}

fn parse_list(input: &str) -> Result<Vec<usize>> {
    input
        .split(',')
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .map(|t| {
            t.parse::<usize>()
                .with_context(|| format!("invalid iteration count '{}'", t))
        })
        .collect()
}
