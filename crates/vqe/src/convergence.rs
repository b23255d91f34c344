use crate::config::EstimatorConfig;
use crate::error::{VqeError, VqeResult};
use crate::output::CsvRow;
use crate::parallel::estimate;
use quantum::energy::exact_ansatz_energy;
use std::io::{self, Write};
use tracing::debug;

/// Sampled estimate at one iteration count against the exact energy.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConvergencePoint {
    pub iterations: usize,
    pub mean: f64,
    pub std_error: f64,
    pub abs_error: f64,
}

impl CsvRow for ConvergencePoint {
    const HEADER: &'static str = "iterations,mean,std_error,abs_error";

    fn write_record<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(
            w,
            "{},{},{},{}",
            self.iterations, self.mean, self.std_error, self.abs_error
        )
    }
}

/// Repeats the configured estimate for each entry of `counts`, all from the
/// same seed. The iteration count in `config` is replaced.
pub fn convergence_study(
    config: &EstimatorConfig,
    counts: &[usize],
) -> VqeResult<Vec<ConvergencePoint>> {
    if counts.is_empty() {
        return Err(VqeError::EmptySweep);
    }
    let h = config.validate()?;
    let exact = exact_ansatz_energy(config.theta, &h)?;

    counts
        .iter()
        .map(|&n| {
            let stats = estimate(&config.clone().with_iterations(n))?;
            let abs_error = (stats.mean - exact).abs();
            debug!(iterations = n, mean = stats.mean, abs_error, "convergence point");
            Ok(ConvergencePoint {
                iterations: n,
                mean: stats.mean,
                std_error: stats.std_error,
                abs_error,
            })
        })
        .collect()
}
