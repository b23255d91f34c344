//! Energy over a grid of ansatz angles.
//!
//! A scan only evaluates; choosing the next θ is left to whatever drives it.

use crate::config::EstimatorConfig;
use crate::error::{VqeError, VqeResult};
use crate::output::CsvRow;
use crate::parallel::estimate;
use quantum::energy::exact_ansatz_energy;
use std::f64::consts::PI;
use std::io::{self, Write};
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScanPoint {
    pub theta: f64,
    pub sampled: f64,
    pub std_error: f64,
    pub exact: f64,
}

impl CsvRow for ScanPoint {
    const HEADER: &'static str = "theta,sampled,std_error,exact";

    fn write_record<W: Write>(&self, w: &mut W) -> io::Result<()> {
        writeln!(w, "{},{},{},{}", self.theta, self.sampled, self.std_error, self.exact)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ThetaScan {
    pub points: Vec<ScanPoint>,
    /// Index of the lowest sampled energy.
    pub best: usize,
}

impl ThetaScan {
    pub fn best_point(&self) -> &ScanPoint {
        &self.points[self.best]
    }
}

/// Evaluates `steps + 1` evenly spaced angles in [0, 2π]. The θ in `config`
/// is ignored; point `i` samples with seed `"{seed}-scan-{i}"`.
pub fn theta_scan(config: &EstimatorConfig, steps: usize) -> VqeResult<ThetaScan> {
    if steps == 0 {
        return Err(VqeError::InvalidSteps);
    }
    let h = config.validate()?;

    let mut points = Vec::with_capacity(steps + 1);
    let mut best = 0;

    for i in 0..=steps {
        let theta = 2.0 * PI * (i as f64) / (steps as f64);
        let point_config = config
            .clone()
            .with_theta(theta)
            .with_seed(format!("{}-scan-{}", config.seed, i));

        let stats = estimate(&point_config)?;
        let exact = exact_ansatz_energy(theta, &h)?;
        debug!(step = i, theta, sampled = stats.mean, exact, "scan point");

        points.push(ScanPoint {
            theta,
            sampled: stats.mean,
            std_error: stats.std_error,
            exact,
        });
        if stats.mean < points[best].sampled {
            best = i;
        }
    }

    Ok(ThetaScan { points, best })
}
