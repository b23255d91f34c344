use crate::config::EstimatorConfig;
use crate::error::VqeResult;
use quantum::estimator::accumulate;
use quantum::{EnergyAccumulator, EnergyStats, QuantumError};
use rayon::prelude::*;
use rng::ONDRng;
use tracing::debug;

/// Runs the configured estimate. One worker samples sequentially from
/// `ONDRng::new(seed)` and matches `quantum::estimate_energy_stats`
/// bit for bit.
pub fn estimate(config: &EstimatorConfig) -> VqeResult<EnergyStats> {
    if config.workers == 1 {
        let h = config.validate()?;
        let mut rng = ONDRng::new(config.seed.as_bytes());
        let acc = accumulate(config.theta, config.iterations, &h, &mut rng, |_| {})?;
        return finish(acc);
    }
    estimate_parallel(config)
}

/// Splits the iterations into contiguous chunks, one per worker. Every
/// worker owns a register and a stream forked from the seed by its index;
/// partial sums are merged in worker order.
pub fn estimate_parallel(config: &EstimatorConfig) -> VqeResult<EnergyStats> {
    let h = config.validate()?;
    let root = ONDRng::new(config.seed.as_bytes());
    let chunks = chunk_sizes(config.iterations, config.workers);

    debug!(
        theta = config.theta,
        iterations = config.iterations,
        workers = chunks.len(),
        "parallel estimation"
    );

    let partials: Vec<EnergyAccumulator> = chunks
        .into_par_iter()
        .enumerate()
        .map(|(w, n)| {
            let mut rng = root.fork(format!("worker-{}", w).as_bytes());
            accumulate(config.theta, n, &h, &mut rng, |_| {})
        })
        .collect::<Result<_, QuantumError>>()?;

    let total = partials
        .into_iter()
        .fold(EnergyAccumulator::default(), EnergyAccumulator::merge);
    finish(total)
}

/// Near-equal split; never yields an empty chunk.
pub fn chunk_sizes(iterations: usize, workers: usize) -> Vec<usize> {
    let workers = workers.min(iterations).max(1);
    let base = iterations / workers;
    let extra = iterations % workers;
    (0..workers)
        .map(|w| base + usize::from(w < extra))
        .collect()
}

fn finish(acc: EnergyAccumulator) -> VqeResult<EnergyStats> {
    Ok(acc
        .stats()
        .ok_or(QuantumError::InvalidIterations(acc.count))?)
}
