use quantum::{estimate_energy_stats, HamiltonianCoefficients, QuantumError};
use rng::ONDRng;
use vqe::{estimate, estimate_parallel, EstimatorConfig, VqeError};

fn config() -> EstimatorConfig {
    EstimatorConfig::default()
        .with_theta(0.4)
        .with_iterations(120)
        .with_seed("parallel-test")
}

#[test]
fn single_worker_matches_core_estimator() {
    let cfg = config();
    let stats = estimate(&cfg).unwrap();

    let mut rng = ONDRng::new(cfg.seed.as_bytes());
    let core = estimate_energy_stats(cfg.theta, cfg.iterations, &cfg.coefficients, &mut rng).unwrap();

    assert_eq!(stats.mean.to_bits(), core.mean.to_bits());
    assert_eq!(stats.iterations, 120);
}

#[test]
fn fixed_seed_and_workers_reproduce() {
    let cfg = config().with_workers(4);
    let a = estimate_parallel(&cfg).unwrap();
    let b = estimate_parallel(&cfg).unwrap();
    assert_eq!(a.mean.to_bits(), b.mean.to_bits());
    assert_eq!(a.std_error.to_bits(), b.std_error.to_bits());
}

#[test]
fn uneven_split_counts_every_iteration() {
    let cfg = config().with_iterations(103).with_workers(4);
    let stats = estimate(&cfg).unwrap();
    assert_eq!(stats.iterations, 103);
}

#[test]
fn more_workers_than_iterations() {
    let cfg = config().with_iterations(3).with_workers(16);
    assert_eq!(estimate(&cfg).unwrap().iterations, 3);
}

#[test]
fn zero_angle_parallel_stays_near_exact() {
    let cfg = config().with_theta(0.0).with_iterations(800).with_workers(8);
    let h = HamiltonianCoefficients::h2_minimal();
    // z terms are deterministic at theta = 0
    let exact = h.constant + h.z0 - h.z1 - h.z0z1;

    let stats = estimate(&cfg).unwrap();
    let sigma = (h.x0x1.powi(2) + h.y0y1.powi(2)).sqrt();
    assert!((stats.mean - exact).abs() < 5.0 * sigma / 800f64.sqrt());
}

#[test]
fn rejects_zero_workers_before_sampling() {
    let err = estimate_parallel(&config().with_workers(0));
    assert!(matches!(err, Err(VqeError::InvalidWorkers(0))));
}

#[test]
fn rejects_bad_inputs() {
    let err = estimate(&config().with_theta(f64::NAN).with_workers(2));
    assert!(matches!(err, Err(VqeError::Quantum(QuantumError::NonFiniteAngle(_)))));

    let err = estimate(&config().with_coefficients(vec![0.1, 0.2, 0.3, 0.4, f64::INFINITY, 0.6]));
    assert!(matches!(
        err,
        Err(VqeError::Quantum(QuantumError::NonFiniteCoefficient { index: 4, .. }))
    ));
}
