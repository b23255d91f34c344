mod common;

use common::{closed_form_energy, h2};
use quantum::{
    ansatz::prepare,
    estimator::{estimate_energy_traced, sample_iteration},
    estimate_energy, estimate_energy_stats, HamiltonianCoefficients, QuantumError, StateVector,
};
use rng::ONDRng;
use std::f64::consts::FRAC_PI_2;

#[test]
fn fixed_seed_is_bit_reproducible() {
    let c = h2();
    let (s1, t1) = estimate_energy_traced(0.3, 40, &c, &mut ONDRng::new(b"repro")).unwrap();
    let (s2, t2) = estimate_energy_traced(0.3, 40, &c, &mut ONDRng::new(b"repro")).unwrap();

    assert_eq!(t1, t2);
    assert_eq!(s1.mean.to_bits(), s2.mean.to_bits());

    let e = estimate_energy(0.3, 40, &c, &mut ONDRng::new(b"repro")).unwrap();
    assert_eq!(e.to_bits(), s1.mean.to_bits());
}

#[test]
fn single_iteration_is_the_sampled_sum() {
    let c = h2();
    let h = HamiltonianCoefficients::from_slice(&c).unwrap();
    let (stats, samples) = estimate_energy_traced(0.7, 1, &c, &mut ONDRng::new(b"one")).unwrap();

    assert_eq!(samples.len(), 1);
    assert_eq!(stats.iterations, 1);
    assert_eq!(stats.mean, samples[0].energy(&h));
    assert_eq!(stats.std_error, 0.0);
}

#[test]
fn rejects_zero_iterations() {
    let err = estimate_energy(0.0, 0, &h2(), &mut ONDRng::new(b"x"));
    assert_eq!(err, Err(QuantumError::InvalidIterations(0)));
}

#[test]
fn rejects_wrong_coefficient_count() {
    let mut rng = ONDRng::new(b"x");
    let err = estimate_energy(0.0, 10, &[0.1, 0.2, 0.3, 0.4, 0.5], &mut rng);
    assert_eq!(
        err,
        Err(QuantumError::InvalidCoefficientCount { expected: 6, actual: 5 })
    );
    // validation happens before any draw
    assert_eq!(rng.steps(), 0);
}

#[test]
fn zero_angle_z_outcomes_are_deterministic() {
    let (_, samples) = estimate_energy_traced(0.0, 30, &h2(), &mut ONDRng::new(b"z")).unwrap();
    for s in samples {
        // |q0=1, q1=0>
        assert_eq!(s.z, [1, 0]);
    }
}

#[test]
fn quarter_turn_pair_products_are_fixed() {
    let (_, samples) =
        estimate_energy_traced(FRAC_PI_2, 30, &h2(), &mut ONDRng::new(b"quarter")).unwrap();
    for s in samples {
        // <X0X1> = <Y0Y1> = -1: the two outcomes always differ
        assert_ne!(s.x[0], s.x[1]);
        assert_ne!(s.y[0], s.y[1]);
    }
}

#[test]
fn h2_scenario_within_sampling_tolerance() {
    let c = h2();
    let h = HamiltonianCoefficients::from_slice(&c).unwrap();
    let exact = closed_form_energy(0.0, &h);

    let e = estimate_energy(0.0, 50, &c, &mut ONDRng::new(b"h2-scenario")).unwrap();

    // only the x0x1 and y0y1 terms fluctuate at theta = 0
    let sigma = (h.x0x1.powi(2) + h.y0y1.powi(2)).sqrt();
    let tol = 5.0 * sigma / 50f64.sqrt();
    assert!(e.is_finite());
    assert!((e - h.constant).abs() <= h.sampled_magnitude());
    assert!((e - exact).abs() < tol, "E = {}, exact = {}, tol = {}", e, exact, tol);
}

#[test]
fn converges_with_inverse_sqrt_error() {
    let c = h2();
    let h = HamiltonianCoefficients::from_slice(&c).unwrap();

    for &theta in &[0.0, 0.6] {
        let exact = closed_form_energy(theta, &h);
        let small = estimate_energy_stats(theta, 400, &c, &mut ONDRng::new(b"conv-small")).unwrap();
        let large = estimate_energy_stats(theta, 1600, &c, &mut ONDRng::new(b"conv-large")).unwrap();

        let ratio = small.std_error / large.std_error;
        assert!((1.6..2.5).contains(&ratio), "theta = {}, ratio = {}", theta, ratio);

        assert!(
            (large.mean - exact).abs() < 5.0 * large.std_error,
            "theta = {}, mean = {}, exact = {}, se = {}",
            theta,
            large.mean,
            exact,
            large.std_error
        );
    }
}

#[test]
fn swapping_pair_coefficients_changes_energies() {
    let c = vec![0.1, 0.2, -0.3, 0.4, 0.35, -0.15];
    let h = HamiltonianCoefficients::from_slice(&c).unwrap();
    let swapped = h.swapped_xy();

    let (stats, samples) = estimate_energy_traced(0.0, 50, &c, &mut ONDRng::new(b"swap")).unwrap();
    let (swapped_stats, swapped_samples) =
        estimate_energy_traced(0.0, 50, &swapped.as_array(), &mut ONDRng::new(b"swap")).unwrap();

    // coefficients never influence the draws
    assert_eq!(samples, swapped_samples);

    let mut differing = 0;
    let mut pair_gap = 0.0;
    for s in &samples {
        let xx = s.spins(quantum::Basis::X).iter().product::<f64>();
        let yy = s.spins(quantum::Basis::Y).iter().product::<f64>();
        let delta = s.energy(&h) - s.energy(&swapped);
        pair_gap += xx - yy;
        if xx == yy {
            assert!(delta.abs() < 1e-12);
        } else {
            differing += 1;
            assert!((delta.abs() - 2.0 * (h.x0x1 - h.y0y1).abs()).abs() < 1e-12);
        }
    }

    assert!(differing > 0, "x0x1 and y0y1 coincided in every iteration");
    let expected_gap = (h.x0x1 - h.y0y1) * pair_gap / samples.len() as f64;
    assert!((stats.mean - swapped_stats.mean - expected_gap).abs() < 1e-12);
}

#[test]
fn iteration_leaves_register_in_zero_state() {
    let mut psi = StateVector::new_zero();
    let mut rng = ONDRng::new(b"iter");
    for _ in 0..10 {
        sample_iteration(&mut psi, 1.1, &mut rng).unwrap();
        assert!(psi.is_zero_state());
    }
}

#[test]
#[should_panic(expected = "requires |00>")]
fn preparing_a_dirty_register_is_fatal() {
    let mut psi = StateVector::new_zero();
    prepare(&mut psi, 0.2).unwrap();
    prepare(&mut psi, 0.2).unwrap();
}
