//! Sampling estimate of the six-term energy.
//!
//! One iteration prepares the ansatz three times, once per basis, because a
//! measurement resets both qubits and X, Y and Z do not commute:
//!
//! ```text
//! Prepare → X(q0) → X(q1) → Prepare → Y(q0) → Y(q1) → Prepare → Z(q0) → Z(q1) → Accumulate
//! ```
//!
//! Iterations are independent: each starts from |00>, so partial
//! accumulators from separate registers and random streams can be merged.

use crate::ansatz::prepare;
use crate::error::{QuantumError, QuantumResult};
use crate::hamiltonian::HamiltonianCoefficients;
use crate::measurement::{measure_and_reset, spin, Basis};
use crate::register::Register;
use crate::state::StateVector;
use rng::UniformSource;
use tracing::{debug, trace};

/// Raw outcomes of one iteration, indexed by qubit.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SpinSample {
    pub x: [u8; 2],
    pub y: [u8; 2],
    pub z: [u8; 2],
}

impl SpinSample {
    pub fn outcomes(&self, basis: Basis) -> [u8; 2] {
        match basis {
            Basis::X => self.x,
            Basis::Y => self.y,
            Basis::Z => self.z,
        }
    }

    pub fn spins(&self, basis: Basis) -> [f64; 2] {
        let [a, b] = self.outcomes(basis);
        [spin(a), spin(b)]
    }

    /// `c0 + c1·z0 + c2·z1 + c3·z0·z1 + c4·x0·x1 + c5·y0·y1`
    pub fn energy(&self, h: &HamiltonianCoefficients) -> f64 {
        let [x0, x1] = self.spins(Basis::X);
        let [y0, y1] = self.spins(Basis::Y);
        let [z0, z1] = self.spins(Basis::Z);

        h.constant
            + h.z0 * z0
            + h.z1 * z1
            + h.z0z1 * z0 * z1
            + h.x0x1 * x0 * x1
            + h.y0y1 * y0 * y1
    }
}

/// Runs one iteration on `psi`, which must hold |00>; leaves it in |00>.
pub fn sample_iteration<R>(psi: &mut StateVector, theta: f64, rng: &mut R) -> QuantumResult<SpinSample>
where
    R: UniformSource + ?Sized,
{
    let mut sample = SpinSample::default();

    for basis in Basis::ALL {
        prepare(psi, theta)?;
        let slot = [
            measure_and_reset(psi, 0, basis, rng)?,
            measure_and_reset(psi, 1, basis, rng)?,
        ];
        match basis {
            Basis::X => sample.x = slot,
            Basis::Y => sample.y = slot,
            Basis::Z => sample.z = slot,
        }
    }

    Ok(sample)
}

/// Running sum of per-iteration energies. Merging is associative and
/// commutative up to floating round-off.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct EnergyAccumulator {
    pub sum: f64,
    pub sum_sq: f64,
    pub count: usize,
}

impl EnergyAccumulator {
    pub fn push(&mut self, energy: f64) {
        self.sum += energy;
        self.sum_sq += energy * energy;
        self.count += 1;
    }

    pub fn merge(mut self, other: EnergyAccumulator) -> Self {
        self.sum += other.sum;
        self.sum_sq += other.sum_sq;
        self.count += other.count;
        self
    }

    pub fn mean(&self) -> Option<f64> {
        (self.count > 0).then(|| self.sum / self.count as f64)
    }

    /// Unbiased sample variance; zero for a single iteration.
    pub fn variance(&self) -> Option<f64> {
        match self.count {
            0 => None,
            1 => Some(0.0),
            n => {
                let n = n as f64;
                let v = (self.sum_sq - self.sum * self.sum / n) / (n - 1.0);
                Some(v.max(0.0))
            }
        }
    }

    pub fn std_error(&self) -> Option<f64> {
        self.variance().map(|v| (v / self.count as f64).sqrt())
    }

    pub fn stats(&self) -> Option<EnergyStats> {
        Some(EnergyStats {
            mean: self.mean()?,
            std_error: self.std_error()?,
            iterations: self.count,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EnergyStats {
    pub mean: f64,
    pub std_error: f64,
    pub iterations: usize,
}

/// Checks every precondition of an estimation run before any simulation.
pub fn validate_inputs(
    theta: f64,
    iterations: usize,
    coefficients: &[f64],
) -> QuantumResult<HamiltonianCoefficients> {
    if iterations < 1 {
        return Err(QuantumError::InvalidIterations(iterations));
    }
    let h = HamiltonianCoefficients::from_slice(coefficients)?;
    if !theta.is_finite() {
        return Err(QuantumError::NonFiniteAngle(theta));
    }
    Ok(h)
}

/// Average weighted sum over `iterations` sampling iterations.
pub fn estimate_energy<R>(
    theta: f64,
    iterations: usize,
    coefficients: &[f64],
    rng: &mut R,
) -> QuantumResult<f64>
where
    R: UniformSource + ?Sized,
{
    Ok(estimate_energy_stats(theta, iterations, coefficients, rng)?.mean)
}

pub fn estimate_energy_stats<R>(
    theta: f64,
    iterations: usize,
    coefficients: &[f64],
    rng: &mut R,
) -> QuantumResult<EnergyStats>
where
    R: UniformSource + ?Sized,
{
    let h = validate_inputs(theta, iterations, coefficients)?;
    let acc = accumulate(theta, iterations, &h, rng, |_| {})?;
    finish(&acc)
}

/// Like `estimate_energy_stats`, also returning every iteration's outcomes.
pub fn estimate_energy_traced<R>(
    theta: f64,
    iterations: usize,
    coefficients: &[f64],
    rng: &mut R,
) -> QuantumResult<(EnergyStats, Vec<SpinSample>)>
where
    R: UniformSource + ?Sized,
{
    let h = validate_inputs(theta, iterations, coefficients)?;
    let mut samples = Vec::with_capacity(iterations);
    let acc = accumulate(theta, iterations, &h, rng, |s| samples.push(*s))?;
    Ok((finish(&acc)?, samples))
}

/// Runs `iterations` iterations on one register, feeding each sample to
/// `on_sample`. Inputs are assumed validated; a count of zero yields an
/// empty accumulator.
pub fn accumulate<R, F>(
    theta: f64,
    iterations: usize,
    h: &HamiltonianCoefficients,
    rng: &mut R,
    mut on_sample: F,
) -> QuantumResult<EnergyAccumulator>
where
    R: UniformSource + ?Sized,
    F: FnMut(&SpinSample),
{
    debug!(theta, iterations, "starting energy estimation");

    let mut reg = Register::acquire();
    let mut acc = EnergyAccumulator::default();

    for i in 0..iterations {
        let sample = sample_iteration(&mut reg, theta, rng)?;
        let e = sample.energy(h);
        trace!(iteration = i, energy = e, ?sample, "iteration");
        acc.push(e);
        on_sample(&sample);
    }

    debug!(sum = acc.sum, count = acc.count, "energy estimation finished");
    Ok(acc)
}

fn finish(acc: &EnergyAccumulator) -> QuantumResult<EnergyStats> {
    acc.stats().ok_or(QuantumError::InvalidIterations(acc.count))
}
