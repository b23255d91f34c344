//! Two-qubit state vector.
//!
//! Amplitudes are indexed by `2·q1 + q0`: bit 0 is qubit 0, bit 1 is qubit 1.

use crate::error::{QuantumError, QuantumResult};
use crate::gates::{Gate, Matrix2, C64};

pub const NUM_QUBITS: usize = 2;
pub const DIM: usize = 1 << NUM_QUBITS;

/// Allowed drift of ‖ψ‖² away from 1 after any mutation.
pub const NORM_TOLERANCE: f64 = 1e-9;

#[derive(Clone, Debug, PartialEq)]
pub struct StateVector {
    amplitudes: [C64; DIM],
}

impl StateVector {
    /// |00>
    pub fn new_zero() -> Self {
        let mut amplitudes = [C64::new(0.0, 0.0); DIM];
        amplitudes[0] = C64::new(1.0, 0.0);
        Self { amplitudes }
    }

    pub fn reset(&mut self) {
        self.amplitudes = [C64::new(0.0, 0.0); DIM];
        self.amplitudes[0] = C64::new(1.0, 0.0);
    }

    pub fn amplitudes(&self) -> &[C64; DIM] {
        &self.amplitudes
    }

    /// Panics if `index >= DIM`.
    pub fn amplitude(&self, index: usize) -> C64 {
        self.amplitudes[index]
    }

    /// Born-rule probability of the basis state `index`.
    pub fn probability(&self, index: usize) -> f64 {
        self.amplitudes[index].norm_sqr()
    }

    pub fn norm_sqr(&self) -> f64 {
        self.amplitudes.iter().map(|a| a.norm_sqr()).sum()
    }

    /// Marginal probability that qubit `k` reads 0 in the computational basis.
    pub fn prob_zero(&self, k: usize) -> QuantumResult<f64> {
        let mask = 1 << check_qubit(k)?;
        Ok(self
            .amplitudes
            .iter()
            .enumerate()
            .filter(|(i, _)| i & mask == 0)
            .map(|(_, a)| a.norm_sqr())
            .sum())
    }

    /// True when the register is |00> up to a global phase.
    pub fn is_zero_state(&self) -> bool {
        (self.probability(0) - 1.0).abs() <= NORM_TOLERANCE
    }

    /// Applies `gate` to the named qubits: `[k]` for single-qubit gates,
    /// `[control, target]` for the controlled bit-flip.
    pub fn apply(&mut self, gate: Gate, qubits: &[usize]) -> QuantumResult<()> {
        if qubits.len() != gate.arity() {
            return Err(QuantumError::WrongArity {
                gate: gate.name(),
                expected: gate.arity(),
                actual: qubits.len(),
            });
        }

        match gate.matrix() {
            Some(u) => self.apply_1q(qubits[0], u),
            None => self.apply_cnot(qubits[0], qubits[1]),
        }
    }

    /// Left-multiplies every amplitude pair that differs only in bit `k` by
    /// `u`. `u` must be unitary; anything else trips the normalization
    /// assertion.
    pub fn apply_1q(&mut self, k: usize, u: Matrix2) -> QuantumResult<()> {
        let mask = 1 << check_qubit(k)?;
        self.apply_on_mask(mask, u);
        self.assert_normalized("single-qubit gate");
        Ok(())
    }

    /// `op0` on qubit 0 and `op1` on qubit 1. Both indices always exist, so
    /// there is nothing to validate.
    pub(crate) fn apply_product(&mut self, op0: Matrix2, op1: Matrix2) {
        self.apply_on_mask(1, op0);
        self.apply_on_mask(2, op1);
        self.assert_normalized("product operator");
    }

    fn apply_on_mask(&mut self, mask: usize, u: Matrix2) {
        for i in 0..DIM {
            if i & mask == 0 {
                let j = i | mask;
                let a = self.amplitudes[i];
                let b = self.amplitudes[j];
                self.amplitudes[i] = u[0][0] * a + u[0][1] * b;
                self.amplitudes[j] = u[1][0] * a + u[1][1] * b;
            }
        }
    }

    /// Swaps the amplitude pairs differing in `target` wherever `control` is 1.
    pub fn apply_cnot(&mut self, control: usize, target: usize) -> QuantumResult<()> {
        let control_mask = 1 << check_qubit(control)?;
        let target_mask = 1 << check_qubit(target)?;
        if control == target {
            return Err(QuantumError::DuplicateQubit(control));
        }

        for i in 0..DIM {
            if i & control_mask != 0 && i & target_mask == 0 {
                self.amplitudes.swap(i, i | target_mask);
            }
        }

        self.assert_normalized("controlled bit-flip");
        Ok(())
    }

    pub(crate) fn amplitudes_mut(&mut self) -> &mut [C64; DIM] {
        &mut self.amplitudes
    }

    /// Fatal check of ‖ψ‖² = 1.
    pub(crate) fn assert_normalized(&self, after: &str) {
        let n = self.norm_sqr();
        assert!(
            (n - 1.0).abs() <= NORM_TOLERANCE,
            "normalization drift after {}: |psi|^2 = {:.15}",
            after,
            n
        );
    }
}

impl Default for StateVector {
    fn default() -> Self {
        Self::new_zero()
    }
}

pub(crate) fn check_qubit(k: usize) -> QuantumResult<usize> {
    if k < NUM_QUBITS {
        Ok(k)
    } else {
        Err(QuantumError::InvalidQubit {
            qubit: k,
            num_qubits: NUM_QUBITS,
        })
    }
}
