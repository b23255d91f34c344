//! Fixed two-qubit entangling ansatz, parameterized by one angle.
//!
//! Starting from |00> the circuit produces
//! `cos(θ/2)|q0=1,q1=0> − sin(θ/2)|q0=0,q1=1>`.

use crate::error::{QuantumError, QuantumResult};
use crate::gates::Gate;
use crate::state::StateVector;
use std::f64::consts::FRAC_PI_2;

/// Number of gates in the circuit.
pub const ANSATZ_DEPTH: usize = 8;

/// The circuit as `(gate, qubits)` steps, in application order.
pub fn circuit(theta: f64) -> [(Gate, &'static [usize]); ANSATZ_DEPTH] {
    [
        (Gate::BitFlip, &[0]),
        (Gate::RotateX(-FRAC_PI_2), &[0]),
        (Gate::RotateY(FRAC_PI_2), &[1]),
        (Gate::ControlledBitFlip, &[1, 0]),
        (Gate::RotateZ(theta), &[0]),
        (Gate::ControlledBitFlip, &[1, 0]),
        (Gate::RotateX(FRAC_PI_2), &[0]),
        (Gate::RotateY(-FRAC_PI_2), &[1]),
    ]
}

/// Applies the ansatz to `psi`, which must hold |00>.
pub fn prepare(psi: &mut StateVector, theta: f64) -> QuantumResult<()> {
    if !theta.is_finite() {
        return Err(QuantumError::NonFiniteAngle(theta));
    }
    assert!(
        psi.is_zero_state(),
        "ansatz preparation requires |00>, found p(00) = {}",
        psi.probability(0)
    );

    for (gate, qubits) in circuit(theta) {
        psi.apply(gate, qubits)?;
    }
    Ok(())
}

/// Fresh |00> register with the ansatz applied.
pub fn prepared(theta: f64) -> QuantumResult<StateVector> {
    let mut psi = StateVector::new_zero();
    prepare(&mut psi, theta)?;
    Ok(psi)
}
