use crate::ansatz::prepared;
use crate::error::QuantumResult;
use crate::hamiltonian::HamiltonianCoefficients;
use crate::observables::{expect_xx, expect_yy, expect_z, expect_zz};
use crate::state::StateVector;

/// Mean of the sampled weighted sum for state `psi`.
///
/// Outcome 0 marks the +1 eigenstate and carries spin −1, so single-qubit
/// z spins average to −⟨Z⟩ while every two-qubit product keeps its sign.
pub fn exact_energy(psi: &StateVector, h: &HamiltonianCoefficients) -> f64 {
    h.constant - h.z0 * expect_z(psi, 0) - h.z1 * expect_z(psi, 1)
        + h.z0z1 * expect_zz(psi)
        + h.x0x1 * expect_xx(psi)
        + h.y0y1 * expect_yy(psi)
}

/// `exact_energy` of the ansatz state at `theta`.
pub fn exact_ansatz_energy(theta: f64, h: &HamiltonianCoefficients) -> QuantumResult<f64> {
    Ok(exact_energy(&prepared(theta)?, h))
}
