use crate::gates::{pauli_x, pauli_y, pauli_z, Matrix2, C64};
use crate::state::StateVector;

fn identity() -> Matrix2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[o, z], [z, o]]
}

/// ⟨ψ|P0 ⊗ P1|ψ⟩ for single-qubit operators `op0` on qubit 0 and `op1` on
/// qubit 1.
fn expect_product(psi: &StateVector, op0: Matrix2, op1: Matrix2) -> f64 {
    let mut phi = psi.clone();
    phi.apply_product(op0, op1);

    let mut acc = C64::new(0.0, 0.0);
    for (a, b) in psi.amplitudes().iter().zip(phi.amplitudes().iter()) {
        acc += a.conj() * b;
    }
    acc.re
}

/// Expectation value ⟨Z_k⟩. Panics if `k` is not 0 or 1.
pub fn expect_z(psi: &StateVector, k: usize) -> f64 {
    match k {
        0 => expect_product(psi, pauli_z(), identity()),
        1 => expect_product(psi, identity(), pauli_z()),
        _ => panic!("expect_z: qubit {} outside two-qubit register", k),
    }
}

pub fn expect_zz(psi: &StateVector) -> f64 {
    expect_product(psi, pauli_z(), pauli_z())
}

pub fn expect_xx(psi: &StateVector) -> f64 {
    expect_product(psi, pauli_x(), pauli_x())
}

pub fn expect_yy(psi: &StateVector) -> f64 {
    expect_product(psi, pauli_y(), pauli_y())
}
