use num_complex::Complex64;

pub type C64 = Complex64;

/// Single-qubit unitary, row-major.
pub type Matrix2 = [[C64; 2]; 2];

pub fn pauli_x() -> Matrix2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [[z, o], [o, z]]
}

pub fn pauli_y() -> Matrix2 {
    let z = C64::new(0.0, 0.0);
    let i = C64::new(0.0, 1.0);
    let ni = C64::new(0.0, -1.0);
    [[z, ni], [i, z]]
}

pub fn pauli_z() -> Matrix2 {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    let m = C64::new(-1.0, 0.0);
    [[o, z], [z, m]]
}

pub fn rx(theta: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(0.0, -s)],
        [C64::new(0.0, -s), C64::new(c, 0.0)],
    ]
}

pub fn ry(theta: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    [
        [C64::new(c, 0.0), C64::new(-s, 0.0)],
        [C64::new(s, 0.0), C64::new(c, 0.0)],
    ]
}

/// diag(e^{-iθ/2}, e^{iθ/2})
pub fn rz(theta: f64) -> Matrix2 {
    let c = (theta / 2.0).cos();
    let s = (theta / 2.0).sin();
    let z = C64::new(0.0, 0.0);
    [[C64::new(c, -s), z], [z, C64::new(c, s)]]
}

/// Dense CNOT with qubit 1 as control and qubit 0 as target, in the
/// register's index order (index = 2·q1 + q0): |2>→|3>, |3>→|2>.
pub fn cnot() -> [[C64; 4]; 4] {
    let z = C64::new(0.0, 0.0);
    let o = C64::new(1.0, 0.0);
    [
        [o, z, z, z],
        [z, o, z, z],
        [z, z, z, o],
        [z, z, o, z],
    ]
}

/// The fixed gate set of the two-qubit register. Angles are in radians.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gate {
    BitFlip,
    RotateX(f64),
    RotateY(f64),
    RotateZ(f64),
    /// Acts on `[control, target]`.
    ControlledBitFlip,
}

impl Gate {
    pub fn name(&self) -> &'static str {
        match self {
            Gate::BitFlip => "X",
            Gate::RotateX(_) => "RX",
            Gate::RotateY(_) => "RY",
            Gate::RotateZ(_) => "RZ",
            Gate::ControlledBitFlip => "CNOT",
        }
    }

    /// Number of qubit indices the gate expects.
    pub fn arity(&self) -> usize {
        match self {
            Gate::ControlledBitFlip => 2,
            _ => 1,
        }
    }

    /// 2×2 matrix of a single-qubit gate; `None` for the controlled gate.
    pub fn matrix(&self) -> Option<Matrix2> {
        match *self {
            Gate::BitFlip => Some(pauli_x()),
            Gate::RotateX(theta) => Some(rx(theta)),
            Gate::RotateY(theta) => Some(ry(theta)),
            Gate::RotateZ(theta) => Some(rz(theta)),
            Gate::ControlledBitFlip => None,
        }
    }

    pub fn inverse(&self) -> Gate {
        match *self {
            Gate::RotateX(theta) => Gate::RotateX(-theta),
            Gate::RotateY(theta) => Gate::RotateY(-theta),
            Gate::RotateZ(theta) => Gate::RotateZ(-theta),
            g => g,
        }
    }
}
