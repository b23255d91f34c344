use crate::error::QuantumResult;
use crate::gates::{Gate, C64};
use crate::state::{check_qubit, StateVector, NORM_TOLERANCE};
use rng::UniformSource;
use std::f64::consts::FRAC_PI_2;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Basis {
    X,
    Y,
    Z,
}

impl Basis {
    pub const ALL: [Basis; 3] = [Basis::X, Basis::Y, Basis::Z];

    /// Rotation taking this basis' +1/-1 eigenstates onto |0>/|1>.
    pub fn rotation(self) -> Option<Gate> {
        match self {
            Basis::X => Some(Gate::RotateY(-FRAC_PI_2)),
            Basis::Y => Some(Gate::RotateX(FRAC_PI_2)),
            Basis::Z => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Basis::X => "X",
            Basis::Y => "Y",
            Basis::Z => "Z",
        }
    }

    fn draw_context(self) -> &'static [u8] {
        match self {
            Basis::X => b"MEASURE_X",
            Basis::Y => b"MEASURE_Y",
            Basis::Z => b"MEASURE_Z",
        }
    }
}

/// Classical ±1 value of one outcome: `2·outcome − 1`.
pub fn spin(outcome: u8) -> f64 {
    2.0 * f64::from(outcome) - 1.0
}

/// Projective Z measurement of qubit `k`: samples an outcome by the Born
/// rule, zeroes the inconsistent amplitudes and renormalizes the rest.
/// The qubit is left in |outcome>.
pub fn measure_z<R>(psi: &mut StateVector, k: usize, rng: &mut R) -> QuantumResult<u8>
where
    R: UniformSource + ?Sized,
{
    collapse(psi, k, rng, Basis::Z.draw_context())
}

/// Measures qubit `k` in `basis` and leaves it in |0>.
///
/// The basis rotation maps the measured eigenstate onto |outcome>; flipping
/// an outcome of 1 then resets the qubit. Because the post-measurement qubit
/// is a computational basis state at that point, the reset also closes the
/// rotated frame: the other qubit keeps the amplitudes it collapsed to.
/// The returned value is the outcome before the reset.
pub fn measure_and_reset<R>(
    psi: &mut StateVector,
    k: usize,
    basis: Basis,
    rng: &mut R,
) -> QuantumResult<u8>
where
    R: UniformSource + ?Sized,
{
    check_qubit(k)?;

    if let Some(rotation) = basis.rotation() {
        psi.apply(rotation, &[k])?;
    }

    let outcome = collapse(psi, k, rng, basis.draw_context())?;

    if outcome == 1 {
        psi.apply(Gate::BitFlip, &[k])?;
    }

    Ok(outcome)
}

fn collapse<R>(psi: &mut StateVector, k: usize, rng: &mut R, ctx: &[u8]) -> QuantumResult<u8>
where
    R: UniformSource + ?Sized,
{
    let mask = 1 << check_qubit(k)?;

    let mut w = [0.0f64; 2];
    for (i, a) in psi.amplitudes().iter().enumerate() {
        w[usize::from(i & mask != 0)] += a.norm_sqr();
    }

    let total = w[0] + w[1];
    assert!(
        (total - 1.0).abs() <= NORM_TOLERANCE,
        "measurement of unnormalized state: |psi|^2 = {:.15}",
        total
    );
    let p0 = w[0] / total;
    assert!(
        (-NORM_TOLERANCE..=1.0 + NORM_TOLERANCE).contains(&p0),
        "measurement probability out of range: p(0) = {}",
        p0
    );

    // a zero-weight branch can never be selected: draw < 0 is impossible and
    // draw >= 1 is excluded by the source contract
    let outcome = if rng.next_f64(ctx) < p0 { 0u8 } else { 1u8 };
    let norm = w[usize::from(outcome)].sqrt();

    let amps = psi.amplitudes_mut();
    for (i, a) in amps.iter_mut().enumerate() {
        let bit = u8::from(i & mask != 0);
        *a = if bit == outcome { *a / norm } else { C64::new(0.0, 0.0) };
    }

    psi.assert_normalized("measurement");
    Ok(outcome)
}
