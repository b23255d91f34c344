#![allow(dead_code)]

use quantum::HamiltonianCoefficients;
use rng::UniformSource;

/// Returns the same draw forever, forcing outcome 0 when below p(0).
pub struct FixedDraw(pub f64);

impl UniformSource for FixedDraw {
    fn next_f64(&mut self, _ctx: &[u8]) -> f64 {
        self.0
    }
}

/// Ansatz state is `cos(θ/2)|q0=1,q1=0> − sin(θ/2)|q0=0,q1=1>`, giving
/// ⟨Z0⟩ = −cos θ, ⟨Z1⟩ = cos θ, ⟨Z0Z1⟩ = −1, ⟨X0X1⟩ = ⟨Y0Y1⟩ = −sin θ.
/// Spins are `2·outcome − 1`, so z spins average to the negated ⟨Z⟩.
pub fn closed_form_energy(theta: f64, h: &HamiltonianCoefficients) -> f64 {
    h.constant + (h.z0 - h.z1) * theta.cos() - h.z0z1 - (h.x0x1 + h.y0y1) * theta.sin()
}

pub fn h2() -> Vec<f64> {
    vec![0.2252, 0.3435, -0.4347, 0.5716, 0.0910, 0.0910]
}
