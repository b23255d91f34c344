use crate::error::{QuantumError, QuantumResult};
use std::fmt;

pub const NUM_TERMS: usize = 6;

/// Weights of the six-term two-qubit expansion
/// `c0 + c1·z0 + c2·z1 + c3·z0·z1 + c4·x0·x1 + c5·y0·y1`.
///
/// Positional order is fixed: index 4 always multiplies the X·X product and
/// index 5 the Y·Y product.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HamiltonianCoefficients {
    pub constant: f64,
    pub z0: f64,
    pub z1: f64,
    pub z0z1: f64,
    pub x0x1: f64,
    pub y0y1: f64,
}

impl HamiltonianCoefficients {
    pub fn from_slice(c: &[f64]) -> QuantumResult<Self> {
        if c.len() != NUM_TERMS {
            return Err(QuantumError::InvalidCoefficientCount {
                expected: NUM_TERMS,
                actual: c.len(),
            });
        }
        if let Some((index, &value)) = c.iter().enumerate().find(|(_, v)| !v.is_finite()) {
            return Err(QuantumError::NonFiniteCoefficient { index, value });
        }

        Ok(Self {
            constant: c[0],
            z0: c[1],
            z1: c[2],
            z0z1: c[3],
            x0x1: c[4],
            y0y1: c[5],
        })
    }

    /// Minimal-basis H2 surrogate.
    pub fn h2_minimal() -> Self {
        Self {
            constant: 0.2252,
            z0: 0.3435,
            z1: -0.4347,
            z0z1: 0.5716,
            x0x1: 0.0910,
            y0y1: 0.0910,
        }
    }

    pub fn as_array(&self) -> [f64; NUM_TERMS] {
        [
            self.constant,
            self.z0,
            self.z1,
            self.z0z1,
            self.x0x1,
            self.y0y1,
        ]
    }

    /// Same weights with the X·X and Y·Y entries exchanged.
    pub fn swapped_xy(&self) -> Self {
        Self {
            x0x1: self.y0y1,
            y0y1: self.x0x1,
            ..*self
        }
    }

    /// Sum of absolute weights on the sampled terms; bounds the spread of a
    /// single iteration's energy around the constant.
    pub fn sampled_magnitude(&self) -> f64 {
        self.as_array()[1..].iter().map(|c| c.abs()).sum()
    }
}

impl Default for HamiltonianCoefficients {
    fn default() -> Self {
        Self::h2_minimal()
    }
}

impl fmt::Display for HamiltonianCoefficients {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:+.4} {:+.4}*z0 {:+.4}*z1 {:+.4}*z0z1 {:+.4}*x0x1 {:+.4}*y0y1",
            self.constant, self.z0, self.z1, self.z0z1, self.x0x1, self.y0y1
        )
    }
}
