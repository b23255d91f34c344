//! Invalid-argument conditions reported before any simulation work.
//!
//! Broken numeric invariants (normalization drift, probabilities outside
//! `[0, 1]`) are not represented here: they abort the run through `assert!`.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
#[non_exhaustive]
pub enum QuantumError {
    /// Qubit index outside the two-qubit register.
    #[error("invalid qubit index {qubit}: register has {num_qubits} qubits")]
    InvalidQubit { qubit: usize, num_qubits: usize },

    /// Control and target name the same qubit.
    #[error("duplicate qubit {0} in two-qubit gate")]
    DuplicateQubit(usize),

    #[error("gate '{gate}' acts on {expected} qubit(s), but {actual} were given")]
    WrongArity {
        gate: &'static str,
        expected: usize,
        actual: usize,
    },

    #[error("iteration count must be at least 1, got {0}")]
    InvalidIterations(usize),

    #[error("expected exactly {expected} Hamiltonian coefficients, got {actual}")]
    InvalidCoefficientCount { expected: usize, actual: usize },

    #[error("coefficient {index} is not finite: {value}")]
    NonFiniteCoefficient { index: usize, value: f64 },

    #[error("rotation angle must be finite, got {0}")]
    NonFiniteAngle(f64),
}

pub type QuantumResult<T> = Result<T, QuantumError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_qubit_message_names_index() {
        let msg = QuantumError::InvalidQubit { qubit: 5, num_qubits: 2 }.to_string();
        assert!(msg.contains('5'));
        assert!(msg.contains('2'));
    }

    #[test]
    fn coefficient_count_message() {
        let msg = QuantumError::InvalidCoefficientCount { expected: 6, actual: 4 }.to_string();
        assert!(msg.contains("exactly 6"));
        assert!(msg.contains('4'));
    }

    #[test]
    fn arity_message_names_gate() {
        let err = QuantumError::WrongArity { gate: "CNOT", expected: 2, actual: 1 };
        assert!(err.to_string().contains("CNOT"));
    }
}
