use quantum::QuantumError;
use std::io;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum VqeError {
    #[error(transparent)]
    Quantum(#[from] QuantumError),

    #[error("worker count must be at least 1, got {0}")]
    InvalidWorkers(usize),

    #[error("theta scan needs at least one step")]
    InvalidSteps,

    #[error("convergence study needs at least one iteration count")]
    EmptySweep,

    #[error("failed to write {path}: {source}")]
    Output {
        path: String,
        #[source]
        source: io::Error,
    },
}

pub type VqeResult<T> = Result<T, VqeError>;
