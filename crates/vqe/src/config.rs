use crate::error::{VqeError, VqeResult};
use quantum::{estimator::validate_inputs, HamiltonianCoefficients};

/// Inputs of one estimation run.
#[derive(Debug, Clone, PartialEq)]
pub struct EstimatorConfig {
    /// Ansatz rotation angle in radians.
    pub theta: f64,
    /// Sampling iterations; each costs three preparations and six measurements.
    pub iterations: usize,
    /// Six weights, bound positionally to const, z0, z1, z0z1, x0x1, y0y1.
    pub coefficients: Vec<f64>,
    /// RNG seed (full reproducibility).
    pub seed: String,
    /// Independent registers sampling in parallel.
    pub workers: usize,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        Self {
            theta: 0.0,
            iterations: 50,
            coefficients: HamiltonianCoefficients::h2_minimal().as_array().to_vec(),
            seed: "default-seed".to_string(),
            workers: 1,
        }
    }
}

impl EstimatorConfig {
    pub fn with_theta(mut self, theta: f64) -> Self {
        self.theta = theta;
        self
    }

    pub fn with_iterations(mut self, iterations: usize) -> Self {
        self.iterations = iterations;
        self
    }

    pub fn with_coefficients(mut self, coefficients: Vec<f64>) -> Self {
        self.coefficients = coefficients;
        self
    }

    pub fn with_seed(mut self, seed: impl Into<String>) -> Self {
        self.seed = seed.into();
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = workers;
        self
    }

    /// Checks every input before any simulation work and returns the bound
    /// coefficients.
    pub fn validate(&self) -> VqeResult<HamiltonianCoefficients> {
        let h = validate_inputs(self.theta, self.iterations, &self.coefficients)?;
        if self.workers == 0 {
            return Err(VqeError::InvalidWorkers(self.workers));
        }
        Ok(h)
    }
}
