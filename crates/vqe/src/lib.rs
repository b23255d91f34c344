//! Hybrid-run orchestration on top of the two-qubit energy estimator.

pub mod config;
pub mod convergence;
pub mod error;
mod output;
pub mod parallel;
pub mod scan;

pub use config::EstimatorConfig;
pub use convergence::{convergence_study, ConvergencePoint};
pub use error::{VqeError, VqeResult};
pub use output::{write_csv, CsvRow};
pub use parallel::{estimate, estimate_parallel};
pub use scan::{theta_scan, ScanPoint, ThetaScan};
