pub mod ansatz;
pub mod energy;
pub mod error;
pub mod estimator;
pub mod gates;
pub mod hamiltonian;
pub mod measurement;
pub mod observables;
pub mod register;
pub mod state;

pub use error::{QuantumError, QuantumResult};
pub use estimator::{estimate_energy, estimate_energy_stats, EnergyAccumulator, EnergyStats, SpinSample};
pub use gates::Gate;
pub use hamiltonian::HamiltonianCoefficients;
pub use measurement::{measure_and_reset, Basis};
pub use register::Register;
pub use state::StateVector;
