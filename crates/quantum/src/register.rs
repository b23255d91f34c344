use crate::state::StateVector;
use std::ops::{Deref, DerefMut};
use tracing::trace;

/// Two-qubit register held for one estimation run.
///
/// Acquired in |00>. Dropping it releases the register back to |00> on every
/// exit path, including unwinding out of a failed invariant assertion.
#[derive(Debug, Default)]
pub struct Register {
    state: StateVector,
}

impl Register {
    pub fn acquire() -> Self {
        trace!("acquired two-qubit register");
        Self {
            state: StateVector::new_zero(),
        }
    }

    pub fn state(&self) -> &StateVector {
        &self.state
    }
}

impl Deref for Register {
    type Target = StateVector;

    fn deref(&self) -> &StateVector {
        &self.state
    }
}

impl DerefMut for Register {
    fn deref_mut(&mut self) -> &mut StateVector {
        &mut self.state
    }
}

impl Drop for Register {
    fn drop(&mut self) {
        let clean = self.state.is_zero_state();
        self.state.reset();
        trace!(clean, "released two-qubit register");
    }
}
