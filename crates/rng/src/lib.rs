//! Seedable, domain-separated random source built on a SHAKE256 hash chain.
//!
//! Every draw is labelled with a context tag, so two call sites that consume
//! draws in the same order but for different purposes never share output
//! bytes. The chain is fully determined by the seed.

use sha3::{digest::{ExtendableOutput, Update, XofReader}, Shake256};

/// A source of uniform draws in `[0, 1)`.
///
/// The simulator only ever asks for one number at a time, tagged with the
/// purpose of the draw.
pub trait UniformSource {
    fn next_f64(&mut self, ctx: &[u8]) -> f64;
}

impl<R: UniformSource + ?Sized> UniformSource for &mut R {
    fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        (**self).next_f64(ctx)
    }
}

#[derive(Clone, Debug)]
pub struct ONDRng {
    state: [u8; 32],
    step: u64,
}

impl ONDRng {
    pub fn new(seed: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[seed, b"OND_INIT"], &mut state);
        Self { state, step: 0 }
    }

    /// Child stream for one worker. Depends only on the parent's current
    /// state and the label, never on draws made by siblings.
    pub fn fork(&self, label: &[u8]) -> Self {
        let mut state = [0u8; 32];
        shake(&[&self.state, &self.step.to_be_bytes(), label, b"OND_FORK"], &mut state);
        Self { state, step: 0 }
    }

    /// Number of draws taken so far.
    pub fn steps(&self) -> u64 {
        self.step
    }

    fn advance(&mut self) {
        self.step += 1;

        let state = self.state;
        let step_bytes = self.step.to_be_bytes();
        shake(&[&state, &step_bytes, b"QSIM"], &mut self.state);

        if self.state[0] < 16 {
            let state = self.state;
            shake(&[&state, b"SKIP"], &mut self.state);
        }
    }
}

impl UniformSource for ONDRng {
    fn next_f64(&mut self, ctx: &[u8]) -> f64 {
        self.advance();

        let mut out = [0u8; 8];
        shake(&[&self.state, ctx], &mut out);

        // top 53 bits: exactly representable, strictly below 1.0
        (u64::from_be_bytes(out) >> 11) as f64 * (1.0 / (1u64 << 53) as f64)
    }
}

fn shake(parts: &[&[u8]], out: &mut [u8]) {
    let mut h = Shake256::default();
    for p in parts {
        h.update(p);
    }
    let mut r = h.finalize_xof();
    r.read(out);
}
