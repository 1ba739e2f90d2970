use std::time::{SystemTime, UNIX_EPOCH};

/// Byte generator for the random instruction, a small linear congruential
/// generator with full period over the 256 byte states. Seedable so tests
/// can pin the sequence.
pub struct Rng {
    state: u8,
}

impl Rng {
    pub fn from_clock() -> Self {
        let nanos = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.subsec_nanos())
            .unwrap_or(0);

        Self::with_seed(nanos as u8)
    }

    pub fn with_seed(seed: u8) -> Self {
        Self { state: seed }
    }

    pub fn next_byte(&mut self) -> u8 {
        self.state = self.state.wrapping_mul(37).wrapping_add(1);
        self.state
    }
}
