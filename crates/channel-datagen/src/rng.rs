//! Seeded 32-bit random source for reproducible dataset generation.

use rand::{RngCore, SeedableRng};

/// Additive constant applied to the state on every draw (odd, so the state
/// walks the full 2^32 cycle).
pub const INCREMENT: u32 = 0x6D2B_79F5;

const TWO_POW_32: f64 = 4_294_967_296.0;

/// Mulberry32: a tiny generator with one 32-bit word of state.
///
/// Every output is a pure function of the seed and the number of draws taken
/// so far, so the same seed reproduces the same stream bit-for-bit on every
/// platform. Cloning a generator captures its position in the stream.
///
/// # Example
/// ```
/// use channel_datagen::rng::Mulberry32;
///
/// let mut rng = Mulberry32::new(42);
/// let first = rng.next_f64();
/// assert!((0.0..1.0).contains(&first));
///
/// // Re-seeding replays the stream
/// assert_eq!(Mulberry32::new(42).next_f64(), first);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    /// Create a generator positioned at the start of the stream for `seed`.
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Current internal state word.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Draw a float in `[0, 1)`, advancing the stream by one step.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.step()) / TWO_POW_32
    }

    fn step(&mut self) -> u32 {
        self.state = self.state.wrapping_add(INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }
}

impl Default for Mulberry32 {
    fn default() -> Self {
        Self::new(42)
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.step()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.step());
        let high = u64::from(self.step());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.step().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand::Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }

    /// Only the low 32 bits of `state` are used.
    fn seed_from_u64(state: u64) -> Self {
        Self::new(state as u32)
    }
}
