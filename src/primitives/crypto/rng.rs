//! Default entropy source for hashing and collision finding.
//!
//! Nothing in the crate reads randomness on its own: [`ChameleonHasher::compute_hash`] and
//! [`Trapdoor::find_collision`] take the generator as an argument, and the sampler turns a
//! failed read into [`Error::EntropyUnavailable`] instead of panicking.
//!
//! [`ChameleonHasher::compute_hash`]: crate::ChameleonHasher::compute_hash
//! [`Trapdoor::find_collision`]: crate::Trapdoor::find_collision
//! [`Error::EntropyUnavailable`]: crate::Error::EntropyUnavailable

use rand_core::{CryptoRng, OsRng, RngCore};

/// Operating-system generator handed to the hashing operations when the caller has no
/// entropy source of their own.
///
/// Any [`rand_core::CryptoRngCore`] works in its place; tests inject seeded or failing
/// generators the same way.
#[derive(Clone, Copy, Debug, Default)]
pub struct SecureRng(OsRng);

impl SecureRng {
    /// Wraps [`OsRng`].
    pub fn new() -> Self {
        Self(OsRng)
    }
}

impl RngCore for SecureRng {
    fn next_u32(&mut self) -> u32 {
        self.0.next_u32()
    }

    fn next_u64(&mut self) -> u64 {
        self.0.next_u64()
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        self.0.fill_bytes(dest)
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), rand_core::Error> {
        self.0.try_fill_bytes(dest)
    }
}

impl CryptoRng for SecureRng {}
