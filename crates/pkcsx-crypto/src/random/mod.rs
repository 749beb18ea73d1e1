//! Operating-system random source.

use pkcsx_types::CryptoError;

use crate::provider::RandomSource;

/// [`RandomSource`] backed by the operating system CSPRNG via `getrandom`.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemRandom;

impl SystemRandom {
    pub fn new() -> Self {
        SystemRandom
    }
}

impl RandomSource for SystemRandom {
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError> {
        getrandom::getrandom(dest).map_err(|_| CryptoError::RandomFailure)
    }
}
