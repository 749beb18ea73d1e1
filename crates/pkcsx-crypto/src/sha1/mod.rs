//! SHA-1 hash algorithm.
//!
//! Produces a 160-bit (20-byte) digest as defined in FIPS 180-4. Still the
//! default MGF1 and PBKDF2 hash in PKCS#1 v2.1 and PKCS#5 v2.0 parameter
//! sets.

use ::sha1::Digest as _;
use pkcsx_types::CryptoError;

use crate::provider::Digest;

/// SHA-1 output size in bytes.
pub const SHA1_OUTPUT_SIZE: usize = 20;

/// SHA-1 block size in bytes.
pub const SHA1_BLOCK_SIZE: usize = 64;

/// SHA-1 hash context.
#[derive(Clone, Default)]
pub struct Sha1 {
    inner: ::sha1::Sha1,
}

impl Sha1 {
    /// Create a new SHA-1 hash context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed data into the hash computation.
    pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.inner.update(data);
        Ok(())
    }

    /// Finalize the hash and return the 20-byte digest.
    pub fn finish(&mut self) -> Result<[u8; SHA1_OUTPUT_SIZE], CryptoError> {
        let mut out = [0u8; SHA1_OUTPUT_SIZE];
        out.copy_from_slice(&self.inner.finalize_reset());
        Ok(out)
    }

    /// Reset the hash context for a new computation.
    pub fn reset(&mut self) {
        ::sha1::Digest::reset(&mut self.inner);
    }

    /// One-shot: compute the SHA-1 digest of `data`.
    pub fn digest(data: &[u8]) -> Result<[u8; SHA1_OUTPUT_SIZE], CryptoError> {
        let mut ctx = Self::new();
        ctx.update(data)?;
        ctx.finish()
    }
}

impl Digest for Sha1 {
    fn output_size(&self) -> usize {
        SHA1_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        SHA1_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        Sha1::update(self, data)
    }

    fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError> {
        if out.len() < SHA1_OUTPUT_SIZE {
            return Err(CryptoError::BufferTooSmall {
                need: SHA1_OUTPUT_SIZE,
                got: out.len(),
            });
        }
        out[..SHA1_OUTPUT_SIZE].copy_from_slice(&Sha1::finish(self)?);
        Ok(())
    }

    fn reset(&mut self) {
        Sha1::reset(self)
    }
}
