//! MD5 message digest algorithm.
//!
//! MD5 produces a 128-bit (16-byte) hash value. It is defined in RFC 1321.
//!
//! **Security warning**: MD5 is cryptographically broken. It is provided
//! only for PBKDF1 / PBES1 interoperability with legacy key files.

use ::md5::Digest as _;
use pkcsx_types::CryptoError;

use crate::provider::Digest;

/// MD5 output size in bytes.
pub const MD5_OUTPUT_SIZE: usize = 16;

/// MD5 block size in bytes.
pub const MD5_BLOCK_SIZE: usize = 64;

/// MD5 hash context.
#[derive(Clone, Default)]
pub struct Md5 {
    inner: ::md5::Md5,
}

impl Md5 {
    /// Create a new MD5 hash context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed data into the hash computation.
    pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.inner.update(data);
        Ok(())
    }

    /// Finalize the hash and return the 16-byte digest.
    pub fn finish(&mut self) -> Result<[u8; MD5_OUTPUT_SIZE], CryptoError> {
        let mut out = [0u8; MD5_OUTPUT_SIZE];
        out.copy_from_slice(&self.inner.finalize_reset());
        Ok(out)
    }

    /// Reset the hash context for a new computation.
    pub fn reset(&mut self) {
        ::md5::Digest::reset(&mut self.inner);
    }

    /// One-shot: compute the MD5 digest of `data`.
    pub fn digest(data: &[u8]) -> Result<[u8; MD5_OUTPUT_SIZE], CryptoError> {
        let mut ctx = Self::new();
        ctx.update(data)?;
        ctx.finish()
    }
}

impl Digest for Md5 {
    fn output_size(&self) -> usize {
        MD5_OUTPUT_SIZE
    }

    fn block_size(&self) -> usize {
        MD5_BLOCK_SIZE
    }

    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        Md5::update(self, data)
    }

    fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError> {
        if out.len() < MD5_OUTPUT_SIZE {
            return Err(CryptoError::BufferTooSmall {
                need: MD5_OUTPUT_SIZE,
                got: out.len(),
            });
        }
        out[..MD5_OUTPUT_SIZE].copy_from_slice(&Md5::finish(self)?);
        Ok(())
    }

    fn reset(&mut self) {
        Md5::reset(self)
    }
}
