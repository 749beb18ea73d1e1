//! Trait-based provider mechanism for the padding and KDF layers.
//!
//! OAEP, PSS, MGF1 and the PBKDF routines never name a concrete hash, MAC,
//! random generator or RSA implementation. They receive these capabilities
//! by reference through the traits below, so callers can plug in their own
//! backends (hardware tokens, FIPS modules, test doubles).

use pkcsx_types::{CryptoError, HashAlgId};
use zeroize::Zeroizing;

/// A hash / message digest context.
pub trait Digest: Send + Sync {
    /// The output size in bytes.
    fn output_size(&self) -> usize;

    /// The internal block size in bytes.
    fn block_size(&self) -> usize;

    /// Feed data into the hash state.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Finalize the hash and write the digest to the front of `out`.
    /// The length of `out` must be at least `output_size()`. The context is
    /// left reset and may be reused.
    fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError>;

    /// Reset the hash state to process a new message.
    fn reset(&mut self);
}

/// A hash algorithm capability: sizes plus a factory for digest contexts.
pub trait HashAlgorithm: Send + Sync {
    /// The well-known identifier, if this is one of the built-in hashes.
    fn id(&self) -> Option<HashAlgId> {
        None
    }

    /// Digest length in bytes (hLen).
    fn digest_size(&self) -> usize;

    /// Compression block length in bytes.
    fn block_size(&self) -> usize;

    /// Create a new digest context.
    fn new_digest(&self) -> Result<Box<dyn Digest>, CryptoError>;

    /// One-shot hash computation.
    fn hash(&self, data: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut ctx = self.new_digest()?;
        ctx.update(data)?;
        let mut out = vec![0u8; ctx.output_size()];
        ctx.finish(&mut out)?;
        Ok(out)
    }
}

/// A Message Authentication Code (MAC) algorithm.
pub trait Mac: Send + Sync {
    /// The output size of the MAC in bytes.
    fn output_size(&self) -> usize;

    /// Initialize the MAC with a key.
    fn init(&mut self, key: &[u8]) -> Result<(), CryptoError>;

    /// Feed data into the MAC computation.
    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError>;

    /// Finalize and write the MAC value to `out`.
    fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError>;

    /// Reset the MAC state for reuse with the same key.
    fn reset(&mut self);
}

/// A source of cryptographically secure random bytes.
///
/// Taken as `&mut`, so a generator shared between threads must be
/// synchronised by the caller.
pub trait RandomSource {
    /// Fill `dest` entirely with random bytes.
    fn fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), CryptoError>;
}

/// The RSA public-key primitive (RSAEP / RSAVP1).
pub trait RsaPublicPrimitive: Send + Sync {
    /// Bit length of the modulus n.
    fn modulus_bits(&self) -> usize;

    /// Byte length of the modulus (k).
    fn modulus_len(&self) -> usize {
        self.modulus_bits().div_ceil(8)
    }

    /// Compute `input^e mod n`.
    ///
    /// `input` is a big-endian representative of exactly `modulus_len()`
    /// bytes; the result has the same length. Fails when the representative
    /// is not smaller than n.
    fn public_op(&self, input: &[u8]) -> Result<Vec<u8>, CryptoError>;
}

/// The RSA private-key primitive (RSADP / RSASP1).
pub trait RsaPrivatePrimitive: Send + Sync {
    /// Bit length of the modulus n.
    fn modulus_bits(&self) -> usize;

    /// Byte length of the modulus (k).
    fn modulus_len(&self) -> usize {
        self.modulus_bits().div_ceil(8)
    }

    /// Compute `input^d mod n`, same length conventions as
    /// [`RsaPublicPrimitive::public_op`].
    fn private_op(&self, input: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError>;
}
