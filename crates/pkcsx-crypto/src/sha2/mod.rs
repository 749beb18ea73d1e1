//! SHA-2 family of hash algorithms.
//!
//! Provides SHA-224, SHA-256, SHA-384, and SHA-512 as defined in FIPS 180-4.
//! SHA-256 is the usual choice for OAEP and PSS with 2048-bit and larger
//! moduli; SHA-512 is the strongest PRF offered to PBKDF2.

use ::sha2::Digest as _;
use pkcsx_types::CryptoError;

use crate::provider::Digest;

/// SHA-224 output size in bytes.
pub const SHA224_OUTPUT_SIZE: usize = 28;
/// SHA-256 output size in bytes.
pub const SHA256_OUTPUT_SIZE: usize = 32;
/// SHA-384 output size in bytes.
pub const SHA384_OUTPUT_SIZE: usize = 48;
/// SHA-512 output size in bytes.
pub const SHA512_OUTPUT_SIZE: usize = 64;

macro_rules! sha2_context {
    ($name:ident, $backend:ty, $out:ident, $block:expr, $label:literal) => {
        #[doc = concat!($label, " hash context.")]
        #[derive(Clone, Default)]
        pub struct $name {
            inner: $backend,
        }

        impl $name {
            #[doc = concat!("Create a new ", $label, " hash context.")]
            pub fn new() -> Self {
                Self::default()
            }

            /// Feed data into the hash computation.
            pub fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
                self.inner.update(data);
                Ok(())
            }

            /// Finalize the hash and return the digest.
            pub fn finish(&mut self) -> Result<[u8; $out], CryptoError> {
                let mut out = [0u8; $out];
                out.copy_from_slice(&self.inner.finalize_reset());
                Ok(out)
            }

            /// Reset the hash context for a new computation.
            pub fn reset(&mut self) {
                ::sha2::Digest::reset(&mut self.inner);
            }

            #[doc = concat!("One-shot: compute the ", $label, " digest of `data`.")]
            pub fn digest(data: &[u8]) -> Result<[u8; $out], CryptoError> {
                let mut ctx = Self::new();
                ctx.update(data)?;
                ctx.finish()
            }
        }

        impl Digest for $name {
            fn output_size(&self) -> usize {
                $out
            }

            fn block_size(&self) -> usize {
                $block
            }

            fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
                $name::update(self, data)
            }

            fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError> {
                if out.len() < $out {
                    return Err(CryptoError::BufferTooSmall {
                        need: $out,
                        got: out.len(),
                    });
                }
                out[..$out].copy_from_slice(&$name::finish(self)?);
                Ok(())
            }

            fn reset(&mut self) {
                $name::reset(self)
            }
        }
    };
}

sha2_context!(Sha224, ::sha2::Sha224, SHA224_OUTPUT_SIZE, 64, "SHA-224");
sha2_context!(Sha256, ::sha2::Sha256, SHA256_OUTPUT_SIZE, 64, "SHA-256");
sha2_context!(Sha384, ::sha2::Sha384, SHA384_OUTPUT_SIZE, 128, "SHA-384");
sha2_context!(Sha512, ::sha2::Sha512, SHA512_OUTPUT_SIZE, 128, "SHA-512");
