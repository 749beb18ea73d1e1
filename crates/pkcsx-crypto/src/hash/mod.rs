//! Unified hash module.
//!
//! [`HashAlgId`] is the built-in [`HashAlgorithm`] capability: it reports
//! digest and block sizes and hands out digest contexts for the hash
//! families compiled into this build. Families disabled through Cargo
//! features are reported as [`CryptoError::UnsupportedHashAlgorithm`] when a
//! context is requested.

use log::debug;
use pkcsx_types::{CryptoError, HashAlgId};

pub use crate::provider::{Digest, HashAlgorithm};

#[cfg(feature = "md5")]
pub use crate::md5::Md5;

#[cfg(feature = "sha1")]
pub use crate::sha1::Sha1;

#[cfg(feature = "sha2")]
pub use crate::sha2::{Sha224, Sha256, Sha384, Sha512};

impl HashAlgorithm for HashAlgId {
    fn id(&self) -> Option<HashAlgId> {
        Some(*self)
    }

    fn digest_size(&self) -> usize {
        self.output_size()
    }

    fn block_size(&self) -> usize {
        HashAlgId::block_size(*self)
    }

    fn new_digest(&self) -> Result<Box<dyn Digest>, CryptoError> {
        match self {
            #[cfg(feature = "md5")]
            HashAlgId::Md5 => Ok(Box::new(Md5::new())),
            #[cfg(feature = "sha1")]
            HashAlgId::Sha1 => Ok(Box::new(Sha1::new())),
            #[cfg(feature = "sha2")]
            HashAlgId::Sha224 => Ok(Box::new(Sha224::new())),
            #[cfg(feature = "sha2")]
            HashAlgId::Sha256 => Ok(Box::new(Sha256::new())),
            #[cfg(feature = "sha2")]
            HashAlgId::Sha384 => Ok(Box::new(Sha384::new())),
            #[cfg(feature = "sha2")]
            HashAlgId::Sha512 => Ok(Box::new(Sha512::new())),
            #[allow(unreachable_patterns)]
            _ => {
                debug!("hash {} is not compiled into this build", self);
                Err(CryptoError::UnsupportedHashAlgorithm)
            }
        }
    }
}
