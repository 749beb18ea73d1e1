#![forbid(unsafe_code)]
#![doc = "PKCS#1 v2.1 (MGF1, OAEP, PSS) and PKCS#5 (PBKDF1, PBKDF2) for pkcsx."]

// Core traits
pub mod provider;

#[cfg(any(feature = "hmac", feature = "pkcs1", feature = "pkcs5"))]
mod ct;

// Hash algorithms
#[cfg(feature = "md5")]
pub mod md5;
#[cfg(feature = "sha1")]
pub mod sha1;
#[cfg(feature = "sha2")]
pub mod sha2;

pub mod hash;

// MAC algorithms
#[cfg(feature = "hmac")]
pub mod hmac;

pub mod mac {
    //! Unified MAC interface.
    pub use super::provider::Mac;
}

pub mod random;

// Padding schemes and key derivation
#[cfg(feature = "pkcs1")]
pub mod pkcs1;
#[cfg(feature = "pkcs5")]
pub mod pkcs5;

// Reference RSA primitive
#[cfg(feature = "rsa")]
pub mod rsa;

pub use pkcsx_types::{CryptoError, HashAlgId};
