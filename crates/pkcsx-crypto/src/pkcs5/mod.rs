//! PKCS#5 password-based key derivation (RFC 8018).
//!
//! [`pbkdf1`] and [`pbkdf2`] are the raw KDFs. [`pbes1_key_iv`] and
//! [`pbes2_key`] derive the key material that the PBES1 / PBES2 encryption
//! schemes feed into their block ciphers; the ciphers themselves are not
//! part of this crate.

mod pbkdf1;
mod pbkdf2;

pub use pbkdf1::pbkdf1;
pub use pbkdf2::{derive_with_mac, pbkdf2};

use log::debug;
use pkcsx_types::{CryptoError, HashAlgId};
use zeroize::Zeroizing;

use crate::provider::HashAlgorithm;

/// PRF hash used by PBES2 when the parameters do not name one (HMAC-SHA1).
pub const PBES2_DEFAULT_PRF: HashAlgId = HashAlgId::Sha1;

/// PBES1 salt length in bytes.
pub const PBES1_SALT_LEN: usize = 8;

/// PBES1 encryption schemes with a supported hash.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pbes1Scheme {
    Md5Des,
    Md5Rc2,
    Sha1Des,
    Sha1Rc2,
}

impl Pbes1Scheme {
    /// Map a PKCS#5 PBES1 sub-type code.
    ///
    /// Codes 3, 6, 10 and 11 are MD5-DES, MD5-RC2, SHA1-DES and SHA1-RC2.
    /// The MD2 variants (1 and 4) are not supported.
    pub fn from_subtype(code: u8) -> Result<Self, CryptoError> {
        match code {
            3 => Ok(Pbes1Scheme::Md5Des),
            6 => Ok(Pbes1Scheme::Md5Rc2),
            10 => Ok(Pbes1Scheme::Sha1Des),
            11 => Ok(Pbes1Scheme::Sha1Rc2),
            _ => {
                debug!("pbes1: unsupported sub-type {code}");
                Err(CryptoError::UnsupportedHashAlgorithm)
            }
        }
    }

    /// The hash PBKDF1 runs over for this scheme.
    pub fn hash(self) -> HashAlgId {
        match self {
            Pbes1Scheme::Md5Des | Pbes1Scheme::Md5Rc2 => HashAlgId::Md5,
            Pbes1Scheme::Sha1Des | Pbes1Scheme::Sha1Rc2 => HashAlgId::Sha1,
        }
    }
}

/// Key and IV for a PBES1 cipher.
pub struct Pbes1KeyIv {
    pub key: Zeroizing<[u8; 8]>,
    pub iv: [u8; 8],
}

/// Derive the 8-byte cipher key and 8-byte IV for PBES1.
///
/// DK = PBKDF1(P, S, c, 16); key = DK[0..8], IV = DK[8..16].
pub fn pbes1_key_iv(
    scheme: Pbes1Scheme,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
) -> Result<Pbes1KeyIv, CryptoError> {
    if salt.len() != PBES1_SALT_LEN {
        debug!("pbes1: salt must be {PBES1_SALT_LEN} bytes, got {}", salt.len());
        return Err(CryptoError::BadLength);
    }
    let dk = pbkdf1(&scheme.hash(), password, salt, iterations, 16)?;

    let mut key = Zeroizing::new([0u8; 8]);
    key.copy_from_slice(&dk[..8]);
    let mut iv = [0u8; 8];
    iv.copy_from_slice(&dk[8..16]);
    Ok(Pbes1KeyIv { key, iv })
}

/// Derive a PBES2 encryption key: PBKDF2 with HMAC-`prf` as the PRF.
///
/// Pass [`PBES2_DEFAULT_PRF`] when the parameters carry no PRF.
pub fn pbes2_key(
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    key_len: usize,
    prf: &dyn HashAlgorithm,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    pbkdf2(prf, password, salt, iterations, key_len)
}
