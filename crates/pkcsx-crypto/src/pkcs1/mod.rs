//! PKCS#1 v2.1 encoding schemes and the RSAES-OAEP / RSASSA-PSS operations.
//!
//! The encodings ([`oaep`], [`pss`], [`mgf1()`]) work on byte strings only.
//! The functions at this level compose them with an RSA primitive reached
//! through [`RsaPublicPrimitive`] / [`RsaPrivatePrimitive`].

pub mod mgf1;
pub mod oaep;
pub mod pss;

pub use mgf1::{mgf1, mgf1_xor};

use log::debug;
use pkcsx_types::CryptoError;
use zeroize::Zeroizing;

use crate::provider::{HashAlgorithm, RandomSource, RsaPrivatePrimitive, RsaPublicPrimitive};

/// RSAES-OAEP-ENCRYPT (RFC 8017 §7.1.1).
///
/// Returns a ciphertext of exactly k bytes.
pub fn rsaes_oaep_encrypt(
    key: &dyn RsaPublicPrimitive,
    hash: &dyn HashAlgorithm,
    rng: &mut dyn RandomSource,
    msg: &[u8],
    label: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let k = key.modulus_len();
    let em = oaep::encode(hash, rng, k, msg, label)?;
    key.public_op(&em)
}

/// RSAES-OAEP-DECRYPT (RFC 8017 §7.1.2).
///
/// Any failure after the parameter checks, including a ciphertext
/// representative out of range, is reported as
/// [`CryptoError::CryptoFailure`].
pub fn rsaes_oaep_decrypt(
    key: &dyn RsaPrivatePrimitive,
    hash: &dyn HashAlgorithm,
    ciphertext: &[u8],
    label: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let k = key.modulus_len();
    if ciphertext.len() != k || k < 2 * hash.digest_size() + 2 {
        return Err(CryptoError::CryptoFailure);
    }
    let em = key
        .private_op(ciphertext)
        .map_err(|_| CryptoError::CryptoFailure)?;
    oaep::decode(hash, &em, label)
}

/// RSASSA-PSS-SIGN (RFC 8017 §8.1.1) with emBits = modBits - 1.
///
/// Returns a signature of exactly k bytes.
pub fn rsassa_pss_sign(
    key: &dyn RsaPrivatePrimitive,
    hash: &dyn HashAlgorithm,
    rng: &mut dyn RandomSource,
    msg: &[u8],
    salt_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    let mod_bits = key.modulus_bits();
    if mod_bits < 2 {
        return Err(CryptoError::InvalidKey);
    }
    let k = key.modulus_len();
    let em = pss::encode(hash, rng, msg, mod_bits - 1, salt_len)?;

    // emLen is k - 1 when modBits - 1 is a multiple of 8
    let mut representative = vec![0u8; k - em.len()];
    representative.extend_from_slice(&em);
    let signature = key.private_op(&representative)?;
    Ok(signature.to_vec())
}

/// RSASSA-PSS-VERIFY (RFC 8017 §8.1.2).
///
/// An empty signature is a caller error. Any other inconsistency (wrong
/// length, representative out of range, bad encoding) is `Ok(false)`.
pub fn rsassa_pss_verify(
    key: &dyn RsaPublicPrimitive,
    hash: &dyn HashAlgorithm,
    msg: &[u8],
    signature: &[u8],
    salt_len: usize,
) -> Result<bool, CryptoError> {
    if signature.is_empty() {
        return Err(CryptoError::NullOrEmptyInput);
    }
    let mod_bits = key.modulus_bits();
    let k = key.modulus_len();
    if mod_bits < 2 || signature.len() != k {
        debug!("pss: signature of {} bytes for a {k}-byte modulus", signature.len());
        return Ok(false);
    }

    let m = match key.public_op(signature) {
        Ok(m) if m.len() == k => m,
        _ => return Ok(false),
    };

    let em_bits = mod_bits - 1;
    let em_len = em_bits.div_ceil(8);
    let (prefix, em) = m.split_at(k - em_len);
    if prefix.iter().any(|&b| b != 0) {
        return Ok(false);
    }
    Ok(pss::verify(hash, msg, em, em_bits, salt_len))
}
