//! EMSA-PSS signature encoding (RFC 8017 §9.1).
//!
//! The hash function is supplied by the caller and is used for the message
//! hash, for H = Hash(M') and for MGF1. The usual salt length equals the
//! hash output length, see [`default_salt_len`].

use log::debug;
use pkcsx_types::CryptoError;
use subtle::{Choice, ConstantTimeEq};

use super::mgf1::mgf1_xor;
use crate::ct::{secret_copy, secret_zeroed};
use crate::provider::{HashAlgorithm, RandomSource};

/// Salt length used when the caller has no protocol-mandated value (hLen).
pub fn default_salt_len(hash: &dyn HashAlgorithm) -> usize {
    hash.digest_size()
}

/// Validate emBits / sLen against hLen and return emLen.
fn check_params(h_len: usize, em_bits: usize, salt_len: usize) -> Result<usize, CryptoError> {
    let em_len = em_bits.div_ceil(8);
    let min_bits = h_len
        .checked_add(salt_len)
        .and_then(|n| n.checked_mul(8))
        .and_then(|n| n.checked_add(9))
        .ok_or(CryptoError::BadLength)?;
    if em_len < h_len + salt_len + 2 || em_bits < min_bits {
        debug!("pss: emBits {em_bits} too small for hLen {h_len}, sLen {salt_len}");
        return Err(CryptoError::BadLength);
    }
    Ok(em_len)
}

/// H = Hash(0x00 * 8 || mHash || salt)
fn hash_m_prime(
    hash: &dyn HashAlgorithm,
    m_hash: &[u8],
    salt: &[u8],
    out: &mut [u8],
) -> Result<(), CryptoError> {
    let mut ctx = hash.new_digest()?;
    ctx.update(&[0u8; 8])?;
    ctx.update(m_hash)?;
    ctx.update(salt)?;
    ctx.finish(out)
}

/// EMSA-PSS encoding of `msg` (RFC 8017 §9.1.1).
///
/// `em_bits` is the maximum bit length of the encoded message, modBits - 1
/// for RSASSA-PSS.
pub fn encode(
    hash: &dyn HashAlgorithm,
    rng: &mut dyn RandomSource,
    msg: &[u8],
    em_bits: usize,
    salt_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    check_params(hash.digest_size(), em_bits, salt_len)?;
    let m_hash = hash.hash(msg)?;
    encode_digest(hash, rng, &m_hash, em_bits, salt_len)
}

/// EMSA-PSS encoding of a precomputed message hash `m_hash`.
pub fn encode_digest(
    hash: &dyn HashAlgorithm,
    rng: &mut dyn RandomSource,
    m_hash: &[u8],
    em_bits: usize,
    salt_len: usize,
) -> Result<Vec<u8>, CryptoError> {
    let h_len = hash.digest_size();
    if m_hash.len() != h_len {
        return Err(CryptoError::BadLength);
    }
    check_params(h_len, em_bits, salt_len)?;

    let mut salt = secret_zeroed(salt_len)?;
    rng.fill_bytes(&mut salt)?;

    encode_with_salt(hash, m_hash, em_bits, &salt)
}

/// Encoding with a caller-chosen salt.
pub(crate) fn encode_with_salt(
    hash: &dyn HashAlgorithm,
    m_hash: &[u8],
    em_bits: usize,
    salt: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let h_len = hash.digest_size();
    if m_hash.len() != h_len {
        return Err(CryptoError::BadLength);
    }
    let em_len = check_params(h_len, em_bits, salt.len())?;

    let mut em = secret_zeroed(em_len)?;
    let db_len = em_len - h_len - 1;
    let ps_len = db_len - salt.len() - 1;
    {
        let (db, tail) = em.split_at_mut(db_len);
        let (h, trailer) = tail.split_at_mut(h_len);

        hash_m_prime(hash, m_hash, salt, h)?;

        // DB = PS || 0x01 || salt
        db[ps_len] = 0x01;
        db[ps_len + 1..].copy_from_slice(salt);

        // maskedDB = DB XOR MGF1(H, emLen - hLen - 1)
        mgf1_xor(db, h, hash)?;

        // Clear the leftmost 8*emLen - emBits bits
        db[0] &= 0xffu8 >> (8 * em_len - em_bits);

        // EM = maskedDB || H || 0xbc
        trailer[0] = 0xbc;
    }

    Ok(std::mem::take(&mut *em))
}

/// EMSA-PSS verification of `msg` against `em` (RFC 8017 §9.1.2).
///
/// Returns `true` only if `em` is consistent. The individual checks are
/// folded into one constant-time result; an unusable parameter set also
/// yields `false`.
pub fn verify(
    hash: &dyn HashAlgorithm,
    msg: &[u8],
    em: &[u8],
    em_bits: usize,
    salt_len: usize,
) -> bool {
    match hash.hash(msg) {
        Ok(m_hash) => verify_digest(hash, &m_hash, em, em_bits, salt_len),
        Err(_) => false,
    }
}

/// EMSA-PSS verification against a precomputed message hash.
pub fn verify_digest(
    hash: &dyn HashAlgorithm,
    m_hash: &[u8],
    em: &[u8],
    em_bits: usize,
    salt_len: usize,
) -> bool {
    verify_inner(hash, m_hash, em, em_bits, salt_len).unwrap_or(false)
}

fn verify_inner(
    hash: &dyn HashAlgorithm,
    m_hash: &[u8],
    em: &[u8],
    em_bits: usize,
    salt_len: usize,
) -> Result<bool, CryptoError> {
    let h_len = hash.digest_size();
    let em_len = check_params(h_len, em_bits, salt_len)?;
    if m_hash.len() != h_len || em.len() != em_len {
        return Ok(false);
    }

    let db_len = em_len - h_len - 1;
    let ps_len = db_len - salt_len - 1;
    let top_bits = 8 * em_len - em_bits;
    let h = &em[db_len..db_len + h_len];

    let trailer_ok = em[em_len - 1].ct_eq(&0xbc);
    let top_clear = (em[0] & !(0xffu8 >> top_bits)).ct_eq(&0);

    // DB = maskedDB XOR MGF1(H, emLen - hLen - 1)
    let mut db = secret_copy(&em[..db_len])?;
    mgf1_xor(&mut db, h, hash)?;
    db[0] &= 0xffu8 >> top_bits;

    // DB = PS || 0x01 || salt
    let mut ps_zero = Choice::from(1u8);
    for b in &db[..ps_len] {
        ps_zero &= b.ct_eq(&0);
    }
    let separator_ok = db[ps_len].ct_eq(&0x01);
    let salt = &db[ps_len + 1..];

    let mut h_prime = secret_zeroed(h_len)?;
    hash_m_prime(hash, m_hash, salt, &mut h_prime)?;
    let hash_ok = h.ct_eq(&h_prime[..]);

    Ok((trailer_ok & top_clear & ps_zero & separator_ok & hash_ok).into())
}
