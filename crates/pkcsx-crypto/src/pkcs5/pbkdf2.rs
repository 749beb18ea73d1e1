//! PBKDF2 (Password-Based Key Derivation Function 2) implementation.
//!
//! PBKDF2 is defined in RFC 8018 (PKCS#5 v2.1). It derives cryptographic
//! keys from a password by applying a pseudorandom function (HMAC over the
//! chosen hash) iteratively to increase computational cost and resist
//! brute-force attacks.

use log::debug;
use pkcsx_types::CryptoError;
use zeroize::Zeroizing;

use crate::ct::{secret_zeroed, xor_in_place};
use crate::hmac::Hmac;
use crate::provider::{HashAlgorithm, Mac};

/// Derive a key from a password using PBKDF2 with HMAC-`hash` as the PRF.
///
/// # Parameters
/// - `hash`: the hash underlying the HMAC PRF.
/// - `password`: the password bytes.
/// - `salt`: the salt bytes.
/// - `iterations`: the iteration count, at least 1. Callers handling
///   untrusted parameters must bound it themselves.
/// - `dk_len`: the desired derived key length in bytes.
///
/// # Returns
/// The derived key of `dk_len` bytes.
pub fn pbkdf2(
    hash: &dyn HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    check_params(hash.digest_size(), iterations, dk_len)?;
    let mut prf = Hmac::new(hash, password)?;
    derive_with_mac(&mut prf, salt, iterations, dk_len)
}

fn check_params(h_len: usize, iterations: u32, dk_len: usize) -> Result<(), CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::BadIterationCount);
    }
    if dk_len == 0 || h_len == 0 {
        return Err(CryptoError::BadLength);
    }
    if dk_len as u128 > u32::MAX as u128 * h_len as u128 {
        debug!("pbkdf2: {dk_len} bytes exceeds (2^32 - 1) * {h_len}");
        return Err(CryptoError::DerivedKeyTooLong);
    }
    Ok(())
}

/// PBKDF2 over an arbitrary PRF already keyed with the password.
///
/// T_i = U_1 ^ U_2 ^ ... ^ U_c with U_1 = PRF(S || INT(i)) and
/// U_j = PRF(U_{j-1}); DK = T_1 || T_2 || ... truncated to `dk_len`.
pub fn derive_with_mac(
    prf: &mut dyn Mac,
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let h_len = prf.output_size();
    check_params(h_len, iterations, dk_len)?;

    let mut dk = secret_zeroed(dk_len)?;
    let mut u = secret_zeroed(h_len)?;
    let mut t = secret_zeroed(h_len)?;

    for (i, block) in dk.chunks_mut(h_len).enumerate() {
        let index = u32::try_from(i + 1).map_err(|_| CryptoError::DerivedKeyTooLong)?;

        // U_1 = PRF(P, S || INT(i))
        prf.reset();
        prf.update(salt)?;
        prf.update(&index.to_be_bytes())?;
        prf.finish(&mut u)?;
        t.copy_from_slice(&u);

        for _ in 1..iterations {
            prf.reset();
            prf.update(&u)?;
            prf.finish(&mut u)?;
            xor_in_place(&mut t, &u);
        }

        block.copy_from_slice(&t[..block.len()]);
    }

    Ok(dk)
}
