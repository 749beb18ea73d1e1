//! PBKDF1 (RFC 8018 §5.1).

use log::debug;
use pkcsx_types::CryptoError;
use zeroize::Zeroizing;

use crate::ct::{secret_copy, secret_zeroed};
use crate::provider::HashAlgorithm;

/// Derive `dk_len` bytes from `password` and `salt` with PBKDF1.
///
/// T_1 = Hash(P || S), T_i = Hash(T_{i-1}); DK is the first `dk_len` bytes
/// of T_c. `dk_len` may not exceed the digest size.
pub fn pbkdf1(
    hash: &dyn HashAlgorithm,
    password: &[u8],
    salt: &[u8],
    iterations: u32,
    dk_len: usize,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    if iterations == 0 {
        return Err(CryptoError::BadIterationCount);
    }
    let h_len = hash.digest_size();
    if dk_len > h_len {
        debug!("pbkdf1: {dk_len} bytes requested from a {h_len}-byte hash");
        return Err(CryptoError::DerivedKeyTooLong);
    }
    if dk_len == 0 {
        return Err(CryptoError::BadLength);
    }

    let mut ctx = hash.new_digest()?;
    let mut t = secret_zeroed(h_len)?;
    ctx.update(password)?;
    ctx.update(salt)?;
    ctx.finish(&mut t)?;

    for _ in 1..iterations {
        ctx.reset();
        ctx.update(&t)?;
        ctx.finish(&mut t)?;
    }

    secret_copy(&t[..dk_len])
}
