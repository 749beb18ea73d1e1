//! MGF1 mask generation function (RFC 8017 §B.2.1).

use log::debug;
use pkcsx_types::CryptoError;
use zeroize::Zeroizing;

use crate::ct::{secret_zeroed, xor_in_place};
use crate::provider::HashAlgorithm;

/// Generate a `mask_len`-byte mask from `seed`.
///
/// T = Hash(seed || C(0)) || Hash(seed || C(1)) || ... truncated to
/// `mask_len`, where C(i) is the 4-byte big-endian counter.
pub fn mgf1(
    seed: &[u8],
    mask_len: usize,
    hash: &dyn HashAlgorithm,
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let mut mask = secret_zeroed(mask_len)?;
    mgf1_xor(&mut mask, seed, hash)?;
    Ok(mask)
}

/// XOR `MGF1(seed, out.len())` into `out`.
///
/// The only failure modes are an unusable hash, allocation, and a mask
/// longer than 2^32 * hLen. None depend on the contents of `seed` or `out`.
pub fn mgf1_xor(out: &mut [u8], seed: &[u8], hash: &dyn HashAlgorithm) -> Result<(), CryptoError> {
    let h_len = hash.digest_size();
    if h_len == 0 {
        return Err(CryptoError::UnsupportedHashAlgorithm);
    }
    if out.len() as u128 > (1u128 << 32) * h_len as u128 {
        debug!("mgf1: mask of {} bytes too long", out.len());
        return Err(CryptoError::BadLength);
    }

    let mut ctx = hash.new_digest()?;
    let mut block = secret_zeroed(h_len)?;
    for (counter, chunk) in out.chunks_mut(h_len).enumerate() {
        ctx.reset();
        ctx.update(seed)?;
        ctx.update(&(counter as u32).to_be_bytes())?;
        ctx.finish(&mut block)?;
        xor_in_place(chunk, &block);
    }
    Ok(())
}
