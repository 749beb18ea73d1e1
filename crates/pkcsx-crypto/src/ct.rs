//! Scratch-buffer helpers shared by the padding and KDF code.

use pkcsx_types::CryptoError;
use zeroize::Zeroizing;

/// Allocate a zero-filled secret buffer that is wiped on drop.
///
/// Allocation failure is reported instead of aborting.
pub(crate) fn secret_zeroed(len: usize) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let mut buf = Vec::new();
    buf.try_reserve_exact(len)
        .map_err(|_| CryptoError::AllocationFailure)?;
    buf.resize(len, 0);
    Ok(Zeroizing::new(buf))
}

/// Copy `data` into a fresh secret buffer.
pub(crate) fn secret_copy(data: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let mut buf = secret_zeroed(data.len())?;
    buf.copy_from_slice(data);
    Ok(buf)
}

/// `dst ^= src` over the common prefix.
pub(crate) fn xor_in_place(dst: &mut [u8], src: &[u8]) {
    for (d, s) in dst.iter_mut().zip(src) {
        *d ^= s;
    }
}
