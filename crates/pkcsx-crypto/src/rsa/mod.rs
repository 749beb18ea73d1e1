//! Reference RSA primitive and the RFC 8017 §4 conversion primitives.
//!
//! [`RsaPublicKey`] and [`RsaPrivateKey`] implement the provider traits
//! consumed by the RSAES-OAEP and RSASSA-PSS operations in
//! [`crate::pkcs1`]. Exponentiation is plain `modpow` without CRT or
//! blinding and is not hardened against timing side channels; production
//! deployments are expected to plug in their own primitive.

use log::debug;
use num_bigint::BigUint;
use pkcsx_types::CryptoError;
use zeroize::Zeroizing;

use crate::ct::secret_zeroed;
use crate::provider::{RsaPrivatePrimitive, RsaPublicPrimitive};

/// OS2IP: octet string to non-negative integer (big-endian).
pub fn os2ip(bytes: &[u8]) -> BigUint {
    BigUint::from_bytes_be(bytes)
}

/// I2OSP: integer to an octet string of exactly `len` bytes.
///
/// Fails with [`CryptoError::BadLength`] ("integer too large") when
/// `x >= 256^len`.
pub fn i2osp(x: &BigUint, len: usize) -> Result<Vec<u8>, CryptoError> {
    let mut out = vec![0u8; len];
    i2osp_into(x, &mut out)?;
    Ok(out)
}

/// I2OSP into a caller buffer, overwriting all of it.
pub(crate) fn i2osp_into(x: &BigUint, out: &mut [u8]) -> Result<(), CryptoError> {
    let bytes = Zeroizing::new(x.to_bytes_be());
    // to_bytes_be() of zero is [0]
    let digits = if x.bits() == 0 { &bytes[..0] } else { &bytes[..] };
    if digits.len() > out.len() {
        return Err(CryptoError::BadLength);
    }
    let (pad, tail) = out.split_at_mut(out.len() - digits.len());
    pad.fill(0);
    tail.copy_from_slice(digits);
    Ok(())
}

fn parse_modulus(n: &[u8]) -> Result<(BigUint, usize), CryptoError> {
    if n.is_empty() {
        return Err(CryptoError::NullOrEmptyInput);
    }
    let n = os2ip(n);
    if n.bits() < 2 || !n.bit(0) {
        debug!("rsa: modulus must be odd and greater than 1");
        return Err(CryptoError::InvalidKey);
    }
    let bits = n.bits() as usize;
    Ok((n, bits))
}

fn parse_exponent(x: &[u8], n: &BigUint) -> Result<BigUint, CryptoError> {
    if x.is_empty() {
        return Err(CryptoError::NullOrEmptyInput);
    }
    let x = os2ip(x);
    if x.bits() == 0 || &x >= n {
        return Err(CryptoError::InvalidKey);
    }
    Ok(x)
}

/// Shared RSAEP / RSADP body: `out = input^exp mod n` over k-byte strings.
fn apply(input: &[u8], exp: &BigUint, n: &BigUint, out: &mut [u8]) -> Result<(), CryptoError> {
    if input.len() != out.len() {
        return Err(CryptoError::BadLength);
    }
    let m = os2ip(input);
    if &m >= n {
        // "representative out of range"
        return Err(CryptoError::CryptoFailure);
    }
    i2osp_into(&m.modpow(exp, n), out)
}

/// An RSA public key (n, e).
#[derive(Clone)]
pub struct RsaPublicKey {
    n: BigUint,
    e: BigUint,
    /// Key size in bits.
    bits: usize,
}

impl std::fmt::Debug for RsaPublicKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPublicKey")
            .field("bits", &self.bits)
            .finish()
    }
}

impl RsaPublicKey {
    /// Create an RSA public key from modulus and exponent (big-endian bytes).
    pub fn new(n: &[u8], e: &[u8]) -> Result<Self, CryptoError> {
        let (n, bits) = parse_modulus(n)?;
        let e = parse_exponent(e, &n)?;
        if !e.bit(0) {
            return Err(CryptoError::InvalidKey);
        }
        Ok(RsaPublicKey { n, e, bits })
    }

    /// Return the key size in bits.
    pub fn bits(&self) -> usize {
        self.bits
    }

    /// Return the modulus as big-endian bytes.
    pub fn n_bytes(&self) -> Vec<u8> {
        self.n.to_bytes_be()
    }

    /// Return the public exponent as big-endian bytes.
    pub fn e_bytes(&self) -> Vec<u8> {
        self.e.to_bytes_be()
    }
}

impl RsaPublicPrimitive for RsaPublicKey {
    fn modulus_bits(&self) -> usize {
        self.bits
    }

    fn public_op(&self, input: &[u8]) -> Result<Vec<u8>, CryptoError> {
        let mut out = vec![0u8; self.modulus_len()];
        apply(input, &self.e, &self.n, &mut out)?;
        Ok(out)
    }
}

/// An RSA private key in (n, e, d) form.
///
/// d is kept as a wiped byte string and only expanded to an integer for
/// the duration of one operation.
#[derive(Clone)]
pub struct RsaPrivateKey {
    public: RsaPublicKey,
    d: Zeroizing<Vec<u8>>,
}

impl std::fmt::Debug for RsaPrivateKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RsaPrivateKey")
            .field("bits", &self.public.bits)
            .finish()
    }
}

impl RsaPrivateKey {
    /// Create an RSA private key from its components (big-endian bytes).
    pub fn new(n: &[u8], e: &[u8], d: &[u8]) -> Result<Self, CryptoError> {
        let public = RsaPublicKey::new(n, e)?;
        let d_int = parse_exponent(d, &public.n)?;
        Ok(RsaPrivateKey {
            public,
            d: Zeroizing::new(d_int.to_bytes_be()),
        })
    }

    /// Extract the corresponding public key.
    pub fn public_key(&self) -> RsaPublicKey {
        self.public.clone()
    }

    /// Return the key size in bits.
    pub fn bits(&self) -> usize {
        self.public.bits
    }
}

impl RsaPrivatePrimitive for RsaPrivateKey {
    fn modulus_bits(&self) -> usize {
        self.public.bits
    }

    // The BigUint temporaries (d, the input and the power) are not wiped:
    // num-bigint has no zeroizing storage. Byte-level copies are.
    fn private_op(&self, input: &[u8]) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
        let mut out = secret_zeroed(self.modulus_len())?;
        let d = os2ip(&self.d);
        apply(input, &d, &self.public.n, &mut out)?;
        Ok(out)
    }
}
