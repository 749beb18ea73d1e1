//! HMAC (Hash-based Message Authentication Code) implementation.
//!
//! HMAC provides message authentication using a cryptographic hash function
//! combined with a secret key, as defined in RFC 2104. It is the PRF behind
//! PBKDF2.
//!
//! HMAC(K, m) = H((K' XOR opad) || H((K' XOR ipad) || m))
//!
//! where K' is the key padded/hashed to block size, ipad = 0x36, opad = 0x5c.

use log::debug;
use pkcsx_types::CryptoError;
use zeroize::Zeroizing;

use crate::ct::secret_zeroed;
use crate::provider::{Digest, HashAlgorithm, Mac};

const IPAD: u8 = 0x36;
const OPAD: u8 = 0x5c;

/// HMAC context over any [`HashAlgorithm`].
pub struct Hmac<'a> {
    hash: &'a dyn HashAlgorithm,
    /// Inner hash context (initialized with ipad-xored key).
    inner: Box<dyn Digest>,
    /// Outer hash context (initialized with opad-xored key).
    outer: Box<dyn Digest>,
    /// Processed key block, kept for reset.
    key_block: Zeroizing<Vec<u8>>,
    /// Set when loading the pads failed; cleared once they load again.
    poisoned: Option<CryptoError>,
}

impl<'a> Hmac<'a> {
    /// Create a new HMAC instance keyed with `key`.
    pub fn new(hash: &'a dyn HashAlgorithm, key: &[u8]) -> Result<Self, CryptoError> {
        let mut ctx = Self {
            hash,
            inner: hash.new_digest()?,
            outer: hash.new_digest()?,
            key_block: Zeroizing::new(Vec::new()),
            poisoned: None,
        };
        ctx.init(key)?;
        Ok(ctx)
    }

    /// One-shot HMAC computation.
    pub fn mac(
        hash: &'a dyn HashAlgorithm,
        key: &[u8],
        data: &[u8],
    ) -> Result<Vec<u8>, CryptoError> {
        let mut ctx = Self::new(hash, key)?;
        ctx.update(data)?;
        let mut out = vec![0u8; ctx.output_size()];
        ctx.finish(&mut out)?;
        Ok(out)
    }

    /// Derive the key block from `key` and load the pads.
    fn rekey(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        let block_size = self.hash.block_size();
        let output_size = self.hash.digest_size();

        // If key > block_size, hash it; otherwise pad with zeros
        let mut key_block = secret_zeroed(block_size)?;
        if key.len() > block_size {
            let mut hashed_key = secret_zeroed(output_size)?;
            self.inner.reset();
            self.inner.update(key)?;
            self.inner.finish(&mut hashed_key)?;
            key_block[..output_size].copy_from_slice(&hashed_key);
        } else {
            key_block[..key.len()].copy_from_slice(key);
        }
        self.key_block = key_block;

        self.load_pads()
    }

    /// Load the ipad/opad-xored key block into fresh inner and outer
    /// contexts. On failure the context stays poisoned until rekeyed.
    fn load_pads(&mut self) -> Result<(), CryptoError> {
        let result = self.try_load_pads();
        self.poisoned = result.as_ref().err().cloned();
        result
    }

    fn check_poisoned(&self) -> Result<(), CryptoError> {
        match &self.poisoned {
            Some(err) => Err(err.clone()),
            None => Ok(()),
        }
    }

    fn try_load_pads(&mut self) -> Result<(), CryptoError> {
        self.inner.reset();
        self.outer.reset();

        let mut pad = secret_zeroed(self.key_block.len())?;
        for (p, k) in pad.iter_mut().zip(self.key_block.iter()) {
            *p = k ^ IPAD;
        }
        self.inner.update(&pad)?;

        for (p, k) in pad.iter_mut().zip(self.key_block.iter()) {
            *p = k ^ OPAD;
        }
        self.outer.update(&pad)
    }
}

impl Mac for Hmac<'_> {
    fn output_size(&self) -> usize {
        self.hash.digest_size()
    }

    fn init(&mut self, key: &[u8]) -> Result<(), CryptoError> {
        let result = self.rekey(key);
        if let Err(err) = &result {
            self.poisoned = Some(err.clone());
        }
        result
    }

    fn update(&mut self, data: &[u8]) -> Result<(), CryptoError> {
        self.check_poisoned()?;
        self.inner.update(data)
    }

    fn finish(&mut self, out: &mut [u8]) -> Result<(), CryptoError> {
        self.check_poisoned()?;
        let mut inner_hash = secret_zeroed(self.hash.digest_size())?;
        self.inner.finish(&mut inner_hash)?;
        self.outer.update(&inner_hash)?;
        self.outer.finish(out)
    }

    fn reset(&mut self) {
        // A failed reload is reported by the next update or finish.
        if self.load_pads().is_err() {
            debug!("hmac: reloading the key pads failed");
        }
    }
}
