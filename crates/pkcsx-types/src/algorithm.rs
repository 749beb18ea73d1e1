use crate::error::CryptoError;

/// Hash algorithm identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashAlgId {
    Md5,
    Sha1,
    Sha224,
    Sha256,
    Sha384,
    Sha512,
}

impl HashAlgId {
    /// Digest output length in bytes (hLen).
    pub const fn output_size(self) -> usize {
        match self {
            HashAlgId::Md5 => 16,
            HashAlgId::Sha1 => 20,
            HashAlgId::Sha224 => 28,
            HashAlgId::Sha256 => 32,
            HashAlgId::Sha384 => 48,
            HashAlgId::Sha512 => 64,
        }
    }

    /// Internal compression block length in bytes.
    pub const fn block_size(self) -> usize {
        match self {
            HashAlgId::Md5
            | HashAlgId::Sha1
            | HashAlgId::Sha224
            | HashAlgId::Sha256 => 64,
            HashAlgId::Sha384 | HashAlgId::Sha512 => 128,
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            HashAlgId::Md5 => "MD5",
            HashAlgId::Sha1 => "SHA1",
            HashAlgId::Sha224 => "SHA224",
            HashAlgId::Sha256 => "SHA256",
            HashAlgId::Sha384 => "SHA384",
            HashAlgId::Sha512 => "SHA512",
        }
    }

    /// Map a PKCS#5 hashing-function code to an identifier.
    ///
    /// Codes: md2 = 2, md4 = 3, md5 = 4, sha1 = 5, sha256 = 11,
    /// sha384 = 12, sha512 = 13, sha224 = 14. MD2 and MD4 are recognised
    /// but not supported.
    pub fn from_pkcs5_id(id: u8) -> Result<Self, CryptoError> {
        match id {
            4 => Ok(HashAlgId::Md5),
            5 => Ok(HashAlgId::Sha1),
            11 => Ok(HashAlgId::Sha256),
            12 => Ok(HashAlgId::Sha384),
            13 => Ok(HashAlgId::Sha512),
            14 => Ok(HashAlgId::Sha224),
            _ => Err(CryptoError::UnsupportedHashAlgorithm),
        }
    }

    /// The PKCS#5 hashing-function code for this algorithm.
    pub const fn pkcs5_id(self) -> u8 {
        match self {
            HashAlgId::Md5 => 4,
            HashAlgId::Sha1 => 5,
            HashAlgId::Sha256 => 11,
            HashAlgId::Sha384 => 12,
            HashAlgId::Sha512 => 13,
            HashAlgId::Sha224 => 14,
        }
    }
}

impl std::fmt::Display for HashAlgId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [HashAlgId; 6] = [
        HashAlgId::Md5,
        HashAlgId::Sha1,
        HashAlgId::Sha224,
        HashAlgId::Sha256,
        HashAlgId::Sha384,
        HashAlgId::Sha512,
    ];

    #[test]
    fn test_pkcs5_id_mapping() {
        for id in ALL {
            assert_eq!(HashAlgId::from_pkcs5_id(id.pkcs5_id()), Ok(id));
        }
    }

    #[test]
    fn test_md2_md4_unsupported() {
        assert_eq!(
            HashAlgId::from_pkcs5_id(2),
            Err(CryptoError::UnsupportedHashAlgorithm)
        );
        assert_eq!(
            HashAlgId::from_pkcs5_id(3),
            Err(CryptoError::UnsupportedHashAlgorithm)
        );
        assert!(HashAlgId::from_pkcs5_id(0xff).is_err());
    }

    #[test]
    fn test_sizes() {
        assert_eq!(HashAlgId::Sha1.output_size(), 20);
        assert_eq!(HashAlgId::Sha384.block_size(), 128);
        assert_eq!(HashAlgId::Md5.block_size(), 64);
        assert_eq!(HashAlgId::Sha224.to_string(), "SHA224");
    }
}
