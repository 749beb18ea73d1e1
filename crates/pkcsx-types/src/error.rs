/// Cryptographic operation errors.
///
/// Encoding and derivation routines report *which* static parameter was
/// wrong. Decoding routines never do: every content-dependent failure of an
/// OAEP decode or RSA decryption is reported as [`CryptoError::CryptoFailure`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CryptoError {
    // General errors
    #[error("null or empty input")]
    NullOrEmptyInput,
    #[error("bad length")]
    BadLength,
    #[error("unsupported hash algorithm")]
    UnsupportedHashAlgorithm,
    #[error("memory allocation failed")]
    AllocationFailure,
    #[error("cryptographic failure")]
    CryptoFailure,
    #[error("random source failed")]
    RandomFailure,

    // Buffer errors
    #[error("buffer length not enough: need {need}, got {got}")]
    BufferTooSmall { need: usize, got: usize },

    // RSA errors
    #[error("rsa: invalid key")]
    InvalidKey,

    // KDF errors
    #[error("kdf: iteration count must be at least 1")]
    BadIterationCount,
    #[error("kdf: derived key too long")]
    DerivedKeyTooLong,
}
