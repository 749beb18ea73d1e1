//! EME-OAEP encoding and decoding (RFC 8017 §7.1).
//!
//! The hash function is supplied by the caller and is used both for the
//! label hash and for MGF1.

use log::debug;
use pkcsx_types::CryptoError;
use subtle::{Choice, ConditionallySelectable, ConstantTimeEq, ConstantTimeLess};
use zeroize::Zeroizing;

use super::mgf1::mgf1_xor;
use crate::ct::{secret_copy, secret_zeroed};
use crate::provider::{HashAlgorithm, RandomSource};

/// Largest message that fits a `k`-byte modulus with an `h_len`-byte hash.
pub fn max_message_len(k: usize, h_len: usize) -> Option<usize> {
    k.checked_sub(2 * h_len + 2)
}

/// EME-OAEP encoding (RFC 8017 §7.1.1 step 2).
///
/// Produces EM = 0x00 || maskedSeed || maskedDB of exactly `k` bytes.
/// All length checks happen before the seed is drawn.
pub fn encode(
    hash: &dyn HashAlgorithm,
    rng: &mut dyn RandomSource,
    k: usize,
    msg: &[u8],
    label: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let h_len = hash.digest_size();
    check_encode_params(h_len, k, msg)?;

    let mut seed = secret_zeroed(h_len)?;
    rng.fill_bytes(&mut seed)?;

    encode_with_seed(hash, k, msg, label, &seed)
}

fn check_encode_params(h_len: usize, k: usize, msg: &[u8]) -> Result<(), CryptoError> {
    let Some(max_len) = max_message_len(k, h_len) else {
        debug!("oaep: modulus of {k} bytes too small for {h_len}-byte hash");
        return Err(CryptoError::BadLength);
    };
    if msg.is_empty() {
        return Err(CryptoError::NullOrEmptyInput);
    }
    if msg.len() > max_len {
        debug!("oaep: message of {} bytes exceeds {max_len}", msg.len());
        return Err(CryptoError::BadLength);
    }
    Ok(())
}

/// Encoding with a caller-chosen seed (`seed.len()` must be hLen).
pub(crate) fn encode_with_seed(
    hash: &dyn HashAlgorithm,
    k: usize,
    msg: &[u8],
    label: &[u8],
    seed: &[u8],
) -> Result<Vec<u8>, CryptoError> {
    let h_len = hash.digest_size();
    check_encode_params(h_len, k, msg)?;
    if seed.len() != h_len {
        return Err(CryptoError::BadLength);
    }

    let l_hash = hash.hash(label)?;

    // Built in place; holds the plaintext DB until masked.
    let mut em = secret_zeroed(k)?;
    {
        let (_, rest) = em.split_at_mut(1);
        let (masked_seed, masked_db) = rest.split_at_mut(h_len);
        let db_len = masked_db.len();

        // DB = lHash || PS || 0x01 || M
        masked_db[..h_len].copy_from_slice(&l_hash);
        masked_db[db_len - msg.len() - 1] = 0x01;
        masked_db[db_len - msg.len()..].copy_from_slice(msg);

        // maskedDB = DB XOR MGF1(seed, k - hLen - 1)
        mgf1_xor(masked_db, seed, hash)?;

        // maskedSeed = seed XOR MGF1(maskedDB, hLen)
        masked_seed.copy_from_slice(seed);
        mgf1_xor(masked_seed, masked_db, hash)?;
    }

    Ok(std::mem::take(&mut *em))
}

/// EME-OAEP decoding (RFC 8017 §7.1.2 step 3).
///
/// Every content check (leading zero, label hash, separator, non-empty
/// message) is evaluated in constant time and any failure is reported as
/// [`CryptoError::CryptoFailure`].
pub fn decode(
    hash: &dyn HashAlgorithm,
    em: &[u8],
    label: &[u8],
) -> Result<Zeroizing<Vec<u8>>, CryptoError> {
    let h_len = hash.digest_size();
    let k = em.len();
    if h_len == 0 || k < 2 * h_len + 2 {
        return Err(CryptoError::CryptoFailure);
    }

    let l_hash = hash.hash(label)?;

    let mut buf = secret_copy(em)?;
    let (y, rest) = buf.split_at_mut(1);
    let (seed, db) = rest.split_at_mut(h_len);

    // seed = maskedSeed XOR MGF1(maskedDB, hLen)
    mgf1_xor(seed, db, hash)?;
    // DB = maskedDB XOR MGF1(seed, k - hLen - 1)
    mgf1_xor(db, seed, hash)?;

    let first_byte_is_zero = y[0].ct_eq(&0u8);
    let hash_matches = db[..h_len].ct_eq(&l_hash);

    // Locate the 0x01 separator after PS without branching on DB.
    let tail = &db[h_len..];
    let mut looking_for_index = Choice::from(1u8);
    let mut bad_padding = Choice::from(0u8);
    let mut index = 0u32;
    for (i, b) in tail.iter().enumerate() {
        let equals0 = b.ct_eq(&0u8);
        let equals1 = b.ct_eq(&1u8);
        index.conditional_assign(&(i as u32), looking_for_index & equals1);
        looking_for_index &= !equals1;
        bad_padding |= looking_for_index & !equals0;
    }
    // mLen = tail.len() - index - 1 must be positive
    let non_empty = (index + 1).ct_lt(&(tail.len() as u32));

    let valid = first_byte_is_zero & hash_matches & !bad_padding & !looking_for_index & non_empty;
    if !bool::from(valid) {
        return Err(CryptoError::CryptoFailure);
    }

    secret_copy(&tail[index as usize + 1..])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::SystemRandom;
    use pkcsx_types::HashAlgId;

    fn unhex(s: &str) -> Vec<u8> {
        hex::decode(s).unwrap()
    }

    const H_LEN: usize = 32;

    // SHA-1, k = 128, empty label, fixed seed
    #[test]
    fn test_oaep_known_encoding_sha1() {
        let msg = unhex("6628194e12073db03ba94cda9ef9532397d50dba79b987004afefe34");
        let seed = unhex("18b776ea21069d69776a33e96bad48e1dda0a5ef");
        let expected = unhex(
            "001016e93a98ac3af3a8c48fc01e87bd7000db8bdf691f90e4dbabb03f760037\
             65f55b7ed7a202635ea92feda9465ec40f3e0f64b8b0e444956245c5d5d068cb\
             0b1deca88b2f99ae0df4e80f017c595cdba4c92f2f46f25bdbf352beb93766d2\
             4554106f42d9326d59339ca24f392e738c703dc876e402ee16542095b77a6994",
        );

        let em = encode_with_seed(&HashAlgId::Sha1, 128, &msg, b"", &seed).unwrap();
        assert_eq!(em, expected);

        let recovered = decode(&HashAlgId::Sha1, &em, b"").unwrap();
        assert_eq!(&recovered[..], &msg[..]);
    }

    #[test]
    fn test_oaep_encode_structure() {
        let em = encode(&HashAlgId::Sha256, &mut SystemRandom, 128, b"OAEP test", b"").unwrap();
        assert_eq!(em.len(), 128);
        assert_eq!(em[0], 0x00);
    }

    #[test]
    fn test_oaep_message_too_long() {
        let k = 128;
        // max = k - 2*H_LEN - 2 = 62
        let long_msg = vec![0xAA; 63];
        assert_eq!(
            encode(&HashAlgId::Sha256, &mut SystemRandom, k, &long_msg, b""),
            Err(CryptoError::BadLength)
        );

        let ok_msg = vec![0xAA; 62];
        let em = encode(&HashAlgId::Sha256, &mut SystemRandom, k, &ok_msg, b"").unwrap();
        assert_eq!(&decode(&HashAlgId::Sha256, &em, b"").unwrap()[..], &ok_msg[..]);
    }

    #[test]
    fn test_oaep_boundary_across_hashes() {
        for (hash, k) in [
            (HashAlgId::Sha1, 64usize),
            (HashAlgId::Sha1, 128),
            (HashAlgId::Sha256, 128),
            (HashAlgId::Sha256, 256),
            (HashAlgId::Sha512, 256),
        ] {
            let h = hash.output_size();
            let too_long = vec![0x42; k - 2 * h - 2 + 1];
            assert_eq!(
                encode(&hash, &mut SystemRandom, k, &too_long, b""),
                Err(CryptoError::BadLength),
                "{hash} k={k}"
            );
        }
    }

    #[test]
    fn test_oaep_modulus_too_small() {
        // SHA-512 needs k >= 130
        assert_eq!(
            encode(&HashAlgId::Sha512, &mut SystemRandom, 129, b"x", b""),
            Err(CryptoError::BadLength)
        );
    }

    #[test]
    fn test_oaep_empty_message_rejected() {
        assert_eq!(
            encode(&HashAlgId::Sha256, &mut SystemRandom, 128, b"", b""),
            Err(CryptoError::NullOrEmptyInput)
        );
    }

    #[test]
    fn test_oaep_roundtrip_with_label() {
        let msg = b"roundtrip check";
        let em = encode(&HashAlgId::Sha256, &mut SystemRandom, 128, msg, b"context").unwrap();
        let recovered = decode(&HashAlgId::Sha256, &em, b"context").unwrap();
        assert_eq!(&recovered[..], msg);
    }

    #[test]
    fn test_oaep_wrong_label_rejected() {
        let em = encode(&HashAlgId::Sha256, &mut SystemRandom, 128, b"data", b"label A").unwrap();
        assert_eq!(
            decode(&HashAlgId::Sha256, &em, b"label B"),
            Err(CryptoError::CryptoFailure)
        );
    }

    #[test]
    fn test_oaep_decode_too_short() {
        // Minimum: 2*H_LEN + 2 = 66 bytes
        let em = vec![0u8; 65];
        assert_eq!(
            decode(&HashAlgId::Sha256, &em, b""),
            Err(CryptoError::CryptoFailure)
        );
    }

    #[test]
    fn test_oaep_decode_bad_first_byte() {
        let mut em = encode(&HashAlgId::Sha256, &mut SystemRandom, 128, b"test", b"").unwrap();
        em[0] = 0x01;
        assert_eq!(
            decode(&HashAlgId::Sha256, &em, b""),
            Err(CryptoError::CryptoFailure)
        );
    }

    #[test]
    fn test_oaep_decode_tampered_masked_db() {
        let mut em = encode(&HashAlgId::Sha256, &mut SystemRandom, 128, b"data", b"").unwrap();
        em[1 + H_LEN + 5] ^= 0xFF;
        assert_eq!(
            decode(&HashAlgId::Sha256, &em, b""),
            Err(CryptoError::CryptoFailure)
        );
    }

    #[test]
    fn test_oaep_decode_rejects_empty_message() {
        // A DB whose separator is the last byte carries no message.
        let h_len = 20;
        let k = 64;
        let seed = [0x11u8; 20];
        let mut db = vec![0u8; k - h_len - 1];
        db[..h_len].copy_from_slice(&HashAlgId::Sha1.hash(b"").unwrap());
        let last = db.len() - 1;
        db[last] = 0x01;

        let mut em = vec![0u8; k];
        em[1 + h_len..].copy_from_slice(&db);
        mgf1_xor(&mut em[1 + h_len..], &seed, &HashAlgId::Sha1).unwrap();
        let masked_db = em[1 + h_len..].to_vec();
        em[1..1 + h_len].copy_from_slice(&seed);
        mgf1_xor(&mut em[1..1 + h_len], &masked_db, &HashAlgId::Sha1).unwrap();

        assert_eq!(decode(&HashAlgId::Sha1, &em, b""), Err(CryptoError::CryptoFailure));
    }

    #[test]
    fn test_oaep_randomness() {
        let msg = b"same message";
        let em1 = encode(&HashAlgId::Sha256, &mut SystemRandom, 128, msg, b"").unwrap();
        let em2 = encode(&HashAlgId::Sha256, &mut SystemRandom, 128, msg, b"").unwrap();
        assert_ne!(em1, em2, "OAEP should be randomized");

        assert_eq!(&decode(&HashAlgId::Sha256, &em1, b"").unwrap()[..], msg);
        assert_eq!(&decode(&HashAlgId::Sha256, &em2, b"").unwrap()[..], msg);
    }
}
