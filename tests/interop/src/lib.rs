//! Integration tests for pkcsx.
//! End-to-end RSA-OAEP / RSA-PSS scenarios across the crates.

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicUsize, Ordering};

    use pkcsx_crypto::pkcs1::{
        rsaes_oaep_decrypt, rsaes_oaep_encrypt, rsassa_pss_sign, rsassa_pss_verify,
    };
    use pkcsx_crypto::pkcs5::{pbes2_key, PBES2_DEFAULT_PRF};
    use pkcsx_crypto::provider::{Digest, HashAlgorithm};
    use pkcsx_crypto::random::SystemRandom;
    use pkcsx_crypto::rsa::{RsaPrivateKey, RsaPublicKey};
    use pkcsx_types::{CryptoError, HashAlgId};

    fn hex(s: &str) -> Vec<u8> {
        (0..s.len())
            .step_by(2)
            .map(|i| u8::from_str_radix(&s[i..i + 2], 16).unwrap())
            .collect()
    }

    // A valid RSA-2048 key (NOT for production use).
    fn rsa_2048() -> (RsaPublicKey, RsaPrivateKey) {
        let n = hex(
            "00d397b84d98a4c26138ed1b695a8106ead91d553bf06041b62d3fdc50a041e2\
             22b8f4529689c1b82c5e71554f5dd69fa2f4b6158cf0dbeb57811a0fc327e1f2\
             8e74fe74d3bc166c1eabdc1b8b57b934ca8be5b00b4f29975bcc99acaf415b59\
             bb28a6782bb41a2c3c2976b3c18dbadef62f00c6bb226640095096c0cc60d22f\
             e7ef987d75c6a81b10d96bf292028af110dc7cc1bbc43d22adab379a0cd5d807\
             8cc780ff5cd6209dea34c922cf784f7717e428d75b5aec8ff30e5f0141510766\
             e2e0ab8d473c84e8710b2b98227c3db095337ad3452f19e2b9bfbccdd8148abf\
             6776fa552775e6e75956e45229ae5a9c46949bab1e622f0e48f56524a84ed3483b",
        );
        let e = hex("010001");
        let d = hex(
            "00c4e70c689162c94c660828191b52b4d8392115df486a9adbe831e458d73958\
             320dc1b755456e93701e9702d76fb0b92f90e01d1fe248153281fe79aa9763a9\
             2fae69d8d7ecd144de29fa135bd14f9573e349e45031e3b76982f583003826c5\
             52e89a397c1a06bd2163488630d92e8c2bb643d7abef700da95d685c941489a4\
             6f54b5316f62b5d2c3a7f1bbd134cb37353a44683fdc9d95d36458de22f6c440\
             57fe74a0a436c4308f73f4da42f35c47ac16a7138d483afc91e41dc3a1127382\
             e0c0f5119b0221b4fc639d6b9c38177a6de9b526ebd88c38d7982c07f98a0efd\
             877d508aae275b946915c02e2e1106d175d74ec6777f5e80d12c053d9c7be1e341",
        );
        let public = RsaPublicKey::new(&n, &e).unwrap();
        let private = RsaPrivateKey::new(&n, &e, &d).unwrap();
        (public, private)
    }

    // -------------------------------------------------------
    // 1. RSA-2048 OAEP-SHA256 encrypt + decrypt
    // -------------------------------------------------------
    #[test]
    fn test_rsa_2048_oaep_sha256_roundtrip() {
        let (public, private) = rsa_2048();
        assert_eq!(public.bits(), 2048);

        let msg: Vec<u8> = (0u8..32).collect();
        let ct = rsaes_oaep_encrypt(&public, &HashAlgId::Sha256, &mut SystemRandom, &msg, b"")
            .unwrap();
        assert_eq!(ct.len(), 256);

        let pt = rsaes_oaep_decrypt(&private, &HashAlgId::Sha256, &ct, b"").unwrap();
        assert_eq!(&pt[..], &msg[..]);

        let mut tampered = ct.clone();
        tampered[100] ^= 0x01;
        assert_eq!(
            rsaes_oaep_decrypt(&private, &HashAlgId::Sha256, &tampered, b""),
            Err(CryptoError::CryptoFailure)
        );
    }

    // -------------------------------------------------------
    // 2. RSA-2048 PSS-SHA256 (sLen = 32) sign + verify
    // -------------------------------------------------------
    #[test]
    fn test_rsa_2048_pss_sha256_sign_verify() {
        let (public, private) = rsa_2048();
        let msg = [0xa5u8; 64];

        let sig =
            rsassa_pss_sign(&private, &HashAlgId::Sha256, &mut SystemRandom, &msg, 32).unwrap();
        assert_eq!(sig.len(), 256);
        assert!(rsassa_pss_verify(&public, &HashAlgId::Sha256, &msg, &sig, 32).unwrap());

        let mut altered = msg;
        altered[17] ^= 0x80;
        assert!(!rsassa_pss_verify(&public, &HashAlgId::Sha256, &altered, &sig, 32).unwrap());

        // wrong hash
        assert!(!rsassa_pss_verify(&public, &HashAlgId::Sha384, &msg, &sig, 32).unwrap());
    }

    // -------------------------------------------------------
    // 3. OpenSSL-produced RSA-512 PSS signature
    // -------------------------------------------------------
    #[test]
    fn test_openssl_pss_signature_verifies() {
        let n = hex(
            "b2990f49c47dfa8cd400ae6a4d1b8a3b6a13642b23f28b003bfb97790ade9a4c\
             c82b8b2a81747ddec08b6296e53a08c331687ef25c4bf4936ba1c0e6041e9d15",
        );
        let sig = hex(
            "95596fd310a2e7a2929d4a072e2b27cc06c2872c52f04acc0594f2c32e20d73e\
             6662b5952ba3939a666425e074668c3e92ebc6e6c044f3b4b42e8c660a379c69",
        );
        let public = RsaPublicKey::new(&n, &hex("010001")).unwrap();
        // SHA-256, maximum salt length: emLen - hLen - 2 = 30
        assert!(rsassa_pss_verify(&public, &HashAlgId::Sha256, b"testing", &sig, 30).unwrap());
    }

    // -------------------------------------------------------
    // 4. Password-derived key wrapped with RSA-OAEP
    // -------------------------------------------------------
    #[test]
    fn test_pbes2_key_wrapped_with_oaep() {
        let (public, private) = rsa_2048();
        let key = pbes2_key(b"correct horse", b"NaCl-NaCl", 1000, 32, &PBES2_DEFAULT_PRF).unwrap();
        assert_eq!(key.len(), 32);

        let label = b"wrapped-key";
        let ct =
            rsaes_oaep_encrypt(&public, &HashAlgId::Sha1, &mut SystemRandom, &key, label).unwrap();
        let unwrapped = rsaes_oaep_decrypt(&private, &HashAlgId::Sha1, &ct, label).unwrap();
        assert_eq!(&unwrapped[..], &key[..]);
    }

    // -------------------------------------------------------
    // 5. Caller-supplied hash capability
    // -------------------------------------------------------
    struct CountingSha256 {
        contexts: AtomicUsize,
    }

    impl HashAlgorithm for CountingSha256 {
        fn digest_size(&self) -> usize {
            32
        }

        fn block_size(&self) -> usize {
            64
        }

        fn new_digest(&self) -> Result<Box<dyn Digest>, CryptoError> {
            self.contexts.fetch_add(1, Ordering::Relaxed);
            HashAlgId::Sha256.new_digest()
        }
    }

    #[test]
    fn test_custom_hash_capability_interoperates() {
        let (public, private) = rsa_2048();
        let custom = CountingSha256 {
            contexts: AtomicUsize::new(0),
        };
        assert_eq!(custom.id(), None);

        let msg = b"signed with a caller-supplied hash";
        let sig = rsassa_pss_sign(&private, &custom, &mut SystemRandom, msg, 32).unwrap();
        assert!(custom.contexts.load(Ordering::Relaxed) > 0);

        // Interchangeable with the built-in SHA-256.
        assert!(rsassa_pss_verify(&public, &HashAlgId::Sha256, msg, &sig, 32).unwrap());
    }
}
