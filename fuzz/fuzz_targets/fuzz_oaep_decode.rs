#![no_main]
use libfuzzer_sys::fuzz_target;
use pkcsx_crypto::pkcs1::oaep;
use pkcsx_crypto::HashAlgId;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    let (label_len, em) = data.split_at(1);
    let split = (label_len[0] as usize).min(em.len());
    let (label, em) = em.split_at(split);
    if let Ok(msg) = oaep::decode(&HashAlgId::Sha1, em, label) {
        assert!(msg.len() <= em.len() - 42);
    }
});
