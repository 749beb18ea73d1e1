#![no_main]
use libfuzzer_sys::fuzz_target;
use pkcsx_crypto::pkcs1::pss;
use pkcsx_crypto::HashAlgId;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let salt_len = data[0] as usize;
    let em = &data[1..];
    let em_bits = em.len() * 8 - (data[0] as usize & 7);
    let _ = pss::verify(&HashAlgId::Sha256, b"fuzz", em, em_bits, salt_len);
});
