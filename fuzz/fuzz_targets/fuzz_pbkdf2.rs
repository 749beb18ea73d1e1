#![no_main]
use libfuzzer_sys::fuzz_target;
use pkcsx_crypto::pkcs5::pbkdf2;
use pkcsx_crypto::HashAlgId;

fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }
    let dk_len = data[0] as usize;
    let split = (data[1] as usize).min(data.len() - 2);
    let (password, salt) = data[2..].split_at(split);
    if let Ok(dk) = pbkdf2(&HashAlgId::Sha256, password, salt, 1, dk_len) {
        assert_eq!(dk.len(), dk_len);
    }
});
