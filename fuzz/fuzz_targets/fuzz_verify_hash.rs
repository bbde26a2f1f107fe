#![no_main]

use chameleon_hash::{ChameleonHasher, ChameleonTag, PublicKey, P256, TAG_BYTES};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if data.len() < 64 + TAG_BYTES {
        return;
    }

    let mut x = [0u8; 32];
    let mut y = [0u8; 32];
    x.copy_from_slice(&data[..32]);
    y.copy_from_slice(&data[32..64]);

    if let Ok(public_key) = PublicKey::<P256>::from_coordinates(&x, &y) {
        if let Ok(tag) = ChameleonTag::<P256>::from_bytes(&data[64..64 + TAG_BYTES]) {
            let _ = ChameleonHasher::new(public_key).verify_hash(&data[64 + TAG_BYTES..], &tag);
        }
    }
});
