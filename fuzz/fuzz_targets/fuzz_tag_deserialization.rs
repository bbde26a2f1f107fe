#![no_main]

use chameleon_hash::{ChameleonTag, P256};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(tag) = ChameleonTag::<P256>::from_bytes(data) {
        assert_eq!(tag.to_bytes(), data);
    }
});
