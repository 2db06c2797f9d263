#![no_main]

use libfuzzer_sys::fuzz_target;
use bertree::{Decoder, Mode};
use bertree::decode::GenericResolver;
use bertree::encode::Values;

fuzz_target!(|data: &[u8]| {
    for mode in [Mode::Ber, Mode::Lenient] {
        let decoder = Decoder::with_resolver(
            GenericResolver::Explicit
        ).with_mode(mode);
        if let Ok(value) = decoder.decode_slice(data) {
            let _ = value.to_string();

            // Re-encoding uses definite lengths and primitive strings which
            // must decode into the same tree.
            let encoded = value.to_vec();
            assert_eq!(encoded.len(), value.encoded_len());
            let decoded = decoder.decode_slice(&encoded).unwrap();
            assert_eq!(decoded.to_string(), value.to_string());
        }
    }
});
