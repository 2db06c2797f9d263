#![no_main]

use libfuzzer_sys::fuzz_target;
use bertree::int;

fuzz_target!(|data: &[u8]| {
    if let Some(value) = int::i64_from_content(data) {
        let content = int::content_octets(value);
        assert!(content.as_ref().len() <= data.len().max(1));
        assert_eq!(int::i64_from_content(content.as_ref()), Some(value));
    }
});
