#![no_main]

use libfuzzer_sys::fuzz_target;
use bertree::Oid;
use bertree::decode::Pos;
use bertree::encode::PrimitiveContent;

fuzz_target!(|data: &[u8]| {
    let Ok(oid) = Oid::from_content(data, Pos::default()) else {
        return
    };
    let _ = oid.to_string();
    assert_eq!(oid.to_string().parse::<Oid>().unwrap(), oid);

    // Re-encoding drops redundant leading octets of sub-identifiers.
    let mut content = Vec::new();
    PrimitiveContent::write_encoded(&oid, &mut content).unwrap();
    assert!(content.len() <= data.len());
    assert_eq!(Oid::from_content(&content, Pos::default()).unwrap(), oid);
});
