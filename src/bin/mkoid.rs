//! Generates the encoding of object identifiers.
//!
//! Provide a sequence of object identifiers in ‘dot integer’ notation and
//! you will receive the content octets of each as an array as well as the
//! complete encoded value in hex.

use std::env;
use bertree::Oid;
use bertree::encode::{PrimitiveContent, Values};

fn process_one(arg: &str) -> Result<(), bertree::OidError> {
    let oid: Oid = arg.parse()?;
    let encoded = oid.encode().to_vec();

    // The content starts after the tag and length octets.
    let content = &encoded[encoded.len() - oid.encoded_len()..];
    let mut first = true;
    print!("[");
    for item in content {
        if !first { print!(", "); }
        else { first = false }
        print!("{}", item);
    }
    print!("]  ");
    for item in &encoded {
        print!("{:02X}", item);
    }
    println!();

    Ok(())
}

fn main() {
    for arg in env::args().skip(1) {
        if let Err(err) = process_one(arg.as_ref()) {
            println!("{}: {}.", arg, err)
        }
    }
}
