//! BER encoded integers.
//!
//! INTEGER and ENUMERATED values share the same content encoding: a
//! variable-length, big-endian, two’s complement octet sequence. Thus, the
//! most-significant bit of the first octet serves as the sign bit.
//!
//! Values are represented as `i64`. This module provides the functions to
//! convert between content octets and the native integer and implements
//! [`PrimitiveContent`] for `i64`.

use crate::encode::{PrimitiveContent, Target};
use crate::tag::Tag;


//------------ Decoding ------------------------------------------------------

/// Converts the content octets of an integer value into an `i64`.
///
/// BER permits redundant leading octets, so any number of octets is
/// accepted as long as the value fits. Empty content is zero.
///
/// Returns `None` if the value doesn’t fit into an `i64`.
pub fn i64_from_content(content: &[u8]) -> Option<i64> {
    let (&first, tail) = match content.split_first() {
        Some(some) => some,
        None => return Some(0),
    };

    // Sign-extend the first octet, then shift the others in.
    let mut res = i64::from(first as i8);
    for &octet in tail {
        res = res.checked_mul(0x100)?.checked_add(i64::from(octet))?;
    }
    Some(res)
}


//------------ Encoding ------------------------------------------------------

/// Returns the index of the first octet of the minimal encoding.
///
/// An octet is redundant if it and the top bit of the following octet are
/// all zeros or all ones.
fn start_idx(octets: &[u8; 8]) -> usize {
    let mut idx = 0;
    while idx < 7 {
        let next = octets[idx + 1] & 0x80;
        match octets[idx] {
            0x00 if next == 0 => idx += 1,
            0xFF if next != 0 => idx += 1,
            _ => break
        }
    }
    idx
}

/// Returns the minimal two’s complement content octets for `value`.
///
/// Zero is encoded as a single 0x00 octet. A positive value whose leading
/// octet would have the top bit set receives a 0x00 guard octet.
pub fn content_octets(value: i64) -> ContentOctets {
    let octets = value.to_be_bytes();
    ContentOctets { start: start_idx(&octets), octets }
}

/// Returns the minimal unsigned content octets for `value`.
///
/// Unlike [`content_octets`], no guard octet is added. This is used for the
/// mantissa of binary REAL values.
pub(crate) fn unsigned_octets(value: u64) -> ContentOctets {
    let octets = value.to_be_bytes();
    let start = (value.leading_zeros() / 8).min(7) as usize;
    ContentOctets { start, octets }
}


//------------ ContentOctets -------------------------------------------------

/// The minimal encoding of a 64 bit integer.
#[derive(Clone, Copy, Debug)]
pub struct ContentOctets {
    octets: [u8; 8],
    start: usize,
}

impl AsRef<[u8]> for ContentOctets {
    fn as_ref(&self) -> &[u8] {
        &self.octets[self.start..]
    }
}


//--- PrimitiveContent

impl PrimitiveContent for i64 {
    const TAG: Tag = Tag::INTEGER;

    fn encoded_len(self) -> usize {
        content_octets(self).as_ref().len()
    }

    fn write_encoded<T: Target>(
        self,
        target: &mut T
    ) -> Result<(), T::Error> {
        target.write_all(content_octets(self).as_ref())
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::encode::Values;
    use super::*;

    #[test]
    fn decode_content() {
        assert_eq!(i64_from_content(b""), Some(0));
        assert_eq!(i64_from_content(b"\x00"), Some(0));
        assert_eq!(i64_from_content(b"\x7F"), Some(127));
        assert_eq!(i64_from_content(b"\x80"), Some(-128));
        assert_eq!(i64_from_content(b"\xFF"), Some(-1));
        assert_eq!(i64_from_content(b"\x00\x80"), Some(128));
        assert_eq!(i64_from_content(b"\x01\x2C"), Some(300));
        assert_eq!(i64_from_content(b"\xFF\x00"), Some(-256));
        assert_eq!(i64_from_content(b"\x80\xFF"), Some(-32513));
        assert_eq!(i64_from_content(b"\x00\x00\x01"), Some(1));
        assert_eq!(i64_from_content(b"\xFF\xFF\xFF"), Some(-1));
        assert_eq!(
            i64_from_content(b"\x80\x00\x00\x00\x00\x00\x00\x00"),
            Some(i64::MIN)
        );
        assert_eq!(
            i64_from_content(b"\x7F\xFF\xFF\xFF\xFF\xFF\xFF\xFF"),
            Some(i64::MAX)
        );
        assert_eq!(
            i64_from_content(b"\x00\x80\x00\x00\x00\x00\x00\x00\x00"),
            None
        );
        assert_eq!(
            i64_from_content(b"\xFF\x7F\xFF\xFF\xFF\xFF\xFF\xFF\xFF"),
            None
        );
    }

    #[test]
    fn encode_content() {
        fn step(value: i64, expected: &[u8]) {
            assert_eq!(content_octets(value).as_ref(), expected, "{value}");
            assert_eq!(value.encoded_len(), expected.len());
        }

        step(0, b"\x00");
        step(1, b"\x01");
        step(127, b"\x7F");
        step(128, b"\x00\x80");
        step(255, b"\x00\xFF");
        step(256, b"\x01\x00");
        step(300, b"\x01\x2C");
        step(-1, b"\xFF");
        step(-128, b"\x80");
        step(-129, b"\xFF\x7F");
        step(-256, b"\xFF\x00");
        step(i64::MAX, b"\x7F\xFF\xFF\xFF\xFF\xFF\xFF\xFF");
        step(i64::MIN, b"\x80\x00\x00\x00\x00\x00\x00\x00");
    }

    #[test]
    fn encode_value() {
        assert_eq!(300i64.encode().to_vec(), b"\x02\x02\x01\x2C");
        assert_eq!(
            2i64.encode_as(Tag::ENUMERATED).to_vec(), b"\x0A\x01\x02"
        );
    }

    #[test]
    fn unsigned() {
        assert_eq!(unsigned_octets(0).as_ref(), b"\x00");
        assert_eq!(unsigned_octets(0x80).as_ref(), b"\x80");
        assert_eq!(unsigned_octets(0x1_0000).as_ref(), b"\x01\x00\x00");
    }

    #[test]
    fn round_trip_32bit_boundaries() {
        for &value in &[
            0i64, 1, -1, 127, -128, 128, -129, 32767, -32768, 32768,
            i64::from(i32::MAX), i64::from(i32::MIN)
        ] {
            assert_eq!(
                i64_from_content(content_octets(value).as_ref()),
                Some(value)
            );
        }
    }
}
