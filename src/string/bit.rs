//! BER-encoded bit strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use bytes::Bytes;
use crate::decode::{DecodeError, Pos};
use crate::encode::{PrimitiveContent, Target};
use crate::tag::Tag;


//------------ BitString -----------------------------------------------------

/// A bit string value.
///
/// Bit strings are a sequence of bits. Unlike
/// [`OctetString`][crate::string::OctetString]s, they do not need to contain
/// a multiple of eight bits.
///
/// There are two types of methods for accessing the data in a bit string.
/// Methods starting with `bit` operate on the individual bits while those
/// prefixed with `octet` access entire octets and ignore the fact that there
/// may be unused bits in the final octet. Unused bits are always zero.
///
/// # BER Encoding
///
/// When encoded in BER, bit strings can either be a primitive or
/// constructed value.
///
/// If encoded as a primitive value, the first octet of the
/// content contains the number of unused bits in the last octet and the
/// following octets contain the bits with the first bit in the most
/// significant bit of the octet.
///
/// In the constructed encoding, the bit string is represented as a sequence
/// of bit strings which in turn may either be constructed or primitive
/// encodings. The bits of all segments are concatenated in order. Values are
/// only ever encoded in primitive form.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct BitString {
    /// The number of unused bits in the last byte.
    unused: u8,

    /// The bytes of the bit string.
    bits: Bytes,
}

impl BitString {
    /// Creates a new bit string.
    ///
    /// Returns `None` if `unused` is larger than 7 or if it isn’t zero for
    /// empty `bits`. Unused bits in the last octet are cleared.
    pub fn new(unused: u8, bits: Bytes) -> Option<Self> {
        if unused > 7 || (bits.is_empty() && unused != 0) {
            return None
        }
        let mask = (1u8 << unused) - 1;
        let bits = match bits.last() {
            Some(&last) if last & mask != 0 => {
                let mut vec = Vec::from(bits.as_ref());
                if let Some(last) = vec.last_mut() {
                    *last &= !mask
                }
                vec.into()
            }
            _ => bits
        };
        Some(BitString { unused, bits })
    }

    /// Creates a bit string from a sequence of bits.
    pub fn from_bits(bits: impl IntoIterator<Item = bool>) -> Self {
        let mut res = BitStringBuilder::new();
        bits.into_iter().for_each(|bit| res.push(bit));
        res.finish()
    }

    /// Returns the value of the given bit.
    ///
    /// Bits past the end of the string are `false`.
    pub fn bit(&self, bit: usize) -> bool {
        if bit >= self.bit_len() {
            return false
        }
        self.bits[bit >> 3] & (0x80 >> (bit & 7)) != 0
    }

    /// Returns the number of bits in the bit string.
    pub fn bit_len(&self) -> usize {
        (self.bits.len() << 3) - usize::from(self.unused)
    }

    /// Returns an iterator over the bits.
    pub fn bits(&self) -> impl Iterator<Item = bool> + '_ {
        (0..self.bit_len()).map(|idx| self.bit(idx))
    }

    /// Returns the number of unused bits in the last octet.
    pub fn unused(&self) -> u8 {
        self.unused
    }

    /// Returns the number of octets in the bit string.
    pub fn octet_len(&self) -> usize {
        self.bits.len()
    }

    /// Returns an iterator over the octets in the bit string.
    pub fn octets(&self) -> BitStringIter<'_> {
        BitStringIter(self.bits.iter())
    }

    /// Returns a slice of the octets in the bit string.
    pub fn octet_slice(&self) -> &[u8] {
        self.bits.as_ref()
    }

    /// Returns a bytes value of the octets of the bit string.
    pub fn octet_bytes(&self) -> Bytes {
        self.bits.clone()
    }
}

/// # Decoding
///
impl BitString {
    /// Parses the content octets of a primitive bit string value.
    ///
    /// The `pos` is the position of the content in the source and is used
    /// for errors only.
    pub fn from_content(
        mut content: Bytes, pos: Pos
    ) -> Result<Self, DecodeError> {
        let Some(&unused) = content.first() else {
            return Err(DecodeError::malformed(
                "bit string without unused bits octet", pos
            ))
        };
        let bits = content.split_off(1);
        BitString::new(unused, bits).ok_or_else(|| {
            DecodeError::malformed("invalid unused bits in bit string", pos)
        })
    }
}


//--- PrimitiveContent

impl PrimitiveContent for &'_ BitString {
    const TAG: Tag = Tag::BIT_STRING;

    fn encoded_len(self) -> usize {
        self.bits.len() + 1
    }

    fn write_encoded<T: Target>(
        self,
        target: &mut T
    ) -> Result<(), T::Error> {
        target.write_u8(self.unused)?;
        target.write_all(self.bits.as_ref())
    }
}


//--- Display

impl fmt::Display for BitString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("'")?;
        for bit in self.bits() {
            f.write_str(if bit { "1" } else { "0" })?;
        }
        f.write_str("'B")
    }
}


//------------ BitStringIter -------------------------------------------------

/// An iterator over the octets in the bit string.
#[derive(Clone, Debug)]
pub struct BitStringIter<'a>(std::slice::Iter<'a, u8>);

impl Iterator for BitStringIter<'_> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        self.0.next().copied()
    }
}


//------------ BitStringBuilder ----------------------------------------------

/// Assembles a bit string bit by bit.
///
/// This is used to join the segments of a constructed bit string, which
/// don’t need to end on an octet boundary.
#[derive(Clone, Debug, Default)]
pub struct BitStringBuilder {
    octets: Vec<u8>,
    bit_len: usize,
}

impl BitStringBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of bits added so far.
    pub fn bit_len(&self) -> usize {
        self.bit_len
    }

    /// Appends a single bit.
    pub fn push(&mut self, bit: bool) {
        if self.bit_len & 7 == 0 {
            self.octets.push(0)
        }
        if bit {
            if let Some(last) = self.octets.last_mut() {
                *last |= 0x80 >> (self.bit_len & 7)
            }
        }
        self.bit_len += 1;
    }

    /// Appends all bits of a bit string.
    pub fn append(&mut self, bits: &BitString) {
        if self.bit_len & 7 == 0 {
            self.octets.extend_from_slice(bits.octet_slice());
            self.bit_len += bits.bit_len();
        }
        else {
            bits.bits().for_each(|bit| self.push(bit))
        }
    }

    /// Converts the builder into the final bit string.
    pub fn finish(self) -> BitString {
        BitString {
            unused: ((8 - (self.bit_len & 7)) & 7) as u8,
            bits: self.octets.into(),
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::encode::Values;
    use super::*;

    fn from_content(
        content: &'static [u8]
    ) -> Result<BitString, DecodeError> {
        BitString::from_content(Bytes::from_static(content), Pos::default())
    }

    #[test]
    fn decode() {
        let bits = from_content(b"\x00").unwrap();
        assert_eq!(bits.bit_len(), 0);
        let bits = from_content(b"\x07\x80").unwrap();
        assert_eq!(bits.bit_len(), 1);
        assert!(bits.bit(0));
        let bits = from_content(b"\x04\xA5\xF0").unwrap();
        assert_eq!(bits.bit_len(), 12);
        assert_eq!(bits.to_string(), "'101001011111'B");
        let bits = from_content(b"\x00\xFF").unwrap();
        assert_eq!(bits.bit_len(), 8);
        assert_eq!(bits.unused(), 0);

        // Padding bits are cleared.
        let bits = from_content(b"\x04\xA5\xFF").unwrap();
        assert_eq!(bits.octet_slice(), b"\xA5\xF0");

        assert!(matches!(
            from_content(b""), Err(DecodeError::Malformed { .. })
        ));
        assert!(matches!(
            from_content(b"\x08\x00"), Err(DecodeError::Malformed { .. })
        ));
        assert!(matches!(
            from_content(b"\x03"), Err(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn encode() {
        let bits = BitString::from_bits([true, false, true]);
        assert_eq!(bits.unused(), 5);
        assert_eq!(bits.encode().to_vec(), b"\x03\x02\x05\xA0");
        let bits = BitString::from_bits(std::iter::empty());
        assert_eq!(bits.encode().to_vec(), b"\x03\x01\x00");
        let bits = BitString::from_bits([true; 16]);
        assert_eq!(bits.encode().to_vec(), b"\x03\x03\x00\xFF\xFF");
    }

    #[test]
    fn builder() {
        let mut builder = BitStringBuilder::new();
        builder.append(&BitString::from_bits([true, true, false]));
        builder.append(&BitString::from_bits([true; 6]));
        builder.append(
            &BitString::new(0, Bytes::from_static(b"\x0F")).unwrap()
        );
        assert_eq!(builder.bit_len(), 17);
        let bits = builder.finish();
        assert_eq!(bits.bit_len(), 17);
        assert_eq!(bits.octet_slice(), b"\xDF\x87\x80");
        assert_eq!(bits.unused(), 7);
    }
}
