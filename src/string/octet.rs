//! A BER-encoded OCTET STRING.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::{fmt, ops};
use bytes::Bytes;
use crate::encode::{PrimitiveContent, Target};
use crate::tag::Tag;


//------------ OctetString ---------------------------------------------------

/// An octet string value.
///
/// The octets are kept in a [`Bytes`] value, so cloning is cheap and
/// decoding from a [`BytesSource`][crate::decode::BytesSource] doesn’t
/// copy a primitive string.
///
/// # BER Encoding
///
/// In the primitive form, the content octets are the string. The
/// constructed form contains a series of octet string segments, primitive
/// or constructed again, whose octets are joined. Since the joined octets
/// are new, decoding a constructed string always copies.
///
/// Encoding always uses the primitive form.
#[derive(Clone, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OctetString(Bytes);

impl OctetString {
    /// Creates an octet string atop the given octets.
    pub fn new(bytes: Bytes) -> Self {
        OctetString(bytes)
    }

    /// Returns a slice of the octets.
    pub fn as_slice(&self) -> &[u8] {
        self.0.as_ref()
    }

    /// Returns the octets as a bytes value.
    pub fn as_bytes(&self) -> &Bytes {
        &self.0
    }

    /// Converts the string into its octets.
    pub fn into_bytes(self) -> Bytes {
        self.0
    }
}


//--- From

impl From<Bytes> for OctetString {
    fn from(bytes: Bytes) -> Self {
        Self::new(bytes)
    }
}

impl From<Vec<u8>> for OctetString {
    fn from(vec: Vec<u8>) -> Self {
        Self::new(vec.into())
    }
}

impl From<&'static [u8]> for OctetString {
    fn from(slice: &'static [u8]) -> Self {
        Self::new(Bytes::from_static(slice))
    }
}


//--- Deref and AsRef

impl ops::Deref for OctetString {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_slice()
    }
}

impl AsRef<[u8]> for OctetString {
    fn as_ref(&self) -> &[u8] {
        self.as_slice()
    }
}


//--- PrimitiveContent

impl PrimitiveContent for &'_ OctetString {
    const TAG: Tag = Tag::OCTET_STRING;

    fn encoded_len(self) -> usize {
        self.0.len()
    }

    fn write_encoded<T: Target>(
        self, target: &mut T
    ) -> Result<(), T::Error> {
        target.write_all(self.0.as_ref())
    }
}


//--- Display and Debug

impl fmt::Display for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("'")?;
        for octet in self.as_slice() {
            write!(f, "{:02X}", octet)?;
        }
        f.write_str("'H")
    }
}

impl fmt::Debug for OctetString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_tuple("OctetString").field(&self.0).finish()
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::encode::Values;
    use super::*;

    #[test]
    fn encode() {
        let s = OctetString::from(b"foo".as_ref());
        assert_eq!(s.encode().to_vec(), b"\x04\x03foo");
        assert_eq!(s.encode_as(Tag::ctx(0)).to_vec(), b"\x80\x03foo");
        assert_eq!(OctetString::default().encode().to_vec(), b"\x04\x00");
    }

    #[test]
    fn display() {
        assert_eq!(
            OctetString::from(vec![0x0A, 0xBC]).to_string(), "'0ABC'H"
        );
        assert_eq!(OctetString::default().to_string(), "''H");
    }
}
