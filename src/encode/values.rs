//! Encoding complete values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::io;
use bytes::{Bytes, BytesMut};
use crate::length::Length;
use crate::tag::Tag;
use super::target::{IoTarget, Target, infallible};


//------------ Values --------------------------------------------------------

/// A type that encodes into complete values.
///
/// An implementing type produces zero or more values, each with its
/// identifier, length, and content octets. A [`Value`] produces exactly
/// one, a slice of values produces the content of a SEQUENCE.
///
/// The encoded length is always known before writing, so all values use
/// the definite length form.
///
/// [`Value`]: crate::Value
pub trait Values {
    /// Returns the number of octets written by `write_encoded`.
    fn encoded_len(&self) -> usize;

    /// Writes the encoded values to a target.
    fn write_encoded<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error>;


    //--- Provided methods

    /// Wraps the values into a constructed value with the given tag.
    fn explicit(self, tag: Tag) -> Constructed<Self>
    where Self: Sized {
        Constructed::new(tag, self)
    }

    /// Returns the encoded values in a new vec.
    fn to_vec(&self) -> Vec<u8> {
        let mut target = Vec::with_capacity(self.encoded_len());
        infallible(self.write_encoded(&mut target));
        target
    }

    /// Returns the encoded values as a bytes value.
    fn to_bytes(&self) -> Bytes {
        let mut target = BytesMut::with_capacity(self.encoded_len());
        infallible(self.write_encoded(&mut target));
        target.freeze()
    }

    /// Writes the encoded values to a blocking writer.
    fn write_to<W: io::Write>(&self, writer: W) -> Result<(), io::Error> {
        self.write_encoded(&mut IoTarget::new(writer))
    }
}


//--- Blanket impls

impl<V: Values + ?Sized> Values for &'_ V {
    fn encoded_len(&self) -> usize {
        (*self).encoded_len()
    }

    fn write_encoded<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error> {
        (*self).write_encoded(target)
    }
}

impl<V: Values> Values for [V] {
    fn encoded_len(&self) -> usize {
        self.iter().map(|item| item.encoded_len()).sum()
    }

    fn write_encoded<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error> {
        self.iter().try_for_each(|item| item.write_encoded(target))
    }
}


//------------ Constructed --------------------------------------------------

/// An encoder for a constructed value around other values.
#[derive(Clone, Debug)]
pub struct Constructed<V> {
    /// The tag with the constructed bit set.
    tag: Tag,

    /// The content.
    inner: V,
}

impl<V> Constructed<V> {
    /// Creates an encoder wrapping `inner` into a value tagged `tag`.
    ///
    /// The constructed bit of the tag is set if it isn’t already.
    pub fn new(tag: Tag, inner: V) -> Self {
        Constructed { tag: tag.constructed(), inner }
    }
}

impl<V: Values> Values for Constructed<V> {
    fn encoded_len(&self) -> usize {
        total_len(self.tag, self.inner.encoded_len())
    }

    fn write_encoded<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error> {
        write_header(target, self.tag, self.inner.encoded_len())?;
        self.inner.write_encoded(target)
    }
}


//============ Standard Functions ============================================

/// Returns the length of a complete value with `content_len` content octets.
pub fn total_len(tag: Tag, content_len: usize) -> usize {
    tag.encoded_len()
        + Length::Definite(content_len).encoded_len()
        + content_len
}

/// Writes the identifier and definite length octets of a value.
///
/// The tag is written as is, including its constructed bit.
pub fn write_header<T: Target>(
    target: &mut T, tag: Tag, content_len: usize,
) -> Result<(), T::Error> {
    tag.write_encoded(target)?;
    Length::Definite(content_len).write_encoded(target)
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::encode::PrimitiveContent;
    use super::*;

    #[test]
    fn explicit_wrapping() {
        let encoder = 5i64.encode().explicit(Tag::ctx(1));
        assert_eq!(encoder.encoded_len(), 5);
        assert_eq!(encoder.to_vec(), b"\xA1\x03\x02\x01\x05");
        assert_eq!(encoder.to_bytes().as_ref(), b"\xA1\x03\x02\x01\x05");
    }

    #[test]
    fn slices() {
        let items = [true.encode(), false.encode()];
        assert_eq!(items[..].encoded_len(), 6);
        assert_eq!(
            Constructed::new(Tag::SEQUENCE, &items[..]).to_vec(),
            b"\x30\x06\x01\x01\xFF\x01\x01\x00"
        );
    }

    #[test]
    fn headers() {
        assert_eq!(total_len(Tag::OCTET_STRING, 0), 2);
        assert_eq!(total_len(Tag::OCTET_STRING, 200), 203);
        let mut target = Vec::new();
        infallible(write_header(&mut target, Tag::OCTET_STRING, 200));
        assert_eq!(target, b"\x04\x81\xC8");
    }

    #[test]
    fn write_to_writer() {
        let mut out = Vec::new();
        ().encode().write_to(&mut out).unwrap();
        assert_eq!(out, b"\x05\x00");
    }
}
