//! Encoding of primitive values.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::tag::Tag;
use super::target::{Target, infallible};
use super::values::{Values, total_len, write_header};


//------------ PrimitiveContent ----------------------------------------------

/// The content of a primitive value.
///
/// Types implementing this trait know their content octets and the tag of
/// their natural encoding. Through [`encode`] and [`encode_as`] they then
/// become complete values, the latter with a different tag as needed for
/// implicit tagging.
///
/// Implementing types must be `Copy` so the [`Primitive`] encoder can hold
/// them by value. Owned types such as [`Oid`] or [`OctetString`] implement
/// the trait on a reference.
///
/// [`encode`]: Self::encode
/// [`encode_as`]: Self::encode_as
/// [`Oid`]: crate::Oid
/// [`OctetString`]: crate::OctetString
pub trait PrimitiveContent: Copy {
    /// The universal tag of the type.
    const TAG: Tag;

    /// Returns the number of content octets.
    fn encoded_len(self) -> usize;

    /// Writes the content octets to a target.
    fn write_encoded<T: Target>(
        self, target: &mut T
    ) -> Result<(), T::Error>;


    //--- Provided methods

    /// Returns an encoder for a value with the universal tag.
    fn encode(self) -> Primitive<Self> {
        self.encode_as(Self::TAG)
    }

    /// Returns an encoder for a value with the given tag.
    ///
    /// The content stays the same, only the identifier octet changes.
    fn encode_as(self, tag: Tag) -> Primitive<Self> {
        Primitive { tag, prim: self }
    }

    /// Returns the content octets in a new vec.
    fn encode_to_vec(self) -> Vec<u8> {
        let mut res = Vec::with_capacity(self.encoded_len());
        infallible(self.write_encoded(&mut res));
        res
    }
}

//--- Impls for NULL, BOOLEAN, and raw octets
//
// INTEGER and REAL live in crate::int and crate::real.

impl PrimitiveContent for () {
    const TAG: Tag = Tag::NULL;

    fn encoded_len(self) -> usize {
        0
    }

    fn write_encoded<T: Target>(
        self, _: &mut T
    ) -> Result<(), T::Error> {
        Ok(())
    }
}

impl PrimitiveContent for bool {
    const TAG: Tag = Tag::BOOLEAN;

    fn encoded_len(self) -> usize {
        1
    }

    fn write_encoded<T: Target>(
        self, target: &mut T
    ) -> Result<(), T::Error> {
        target.write_u8(if self { 0xFF } else { 0x00 })
    }
}

impl PrimitiveContent for &'_ [u8] {
    const TAG: Tag = Tag::OCTET_STRING;

    fn encoded_len(self) -> usize {
        self.len()
    }

    fn write_encoded<T: Target>(
        self, target: &mut T
    ) -> Result<(), T::Error> {
        target.write_all(self)
    }
}


//------------ Primitive -----------------------------------------------------

/// An encoder for a primitive value.
///
/// Returned by [`PrimitiveContent::encode`] and
/// [`PrimitiveContent::encode_as`].
#[derive(Clone, Copy, Debug)]
pub struct Primitive<P> {
    tag: Tag,
    prim: P,
}

impl<P> Primitive<P> {
    /// Returns the tag the value is encoded with.
    pub fn tag(&self) -> Tag {
        self.tag
    }
}

impl<P: PrimitiveContent> Values for Primitive<P> {
    fn encoded_len(&self) -> usize {
        total_len(self.tag, self.prim.encoded_len())
    }

    fn write_encoded<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error> {
        write_header(target, self.tag, self.prim.encoded_len())?;
        self.prim.write_encoded(target)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn boolean() {
        assert_eq!(true.encode().to_vec(), b"\x01\x01\xFF");
        assert_eq!(false.encode().to_vec(), b"\x01\x01\x00");
        assert_eq!(true.encode_to_vec(), b"\xFF");
    }

    #[test]
    fn null() {
        assert_eq!(().encode().to_vec(), b"\x05\x00");
    }

    #[test]
    fn octets() {
        assert_eq!(b"ab".as_ref().encode().to_vec(), b"\x04\x02ab");
        assert_eq!(b"ab".as_ref().encode_as(Tag::ctx(2)).tag(), Tag::ctx(2));
        assert_eq!(
            b"ab".as_ref().encode_as(Tag::ctx(2)).to_vec(),
            b"\x82\x02ab"
        );
    }
}
