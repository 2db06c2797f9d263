//! Values wrapping another value.
//!
//! This module contains the three kinds of values that don’t have an
//! encoding of their own but wrap exactly one other value: [`Tagged`]
//! re-tags the wrapped value, while [`Choice`] and [`Any`] are transparent
//! and only mark the value for whoever builds the tree.

use std::fmt;
use crate::encode::{Target, Values};
use crate::tag::Tag;
use crate::value::Value;


//------------ Tagged --------------------------------------------------------

/// A value with an application-specific tag.
///
/// Tagging replaces or augments the tag of a value with a tag of the
/// application, context-specific, or private class.
///
/// # BER Encoding
///
/// With implicit tagging, the tag replaces the wrapped value’s tag. The
/// encoding is the tag followed by the length and content octets of the
/// wrapped value.
///
/// With explicit tagging, the wrapped value is encoded in full and becomes
/// the content of a constructed value with the tag.
///
/// The tag is written as is. The [`explicit`][Self::explicit] and
/// [`implicit`][Self::implicit] functions take care of the constructed bit,
/// [`new`][Self::new] leaves it to the caller.
#[derive(Clone, Debug, PartialEq)]
pub struct Tagged {
    tag: Tag,
    value: Box<Value>,
    implicit: bool,
}

impl Tagged {
    /// Creates a new tagged value using the tag verbatim.
    pub fn new(tag: Tag, value: impl Into<Value>, implicit: bool) -> Self {
        Tagged { tag, value: Box::new(value.into()), implicit }
    }

    /// Creates a new explicitly tagged value.
    ///
    /// The constructed bit of `tag` is set.
    pub fn explicit(tag: Tag, value: impl Into<Value>) -> Self {
        Self::new(tag.constructed(), value, false)
    }

    /// Creates a new implicitly tagged value.
    ///
    /// The constructed bit of `tag` is taken from the wrapped value’s
    /// natural encoding.
    pub fn implicit(tag: Tag, value: impl Into<Value>) -> Self {
        let value = value.into();
        Self::new(
            tag.with_constructed(value.is_constructed()), value, true
        )
    }

    /// Returns the tag.
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Returns a reference to the wrapped value.
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Converts the tagged value into the wrapped value.
    pub fn into_value(self) -> Value {
        *self.value
    }

    /// Returns whether the tagging is implicit.
    pub fn is_implicit(&self) -> bool {
        self.implicit
    }

    /// Returns the length of the content octets.
    pub fn content_len(&self) -> usize {
        if self.implicit {
            self.value.content_len()
        }
        else {
            self.value.encoded_len()
        }
    }

    /// Writes the content octets to a target.
    pub fn write_content<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error> {
        if self.implicit {
            self.value.write_content(target)
        }
        else {
            self.value.write_encoded(target)
        }
    }
}

impl fmt::Display for Tagged {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.implicit {
            write!(f, "{} IMPLICIT {}", self.tag, self.value)
        }
        else {
            write!(f, "{} {}", self.tag, self.value)
        }
    }
}


//------------ Choice and Any ------------------------------------------------

macro_rules! pass_through {
    ( $( #[$attr:meta] )* $name:ident, $label:expr ) => {
        $( #[$attr] )*
        #[derive(Clone, Debug, PartialEq)]
        pub struct $name(Box<Value>);

        impl $name {
            pub fn new(value: impl Into<Value>) -> Self {
                $name(Box::new(value.into()))
            }

            /// Returns a reference to the wrapped value.
            pub fn value(&self) -> &Value {
                &self.0
            }

            /// Converts into the wrapped value.
            pub fn into_value(self) -> Value {
                *self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                write!(f, concat!($label, " {}"), self.0)
            }
        }
    }
}

pass_through! {
    /// A value chosen from a number of alternatives.
    ///
    /// This is a marker for trees built by hand. The wrapped value is
    /// encoded as if it wasn’t wrapped at all.
    Choice, "CHOICE"
}

pass_through! {
    /// A value of any type.
    ///
    /// Like [`Choice`], this is only a marker. The wrapped value is encoded
    /// as if it wasn’t wrapped at all.
    Any, "ANY"
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::construct::Sequence;
    use crate::string::OctetString;
    use super::*;

    #[test]
    fn implicit_primitive() {
        let value = Tagged::implicit(
            Tag::ctx(0), OctetString::from(b"foo".as_ref())
        );
        assert_eq!(value.tag(), Tag::ctx(0));
        assert_eq!(Value::from(value).to_vec(), b"\x80\x03foo");
    }

    #[test]
    fn implicit_constructed() {
        let value = Tagged::implicit(
            Tag::application(1),
            Sequence::from_vec(vec![Value::Integer(5)])
        );
        assert_eq!(value.tag(), Tag::application(1).constructed());
        assert_eq!(Value::from(value).to_vec(), b"\x61\x03\x02\x01\x05");
    }

    #[test]
    fn explicit() {
        let value = Tagged::explicit(Tag::ctx(3), Value::Integer(5));
        assert_eq!(value.tag(), Tag::ctx(3).constructed());
        assert_eq!(
            Value::from(value).to_vec(), b"\xA3\x03\x02\x01\x05"
        );
    }

    #[test]
    fn verbatim_tag() {
        // A primitive tag with explicit tagging is written as given.
        let value = Tagged::new(Tag::ctx(2), Value::Null, false);
        assert_eq!(Value::from(value).to_vec(), b"\x82\x02\x05\x00");
    }

    #[test]
    fn pass_through() {
        let value = Value::from(Choice::new(Any::new(Value::Boolean(true))));
        assert_eq!(value.to_vec(), b"\x01\x01\xFF");
        assert_eq!(value.to_string(), "CHOICE ANY BOOLEAN TRUE");
    }
}
