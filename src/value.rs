//! The value tree.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::construct::{Sequence, Set};
use crate::decode::{DecodeError, Decoder, Source};
use crate::encode::{PrimitiveContent, Target, Values};
use crate::encode;
use crate::int;
use crate::oid::Oid;
use crate::real;
use crate::string::{BitString, CharacterString, OctetString, StringKind};
use crate::tag::Tag;
use crate::wrapper::{Any, Choice, Tagged};


//------------ Value ---------------------------------------------------------

/// A single value of the tree.
///
/// Each variant corresponds to one of the types the decoder understands
/// plus the three wrapper kinds. Constructed variants own their children,
/// so a value is always the root of a tree of its own.
///
/// Values are encoded via the [`Values`] trait. Decoding happens through a
/// [`Decoder`] or, if no application-specific tags are involved, through
/// [`Value::decode_slice`] and [`Value::decode`].
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    /// A BOOLEAN.
    Boolean(bool),

    /// An INTEGER.
    Integer(i64),

    /// An ENUMERATED.
    Enumerated(i64),

    /// A NULL.
    Null,

    /// A REAL.
    Real(f64),

    /// A BIT STRING.
    BitString(BitString),

    /// An OCTET STRING.
    OctetString(OctetString),

    /// An OBJECT IDENTIFIER.
    ObjectId(Oid),

    /// One of the character string types.
    String(CharacterString),

    /// A SEQUENCE.
    Sequence(Sequence),

    /// A SET.
    Set(Set),

    /// A value with an application-specific tag.
    Tagged(Tagged),

    /// A CHOICE marker.
    Choice(Choice),

    /// An ANY marker.
    Any(Any),
}

impl Value {
    /// Returns the kind of the value.
    pub fn kind(&self) -> Kind {
        match *self {
            Value::Boolean(_) => Kind::Boolean,
            Value::Integer(_) => Kind::Integer,
            Value::Enumerated(_) => Kind::Enumerated,
            Value::Null => Kind::Null,
            Value::Real(_) => Kind::Real,
            Value::BitString(_) => Kind::BitString,
            Value::OctetString(_) => Kind::OctetString,
            Value::ObjectId(_) => Kind::ObjectId,
            Value::String(ref s) => s.kind().into(),
            Value::Sequence(_) => Kind::Sequence,
            Value::Set(_) => Kind::Set,
            Value::Tagged(_) => Kind::Tag,
            Value::Choice(_) => Kind::Choice,
            Value::Any(_) => Kind::Any,
        }
    }

    /// Returns the tag the value is encoded with.
    ///
    /// For [`Choice`] and [`Any`], this is the tag of the wrapped value.
    pub fn tag(&self) -> Tag {
        match *self {
            Value::Boolean(_) => Tag::BOOLEAN,
            Value::Integer(_) => Tag::INTEGER,
            Value::Enumerated(_) => Tag::ENUMERATED,
            Value::Null => Tag::NULL,
            Value::Real(_) => Tag::REAL,
            Value::BitString(_) => Tag::BIT_STRING,
            Value::OctetString(_) => Tag::OCTET_STRING,
            Value::ObjectId(_) => Tag::OID,
            Value::String(ref s) => s.kind().tag(),
            Value::Sequence(_) => Sequence::TAG,
            Value::Set(_) => Set::TAG,
            Value::Tagged(ref tagged) => tagged.tag(),
            Value::Choice(ref choice) => choice.value().tag(),
            Value::Any(ref any) => any.value().tag(),
        }
    }

    /// Returns whether the value is encoded in constructed form.
    pub fn is_constructed(&self) -> bool {
        self.tag().is_constructed()
    }

    /// Returns the length of the content octets of the value.
    pub fn content_len(&self) -> usize {
        match *self {
            Value::Boolean(value) => PrimitiveContent::encoded_len(value),
            Value::Integer(value) | Value::Enumerated(value) => {
                PrimitiveContent::encoded_len(value)
            }
            Value::Null => 0,
            Value::Real(value) => PrimitiveContent::encoded_len(value),
            Value::BitString(ref bits) => {
                PrimitiveContent::encoded_len(bits)
            }
            Value::OctetString(ref octets) => {
                PrimitiveContent::encoded_len(octets)
            }
            Value::ObjectId(ref oid) => PrimitiveContent::encoded_len(oid),
            Value::String(ref s) => s.as_str().len(),
            Value::Sequence(ref seq) => seq.content_len(),
            Value::Set(ref set) => set.content_len(),
            Value::Tagged(ref tagged) => tagged.content_len(),
            Value::Choice(ref choice) => choice.value().content_len(),
            Value::Any(ref any) => any.value().content_len(),
        }
    }

    /// Writes the content octets of the value to a target.
    pub fn write_content<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error> {
        match *self {
            Value::Boolean(value) => value.write_encoded(target),
            Value::Integer(value) | Value::Enumerated(value) => {
                target.write_all(int::content_octets(value).as_ref())
            }
            Value::Null => Ok(()),
            Value::Real(value) => {
                target.write_all(&real::content_octets(value))
            }
            Value::BitString(ref bits) => bits.write_encoded(target),
            Value::OctetString(ref octets) => octets.write_encoded(target),
            Value::ObjectId(ref oid) => oid.write_encoded(target),
            Value::String(ref s) => target.write_all(s.as_str().as_bytes()),
            Value::Sequence(ref seq) => seq.write_content(target),
            Value::Set(ref set) => set.write_content(target),
            Value::Tagged(ref tagged) => tagged.write_content(target),
            Value::Choice(ref choice) => choice.value().write_content(target),
            Value::Any(ref any) => any.value().write_content(target),
        }
    }
}

/// # Decoding
///
impl Value {
    /// Decodes a single value from the beginning of a source.
    ///
    /// This uses a decoder with default settings, so values with
    /// application-specific tags are rejected.
    pub fn decode<S: Source>(source: S) -> Result<Self, DecodeError> {
        Decoder::new().decode(source)
    }

    /// Decodes an octets slice containing exactly one value.
    pub fn decode_slice(data: &[u8]) -> Result<Self, DecodeError> {
        Decoder::new().decode_slice(data)
    }
}

/// # Access to the Content
///
impl Value {
    /// Returns the boolean if this is a BOOLEAN.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Boolean(value) => Some(value),
            _ => None
        }
    }

    /// Returns the integer if this is an INTEGER or ENUMERATED.
    pub fn as_i64(&self) -> Option<i64> {
        match *self {
            Value::Integer(value) | Value::Enumerated(value) => Some(value),
            _ => None
        }
    }

    /// Returns the octets if this is an OCTET STRING.
    pub fn as_octet_string(&self) -> Option<&OctetString> {
        match *self {
            Value::OctetString(ref value) => Some(value),
            _ => None
        }
    }

    /// Returns the text if this is a character string.
    pub fn as_str(&self) -> Option<&str> {
        match *self {
            Value::String(ref value) => Some(value.as_str()),
            _ => None
        }
    }

    /// Returns the children if this is a SEQUENCE or SET.
    pub fn children(&self) -> Option<&[Value]> {
        match *self {
            Value::Sequence(ref seq) => Some(seq.as_slice()),
            Value::Set(ref set) => Some(set.as_slice()),
            _ => None
        }
    }

    /// Returns the tagged value if this is one.
    pub fn as_tagged(&self) -> Option<&Tagged> {
        match *self {
            Value::Tagged(ref value) => Some(value),
            _ => None
        }
    }
}


//--- From

macro_rules! value_from {
    ( $( $ty:ty => $variant:ident, )* ) => {
        $(
            impl From<$ty> for Value {
                fn from(value: $ty) -> Self {
                    Value::$variant(value)
                }
            }
        )*
    }
}

value_from! {
    bool => Boolean,
    i64 => Integer,
    f64 => Real,
    BitString => BitString,
    OctetString => OctetString,
    Oid => ObjectId,
    CharacterString => String,
    Sequence => Sequence,
    Set => Set,
    Tagged => Tagged,
    Choice => Choice,
    Any => Any,
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}


//--- Values

impl Values for Value {
    fn encoded_len(&self) -> usize {
        encode::total_len(self.tag(), self.content_len())
    }

    fn write_encoded<T: Target>(
        &self, target: &mut T
    ) -> Result<(), T::Error> {
        encode::write_header(target, self.tag(), self.content_len())?;
        self.write_content(target)
    }
}


//--- Display

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            Value::Boolean(true) => f.write_str("BOOLEAN TRUE"),
            Value::Boolean(false) => f.write_str("BOOLEAN FALSE"),
            Value::Integer(value) => write!(f, "INTEGER {}", value),
            Value::Enumerated(value) => write!(f, "ENUMERATED {}", value),
            Value::Null => f.write_str("NULL"),
            Value::Real(value) => {
                f.write_str("REAL ")?;
                if value.is_nan() {
                    f.write_str("NOT-A-NUMBER")
                }
                else if value == f64::INFINITY {
                    f.write_str("PLUS-INFINITY")
                }
                else if value == f64::NEG_INFINITY {
                    f.write_str("MINUS-INFINITY")
                }
                else {
                    fmt::Display::fmt(&value, f)
                }
            }
            Value::BitString(ref value) => write!(f, "BIT STRING {}", value),
            Value::OctetString(ref value) => {
                write!(f, "OCTET STRING {}", value)
            }
            Value::ObjectId(ref value) => {
                write!(f, "OBJECT IDENTIFIER {}", value)
            }
            Value::String(ref value) => fmt::Display::fmt(value, f),
            Value::Sequence(ref value) => fmt::Display::fmt(value, f),
            Value::Set(ref value) => fmt::Display::fmt(value, f),
            Value::Tagged(ref value) => fmt::Display::fmt(value, f),
            Value::Choice(ref value) => fmt::Display::fmt(value, f),
            Value::Any(ref value) => fmt::Display::fmt(value, f),
        }
    }
}


//------------ Kind ----------------------------------------------------------

/// The kind of a value.
///
/// Besides the universal types, there are three kinds for the wrapper
/// values. These never appear on the wire themselves.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Kind {
    Boolean,
    Integer,
    BitString,
    OctetString,
    Null,
    ObjectId,
    Real,
    Enumerated,
    Sequence,
    Set,
    NumericString,
    PrintableString,
    UtcTime,
    VisibleString,
    Tag,
    Choice,
    Any,
}

impl Kind {
    /// Returns the numeric type code of the kind.
    ///
    /// For the universal types, this is the identifier octet of their
    /// natural encoding. The wrapper kinds have negative codes.
    pub const fn code(self) -> i32 {
        match self {
            Kind::Boolean => 1,
            Kind::Integer => 2,
            Kind::BitString => 3,
            Kind::OctetString => 4,
            Kind::Null => 5,
            Kind::ObjectId => 6,
            Kind::Real => 9,
            Kind::Enumerated => 10,
            Kind::Sequence => 0x30,
            Kind::Set => 0x31,
            Kind::NumericString => 18,
            Kind::PrintableString => 19,
            Kind::UtcTime => 23,
            Kind::VisibleString => 26,
            Kind::Tag => -1,
            Kind::Choice => -2,
            Kind::Any => -3,
        }
    }
}

impl From<StringKind> for Kind {
    fn from(kind: StringKind) -> Self {
        match kind {
            StringKind::Numeric => Kind::NumericString,
            StringKind::Printable => Kind::PrintableString,
            StringKind::UtcTime => Kind::UtcTime,
            StringKind::Visible => Kind::VisibleString,
        }
    }
}


//============ Tests =========================================================
