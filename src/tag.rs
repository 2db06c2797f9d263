//! The identifier octets of a BER encoded value.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use crate::encode::Target;


//------------ Class ---------------------------------------------------------

/// The class of a tag.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum Class {
    /// The universal class used by the types defined in X.680.
    Universal,

    /// The application class.
    Application,

    /// The context-specific class.
    Context,

    /// The private class.
    Private,
}

impl Class {
    /// Returns the class bits of the identifier octet.
    pub const fn to_bits(self) -> u8 {
        match self {
            Class::Universal => Tag::UNIVERSAL,
            Class::Application => Tag::APPLICATION,
            Class::Context => Tag::CONTEXT_SPECIFIC,
            Class::Private => Tag::PRIVATE,
        }
    }

    const fn from_bits(bits: u8) -> Self {
        match bits & Tag::CLASS_MASK {
            Tag::UNIVERSAL => Class::Universal,
            Tag::APPLICATION => Class::Application,
            Tag::CONTEXT_SPECIFIC => Class::Context,
            _ => Class::Private,
        }
    }
}


//------------ Tag -----------------------------------------------------------

/// The tag of a BER encoded value.
///
/// Each BER encoded value starts with an identifier octet. Bits 8 and 7
/// give the class of the tag, bit 6 says whether the value uses primitive
/// (0) or constructed (1) encoding, and bits 5 to 1 give the tag number.
///
/// Unlike the ASN.1 notion of a tag, a `Tag` keeps the complete identifier
/// octet, including the constructed bit. This is what the dispatcher keys
/// on and what wrapped values are re-tagged with.
///
/// # Limitations
///
/// Only the low tag number form is supported, i.e., tag numbers between 0
/// and 30. Identifier octets with all five number bits set introduce the
/// high tag number form and are rejected by the decoder.
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Tag(u8);

/// # Masks and class bits
///
impl Tag {
    /// The mask for checking the class.
    pub const CLASS_MASK: u8 = 0xc0;

    /// The mask for checking whether the value is constructed.
    ///
    /// A value of 0 indicates primitive.
    pub const CONSTRUCTED_MASK: u8 = 0x20;

    /// The mask for the tag number.
    pub const NUMBER_MASK: u8 = 0x1f;

    /// The class bits for the ‘universal’ class.
    pub const UNIVERSAL: u8 = 0x00;

    /// The class bits for the ‘application’ class.
    pub const APPLICATION: u8 = 0x40;

    /// The class bits for the ‘context-specific’ class.
    pub const CONTEXT_SPECIFIC: u8 = 0x80;

    /// The class bits for the ‘private’ class.
    pub const PRIVATE: u8 = 0xc0;
}

/// # Constants for often used tag values
///
/// See clause 8.4 of X.690.
impl Tag {
    /// The tag marking the end-of-contents in an indefinite length value.
    pub const END_OF_CONTENTS: Self = Tag(0x00);

    /// The tag for the BOOLEAN type, UNIVERSAL 1.
    pub const BOOLEAN: Self = Tag(0x01);

    /// The tag for the INTEGER type, UNIVERSAL 2.
    pub const INTEGER: Self = Tag(0x02);

    /// The tag for the BIT STRING type, UNIVERSAL 3.
    pub const BIT_STRING: Self = Tag(0x03);

    /// The tag for the OCTET STRING type, UNIVERSAL 4.
    pub const OCTET_STRING: Self = Tag(0x04);

    /// The tag for the NULL type, UNIVERSAL 5.
    pub const NULL: Self = Tag(0x05);

    /// The tag for the OBJECT IDENTIFIER type, UNIVERSAL 6.
    pub const OID: Self = Tag(0x06);

    /// The tag for the REAL type, UNIVERSAL 9.
    pub const REAL: Self = Tag(0x09);

    /// The tag for the ENUMERATED type, UNIVERSAL 10.
    pub const ENUMERATED: Self = Tag(0x0a);

    /// The tag for the SEQUENCE and SEQUENCE OF types, UNIVERSAL 16.
    ///
    /// This always has the constructed bit set.
    pub const SEQUENCE: Self = Tag(0x30);

    /// The tag for the SET and SET OF types, UNIVERSAL 17.
    ///
    /// This always has the constructed bit set.
    pub const SET: Self = Tag(0x31);

    /// The tag for the NumericString type, UNIVERSAL 18.
    pub const NUMERIC_STRING: Self = Tag(0x12);

    /// The tag for the PrintableString type, UNIVERSAL 19.
    pub const PRINTABLE_STRING: Self = Tag(0x13);

    /// The tag for the TeletexString type, UNIVERSAL 20.
    pub const TELETEX_STRING: Self = Tag(0x14);

    /// The tag for the VideotexString type, UNIVERSAL 21.
    pub const VIDEOTEX_STRING: Self = Tag(0x15);

    /// The tag for the IA5String type, UNIVERSAL 22.
    pub const IA5_STRING: Self = Tag(0x16);

    /// The tag for the UTCTime type, UNIVERSAL 23.
    pub const UTC_TIME: Self = Tag(0x17);

    /// The tag for the GraphicString type, UNIVERSAL 25.
    pub const GRAPHIC_STRING: Self = Tag(0x19);

    /// The tag for the VisibleString type, UNIVERSAL 26.
    pub const VISIBLE_STRING: Self = Tag(0x1a);

    /// The tag for the GeneralString type, UNIVERSAL 27.
    pub const GENERAL_STRING: Self = Tag(0x1b);

    /// The constructed context-specific tag [0] as used by SASL credentials.
    pub const SASL_CONTEXT: Self = Tag(0xa0);
}

impl Tag {
    /// Creates a primitive tag from a class and number.
    ///
    /// # Panics
    ///
    /// This function panics if the tag number is greater than 30 since the
    /// high tag number form is not supported.
    pub const fn new(class: Class, number: u8) -> Self {
        assert!(number < Tag::NUMBER_MASK, "high tag numbers not supported");
        Tag(class.to_bits() | number)
    }

    /// Creates a new tag in the application class with the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is greater than 30.
    pub const fn application(number: u8) -> Self {
        Tag::new(Class::Application, number)
    }

    /// Creates a new tag in the context-specific class.
    ///
    /// # Panics
    ///
    /// Panics if the number is greater than 30.
    pub const fn ctx(number: u8) -> Self {
        Tag::new(Class::Context, number)
    }

    /// Creates a new tag in the private class with the given number.
    ///
    /// # Panics
    ///
    /// Panics if the number is greater than 30.
    pub const fn private(number: u8) -> Self {
        Tag::new(Class::Private, number)
    }

    /// Creates a tag from a complete identifier octet.
    pub const fn from_u8(octet: u8) -> Self {
        Tag(octet)
    }

    /// Returns the identifier octet.
    pub const fn to_u8(self) -> u8 {
        self.0
    }

    /// Returns the class of the tag.
    pub const fn class(self) -> Class {
        Class::from_bits(self.0)
    }

    /// Returns whether the tag is of the universal class.
    pub const fn is_universal(self) -> bool {
        self.0 & Self::CLASS_MASK == Self::UNIVERSAL
    }

    /// Returns whether any of the non-universal class bits are set.
    ///
    /// Values with such a tag are never interpreted by the generic
    /// dispatcher but handed to a [`TagResolver`].
    ///
    /// [`TagResolver`]: crate::decode::TagResolver
    pub const fn is_extension(self) -> bool {
        self.0 & (Self::APPLICATION | Self::CONTEXT_SPECIFIC) != 0
    }

    /// Returns whether the constructed bit is set.
    pub const fn is_constructed(self) -> bool {
        self.0 & Self::CONSTRUCTED_MASK != 0
    }

    /// Returns the number of the tag.
    pub const fn number(self) -> u8 {
        self.0 & Self::NUMBER_MASK
    }

    /// Returns whether the octet starts a high tag number identifier.
    pub const fn is_high_number_form(self) -> bool {
        self.0 & Self::NUMBER_MASK == Self::NUMBER_MASK
    }

    /// Returns the number of octets of the encoded form of the tag.
    ///
    /// This is always one since only the low tag number form is supported.
    pub const fn encoded_len(self) -> usize {
        1
    }

    /// Encodes the tag into a target.
    pub fn write_encoded<T: Target>(
        self, target: &mut T
    ) -> Result<(), T::Error> {
        target.write_u8(self.0)
    }

    /// Returns the tag with the constructed bit set.
    #[must_use]
    pub const fn constructed(self) -> Self {
        Tag(self.0 | Self::CONSTRUCTED_MASK)
    }

    /// Returns the tag with the constructed bit cleared.
    #[must_use]
    pub const fn primitive(self) -> Self {
        Tag(self.0 & !Self::CONSTRUCTED_MASK)
    }

    /// Returns the tag with the constructed bit set to `constructed`.
    #[must_use]
    pub const fn with_constructed(self, constructed: bool) -> Self {
        if constructed {
            self.constructed()
        }
        else {
            self.primitive()
        }
    }
}


//--- From

impl From<u8> for Tag {
    fn from(octet: u8) -> Self {
        Tag(octet)
    }
}

impl From<Tag> for u8 {
    fn from(tag: Tag) -> Self {
        tag.0
    }
}


//--- Display and Debug

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.primitive() {
            Tag::END_OF_CONTENTS if !self.is_constructed() => {
                return f.write_str("END OF CONTENTS")
            }
            Tag::BOOLEAN => return f.write_str("BOOLEAN"),
            Tag::INTEGER => return f.write_str("INTEGER"),
            Tag::BIT_STRING => return f.write_str("BIT STRING"),
            Tag::OCTET_STRING => return f.write_str("OCTET STRING"),
            Tag::NULL => return f.write_str("NULL"),
            Tag::OID => return f.write_str("OBJECT IDENTIFIER"),
            Tag::REAL => return f.write_str("REAL"),
            Tag::ENUMERATED => return f.write_str("ENUMERATED"),
            _ => { }
        }
        match *self {
            Tag::SEQUENCE => return f.write_str("SEQUENCE"),
            Tag::SET => return f.write_str("SET"),
            _ => { }
        }
        match self.primitive() {
            Tag::NUMERIC_STRING => f.write_str("NumericString"),
            Tag::PRINTABLE_STRING => f.write_str("PrintableString"),
            Tag::TELETEX_STRING => f.write_str("TeletexString"),
            Tag::VIDEOTEX_STRING => f.write_str("VideotexString"),
            Tag::IA5_STRING => f.write_str("IA5String"),
            Tag::UTC_TIME => f.write_str("UTCTime"),
            Tag::GRAPHIC_STRING => f.write_str("GraphicString"),
            Tag::VISIBLE_STRING => f.write_str("VisibleString"),
            Tag::GENERAL_STRING => f.write_str("GeneralString"),
            _ => {
                match self.class() {
                    Class::Universal => write!(f, "[UNIVERSAL ")?,
                    Class::Application => write!(f, "[APPLICATION ")?,
                    Class::Context => write!(f, "[")?,
                    Class::Private => write!(f, "[PRIVATE ")?,
                }
                write!(f, "{}]", self.number())
            }
        }
    }
}

impl fmt::Debug for Tag {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "Tag({:#04x} {})", self.0, self)
    }
}


//============ Tests =========================================================
