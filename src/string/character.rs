//! Character strings.
//!
//! This is a private module. Its public items are re-exported by the parent.

use std::fmt;
use log::warn;
use crate::decode::{DecodeError, Pos};
use crate::encode::{Primitive, PrimitiveContent};
use crate::mode::Mode;
use crate::tag::Tag;


//------------ StringKind ----------------------------------------------------

/// The character string types understood by the decoder.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub enum StringKind {
    /// NumericString, UNIVERSAL 18.
    Numeric,

    /// PrintableString, UNIVERSAL 19.
    Printable,

    /// UTCTime, UNIVERSAL 23.
    UtcTime,

    /// VisibleString, UNIVERSAL 26.
    Visible,
}

impl StringKind {
    /// All kinds.
    pub const ALL: [StringKind; 4] = [
        StringKind::Numeric, StringKind::Printable,
        StringKind::UtcTime, StringKind::Visible,
    ];

    /// Returns the natural tag of the kind.
    pub const fn tag(self) -> Tag {
        match self {
            StringKind::Numeric => Tag::NUMERIC_STRING,
            StringKind::Printable => Tag::PRINTABLE_STRING,
            StringKind::UtcTime => Tag::UTC_TIME,
            StringKind::Visible => Tag::VISIBLE_STRING,
        }
    }

    /// Returns the kind for a tag, ignoring the constructed bit.
    pub fn from_tag(tag: Tag) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.tag() == tag.primitive())
    }
}

impl fmt::Display for StringKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.tag(), f)
    }
}


//------------ CharacterString -----------------------------------------------

/// A character string value.
///
/// The string keeps its content as a Rust string together with the kind of
/// string it is.
///
/// # BER Encoding
///
/// The content octets are the UTF-8 encoding of the string. In constructed
/// form, the content is a sequence of segments which are either octet
/// strings or strings of the same kind. The octets of all segments are
/// joined before they are interpreted, so a character may be split between
/// segments.
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct CharacterString {
    kind: StringKind,
    value: String,
}

impl CharacterString {
    pub fn new(kind: StringKind, value: impl Into<String>) -> Self {
        CharacterString { kind, value: value.into() }
    }

    /// Creates a new NumericString.
    pub fn numeric(value: impl Into<String>) -> Self {
        Self::new(StringKind::Numeric, value)
    }

    /// Creates a new PrintableString.
    pub fn printable(value: impl Into<String>) -> Self {
        Self::new(StringKind::Printable, value)
    }

    /// Creates a new UTCTime.
    pub fn utc_time(value: impl Into<String>) -> Self {
        Self::new(StringKind::UtcTime, value)
    }

    /// Creates a new VisibleString.
    pub fn visible(value: impl Into<String>) -> Self {
        Self::new(StringKind::Visible, value)
    }

    pub fn kind(&self) -> StringKind {
        self.kind
    }

    pub fn as_str(&self) -> &str {
        self.value.as_str()
    }

    pub fn into_string(self) -> String {
        self.value
    }

    /// Returns a value encoder using the natural tag of the string’s kind.
    pub fn encode(&self) -> Primitive<&[u8]> {
        self.value.as_bytes().encode_as(self.kind.tag())
    }
}

/// # Decoding
///
impl CharacterString {
    /// Interprets the joined content octets of a character string.
    ///
    /// In [`Mode::Lenient`], invalid content results in an empty string
    /// rather than an error.
    pub fn from_content(
        kind: StringKind, content: Vec<u8>, mode: Mode, pos: Pos,
    ) -> Result<Self, DecodeError> {
        match String::from_utf8(content) {
            Ok(value) => Ok(CharacterString { kind, value }),
            Err(_) if mode.is_lenient() => {
                warn!("ignoring invalid {} content at {}", kind, pos);
                Ok(CharacterString { kind, value: String::new() })
            }
            Err(_) => Err(DecodeError::InvalidCharacterData { kind, pos })
        }
    }
}


//--- AsRef

impl AsRef<str> for CharacterString {
    fn as_ref(&self) -> &str {
        self.as_str()
    }
}


//--- Display

impl fmt::Display for CharacterString {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.value)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::encode::Values;
    use super::*;

    #[test]
    fn kinds() {
        for kind in StringKind::ALL {
            assert_eq!(StringKind::from_tag(kind.tag()), Some(kind));
            assert_eq!(
                StringKind::from_tag(kind.tag().constructed()), Some(kind)
            );
        }
        assert_eq!(StringKind::from_tag(Tag::OCTET_STRING), None);
        assert_eq!(StringKind::UtcTime.to_string(), "UTCTime");
    }

    #[test]
    fn decode() {
        let s = CharacterString::from_content(
            StringKind::Printable, b"hello".to_vec(), Mode::Ber,
            Pos::default()
        ).unwrap();
        assert_eq!(s, CharacterString::printable("hello"));

        assert!(matches!(
            CharacterString::from_content(
                StringKind::Visible, b"\xC3".to_vec(), Mode::Ber,
                Pos::default()
            ),
            Err(DecodeError::InvalidCharacterData {
                kind: StringKind::Visible, ..
            })
        ));
        assert_eq!(
            CharacterString::from_content(
                StringKind::Visible, b"\xC3".to_vec(), Mode::Lenient,
                Pos::default()
            ).unwrap().as_str(),
            ""
        );
    }

    #[test]
    fn encode() {
        assert_eq!(
            CharacterString::numeric("123").encode().to_vec(),
            b"\x12\x03123"
        );
        assert_eq!(
            CharacterString::utc_time("0102").encode().to_vec(),
            b"\x17\x040102"
        );
        assert_eq!(
            CharacterString::visible("é").encode().to_vec(),
            b"\x1A\x02\xC3\xA9"
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            CharacterString::printable("a\"b").to_string(),
            "PrintableString \"a\\\"b\""
        );
    }
}
