//! The recursive descent dispatcher.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::Bytes;
use log::{debug, trace};
use crate::construct::{Sequence, Set};
use crate::int;
use crate::length::Length;
use crate::mode::Mode;
use crate::oid::Oid;
use crate::real;
use crate::string::{
    BitString, BitStringBuilder, CharacterString, OctetString, StringKind
};
use crate::tag::Tag;
use crate::value::Value;
use crate::wrapper::Tagged;
use super::decoder::Decoder;
use super::error::DecodeError;
use super::resolver::TagResolver;
use super::source::{Pos, Source};


//------------ Item ----------------------------------------------------------

/// The result of decoding a single item of encoded data.
#[derive(Clone, Debug, PartialEq)]
pub enum Item {
    /// A complete value.
    Value(Value),

    /// The end-of-contents marker of an indefinite length value.
    EndOfContents,
}


//------------ Context -------------------------------------------------------

/// The state of a single decoding run.
///
/// A context is created by the [`Decoder`] for each value decoded at the top
/// level and is passed down the recursion. It knows the decoder and thus
/// the mode and resolver in use, how deep in the tree decoding currently is,
/// and where the innermost enclosing value with a definite length ends.
///
/// Resolvers receive a reference to the context for the tagged value they
/// are asked to decode and use it to decode the rest of the value via
/// [`decode_explicit`][Self::decode_explicit],
/// [`decode_implicit`][Self::decode_implicit], or, for their own content
/// formats, [`take_length`][Self::take_length] and
/// [`decode_value`][Self::decode_value].
pub struct Context<'a, R> {
    decoder: &'a Decoder<R>,
    depth: usize,
    end: Option<usize>,
}

impl<'a, R> Context<'a, R> {
    pub(super) fn new(decoder: &'a Decoder<R>) -> Self {
        Context { decoder, depth: 0, end: None }
    }

    /// Returns the decoding mode.
    pub fn mode(&self) -> Mode {
        self.decoder.mode()
    }

    /// Returns the current nesting depth.
    ///
    /// Values at the top level have depth zero.
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Returns a reference to the resolver.
    pub fn resolver(&self) -> &'a R {
        self.decoder.resolver()
    }

    /// Returns a context for the content of a constructed value.
    ///
    /// The content ends at `end` if the value has a definite length.
    fn enter(
        &self, end: Option<usize>, pos: Pos
    ) -> Result<Self, DecodeError> {
        let depth = self.depth + 1;
        if depth > self.decoder.max_depth() {
            return Err(DecodeError::NestingTooDeep {
                limit: self.decoder.max_depth(), pos
            })
        }
        Ok(Context {
            decoder: self.decoder,
            depth,
            end: end.or(self.end),
        })
    }
}

impl<'a, R: TagResolver> Context<'a, R> {
    /// Decodes the next item from the source.
    ///
    /// This is the core of the decoder. It takes the identifier octet and
    /// returns [`Item::EndOfContents`] if it is the end-of-contents marker.
    /// Otherwise the value is decoded based on its tag: universal types are
    /// looked up in a fixed table, tags of the other classes are handed to
    /// the resolver.
    pub fn decode_item<S: Source>(
        &self, source: &mut S
    ) -> Result<Item, DecodeError> {
        match self.take_tag(source)? {
            Some((tag, pos)) => {
                self.decode_tagged(tag, pos, source).map(Item::Value)
            }
            None => Ok(Item::EndOfContents)
        }
    }

    /// Decodes the next value from the source.
    ///
    /// Unlike [`decode_item`][Self::decode_item], an end-of-contents
    /// marker is an error.
    pub fn decode_value<S: Source>(
        &self, source: &mut S
    ) -> Result<Value, DecodeError> {
        let pos = source.pos();
        let tag = Tag::from_u8(source.take_u8()?);
        self.decode_after_tag(tag, pos, source)
    }

    /// Takes the length octets of a value.
    ///
    /// A definite length that would reach past the end of an enclosing
    /// value is rejected.
    pub fn take_length<S: Source>(
        &self, source: &mut S
    ) -> Result<Length, DecodeError> {
        let pos = source.pos();
        let length = Length::take_from(source)?;
        if let (Length::Definite(len), Some(end)) = (length, self.end) {
            match source.pos().to_usize().checked_add(len) {
                Some(value_end) if value_end <= end => { }
                _ => {
                    return Err(DecodeError::length_mismatch(
                        "value exceeds enclosing value", pos
                    ))
                }
            }
        }
        Ok(length)
    }

    /// Decodes the rest of an explicitly tagged value.
    ///
    /// The identifier octet with `tag` has been taken already. The value
    /// must be constructed and contain exactly one value which is returned.
    pub fn decode_explicit<S: Source>(
        &self, tag: Tag, source: &mut S
    ) -> Result<Value, DecodeError> {
        let pos = source.pos();
        if !tag.is_constructed() {
            return Err(DecodeError::malformed(
                "primitive explicitly tagged value", pos
            ))
        }
        let length = self.take_length(source)?;
        let mut res = None;
        self.take_children(length, pos, source, |cx, tag, pos, source| {
            if res.is_some() {
                return Err(DecodeError::malformed(
                    "more than one value in explicitly tagged value", pos
                ))
            }
            res = Some(cx.decode_tagged(tag, pos, source)?);
            Ok(())
        })?;
        res.ok_or(DecodeError::malformed(
            "empty explicitly tagged value", pos
        ))
    }

    /// Decodes the rest of an implicitly tagged value.
    ///
    /// The identifier octet with `tag` has been taken already. The length
    /// and content octets are decoded as if the tag was the universal tag
    /// `universal` with the constructed bit taken from `tag`.
    pub fn decode_implicit<S: Source>(
        &self, tag: Tag, universal: Tag, source: &mut S
    ) -> Result<Value, DecodeError> {
        let pos = source.pos();
        let natural = universal.with_constructed(tag.is_constructed());
        match Handler::get(natural) {
            Some(handler) => self.decode_universal(handler, pos, source),
            None => Err(DecodeError::UnknownTag { tag: natural, pos })
        }
    }

    /// Decodes a value whose identifier octet has been taken already.
    pub(crate) fn decode_tagged<S: Source>(
        &self, tag: Tag, pos: Pos, source: &mut S
    ) -> Result<Value, DecodeError> {
        trace!("{:?} at {}", tag, pos);
        if tag.is_high_number_form() {
            return Err(DecodeError::unsupported(
                "high tag number form", pos
            ))
        }
        if let Some(handler) = Handler::get(tag) {
            return self.decode_universal(handler, pos, source)
        }
        if tag.is_extension() {
            debug!("resolving {} at {}", tag, pos);
            let resolved = self.resolver().resolve(tag, source, self)?;
            return Ok(Value::Tagged(
                Tagged::new(tag, resolved.value, resolved.implicit)
            ))
        }
        Err(DecodeError::UnknownTag { tag, pos })
    }

    /// Decodes a value at the top level after its tag has been taken.
    pub(super) fn decode_after_tag<S: Source>(
        &self, tag: Tag, pos: Pos, source: &mut S
    ) -> Result<Value, DecodeError> {
        if tag == Tag::END_OF_CONTENTS {
            return Err(DecodeError::malformed(
                "unexpected end-of-contents", pos
            ))
        }
        self.decode_tagged(tag, pos, source)
    }

    /// Takes an identifier octet.
    ///
    /// Returns `None` for an end-of-contents marker, which includes its
    /// length octet.
    fn take_tag<S: Source>(
        &self, source: &mut S
    ) -> Result<Option<(Tag, Pos)>, DecodeError> {
        let pos = source.pos();
        let tag = Tag::from_u8(source.take_u8()?);
        if tag != Tag::END_OF_CONTENTS {
            return Ok(Some((tag, pos)))
        }
        if source.take_u8()? != 0 {
            return Err(DecodeError::malformed(
                "end-of-contents with non-zero length", pos
            ))
        }
        Ok(None)
    }

    /// Processes the children of a constructed value.
    ///
    /// Takes identifier octets until the content ends and calls `op` with
    /// the tag, its position, and the source for each child. The context
    /// passed to `op` is the one for the content.
    fn take_children<S: Source, F>(
        &self, length: Length, pos: Pos, source: &mut S, mut op: F
    ) -> Result<(), DecodeError>
    where F: FnMut(&Self, Tag, Pos, &mut S) -> Result<(), DecodeError> {
        match length {
            Length::Definite(len) => {
                let end = source.pos().to_usize().saturating_add(len);
                let cx = self.enter(Some(end), pos)?;
                while source.pos().to_usize() < end {
                    match cx.take_tag(source)? {
                        Some((tag, pos)) => op(&cx, tag, pos, source)?,
                        None => {
                            return Err(DecodeError::malformed(
                                "end-of-contents in definite length value",
                                pos
                            ))
                        }
                    }
                }
                if source.pos().to_usize() != end {
                    return Err(DecodeError::length_mismatch(
                        "content exceeds value length", source.pos()
                    ))
                }
            }
            Length::Indefinite => {
                debug!("indefinite length value at {}", pos);
                let cx = self.enter(None, pos)?;
                loop {
                    if let Some(end) = cx.end {
                        if source.pos().to_usize() >= end {
                            return Err(DecodeError::length_mismatch(
                                "missing end-of-contents", source.pos()
                            ))
                        }
                    }
                    match cx.take_tag(source)? {
                        Some((tag, pos)) => op(&cx, tag, pos, source)?,
                        None => break
                    }
                }
            }
        }
        Ok(())
    }

    /// Takes the content octets of a primitive value.
    fn take_primitive<S: Source>(
        length: Length, pos: Pos, source: &mut S
    ) -> Result<Bytes, DecodeError> {
        match length {
            Length::Definite(len) => source.take_exact(len),
            Length::Indefinite => {
                Err(DecodeError::malformed_length(
                    "indefinite length primitive value", pos
                ))
            }
        }
    }

    /// Decodes the length and content of a value of a universal type.
    fn decode_universal<S: Source>(
        &self, handler: Handler, pos: Pos, source: &mut S
    ) -> Result<Value, DecodeError> {
        let length = self.take_length(source)?;
        let content_pos = source.pos();
        match handler {
            Handler::Boolean => {
                let content = Self::take_primitive(length, pos, source)?;
                match *content.as_ref() {
                    [octet] => Ok(Value::Boolean(octet != 0)),
                    _ => {
                        Err(DecodeError::length_mismatch(
                            "boolean with length other than one", pos
                        ))
                    }
                }
            }
            Handler::Integer => {
                self.take_integer(length, pos, source).map(Value::Integer)
            }
            Handler::Enumerated => {
                self.take_integer(length, pos, source).map(Value::Enumerated)
            }
            Handler::Null => {
                if !Self::take_primitive(length, pos, source)?.is_empty() {
                    return Err(DecodeError::length_mismatch(
                        "null with non-zero length", pos
                    ))
                }
                Ok(Value::Null)
            }
            Handler::ObjectId => {
                let content = Self::take_primitive(length, pos, source)?;
                Oid::from_content(&content, content_pos).map(Value::ObjectId)
            }
            Handler::Real => {
                let content = Self::take_primitive(length, pos, source)?;
                real::from_content(&content, content_pos).map(Value::Real)
            }
            Handler::BitString(constructed) => {
                self.take_bit_string(
                    constructed, length, pos, source
                ).map(Value::BitString)
            }
            Handler::OctetString(false) => {
                Self::take_primitive(length, pos, source).map(|content| {
                    Value::OctetString(OctetString::new(content))
                })
            }
            Handler::OctetString(true) => {
                let mut octets = Vec::new();
                self.take_string_segments(
                    Tag::OCTET_STRING, true, length, pos, &mut octets, source
                )?;
                Ok(Value::OctetString(OctetString::from(octets)))
            }
            Handler::String(kind, constructed) => {
                let mut octets = Vec::new();
                self.take_string_segments(
                    kind.tag(), constructed, length, pos, &mut octets, source
                )?;
                CharacterString::from_content(
                    kind, octets, self.mode(), content_pos
                ).map(Value::String)
            }
            Handler::Sequence => {
                self.take_values(length, pos, source).map(|values| {
                    Value::Sequence(Sequence::from_vec(values))
                })
            }
            Handler::Set => {
                self.take_values(length, pos, source).map(|values| {
                    Value::Set(Set::from_vec(values))
                })
            }
        }
    }

    /// Takes the content of an INTEGER or ENUMERATED.
    fn take_integer<S: Source>(
        &self, length: Length, pos: Pos, source: &mut S
    ) -> Result<i64, DecodeError> {
        let content = Self::take_primitive(length, pos, source)?;
        int::i64_from_content(&content).ok_or_else(|| {
            DecodeError::unsupported("integer too large", pos)
        })
    }

    /// Takes the content of a SEQUENCE or SET.
    fn take_values<S: Source>(
        &self, length: Length, pos: Pos, source: &mut S
    ) -> Result<Vec<Value>, DecodeError> {
        let mut res = Vec::new();
        self.take_children(length, pos, source, |cx, tag, pos, source| {
            res.push(cx.decode_tagged(tag, pos, source)?);
            Ok(())
        })?;
        Ok(res)
    }

    /// Takes the content of a BIT STRING.
    ///
    /// In constructed form, the segments must be bit strings themselves.
    /// Their bits are joined.
    fn take_bit_string<S: Source>(
        &self, constructed: bool, length: Length, pos: Pos, source: &mut S
    ) -> Result<BitString, DecodeError> {
        if !constructed {
            let content_pos = source.pos();
            let content = Self::take_primitive(length, pos, source)?;
            return BitString::from_content(content, content_pos)
        }
        let mut res = BitStringBuilder::new();
        self.take_children(length, pos, source, |cx, tag, pos, source| {
            if tag.primitive() != Tag::BIT_STRING {
                return Err(DecodeError::UnexpectedValue {
                    expected: Tag::BIT_STRING, found: tag, pos
                })
            }
            let length = cx.take_length(source)?;
            res.append(&cx.take_bit_string(
                tag.is_constructed(), length, pos, source
            )?);
            Ok(())
        })?;
        Ok(res.finish())
    }

    /// Collects the content octets of a string type.
    ///
    /// In constructed form, segments may be octet strings or values with
    /// the tag `expected`, either of them possibly constructed again. All
    /// their octets are appended to `target` in order.
    fn take_string_segments<S: Source>(
        &self, expected: Tag, constructed: bool, length: Length, pos: Pos,
        target: &mut Vec<u8>, source: &mut S,
    ) -> Result<(), DecodeError> {
        if !constructed {
            let content = Self::take_primitive(length, pos, source)?;
            target.extend_from_slice(&content);
            return Ok(())
        }
        self.take_children(length, pos, source, |cx, tag, pos, source| {
            let segment = tag.primitive();
            if segment != Tag::OCTET_STRING && segment != expected {
                return Err(DecodeError::UnexpectedValue {
                    expected, found: tag, pos
                })
            }
            let length = cx.take_length(source)?;
            cx.take_string_segments(
                expected, tag.is_constructed(), length, pos, target, source
            )
        })
    }
}


//--- Clone and Copy

impl<R> Clone for Context<'_, R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Context<'_, R> { }


//------------ Handler -------------------------------------------------------

/// How to decode a value of a universal type.
///
/// The boolean of the string variants says whether the value is
/// constructed.
#[derive(Clone, Copy, Debug)]
enum Handler {
    Boolean,
    Integer,
    Enumerated,
    Null,
    ObjectId,
    Real,
    BitString(bool),
    OctetString(bool),
    String(StringKind, bool),
    Sequence,
    Set,
}

/// The handlers for all identifier octets of the universal class.
static HANDLERS: [Option<Handler>; 0x40] = Handler::table();

impl Handler {
    /// Returns the handler for the given identifier octet.
    fn get(tag: Tag) -> Option<Self> {
        HANDLERS.get(usize::from(tag.to_u8())).copied().flatten()
    }

    const fn table() -> [Option<Handler>; 0x40] {
        let mut res = [None; 0x40];
        res[Tag::BOOLEAN.to_u8() as usize] = Some(Handler::Boolean);
        res[Tag::INTEGER.to_u8() as usize] = Some(Handler::Integer);
        res[Tag::ENUMERATED.to_u8() as usize] = Some(Handler::Enumerated);
        res[Tag::NULL.to_u8() as usize] = Some(Handler::Null);
        res[Tag::OID.to_u8() as usize] = Some(Handler::ObjectId);
        res[Tag::REAL.to_u8() as usize] = Some(Handler::Real);
        res[Tag::BIT_STRING.to_u8() as usize]
            = Some(Handler::BitString(false));
        res[Tag::BIT_STRING.constructed().to_u8() as usize]
            = Some(Handler::BitString(true));
        res[Tag::OCTET_STRING.to_u8() as usize]
            = Some(Handler::OctetString(false));
        res[Tag::OCTET_STRING.constructed().to_u8() as usize]
            = Some(Handler::OctetString(true));
        res[Tag::SEQUENCE.to_u8() as usize] = Some(Handler::Sequence);
        res[Tag::SET.to_u8() as usize] = Some(Handler::Set);
        let mut i = 0;
        while i < StringKind::ALL.len() {
            let kind = StringKind::ALL[i];
            res[kind.tag().to_u8() as usize]
                = Some(Handler::String(kind, false));
            res[kind.tag().constructed().to_u8() as usize]
                = Some(Handler::String(kind, true));
            i += 1;
        }
        res
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use crate::decode::{GenericResolver, Resolved, SliceSource};
    use crate::encode::Values;
    use super::*;

    fn decode(data: &[u8]) -> Result<Value, DecodeError> {
        Decoder::new().decode_slice(data)
    }

    /// A resolver in the style of LDAP.
    ///
    /// Constructed application tags are implicit sequences, primitive
    /// context tags implicit octet strings.
    struct Protocol;

    impl TagResolver for Protocol {
        fn resolve<S: Source>(
            &self, tag: Tag, source: &mut S, cx: &Context<'_, Self>
        ) -> Result<Resolved, DecodeError> {
            match (tag.class(), tag.is_constructed()) {
                (crate::tag::Class::Application, true) => {
                    cx.decode_implicit(tag, Tag::SEQUENCE, source)
                        .map(Resolved::implicit)
                }
                (crate::tag::Class::Context, false) => {
                    cx.decode_implicit(tag, Tag::OCTET_STRING, source)
                        .map(Resolved::implicit)
                }
                _ => {
                    Err(DecodeError::UnknownTag { tag, pos: source.pos() })
                }
            }
        }
    }

    #[test]
    fn handler_table() {
        assert!(Handler::get(Tag::BOOLEAN).is_some());
        assert!(Handler::get(Tag::BOOLEAN.constructed()).is_none());
        assert!(Handler::get(Tag::SEQUENCE.primitive()).is_none());
        assert!(Handler::get(Tag::UTC_TIME.constructed()).is_some());
        assert!(Handler::get(Tag::IA5_STRING).is_none());
        assert!(Handler::get(Tag::END_OF_CONTENTS).is_none());
        assert!(Handler::get(Tag::ctx(1)).is_none());
    }

    #[test]
    fn decode_items() {
        let decoder = Decoder::new();
        let cx = Context::new(&decoder);
        let mut source = SliceSource::new(b"\x00\x00\x05\x00");
        assert_eq!(cx.decode_item(&mut source).unwrap(), Item::EndOfContents);
        assert_eq!(
            cx.decode_item(&mut source).unwrap(), Item::Value(Value::Null)
        );
        assert!(matches!(
            cx.decode_item(&mut SliceSource::new(b"\x00\x01")),
            Err(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn indefinite_sequence() {
        assert_eq!(
            decode(b"\x30\x80\x01\x01\xFF\x02\x01\x01\x00\x00").unwrap(),
            decode(b"\x30\x06\x01\x01\xFF\x02\x01\x01").unwrap()
        );
        assert!(matches!(
            decode(b"\x30\x80\x01\x01\xFF"),
            Err(DecodeError::Truncated { .. })
        ));
        // Nested indefinite value ending at the outer end.
        assert_eq!(
            decode(b"\x31\x80\x30\x80\x00\x00\x00\x00").unwrap(),
            Value::Set(Set::from_vec(vec![Value::Sequence(Sequence::new())]))
        );
    }

    #[test]
    fn definite_length_mismatch() {
        // The inner integer claims more octets than the sequence has.
        assert!(matches!(
            decode(b"\x30\x03\x02\x02\x01\x2C"),
            Err(DecodeError::LengthMismatch { .. })
        ));
        // An indefinite value that doesn’t end within its parent.
        assert!(matches!(
            decode(b"\x30\x04\x30\x80\x05\x00\x00\x00"),
            Err(DecodeError::LengthMismatch { .. })
        ));
        assert!(matches!(
            decode(b"\x30\x02\x00\x00"),
            Err(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn primitive_contracts() {
        assert!(matches!(
            decode(b"\x01\x02\xFF\xFF"),
            Err(DecodeError::LengthMismatch { .. })
        ));
        assert!(matches!(
            decode(b"\x01\x00"),
            Err(DecodeError::LengthMismatch { .. })
        ));
        assert!(matches!(
            decode(b"\x05\x01\x00"),
            Err(DecodeError::LengthMismatch { .. })
        ));
        assert!(matches!(
            decode(b"\x02\x80\x01\x00\x00"),
            Err(DecodeError::MalformedLength { .. })
        ));
        assert!(matches!(
            decode(b"\x02\x09\x01\x00\x00\x00\x00\x00\x00\x00\x00"),
            Err(DecodeError::UnsupportedEncoding { .. })
        ));
        assert_eq!(decode(b"\x02\x00").unwrap(), Value::Integer(0));
        assert_eq!(
            decode(b"\x02\x03\x00\x00\xFF").unwrap(), Value::Integer(255)
        );
        assert_eq!(
            decode(b"\x0A\x01\x03").unwrap(), Value::Enumerated(3)
        );
    }

    #[test]
    fn unknown_tags() {
        assert!(matches!(
            decode(b"\x16\x01a"),
            Err(DecodeError::UnknownTag { .. })
        ));
        assert!(matches!(
            decode(b"\x21\x03\x01\x01\xFF"),
            Err(DecodeError::UnknownTag { .. })
        ));
        assert!(matches!(
            decode(b"\x1F\x01\x00"),
            Err(DecodeError::UnsupportedEncoding { .. })
        ));
        assert!(matches!(
            decode(b"\x80\x01\x00"),
            Err(DecodeError::UnknownTag { .. })
        ));
        assert!(matches!(
            decode(b"\x00\x00"),
            Err(DecodeError::Malformed { .. })
        ));
    }

    #[test]
    fn constructed_octet_string() {
        let value = decode(
            b"\x24\x80\x04\x02ab\x24\x04\x04\x02cd\x00\x00"
        ).unwrap();
        assert_eq!(
            value.as_octet_string().map(|s| s.as_slice()),
            Some(b"abcd".as_ref())
        );
        assert!(matches!(
            decode(b"\x24\x03\x02\x01\x05"),
            Err(DecodeError::UnexpectedValue { .. })
        ));
        assert!(matches!(
            decode(b"\x24\x04\x13\x02ab"),
            Err(DecodeError::UnexpectedValue { .. })
        ));
    }

    #[test]
    fn constructed_bit_string() {
        let value = decode(
            b"\x23\x80\x03\x02\x00\xA5\x03\x02\x04\xF0\x00\x00"
        ).unwrap();
        let Value::BitString(bits) = value else {
            panic!("not a bit string")
        };
        assert_eq!(bits.bit_len(), 12);
        assert_eq!(bits.octet_slice(), b"\xA5\xF0");
        assert!(matches!(
            decode(b"\x23\x03\x04\x01\x00"),
            Err(DecodeError::UnexpectedValue { .. })
        ));
    }

    #[test]
    fn character_strings() {
        assert_eq!(
            decode(b"\x13\x03abc").unwrap(),
            Value::String(CharacterString::printable("abc"))
        );
        // Segments of both types, a character split between them.
        assert_eq!(
            decode(b"\x3A\x80\x04\x02a\xC3\x1A\x01\xA9\x00\x00").unwrap(),
            Value::String(CharacterString::visible("aé"))
        );
        assert_eq!(
            decode(b"\x37\x06\x17\x04\x39\x39\x31\x32").unwrap(),
            Value::String(CharacterString::utc_time("9912"))
        );
        assert!(matches!(
            decode(b"\x12\x01\xFF"),
            Err(DecodeError::InvalidCharacterData {
                kind: StringKind::Numeric, ..
            })
        ));
        assert!(matches!(
            decode(b"\x33\x03\x12\x01a"),
            Err(DecodeError::UnexpectedValue { .. })
        ));
    }

    #[test]
    fn lenient_strings() {
        let decoder = Decoder::new().with_mode(Mode::Lenient);
        assert_eq!(
            decoder.decode_slice(b"\x30\x05\x12\x01\xFF\x05\x00").unwrap(),
            Value::Sequence(Sequence::from_vec(vec![
                Value::String(CharacterString::numeric("")),
                Value::Null,
            ]))
        );
    }

    #[test]
    fn nesting_depth() {
        let decoder = Decoder::new().with_max_depth(2);
        assert!(decoder.decode_slice(b"\x30\x02\x30\x00").is_ok());
        assert!(matches!(
            decoder.decode_slice(b"\x30\x04\x30\x02\x30\x00"),
            Err(DecodeError::NestingTooDeep { limit: 2, .. })
        ));

        // Deep nesting with the default limit fails cleanly.
        let mut data = Vec::new();
        for _ in 0..1000 {
            data.extend_from_slice(b"\x30\x80");
        }
        assert!(matches!(
            decode(&data),
            Err(DecodeError::NestingTooDeep { limit: 64, .. })
        ));
    }

    #[test]
    fn resolved_tags() {
        let decoder = Decoder::with_resolver(Protocol);
        // [APPLICATION 0] { INTEGER 3, [0] 'abc' }
        let data = b"\x60\x08\x02\x01\x03\x80\x03abc";
        let value = decoder.decode_slice(data).unwrap();
        let tagged = value.as_tagged().unwrap();
        assert_eq!(tagged.tag(), Tag::application(0).constructed());
        assert!(tagged.is_implicit());
        let children = tagged.value().children().unwrap();
        assert_eq!(children[0], Value::Integer(3));
        let inner = children[1].as_tagged().unwrap();
        assert_eq!(inner.tag(), Tag::ctx(0));
        assert_eq!(
            inner.value().as_octet_string().map(|s| s.as_slice()),
            Some(b"abc".as_ref())
        );
        assert_eq!(value.to_vec(), data);

        assert!(matches!(
            decoder.decode_slice(b"\xA1\x03\x02\x01\x05"),
            Err(DecodeError::UnknownTag { .. })
        ));
        assert!(matches!(
            Decoder::new().decode_slice(b"\x60\x00"),
            Err(DecodeError::UnknownTag { .. })
        ));
    }

    #[test]
    fn explicit_tags() {
        let decoder = Decoder::with_resolver(GenericResolver::Explicit);
        let value = decoder.decode_slice(b"\xA3\x80\x02\x01\x05\x00\x00")
            .unwrap();
        assert_eq!(
            value,
            Value::Tagged(Tagged::explicit(Tag::ctx(3), Value::Integer(5)))
        );
        assert!(matches!(
            decoder.decode_slice(b"\xA3\x06\x02\x01\x05\x02\x01\x05"),
            Err(DecodeError::Malformed { .. })
        ));
        assert!(matches!(
            decoder.decode_slice(b"\xA3\x00"),
            Err(DecodeError::Malformed { .. })
        ));
    }
}
