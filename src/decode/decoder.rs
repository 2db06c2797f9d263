//! The decoder.
//!
//! This is a private module. Its public items are re-exported by the parent.

use bytes::Bytes;
use crate::mode::Mode;
use crate::tag::Tag;
use crate::value::Value;
use super::dispatch::Context;
use super::error::DecodeError;
use super::resolver::{NoResolver, TagResolver};
use super::source::{BytesSource, SliceSource, Source};


//------------ Decoder -------------------------------------------------------

/// A configured BER decoder.
///
/// The decoder holds everything that stays the same for all values decoded
/// with it: the resolver for application-specific tags, the decoding mode,
/// and the maximum nesting depth. It doesn’t hold any state of its own, so
/// it can be shared freely and used for any number of sources.
///
/// # Examples
///
/// Reading a message after another off a stream:
///
/// ```
/// use bertree::decode::{Decoder, ReaderSource};
///
/// let data: &[u8] = b"\x02\x01\x01\x02\x01\x02";
/// let decoder = Decoder::new();
/// let mut source = ReaderSource::new(data);
/// while let Some(value) = decoder.decode_opt(&mut source).unwrap() {
///     println!("{}", value);
/// }
/// ```
#[derive(Clone, Debug)]
pub struct Decoder<R = NoResolver> {
    resolver: R,
    mode: Mode,
    max_depth: usize,
}

impl Decoder {
    /// The default maximum nesting depth.
    pub const DEFAULT_MAX_DEPTH: usize = 64;

    /// Creates a decoder that rejects application-specific tags.
    pub fn new() -> Self {
        Self::with_resolver(NoResolver)
    }
}

impl Default for Decoder {
    fn default() -> Self {
        Self::new()
    }
}

impl<R> Decoder<R> {
    /// Creates a decoder using the given resolver.
    pub fn with_resolver(resolver: R) -> Self {
        Decoder {
            resolver,
            mode: Mode::default(),
            max_depth: Decoder::<NoResolver>::DEFAULT_MAX_DEPTH,
        }
    }

    /// Changes the decoding mode.
    #[must_use]
    pub fn with_mode(self, mode: Mode) -> Self {
        Decoder { mode, ..self }
    }

    /// Changes the maximum nesting depth.
    ///
    /// A value at the top level has depth zero, its children depth one
    /// and so on. Values nested deeper than `max_depth` are rejected.
    #[must_use]
    pub fn with_max_depth(self, max_depth: usize) -> Self {
        Decoder { max_depth, ..self }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    pub fn resolver(&self) -> &R {
        &self.resolver
    }
}

impl<R: TagResolver> Decoder<R> {
    /// Decodes a single value from the source.
    ///
    /// Exactly the octets of the value are taken from the source. An
    /// end-of-contents marker in place of the value is an error.
    pub fn decode<S: Source>(
        &self, mut source: S
    ) -> Result<Value, DecodeError> {
        Context::new(self).decode_value(&mut source)
    }

    /// Decodes a single value if there is one.
    ///
    /// Returns `Ok(None)` if the source ends before the first octet of the
    /// value. If it ends later, that’s an error.
    pub fn decode_opt<S: Source>(
        &self, mut source: S
    ) -> Result<Option<Value>, DecodeError> {
        let pos = source.pos();
        match source.take_opt_u8()? {
            Some(octet) => {
                Context::new(self).decode_after_tag(
                    Tag::from_u8(octet), pos, &mut source
                ).map(Some)
            }
            None => Ok(None)
        }
    }

    /// Decodes an octets slice containing exactly one value.
    ///
    /// Octets left over after the value result in an error.
    pub fn decode_slice(&self, data: &[u8]) -> Result<Value, DecodeError> {
        let mut source = SliceSource::new(data);
        let res = self.decode(&mut source)?;
        if !source.remaining().is_empty() {
            return Err(DecodeError::TrailingData { pos: source.pos() })
        }
        Ok(res)
    }

    /// Decodes a bytes value containing exactly one value.
    ///
    /// Octet strings and bit strings of the result share the octets
    /// with `data`.
    pub fn decode_bytes(&self, data: Bytes) -> Result<Value, DecodeError> {
        let mut source = BytesSource::new(data);
        let res = self.decode(&mut source)?;
        if !source.remaining().is_empty() {
            return Err(DecodeError::TrailingData { pos: source.pos() })
        }
        Ok(res)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use std::io;
    use crate::decode::{ReaderSource, Pos};
    use crate::string::OctetString;
    use super::*;

    #[test]
    fn trailing_data() {
        assert!(matches!(
            Decoder::new().decode_slice(b"\x05\x00\x05"),
            Err(DecodeError::TrailingData { pos }) if pos == Pos::from(2)
        ));
        let mut source = SliceSource::new(b"\x05\x00\x05");
        assert_eq!(Decoder::new().decode(&mut source).unwrap(), Value::Null);
        assert_eq!(source.remaining(), b"\x05");
    }

    #[test]
    fn stream_of_messages() {
        let data: &[u8] = b"\x02\x02\x01\x2C\x30\x80\x05\x00\x00\x00\x01\x01";
        let decoder = Decoder::new();
        let mut source = ReaderSource::new(io::Cursor::new(data));
        assert_eq!(
            decoder.decode_opt(&mut source).unwrap(),
            Some(Value::Integer(300))
        );
        assert!(matches!(
            decoder.decode_opt(&mut source).unwrap(),
            Some(Value::Sequence(_))
        ));
        assert!(matches!(
            decoder.decode_opt(&mut source),
            Err(DecodeError::Truncated { .. })
        ));
        assert_eq!(decoder.decode_opt(&mut source).unwrap(), None);
    }

    #[test]
    fn zero_copy_bytes() {
        let data = Bytes::from_static(b"\x04\x03foo");
        let value = Decoder::new().decode_bytes(data.clone()).unwrap();
        let octets = value.as_octet_string().cloned().map(
            OctetString::into_bytes
        ).unwrap();
        assert_eq!(octets.as_ref(), b"foo");
        assert_eq!(octets.as_ptr(), data[2..].as_ptr());
    }

    #[test]
    fn settings() {
        let decoder = Decoder::new()
            .with_mode(Mode::Lenient)
            .with_max_depth(3);
        assert_eq!(decoder.mode(), Mode::Lenient);
        assert_eq!(decoder.max_depth(), 3);
        assert_eq!(Decoder::default().mode(), Mode::Ber);
        assert_eq!(Decoder::default().max_depth(), 64);
    }
}
