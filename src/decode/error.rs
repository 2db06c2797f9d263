//! Error Handling.
//!
//! This is a private module. Its public content is being re-exported by the
//! parent module.

use std::io;
use thiserror::Error;
use crate::string::StringKind;
use crate::tag::Tag;
use super::source::Pos;


//------------ DecodeError ---------------------------------------------------

/// An error happened while decoding data.
///
/// All errors are fatal for the value being decoded and, since decoding is
/// recursive, for every value enclosing it. Apart from errors of the
/// underlying reader, each error carries the position in the source where
/// it was detected.
#[derive(Debug, Error)]
pub enum DecodeError {
    /// The length octets are malformed.
    ///
    /// This covers the reserved length octet 0xFF, length octets ending
    /// early, definite lengths that don’t fit into a `usize`, and
    /// indefinite lengths on primitive values.
    #[error("malformed length at {pos}: {msg}")]
    MalformedLength {
        msg: &'static str,
        pos: Pos,
    },

    /// The identifier octet is neither known nor resolvable.
    #[error("unknown tag {tag:?} at {pos}")]
    UnknownTag {
        tag: Tag,
        pos: Pos,
    },

    /// A value’s length disagrees with its content or its surroundings.
    #[error("length mismatch at {pos}: {msg}")]
    LengthMismatch {
        msg: &'static str,
        pos: Pos,
    },

    /// The data uses an encoding that isn’t supported.
    #[error("unsupported encoding at {pos}: {msg}")]
    UnsupportedEncoding {
        msg: &'static str,
        pos: Pos,
    },

    /// The source ended before the value was complete.
    #[error("unexpected end of data at {pos}")]
    Truncated {
        pos: Pos,
    },

    /// The content of a character string isn’t valid UTF-8.
    #[error("invalid {kind} content at {pos}")]
    InvalidCharacterData {
        kind: StringKind,
        pos: Pos,
    },

    /// The content octets of a value are malformed.
    #[error("malformed value at {pos}: {msg}")]
    Malformed {
        msg: &'static str,
        pos: Pos,
    },

    /// A segment of a constructed string has the wrong type.
    #[error("unexpected {found} in {expected} at {pos}")]
    UnexpectedValue {
        expected: Tag,
        found: Tag,
        pos: Pos,
    },

    /// Values are nested deeper than the decoder allows.
    #[error("values nested deeper than {limit} levels at {pos}")]
    NestingTooDeep {
        limit: usize,
        pos: Pos,
    },

    /// There is data left after the value.
    #[error("trailing data at {pos}")]
    TrailingData {
        pos: Pos,
    },

    /// Reading from the underlying reader failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl DecodeError {
    pub(crate) fn malformed(msg: &'static str, pos: Pos) -> Self {
        DecodeError::Malformed { msg, pos }
    }

    pub(crate) fn malformed_length(msg: &'static str, pos: Pos) -> Self {
        DecodeError::MalformedLength { msg, pos }
    }

    pub(crate) fn length_mismatch(msg: &'static str, pos: Pos) -> Self {
        DecodeError::LengthMismatch { msg, pos }
    }

    pub(crate) fn unsupported(msg: &'static str, pos: Pos) -> Self {
        DecodeError::UnsupportedEncoding { msg, pos }
    }

    /// Returns the position where the error was detected.
    ///
    /// Returns `None` for errors of the underlying reader.
    pub fn pos(&self) -> Option<Pos> {
        match *self {
            DecodeError::MalformedLength { pos, .. }
            | DecodeError::UnknownTag { pos, .. }
            | DecodeError::LengthMismatch { pos, .. }
            | DecodeError::UnsupportedEncoding { pos, .. }
            | DecodeError::Truncated { pos }
            | DecodeError::InvalidCharacterData { pos, .. }
            | DecodeError::Malformed { pos, .. }
            | DecodeError::UnexpectedValue { pos, .. }
            | DecodeError::NestingTooDeep { pos, .. }
            | DecodeError::TrailingData { pos } => Some(pos),
            DecodeError::Io(_) => None,
        }
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn display() {
        assert_eq!(
            DecodeError::malformed_length("reserved length octet", 4.into())
                .to_string(),
            "malformed length at 4: reserved length octet"
        );
        assert_eq!(
            DecodeError::UnknownTag { tag: Tag::from_u8(0x0c), pos: 0.into() }
                .to_string(),
            "unknown tag Tag(0x0c [UNIVERSAL 12]) at 0"
        );
        assert_eq!(
            DecodeError::UnexpectedValue {
                expected: Tag::OCTET_STRING, found: Tag::INTEGER,
                pos: 7.into()
            }.to_string(),
            "unexpected INTEGER in OCTET STRING at 7"
        );
    }

    #[test]
    fn pos() {
        assert_eq!(
            DecodeError::Truncated { pos: 12.into() }.pos(),
            Some(12.into())
        );
        assert_eq!(
            DecodeError::from(io::Error::other("gone")).pos(),
            None
        );
    }
}
