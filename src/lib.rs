//! Handling of value trees in Basic Encoding Rules.
//!
//! This crate decodes data encoded in the Basic Encoding Rules (BER) of
//! ASN.1 into a tree of [`Value`]s and encodes such trees back into BER. It
//! is meant for protocols such as LDAP that use a small set of universal
//! types and put their own meaning on application-specific tags.
//!
//! Since BER is self-describing, values of the universal types can be
//! decoded without knowing the specification of the data. This isn’t true
//! for values with tags of the application, context-specific, or private
//! classes: whether such a tag replaces the tag of the value or wraps it
//! in a constructed value is only known to the protocol. The decoder thus
//! hands these values to a [`TagResolver`] provided by the protocol.
//!
//! Decoding is done via the [`decode`] module, encoding via the [`encode`]
//! module. The types of the values live in their own modules but are all
//! re-exported here.
//!
//! # Examples
//!
//! ```
//! use bertree::{Sequence, Value};
//! use bertree::encode::Values;
//!
//! let mut seq = Sequence::new();
//! seq.push(true);
//! seq.push(1i64);
//! let encoded = Value::from(seq).to_vec();
//! assert_eq!(encoded, b"\x30\x06\x01\x01\xFF\x02\x01\x01");
//!
//! let decoded = Value::decode_slice(&encoded).unwrap();
//! assert_eq!(decoded.to_string(), "SEQUENCE { BOOLEAN TRUE, INTEGER 1 }");
//! ```
//!
//! [`TagResolver`]: decode::TagResolver

//--- Re-exports

pub use self::construct::{Sequence, Set};
pub use self::decode::Decoder;
pub use self::length::Length;
pub use self::mode::Mode;
pub use self::oid::{Oid, OidError};
pub use self::string::{BitString, CharacterString, OctetString, StringKind};
pub use self::tag::{Class, Tag};
pub use self::value::{Kind, Value};
pub use self::wrapper::{Any, Choice, Tagged};


//--- Public modules

pub mod decode;
pub mod encode;

pub mod int;
pub mod oid;
pub mod real;
pub mod string;


//--- Private modules

mod construct;
mod length;
mod mode;
mod tag;
mod value;
mod wrapper;

#[cfg(test)]
mod proptests;
