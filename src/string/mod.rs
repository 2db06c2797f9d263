//! BER encoding for various strings types.
//!
//! This module provides types that match the string encodings used in
//! value trees.
//!
//! There are two types of strings for binary data. [`OctetString`]s contain
//! a unrestricted sequence of octets while [`BitString`]s contain a sequence
//! of bits that does not need to be of a length divisible by eight.
//!
//! In addition, there is the [`CharacterString`] covering the character
//! string types understood by the decoder. Its [`StringKind`] says which of
//! those it is:
//!
//! * NumericString contains only decimals digits and spaces,
//! * PrintableString contains a subset of ASCII characters including
//!   letters, digits, and a few symbols,
//! * UTCTime contains a time stamp in a restricted ASCII form,
//! * VisibleString contains printable ASCII characters.
//!
//! All of them keep their content as a Rust string, i.e., as UTF-8. The
//! character set restrictions of the individual types are not enforced.
//!
//! All of these types may be encoded in constructed form in which case the
//! content of the segments is concatenated.

//--- Re-exports

pub use self::bit::{BitString, BitStringBuilder, BitStringIter};
pub use self::character::{CharacterString, StringKind};
pub use self::octet::OctetString;

//--- Private modules

mod bit;
mod character;
mod octet;
