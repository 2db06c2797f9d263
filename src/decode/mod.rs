//! Decoding data in BER.
//!
//! This module provides the means to decode BER encoded data into a tree
//! of [`Value`]s.
//!
//! Data is read from a [`Source`]. There are sources atop octet slices,
//! atop [`Bytes`] values, and atop anything implementing `io::Read`.
//! Decoding is driven by a [`Decoder`] which holds the configuration: the
//! [`Mode`], the maximum nesting depth, and a [`TagResolver`].
//!
//! Values of the universal types the decoder knows about are decoded
//! directly. Values with tags of the application, context-specific, or
//! private class are handed to the resolver which knows how the embedding
//! protocol uses these tags. It decides whether the tag is implicit or
//! explicit and decodes the value accordingly with the help of the
//! [`Context`] it is given. The result ends up in a [`Tagged`] value.
//!
//! All errors are reported through [`DecodeError`].
//!
//! [`Bytes`]: bytes::Bytes
//! [`Mode`]: crate::Mode
//! [`Tagged`]: crate::Tagged
//! [`Value`]: crate::Value

pub use self::decoder::Decoder;
pub use self::dispatch::{Context, Item};
pub use self::error::DecodeError;
pub use self::resolver::{GenericResolver, NoResolver, Resolved, TagResolver};
pub use self::source::{
    BytesSource, Pos, ReaderSource, SliceSource, Source
};

mod decoder;
mod dispatch;
mod error;
mod resolver;
mod source;
