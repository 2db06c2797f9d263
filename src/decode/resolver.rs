//! Resolving application-specific tags.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::tag::Tag;
use crate::value::Value;
use super::dispatch::Context;
use super::error::DecodeError;
use super::source::Source;


//------------ TagResolver ---------------------------------------------------

/// A type that knows how to decode values with application-specific tags.
///
/// Whenever the decoder encounters a tag of the application,
/// context-specific, or private class, it asks the resolver to decode the
/// value. Only the resolver knows whether the tag is used implicitly, in
/// which case it replaces the tag of the value, or explicitly, in which
/// case the value is wrapped in a constructed value.
///
/// The identifier octet has been taken from the source already. The
/// resolver needs to take the length and content octets of the value and
/// nothing else. The [`Context`] has helpers for the common cases:
/// [`Context::decode_implicit`] decodes the value as if it had a given
/// universal tag, [`Context::decode_explicit`] decodes a wrapped value.
///
/// The dispatcher wraps the returned value in a [`Tagged`] with the tag.
///
/// [`Tagged`]: crate::Tagged
pub trait TagResolver: Sized {
    /// Decodes the value for the given tag.
    fn resolve<S: Source>(
        &self, tag: Tag, source: &mut S, cx: &Context<'_, Self>
    ) -> Result<Resolved, DecodeError>;
}


//------------ Resolved ------------------------------------------------------

/// A value decoded by a resolver.
#[derive(Clone, Debug, PartialEq)]
pub struct Resolved {
    /// The decoded value without the tag.
    pub value: Value,

    /// Whether the tag was implicit.
    pub implicit: bool,
}

impl Resolved {
    /// Creates a value for an implicit tag.
    pub fn implicit(value: Value) -> Self {
        Resolved { value, implicit: true }
    }

    /// Creates a value for an explicit tag.
    pub fn explicit(value: Value) -> Self {
        Resolved { value, implicit: false }
    }
}


//------------ NoResolver ----------------------------------------------------

/// A resolver that doesn’t know any tags.
///
/// All values with application-specific tags are rejected with an
/// [`UnknownTag`][DecodeError::UnknownTag] error.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NoResolver;

impl TagResolver for NoResolver {
    fn resolve<S: Source>(
        &self, tag: Tag, source: &mut S, _cx: &Context<'_, Self>
    ) -> Result<Resolved, DecodeError> {
        Err(DecodeError::UnknownTag { tag, pos: source.pos() })
    }
}


//------------ GenericResolver -----------------------------------------------

/// A resolver for data without knowledge of the protocol.
///
/// Since a primitive value can’t be explicitly tagged, primitive values are
/// always decoded as implicitly tagged octet strings. For constructed
/// values, the variant decides.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub enum GenericResolver {
    /// Constructed values are explicitly tagged and contain exactly one
    /// value.
    #[default]
    Explicit,

    /// Constructed values are implicitly tagged sequences.
    Implicit,
}

impl TagResolver for GenericResolver {
    fn resolve<S: Source>(
        &self, tag: Tag, source: &mut S, cx: &Context<'_, Self>
    ) -> Result<Resolved, DecodeError> {
        if !tag.is_constructed() {
            return cx.decode_implicit(
                tag, Tag::OCTET_STRING, source
            ).map(Resolved::implicit)
        }
        match *self {
            GenericResolver::Explicit => {
                cx.decode_explicit(tag, source).map(Resolved::explicit)
            }
            GenericResolver::Implicit => {
                cx.decode_implicit(
                    tag, Tag::SEQUENCE, source
                ).map(Resolved::implicit)
            }
        }
    }
}


//============ Tests =========================================================
