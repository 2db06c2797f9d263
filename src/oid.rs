//! ASN.1 Object Identifiers.
//!
//! This module contains the [`Oid`] type that implements object identifiers,
//! a construct used by ANS.1 to uniquely identify all sorts of things. The
//! type is also re-exported at the top-level.

use std::{fmt, slice};
use std::str::FromStr;
use smallvec::SmallVec;
use thiserror::Error;
use crate::decode::{DecodeError, Pos};
use crate::encode::{PrimitiveContent, Target};
use crate::tag::Tag;


//------------ Oid -----------------------------------------------------------

/// An object identifer.
///
/// Object identifiers are globally unique, hierarchical values that are used
/// to identify objects or their type. When written, they are presented as a
/// sequence of integers separated by dots such as ‘1.3.6.1.5.5.7.1’.
///
/// Values of this type keep the sequence of integers, the arcs, rather than
/// the encoded form. There are always at least two arcs. The first arc is
/// 0, 1, or 2 and if it is 0 or 1, the second arc is less than 40.
///
/// You can create a value either from a slice of arcs via [`Oid::new`] or
/// by parsing the dotted notation through the `FromStr` impl.
///
/// # BER Encoding
///
/// The content octets are a sequence of sub-identifiers, each a base 128
/// number with the most significant bit of each octet set except for the
/// last one. The first two arcs are combined into a single sub-identifier
/// with the value `40 * first + second`.
#[derive(Clone, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct Oid {
    arcs: SmallVec<[u64; 8]>,
}

impl Oid {
    /// Creates an object identifier from its arcs.
    pub fn new(arcs: &[u64]) -> Result<Self, OidError> {
        match *arcs {
            [] | [_] => Err(OidError::TooShort),
            [first, _, ..] if first > 2 => Err(OidError::FirstArc),
            [first, second, ..] if first < 2 && second >= 40 => {
                Err(OidError::SecondArc)
            }
            [_, second, ..] if second > u64::MAX - 80 => {
                Err(OidError::Overflow)
            }
            _ => Ok(Oid { arcs: arcs.into() })
        }
    }

    /// Returns the arcs of the object identifier.
    pub fn arcs(&self) -> &[u64] {
        self.arcs.as_ref()
    }

    /// Returns an iterator over the arcs.
    pub fn iter(&self) -> slice::Iter<'_, u64> {
        self.arcs.iter()
    }

    /// Returns the first sub-identifier combining the first two arcs.
    fn first_subidentifier(&self) -> u64 {
        // Oid::new makes sure there are two arcs and this doesn’t overflow.
        self.arcs[0] * 40 + self.arcs[1]
    }

    /// Returns an iterator over the sub-identifiers of the encoding.
    fn subidentifiers(&self) -> impl Iterator<Item = u64> + '_ {
        std::iter::once(
            self.first_subidentifier()
        ).chain(self.arcs[2..].iter().copied())
    }
}

/// # Decoding
///
impl Oid {
    /// Parses the content octets of an object identifier value.
    ///
    /// The `pos` is the position of the content in the source and is used
    /// for errors only.
    pub fn from_content(
        content: &[u8], pos: Pos
    ) -> Result<Self, DecodeError> {
        if content.is_empty() {
            return Err(DecodeError::malformed(
                "empty object identifier", pos
            ))
        }
        let mut arcs = SmallVec::new();
        let mut sub = 0u64;
        let mut first = true;
        for &octet in content {
            sub = sub.checked_mul(0x80).ok_or_else(|| {
                DecodeError::unsupported(
                    "object identifier sub-identifier too large", pos
                )
            })? | u64::from(octet & 0x7F);
            if octet & 0x80 != 0 {
                continue
            }
            if first {
                let (arc0, arc1) = match sub {
                    0..=39 => (0, sub),
                    40..=79 => (1, sub - 40),
                    _ => (2, sub - 80),
                };
                arcs.push(arc0);
                arcs.push(arc1);
                first = false;
            }
            else {
                arcs.push(sub);
            }
            sub = 0;
        }
        if content.last().is_some_and(|last| last & 0x80 != 0) {
            return Err(DecodeError::malformed(
                "object identifier ends inside a sub-identifier", pos
            ))
        }
        Ok(Oid { arcs })
    }
}


//--- FromStr

impl FromStr for Oid {
    type Err = OidError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let arcs = s.split('.').map(|arc| {
            arc.parse::<u64>().map_err(|_| OidError::InvalidArc)
        }).collect::<Result<SmallVec<[u64; 8]>, _>>()?;
        Oid::new(&arcs)
    }
}


//--- AsRef

impl AsRef<[u64]> for Oid {
    fn as_ref(&self) -> &[u64] {
        self.arcs()
    }
}


//--- Display

impl fmt::Display for Oid {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let mut arcs = self.arcs.iter();
        if let Some(first) = arcs.next() {
            write!(f, "{}", first)?;
        }
        for arc in arcs {
            write!(f, ".{}", arc)?;
        }
        Ok(())
    }
}


//--- PrimitiveContent

impl PrimitiveContent for &'_ Oid {
    const TAG: Tag = Tag::OID;

    fn encoded_len(self) -> usize {
        self.subidentifiers().map(septet_len).sum()
    }

    fn write_encoded<T: Target>(
        self,
        target: &mut T
    ) -> Result<(), T::Error> {
        for sub in self.subidentifiers() {
            write_subidentifier(sub, target)?;
        }
        Ok(())
    }
}


//------------ Helper Functions ----------------------------------------------

/// Returns the number of octets needed for a sub-identifier.
fn septet_len(sub: u64) -> usize {
    let bits = u64::BITS - sub.leading_zeros();
    (bits.div_ceil(7) as usize).max(1)
}

/// Writes a single sub-identifier.
fn write_subidentifier<T: Target>(
    mut sub: u64, target: &mut T
) -> Result<(), T::Error> {
    // Collect the septets starting with the least significant one, then
    // emit them in reverse.
    let mut septets = SmallVec::<[u8; 10]>::new();
    septets.push((sub & 0x7F) as u8);
    sub >>= 7;
    while sub != 0 {
        septets.push((sub & 0x7F) as u8 | 0x80);
        sub >>= 7;
    }
    septets.reverse();
    target.write_all(&septets)
}


//------------ OidError ------------------------------------------------------

/// An object identifier could not be created.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum OidError {
    /// There are less than two arcs.
    #[error("object identifiers need at least two arcs")]
    TooShort,

    /// The first arc is larger than 2.
    #[error("first arc must be 0, 1, or 2")]
    FirstArc,

    /// The second arc is 40 or larger below a first arc of 0 or 1.
    #[error("second arc must be less than 40 below arcs 0 and 1")]
    SecondArc,

    /// The first two arcs don’t fit into a single sub-identifier.
    #[error("second arc too large")]
    Overflow,

    /// An arc in the dotted notation is not an integer.
    #[error("arcs must be non-negative integers")]
    InvalidArc,
}


//============ Tests =========================================================
