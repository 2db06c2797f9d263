//! Constructed values holding a list of children.
//!
//! This module provides the two universal types whose content is a list of
//! complete values: [`Sequence`] and [`Set`]. Both share the same framing,
//! so they are defined by the same macro and differ only in their tag.
//!
//! Decoding of these types lives with the dispatcher in
//! [`decode`][crate::decode]. This module only deals with holding and
//! encoding the children.

use std::{fmt, slice, vec};
use crate::encode::{Target, Values};
use crate::tag::Tag;
use crate::value::Value;


//------------ Macro for Defining Constructed Types --------------------------

macro_rules! constructed_type {
    (
        $( #[$attr:meta] )*
        $name:ident => $tag:expr, $label:expr
    ) => {
        $( #[$attr] )*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $name(Vec<Value>);

        impl $name {
            /// The tag of values of this type.
            pub const TAG: Tag = $tag;

            /// Creates a new, empty value.
            pub fn new() -> Self {
                Self::default()
            }

            /// Creates a value from a vec of children.
            pub fn from_vec(children: Vec<Value>) -> Self {
                $name(children)
            }

            /// Appends a child to the end of the list.
            pub fn push(&mut self, value: impl Into<Value>) {
                self.0.push(value.into())
            }

            /// Returns the number of children.
            pub fn len(&self) -> usize {
                self.0.len()
            }

            /// Returns whether there are no children.
            pub fn is_empty(&self) -> bool {
                self.0.is_empty()
            }

            /// Returns an iterator over the children.
            pub fn iter(&self) -> slice::Iter<'_, Value> {
                self.0.iter()
            }

            /// Returns a slice of the children.
            pub fn as_slice(&self) -> &[Value] {
                self.0.as_slice()
            }

            /// Converts the value into a vec of its children.
            pub fn into_vec(self) -> Vec<Value> {
                self.0
            }

            /// Returns the length of the content octets.
            pub fn content_len(&self) -> usize {
                self.0.encoded_len()
            }

            /// Writes the content octets to a target.
            ///
            /// Children are written in order with definite lengths.
            pub fn write_content<T: Target>(
                &self, target: &mut T
            ) -> Result<(), T::Error> {
                self.0.write_encoded(target)
            }
        }

        //--- From, FromIterator, and IntoIterator

        impl From<Vec<Value>> for $name {
            fn from(children: Vec<Value>) -> Self {
                Self::from_vec(children)
            }
        }

        impl<V: Into<Value>> FromIterator<V> for $name {
            fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
                $name(iter.into_iter().map(Into::into).collect())
            }
        }

        impl IntoIterator for $name {
            type Item = Value;
            type IntoIter = vec::IntoIter<Value>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.into_iter()
            }
        }

        impl<'a> IntoIterator for &'a $name {
            type Item = &'a Value;
            type IntoIter = slice::Iter<'a, Value>;

            fn into_iter(self) -> Self::IntoIter {
                self.0.iter()
            }
        }

        //--- Values

        impl Values for $name {
            fn encoded_len(&self) -> usize {
                crate::encode::total_len(Self::TAG, self.content_len())
            }

            fn write_encoded<T: Target>(
                &self, target: &mut T
            ) -> Result<(), T::Error> {
                crate::encode::write_header(
                    target, Self::TAG, self.content_len()
                )?;
                self.write_content(target)
            }
        }

        //--- Display

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str($label)?;
                if self.0.is_empty() {
                    return f.write_str(" { }")
                }
                f.write_str(" { ")?;
                for (idx, child) in self.0.iter().enumerate() {
                    if idx > 0 {
                        f.write_str(", ")?;
                    }
                    fmt::Display::fmt(child, f)?;
                }
                f.write_str(" }")
            }
        }
    }
}


//------------ Sequence and Set ----------------------------------------------

constructed_type! {
    /// A SEQUENCE value.
    ///
    /// A sequence is an ordered list of values. It is always encoded in
    /// constructed form with a definite length.
    Sequence => Tag::SEQUENCE, "SEQUENCE"
}

constructed_type! {
    /// A SET value.
    ///
    /// Although the order of elements in a set is irrelevant, the children
    /// are kept in the order they were added or decoded in and are encoded
    /// in that order.
    Set => Tag::SET, "SET"
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn encode_sequence() {
        let seq: Sequence = [Value::Boolean(true), Value::Integer(1)]
            .into_iter().collect();
        assert_eq!(seq.to_vec(), b"\x30\x06\x01\x01\xFF\x02\x01\x01");
        assert_eq!(seq.encoded_len(), 8);
        assert_eq!(Sequence::new().to_vec(), b"\x30\x00");
    }

    #[test]
    fn set_keeps_order() {
        let mut set = Set::new();
        set.push(Value::Integer(2));
        set.push(Value::Integer(1));
        assert_eq!(set.to_vec(), b"\x31\x06\x02\x01\x02\x02\x01\x01");
        let children: Vec<_> = set.into_iter().collect();
        assert_eq!(children, [Value::Integer(2), Value::Integer(1)]);
    }

    #[test]
    fn display() {
        let mut seq = Sequence::new();
        seq.push(true);
        seq.push(Sequence::new());
        assert_eq!(
            seq.to_string(), "SEQUENCE { BOOLEAN TRUE, SEQUENCE { } }"
        );
    }
}
