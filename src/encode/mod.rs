//! Encoding data in BER.
//!
//! This modules provides means to encode value trees in BER.
//!
//! Encoding is done top-down. Every encodable type implements the trait
//! [`Values`] which knows the total length of its encoding and how to write
//! it to a [`Target`]. Since the length of every value is known before it
//! is written, encoders always use the definite length form and never need
//! a scratch buffer.
//!
//! The trait [`PrimitiveContent`] helps with producing encoders for types
//! that use the primitive encoding. Through this trait the types can declare
//! how their content is encoded and receive an automatic encoder type based
//! on that. Its [`encode_as`][PrimitiveContent::encode_as] method allows
//! providing a different tag as is necessary for implicit tagging.
//!
//! The [`Target`] trait is a simplified version of `io::Write`. Vectors are
//! targets that can’t fail, any `io::Write` can be used by wrapping it into
//! an [`IoTarget`].

pub use self::primitive::{Primitive, PrimitiveContent};
pub use self::target::{IoTarget, Target, infallible};
pub use self::values::{Constructed, Values, total_len, write_header};

mod primitive;
mod target;
mod values;
