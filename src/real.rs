//! BER encoded real values.
//!
//! REAL values are represented as `f64`. This module converts between the
//! content octets and the native floating point type and implements
//! [`PrimitiveContent`] for `f64`.
//!
//! # BER Encoding
//!
//! Empty content is the value zero. Otherwise the first content octet
//! selects the form of the value:
//!
//! * If bit 8 is set, the value is in binary form. Bit 7 is the sign,
//!   bits 6 and 5 select the base 2, 8, or 16, bits 4 and 3 a binary
//!   scale factor F between 0 and 3, and bits 2 and 1 the length of the
//!   exponent: one, two, or three octets or, if both bits are set, the
//!   length is given by the next octet. The exponent follows as a two’s
//!   complement integer and the remaining octets are the unsigned mantissa
//!   N. The value is `sign * N * 2^F * base^exponent`.
//! * If bits 8 and 7 are `01`, the value is a special value. Only a single
//!   content octet is allowed: 0x40 for plus infinity, 0x41 for minus
//!   infinity, 0x42 for not-a-number, and 0x43 for minus zero.
//! * If bits 8 and 7 are `00`, the value is in the decimal form of
//!   ISO 6093. This form is not supported.
//!
//! When encoding, finite values always use base 2 with a scale factor of
//! zero, an odd mantissa, and the shortest exponent.

use smallvec::SmallVec;
use crate::decode::{DecodeError, Pos};
use crate::encode::{PrimitiveContent, Target};
use crate::int;
use crate::tag::Tag;


//------------ Special values ------------------------------------------------

const PLUS_INFINITY: u8 = 0x40;
const MINUS_INFINITY: u8 = 0x41;
const NOT_A_NUMBER: u8 = 0x42;
const MINUS_ZERO: u8 = 0x43;


//------------ Decoding ------------------------------------------------------

/// Converts the content octets of a real value into an `f64`.
///
/// The `pos` is the position of the content in the source and is used
/// for errors only.
pub fn from_content(content: &[u8], pos: Pos) -> Result<f64, DecodeError> {
    let (&first, tail) = match content.split_first() {
        Some(some) => some,
        None => return Ok(0.),
    };
    if first & 0x80 != 0 {
        from_binary(first, tail, pos)
    }
    else if first & 0x40 != 0 {
        if !tail.is_empty() {
            return Err(DecodeError::malformed(
                "special real value with trailing octets", pos
            ))
        }
        match first {
            PLUS_INFINITY => Ok(f64::INFINITY),
            MINUS_INFINITY => Ok(f64::NEG_INFINITY),
            NOT_A_NUMBER => Ok(f64::NAN),
            MINUS_ZERO => Ok(-0.),
            _ => {
                Err(DecodeError::unsupported(
                    "unknown special real value", pos
                ))
            }
        }
    }
    else {
        Err(DecodeError::unsupported("decimal real encoding", pos))
    }
}

/// Converts the binary form.
fn from_binary(
    first: u8, tail: &[u8], pos: Pos
) -> Result<f64, DecodeError> {
    // The base as the number of bits to shift per unit of exponent.
    let base_bits: i64 = match (first >> 4) & 0x03 {
        0 => 1,
        1 => 3,
        2 => 4,
        _ => return Err(DecodeError::unsupported("reserved real base", pos))
    };
    let scale = i64::from((first >> 2) & 0x03);
    let (exp_len, tail) = match first & 0x03 {
        3 => {
            let (&len, tail) = tail.split_first().ok_or_else(|| {
                DecodeError::malformed("missing real exponent length", pos)
            })?;
            if len == 0 {
                return Err(DecodeError::malformed(
                    "empty real exponent", pos
                ))
            }
            (usize::from(len), tail)
        }
        len => (usize::from(len) + 1, tail),
    };
    let Some((exponent, mantissa)) = tail.split_at_checked(exp_len) else {
        return Err(DecodeError::malformed("truncated real exponent", pos))
    };
    let exponent = int::i64_from_content(exponent).ok_or_else(|| {
        DecodeError::unsupported("real exponent too large", pos)
    })?;
    let mantissa = mantissa.iter().fold(0., |res, &octet| {
        res * 256. + f64::from(octet)
    });
    let value = scale_pow2(
        mantissa, exponent.saturating_mul(base_bits).saturating_add(scale)
    );
    if first & 0x40 != 0 {
        Ok(-value)
    }
    else {
        Ok(value)
    }
}

/// Returns `value * 2^exp`.
///
/// The result is only rounded once unless intermediate results leave the
/// range of normal numbers.
fn scale_pow2(mut value: f64, exp: i64) -> f64 {
    // Beyond these bounds every finite mantissa overflows or underflows.
    let mut exp = exp.clamp(-4000, 4000) as i32;
    while exp > 1000 {
        value *= 2f64.powi(1000);
        exp -= 1000;
    }
    while exp < -1000 {
        value *= 2f64.powi(-1000);
        exp += 1000;
    }
    value * 2f64.powi(exp)
}


//------------ Encoding ------------------------------------------------------

/// Returns the content octets for `value`.
pub fn content_octets(value: f64) -> SmallVec<[u8; 10]> {
    let mut res = SmallVec::new();
    if value.is_nan() {
        res.push(NOT_A_NUMBER)
    }
    else if value.is_infinite() {
        res.push(
            if value.is_sign_negative() { MINUS_INFINITY }
            else { PLUS_INFINITY }
        )
    }
    else if value == 0. {
        if value.is_sign_negative() {
            res.push(MINUS_ZERO)
        }
    }
    else {
        let bits = value.to_bits();
        let biased = ((bits >> 52) & 0x7FF) as i64;
        let fraction = bits & ((1 << 52) - 1);
        let (mut mantissa, mut exponent) = if biased == 0 {
            (fraction, -1074)
        }
        else {
            (fraction | (1 << 52), biased - 1075)
        };
        let shift = mantissa.trailing_zeros();
        mantissa >>= shift;
        exponent += i64::from(shift);

        let exponent = int::content_octets(exponent);
        let exponent = exponent.as_ref();
        let mut first = 0x80 | (exponent.len() - 1) as u8;
        if value.is_sign_negative() {
            first |= 0x40
        }
        res.push(first);
        res.extend_from_slice(exponent);
        res.extend_from_slice(int::unsigned_octets(mantissa).as_ref());
    }
    res
}


//--- PrimitiveContent

impl PrimitiveContent for f64 {
    const TAG: Tag = Tag::REAL;

    fn encoded_len(self) -> usize {
        content_octets(self).len()
    }

    fn write_encoded<T: Target>(
        self,
        target: &mut T
    ) -> Result<(), T::Error> {
        target.write_all(&content_octets(self))
    }
}


//============ Tests =========================================================
