//! The length octets.
//!
//! This is a private module. Its public items are re-exported by the parent.

use crate::decode::{DecodeError, Source};
use crate::encode::Target;


//------------ Length -------------------------------------------------------

/// The length octets of an encoded value.
///
/// A length value can either be definite, meaning it provides the actual
/// number of content octets in the value, or indefinite, in which case the
/// content is delimited by a special end-of-contents marker.
///
/// # BER Encoding
///
/// The length can be encoded in one of two basic ways. Which one is used is
/// determined by the most significant bit of the first octet. If it is not
/// set, the length octets is one octet long and the remaining bits of this
/// first octet provide the definite length. Thus, if the first octet is
/// less than 128, it provides the definite length already.
///
/// If the most significant bit is set, the remaining bits of the first
/// octet specify the number of octets that follow to encode the actual
/// length. If they specify that there are zero more octets, i.e., the
/// value of the first octet is 128, the length is indefinite. Otherwise,
/// those following octets give the big-endian encoding of the definite
/// length of the content octets. The value 0xFF is reserved.
///
/// When encoding, a definite length always uses the minimal number of
/// octets.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Length {
    /// A length value in definite form.
    Definite(usize),

    /// A length value in indefinite form.
    Indefinite,
}

impl Length {
    /// The size of a `usize` in octets.
    const USIZE_LEN: usize = usize::BITS as usize / 8;

    /// Takes a length value from the beginning of a source.
    pub fn take_from<S: Source>(source: &mut S) -> Result<Self, DecodeError> {
        let pos = source.pos();
        match source.take_u8()? {
            // Bit 7 clear: single.
            n if (n & 0x80) == 0 => Ok(Length::Definite(usize::from(n))),

            // 0x80: indefinite.
            0x80 => Ok(Length::Indefinite),

            // 0xFF: illegal.
            0xFF => {
                Err(DecodeError::malformed_length(
                    "reserved length octet", pos
                ))
            }

            // anything else: clear left bit, number of octets.
            n => {
                let mut res = 0usize;
                for _ in 0..(n & 0x7F) {
                    let octet = source.take_opt_u8()?.ok_or_else(|| {
                        DecodeError::malformed_length(
                            "unexpected end of length octets", source.pos()
                        )
                    })?;
                    res = res.checked_mul(0x100).and_then(|res| {
                        res.checked_add(usize::from(octet))
                    }).ok_or_else(|| {
                        DecodeError::malformed_length("excessive length", pos)
                    })?;
                }
                Ok(Length::Definite(res))
            }
        }
    }

    /// Returns the length if it is definite.
    pub fn definite(self) -> Option<usize> {
        match self {
            Length::Definite(len) => Some(len),
            Length::Indefinite => None,
        }
    }

    /// Returns whether the length is definite and zero.
    pub fn is_zero(self) -> bool {
        self == Length::Definite(0)
    }

    /// Returns the length of the encoded representation of the value.
    pub fn encoded_len(self) -> usize {
        match self {
            Length::Definite(len) if len > 0x7F => {
                Self::USIZE_LEN - Self::start_idx(len) + 1
            }
            _ => 1
        }
    }

    /// Writes the encoded value to a target.
    pub fn write_encoded<T: Target>(
        self, target: &mut T
    ) -> Result<(), T::Error> {
        match self {
            Length::Indefinite => target.write_u8(0x80),
            Length::Definite(len) if len > 0x7F => {
                let idx = Self::start_idx(len);

                // USIZE_LEN will never be greater than 126, so this fits.
                target.write_u8(((Self::USIZE_LEN - idx) | 0x80) as u8)?;
                target.write_all(&len.to_be_bytes()[idx..])
            }
            Length::Definite(len) => target.write_u8(len as u8),
        }
    }

    /// Returns the index of the first non-zero octet of `len`.
    fn start_idx(len: usize) -> usize {
        (len.leading_zeros() / 8) as usize
    }
}


//============ Tests =========================================================
