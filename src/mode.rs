//! The decoding mode.
//!
//! This is a private module. Its public items are re-exported by the parent.


//------------ Mode ----------------------------------------------------------

/// How strictly the decoder treats questionable content.
///
/// Both modes accept the full Basic Encoding Rules, including alternative
/// encodings and indefinite length values. They differ only in how content
/// that is structurally fine but can’t be interpreted is handled.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Mode {
    /// Basic Encoding Rules.
    ///
    /// Character strings whose content isn’t valid UTF-8 are rejected with
    /// an [`InvalidCharacterData`] error.
    ///
    /// [`InvalidCharacterData`]: crate::decode::DecodeError::InvalidCharacterData
    #[default]
    Ber,

    /// Basic Encoding Rules with lenient character strings.
    ///
    /// Character strings whose content isn’t valid UTF-8 decode into an
    /// empty string. A warning is logged for each such string.
    Lenient,
}

impl Mode {
    /// Returns whether invalid character data is tolerated.
    pub fn is_lenient(self) -> bool {
        matches!(self, Mode::Lenient)
    }
}
