//! The source for decoding data.
//!
//! This is an internal module. Its public types are re-exported by the
//! parent.

use std::{fmt, io};
use std::io::Read;
use bytes::Bytes;
use super::error::DecodeError;


//------------ Source --------------------------------------------------------

/// A sequential, blocking source of octets.
///
/// The decoder pulls octets from a source one value at a time and never
/// seeks or looks past the end of the value it is currently decoding. The
/// end of data is signalled distinctly from the data itself: the
/// [`take_opt_u8`][Self::take_opt_u8] method returns `Ok(None)` at a clean
/// end while the other methods produce a [`DecodeError::Truncated`] error.
///
/// A source is always owned by the caller. Since `&mut S` is a source, too,
/// it can be lent to the decoder for a single value and then be used again
/// for the next.
pub trait Source {
    /// Returns the current logical position within the source.
    fn pos(&self) -> Pos;

    /// Takes a single octet from the source.
    ///
    /// Returns `Ok(None)` if the source has been exhausted.
    fn take_opt_u8(&mut self) -> Result<Option<u8>, DecodeError>;

    /// Takes exactly `len` octets from the source.
    ///
    /// If the source ends before `len` octets are available, returns a
    /// truncation error.
    fn take_exact(&mut self, len: usize) -> Result<Bytes, DecodeError>;

    /// Takes a single octet from the source.
    ///
    /// If there aren’t any more octets available from the source, returns
    /// a truncation error.
    fn take_u8(&mut self) -> Result<u8, DecodeError> {
        let pos = self.pos();
        self.take_opt_u8()?.ok_or(DecodeError::Truncated { pos })
    }
}

impl<S: Source + ?Sized> Source for &mut S {
    fn pos(&self) -> Pos {
        (**self).pos()
    }

    fn take_opt_u8(&mut self) -> Result<Option<u8>, DecodeError> {
        (**self).take_opt_u8()
    }

    fn take_exact(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        (**self).take_exact(len)
    }
}


//------------ SliceSource ---------------------------------------------------

/// A source atop a borrowed octets slice.
///
/// Content octets taken from this source are copied.
#[derive(Clone, Copy, Debug)]
pub struct SliceSource<'s> {
    data: &'s [u8],
    pos: usize,
}

impl<'s> SliceSource<'s> {
    pub fn new(data: &'s [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the octets not yet taken.
    pub fn remaining(&self) -> &'s [u8] {
        self.data
    }
}

impl Source for SliceSource<'_> {
    fn pos(&self) -> Pos {
        self.pos.into()
    }

    fn take_opt_u8(&mut self) -> Result<Option<u8>, DecodeError> {
        match self.data.split_first() {
            Some((&first, tail)) => {
                self.data = tail;
                self.pos += 1;
                Ok(Some(first))
            }
            None => Ok(None)
        }
    }

    fn take_exact(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        match self.data.split_at_checked(len) {
            Some((head, tail)) => {
                self.data = tail;
                self.pos += len;
                Ok(Bytes::copy_from_slice(head))
            }
            None => {
                self.pos += self.data.len();
                self.data = b"";
                Err(DecodeError::Truncated { pos: self.pos.into() })
            }
        }
    }
}


//------------ BytesSource ---------------------------------------------------

/// A source atop a [`Bytes`] value.
///
/// Content octets are handed out as slices of the underlying bytes value
/// without copying.
#[derive(Clone, Debug)]
pub struct BytesSource {
    data: Bytes,
    pos: usize,
}

impl BytesSource {
    pub fn new(data: Bytes) -> Self {
        Self { data, pos: 0 }
    }

    /// Returns the octets not yet taken.
    pub fn remaining(&self) -> &[u8] {
        self.data.as_ref()
    }

    /// Converts the source into the octets not yet taken.
    pub fn into_remaining(self) -> Bytes {
        self.data
    }
}

impl Source for BytesSource {
    fn pos(&self) -> Pos {
        self.pos.into()
    }

    fn take_opt_u8(&mut self) -> Result<Option<u8>, DecodeError> {
        let res = self.data.first().copied();
        if res.is_some() {
            self.data = self.data.slice(1..);
            self.pos += 1;
        }
        Ok(res)
    }

    fn take_exact(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        if self.data.len() < len {
            self.pos += self.data.len();
            self.data = Bytes::new();
            return Err(DecodeError::Truncated { pos: self.pos.into() })
        }
        self.pos += len;
        Ok(self.data.split_to(len))
    }
}

impl From<Bytes> for BytesSource {
    fn from(data: Bytes) -> Self {
        Self::new(data)
    }
}


//------------ ReaderSource --------------------------------------------------

/// A source atop a blocking reader.
///
/// The source reads exactly as many octets as the decoder asks for, so the
/// reader is left positioned right after the last decoded value. Errors of
/// the reader surface as [`DecodeError::Io`].
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
    pos: usize,
}

impl<R> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader, pos: 0 }
    }

    /// Returns a reference to the underlying reader.
    pub fn reader(&self) -> &R {
        &self.reader
    }

    /// Converts the source back into the underlying reader.
    pub fn into_reader(self) -> R {
        self.reader
    }
}

impl<R: io::Read> Source for ReaderSource<R> {
    fn pos(&self) -> Pos {
        self.pos.into()
    }

    fn take_opt_u8(&mut self) -> Result<Option<u8>, DecodeError> {
        let mut buf = [0u8];
        loop {
            match self.reader.read(&mut buf) {
                Ok(0) => return Ok(None),
                Ok(_) => {
                    self.pos += 1;
                    return Ok(Some(buf[0]))
                }
                Err(err) if err.kind() == io::ErrorKind::Interrupted => { }
                Err(err) => return Err(err.into())
            }
        }
    }

    fn take_exact(&mut self, len: usize) -> Result<Bytes, DecodeError> {
        // Grow the buffer while reading so a bogus length can’t make us
        // allocate more than the reader actually delivers.
        let mut buf = Vec::new();
        let read = self.reader.by_ref().take(
            u64::try_from(len).unwrap_or(u64::MAX)
        ).read_to_end(&mut buf)?;
        self.pos += read;
        if read < len {
            return Err(DecodeError::Truncated { pos: self.pos.into() })
        }
        Ok(buf.into())
    }
}


//------------ Pos -----------------------------------------------------------

/// The logical position within a source.
///
/// Values of this type are used for diagnostics in errors. The position
/// counts the octets taken from the source since it was created.
#[derive(Clone, Copy, Debug, Default, Eq, Ord, PartialEq, PartialOrd)]
pub struct Pos(usize);

impl Pos {
    pub(crate) fn to_usize(self) -> usize {
        self.0
    }
}

impl From<usize> for Pos {
    fn from(pos: usize) -> Pos {
        Pos(pos)
    }
}

impl fmt::Display for Pos {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}


//============ Tests =========================================================

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn slice_source() {
        let mut source = SliceSource::new(b"\x01\x02\x03\x04");
        assert_eq!(source.take_u8().unwrap(), 1);
        assert_eq!(source.take_exact(2).unwrap().as_ref(), b"\x02\x03");
        assert_eq!(source.pos(), Pos::from(3));
        assert!(matches!(
            source.take_exact(2),
            Err(DecodeError::Truncated { .. })
        ));
        assert_eq!(source.take_opt_u8().unwrap(), None);
        assert!(matches!(
            source.take_u8(),
            Err(DecodeError::Truncated { pos }) if pos == Pos::from(4)
        ));
    }

    #[test]
    fn bytes_source() {
        let mut source = BytesSource::new(Bytes::from_static(b"abcdef"));
        assert_eq!(source.take_opt_u8().unwrap(), Some(b'a'));
        assert_eq!(source.take_exact(3).unwrap().as_ref(), b"bcd");
        assert_eq!(source.remaining(), b"ef");
        assert_eq!(source.pos(), Pos::from(4));
        assert!(source.take_exact(3).is_err());
        assert_eq!(source.take_opt_u8().unwrap(), None);
    }

    #[test]
    fn reader_source() {
        let mut source = ReaderSource::new(b"\x05\x00\x05".as_ref());
        assert_eq!(source.take_u8().unwrap(), 5);
        assert_eq!(source.take_exact(1).unwrap().as_ref(), b"\x00");
        assert_eq!(source.take_exact(0).unwrap().as_ref(), b"");
        assert!(matches!(
            source.take_exact(4),
            Err(DecodeError::Truncated { pos }) if pos == Pos::from(3)
        ));
        assert_eq!(source.take_opt_u8().unwrap(), None);
    }

    #[test]
    fn reader_errors() {
        struct Broken;

        impl io::Read for Broken {
            fn read(&mut self, _: &mut [u8]) -> io::Result<usize> {
                Err(io::Error::other("broken pipe"))
            }
        }

        let mut source = ReaderSource::new(Broken);
        assert!(matches!(source.take_u8(), Err(DecodeError::Io(_))));
        assert!(matches!(source.take_exact(2), Err(DecodeError::Io(_))));
    }

    #[test]
    fn borrowed_source() {
        let mut source = SliceSource::new(b"\x01\x02");
        fn take_one<S: Source>(mut source: S) -> u8 {
            source.take_u8().unwrap()
        }
        assert_eq!(take_one(&mut source), 1);
        assert_eq!(take_one(&mut source), 2);
        assert_eq!(source.remaining(), b"");
    }
}
