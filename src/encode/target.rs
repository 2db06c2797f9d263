//! Where encoded values go.
//!
//! This is a private module. The relevant items are re-exported by the
//! parent.

use std::{error, io};
use std::convert::Infallible;
use bytes::BytesMut;


//------------ Target --------------------------------------------------------

/// The sink encoded values are written to.
///
/// Encoding only ever appends octets, so this is all a sink needs to do.
/// Each target picks its own error type. In-memory targets use
/// `Infallible`, which lets [`infallible`] drop the error case entirely.
/// Writing to a stream goes through [`IoTarget`].
pub trait Target {
    /// The error produced when writing fails.
    type Error: error::Error;

    /// Appends all of `data` to the target.
    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error>;

    /// Appends a single octet to the target.
    fn write_u8(&mut self, octet: u8) -> Result<(), Self::Error> {
        self.write_all(&[octet])
    }
}

impl<T: Target + ?Sized> Target for &mut T {
    type Error = T::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        (**self).write_all(data)
    }
}

impl Target for Vec<u8> {
    type Error = Infallible;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(data);
        Ok(())
    }
}

impl Target for BytesMut {
    type Error = Infallible;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.extend_from_slice(data);
        Ok(())
    }
}


//------------ IoTarget ------------------------------------------------------

/// A target writing to a blocking `io::Write`.
///
/// Octets are handed to the writer as they are produced. Wrap a socket in
/// a `BufWriter` before handing it over. Flushing remains the business of
/// whoever owns the writer.
#[derive(Debug)]
pub struct IoTarget<W>(W);

impl<W> IoTarget<W> {
    /// Creates a target atop the writer.
    pub fn new(writer: W) -> Self {
        Self(writer)
    }

    /// Returns the writer.
    pub fn into_writer(self) -> W {
        self.0
    }
}

impl<W> From<W> for IoTarget<W> {
    fn from(src: W) -> Self {
        Self::new(src)
    }
}

impl<W: io::Write> Target for IoTarget<W> {
    type Error = io::Error;

    fn write_all(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        self.0.write_all(data)
    }
}


//------------ infallible ----------------------------------------------------

/// Unwraps the result of writing to a target that can’t fail.
pub fn infallible<T, E: Into<Infallible>>(res: Result<T, E>) -> T {
    match res {
        Ok(some) => some,
        Err(err) => {
            let err: Infallible = err.into();
            match err { }
        }
    }
}


//============ Tests =========================================================
