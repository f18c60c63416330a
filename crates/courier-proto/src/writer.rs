use std::io::{ErrorKind, Write};

use bytes::{BufMut, BytesMut};

use crate::codec::encode;
use crate::error::{Result, WireError};
use crate::payload::Payload;

const INITIAL_BUFFER_CAPACITY: usize = 4 * 1024;

/// Writes complete payloads to any `Write` stream.
///
/// Each payload is staged in an internal buffer and written out whole,
/// so a frame never reaches the stream partially encoded.
pub struct PayloadWriter<T> {
    inner: T,
    buf: BytesMut,
}

impl<T: Write> PayloadWriter<T> {
    /// Create a new payload writer.
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            buf: BytesMut::with_capacity(INITIAL_BUFFER_CAPACITY),
        }
    }

    /// Encode and send a payload (blocking).
    ///
    /// Returns the number of wire bytes written, including the tag byte.
    pub fn write_payload(&mut self, payload: &Payload) -> Result<u64> {
        self.buf.clear();
        let written = encode(&mut (&mut self.buf).writer(), payload)?;

        let mut offset = 0usize;
        while offset < self.buf.len() {
            match self.inner.write(&self.buf[offset..]) {
                Ok(0) => return Err(WireError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(WireError::Io(err)),
            }
        }

        self.flush()?;
        Ok(written)
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(WireError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
