use std::io::Read;

use crate::codec::decode;
use crate::error::Result;
use crate::payload::Payload;

/// Reads complete payloads from any `Read` stream.
///
/// The framing is self-describing, so the reader holds no buffer
/// between calls; each payload consumes exactly its own wire bytes and
/// the stream position always sits on a frame boundary afterwards.
pub struct PayloadReader<T> {
    inner: T,
}

impl<T: Read> PayloadReader<T> {
    /// Create a new payload reader.
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Read the next complete payload (blocking).
    ///
    /// An exhausted source surfaces the underlying I/O error
    /// (`UnexpectedEof`), whether it runs dry at a frame boundary or
    /// mid-frame.
    pub fn read_payload(&mut self) -> Result<Payload> {
        decode(&mut self.inner)
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}

#[cfg(test)]
mod tests {
    use std::io::{Cursor, ErrorKind};

    use super::*;
    use crate::codec::encode;
    use crate::error::WireError;
    use crate::payload::{ErrorText, Message};

    #[test]
    fn read_single_payload() {
        let mut wire = Vec::new();
        encode(&mut wire, &Payload::Error(ErrorText::new("oops"))).unwrap();

        let mut reader = PayloadReader::new(Cursor::new(wire));
        let payload = reader.read_payload().unwrap();
        assert_eq!(payload, Payload::Error(ErrorText::new("oops")));
    }

    #[test]
    fn read_multiple_payloads() {
        let message = Message::new("hi", "to", "from");
        let mut wire = Vec::new();
        encode(&mut wire, &Payload::Heartbeat).unwrap();
        encode(&mut wire, &Payload::Message(message.clone())).unwrap();

        let mut reader = PayloadReader::new(Cursor::new(wire));
        assert_eq!(reader.read_payload().unwrap(), Payload::Heartbeat);
        assert_eq!(reader.read_payload().unwrap(), Payload::Message(message));
    }

    #[test]
    fn exhausted_source_surfaces_eof() {
        let mut reader = PayloadReader::new(Cursor::new(Vec::<u8>::new()));
        let err = reader.read_payload().unwrap_err();
        assert!(matches!(err, WireError::Io(e) if e.kind() == ErrorKind::UnexpectedEof));
    }

    #[test]
    fn partial_reads_are_filled() {
        let mut wire = Vec::new();
        encode(&mut wire, &Payload::Message(Message::new("slow", "a", "b"))).unwrap();

        let mut reader = PayloadReader::new(ByteByByteReader { bytes: wire, pos: 0 });
        let payload = reader.read_payload().unwrap();
        assert_eq!(payload, Payload::Message(Message::new("slow", "a", "b")));
    }

    #[test]
    fn interrupted_read_retries() {
        let mut wire = Vec::new();
        encode(&mut wire, &Payload::Error(ErrorText::new("retry"))).unwrap();

        let mut reader = PayloadReader::new(InterruptedThenData {
            interrupted: false,
            bytes: wire,
            pos: 0,
        });
        let payload = reader.read_payload().unwrap();
        assert_eq!(payload, Payload::Error(ErrorText::new("retry")));
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut reader = PayloadReader::new(Cursor::new(Vec::<u8>::new()));
        let _ = reader.get_ref();
        let _ = reader.get_mut();
        let _inner = reader.into_inner();
    }

    struct ByteByByteReader {
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for ByteByByteReader {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if self.pos >= self.bytes.len() || buf.is_empty() {
                return Ok(0);
            }
            buf[0] = self.bytes[self.pos];
            self.pos += 1;
            Ok(1)
        }
    }

    struct InterruptedThenData {
        interrupted: bool,
        bytes: Vec<u8>,
        pos: usize,
    }

    impl Read for InterruptedThenData {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            if !self.interrupted {
                self.interrupted = true;
                return Err(std::io::Error::from(ErrorKind::Interrupted));
            }
            let remaining = self.bytes.len() - self.pos;
            let n = remaining.min(buf.len());
            buf[..n].copy_from_slice(&self.bytes[self.pos..self.pos + n]);
            self.pos += n;
            Ok(n)
        }
    }
}
