//! Generic length-prefixed body reader shared by the variant codecs.

use std::io::Read;

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use crate::error::Result;

/// Read a 4-byte big-endian length `L`, then exactly `L` bytes of
/// base64 text, and return the decoded bytes.
///
/// Callers validate `L` against [`MAX_PAYLOAD_SIZE`] before the prefix
/// reaches this reader. A source that cannot supply the full block is
/// an error (`UnexpectedEof`), never a partial result.
///
/// [`MAX_PAYLOAD_SIZE`]: crate::tag::MAX_PAYLOAD_SIZE
pub fn read_prefixed_block(r: &mut impl Read) -> Result<Vec<u8>> {
    let mut len = [0u8; 4];
    r.read_exact(&mut len)?;
    read_block(r, u32::from_be_bytes(len))
}

/// Read exactly `len` bytes of base64 text and return the decoded bytes.
pub fn read_block(r: &mut impl Read, len: u32) -> Result<Vec<u8>> {
    let mut encoded = vec![0u8; len as usize];
    r.read_exact(&mut encoded)?;
    Ok(BASE64.decode(&encoded)?)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::error::WireError;

    fn prefixed(text: &str) -> Vec<u8> {
        let mut wire = (text.len() as u32).to_be_bytes().to_vec();
        wire.extend_from_slice(text.as_bytes());
        wire
    }

    #[test]
    fn reads_prefixed_base64_block() {
        let wire = prefixed(&BASE64.encode(b"hello"));
        let block = read_prefixed_block(&mut Cursor::new(wire)).unwrap();
        assert_eq!(block, b"hello");
    }

    #[test]
    fn reads_empty_block() {
        let block = read_prefixed_block(&mut Cursor::new(0u32.to_be_bytes())).unwrap();
        assert!(block.is_empty());
    }

    #[test]
    fn short_block_is_an_error() {
        let mut wire = prefixed(&BASE64.encode(b"hello"));
        wire.truncate(wire.len() - 2);
        let err = read_prefixed_block(&mut Cursor::new(wire)).unwrap_err();
        assert!(matches!(err, WireError::Io(e) if e.kind() == std::io::ErrorKind::UnexpectedEof));
    }

    #[test]
    fn malformed_base64_is_an_error() {
        let err = read_prefixed_block(&mut Cursor::new(prefixed("!!!!"))).unwrap_err();
        assert!(matches!(err, WireError::Base64(_)));
    }

    #[test]
    fn block_length_is_exact() {
        // Trailing bytes past the declared length stay unread.
        let mut wire = prefixed(&BASE64.encode(b"ab"));
        wire.extend_from_slice(b"leftover");
        let mut cursor = Cursor::new(wire);
        let block = read_prefixed_block(&mut cursor).unwrap();
        assert_eq!(block, b"ab");

        let mut rest = Vec::new();
        cursor.read_to_end(&mut rest).unwrap();
        assert_eq!(rest, b"leftover");
    }
}
