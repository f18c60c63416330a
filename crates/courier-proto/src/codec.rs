use std::io::{Read, Write};

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use bytes::{BufMut, BytesMut};

use crate::body::{read_block, read_prefixed_block};
use crate::error::{Result, WireError};
use crate::header::PayloadHeader;
use crate::payload::{ErrorText, Message, Payload};
use crate::tag::{Tag, MAX_PAYLOAD_SIZE};

/// Encode a payload into the wire format and write it out.
///
/// Wire format (big-endian throughout):
/// ```text
/// ┌──────────┬───────────┬──────────────────────────────┐
/// │ Tag (1B) │ Variant   │ Layout after the tag          │
/// ├──────────┼───────────┼──────────────────────────────┤
/// │ 2        │ Heartbeat │ (empty)                       │
/// │ 1        │ Message   │ headerLen u8 · header · body  │
/// │ 3        │ Error     │ size u32 · body               │
/// └──────────┴───────────┴──────────────────────────────┘
/// ```
///
/// The frame is assembled in memory and written in one pass. Returns
/// the total number of bytes written, including the tag byte.
pub fn encode(w: &mut impl Write, payload: &Payload) -> Result<u64> {
    let mut frame = BytesMut::new();
    frame.put_u8(payload.tag().as_u8());

    match payload {
        Payload::Heartbeat => {}
        Payload::Message(message) => encode_message(&mut frame, message)?,
        Payload::Error(error) => encode_error(&mut frame, error),
    }

    w.write_all(&frame)?;
    Ok(frame.len() as u64)
}

/// Decode the next payload from the stream.
///
/// Reads exactly one tag byte, then exactly the bytes the matching
/// variant's layout calls for; trailing stream content is left
/// untouched. An exhausted source surfaces the underlying I/O error; a
/// byte that matches no variant is [`WireError::UnknownTag`] and
/// consumes no further input.
pub fn decode(r: &mut impl Read) -> Result<Payload> {
    let mut tag = [0u8; 1];
    r.read_exact(&mut tag)?;

    match Tag::try_from(tag[0])? {
        Tag::Heartbeat => Ok(Payload::Heartbeat),
        Tag::Message => decode_message(r),
        Tag::Error => decode_error(r),
    }
}

/// Message body layout after the tag byte:
/// ```text
/// headerLen: u8
/// header:    base64 of JSON PayloadHeader{Size = body length}
/// body:      base64 of JSON {"Message","To","From"}, no length prefix
/// ```
fn encode_message(frame: &mut BytesMut, message: &Message) -> Result<()> {
    let body = BASE64.encode(serde_json::to_vec(message)?);

    let header = PayloadHeader::with_size(body.len() as u32);
    let encoded_header = BASE64.encode(serde_json::to_vec(&header)?);

    // The header is a flat JSON object with a bounded numeric size; its
    // base64 text always fits a single length byte.
    frame.put_u8(encoded_header.len() as u8);
    frame.put_slice(encoded_header.as_bytes());
    frame.put_slice(body.as_bytes());
    Ok(())
}

fn decode_message(r: &mut impl Read) -> Result<Payload> {
    let mut header_len = [0u8; 1];
    r.read_exact(&mut header_len)?;

    let mut encoded_header = vec![0u8; header_len[0] as usize];
    r.read_exact(&mut encoded_header)?;
    let header: PayloadHeader = serde_json::from_slice(&BASE64.decode(&encoded_header)?)?;

    if header.size > MAX_PAYLOAD_SIZE {
        return Err(WireError::PayloadTooLarge {
            size: header.size,
            max: MAX_PAYLOAD_SIZE,
        });
    }

    // The body travels with no length prefix; its length is declared in
    // the side-channel header instead. Reconstruct the 4-byte prefix
    // the block reader expects and splice it ahead of the remaining
    // stream. Existing endpoints depend on this exact layout.
    let prefix = header.size.to_be_bytes();
    let mut chained = prefix.as_slice().chain(r);
    let body = read_prefixed_block(&mut chained)?;

    let message: Message = serde_json::from_slice(&body)?;
    Ok(Payload::Message(message))
}

/// Error body layout after the tag byte: `size: u32` then `size` bytes
/// of base64 text of the raw error string.
fn encode_error(frame: &mut BytesMut, error: &ErrorText) {
    let body = BASE64.encode(error.as_str().as_bytes());
    frame.put_u32(body.len() as u32);
    frame.put_slice(body.as_bytes());
}

fn decode_error(r: &mut impl Read) -> Result<Payload> {
    let mut size = [0u8; 4];
    r.read_exact(&mut size)?;
    let size = u32::from_be_bytes(size);

    if size > MAX_PAYLOAD_SIZE {
        return Err(WireError::PayloadTooLarge {
            size,
            max: MAX_PAYLOAD_SIZE,
        });
    }

    let body = read_block(r, size)?;
    Ok(Payload::Error(ErrorText::new(String::from_utf8(body)?)))
}
