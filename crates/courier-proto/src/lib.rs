//! Tagged payload framing for the courier wire protocol.
//!
//! Every payload is framed with a one-byte tag that selects the
//! variant-specific layout (big-endian throughout):
//!
//! ```text
//! Heartbeat: [tag=2]
//! Message:   [tag=1][headerLen u8][header][body]
//! Error:     [tag=3][size u32][body]
//! ```
//!
//! Header and body are base64 text; message bodies are JSON underneath.
//! A message body carries no length prefix on the wire; its length is
//! declared in the side-channel header, and the decoder reconstructs a
//! synthetic 4-byte prefix before handing the stream to the generic
//! block reader. That layout is load-bearing: existing endpoints speak
//! it byte for byte.
//!
//! The codec is synchronous and stateless per call. It never opens
//! connections, never logs, and leaves deadlines to the transport that
//! owns the byte stream.

pub mod body;
pub mod codec;
pub mod error;
pub mod header;
pub mod payload;
pub mod reader;
pub mod tag;
pub mod writer;

pub use codec::{decode, encode};
pub use error::{Result, WireError};
pub use header::PayloadHeader;
pub use payload::{ErrorText, Message, Payload};
pub use reader::PayloadReader;
pub use tag::{Tag, MAX_PAYLOAD_SIZE};
pub use writer::PayloadWriter;
