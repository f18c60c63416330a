use crate::error::WireError;

/// Maximum declared body size: 10 MiB.
///
/// Enforced against the declared (base64-text) body length before any
/// body bytes are read.
pub const MAX_PAYLOAD_SIZE: u32 = 10 << 20;

/// One-byte discriminator identifying which payload variant follows on
/// the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Tag {
    /// A routed text message.
    Message = 1,
    /// A liveness ping with no body.
    Heartbeat = 2,
    /// An error report.
    Error = 3,
}

impl Tag {
    /// The tag's wire byte.
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

impl TryFrom<u8> for Tag {
    type Error = WireError;

    fn try_from(byte: u8) -> std::result::Result<Self, WireError> {
        match byte {
            1 => Ok(Tag::Message),
            2 => Ok(Tag::Heartbeat),
            3 => Ok(Tag::Error),
            tag => Err(WireError::UnknownTag { tag }),
        }
    }
}
