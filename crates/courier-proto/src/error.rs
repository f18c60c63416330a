/// Errors that can occur while encoding or decoding payloads.
#[derive(Debug, thiserror::Error)]
pub enum WireError {
    /// The tag byte matches no known payload variant.
    #[error("unknown payload tag {tag:#04x}")]
    UnknownTag { tag: u8 },

    /// A declared body length exceeds the maximum payload size.
    #[error("payload too large ({size} bytes, max {max})")]
    PayloadTooLarge { size: u32, max: u32 },

    /// An I/O error occurred while reading or writing a payload.
    #[error("payload I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The body text is not valid base64.
    #[error("malformed base64 body: {0}")]
    Base64(#[from] base64::DecodeError),

    /// The header or body is not valid JSON.
    #[error("malformed JSON body: {0}")]
    Json(#[from] serde_json::Error),

    /// Decoded error text is not valid UTF-8.
    #[error("error text is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// The stream was closed before a complete payload was written.
    #[error("connection closed (incomplete payload)")]
    ConnectionClosed,
}

pub type Result<T> = std::result::Result<T, WireError>;
