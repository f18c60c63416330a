use serde::{Deserialize, Serialize};

/// Side-channel length declaration used by the message codec.
///
/// Serialized as JSON with every field present, in declaration order:
/// `{"Size": …, "Type": …, "Encoding": …}`. Only `size` is populated by
/// the encoder; `kind` and `encoding` ride along as zero/empty for wire
/// compatibility with existing endpoints.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PayloadHeader {
    /// Length of the base64 body text that follows the header.
    #[serde(rename = "Size")]
    pub size: u32,
    /// Declared body type; never set by the encoder.
    #[serde(rename = "Type")]
    pub kind: u8,
    /// Declared body encoding; never set by the encoder.
    #[serde(rename = "Encoding")]
    pub encoding: String,
}

impl PayloadHeader {
    /// Header declaring a body of `size` bytes.
    pub fn with_size(size: u32) -> Self {
        Self {
            size,
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_all_fields_in_wire_order() {
        let header = PayloadHeader::with_size(80);
        assert_eq!(
            serde_json::to_string(&header).unwrap(),
            r#"{"Size":80,"Type":0,"Encoding":""}"#
        );
    }

    #[test]
    fn deserializes_with_missing_fields() {
        let header: PayloadHeader = serde_json::from_str(r#"{"Size":12}"#).unwrap();
        assert_eq!(header.size, 12);
        assert_eq!(header.kind, 0);
        assert_eq!(header.encoding, "");
    }

    #[test]
    fn round_trips() {
        let header = PayloadHeader::with_size(42);
        let json = serde_json::to_string(&header).unwrap();
        let parsed: PayloadHeader = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, header);
    }
}
