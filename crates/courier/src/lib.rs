//! Courier wire protocol toolkit.
//!
//! courier frames typed payloads (messages, heartbeats, error reports)
//! for transmission over any ordered byte channel.
//!
//! # Crate Structure
//!
//! - [`proto`]: tagged payload framing codec (the wire contract)
//!
//! The `courier` binary in this crate encodes, decodes and inspects
//! wire payloads from the command line.

/// Re-export codec types.
pub mod proto {
    pub use courier_proto::*;
}
