//! Codec Error Types

use thiserror::Error;

/// Result type for roomba-codec operations
pub type Result<T> = std::result::Result<T, CodecError>;

/// Telemetry decoding errors
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// Bit index outside 0..=7 under the reject policy
    #[error("Bit position out of range: {position} (expected 0..=7)")]
    BitPositionOutOfRange { position: u8 },

    /// Field does not fit inside the buffer
    #[error("Field out of bounds: {width} byte(s) at index {index}, buffer length {len}")]
    FieldOutOfBounds {
        index: usize,
        width: usize,
        len: usize,
    },

    /// Boolean sensor byte other than 0 or 1
    #[error("Invalid boolean byte: {0} (expected 0 or 1)")]
    InvalidBoolean(u8),

    /// Malformed hex dump
    #[error("Invalid hex: {0}")]
    InvalidHex(String),

    /// Unrecognized byte order name
    #[error("Unknown byte order: {0}")]
    UnknownByteOrder(String),
}

// Helper methods for creating errors
impl CodecError {
    pub fn out_of_bounds(index: usize, width: usize, len: usize) -> Self {
        CodecError::FieldOutOfBounds { index, width, len }
    }

    pub fn invalid_hex(msg: impl Into<String>) -> Self {
        CodecError::InvalidHex(msg.into())
    }

    pub fn unknown_byte_order(name: impl Into<String>) -> Self {
        CodecError::UnknownByteOrder(name.into())
    }
}
