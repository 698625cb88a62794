//! Roomba Telemetry Codec
//!
//! Decoding primitives for the byte-pair sensor telemetry a Roomba streams over
//! its Open Interface serial link.
//!
//! # Architecture
//!
//! This library provides:
//! - **Pair Conversions**: high/low byte pairs to signed and unsigned 16-bit values
//! - **Bit Operations**: single-bit tests with an explicit out-of-range policy
//! - **Field Readers**: bounds-checked reads of 16-bit, boolean and bit fields from a buffer
//! - **Hex Dumps**: formatting and parsing of raw byte dumps
//!
//! Everything here is a free function over values passed by copy or shared slice.
//! There is no state, so every function is safe to call from any thread.

pub mod bytes;
pub mod error;
pub mod hex;

// Re-export core API
pub use bytes::{
    bit_at_position, bit_at_position_with, byte_to_bool, bytes_to_i16, bytes_to_u16,
    checked_bit_at_position, read_bit, read_bool, read_i16, read_i16_with, read_u16,
    read_u16_with, signed_16_from_bytes, signed_16_to_bytes, unsigned_16_from_bytes,
    BitPositionPolicy, ByteOrder,
};
pub use error::{CodecError, Result};
pub use hex::{decode_hex, encode_upper, format_decimal};
