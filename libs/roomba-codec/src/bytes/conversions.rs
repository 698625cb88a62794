//! Numeric conversions for 16-bit telemetry fields
//!
//! Provides functions for converting between:
//! - (high, low) byte pairs ↔ `i16` / `u16`
//! - Wire-ordered byte arrays ↔ `i16` / `u16` via `ByteOrder`
//! - Positions inside a received sensor buffer ↔ typed field values
//!
//! Each input byte is a raw bit pattern. Sign extension for signed values
//! comes from `i16::from_be_bytes`, never from shifting a negative operand.

use tracing::{debug, trace};

use super::bit_ops::bit_at_position_with;
use super::{BitPositionPolicy, ByteOrder};
use crate::error::{CodecError, Result};

// ============================================================================
// Byte Pair Conversions
// ============================================================================

/// Combine a (high, low) byte pair into a two's-complement signed value
///
/// `high` supplies bits 8..=15 and its bit 7 becomes the sign bit, so the
/// result spans -32768..=32767. Widen with `i32::from` when a wider native
/// integer is needed.
#[inline]
pub fn signed_16_from_bytes(high: u8, low: u8) -> i16 {
    i16::from_be_bytes([high, low])
}

/// Combine a (high, low) byte pair into an unsigned value in 0..=65535
#[inline]
pub fn unsigned_16_from_bytes(high: u8, low: u8) -> u16 {
    (u16::from(high) << 8) | u16::from(low)
}

/// Split a signed value into its (high, low) byte pair
///
/// Inverse of [`signed_16_from_bytes`]. Used when encoding wheel velocities
/// and radii for drive commands.
#[inline]
pub fn signed_16_to_bytes(value: i16) -> (u8, u8) {
    let [high, low] = value.to_be_bytes();
    (high, low)
}

// ============================================================================
// Byte Order Aware Conversions
// ============================================================================

/// Convert 2 bytes to u16 with specified byte order
pub fn bytes_to_u16(bytes: &[u8; 2], order: ByteOrder) -> u16 {
    match order {
        ByteOrder::BigEndian => u16::from_be_bytes(*bytes),
        ByteOrder::LittleEndian => u16::from_le_bytes(*bytes),
    }
}

/// Convert 2 bytes to i16 with specified byte order
pub fn bytes_to_i16(bytes: &[u8; 2], order: ByteOrder) -> i16 {
    match order {
        ByteOrder::BigEndian => i16::from_be_bytes(*bytes),
        ByteOrder::LittleEndian => i16::from_le_bytes(*bytes),
    }
}

/// Interpret a sensor byte as a strict boolean
///
/// Wall and cliff packets carry exactly 0 or 1; anything else is a
/// corrupted read.
pub fn byte_to_bool(byte: u8) -> Result<bool> {
    match byte {
        0 => Ok(false),
        1 => Ok(true),
        other => Err(CodecError::InvalidBoolean(other)),
    }
}

// ============================================================================
// Buffer Field Readers
// ============================================================================

fn field<const N: usize>(buf: &[u8], index: usize) -> Result<[u8; N]> {
    let bytes = index
        .checked_add(N)
        .and_then(|end| buf.get(index..end))
        .ok_or_else(|| {
            debug!(
                "Field read out of bounds: width={}, index={}, len={}",
                N,
                index,
                buf.len()
            );
            CodecError::out_of_bounds(index, N, buf.len())
        })?;

    let mut out = [0u8; N];
    out.copy_from_slice(bytes);
    Ok(out)
}

/// Read a big-endian signed 16-bit field starting at `index`
pub fn read_i16(buf: &[u8], index: usize) -> Result<i16> {
    read_i16_with(buf, index, ByteOrder::BigEndian)
}

/// Read a big-endian unsigned 16-bit field starting at `index`
pub fn read_u16(buf: &[u8], index: usize) -> Result<u16> {
    read_u16_with(buf, index, ByteOrder::BigEndian)
}

/// Read a signed 16-bit field starting at `index` in the given byte order
pub fn read_i16_with(buf: &[u8], index: usize, order: ByteOrder) -> Result<i16> {
    let value = bytes_to_i16(&field::<2>(buf, index)?, order);
    trace!("i16 field at {}: {}", index, value);
    Ok(value)
}

/// Read an unsigned 16-bit field starting at `index` in the given byte order
pub fn read_u16_with(buf: &[u8], index: usize, order: ByteOrder) -> Result<u16> {
    let value = bytes_to_u16(&field::<2>(buf, index)?, order);
    trace!("u16 field at {}: {}", index, value);
    Ok(value)
}

/// Read a strict 0/1 boolean byte at `index`
pub fn read_bool(buf: &[u8], index: usize) -> Result<bool> {
    let [byte] = field::<1>(buf, index)?;
    byte_to_bool(byte).map_err(|e| {
        debug!("Rejected boolean read at {}: {}", index, e);
        e
    })
}

/// Test bit `position` of the byte at `index`
///
/// Positions above 7 are rejected so that a mistyped table entry surfaces
/// instead of silently reading another flag.
pub fn read_bit(buf: &[u8], index: usize, position: u8) -> Result<bool> {
    let [byte] = field::<1>(buf, index)?;
    bit_at_position_with(byte, position, BitPositionPolicy::Reject).map_err(|e| {
        debug!("Rejected bit read at {}: {}", index, e);
        e
    })
}
