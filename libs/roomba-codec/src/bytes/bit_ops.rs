//! Bit-level operations for sensor status bytes
//!
//! Many Open Interface packets pack several flags into one byte
//! (bumps and wheel drops, light bumper, wheel overcurrents, stasis).
//! Bit 0 is always the least significant bit.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{CodecError, Result};

/// Highest valid bit index within a byte
pub const MAX_BIT_POSITION: u8 = 7;

/// How a bit test treats positions outside 0..=7
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BitPositionPolicy {
    /// Use the low 3 bits of the position
    #[default]
    Mask,
    /// Fail with `CodecError::BitPositionOutOfRange`
    Reject,
}

impl FromStr for BitPositionPolicy {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "mask" => Ok(Self::Mask),
            "reject" => Ok(Self::Reject),
            other => Err(format!(
                "unknown bit position policy '{}' (expected mask or reject)",
                other
            )),
        }
    }
}

impl fmt::Display for BitPositionPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Mask => write!(f, "mask"),
            Self::Reject => write!(f, "reject"),
        }
    }
}

/// Test whether bit `position` is set in `data`
///
/// Positions above 7 are masked to their low 3 bits, so `8` tests bit 0
/// and `15` tests bit 7.
#[inline]
pub fn bit_at_position(data: u8, position: u8) -> bool {
    (data >> (position & MAX_BIT_POSITION)) & 0x01 != 0
}

/// Test whether bit `position` is set in `data`, rejecting positions above 7
#[inline]
pub fn checked_bit_at_position(data: u8, position: u8) -> Result<bool> {
    if position > MAX_BIT_POSITION {
        return Err(CodecError::BitPositionOutOfRange { position });
    }
    Ok(bit_at_position(data, position))
}

/// Bit test under an explicit out-of-range policy
pub fn bit_at_position_with(data: u8, position: u8, policy: BitPositionPolicy) -> Result<bool> {
    match policy {
        BitPositionPolicy::Mask => Ok(bit_at_position(data, position)),
        BitPositionPolicy::Reject => checked_bit_at_position(data, position),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bit_at_position_lsb_and_msb() {
        assert!(bit_at_position(0b0000_0001, 0));
        assert!(!bit_at_position(0b0000_0001, 1));
        assert!(bit_at_position(0b1000_0000, 7));
        assert!(!bit_at_position(0b1000_0000, 0));
    }

    #[test]
    fn test_bit_at_position_matches_mask_for_every_byte() {
        for data in 0..=u8::MAX {
            for position in 0..=MAX_BIT_POSITION {
                assert_eq!(
                    bit_at_position(data, position),
                    data & (1 << position) != 0,
                    "data={:#010b} position={}",
                    data,
                    position
                );
            }
        }
    }

    #[test]
    fn test_out_of_range_position_is_masked() {
        for data in 0..=u8::MAX {
            for position in 8..=u8::MAX {
                assert_eq!(
                    bit_at_position(data, position),
                    bit_at_position(data, position & 0x07)
                );
            }
        }
        assert!(bit_at_position(0b0000_0001, 8));
        assert!(bit_at_position(0b1000_0000, 15));
    }

    #[test]
    fn test_checked_bit_at_position() {
        assert_eq!(checked_bit_at_position(0b0010_0000, 5), Ok(true));
        assert_eq!(checked_bit_at_position(0b0010_0000, 4), Ok(false));
        assert_eq!(
            checked_bit_at_position(0xFF, 8),
            Err(CodecError::BitPositionOutOfRange { position: 8 })
        );
    }

    #[test]
    fn test_bit_at_position_with_policy() {
        assert_eq!(
            bit_at_position_with(0b0000_0010, 9, BitPositionPolicy::Mask),
            Ok(true)
        );
        assert!(bit_at_position_with(0b0000_0010, 9, BitPositionPolicy::Reject).is_err());
        assert_eq!(
            bit_at_position_with(0b0000_0010, 1, BitPositionPolicy::Reject),
            Ok(true)
        );
    }

    #[test]
    fn test_policy_from_str() {
        assert_eq!("mask".parse::<BitPositionPolicy>(), Ok(BitPositionPolicy::Mask));
        assert_eq!("REJECT".parse::<BitPositionPolicy>(), Ok(BitPositionPolicy::Reject));
        assert!("wrap".parse::<BitPositionPolicy>().is_err());
        assert_eq!(BitPositionPolicy::default(), BitPositionPolicy::Mask);
    }
}
