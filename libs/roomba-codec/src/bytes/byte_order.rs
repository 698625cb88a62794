//! Byte order of a 16-bit telemetry field
//!
//! The Open Interface transmits every 16-bit sensor value high byte first.
//! Little-endian is kept for telemetry captured from other sources.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CodecError;

/// Order of the two bytes of a 16-bit field
///
/// Uses AB notation where A is the most significant byte:
/// - `BigEndian (AB)`: 0x1234 → [0x12, 0x34]
/// - `LittleEndian (BA)`: 0x1234 → [0x34, 0x12]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ByteOrder {
    /// Big-endian: AB (high byte first). Roomba wire order.
    #[default]
    BigEndian,

    /// Little-endian: BA (low byte first)
    LittleEndian,
}

impl ByteOrder {
    /// Short AB code, also the serialized form
    pub fn code(&self) -> &'static str {
        match self {
            Self::BigEndian => "AB",
            Self::LittleEndian => "BA",
        }
    }

    /// Get descriptive name
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BigEndian => "AB (Big-Endian)",
            Self::LittleEndian => "BA (Little-Endian)",
        }
    }
}

impl FromStr for ByteOrder {
    type Err = CodecError;

    /// Supports:
    /// - "AB", "BE", "BIG_ENDIAN", "BIGENDIAN" → BigEndian
    /// - "BA", "LE", "LITTLE_ENDIAN", "LITTLEENDIAN" → LittleEndian
    ///
    /// Case-insensitive; `-` is ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_uppercase().replace('-', "");
        match normalized.as_str() {
            "AB" | "BE" | "BIG_ENDIAN" | "BIGENDIAN" => Ok(Self::BigEndian),
            "BA" | "LE" | "LITTLE_ENDIAN" | "LITTLEENDIAN" => Ok(Self::LittleEndian),
            _ => Err(CodecError::unknown_byte_order(s)),
        }
    }
}

impl TryFrom<String> for ByteOrder {
    type Error = CodecError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<ByteOrder> for String {
    fn from(order: ByteOrder) -> Self {
        order.code().to_string()
    }
}

impl fmt::Display for ByteOrder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    #[test]
    fn test_from_str_valid() {
        assert_eq!("AB".parse::<ByteOrder>(), Ok(ByteOrder::BigEndian));
        assert_eq!("be".parse::<ByteOrder>(), Ok(ByteOrder::BigEndian));
        assert_eq!("big-endian".parse::<ByteOrder>(), Ok(ByteOrder::BigEndian));
        assert_eq!("BIG_ENDIAN".parse::<ByteOrder>(), Ok(ByteOrder::BigEndian));

        assert_eq!("BA".parse::<ByteOrder>(), Ok(ByteOrder::LittleEndian));
        assert_eq!("le".parse::<ByteOrder>(), Ok(ByteOrder::LittleEndian));
        assert_eq!(
            "LittleEndian".parse::<ByteOrder>(),
            Ok(ByteOrder::LittleEndian)
        );
    }

    #[test]
    fn test_from_str_invalid() {
        assert_eq!(
            "CDAB".parse::<ByteOrder>(),
            Err(CodecError::UnknownByteOrder("CDAB".to_string()))
        );
        assert!("".parse::<ByteOrder>().is_err());
    }

    #[test]
    fn test_serde_uses_code() {
        let json = serde_json::to_string(&ByteOrder::LittleEndian).unwrap();
        assert_eq!(json, "\"BA\"");

        let order: ByteOrder = serde_json::from_str("\"big_endian\"").unwrap();
        assert_eq!(order, ByteOrder::BigEndian);

        assert!(serde_json::from_str::<ByteOrder>("\"middle\"").is_err());
    }

    #[test]
    fn test_default() {
        assert_eq!(ByteOrder::default(), ByteOrder::BigEndian);
    }
}
