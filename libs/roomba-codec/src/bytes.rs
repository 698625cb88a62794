//! Binary data processing utilities
//!
//! Provides byte-pair conversions, bit extraction and bounds-checked field
//! reads for Roomba Open Interface sensor packets.
//!
//! # Design Principles
//!
//! - **Raw bit patterns**: every input byte is a `u8`, never a character
//! - **Type-safe**: `ByteOrder` and `BitPositionPolicy` enums instead of flags
//! - **Total core**: pair conversions and the masked bit test cannot fail
//! - **Zero-copy**: field readers borrow the received buffer

pub mod bit_ops;
pub mod byte_order;
pub mod conversions;

pub use bit_ops::*;
pub use byte_order::ByteOrder;
pub use conversions::*;
