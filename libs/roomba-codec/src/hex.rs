//! Byte dump helpers
//!
//! Uppercase hex for compact dumps, comma-joined decimal for the format the
//! serial reader logs raw packets in.

use std::fmt::Write;

use crate::error::{CodecError, Result};

/// Encode bytes to uppercase hex string
/// Example: [0x12, 0x34, 0xAB] -> "1234AB"
pub fn encode_upper(data: &[u8]) -> String {
    let mut result = String::with_capacity(data.len() * 2);
    for byte in data {
        // Writing to String buffer is infallible
        let _ = write!(&mut result, "{:02X}", byte);
    }
    result
}

/// Join bytes as decimal values separated by commas
/// Example: [19, 64, 255] -> "19,64,255"
pub fn format_decimal(data: &[u8]) -> String {
    data.iter()
        .map(|byte| byte.to_string())
        .collect::<Vec<_>>()
        .join(",")
}

/// Decode a hex dump into bytes
///
/// Accepts an optional `0x` prefix and either case. The dump is either one
/// unbroken run of digits ("13400A", "0x13400a") or byte pairs separated by
/// whitespace, `,` or `:` ("13 40 0A", "13:40:0A"). A separated token that is
/// not exactly two digits is rejected rather than re-paired across the gap.
pub fn decode_hex(input: &str) -> Result<Vec<u8>> {
    let trimmed = input.trim();
    let body = trimmed
        .strip_prefix("0x")
        .or_else(|| trimmed.strip_prefix("0X"))
        .unwrap_or(trimmed);

    let tokens: Vec<&str> = body
        .split(|c: char| c.is_whitespace() || c == ',' || c == ':')
        .filter(|token| !token.is_empty())
        .collect();

    match tokens.as_slice() {
        [] => Ok(Vec::new()),
        [run] => decode_run(run),
        pairs => pairs
            .iter()
            .map(|pair| match decode_run(pair)?.as_slice() {
                [byte] => Ok(*byte),
                _ => Err(CodecError::invalid_hex(format!(
                    "separated byte '{}' must be two hex digits",
                    pair
                ))),
            })
            .collect(),
    }
}

fn decode_run(run: &str) -> Result<Vec<u8>> {
    let digits: Vec<u8> = run
        .chars()
        .map(|c| {
            c.to_digit(16)
                .map(|d| d as u8)
                .ok_or_else(|| CodecError::invalid_hex(format!("unexpected character '{}'", c)))
        })
        .collect::<Result<_>>()?;

    if digits.len() % 2 != 0 {
        return Err(CodecError::invalid_hex(format!(
            "odd number of hex digits in '{}'",
            run
        )));
    }

    Ok(digits
        .chunks_exact(2)
        .map(|pair| (pair[0] << 4) | pair[1])
        .collect())
}
