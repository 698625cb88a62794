//! Inspection commands
//!
//! Each command decodes its input into a [`Report`]; `main` renders it.

use anyhow::{Context, Result};
use clap::ValueEnum;
use colored::*;
use roomba_codec::{
    bit_at_position, bit_at_position_with, decode_hex, encode_upper, format_decimal,
    read_bit, read_bool, read_i16_with, read_u16_with, signed_16_from_bytes, signed_16_to_bytes,
    unsigned_16_from_bytes, BitPositionPolicy, ByteOrder,
};
use tracing::debug;

/// Field type for `field`
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FieldKind {
    /// Two bytes, two's complement
    Signed,
    /// Two bytes, 0..=65535
    Unsigned,
    /// One byte, strictly 0 or 1
    Bool,
    /// One bit of a flag byte, position 0..=7
    Bit,
}

/// Labelled values produced by one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    title: String,
    rows: Vec<(String, String)>,
}

impl Report {
    fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            rows: Vec::new(),
        }
    }

    fn row(mut self, label: impl Into<String>, value: impl ToString) -> Self {
        self.rows.push((label.into(), value.to_string()));
        self
    }

    /// Value of the first row named `label`
    #[cfg(test)]
    pub(crate) fn value(&self, label: &str) -> Option<&str> {
        self.rows
            .iter()
            .find(|(name, _)| name == label)
            .map(|(_, value)| value.as_str())
    }

    pub fn render(&self) -> String {
        let width = self.rows.iter().map(|(label, _)| label.len()).max().unwrap_or(0);
        let mut out = format!("{}", self.title.bold());
        for (label, value) in &self.rows {
            out.push_str(&format!(
                "\n  {:<width$}  {}",
                label.cyan(),
                value.green(),
                width = width
            ));
        }
        out
    }
}

/// Parse a byte given as decimal, `0x` hex or `0b` binary
pub fn parse_byte(s: &str) -> std::result::Result<u8, String> {
    let s = s.trim();
    let parsed = if let Some(hex) = s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
        u8::from_str_radix(hex, 16)
    } else if let Some(bin) = s.strip_prefix("0b").or_else(|| s.strip_prefix("0B")) {
        u8::from_str_radix(&bin.replace('_', ""), 2)
    } else {
        s.parse::<u8>()
    };
    parsed.map_err(|e| format!("invalid byte '{}': {}", s, e))
}

fn pair_rows(report: Report, high: u8, low: u8) -> Report {
    report
        .row("high", format!("{:#04X}", high))
        .row("low", format!("{:#04X}", low))
        .row("hex", encode_upper(&[high, low]))
}

pub fn signed(high: u8, low: u8) -> Report {
    let value = signed_16_from_bytes(high, low);
    debug!("signed pair {},{} -> {}", high, low, value);
    pair_rows(Report::new("Signed 16-bit"), high, low).row("value", value)
}

pub fn unsigned(high: u8, low: u8) -> Report {
    let value = unsigned_16_from_bytes(high, low);
    debug!("unsigned pair {},{} -> {}", high, low, value);
    pair_rows(Report::new("Unsigned 16-bit"), high, low).row("value", value)
}

pub fn bit(data: u8, position: u8, policy: BitPositionPolicy) -> Result<Report> {
    let set = bit_at_position_with(data, position, policy)
        .with_context(|| format!("Cannot test bit {} of {:#010b}", position, data))?;

    Ok(Report::new("Bit test")
        .row("data", format!("{:#010b}", data))
        .row("position", position)
        .row("policy", policy)
        .row("set", set))
}

pub fn bits(data: u8) -> Report {
    (0..8u8).rev().fold(
        Report::new(format!("Bits of {:#010b} ({})", data, data)),
        |report, position| {
            report.row(
                format!("bit {}", position),
                u8::from(bit_at_position(data, position)),
            )
        },
    )
}

pub fn field(
    hex: &str,
    offset: usize,
    kind: FieldKind,
    position: u8,
    order: ByteOrder,
) -> Result<Report> {
    let buf = decode_hex(hex).context("Cannot parse hex dump")?;
    debug!("Decoded {} bytes: [{}]", buf.len(), format_decimal(&buf));

    let value = match kind {
        FieldKind::Signed => read_i16_with(&buf, offset, order)?.to_string(),
        FieldKind::Unsigned => read_u16_with(&buf, offset, order)?.to_string(),
        FieldKind::Bool => read_bool(&buf, offset)?.to_string(),
        FieldKind::Bit => read_bit(&buf, offset, position)?.to_string(),
    };

    let mut report = Report::new("Field")
        .row("bytes", format_decimal(&buf))
        .row("offset", offset)
        .row("kind", format!("{:?}", kind).to_lowercase());
    match kind {
        FieldKind::Signed | FieldKind::Unsigned => report = report.row("order", order),
        FieldKind::Bit => report = report.row("position", position),
        FieldKind::Bool => {},
    }
    Ok(report.row("value", value))
}

pub fn encode(value: i16) -> Report {
    let (high, low) = signed_16_to_bytes(value);
    pair_rows(Report::new(format!("Encode {}", value)), high, low)
        .row("bytes", format_decimal(&[high, low]))
}
