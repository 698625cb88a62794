//! roomba-inspect - Roomba telemetry byte inspector
//!
//! Decodes byte pairs, bit flags and sensor buffer fields exactly the way the
//! `roomba-codec` library does, so captured serial dumps can be checked by hand.

mod commands;
mod config;
mod logging;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use roomba_codec::{BitPositionPolicy, ByteOrder};
use tracing::debug;

use crate::commands::{parse_byte, FieldKind, Report};
use crate::config::{ConfigOverrides, InspectConfig};

#[derive(Parser)]
#[command(name = "roomba-inspect")]
#[command(about = "Roomba telemetry byte inspector")]
#[command(long_about = "Roomba telemetry byte inspector

Byte arguments accept decimal (200), hex (0xC8) or binary (0b1100_1000).

Examples:
  roomba-inspect signed 0xFF 0x38              # -200
  roomba-inspect unsigned 0x09 0xC4            # 2500
  roomba-inspect bit 0b0000_1001 3             # wheel drop left
  roomba-inspect field 'FF F4 00 5A' -o 2 -k signed
  roomba-inspect field '00 5A 09' -o 2 -k bit -b 3
  roomba-inspect encode -- -500                # drive direct velocity bytes")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    no_color: bool,

    /// Configuration file (default: ./roomba-inspect.toml or ./roomba-inspect.yaml)
    #[arg(short = 'c', long = "config", global = true)]
    config: Option<PathBuf>,

    /// Byte order of 16-bit fields (AB/BE or BA/LE)
    #[arg(long, global = true)]
    byte_order: Option<ByteOrder>,

    /// Handling of bit positions above 7 (mask or reject)
    #[arg(long, global = true)]
    bit_policy: Option<BitPositionPolicy>,
}

#[derive(Subcommand)]
enum Commands {
    /// Decode a (high, low) byte pair as a signed 16-bit value
    Signed {
        #[arg(value_parser = parse_byte)]
        high: u8,
        #[arg(value_parser = parse_byte)]
        low: u8,
    },
    /// Decode a (high, low) byte pair as an unsigned 16-bit value
    Unsigned {
        #[arg(value_parser = parse_byte)]
        high: u8,
        #[arg(value_parser = parse_byte)]
        low: u8,
    },
    /// Test one bit of a byte (0 = least significant)
    Bit {
        #[arg(value_parser = parse_byte)]
        data: u8,
        #[arg(value_parser = parse_byte)]
        position: u8,
    },
    /// Show all eight bits of a byte
    Bits {
        #[arg(value_parser = parse_byte)]
        data: u8,
    },
    /// Read a field from a hex dump of a sensor buffer
    Field {
        /// Hex dump, e.g. "13 40 0A" or "13400A"
        hex: String,
        /// Byte offset of the field
        #[arg(short, long, default_value_t = 0)]
        offset: usize,
        /// Field type
        #[arg(short, long, value_enum, default_value_t = FieldKind::Unsigned)]
        kind: FieldKind,
        /// Bit position for `--kind bit`
        #[arg(short = 'b', long = "bit", default_value_t = 0, value_parser = parse_byte)]
        position: u8,
    },
    /// Encode a signed 16-bit value into its (high, low) byte pair
    Encode {
        #[arg(allow_negative_numbers = true)]
        value: i16,
    },
}

fn main() -> ExitCode {
    exit_code(run())
}

fn exit_code(result: Result<()>) -> ExitCode {
    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{} {:#}", "error:".red().bold(), e);
            ExitCode::FAILURE
        },
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = InspectConfig::load(cli.config.as_deref())?;
    config.apply(&ConfigOverrides {
        byte_order: cli.byte_order,
        bit_policy: cli.bit_policy,
        verbose: cli.verbose,
        no_color: cli.no_color,
    });

    if !config.color {
        colored::control::set_override(false);
    }
    logging::init(&config.log_level, config.color)?;
    debug!("Effective configuration: {:?}", config);

    let report = execute(cli.command, &config)?;
    println!("{}", report.render());
    Ok(())
}

fn execute(command: Commands, config: &InspectConfig) -> Result<Report> {
    Ok(match command {
        Commands::Signed { high, low } => commands::signed(high, low),
        Commands::Unsigned { high, low } => commands::unsigned(high, low),
        Commands::Bit { data, position } => commands::bit(data, position, config.bit_policy)?,
        Commands::Bits { data } => commands::bits(data),
        Commands::Field {
            hex,
            offset,
            kind,
            position,
        } => commands::field(&hex, offset, kind, position, config.byte_order)?,
        Commands::Encode { value } => commands::encode(value),
    })
}

#[cfg(test)]
#[allow(clippy::disallowed_methods)] // Test code - unwrap is acceptable
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> std::result::Result<Cli, clap::Error> {
        Cli::try_parse_from(std::iter::once("roomba-inspect").chain(args.iter().copied()))
    }

    /// Config with the parsed flags applied, skipping file and env discovery
    fn configured(cli: &Cli) -> InspectConfig {
        let mut config = InspectConfig::default();
        config.apply(&ConfigOverrides {
            byte_order: cli.byte_order,
            bit_policy: cli.bit_policy,
            verbose: cli.verbose,
            no_color: cli.no_color,
        });
        config
    }

    fn run_args(args: &[&str]) -> Result<Report> {
        let cli = parse(args).unwrap();
        let config = configured(&cli);
        execute(cli.command, &config)
    }

    #[test]
    fn test_cli_definition() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_encode_negative_value() {
        let cli = parse(&["encode", "-500"]).unwrap();
        assert!(matches!(cli.command, Commands::Encode { value: -500 }));

        let report = run_args(&["encode", "-500"]).unwrap();
        assert_eq!(report.value("high"), Some("0xFE"));
        assert_eq!(report.value("low"), Some("0x0C"));

        assert!(parse(&["encode", "--", "-32768"]).is_ok());
        assert!(parse(&["encode", "40000"]).is_err());
    }

    #[test]
    fn test_global_flags_parse() {
        let cli = parse(&["--byte-order", "LE", "--bit-policy", "reject", "bits", "0xFF"]).unwrap();
        assert_eq!(cli.byte_order, Some(ByteOrder::LittleEndian));
        assert_eq!(cli.bit_policy, Some(BitPositionPolicy::Reject));

        // global flags are accepted after the subcommand too
        let cli = parse(&["signed", "0xFF", "0x38", "--byte-order", "big-endian", "-v"]).unwrap();
        assert_eq!(cli.byte_order, Some(ByteOrder::BigEndian));
        assert!(cli.verbose);

        let cli = parse(&["bits", "1"]).unwrap();
        assert_eq!(cli.byte_order, None);
        assert_eq!(cli.bit_policy, None);
    }

    #[test]
    fn test_invalid_flag_values_rejected() {
        assert!(parse(&["--byte-order", "CDAB", "bits", "1"]).is_err());
        assert!(parse(&["--bit-policy", "wrap", "bits", "1"]).is_err());
        assert!(parse(&["signed", "256", "0"]).is_err());
        assert!(parse(&["field", "0102", "--kind", "float"]).is_err());
    }

    #[test]
    fn test_flags_reach_commands() {
        let report = run_args(&["--byte-order", "BA", "field", "FB 50", "-k", "unsigned"]).unwrap();
        assert_eq!(report.value("value"), Some("20731"));

        let report = run_args(&["bit", "1", "8"]).unwrap();
        assert_eq!(report.value("set"), Some("true"));

        assert!(run_args(&["--bit-policy", "reject", "bit", "1", "8"]).is_err());
    }

    #[test]
    fn test_field_bit_kind() {
        let report = run_args(&["field", "00 5A 09", "-o", "2", "-k", "bit", "-b", "0"]).unwrap();
        assert_eq!(report.value("value"), Some("true"));

        assert!(run_args(&["field", "00 5A 09", "-o", "2", "-k", "bit", "--bit", "9"]).is_err());
    }

    #[test]
    fn test_failure_exits_nonzero() {
        let failed = run_args(&["--bit-policy", "reject", "bit", "1", "8"]).map(|_| ());
        assert_eq!(exit_code(failed), ExitCode::FAILURE);
        assert_eq!(exit_code(Ok(())), ExitCode::SUCCESS);
    }
}
