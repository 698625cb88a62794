//! Layered configuration for roomba-inspect
//!
//! Priority (highest to lowest):
//! 1. Command-line flags
//! 2. Environment variables prefixed `ROOMBA_INSPECT_`
//! 3. The file given by `--config`, otherwise `roomba-inspect.toml` / `roomba-inspect.yaml`
//! 4. Default values

use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use figment::{
    providers::{Env, Format, Json, Serialized, Toml, Yaml},
    Figment,
};
use roomba_codec::{BitPositionPolicy, ByteOrder};
use serde::{Deserialize, Serialize};

/// Environment variable prefix
pub const ENV_PREFIX: &str = "ROOMBA_INSPECT_";

/// Base name of the auto-discovered config files
const CONFIG_STEM: &str = "roomba-inspect";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct InspectConfig {
    /// Byte order of 16-bit fields read by `field`
    pub byte_order: ByteOrder,
    /// Out-of-range handling for `bit`
    pub bit_policy: BitPositionPolicy,
    /// Log filter used when RUST_LOG is unset
    pub log_level: String,
    /// Colored terminal output
    pub color: bool,
}

impl Default for InspectConfig {
    fn default() -> Self {
        Self {
            byte_order: ByteOrder::BigEndian,
            bit_policy: BitPositionPolicy::Mask,
            log_level: "info".to_string(),
            color: true,
        }
    }
}

/// Values given on the command line; `None` keeps the loaded value
#[derive(Debug, Default, Clone)]
pub struct ConfigOverrides {
    pub byte_order: Option<ByteOrder>,
    pub bit_policy: Option<BitPositionPolicy>,
    pub verbose: bool,
    pub no_color: bool,
}

impl InspectConfig {
    /// Load from the working directory (or `explicit`) and the environment
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        Self::load_from(Path::new("."), explicit)
    }

    /// Load with config file discovery rooted at `dir`
    pub fn load_from(dir: &Path, explicit: Option<&Path>) -> Result<Self> {
        figment(dir, explicit)?
            .extract()
            .map_err(|e| anyhow!("Failed to load configuration: {}", e))
    }

    pub fn apply(&mut self, overrides: &ConfigOverrides) {
        if let Some(order) = overrides.byte_order {
            self.byte_order = order;
        }
        if let Some(policy) = overrides.bit_policy {
            self.bit_policy = policy;
        }
        if overrides.verbose {
            self.log_level = "debug".to_string();
        }
        if overrides.no_color {
            self.color = false;
        }
    }
}

fn figment(dir: &Path, explicit: Option<&Path>) -> Result<Figment> {
    let figment = Figment::new().merge(Serialized::defaults(InspectConfig::default()));

    let figment = match explicit {
        Some(path) => {
            if !path.exists() {
                bail!("Config file not found: {}", path.display());
            }
            merge_file(figment, path)?
        },
        None => figment
            .merge(Toml::file(discovered(dir, "toml")))
            .merge(Yaml::file(discovered(dir, "yaml"))),
    };

    Ok(figment.merge(Env::prefixed(ENV_PREFIX)))
}

fn discovered(dir: &Path, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", CONFIG_STEM, extension))
}

fn merge_file(figment: Figment, path: &Path) -> Result<Figment> {
    let extension = path
        .extension()
        .and_then(|s| s.to_str())
        .context("Config file must have an extension")?;

    Ok(match extension {
        "toml" => figment.merge(Toml::file(path)),
        "yaml" | "yml" => figment.merge(Yaml::file(path)),
        "json" => figment.merge(Json::file(path)),
        _ => bail!("Unsupported config file format: {}", extension),
    })
}
