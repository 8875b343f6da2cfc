//! Provider configuration files.
//!
//! Explicit provider settings can live in a YAML file. By default it is
//! read from `~/.graviteeam/provider.yaml`:
//!
//! ```yaml
//! endpoint: https://am.example.com
//! username: admin
//! password: adminadmin
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, bail, Context, Result};
use dirs::home_dir;
use lazy_static::lazy_static;
use serde_json::Value;
use yaml_peg::serde as yaml;

use crate::logging::debug;

lazy_static! {
    static ref PROFILE_CFG_DIR: PathBuf = PathBuf::from(".graviteeam");
    static ref PROVIDER_CFG: PathBuf = PathBuf::from("provider.yaml");
}

/// Default path for the provider config.
pub fn provider_cfg_path() -> Result<PathBuf> {
    Ok(home_dir()
        .ok_or_else(|| anyhow!("unable to find the home directory"))?
        .join(PROFILE_CFG_DIR.as_path())
        .join(PROVIDER_CFG.as_path()))
}

/// Read a provider config file into a JSON object.
pub fn read_provider_config<P: AsRef<Path>>(path: P) -> Result<Value> {
    debug!("Trying to read provider config from {:?}", path.as_ref());
    let config_raw = fs::read_to_string(&path).context("Reading file")?;
    parse_provider_config(&config_raw)
}

/// Parse YAML provider settings into a JSON object.
pub fn parse_provider_config(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Object(Default::default()));
    }
    let mut config = yaml::from_str::<Value>(raw).context("Deserializing config")?;
    match config.pop() {
        Some(Value::Null) | None => Ok(Value::Object(Default::default())),
        Some(v @ Value::Object(_)) => Ok(v),
        Some(other) => bail!("expected a mapping of provider settings, got: {other}"),
    }
}

/// Read the provider config from `path` if given, otherwise from the
/// default location. A missing default file yields empty settings.
pub fn load_provider_config(path: Option<&Path>) -> Result<Value> {
    match path {
        Some(p) => read_provider_config(p)
            .with_context(|| format!("unable to read provider config {}", p.display())),
        None => {
            let default = provider_cfg_path()?;
            if default.exists() {
                read_provider_config(&default)
            } else {
                debug!("No provider config at {:?}. Using environment and defaults.", default);
                Ok(Value::Object(Default::default()))
            }
        }
    }
}
