use crate::context::Context;
use crate::types::NetworkIdentifier;
use crate::utils::create_command_path;
use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

const DEFAULT_DATA_DIRECTORY: &str = "rosetta-data";
const DEFAULT_TIP_DELAY: u64 = 300;

/// Settings shared by tools built on this crate, usually read from a TOML
/// file:
///
/// ```toml
/// data_directory = "/var/lib/indexer"
/// tip_delay = 60
/// lookup_timeout = 5000
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root directory for per-command, per-network data.
    pub data_directory: PathBuf,
    /// Seconds a block may lag behind the current time and still be treated
    /// as the tip.
    pub tip_delay: u64,
    /// Milliseconds allowed for a batch of balance lookups. Unbounded when
    /// unset.
    pub lookup_timeout: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_directory: DEFAULT_DATA_DIRECTORY.into(),
            tip_delay: DEFAULT_TIP_DELAY,
            lookup_timeout: None,
        }
    }
}

impl Config {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml_edit::de::from_str(contents)?)
    }

    pub fn command_path(&self, cmd: &str, network: &NetworkIdentifier) -> Result<PathBuf> {
        create_command_path(&self.data_directory, cmd, network)
    }

    /// A context for balance lookups, bounded by `lookup_timeout`.
    pub fn lookup_context(&self, parent: &Context) -> Context {
        match self.lookup_timeout {
            Some(ms) => parent.with_timeout(Duration::from_millis(ms)),
            None => parent.child(),
        }
    }
}
