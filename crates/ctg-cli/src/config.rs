use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use ctg_store::LocatorConfig;

use crate::names::NamePool;

/// Settings read from the optional `--config` TOML file.
///
/// ```toml
/// names = ["Kestrel", "Merlin"]
///
/// [locator]
/// max_iterations = 200
/// scan_window = 16
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CliConfig {
    pub locator: LocatorConfig,
    pub names: NamePool,
}

impl CliConfig {
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("reading config {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("parsing config {}", path.display()))
    }

    pub fn parse(text: &str) -> anyhow::Result<Self> {
        Ok(toml::from_str(text)?)
    }
}
