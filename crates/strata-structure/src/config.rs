use crate::builder::PaletteBuilder;
use serde::Deserialize;
use std::fs;
use std::path::Path;
use strata_common::Result;

/// Data version written when the caller does not pick one.
pub const DEFAULT_DATA_VERSION: i32 = 3700;

/// Settings for turning a finalized structure into bytes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct StructureConfig {
    pub root_name: String,
    pub data_version: i32,
    pub compress: bool,
}

impl Default for StructureConfig {
    fn default() -> Self {
        StructureConfig {
            root_name: String::new(),
            data_version: DEFAULT_DATA_VERSION,
            compress: true,
        }
    }
}

impl StructureConfig {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }

    /// A fresh builder stamped with this config's data version.
    pub fn builder(&self) -> PaletteBuilder {
        PaletteBuilder::new(self.data_version)
    }
}
