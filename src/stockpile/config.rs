use crate::error::{Result, StockpileError};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

pub const DEFAULT_MAX_ITEMS: usize = 100;
pub const DEFAULT_LOW_STOCK_THRESHOLD: u32 = 5;

/// Limits for an inventory session, optionally loaded from a JSON file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InventoryConfig {
    /// Maximum number of live items
    #[serde(default = "default_max_items")]
    pub max_items: usize,

    /// Items with a quantity at or below this count as low stock
    #[serde(default = "default_low_stock_threshold")]
    pub low_stock_threshold: u32,
}

fn default_max_items() -> usize {
    DEFAULT_MAX_ITEMS
}

fn default_low_stock_threshold() -> u32 {
    DEFAULT_LOW_STOCK_THRESHOLD
}

impl Default for InventoryConfig {
    fn default() -> Self {
        Self {
            max_items: DEFAULT_MAX_ITEMS,
            low_stock_threshold: DEFAULT_LOW_STOCK_THRESHOLD,
        }
    }
}

impl InventoryConfig {
    /// Load config from the given file, or return defaults if it does not exist
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path).map_err(StockpileError::Io)?;
        let config: InventoryConfig =
            serde_json::from_str(&content).map_err(StockpileError::Serialization)?;
        config.validate()?;
        Ok(config)
    }

    /// Save config to the given file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(StockpileError::Io)?;
            }
        }

        let content = serde_json::to_string_pretty(self).map_err(StockpileError::Serialization)?;
        fs::write(path, content).map_err(StockpileError::Io)?;
        Ok(())
    }

    pub fn with_max_items(mut self, max_items: usize) -> Self {
        self.max_items = max_items;
        self
    }

    pub fn with_low_stock_threshold(mut self, threshold: u32) -> Self {
        self.low_stock_threshold = threshold;
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_items == 0 {
            return Err(StockpileError::Config(
                "max_items must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}
