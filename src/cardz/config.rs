use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

const DEFAULT_INVENTORY_FILE: &str = "inventory_data.csv";
const DEFAULT_CACHE_FILE: &str = "local_card_database.json";
const DEFAULT_BULK_DATA_DIR: &str = "pokemon-tcg-data";
const DEFAULT_API_BASE_URL: &str = "https://api.pokemontcg.io/v2/cards";
const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Configuration for cardz, stored in the data directory as config.json.
///
/// Every field has a serde default so config files written by older
/// versions keep loading.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CardzConfig {
    /// Inventory flat-file name, relative to the data directory
    #[serde(default = "default_inventory_file")]
    pub inventory_file: String,

    /// Reference cache file name, relative to the data directory
    #[serde(default = "default_cache_file")]
    pub cache_file: String,

    /// Root of the bulk card dataset (sets/en.json + cards/en/*.json)
    #[serde(default = "default_bulk_data_dir")]
    pub bulk_data_dir: String,

    /// Card catalog API endpoint
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Static API credential, sent as X-Api-Key. Empty means keyless
    /// (the upstream API allows it at a lower rate limit).
    #[serde(default)]
    pub api_key: String,

    /// Connect and per-request timeout for catalog API calls
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_inventory_file() -> String {
    DEFAULT_INVENTORY_FILE.to_string()
}

fn default_cache_file() -> String {
    DEFAULT_CACHE_FILE.to_string()
}

fn default_bulk_data_dir() -> String {
    DEFAULT_BULK_DATA_DIR.to_string()
}

fn default_api_base_url() -> String {
    DEFAULT_API_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Default for CardzConfig {
    fn default() -> Self {
        Self {
            inventory_file: default_inventory_file(),
            cache_file: default_cache_file(),
            bulk_data_dir: default_bulk_data_dir(),
            api_base_url: default_api_base_url(),
            api_key: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl CardzConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path)?;
        let config: CardzConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self)?;
        fs::write(config_path, content)?;
        Ok(())
    }

    /// Resolve the inventory flat-file path inside the data directory
    pub fn inventory_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.inventory_file)
    }

    /// Resolve the reference cache path inside the data directory
    pub fn cache_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.cache_file)
    }

    /// Resolve the bulk dataset root inside the data directory
    pub fn bulk_data_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(&self.bulk_data_dir)
    }
}
