use crate::models::anchor::Address;
use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub wallet: WalletConfig,
    pub chain: ChainConfig,
    #[serde(default)]
    pub pinning: PinningConfig,
    #[serde(default)]
    pub links: LinksConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
    pub port: u16,
    /// Largest accepted request body, covers uploaded data files
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StorageConfig {
    /// Directory holding the persistent storage scope
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,
}

#[derive(Debug, Clone, Deserialize)]
pub struct WalletConfig {
    /// JSON-RPC endpoint of the wallet provider (e.g. a local signer)
    pub provider_url: Option<String>,
    /// Seconds between account/chain polls
    #[serde(default = "default_wallet_poll_interval")]
    pub poll_interval: u64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ChainConfig {
    pub rpc_url: String,
    pub contract_address: String,
    #[serde(default = "default_confirmations")]
    pub confirmations: u64,
    /// Milliseconds between receipt polls while waiting for confirmations
    #[serde(default = "default_receipt_poll_interval")]
    pub receipt_poll_interval: u64,
    /// Seconds before an outbound RPC request is abandoned
    #[serde(default = "default_request_timeout")]
    pub request_timeout: u64,
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct PinningConfig {
    pub endpoint: Option<String>,
    pub jwt: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LinksConfig {
    pub github_url: Option<String>,
    pub docs_url: Option<String>,
    #[serde(default = "default_explorer_tx_base")]
    pub explorer_tx_base: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
    #[serde(default = "default_console")]
    pub console: bool,
}

// Default value functions
fn default_bind_address() -> String {
    "127.0.0.1".to_string()
}

fn default_max_upload_bytes() -> usize {
    25 * 1024 * 1024
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("data")
}

fn default_wallet_poll_interval() -> u64 {
    4
}

fn default_confirmations() -> u64 {
    1
}

fn default_receipt_poll_interval() -> u64 {
    2000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_explorer_tx_base() -> String {
    "https://sepolia.etherscan.io/tx/".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "json".to_string()
}

fn default_console() -> bool {
    false
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
        }
    }
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            provider_url: None,
            poll_interval: default_wallet_poll_interval(),
        }
    }
}

impl Default for LinksConfig {
    fn default() -> Self {
        Self {
            github_url: None,
            docs_url: None,
            explorer_tx_base: default_explorer_tx_base(),
        }
    }
}

impl PinningConfig {
    /// Endpoint and token, only when both are set and non-empty
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (self.endpoint.as_deref(), self.jwt.as_deref()) {
            (Some(endpoint), Some(jwt)) if !endpoint.is_empty() && !jwt.is_empty() => {
                Some((endpoint, jwt))
            }
            _ => None,
        }
    }
}

impl Config {
    /// Load configuration from a TOML file
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .context(format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml(&content)
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content).context("Failed to parse config file")?;

        config.validate()?;

        Ok(config)
    }

    /// Parsed contract address; `validate` guarantees this succeeds
    pub fn contract_address(&self) -> Result<Address> {
        self.chain
            .contract_address
            .parse()
            .context("Invalid chain.contract_address")
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            bail!("Server port must be greater than 0");
        }

        if self.server.max_upload_bytes == 0 {
            bail!("server.max_upload_bytes must be greater than 0");
        }

        if self.chain.rpc_url.is_empty() {
            bail!("chain.rpc_url must not be empty");
        }

        self.contract_address()?;

        if self.chain.confirmations == 0 {
            bail!("chain.confirmations must be greater than 0");
        }

        if self.chain.receipt_poll_interval == 0 {
            bail!("chain.receipt_poll_interval must be greater than 0");
        }

        if self.chain.request_timeout == 0 {
            bail!("chain.request_timeout must be greater than 0");
        }

        if self.wallet.poll_interval == 0 {
            bail!("wallet.poll_interval must be greater than 0");
        }

        if let Some(url) = &self.wallet.provider_url {
            if url.is_empty() {
                bail!("wallet.provider_url must not be empty when set");
            }
        }

        let valid_levels = ["trace", "debug", "info", "warn", "error"];
        if !valid_levels.contains(&self.logging.level.as_str()) {
            bail!(
                "Invalid log level '{}'. Must be one of: trace, debug, info, warn, error",
                self.logging.level
            );
        }

        let valid_formats = ["json", "console"];
        if !valid_formats.contains(&self.logging.format.as_str()) {
            bail!(
                "Invalid log format '{}'. Must be one of: json, console",
                self.logging.format
            );
        }

        Ok(())
    }
}
