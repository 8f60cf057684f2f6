// JSON bodies returned by the page routes

use crate::models::anchor::ContentHash;
use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

/// Header "Connect Wallet" button
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletButton {
    pub label: String,
    pub connected: bool,
}

/// Wallet dropdown panel under the header button
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletDropdown {
    pub hidden: bool,
    pub wallet: Option<String>,
    pub network: Option<String>,
    /// False when the wallet is on anything other than Sepolia
    pub network_ok: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WalletView {
    pub button: WalletButton,
    pub dropdown: WalletDropdown,
    /// Set when the click could not be served, e.g. no provider configured
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthPageView {
    pub mode: String,
    pub meta: String,
}

/// Result of submitting the auth form
#[derive(Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthOutcome {
    pub success: bool,
    pub redirect: Option<String>,
    pub email_error: Option<String>,
    pub password_error: Option<String>,
    pub auth_error: Option<String>,
    pub email_invalid: bool,
    pub password_invalid: bool,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NodeRow {
    pub id: String,
    pub wallet: String,
    pub submissions: u32,
    pub last: String,
    pub status: String,
    pub rep: f64,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityItem {
    pub message: String,
    pub time: String,
    pub tx_hash: Option<String>,
    pub explorer_url: Option<String>,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlockStats {
    pub block_number: u64,
    /// Seconds since the latest block, one decimal
    pub seconds_since: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DashboardView {
    pub session_email: Option<String>,
    pub nodes: Vec<NodeRow>,
    pub activity: Vec<ActivityItem>,
    pub block_stats: Option<BlockStats>,
    pub wallet: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct UploadPreview {
    pub hash: ContentHash,
    pub timeline: Vec<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct UploadReport {
    pub success: bool,
    pub hash: Option<ContentHash>,
    pub cid: Option<String>,
    pub gas_estimate: Option<String>,
    pub tx_hash: Option<String>,
    pub explorer_url: Option<String>,
    pub block_number: Option<u64>,
    pub timeline: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerifyStatus {
    Idle,
    Verified,
    Tampered,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OnchainFields {
    pub hash: ContentHash,
    pub cid: String,
    pub timestamp: String,
    pub node_id: String,
    pub researcher: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct VerifyView {
    pub status: VerifyStatus,
    pub title: String,
    pub message: String,
    pub hash: Option<ContentHash>,
    pub onchain: Option<OnchainFields>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SiteLinks {
    pub github_url: Option<String>,
    pub docs_url: Option<String>,
    pub contract_address: String,
    pub provider_configured: bool,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TickerItem {
    pub lead: String,
    pub rest: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct DemoModeView {
    pub demo_mode: bool,
    pub label: String,
}
