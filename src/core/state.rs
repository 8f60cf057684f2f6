// Application state (AppState)

use crate::api::{pinning::PinningClient, rpc::RpcEndpoint};
use crate::chain::contract::anchor_abi;
use crate::chain::provider::WalletProvider;
use crate::core::config::Config;
use crate::models::anchor::Address;
use crate::pages::session::AppSession;
use crate::stores::{
    activity_feed::ActivityFeed, session_store::SessionStore, storage::LocalStorage,
    user_store::UserStore, wallet_cache::WalletCache,
};
use anyhow::{Context, Result};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::Mutex;
use web3::ethabi;

/// Shared application state
///
/// Contains everything the page routes touch. The application session is the
/// one piece of mutable page state and sits behind an async mutex.
#[derive(Clone)]
pub struct AppState {
    /// Local user accounts (persistent scope)
    pub users: UserStore,

    /// Signed-in session record (either scope)
    pub sessions: SessionStore,

    /// Connected wallet address (session scope)
    pub wallet_cache: WalletCache,

    /// Chain node for reads and receipts
    pub chain: RpcEndpoint,

    /// Wallet provider, absent when none is configured
    pub provider: Option<WalletProvider>,

    pub pinning: Arc<PinningClient>,

    pub session: Arc<Mutex<AppSession>>,

    pub activity: Arc<ActivityFeed>,

    pub contract_address: Address,

    /// Parsed anchor contract ABI
    pub abi: ethabi::Contract,

    /// Configuration
    pub config: Arc<Config>,
}

impl AppState {
    pub fn new(config: Config, storage: LocalStorage) -> Result<Self> {
        let timeout = Duration::from_secs(config.chain.request_timeout);
        let contract_address = config.contract_address()?;

        let chain = RpcEndpoint::new(&config.chain.rpc_url, timeout)
            .context("Failed to create chain RPC client")?;

        let provider = match &config.wallet.provider_url {
            Some(url) => {
                let rpc = RpcEndpoint::new(url, timeout)
                    .context("Failed to create wallet provider client")?;
                Some(WalletProvider::new(rpc))
            }
            None => None,
        };

        let pinning = PinningClient::new(config.pinning.clone(), timeout)
            .context("Failed to create pinning client")?;

        let activity = ActivityFeed::seeded(config.links.explorer_tx_base.clone());

        Ok(Self {
            users: UserStore::new(storage.clone()),
            sessions: SessionStore::new(storage.clone()),
            wallet_cache: WalletCache::new(storage),
            chain,
            provider,
            pinning: Arc::new(pinning),
            session: Arc::new(Mutex::new(AppSession::default())),
            activity: Arc::new(activity),
            contract_address,
            abi: anchor_abi().context("Failed to parse anchor contract ABI")?,
            config: Arc::new(config),
        })
    }
}
