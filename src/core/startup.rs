use std::time::Duration;
use tracing::{debug, info, warn};

use crate::core::state::AppState;
use crate::pages::wallet::{self, WalletChange};

/// Log whether a wallet provider is configured and answering
pub async fn probe_wallet_provider(state: &AppState) {
    let Some(provider) = &state.provider else {
        warn!("No wallet provider configured; wallet connect and uploads are disabled");
        return;
    };

    match provider.network().await {
        Ok(network) => info!(
            endpoint = %provider.endpoint(),
            chain_id = network.chain_id,
            network = %network.label(),
            "Wallet provider reachable"
        ),
        Err(e) => warn!(
            endpoint = %provider.endpoint(),
            error = %e,
            "Wallet provider configured but not reachable"
        ),
    }
}

/// Spawn a background task that polls the wallet for account and chain changes
pub fn spawn_wallet_watcher(state: AppState, poll_interval: u64) {
    if state.provider.is_none() {
        return;
    }

    tokio::spawn(async move {
        let mut interval = tokio::time::interval(Duration::from_secs(poll_interval));

        loop {
            interval.tick().await;

            match wallet::sync_once(&state).await {
                Ok(WalletChange::Unchanged) => debug!("Wallet sync, no change"),
                Ok(change) => info!(change = ?change, "Wallet state resynchronized"),
                Err(e) => debug!(error = %e, "Wallet sync failed"),
            }
        }
    });
}
