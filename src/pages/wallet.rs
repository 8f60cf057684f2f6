use crate::chain::contract::{AnchorContract, Signer};
use crate::chain::provider::WalletProvider;
use crate::core::error::{PageError, StorageError, WalletError};
use crate::core::state::AppState;
use crate::models::anchor::Address;
use crate::models::views::{WalletButton, WalletDropdown, WalletView};
use crate::pages::session::AppSession;
use tracing::{info, warn};

pub const CONNECT_LABEL: &str = "Connect Wallet";

/// What a background sync observed at the provider
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WalletChange {
    Unchanged,
    AccountsCleared,
    AccountChanged(String),
    ChainChanged(u64),
}

/// `0x1234…abcd`
pub fn short_address(wallet: &str) -> String {
    let chars: Vec<char> = wallet.chars().collect();
    if chars.len() <= 10 {
        return wallet.to_string();
    }

    let head: String = chars[..6].iter().collect();
    let tail: String = chars[chars.len() - 4..].iter().collect();
    format!("{}…{}", head, tail)
}

pub fn view(session: &AppSession) -> WalletView {
    let Some(wallet) = &session.wallet else {
        return WalletView {
            button: WalletButton {
                label: CONNECT_LABEL.to_string(),
                connected: false,
            },
            dropdown: WalletDropdown {
                hidden: true,
                wallet: None,
                network: None,
                network_ok: false,
            },
            notice: None,
        };
    };

    let network = session
        .network
        .as_ref()
        .map(|net| net.label())
        .unwrap_or_else(|| "Unknown".to_string());

    WalletView {
        button: WalletButton {
            label: short_address(wallet),
            connected: true,
        },
        dropdown: WalletDropdown {
            hidden: !session.dropdown_open,
            wallet: Some(wallet.clone()),
            network: Some(network),
            network_ok: session.network.as_ref().is_some_and(|net| net.is_sepolia()),
        },
        notice: None,
    }
}

fn signed_contract(state: &AppState, provider: &WalletProvider, account: Address) -> AnchorContract {
    AnchorContract::with_signer(
        state.contract_address,
        &state.abi,
        state.chain.clone(),
        Signer {
            provider: provider.clone(),
            account,
        },
    )
}

/// Request account access, then bind the contract to the wallet's signer
pub async fn connect(state: &AppState) -> Result<WalletView, WalletError> {
    let provider = state.provider.as_ref().ok_or(WalletError::NoProvider)?;

    let account = provider
        .request_accounts()
        .await?
        .into_iter()
        .next()
        .ok_or(WalletError::NoAccounts)?;
    let wallet = account.to_string();
    let network = provider.network().await?;

    state.wallet_cache.set(&wallet)?;

    info!(
        wallet = %wallet,
        chain_id = network.chain_id,
        network = %network.label(),
        "Wallet connected"
    );

    let mut session = state.session.lock().await;
    session.contract = Some(signed_contract(state, provider, account));
    session.watched_chain = Some(network.chain_id);
    session.network = Some(network);
    session.wallet = Some(wallet);
    session.dropdown_open = true;

    Ok(view(&session))
}

pub async fn disconnect(state: &AppState) -> Result<WalletView, StorageError> {
    state.wallet_cache.clear()?;

    let mut session = state.session.lock().await;
    session.clear_wallet();

    info!("Wallet disconnected");
    Ok(view(&session))
}

/// Header button: toggle the dropdown when connected, otherwise connect
pub async fn button_click(state: &AppState) -> WalletView {
    if state.provider.is_none() {
        let mut view = view(&*state.session.lock().await);
        view.notice = Some(PageError::NoWalletProvider.to_string());
        return view;
    }

    {
        let mut session = state.session.lock().await;
        if session.wallet.is_some() {
            session.dropdown_open = !session.dropdown_open;
            return view(&session);
        }
    }

    match connect(state).await {
        Ok(view) => view,
        Err(e) => {
            warn!(error = %e, "Wallet connection failed");
            let mut view = view(&*state.session.lock().await);
            view.notice = Some(e.to_string());
            view
        }
    }
}

/// Put the session-scope wallet back into the session, as a fresh page load does
///
/// Only the address comes back; signing needs a new connect.
pub async fn restore(state: &AppState) -> Result<Option<String>, StorageError> {
    let wallet = state.wallet_cache.get()?;

    if let Some(wallet) = &wallet {
        let mut session = state.session.lock().await;
        session.wallet = Some(wallet.clone());
        session.dropdown_open = true;
    }

    Ok(wallet)
}

/// Compare the provider's chain and accounts with the session and resync
///
/// Runs once a connect has happened in this process. A chain change reloads
/// the session and keeps watching the new chain. Account changes only apply
/// while a wallet is shown, so an in-app disconnect sticks.
pub async fn sync_once(state: &AppState) -> Result<WalletChange, WalletError> {
    let Some(provider) = &state.provider else {
        return Ok(WalletChange::Unchanged);
    };

    let (wallet, watched_chain) = {
        let session = state.session.lock().await;
        match session.watched_chain {
            Some(chain_id) => (session.wallet.clone(), chain_id),
            None => return Ok(WalletChange::Unchanged),
        }
    };

    let network = provider.network().await?;
    if network.chain_id != watched_chain {
        {
            let mut session = state.session.lock().await;
            session.reload();
            session.watched_chain = Some(network.chain_id);
        }
        let wallet = restore(state).await?;

        info!(
            from = watched_chain,
            to = network.chain_id,
            wallet = ?wallet,
            "Chain changed, session reloaded"
        );
        return Ok(WalletChange::ChainChanged(network.chain_id));
    }

    let Some(wallet) = wallet else {
        return Ok(WalletChange::Unchanged);
    };

    match provider.accounts().await?.into_iter().next() {
        None => {
            state.wallet_cache.clear()?;

            let mut session = state.session.lock().await;
            session.wallet = None;
            session.contract = None;
            session.dropdown_open = false;

            info!("Wallet reported no accounts, cleared");
            Ok(WalletChange::AccountsCleared)
        }
        Some(account) if account.to_string().eq_ignore_ascii_case(&wallet) => Ok(WalletChange::Unchanged),
        Some(account) => {
            let wallet = account.to_string();
            state.wallet_cache.set(&wallet)?;

            let mut session = state.session.lock().await;
            session.contract = Some(signed_contract(state, provider, account));
            session.wallet = Some(wallet.clone());

            info!(wallet = %wallet, "Wallet account changed");
            Ok(WalletChange::AccountChanged(wallet))
        }
    }
}
