use crate::chain::contract::AnchorContract;
use crate::models::network::NetworkInfo;

/// Per-process page state: what a browser tab would keep between clicks
#[derive(Clone, Default)]
pub struct AppSession {
    pub wallet: Option<String>,
    /// Network reported at the last connect; `None` until connected since the last reload
    pub network: Option<NetworkInfo>,
    /// Chain the wallet watcher compares against; set at connect and kept across reloads
    pub watched_chain: Option<u64>,
    /// Signer-bound after a connect, read-only when built for verification
    pub contract: Option<AnchorContract>,
    pub dropdown_open: bool,
    pub demo_mode: bool,
}

impl AppSession {
    /// True when a contract handle with a signer is available for writes
    pub fn can_sign(&self) -> bool {
        self.contract
            .as_ref()
            .is_some_and(|contract| contract.signer().is_some())
    }

    /// Drop everything a page reload loses: wallet, network, signer and contract
    ///
    /// The watched chain and the demo-mode flag stay. The wallet comes back
    /// from the session-scope cache afterwards.
    pub fn reload(&mut self) {
        self.clear_wallet();
    }

    pub fn clear_wallet(&mut self) {
        self.wallet = None;
        self.network = None;
        self.contract = None;
        self.dropdown_open = false;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reload_keeps_watch_and_demo_mode() {
        let mut session = AppSession {
            wallet: Some("0xabc".to_string()),
            network: Some(NetworkInfo::from_chain_id(1)),
            watched_chain: Some(1),
            dropdown_open: true,
            demo_mode: true,
            ..Default::default()
        };

        session.reload();
        assert!(session.wallet.is_none());
        assert!(session.network.is_none());
        assert!(!session.dropdown_open);
        assert_eq!(session.watched_chain, Some(1));
        assert!(session.demo_mode);
        assert!(!session.can_sign());
    }

    #[test]
    fn test_clear_wallet() {
        let mut session = AppSession {
            wallet: Some("0xabc".to_string()),
            dropdown_open: true,
            ..Default::default()
        };

        session.clear_wallet();
        assert!(session.wallet.is_none());
        assert!(!session.dropdown_open);
    }
}
