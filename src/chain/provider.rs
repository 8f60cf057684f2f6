use crate::api::rpc::{to_u64, RpcEndpoint};
use crate::core::error::ChainError;
use crate::models::anchor::Address;
use crate::models::network::NetworkInfo;

/// Wallet that holds the user's keys and signs on their behalf
///
/// Speaks the EIP-1193 request methods over JSON-RPC, so a local signer such
/// as Frame can stand in for a browser extension.
#[derive(Clone, Debug)]
pub struct WalletProvider {
    rpc: RpcEndpoint,
}

impl WalletProvider {
    pub fn new(rpc: RpcEndpoint) -> Self {
        Self { rpc }
    }

    pub fn endpoint(&self) -> &str {
        self.rpc.endpoint()
    }

    /// Endpoint that signs and broadcasts contract writes
    pub fn rpc(&self) -> &RpcEndpoint {
        &self.rpc
    }

    /// Ask the wallet for account access; may prompt the user
    pub async fn request_accounts(&self) -> Result<Vec<Address>, ChainError> {
        let accounts = self.rpc.timed(self.rpc.eth().request_accounts()).await?;
        Ok(accounts.into_iter().map(Address::from).collect())
    }

    /// Accounts currently exposed, without prompting
    pub async fn accounts(&self) -> Result<Vec<Address>, ChainError> {
        let accounts = self.rpc.timed(self.rpc.eth().accounts()).await?;
        Ok(accounts.into_iter().map(Address::from).collect())
    }

    pub async fn network(&self) -> Result<NetworkInfo, ChainError> {
        let chain_id = self.rpc.timed(self.rpc.eth().chain_id()).await?;
        Ok(NetworkInfo::from_chain_id(to_u64(chain_id, "chain id")?))
    }
}
