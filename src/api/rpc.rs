use crate::core::error::ChainError;
use std::future::Future;
use std::time::Duration;
use web3::api::Eth;
use web3::transports::Http;
use web3::types::U256;
use web3::Web3;

/// Web3 handle on one JSON-RPC endpoint
///
/// The chain node and the wallet provider each get one; they only differ in
/// which methods they answer.
#[derive(Clone, Debug)]
pub struct RpcEndpoint {
    web3: Web3<Http>,
    url: String,
    timeout: Duration,
}

impl RpcEndpoint {
    pub fn new(url: &str, timeout: Duration) -> Result<Self, ChainError> {
        let transport = Http::new(url)?;

        Ok(Self {
            web3: Web3::new(transport),
            url: url.to_string(),
            timeout,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.url
    }

    pub fn eth(&self) -> Eth<Http> {
        self.web3.eth()
    }

    pub fn transport(&self) -> &Http {
        self.web3.transport()
    }

    /// Run one request under the endpoint's timeout
    pub async fn timed<T, E>(&self, request: impl Future<Output = Result<T, E>>) -> Result<T, ChainError>
    where
        ChainError: From<E>,
    {
        match tokio::time::timeout(self.timeout, request).await {
            Ok(result) => Ok(result?),
            Err(_) => Err(ChainError::Timeout(self.timeout)),
        }
    }
}

/// Narrow a 256-bit quantity, naming it in the error when it does not fit
pub fn to_u64(value: U256, what: &'static str) -> Result<u64, ChainError> {
    if value > U256::from(u64::MAX) {
        return Err(ChainError::Overflow(what));
    }
    Ok(value.low_u64())
}
