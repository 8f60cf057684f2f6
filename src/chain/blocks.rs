use crate::api::rpc::{to_u64, RpcEndpoint};
use crate::core::error::ChainError;
use web3::types::{BlockId, BlockNumber};

/// Number and timestamp of a block header
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BlockHeader {
    pub number: u64,
    /// Seconds since the Unix epoch
    pub timestamp: u64,
}

/// Fetch the head of the chain, without transaction bodies
pub async fn latest_block(chain: &RpcEndpoint) -> Result<BlockHeader, ChainError> {
    let block = chain
        .timed(chain.eth().block(BlockId::Number(BlockNumber::Latest)))
        .await?
        .ok_or_else(|| web3::Error::InvalidResponse("node returned no latest block".to_string()))?;

    Ok(BlockHeader {
        number: block.number.map(|n| n.as_u64()).unwrap_or_default(),
        timestamp: to_u64(block.timestamp, "block timestamp")?,
    })
}
