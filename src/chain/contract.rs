use crate::api::rpc::{to_u64, RpcEndpoint};
use crate::chain::provider::WalletProvider;
use crate::core::error::ChainError;
use crate::models::anchor::{Address, AnchorRecord, ContentHash};
use std::time::Duration;
use web3::confirm::wait_for_transaction_confirmation;
use web3::contract::{Contract, Options};
use web3::ethabi;
use web3::transports::Http;
use web3::types::{H160, H256, U256, U64};

/// ABI of the deployed anchor contract, limited to the functions used here
pub const ANCHOR_ABI: &str = r#"[
  {
    "type": "function",
    "name": "submitData",
    "stateMutability": "nonpayable",
    "inputs": [
      {"name": "hash", "type": "bytes32"},
      {"name": "cid", "type": "string"},
      {"name": "nodeId", "type": "string"}
    ],
    "outputs": []
  },
  {
    "type": "function",
    "name": "verifyHash",
    "stateMutability": "view",
    "inputs": [{"name": "hash", "type": "bytes32"}],
    "outputs": [
      {"name": "exists", "type": "bool"},
      {"name": "researcher", "type": "address"},
      {"name": "timestamp", "type": "uint256"},
      {"name": "cid", "type": "string"},
      {"name": "nodeId", "type": "string"}
    ]
  },
  {
    "type": "function",
    "name": "getData",
    "stateMutability": "view",
    "inputs": [{"name": "hash", "type": "bytes32"}],
    "outputs": [
      {"name": "researcher", "type": "address"},
      {"name": "timestamp", "type": "uint256"},
      {"name": "cid", "type": "string"},
      {"name": "nodeId", "type": "string"}
    ]
  }
]"#;

/// Parse [`ANCHOR_ABI`]
pub fn anchor_abi() -> Result<ethabi::Contract, ethabi::Error> {
    ethabi::Contract::load(ANCHOR_ABI.as_bytes())
}

/// The wallet account that signs contract writes
#[derive(Clone, Debug)]
pub struct Signer {
    pub provider: WalletProvider,
    pub account: Address,
}

#[derive(Clone)]
struct Writer {
    contract: Contract<Http>,
    signer: Signer,
}

/// Handle to the deployed anchor contract
///
/// Reads go through the chain node. Writes go through the wallet provider
/// and need a [`Signer`]; a handle built without one is read-only.
#[derive(Clone)]
pub struct AnchorContract {
    reader: Contract<Http>,
    chain: RpcEndpoint,
    writer: Option<Writer>,
}

type SubmitParams = (H256, String, String);

fn submit_params(hash: &ContentHash, cid: &str, node_id: &str) -> SubmitParams {
    (H256::from(*hash), cid.to_string(), node_id.to_string())
}

impl AnchorContract {
    pub fn read_only(address: Address, abi: &ethabi::Contract, chain: RpcEndpoint) -> Self {
        Self {
            reader: Contract::new(chain.eth(), address.into(), abi.clone()),
            chain,
            writer: None,
        }
    }

    pub fn with_signer(address: Address, abi: &ethabi::Contract, chain: RpcEndpoint, signer: Signer) -> Self {
        let writer = Writer {
            contract: Contract::new(signer.provider.rpc().eth(), address.into(), abi.clone()),
            signer,
        };

        Self {
            writer: Some(writer),
            ..Self::read_only(address, abi, chain)
        }
    }

    pub fn signer(&self) -> Option<&Signer> {
        self.writer.as_ref().map(|writer| &writer.signer)
    }

    fn writer(&self) -> Result<&Writer, ChainError> {
        self.writer.as_ref().ok_or(ChainError::NoSigner)
    }

    /// `verifyHash(bytes32) -> (bool, address, uint256, string, string)`
    pub async fn verify_hash(&self, hash: &ContentHash) -> Result<AnchorRecord, ChainError> {
        let (exists, researcher, timestamp, cid, node_id): (bool, H160, U256, String, String) = self
            .chain
            .timed(self.reader.query(
                "verifyHash",
                (H256::from(*hash),),
                None,
                Options::default(),
                None,
            ))
            .await?;

        Ok(AnchorRecord {
            exists,
            researcher: researcher.into(),
            timestamp: to_u64(timestamp, "timestamp")?,
            cid,
            node_id,
        })
    }

    pub async fn estimate_submit(&self, hash: &ContentHash, cid: &str, node_id: &str) -> Result<u64, ChainError> {
        let writer = self.writer()?;
        let rpc = writer.signer.provider.rpc();

        let gas = rpc
            .timed(writer.contract.estimate_gas(
                "submitData",
                submit_params(hash, cid, node_id),
                writer.signer.account.into(),
                Options::default(),
            ))
            .await?;

        to_u64(gas, "gas estimate")
    }

    /// Send `submitData(hash, cid, nodeId)` through the wallet; returns the transaction hash
    pub async fn submit(&self, hash: &ContentHash, cid: &str, node_id: &str) -> Result<H256, ChainError> {
        let writer = self.writer()?;
        let rpc = writer.signer.provider.rpc();

        rpc.timed(writer.contract.call(
            "submitData",
            submit_params(hash, cid, node_id),
            writer.signer.account.into(),
            Options::default(),
        ))
        .await
    }

    /// Wait until `confirmations` blocks sit on top of the one that mined
    /// `tx_hash`, then return that block's number
    pub async fn wait_for_receipt(
        &self,
        tx_hash: H256,
        confirmations: u64,
        poll_interval: Duration,
    ) -> Result<u64, ChainError> {
        // Zero confirmations makes web3 read the receipt once without waiting
        let confirmations = usize::try_from(confirmations.max(1)).unwrap_or(usize::MAX);

        let receipt = wait_for_transaction_confirmation(
            self.chain.transport().clone(),
            tx_hash,
            poll_interval,
            confirmations,
        )
        .await?;

        if receipt.status == Some(U64::zero()) {
            return Err(ChainError::Reverted(tx_hash));
        }

        match receipt.block_number {
            Some(block) => Ok(block.as_u64()),
            None => Err(ChainError::Web3(web3::Error::InvalidResponse(format!(
                "receipt for {:?} has no block number",
                tx_hash
            )))),
        }
    }
}
