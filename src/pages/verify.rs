use crate::chain::contract::AnchorContract;
use crate::core::state::AppState;
use crate::models::anchor::ContentHash;
use crate::models::views::{OnchainFields, VerifyStatus, VerifyView};
use crate::utils::time::format_chain_timestamp;
use tracing::{error, info};

pub const SELECT_FILE_TO_HASH: &str = "Select a file first so we can hash it.";

fn verify_view(status: VerifyStatus, title: &str, message: &str, hash: Option<ContentHash>) -> VerifyView {
    VerifyView {
        status,
        title: title.to_string(),
        message: message.to_string(),
        hash,
        onchain: None,
    }
}

/// Hash a selected file and wait for the user to ask for verification
pub fn preview(bytes: &[u8]) -> VerifyView {
    verify_view(
        VerifyStatus::Idle,
        "Ready to verify",
        "Click verify to compare with the on‑chain record.",
        Some(ContentHash::of(bytes)),
    )
}

/// Session contract when present, otherwise a read-only one kept for next time
async fn contract(state: &AppState) -> AnchorContract {
    let mut session = state.session.lock().await;

    session
        .contract
        .get_or_insert_with(|| AnchorContract::read_only(state.contract_address, &state.abi, state.chain.clone()))
        .clone()
}

/// Look the hash up on the contract and render the tri-state result
pub async fn verify(state: &AppState, hash: ContentHash) -> VerifyView {
    let contract = contract(state).await;

    match contract.verify_hash(&hash).await {
        Ok(record) if !record.exists => {
            info!(hash = %hash, "No on-chain record");
            verify_view(
                VerifyStatus::Tampered,
                "No On‑Chain Record",
                "This hash was not found on the contract. It may never have been anchored.",
                Some(hash),
            )
        }
        Ok(record) => {
            info!(hash = %hash, node_id = %record.node_id, "Hash verified");
            VerifyView {
                onchain: Some(OnchainFields {
                    hash,
                    cid: record.cid,
                    timestamp: format_chain_timestamp(record.timestamp),
                    node_id: record.node_id,
                    researcher: record.researcher.to_string(),
                }),
                ..verify_view(
                    VerifyStatus::Verified,
                    "Data Verified",
                    "The locally computed hash matches the on‑chain record. Integrity holds.",
                    Some(hash),
                )
            }
        }
        Err(e) => {
            error!(error = %e, hash = %hash, "Contract read failed");
            verify_view(
                VerifyStatus::Tampered,
                "Verification Error",
                "Unable to read from the contract. Check network, address, or ABI.",
                Some(hash),
            )
        }
    }
}
