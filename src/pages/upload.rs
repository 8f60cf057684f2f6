use crate::api::pinning::PinMetadata;
use crate::core::error::{PageError, ValidationError};
use crate::core::state::AppState;
use crate::models::anchor::ContentHash;
use crate::models::views::{UploadPreview, UploadReport};
use crate::validation::params::validate_data_file_name;
use std::time::Duration;
use tracing::{error, info, warn};

pub const STEP_FILE_LOADED: &str = "File loaded – computing SHA‑256 locally…";
pub const STEP_HASHED: &str = "Hash computed. Uploading to IPFS…";
pub const STEP_PINNED: &str = "IPFS pinned. Estimating gas…";
pub const STEP_SENDING: &str = "Sending transaction to smart contract…";
pub const STEP_WAITING: &str = "Waiting for confirmations…";
pub const STEP_FAILED: &str = "Transaction failed or was rejected.";

pub const SELECT_FILE: &str = "Select a file first.";
pub const UNNAMED_NODE: &str = "Unnamed Node";
/// CID recorded when the pinning service fails
pub const FALLBACK_CID: &str = "demo-cid";

/// An uploaded file: client-side name and raw bytes
#[derive(Debug, Clone)]
pub struct DataFile {
    pub name: String,
    pub bytes: Vec<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct UploadForm {
    pub node_name: String,
    pub data_type: String,
    pub description: String,
    pub file: Option<DataFile>,
}

/// Check the file type and show its hash before anything leaves the machine
pub fn preview(file: &DataFile) -> Result<UploadPreview, ValidationError> {
    validate_data_file_name(&file.name)?;

    Ok(UploadPreview {
        hash: ContentHash::of(&file.bytes),
        timeline: vec![STEP_FILE_LOADED.to_string(), STEP_HASHED.to_string()],
    })
}

/// Hash, pin and anchor a data file
///
/// Pinning and gas estimation failures are logged and the flow carries on.
/// A failed or reverted transaction ends the timeline with
/// [`STEP_FAILED`] and an unsuccessful report rather than an error.
pub async fn submit(state: &AppState, form: UploadForm) -> Result<UploadReport, PageError> {
    let contract = state
        .session
        .lock()
        .await
        .contract
        .clone()
        .filter(|contract| contract.signer().is_some())
        .ok_or(PageError::WalletNotConnected)?;

    let file = form.file.ok_or(PageError::MissingInput(SELECT_FILE))?;
    validate_data_file_name(&file.name)?;

    let node_id = match form.node_name.trim() {
        "" => UNNAMED_NODE.to_string(),
        name => name.to_string(),
    };
    let data_type = form.data_type;

    let mut report = UploadReport::default();
    report.timeline.push(STEP_FILE_LOADED.to_string());
    let hash = ContentHash::of(&file.bytes);
    report.hash = Some(hash);
    report.timeline.push(STEP_HASHED.to_string());

    report
        .timeline
        .push(format!("Uploading {} data for {} to IPFS…", data_type, node_id));

    let meta = PinMetadata {
        node_id: node_id.clone(),
        data_type: data_type.clone(),
        description: form.description.trim().to_string(),
    };
    let size = file.bytes.len();
    let cid = match state.pinning.pin_file(&file.name, file.bytes, &meta).await {
        Ok(cid) => cid,
        Err(e) => {
            warn!(error = %e, file_name = %file.name, "Pinning failed, using demo CID");
            FALLBACK_CID.to_string()
        }
    };
    report.cid = Some(cid.clone());
    report.timeline.push(STEP_PINNED.to_string());

    match contract.estimate_submit(&hash, &cid, &node_id).await {
        Ok(gas) => report.gas_estimate = Some(gas.to_string()),
        Err(e) => warn!(error = %e, "Gas estimation failed"),
    }

    report.timeline.push(STEP_SENDING.to_string());
    let tx = match contract.submit(&hash, &cid, &node_id).await {
        Ok(tx) => tx,
        Err(e) => {
            error!(error = %e, hash = %hash, "Anchor transaction was not sent");
            report.timeline.push(STEP_FAILED.to_string());
            return Ok(report);
        }
    };
    let tx_hash = format!("{:?}", tx);
    report.explorer_url = Some(format!("{}{}", state.config.links.explorer_tx_base, tx_hash));
    report.tx_hash = Some(tx_hash.clone());

    report.timeline.push(STEP_WAITING.to_string());
    let poll_interval = Duration::from_millis(state.config.chain.receipt_poll_interval);

    match contract
        .wait_for_receipt(tx, state.config.chain.confirmations, poll_interval)
        .await
    {
        Ok(block) => {
            report.timeline.push(format!("Anchored in block {}.", block));
            report.block_number = Some(block);
            report.success = true;

            state.activity.push(
                &format!("Node {} anchored {} dataset.", node_id, data_type),
                Some(&tx_hash),
            );

            info!(
                hash = %hash,
                cid = %cid,
                node_id = %node_id,
                size,
                tx_hash = %tx_hash,
                block,
                "Dataset anchored"
            );
        }
        Err(e) => {
            error!(error = %e, tx_hash = %tx_hash, "Anchor transaction failed");
            report.timeline.push(STEP_FAILED.to_string());
        }
    }

    Ok(report)
}
