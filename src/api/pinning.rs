use crate::core::config::PinningConfig;
use crate::core::error::PinError;
use reqwest::multipart::{Form, Part};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{info, warn};

/// Returned when pinning is not configured or the service omits the CID
pub const PLACEHOLDER_CID: &str = "bafy-demo-placeholder";

/// Client for a Pinata-style `pinFileToIPFS` endpoint
pub struct PinningClient {
    client: reqwest::Client,
    config: PinningConfig,
}

/// Descriptive fields stored next to the pinned file
#[derive(Debug, Clone, Default)]
pub struct PinMetadata {
    pub node_id: String,
    pub data_type: String,
    pub description: String,
}

#[derive(Debug, Serialize)]
struct PinataMetadata<'a> {
    name: &'a str,
    keyvalues: PinataKeyValues<'a>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct PinataKeyValues<'a> {
    data_type: &'a str,
    description: &'a str,
}

#[derive(Debug, Deserialize)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: Option<String>,
    #[serde(rename = "Hash")]
    hash: Option<String>,
}

impl PinMetadata {
    fn to_json(&self) -> Result<String, PinError> {
        let name = if self.node_id.is_empty() {
            "DeScienceDataset"
        } else {
            &self.node_id
        };

        Ok(serde_json::to_string(&PinataMetadata {
            name,
            keyvalues: PinataKeyValues {
                data_type: &self.data_type,
                description: &self.description,
            },
        })?)
    }
}

impl PinningClient {
    pub fn new(config: PinningConfig, timeout: Duration) -> Result<Self, PinError> {
        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self { client, config })
    }

    /// Pin a file and return its content identifier
    pub async fn pin_file(
        &self,
        file_name: &str,
        bytes: Vec<u8>,
        meta: &PinMetadata,
    ) -> Result<String, PinError> {
        let Some((endpoint, jwt)) = self.config.credentials() else {
            warn!("Pinning config missing, returning placeholder CID");
            return Ok(PLACEHOLDER_CID.to_string());
        };

        let form = Form::new()
            .part("file", Part::bytes(bytes).file_name(file_name.to_string()))
            .text("pinataMetadata", meta.to_json()?);

        let response = self
            .client
            .post(endpoint)
            .bearer_auth(jwt)
            .multipart(form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(PinError::Status(response.status().as_u16()));
        }

        let body: PinResponse = response.json().await?;
        let cid = body
            .ipfs_hash
            .or(body.hash)
            .unwrap_or_else(|| PLACEHOLDER_CID.to_string());

        info!(cid = %cid, file_name = %file_name, "File pinned");

        Ok(cid)
    }
}
