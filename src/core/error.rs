// Centralized error handling for the ledger service

use crate::models::views::ErrorResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use std::time::Duration;
use thiserror::Error;
use web3::types::H256;

/// Errors returned to the page routes
#[derive(Error, Debug)]
pub enum PageError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    #[error("Invalid form data: {0}")]
    Multipart(String),

    #[error("MetaMask not detected. Please install it to continue.")]
    NoWalletProvider,

    #[error("Connect your wallet first.")]
    WalletNotConnected,

    #[error("{0}")]
    MissingInput(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Storage failure: {0}")]
    Storage(#[from] StorageError),

    #[error("Internal server error: {0}")]
    InternalError(#[from] anyhow::Error),
}

impl IntoResponse for PageError {
    fn into_response(self) -> Response {
        let status = match &self {
            PageError::InvalidParameter(_) => StatusCode::BAD_REQUEST,
            PageError::Multipart(_) => StatusCode::BAD_REQUEST,
            PageError::NoWalletProvider => StatusCode::SERVICE_UNAVAILABLE,
            PageError::WalletNotConnected => StatusCode::PRECONDITION_FAILED,
            PageError::MissingInput(_) => StatusCode::BAD_REQUEST,
            PageError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            PageError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
            PageError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (
            status,
            Json(ErrorResponse {
                success: false,
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}

#[derive(Error, Debug)]
pub enum ValidationError {
    #[error("Invalid file type. Use CSV, JSON, TXT, TSV, LOG, or XML.")]
    InvalidFileType,
}

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("I/O: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serde: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Storage lock poisoned")]
    Poisoned,
}

/// Failures talking to the chain node or the wallet provider
#[derive(Error, Debug)]
pub enum ChainError {
    #[error("Web3: {0}")]
    Web3(#[from] web3::Error),

    #[error("Contract: {0}")]
    Contract(#[from] web3::contract::Error),

    #[error("Request timed out after {0:?}")]
    Timeout(Duration),

    #[error("{0} does not fit in 64 bits")]
    Overflow(&'static str),

    #[error("Transaction {0:?} reverted")]
    Reverted(H256),

    #[error("Contract handle is read-only")]
    NoSigner,
}

#[derive(Error, Debug)]
pub enum PinError {
    #[error("Reqwest: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("Pinning service returned status {0}")]
    Status(u16),

    #[error("Serde: {0}")]
    Serde(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum WalletError {
    #[error("No wallet provider configured")]
    NoProvider,

    #[error("Wallet returned no accounts")]
    NoAccounts,

    #[error(transparent)]
    Chain(#[from] ChainError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}
