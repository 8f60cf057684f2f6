use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::handlers::form::MultipartForm;
use crate::models::anchor::ContentHash;
use crate::models::views::VerifyView;
use crate::pages::verify::{self, SELECT_FILE_TO_HASH};
use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::sync::Arc;

/// POST /verify/preview (multipart, `file`)
pub async fn verify_preview_handler(multipart: Multipart) -> Result<Json<VerifyView>, PageError> {
    let form = MultipartForm::read(multipart).await?;
    let file = form.file.ok_or(PageError::MissingInput(SELECT_FILE_TO_HASH))?;

    Ok(Json(verify::preview(&file.bytes)))
}

/// Compare a file, or a hash computed earlier, with the on-chain record
///
/// POST /verify (multipart, `file` or `hash`)
pub async fn verify_submit_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<VerifyView>, PageError> {
    let form = MultipartForm::read(multipart).await?;

    let hash = match &form.file {
        Some(file) => ContentHash::of(&file.bytes),
        None => form
            .text("hash")
            .parse()
            .map_err(|_| PageError::MissingInput(SELECT_FILE_TO_HASH))?,
    };

    Ok(Json(verify::verify(&state, hash).await))
}
