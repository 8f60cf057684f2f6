use crate::core::error::PageError;
use crate::core::state::AppState;
use crate::handlers::form::MultipartForm;
use crate::models::views::{UploadPreview, UploadReport};
use crate::pages::upload::{self, UploadForm, SELECT_FILE};
use axum::{
    extract::{Multipart, State},
    response::Json,
};
use std::sync::Arc;

/// Used when the form leaves the data type selector out
const DEFAULT_DATA_TYPE: &str = "generic";

/// Hash a selected file without sending anything out
///
/// POST /upload/preview (multipart, `file`)
pub async fn upload_preview_handler(multipart: Multipart) -> Result<Json<UploadPreview>, PageError> {
    let form = MultipartForm::read(multipart).await?;
    let file = form.file.ok_or(PageError::MissingInput(SELECT_FILE))?;

    Ok(Json(upload::preview(&file)?))
}

/// Pin and anchor a data file
///
/// POST /upload (multipart, `file`, `node_name`, `data_type`, `description`)
pub async fn upload_submit_handler(
    State(state): State<Arc<AppState>>,
    multipart: Multipart,
) -> Result<Json<UploadReport>, PageError> {
    let mut form = MultipartForm::read(multipart).await?;

    let data_type = match form.text("data_type").trim() {
        "" => DEFAULT_DATA_TYPE.to_string(),
        data_type => data_type.to_string(),
    };

    let upload = UploadForm {
        node_name: form.text("node_name"),
        data_type,
        description: form.text("description"),
        file: form.file.take(),
    };

    Ok(Json(upload::submit(&state, upload).await?))
}
