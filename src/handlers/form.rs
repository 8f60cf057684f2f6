use crate::core::error::PageError;
use crate::pages::upload::DataFile;
use axum::extract::Multipart;
use std::collections::HashMap;

/// A multipart body split into its text fields and the `file` part
#[derive(Debug, Default)]
pub struct MultipartForm {
    pub fields: HashMap<String, String>,
    pub file: Option<DataFile>,
}

impl MultipartForm {
    pub async fn read(mut multipart: Multipart) -> Result<Self, PageError> {
        let mut form = Self::default();

        while let Some(field) = multipart
            .next_field()
            .await
            .map_err(|e| PageError::Multipart(e.to_string()))?
        {
            let Some(name) = field.name().map(str::to_string) else {
                continue;
            };

            if name == "file" {
                let file_name = field.file_name().unwrap_or_default().to_string();
                let bytes = field
                    .bytes()
                    .await
                    .map_err(|e| PageError::Multipart(e.to_string()))?;

                // Browsers send an empty part when nothing was picked
                if !file_name.is_empty() || !bytes.is_empty() {
                    form.file = Some(DataFile {
                        name: file_name,
                        bytes: bytes.to_vec(),
                    });
                }
            } else {
                let value = field
                    .text()
                    .await
                    .map_err(|e| PageError::Multipart(e.to_string()))?;
                form.fields.insert(name, value);
            }
        }

        Ok(form)
    }

    /// Text field value, empty when absent
    pub fn text(&self, name: &str) -> String {
        self.fields.get(name).cloned().unwrap_or_default()
    }
}
