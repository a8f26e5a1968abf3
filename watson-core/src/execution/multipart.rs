//! `multipart/form-data` bodies.
//!
//! [`MultipartFormData`] collects named parts and turns them into a
//! [`reqwest::multipart::Form`] when the request is built. Parts keep their
//! insertion order, and repeated names produce repeated parts.

use crate::error::WatsonError;
use crate::types::FileWithMetadata;
use bytes::Bytes;
use reqwest::multipart::{Form, Part};
use serde::Serialize;

#[derive(Debug, Clone)]
struct FormPart {
    name: String,
    filename: Option<String>,
    content_type: Option<String>,
    data: Bytes,
}

/// A `multipart/form-data` body under construction.
#[derive(Debug, Clone, Default)]
pub struct MultipartFormData {
    parts: Vec<FormPart>,
}

impl MultipartFormData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Names of the parts in wire order.
    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|p| p.name.as_str())
    }

    /// Plain form field without a content type.
    pub fn append_text(&mut self, name: &str, value: impl Into<String>) -> &mut Self {
        let value: String = value.into();
        self.push(name, None, None, Bytes::from(value))
    }

    /// Form field carrying a JSON document.
    pub fn append_json<T: Serialize + ?Sized>(
        &mut self,
        name: &str,
        value: &T,
    ) -> Result<&mut Self, WatsonError> {
        let data = serde_json::to_vec(value).map_err(|e| {
            WatsonError::Serialization(format!("multipart part '{name}': {e}"))
        })?;
        Ok(self.push(
            name,
            None,
            Some("application/json".to_string()),
            Bytes::from(data),
        ))
    }

    pub fn append_bytes(
        &mut self,
        name: &str,
        data: impl Into<Bytes>,
        filename: Option<&str>,
        content_type: Option<&str>,
    ) -> &mut Self {
        self.push(
            name,
            filename.map(str::to_string),
            content_type.map(str::to_string),
            data.into(),
        )
    }

    /// File part. The content type is guessed when the file does not carry one.
    pub fn append_file(&mut self, name: &str, file: &FileWithMetadata) -> &mut Self {
        self.push(
            name,
            Some(file.filename.clone()),
            Some(file.resolved_content_type()),
            file.data.clone(),
        )
    }

    /// Build the reqwest form. Fails when a part carries an unparsable
    /// content type.
    pub fn into_form(self) -> Result<Form, WatsonError> {
        let mut form = Form::new();
        for part in self.parts {
            let mut wire = Part::bytes(part.data.to_vec());
            if let Some(filename) = part.filename {
                wire = wire.file_name(filename);
            }
            if let Some(content_type) = part.content_type {
                wire = wire.mime_str(&content_type).map_err(|e| {
                    WatsonError::ConfigurationError(format!(
                        "Invalid content type '{content_type}' for multipart part '{}': {e}",
                        part.name
                    ))
                })?;
            }
            form = form.part(part.name, wire);
        }
        Ok(form)
    }

    fn push(
        &mut self,
        name: &str,
        filename: Option<String>,
        content_type: Option<String>,
        data: Bytes,
    ) -> &mut Self {
        self.parts.push(FormPart {
            name: name.to_string(),
            filename,
            content_type,
            data,
        });
        self
    }
}
