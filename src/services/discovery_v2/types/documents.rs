//! Document ingestion, training data and document analysis.

use super::DeletionStatus;
use super::query::Notice;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;
use watson_core::FileWithMetadata;

/// Optional parts of `add_document` and `update_document`.
#[derive(Debug, Clone, Default)]
pub struct AddDocumentOptions {
    /// The document. JSON, HTML, PDF, Word and plain text are accepted.
    pub file: Option<FileWithMetadata>,
    /// JSON object of metadata fields, sent as given.
    pub metadata: Option<String>,
    /// Sent as `X-Watson-Discovery-Force`. Makes the call synchronous for
    /// the purpose of overwriting.
    pub force: Option<bool>,
}

impl AddDocumentOptions {
    pub fn with_file(file: FileWithMetadata) -> Self {
        Self {
            file: Some(file),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DocumentStatus {
    Processing,
    Pending,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentAccepted {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DocumentStatus>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteDocumentResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub document_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<DeletionStatus>,
}

// ---------------------------------------------------------------------------
// Training data
// ---------------------------------------------------------------------------

/// A document judged for relevance against a training query.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingExample {
    pub document_id: String,
    pub collection_id: String,
    /// Relevance, from 0 (not relevant) upwards.
    pub relevance: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

impl TrainingExample {
    pub fn new(
        document_id: impl Into<String>,
        collection_id: impl Into<String>,
        relevance: i64,
    ) -> Self {
        Self {
            document_id: document_id.into(),
            collection_id: collection_id.into(),
            relevance,
            created: None,
            updated: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query_id: Option<String>,
    pub natural_language_query: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    pub examples: Vec<TrainingExample>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingQuerySet {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub queries: Option<Vec<TrainingQuery>>,
}

/// Body of `create_training_query` and `update_training_query`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateTrainingQuery {
    pub natural_language_query: String,
    pub examples: Vec<TrainingExample>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filter: Option<String>,
}

impl CreateTrainingQuery {
    pub fn new(natural_language_query: impl Into<String>, examples: Vec<TrainingExample>) -> Self {
        Self {
            natural_language_query: natural_language_query.into(),
            examples,
            filter: None,
        }
    }

    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = Some(filter.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedResult {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
    /// Enrichment output, keyed by field.
    #[serde(flatten)]
    pub additional_properties: HashMap<String, Value>,
}

/// Output of `analyze_document`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzedDocument {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notices: Option<Vec<Notice>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<AnalyzedResult>,
}
