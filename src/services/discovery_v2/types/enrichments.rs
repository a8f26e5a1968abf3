//! Enrichment models.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrichmentType {
    PartOfSpeech,
    Sentiment,
    NaturalLanguageUnderstanding,
    Dictionary,
    RegularExpression,
    UimaAnnotator,
    RuleBased,
    WatsonKnowledgeStudioModel,
    Classifier,
}

/// Type-specific enrichment settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EnrichmentOptions {
    /// Languages the enrichment applies to. `dictionary` enrichments only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub languages: Option<Vec<String>>,
    /// Entity type the matches are tagged with.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entity_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub regular_expression: Option<String>,
    /// Output field of a `rule_based` enrichment.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result_field: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub enrichment_type: Option<EnrichmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnrichmentOptions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enrichments {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enrichments: Option<Vec<Enrichment>>,
}

/// Definition part of `create_enrichment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CreateEnrichment {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub enrichment_type: Option<EnrichmentType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<EnrichmentOptions>,
}

impl CreateEnrichment {
    pub fn new(name: impl Into<String>, enrichment_type: EnrichmentType) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
            enrichment_type: Some(enrichment_type),
            options: None,
        }
    }

    pub fn with_options(mut self, options: EnrichmentOptions) -> Self {
        self.options = Some(options);
        self
    }
}

/// Body of `update_enrichment`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateEnrichment {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl UpdateEnrichment {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: None,
        }
    }
}
