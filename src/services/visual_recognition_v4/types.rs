//! Visual Recognition v4 models.

use serde::{Deserialize, Serialize};
use watson_core::FileWithMetadata;

/// Analysis features.
pub mod feature {
    pub const OBJECTS: &str = "objects";
}

/// Formats accepted by `get_model_file`.
pub mod model_format {
    pub const RSCNN: &str = "rscnn";
}

// ---------------------------------------------------------------------------
// Shared
// ---------------------------------------------------------------------------

/// Bounding box in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub top: i64,
    pub left: i64,
    pub width: i64,
    pub height: i64,
}

impl Location {
    pub fn new(top: i64, left: i64, width: i64, height: i64) -> Self {
        Self {
            top,
            left,
            width,
            height,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageDimensions {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub height: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub width: Option<i64>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImageSourceType {
    File,
    Url,
}

/// Where an image came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSource {
    #[serde(rename = "type")]
    pub source_type: ImageSourceType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
    /// Name of the .zip file the image was extracted from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archive_filename: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source_url: Option<String>,
    /// Final URL after redirects.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resolved_url: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidField,
    InvalidHeader,
    InvalidMethod,
    MissingField,
    ServerError,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorTargetType {
    Field,
    Parameter,
    Header,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorTarget {
    #[serde(rename = "type")]
    pub target_type: ErrorTargetType,
    pub name: String,
}

/// A per-image failure reported inside a successful response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageError {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<ErrorTarget>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub code: ErrorCode,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub more_info: Option<String>,
}

// ---------------------------------------------------------------------------
// Analysis
// ---------------------------------------------------------------------------

/// Inputs of `analyze`.
#[derive(Debug, Clone, Default)]
pub struct AnalyzeOptions {
    pub collection_ids: Vec<String>,
    pub features: Vec<String>,
    /// Images (.jpg or .png) or .zip archives of images.
    pub images_file: Vec<FileWithMetadata>,
    pub image_url: Vec<String>,
    /// Minimum score a detected object must reach.
    pub threshold: Option<f64>,
}

impl AnalyzeOptions {
    /// Detect objects with the given collections.
    pub fn objects<I, S>(collection_ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            collection_ids: collection_ids.into_iter().map(Into::into).collect(),
            features: vec![feature::OBJECTS.to_string()],
            ..Default::default()
        }
    }

    pub fn with_image(mut self, file: FileWithMetadata) -> Self {
        self.images_file.push(file);
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url.push(url.into());
        self
    }

    pub fn with_threshold(mut self, threshold: f64) -> Self {
        self.threshold = Some(threshold);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectDetail {
    pub object: String,
    pub location: Location,
    pub score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionObjects {
    pub collection_id: String,
    pub objects: Vec<ObjectDetail>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedObjects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collections: Option<Vec<CollectionObjects>>,
}

/// Analysis of one image.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub source: ImageSource,
    pub dimensions: ImageDimensions,
    pub objects: DetectedObjects,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ImageError>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    pub images: Vec<Image>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
    /// Request id to quote when contacting support.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

// ---------------------------------------------------------------------------
// Collections
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectTrainingStatus {
    pub ready: bool,
    pub in_progress: bool,
    /// Training data changed since the last training.
    pub data_changed: bool,
    pub latest_failed: bool,
    /// Whether a model in `rscnn` format is available.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rscnn_ready: Option<bool>,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingStatus {
    pub objects: ObjectTrainingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    pub collection_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    pub created: String,
    pub updated: String,
    pub image_count: i64,
    pub training_status: TrainingStatus,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CollectionsList {
    pub collections: Vec<Collection>,
}

/// Body of `create_collection` and `update_collection`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CollectionRequest {
    /// Alphanumeric, underscore, hyphen and dot characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CollectionRequest {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

// ---------------------------------------------------------------------------
// Images
// ---------------------------------------------------------------------------

/// Inputs of `add_images`.
#[derive(Debug, Clone, Default)]
pub struct AddImagesOptions {
    pub images_file: Vec<FileWithMetadata>,
    pub image_url: Vec<String>,
    /// Training data for a single image, as JSON. Only valid when one image
    /// is added.
    pub training_data: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JpegSize {
    Full,
    Thumbnail,
}

impl JpegSize {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Thumbnail => "thumbnail",
        }
    }
}

impl std::fmt::Display for JpegSize {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    pub source: ImageSource,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dimensions: Option<ImageDimensions>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub errors: Option<Vec<ImageError>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub training_data: Option<TrainingDataObjects>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageDetailsList {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub images: Option<Vec<ImageDetails>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warnings: Option<Vec<Warning>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trace: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSummary {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ImageSummaryList {
    pub images: Vec<ImageSummary>,
}

// ---------------------------------------------------------------------------
// Objects
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    /// Number of bounding boxes labelled with this object.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectMetadataList {
    pub object_count: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<ObjectMetadata>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateObjectMetadata {
    pub object: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub(crate) struct RenameObjectRequest<'a> {
    pub object: &'a str,
}

// ---------------------------------------------------------------------------
// Training
// ---------------------------------------------------------------------------

/// One labelled bounding box.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingDataObject {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub object: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Location>,
}

impl TrainingDataObject {
    pub fn new(object: impl Into<String>, location: Location) -> Self {
        Self {
            object: Some(object.into()),
            location: Some(location),
        }
    }
}

/// Training data of one image. An empty list removes all of it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingDataObjects {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub objects: Option<Vec<TrainingDataObject>>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingEventType {
    Objects,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrainingEventStatus {
    Failed,
    Succeeded,
    InProgress,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEvent {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub event_type: Option<TrainingEventType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub collection_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TrainingEventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_count: Option<i64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TrainingEvents {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_events: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trained_images: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub events: Option<Vec<TrainingEvent>>,
}
