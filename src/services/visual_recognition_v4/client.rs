//! Visual Recognition v4 client.

use super::builder::VisualRecognitionV4Builder;
use super::types::*;
use bytes::Bytes;
use chrono::NaiveDate;
use reqwest::Method;
use watson_core::execution::MultipartFormData;
use watson_core::{ServiceCore, WatsonError, WatsonResponse};

/// Client for the Watson Visual Recognition v4 API.
#[derive(Debug, Clone)]
pub struct VisualRecognitionV4 {
    pub(crate) core: ServiceCore,
}

impl_service_client!(VisualRecognitionV4);

const DATE_FORMAT: &str = "%Y-%m-%d";

impl VisualRecognitionV4 {
    pub fn builder(version: impl Into<String>) -> VisualRecognitionV4Builder {
        VisualRecognitionV4Builder::new(version)
    }

    /// Build a client from `WATSON_VISION_COMBINED_*` credentials in the
    /// environment.
    pub fn from_environment(version: impl Into<String>) -> Result<Self, WatsonError> {
        Self::builder(version).from_environment()?.build()
    }

    /// Detect objects in images, by file, by URL, or both.
    ///
    /// Collections must have finished training for the requested feature.
    pub async fn analyze(
        &self,
        options: &AnalyzeOptions,
    ) -> Result<WatsonResponse<AnalyzeResponse>, WatsonError> {
        let mut form = MultipartFormData::new();
        for id in &options.collection_ids {
            form.append_text("collection_ids", id.as_str());
        }
        for feature in &options.features {
            form.append_text("features", feature.as_str());
        }
        for file in &options.images_file {
            form.append_file("images_file", file);
        }
        for url in &options.image_url {
            form.append_text("image_url", url.as_str());
        }
        if let Some(threshold) = options.threshold {
            form.append_text("threshold", threshold.to_string());
        }

        self.core
            .request(Method::POST, "analyze", "/v4/analyze", &[])
            .accept_json()
            .multipart(form)
            .send_json()
            .await
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    pub async fn create_collection(
        &self,
        collection: &CollectionRequest,
    ) -> Result<WatsonResponse<Collection>, WatsonError> {
        self.core
            .request(Method::POST, "createCollection", "/v4/collections", &[])
            .accept_json()
            .json(collection)
            .send_json()
            .await
    }

    pub async fn list_collections(&self) -> Result<WatsonResponse<CollectionsList>, WatsonError> {
        self.core
            .request(Method::GET, "listCollections", "/v4/collections", &[])
            .accept_json()
            .send_json()
            .await
    }

    pub async fn get_collection(
        &self,
        collection_id: &str,
    ) -> Result<WatsonResponse<Collection>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getCollection",
                "/v4/collections/{collection_id}",
                &[("collection_id", collection_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    /// Rename or describe a collection. Absent fields are left unchanged.
    pub async fn update_collection(
        &self,
        collection_id: &str,
        update: &CollectionRequest,
    ) -> Result<WatsonResponse<Collection>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateCollection",
                "/v4/collections/{collection_id}",
                &[("collection_id", collection_id)],
            )
            .accept_json()
            .json(update)
            .send_json()
            .await
    }

    pub async fn delete_collection(
        &self,
        collection_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteCollection",
                "/v4/collections/{collection_id}",
                &[("collection_id", collection_id)],
            )
            .accept_json()
            .send_empty()
            .await
    }

    /// Download a trained model, for example to run it on a device.
    pub async fn get_model_file(
        &self,
        collection_id: &str,
        feature: &str,
        model_format: &str,
    ) -> Result<WatsonResponse<Bytes>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getModelFile",
                "/v4/collections/{collection_id}/model",
                &[("collection_id", collection_id)],
            )
            .accept("application/octet-stream")
            .query("feature", feature)
            .query("model_format", model_format)
            .send_bytes()
            .await
    }

    // -----------------------------------------------------------------------
    // Images
    // -----------------------------------------------------------------------

    pub async fn add_images(
        &self,
        collection_id: &str,
        options: &AddImagesOptions,
    ) -> Result<WatsonResponse<ImageDetailsList>, WatsonError> {
        let mut form = MultipartFormData::new();
        for file in &options.images_file {
            form.append_file("images_file", file);
        }
        for url in &options.image_url {
            form.append_text("image_url", url.as_str());
        }
        if let Some(training_data) = &options.training_data {
            form.append_text("training_data", training_data.as_str());
        }

        self.core
            .request(
                Method::POST,
                "addImages",
                "/v4/collections/{collection_id}/images",
                &[("collection_id", collection_id)],
            )
            .accept_json()
            .multipart(form)
            .send_json()
            .await
    }

    pub async fn list_images(
        &self,
        collection_id: &str,
    ) -> Result<WatsonResponse<ImageSummaryList>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listImages",
                "/v4/collections/{collection_id}/images",
                &[("collection_id", collection_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn get_image_details(
        &self,
        collection_id: &str,
        image_id: &str,
    ) -> Result<WatsonResponse<ImageDetails>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getImageDetails",
                "/v4/collections/{collection_id}/images/{image_id}",
                &[("collection_id", collection_id), ("image_id", image_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn delete_image(
        &self,
        collection_id: &str,
        image_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteImage",
                "/v4/collections/{collection_id}/images/{image_id}",
                &[("collection_id", collection_id), ("image_id", image_id)],
            )
            .accept_json()
            .send_empty()
            .await
    }

    /// The stored image as JPEG. Full size unless `size` says otherwise.
    pub async fn get_jpeg_image(
        &self,
        collection_id: &str,
        image_id: &str,
        size: Option<JpegSize>,
    ) -> Result<WatsonResponse<Bytes>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getJpegImage",
                "/v4/collections/{collection_id}/images/{image_id}/jpeg",
                &[("collection_id", collection_id), ("image_id", image_id)],
            )
            .accept("image/jpeg")
            .query_opt("size", size)
            .send_bytes()
            .await
    }

    // -----------------------------------------------------------------------
    // Objects
    // -----------------------------------------------------------------------

    pub async fn list_object_metadata(
        &self,
        collection_id: &str,
    ) -> Result<WatsonResponse<ObjectMetadataList>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listObjectMetadata",
                "/v4/collections/{collection_id}/objects",
                &[("collection_id", collection_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    /// Rename `object` to `new_object` in all training data of the
    /// collection.
    pub async fn update_object_metadata(
        &self,
        collection_id: &str,
        object: &str,
        new_object: &str,
    ) -> Result<WatsonResponse<UpdateObjectMetadata>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateObjectMetadata",
                "/v4/collections/{collection_id}/objects/{object}",
                &[("collection_id", collection_id), ("object", object)],
            )
            .accept_json()
            .json(&RenameObjectRequest { object: new_object })
            .send_json()
            .await
    }

    pub async fn get_object_metadata(
        &self,
        collection_id: &str,
        object: &str,
    ) -> Result<WatsonResponse<ObjectMetadata>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getObjectMetadata",
                "/v4/collections/{collection_id}/objects/{object}",
                &[("collection_id", collection_id), ("object", object)],
            )
            .accept_json()
            .send_json()
            .await
    }

    /// Remove an object and its bounding boxes from the training data.
    pub async fn delete_object(
        &self,
        collection_id: &str,
        object: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteObject",
                "/v4/collections/{collection_id}/objects/{object}",
                &[("collection_id", collection_id), ("object", object)],
            )
            .accept_json()
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // Training
    // -----------------------------------------------------------------------

    /// Start training. Poll `get_collection` for the training status.
    pub async fn train(&self, collection_id: &str) -> Result<WatsonResponse<Collection>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "train",
                "/v4/collections/{collection_id}/train",
                &[("collection_id", collection_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    /// Replace the training data of one image.
    pub async fn add_image_training_data(
        &self,
        collection_id: &str,
        image_id: &str,
        training_data: &TrainingDataObjects,
    ) -> Result<WatsonResponse<TrainingDataObjects>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "addImageTrainingData",
                "/v4/collections/{collection_id}/images/{image_id}/training_data",
                &[("collection_id", collection_id), ("image_id", image_id)],
            )
            .accept_json()
            .json(training_data)
            .send_json()
            .await
    }

    /// Completed training events between two days, inclusive.
    pub async fn get_training_usage(
        &self,
        start_time: Option<NaiveDate>,
        end_time: Option<NaiveDate>,
    ) -> Result<WatsonResponse<TrainingEvents>, WatsonError> {
        self.core
            .request(Method::GET, "getTrainingUsage", "/v4/training_usage", &[])
            .accept_json()
            .query_opt("start_time", start_time.map(|d| d.format(DATE_FORMAT)))
            .query_opt("end_time", end_time.map(|d| d.format(DATE_FORMAT)))
            .send_json()
            .await
    }

    // -----------------------------------------------------------------------
    // User data
    // -----------------------------------------------------------------------

    /// Delete all data tagged with `customer_id`.
    pub async fn delete_user_data(&self, customer_id: &str) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(Method::DELETE, "deleteUserData", "/v4/user_data", &[])
            .accept_json()
            .query("customer_id", customer_id)
            .send_empty()
            .await
    }
}
