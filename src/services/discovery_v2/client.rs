//! Discovery v2 client.

use super::builder::DiscoveryV2Builder;
use super::types::*;
use reqwest::Method;
use watson_core::execution::MultipartFormData;
use watson_core::{FileWithMetadata, ServiceCore, WatsonError, WatsonResponse};

/// Client for the Watson Discovery v2 API.
#[derive(Debug, Clone)]
pub struct DiscoveryV2 {
    pub(crate) core: ServiceCore,
}

impl_service_client!(DiscoveryV2);

/// `file` and `metadata` parts shared by the document endpoints.
fn document_form(file: Option<&FileWithMetadata>, metadata: Option<&str>) -> MultipartFormData {
    let mut form = MultipartFormData::new();
    if let Some(file) = file {
        form.append_file("file", file);
    }
    if let Some(metadata) = metadata {
        form.append_text("metadata", metadata);
    }
    form
}

impl DiscoveryV2 {
    pub fn builder(version: impl Into<String>) -> DiscoveryV2Builder {
        DiscoveryV2Builder::new(version)
    }

    /// Build a client from `DISCOVERY_*` credentials in the environment.
    pub fn from_environment(version: impl Into<String>) -> Result<Self, WatsonError> {
        Self::builder(version).from_environment()?.build()
    }

    // -----------------------------------------------------------------------
    // Collections
    // -----------------------------------------------------------------------

    pub async fn list_collections(
        &self,
        project_id: &str,
    ) -> Result<WatsonResponse<ListCollectionsResponse>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listCollections",
                "/v2/projects/{project_id}/collections",
                &[("project_id", project_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn create_collection(
        &self,
        project_id: &str,
        collection: &CreateCollection,
    ) -> Result<WatsonResponse<CollectionDetails>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "createCollection",
                "/v2/projects/{project_id}/collections",
                &[("project_id", project_id)],
            )
            .accept_json()
            .json(collection)
            .send_json()
            .await
    }

    pub async fn get_collection(
        &self,
        project_id: &str,
        collection_id: &str,
    ) -> Result<WatsonResponse<CollectionDetails>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getCollection",
                "/v2/projects/{project_id}/collections/{collection_id}",
                &[("project_id", project_id), ("collection_id", collection_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn update_collection(
        &self,
        project_id: &str,
        collection_id: &str,
        update: &UpdateCollection,
    ) -> Result<WatsonResponse<CollectionDetails>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateCollection",
                "/v2/projects/{project_id}/collections/{collection_id}",
                &[("project_id", project_id), ("collection_id", collection_id)],
            )
            .accept_json()
            .json(update)
            .send_json()
            .await
    }

    /// Delete a collection and every document in it.
    pub async fn delete_collection(
        &self,
        project_id: &str,
        collection_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteCollection",
                "/v2/projects/{project_id}/collections/{collection_id}",
                &[("project_id", project_id), ("collection_id", collection_id)],
            )
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Search the collections of a project.
    pub async fn query(
        &self,
        project_id: &str,
        request: &QueryRequest,
    ) -> Result<WatsonResponse<QueryResponse>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "query",
                "/v2/projects/{project_id}/query",
                &[("project_id", project_id)],
            )
            .accept_json()
            .json(request)
            .send_json()
            .await
    }

    /// Completions for a partial query term.
    pub async fn get_autocompletion(
        &self,
        project_id: &str,
        prefix: &str,
        options: &GetAutocompletionOptions,
    ) -> Result<WatsonResponse<Completions>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getAutocompletion",
                "/v2/projects/{project_id}/autocompletion",
                &[("project_id", project_id)],
            )
            .accept_json()
            .query("prefix", prefix)
            .query_list("collection_ids", options.collection_ids.as_deref())
            .query_opt("field", options.field.as_deref())
            .query_opt("count", options.count)
            .send_json()
            .await
    }

    /// Search the notices raised while ingesting documents or training.
    pub async fn query_notices(
        &self,
        project_id: &str,
        options: &QueryNoticesOptions,
    ) -> Result<WatsonResponse<QueryNoticesResponse>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "queryNotices",
                "/v2/projects/{project_id}/notices",
                &[("project_id", project_id)],
            )
            .accept_json()
            .query_opt("filter", options.filter.as_deref())
            .query_opt("query", options.query.as_deref())
            .query_opt("natural_language_query", options.natural_language_query.as_deref())
            .query_opt("count", options.count)
            .query_opt("offset", options.offset)
            .send_json()
            .await
    }

    pub async fn list_fields<S: AsRef<str>>(
        &self,
        project_id: &str,
        collection_ids: Option<&[S]>,
    ) -> Result<WatsonResponse<ListFieldsResponse>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listFields",
                "/v2/projects/{project_id}/fields",
                &[("project_id", project_id)],
            )
            .accept_json()
            .query_list("collection_ids", collection_ids)
            .send_json()
            .await
    }

    pub async fn get_component_settings(
        &self,
        project_id: &str,
    ) -> Result<WatsonResponse<ComponentSettingsResponse>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getComponentSettings",
                "/v2/projects/{project_id}/component_settings",
                &[("project_id", project_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    // -----------------------------------------------------------------------
    // Documents
    // -----------------------------------------------------------------------

    /// Upload a document for ingestion. Processing is asynchronous; the
    /// returned status is usually `processing`.
    pub async fn add_document(
        &self,
        project_id: &str,
        collection_id: &str,
        options: &AddDocumentOptions,
    ) -> Result<WatsonResponse<DocumentAccepted>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "addDocument",
                "/v2/projects/{project_id}/collections/{collection_id}/documents",
                &[("project_id", project_id), ("collection_id", collection_id)],
            )
            .accept_json()
            .header_opt("X-Watson-Discovery-Force", options.force)
            .multipart(document_form(options.file.as_ref(), options.metadata.as_deref()))
            .send_json()
            .await
    }

    /// Replace a document, or add it under `document_id` if it is new.
    pub async fn update_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        options: &AddDocumentOptions,
    ) -> Result<WatsonResponse<DocumentAccepted>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateDocument",
                "/v2/projects/{project_id}/collections/{collection_id}/documents/{document_id}",
                &[
                    ("project_id", project_id),
                    ("collection_id", collection_id),
                    ("document_id", document_id),
                ],
            )
            .accept_json()
            .header_opt("X-Watson-Discovery-Force", options.force)
            .multipart(document_form(options.file.as_ref(), options.metadata.as_deref()))
            .send_json()
            .await
    }

    pub async fn delete_document(
        &self,
        project_id: &str,
        collection_id: &str,
        document_id: &str,
        force: Option<bool>,
    ) -> Result<WatsonResponse<DeleteDocumentResponse>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteDocument",
                "/v2/projects/{project_id}/collections/{collection_id}/documents/{document_id}",
                &[
                    ("project_id", project_id),
                    ("collection_id", collection_id),
                    ("document_id", document_id),
                ],
            )
            .accept_json()
            .header_opt("X-Watson-Discovery-Force", force)
            .send_json()
            .await
    }

    // -----------------------------------------------------------------------
    // Training data
    // -----------------------------------------------------------------------

    pub async fn list_training_queries(
        &self,
        project_id: &str,
    ) -> Result<WatsonResponse<TrainingQuerySet>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listTrainingQueries",
                "/v2/projects/{project_id}/training_data/queries",
                &[("project_id", project_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    /// Remove all training queries of a project.
    pub async fn delete_training_queries(
        &self,
        project_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteTrainingQueries",
                "/v2/projects/{project_id}/training_data/queries",
                &[("project_id", project_id)],
            )
            .send_empty()
            .await
    }

    pub async fn create_training_query(
        &self,
        project_id: &str,
        query: &CreateTrainingQuery,
    ) -> Result<WatsonResponse<TrainingQuery>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "createTrainingQuery",
                "/v2/projects/{project_id}/training_data/queries",
                &[("project_id", project_id)],
            )
            .accept_json()
            .json(query)
            .send_json()
            .await
    }

    pub async fn get_training_query(
        &self,
        project_id: &str,
        query_id: &str,
    ) -> Result<WatsonResponse<TrainingQuery>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getTrainingQuery",
                "/v2/projects/{project_id}/training_data/queries/{query_id}",
                &[("project_id", project_id), ("query_id", query_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn update_training_query(
        &self,
        project_id: &str,
        query_id: &str,
        query: &CreateTrainingQuery,
    ) -> Result<WatsonResponse<TrainingQuery>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateTrainingQuery",
                "/v2/projects/{project_id}/training_data/queries/{query_id}",
                &[("project_id", project_id), ("query_id", query_id)],
            )
            .accept_json()
            .json(query)
            .send_json()
            .await
    }

    pub async fn delete_training_query(
        &self,
        project_id: &str,
        query_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteTrainingQuery",
                "/v2/projects/{project_id}/training_data/queries/{query_id}",
                &[("project_id", project_id), ("query_id", query_id)],
            )
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // Analysis
    // -----------------------------------------------------------------------

    /// Run a document through the collection's enrichments without storing
    /// it.
    pub async fn analyze_document(
        &self,
        project_id: &str,
        collection_id: &str,
        file: Option<&FileWithMetadata>,
        metadata: Option<&str>,
    ) -> Result<WatsonResponse<AnalyzedDocument>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "analyzeDocument",
                "/v2/projects/{project_id}/collections/{collection_id}/analyze",
                &[("project_id", project_id), ("collection_id", collection_id)],
            )
            .accept_json()
            .multipart(document_form(file, metadata))
            .send_json()
            .await
    }

    // -----------------------------------------------------------------------
    // Enrichments
    // -----------------------------------------------------------------------

    pub async fn list_enrichments(
        &self,
        project_id: &str,
    ) -> Result<WatsonResponse<Enrichments>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listEnrichments",
                "/v2/projects/{project_id}/enrichments",
                &[("project_id", project_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    /// Create an enrichment. `file` carries the dictionary, regular
    /// expression set or model the enrichment type requires.
    pub async fn create_enrichment(
        &self,
        project_id: &str,
        enrichment: &CreateEnrichment,
        file: Option<&FileWithMetadata>,
    ) -> Result<WatsonResponse<Enrichment>, WatsonError> {
        let mut form = MultipartFormData::new();
        form.append_json("enrichment", enrichment)?;
        if let Some(file) = file {
            form.append_file("file", file);
        }

        self.core
            .request(
                Method::POST,
                "createEnrichment",
                "/v2/projects/{project_id}/enrichments",
                &[("project_id", project_id)],
            )
            .accept_json()
            .multipart(form)
            .send_json()
            .await
    }

    pub async fn get_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
    ) -> Result<WatsonResponse<Enrichment>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getEnrichment",
                "/v2/projects/{project_id}/enrichments/{enrichment_id}",
                &[("project_id", project_id), ("enrichment_id", enrichment_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn update_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
        update: &UpdateEnrichment,
    ) -> Result<WatsonResponse<Enrichment>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateEnrichment",
                "/v2/projects/{project_id}/enrichments/{enrichment_id}",
                &[("project_id", project_id), ("enrichment_id", enrichment_id)],
            )
            .accept_json()
            .json(update)
            .send_json()
            .await
    }

    pub async fn delete_enrichment(
        &self,
        project_id: &str,
        enrichment_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteEnrichment",
                "/v2/projects/{project_id}/enrichments/{enrichment_id}",
                &[("project_id", project_id), ("enrichment_id", enrichment_id)],
            )
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // Projects
    // -----------------------------------------------------------------------

    pub async fn list_projects(&self) -> Result<WatsonResponse<ListProjectsResponse>, WatsonError> {
        self.core
            .request(Method::GET, "listProjects", "/v2/projects", &[])
            .accept_json()
            .send_json()
            .await
    }

    pub async fn create_project(
        &self,
        project: &CreateProject,
    ) -> Result<WatsonResponse<ProjectDetails>, WatsonError> {
        self.core
            .request(Method::POST, "createProject", "/v2/projects", &[])
            .accept_json()
            .json(project)
            .send_json()
            .await
    }

    pub async fn get_project(
        &self,
        project_id: &str,
    ) -> Result<WatsonResponse<ProjectDetails>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getProject",
                "/v2/projects/{project_id}",
                &[("project_id", project_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn update_project(
        &self,
        project_id: &str,
        update: &UpdateProject,
    ) -> Result<WatsonResponse<ProjectDetails>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateProject",
                "/v2/projects/{project_id}",
                &[("project_id", project_id)],
            )
            .accept_json()
            .json(update)
            .send_json()
            .await
    }

    /// Delete a project with all its collections and documents.
    pub async fn delete_project(&self, project_id: &str) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteProject",
                "/v2/projects/{project_id}",
                &[("project_id", project_id)],
            )
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // User data
    // -----------------------------------------------------------------------

    /// Delete all data tagged with `customer_id`.
    pub async fn delete_user_data(&self, customer_id: &str) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(Method::DELETE, "deleteUserData", "/v2/user_data", &[])
            .query("customer_id", customer_id)
            .send_empty()
            .await
    }
}
