//! Assistant v2 client.

use super::builder::AssistantV2Builder;
use super::types::*;
use reqwest::Method;
use watson_core::{ServiceCore, WatsonError, WatsonResponse};

/// Client for the Watson Assistant v2 API.
///
/// Cheap to clone; clones share the HTTP connection pool and token cache.
#[derive(Debug, Clone)]
pub struct AssistantV2 {
    pub(crate) core: ServiceCore,
}

impl_service_client!(AssistantV2);

impl AssistantV2 {
    pub fn builder(version: impl Into<String>) -> AssistantV2Builder {
        AssistantV2Builder::new(version)
    }

    /// Build a client from `CONVERSATION_*` credentials in the environment.
    pub fn from_environment(version: impl Into<String>) -> Result<Self, WatsonError> {
        Self::builder(version).from_environment()?.build()
    }

    /// Create a session.
    ///
    /// A session keeps the conversation state until it is deleted or times
    /// out.
    pub async fn create_session(
        &self,
        assistant_id: &str,
    ) -> Result<WatsonResponse<SessionResponse>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "createSession",
                "/v2/assistants/{assistant_id}/sessions",
                &[("assistant_id", assistant_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn delete_session(
        &self,
        assistant_id: &str,
        session_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteSession",
                "/v2/assistants/{assistant_id}/sessions/{session_id}",
                &[("assistant_id", assistant_id), ("session_id", session_id)],
            )
            .accept_json()
            .send_empty()
            .await
    }

    /// Send user input within a session and get the assistant's reply.
    pub async fn message(
        &self,
        assistant_id: &str,
        session_id: &str,
        request: &MessageRequest,
    ) -> Result<WatsonResponse<MessageResponse>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "message",
                "/v2/assistants/{assistant_id}/sessions/{session_id}/message",
                &[("assistant_id", assistant_id), ("session_id", session_id)],
            )
            .accept_json()
            .json(request)
            .send_json()
            .await
    }

    /// Send user input without a session. The returned context must be sent
    /// back with the next turn.
    pub async fn message_stateless(
        &self,
        assistant_id: &str,
        request: &MessageRequestStateless,
    ) -> Result<WatsonResponse<MessageResponseStateless>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "messageStateless",
                "/v2/assistants/{assistant_id}/message",
                &[("assistant_id", assistant_id)],
            )
            .accept_json()
            .json(request)
            .send_json()
            .await
    }

    /// Classify many utterances against a dialog skill in one call.
    pub async fn bulk_classify(
        &self,
        skill_id: &str,
        request: &BulkClassifyRequest,
    ) -> Result<WatsonResponse<BulkClassifyResponse>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "bulkClassify",
                "/v2/skills/{skill_id}/workspace/bulk_classify",
                &[("skill_id", skill_id)],
            )
            .accept_json()
            .json(request)
            .send_json()
            .await
    }

    pub async fn list_logs(
        &self,
        assistant_id: &str,
        options: &ListLogsOptions,
    ) -> Result<WatsonResponse<LogCollection>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listLogs",
                "/v2/assistants/{assistant_id}/logs",
                &[("assistant_id", assistant_id)],
            )
            .accept_json()
            .query_opt("sort", options.sort.as_deref())
            .query_opt("filter", options.filter.as_deref())
            .query_opt("page_limit", options.page_limit)
            .query_opt("cursor", options.cursor.as_deref())
            .send_json()
            .await
    }

    /// Delete all data associated with a customer id.
    pub async fn delete_user_data(
        &self,
        customer_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(Method::DELETE, "deleteUserData", "/v2/user_data", &[])
            .accept_json()
            .query("customer_id", customer_id)
            .send_empty()
            .await
    }
}
