//! Assistant v2 request and response models.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionResponse {
    pub session_id: String,
}

// ---------------------------------------------------------------------------
// Input
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageType {
    Text,
    Search,
}

/// User input for a stateful message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    /// Text of the user input. Limited to 2048 characters.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    /// Intents to use instead of classifying the text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    /// Id of the suggestion the user selected, for disambiguation.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<MessageInputAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageInputOptions>,
}

impl MessageInput {
    /// Plain text input.
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            message_type: Some(MessageType::Text),
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

/// User input for a stateless message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInputStateless {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<MessageType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestion_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attachments: Option<Vec<MessageInputAttachment>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub options: Option<MessageInputOptionsStateless>,
}

impl MessageInputStateless {
    pub fn text(text: impl Into<String>) -> Self {
        Self {
            message_type: Some(MessageType::Text),
            text: Some(text.into()),
            ..Default::default()
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageInputAttachment {
    pub url: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media_type: Option<String>,
}

impl MessageInputAttachment {
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            media_type: None,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInputOptions {
    /// Restart the conversation, clearing any in-progress dialog.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<bool>,
    /// Return up to ten intents instead of only the top one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<MessageInputOptionsSpelling>,
    /// Include diagnostic information (`output.debug`).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
    /// Return the session context with the response.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub return_context: Option<bool>,
    /// Return the output of every skill, not just the one that answered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub export: Option<bool>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInputOptionsStateless {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub restart: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternate_intents: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<MessageInputOptionsSpelling>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<bool>,
}

/// Spelling correction settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageInputOptionsSpelling {
    /// Return a corrected version of the input in `output.spelling`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggestions: Option<bool>,
    /// Correct the input before it is classified.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auto_correct: Option<bool>,
}

// ---------------------------------------------------------------------------
// Intents and entities
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeIntent {
    pub intent: String,
    pub confidence: f64,
}

impl RuntimeIntent {
    pub fn new(intent: impl Into<String>, confidence: f64) -> Self {
        Self {
            intent: intent.into(),
            confidence,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntity {
    pub entity: String,
    /// Zero-based start and end offsets of the mention in the input text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
    pub value: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub groups: Option<Vec<CaptureGroup>>,
    /// System entity interpretation (dates, numbers and the like).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub interpretation: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alternatives: Option<Vec<RuntimeEntityAlternative>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<RuntimeEntityRole>,
}

impl RuntimeEntity {
    pub fn new(entity: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            entity: entity.into(),
            location: None,
            value: value.into(),
            confidence: None,
            metadata: None,
            groups: None,
            interpretation: None,
            alternatives: None,
            role: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CaptureGroup {
    pub group: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<Vec<i64>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntityAlternative {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeEntityRole {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub role_type: Option<String>,
}

// ---------------------------------------------------------------------------
// Context
// ---------------------------------------------------------------------------

/// Session context for a stateful message.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContext {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<MessageContextGlobal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<MessageContextSkills>,
}

/// Context for a stateless message. The caller carries it between turns.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextStateless {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub global: Option<MessageContextGlobalStateless>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skills: Option<MessageContextSkills>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextGlobal {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<MessageContextGlobalSystem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextGlobalStateless {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<MessageContextGlobalSystem>,
    /// Caller-chosen id; stateless calls have no server-side session.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
}

/// Built-in context variables shared by all skills.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextGlobalSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timezone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub turn_count: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    /// Overrides the current time when interpreting date entities.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reference_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_start_time: Option<String>,
    /// Opaque state token, set only on stateless responses.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub skip_user_input: Option<bool>,
}

/// Per-skill context, keyed by skill name (`main skill`, `actions skill`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextSkills {
    #[serde(flatten)]
    pub skills: HashMap<String, MessageContextSkill>,
}

impl MessageContextSkills {
    pub fn get(&self, skill: &str) -> Option<&MessageContextSkill> {
        self.skills.get(skill)
    }

    pub fn insert(&mut self, skill: impl Into<String>, context: MessageContextSkill) {
        self.skills.insert(skill.into(), context);
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextSkill {
    /// Arbitrary variables owned by the application.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub system: Option<MessageContextSkillSystem>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageContextSkillSystem {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    #[serde(flatten)]
    pub additional_properties: HashMap<String, Value>,
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

/// Body of a stateful message request. Encodes to `{}` when every field is absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<MessageContext>,
    /// Identifies the end user for billing. Defaults to the session id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageRequestStateless {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInputStateless>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<MessageContextStateless>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

// ---------------------------------------------------------------------------
// Responses
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponse {
    pub output: MessageOutput,
    /// Present when `return_context` was requested.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub context: Option<MessageContext>,
    pub user_id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageResponseStateless {
    pub output: MessageOutput,
    /// Context to send with the next turn.
    pub context: MessageContextStateless,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageOutput {
    /// Responses to show the user, in order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generic: Option<Vec<RuntimeResponseGeneric>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    /// Actions the client application is asked to carry out.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub actions: Option<Vec<DialogNodeAction>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub debug: Option<MessageOutputDebug>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_defined: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub spelling: Option<MessageOutputSpelling>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogNodeActionType {
    Client,
    Server,
    CloudFunction,
    WebAction,
    Webhook,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeAction {
    pub name: String,
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub action_type: Option<DialogNodeActionType>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parameters: Option<HashMap<String, Value>>,
    /// Context variable that receives the action result.
    pub result_variable: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub credentials: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BranchExitedReason {
    Completed,
    Fallback,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageOutputDebug {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nodes_visited: Option<Vec<DialogNodeVisited>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub log_messages: Option<Vec<DialogLogMessage>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_exited: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub branch_exited_reason: Option<BranchExitedReason>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeVisited {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub conditions: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DialogLogLevel {
    Info,
    Error,
    Warn,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogLogMessage {
    pub level: DialogLogLevel,
    pub message: String,
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub source: Option<LogMessageSource>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogMessageSource {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    pub source_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageOutputSpelling {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_text: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub suggested_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Generic runtime responses
// ---------------------------------------------------------------------------

/// One response item, discriminated by `response_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "response_type", rename_all = "snake_case")]
pub enum RuntimeResponseGeneric {
    Audio(RuntimeResponseAudio),
    ChannelTransfer(RuntimeResponseChannelTransfer),
    ConnectToAgent(RuntimeResponseConnectToAgent),
    Iframe(RuntimeResponseIframe),
    Image(RuntimeResponseImage),
    Option(RuntimeResponseOption),
    Suggestion(RuntimeResponseSuggestion),
    Pause(RuntimeResponsePause),
    Search(RuntimeResponseSearch),
    Text(RuntimeResponseText),
    UserDefined(RuntimeResponseUserDefined),
    Video(RuntimeResponseVideo),
}

impl RuntimeResponseGeneric {
    /// The wire discriminant of this response.
    pub fn response_type(&self) -> &'static str {
        match self {
            Self::Audio(_) => "audio",
            Self::ChannelTransfer(_) => "channel_transfer",
            Self::ConnectToAgent(_) => "connect_to_agent",
            Self::Iframe(_) => "iframe",
            Self::Image(_) => "image",
            Self::Option(_) => "option",
            Self::Suggestion(_) => "suggestion",
            Self::Pause(_) => "pause",
            Self::Search(_) => "search",
            Self::Text(_) => "text",
            Self::UserDefined(_) => "user_defined",
            Self::Video(_) => "video",
        }
    }

    /// Text of a `text` response.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(t) => Some(&t.text),
            _ => None,
        }
    }
}

/// Channel a response is restricted to.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResponseGenericChannel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseAudio {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_options: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseChannelTransfer {
    pub message_to_user: String,
    pub transfer_info: ChannelTransferInfo,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelTransferInfo {
    pub target: ChannelTransferTarget,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelTransferTarget {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub chat: Option<ChannelTransferTargetChat>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ChannelTransferTargetChat {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseConnectToAgent {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_to_human_agent: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_available: Option<AgentAvailabilityMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_unavailable: Option<AgentAvailabilityMessage>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transfer_info: Option<ConnectToAgentTransferInfo>,
    /// Dialog topic that triggered the transfer.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub topic: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AgentAvailabilityMessage {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Routing details keyed by integration (`zendesk`, `salesforce`, ...).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ConnectToAgentTransferInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target: Option<HashMap<String, HashMap<String, Value>>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseIframe {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseImage {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OptionPreference {
    Dropdown,
    Button,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseOption {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preference: Option<OptionPreference>,
    pub options: Vec<DialogNodeOutputOptionsElement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElement {
    pub label: String,
    pub value: DialogNodeOutputOptionsElementValue,
}

/// Input sent back when the user picks the option.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogNodeOutputOptionsElementValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseSuggestion {
    pub title: String,
    pub suggestions: Vec<DialogSuggestion>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DialogSuggestion {
    pub label: String,
    pub value: DialogSuggestionValue,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub dialog_node: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct DialogSuggestionValue {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<MessageInput>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponsePause {
    /// Pause length in milliseconds.
    pub time: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub typing: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseSearch {
    pub header: String,
    pub primary_results: Vec<SearchResult>,
    pub additional_results: Vec<SearchResult>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    pub id: String,
    pub result_metadata: SearchResultMetadata,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub highlight: Option<SearchResultHighlight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub answers: Option<Vec<SearchResultAnswer>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResultMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub confidence: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

/// Highlighted passages per field. Fields other than body, title and url
/// land in `additional_properties`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResultHighlight {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub body: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub url: Option<Vec<String>>,
    #[serde(flatten)]
    pub additional_properties: HashMap<String, Vec<String>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResultAnswer {
    pub text: String,
    pub confidence: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseText {
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseUserDefined {
    pub user_defined: HashMap<String, Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeResponseVideo {
    pub source: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channel_options: Option<HashMap<String, Value>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub channels: Option<Vec<ResponseGenericChannel>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt_text: Option<String>,
}

// ---------------------------------------------------------------------------
// Bulk classification
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BulkClassifyUtterance {
    pub text: String,
}

impl BulkClassifyUtterance {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// Body of a bulk classify request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkClassifyRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<Vec<BulkClassifyUtterance>>,
}

impl BulkClassifyRequest {
    pub fn new<I, S>(texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            input: Some(texts.into_iter().map(BulkClassifyUtterance::new).collect()),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkClassifyResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<Vec<BulkClassifyOutput>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct BulkClassifyOutput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub input: Option<BulkClassifyUtterance>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entities: Option<Vec<RuntimeEntity>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub intents: Option<Vec<RuntimeIntent>>,
}

// ---------------------------------------------------------------------------
// Logs
// ---------------------------------------------------------------------------

/// Optional parameters of `list_logs`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ListLogsOptions {
    /// Sort key, for example `-request_timestamp`.
    pub sort: Option<String>,
    /// Filter expression in the Assistant filter query language.
    pub filter: Option<String>,
    pub page_limit: Option<i64>,
    pub cursor: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LogCollection {
    pub logs: Vec<Log>,
    pub pagination: LogPagination,
}

/// One logged message exchange. Fields added by newer API releases are kept
/// in `additional_properties`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Log {
    pub log_id: String,
    pub request: MessageRequest,
    pub response: MessageResponse,
    pub assistant_id: String,
    pub session_id: String,
    pub skill_id: String,
    pub snapshot: String,
    pub request_timestamp: String,
    pub response_timestamp: String,
    pub language: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,
    #[serde(flatten)]
    pub additional_properties: HashMap<String, Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct LogPagination {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matched: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub next_cursor: Option<String>,
}
