//! Text to Speech v1 models.

use serde::{Deserialize, Serialize};

/// Common values for the `Accept` header of `synthesize`.
pub mod audio_format {
    pub const BASIC: &str = "audio/basic";
    pub const FLAC: &str = "audio/flac";
    pub const L16: &str = "audio/l16";
    pub const MP3: &str = "audio/mp3";
    pub const MPEG: &str = "audio/mpeg";
    pub const MULAW: &str = "audio/mulaw";
    pub const OGG: &str = "audio/ogg";
    pub const OGG_OPUS: &str = "audio/ogg;codecs=opus";
    pub const OGG_VORBIS: &str = "audio/ogg;codecs=vorbis";
    pub const WAV: &str = "audio/wav";
    pub const WEBM: &str = "audio/webm";
    pub const WEBM_OPUS: &str = "audio/webm;codecs=opus";
}

// ---------------------------------------------------------------------------
// Voices
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voices {
    pub voices: Vec<Voice>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Voice {
    pub url: String,
    pub gender: String,
    /// Voice name, for example `en-US_AllisonV3Voice`.
    pub name: String,
    pub language: String,
    pub description: String,
    pub customizable: bool,
    pub supported_features: SupportedFeatures,
    /// Custom model details, returned by `get_voice` with a customization id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customization: Option<CustomModel>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportedFeatures {
    pub custom_pronunciation: bool,
    pub voice_transformation: bool,
}

// ---------------------------------------------------------------------------
// Synthesis
// ---------------------------------------------------------------------------

/// Optional parameters of `synthesize`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SynthesizeOptions {
    /// Requested audio format, sent as `Accept`. See [`audio_format`].
    pub accept: Option<String>,
    pub voice: Option<String>,
    pub customization_id: Option<String>,
}

#[derive(Serialize)]
pub(crate) struct SynthesizeRequest<'a> {
    pub text: &'a str,
}

#[derive(Serialize)]
pub(crate) struct AddWordsRequest<'a> {
    pub words: &'a [Word],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PronunciationFormat {
    Ibm,
    Ipa,
}

impl PronunciationFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ibm => "ibm",
            Self::Ipa => "ipa",
        }
    }
}

/// Optional parameters of `get_pronunciation`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPronunciationOptions {
    pub voice: Option<String>,
    pub format: Option<PronunciationFormat>,
    pub customization_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pronunciation {
    pub pronunciation: String,
}

// ---------------------------------------------------------------------------
// Custom models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CreateCustomModel {
    pub name: String,
    /// Defaults to `en-US` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CreateCustomModel {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            language: None,
            description: None,
        }
    }

    pub fn with_language(mut self, language: impl Into<String>) -> Self {
        self.language = Some(language.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateCustomModel {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Words to add or update.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomModels {
    pub customizations: Vec<CustomModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomModel {
    pub customization_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub owner: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Present only when a single model is fetched.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub words: Option<Vec<Word>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub prompts: Option<Vec<Prompt>>,
}

// ---------------------------------------------------------------------------
// Words
// ---------------------------------------------------------------------------

/// Japanese part of speech for a custom word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PartOfSpeech {
    Dosi,
    Fuku,
    Gobi,
    Hoka,
    Jodo,
    Josi,
    Kato,
    Kedo,
    Keyo,
    Kigo,
    Koyu,
    Mesi,
    Reta,
    Stbi,
    Stto,
    Stzo,
    Suji,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Word {
    pub word: String,
    /// Phonetic or sounds-like translation.
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,
}

impl Word {
    pub fn new(word: impl Into<String>, translation: impl Into<String>) -> Self {
        Self {
            word: word.into(),
            translation: translation.into(),
            part_of_speech: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Words {
    pub words: Vec<Word>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Translation {
    pub translation: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<PartOfSpeech>,
}

impl Translation {
    pub fn new(translation: impl Into<String>) -> Self {
        Self {
            translation: translation.into(),
            part_of_speech: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Prompts and speaker models
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PromptStatus {
    Processing,
    Available,
    Failed,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompt {
    /// The text the prompt speaks.
    pub prompt: String,
    pub prompt_id: String,
    pub status: PromptStatus,
    /// Why processing failed, when `status` is `failed`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Prompts {
    pub prompts: Vec<Prompt>,
}

/// The `metadata` part of `add_custom_prompt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PromptMetadata {
    pub prompt_text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speaker_id: Option<String>,
}

impl PromptMetadata {
    pub fn new(prompt_text: impl Into<String>) -> Self {
        Self {
            prompt_text: prompt_text.into(),
            speaker_id: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speaker {
    pub speaker_id: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Speakers {
    pub speakers: Vec<Speaker>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerModel {
    pub speaker_id: String,
}

/// Custom models that use a speaker's prompts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerCustomModels {
    pub customizations: Vec<SpeakerCustomModel>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerCustomModel {
    pub customization_id: String,
    pub prompts: Vec<SpeakerPrompt>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpeakerPrompt {
    pub prompt: String,
    pub prompt_id: String,
    pub status: PromptStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}
