//! Text to Speech v1 client.

use super::builder::TextToSpeechV1Builder;
use super::types::*;
use super::wav::{is_wav, repair_wav_header};
use bytes::Bytes;
use reqwest::Method;
use watson_core::execution::MultipartFormData;
use watson_core::{ServiceCore, WatsonError, WatsonResponse};

/// Client for the Watson Text to Speech v1 API.
#[derive(Debug, Clone)]
pub struct TextToSpeechV1 {
    pub(crate) core: ServiceCore,
}

impl_service_client!(TextToSpeechV1);

impl TextToSpeechV1 {
    pub fn builder() -> TextToSpeechV1Builder {
        TextToSpeechV1Builder::new()
    }

    /// Build a client from `TEXT_TO_SPEECH_*` credentials in the environment.
    pub fn from_environment() -> Result<Self, WatsonError> {
        Self::builder().from_environment()?.build()
    }

    // -----------------------------------------------------------------------
    // Voices
    // -----------------------------------------------------------------------

    pub async fn list_voices(&self) -> Result<WatsonResponse<Voices>, WatsonError> {
        self.core
            .request(Method::GET, "listVoices", "/v1/voices", &[])
            .accept_json()
            .send_json()
            .await
    }

    /// Get one voice. With `customization_id` the response also describes
    /// that custom model.
    pub async fn get_voice(
        &self,
        voice: &str,
        customization_id: Option<&str>,
    ) -> Result<WatsonResponse<Voice>, WatsonError> {
        self.core
            .request(Method::GET, "getVoice", "/v1/voices/{voice}", &[("voice", voice)])
            .accept_json()
            .query_opt("customization_id", customization_id)
            .send_json()
            .await
    }

    // -----------------------------------------------------------------------
    // Synthesis
    // -----------------------------------------------------------------------

    /// Synthesize `text` to audio.
    ///
    /// The audio format follows `options.accept` (the service default is
    /// Ogg Opus). WAV output has its chunk sizes repaired before returning.
    pub async fn synthesize(
        &self,
        text: &str,
        options: &SynthesizeOptions,
    ) -> Result<WatsonResponse<Bytes>, WatsonError> {
        let mut response = self
            .core
            .request(Method::POST, "synthesize", "/v1/synthesize", &[])
            .header_opt("Accept", options.accept.as_deref())
            .query_opt("voice", options.voice.as_deref())
            .query_opt("customization_id", options.customization_id.as_deref())
            .json(&SynthesizeRequest { text })
            .send_bytes()
            .await?;

        if is_wav(&response.result) {
            let mut audio = response.result.to_vec();
            repair_wav_header(&mut audio);
            tracing::debug!(target: "watson::text_to_speech", bytes = audio.len(), "repaired WAV header sizes");
            response.result = Bytes::from(audio);
        }
        Ok(response)
    }

    pub async fn get_pronunciation(
        &self,
        text: &str,
        options: &GetPronunciationOptions,
    ) -> Result<WatsonResponse<Pronunciation>, WatsonError> {
        self.core
            .request(Method::GET, "getPronunciation", "/v1/pronunciation", &[])
            .accept_json()
            .query("text", text)
            .query_opt("voice", options.voice.as_deref())
            .query_opt("format", options.format.map(|f| f.as_str()))
            .query_opt("customization_id", options.customization_id.as_deref())
            .send_json()
            .await
    }

    // -----------------------------------------------------------------------
    // Custom models
    // -----------------------------------------------------------------------

    pub async fn create_custom_model(
        &self,
        model: &CreateCustomModel,
    ) -> Result<WatsonResponse<CustomModel>, WatsonError> {
        self.core
            .request(Method::POST, "createCustomModel", "/v1/customizations", &[])
            .accept_json()
            .json(model)
            .send_json()
            .await
    }

    /// List custom models, optionally restricted to one language.
    pub async fn list_custom_models(
        &self,
        language: Option<&str>,
    ) -> Result<WatsonResponse<CustomModels>, WatsonError> {
        self.core
            .request(Method::GET, "listCustomModels", "/v1/customizations", &[])
            .accept_json()
            .query_opt("language", language)
            .send_json()
            .await
    }

    pub async fn update_custom_model(
        &self,
        customization_id: &str,
        update: &UpdateCustomModel,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "updateCustomModel",
                "/v1/customizations/{customization_id}",
                &[("customization_id", customization_id)],
            )
            .accept_json()
            .json(update)
            .send_empty()
            .await
    }

    pub async fn get_custom_model(
        &self,
        customization_id: &str,
    ) -> Result<WatsonResponse<CustomModel>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getCustomModel",
                "/v1/customizations/{customization_id}",
                &[("customization_id", customization_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn delete_custom_model(
        &self,
        customization_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteCustomModel",
                "/v1/customizations/{customization_id}",
                &[("customization_id", customization_id)],
            )
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // Words
    // -----------------------------------------------------------------------

    /// Add or update several words. Existing translations are replaced.
    pub async fn add_words(
        &self,
        customization_id: &str,
        words: &[Word],
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::POST,
                "addWords",
                "/v1/customizations/{customization_id}/words",
                &[("customization_id", customization_id)],
            )
            .accept_json()
            .json(&AddWordsRequest { words })
            .send_empty()
            .await
    }

    pub async fn list_words(
        &self,
        customization_id: &str,
    ) -> Result<WatsonResponse<Words>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listWords",
                "/v1/customizations/{customization_id}/words",
                &[("customization_id", customization_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn add_word(
        &self,
        customization_id: &str,
        word: &str,
        translation: &Translation,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::PUT,
                "addWord",
                "/v1/customizations/{customization_id}/words/{word}",
                &[("customization_id", customization_id), ("word", word)],
            )
            .json(translation)
            .send_empty()
            .await
    }

    pub async fn get_word(
        &self,
        customization_id: &str,
        word: &str,
    ) -> Result<WatsonResponse<Translation>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getWord",
                "/v1/customizations/{customization_id}/words/{word}",
                &[("customization_id", customization_id), ("word", word)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn delete_word(
        &self,
        customization_id: &str,
        word: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteWord",
                "/v1/customizations/{customization_id}/words/{word}",
                &[("customization_id", customization_id), ("word", word)],
            )
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // Custom prompts
    // -----------------------------------------------------------------------

    pub async fn list_custom_prompts(
        &self,
        customization_id: &str,
    ) -> Result<WatsonResponse<Prompts>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "listCustomPrompts",
                "/v1/customizations/{customization_id}/prompts",
                &[("customization_id", customization_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    /// Add a prompt recorded as WAV audio, or replace one with the same id.
    pub async fn add_custom_prompt(
        &self,
        customization_id: &str,
        prompt_id: &str,
        metadata: &PromptMetadata,
        file: impl Into<Bytes>,
    ) -> Result<WatsonResponse<Prompt>, WatsonError> {
        let mut form = MultipartFormData::new();
        form.append_json("metadata", metadata)?;
        form.append_bytes("file", file, Some("prompt.wav"), Some("audio/wav"));

        self.core
            .request(
                Method::POST,
                "addCustomPrompt",
                "/v1/customizations/{customization_id}/prompts/{prompt_id}",
                &[("customization_id", customization_id), ("prompt_id", prompt_id)],
            )
            .accept_json()
            .multipart(form)
            .send_json()
            .await
    }

    pub async fn get_custom_prompt(
        &self,
        customization_id: &str,
        prompt_id: &str,
    ) -> Result<WatsonResponse<Prompt>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getCustomPrompt",
                "/v1/customizations/{customization_id}/prompts/{prompt_id}",
                &[("customization_id", customization_id), ("prompt_id", prompt_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn delete_custom_prompt(
        &self,
        customization_id: &str,
        prompt_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteCustomPrompt",
                "/v1/customizations/{customization_id}/prompts/{prompt_id}",
                &[("customization_id", customization_id), ("prompt_id", prompt_id)],
            )
            .send_empty()
            .await
    }

    // -----------------------------------------------------------------------
    // Speaker models
    // -----------------------------------------------------------------------

    pub async fn list_speaker_models(&self) -> Result<WatsonResponse<Speakers>, WatsonError> {
        self.core
            .request(Method::GET, "listSpeakerModels", "/v1/speakers", &[])
            .accept_json()
            .send_json()
            .await
    }

    /// Enroll a speaker from a WAV recording.
    pub async fn create_speaker_model(
        &self,
        speaker_name: &str,
        audio: impl Into<Bytes>,
    ) -> Result<WatsonResponse<SpeakerModel>, WatsonError> {
        self.core
            .request(Method::POST, "createSpeakerModel", "/v1/speakers", &[])
            .accept_json()
            .query("speaker_name", speaker_name)
            .body(audio, "audio/wav")
            .send_json()
            .await
    }

    pub async fn get_speaker_model(
        &self,
        speaker_id: &str,
    ) -> Result<WatsonResponse<SpeakerCustomModels>, WatsonError> {
        self.core
            .request(
                Method::GET,
                "getSpeakerModel",
                "/v1/speakers/{speaker_id}",
                &[("speaker_id", speaker_id)],
            )
            .accept_json()
            .send_json()
            .await
    }

    pub async fn delete_speaker_model(
        &self,
        speaker_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(
                Method::DELETE,
                "deleteSpeakerModel",
                "/v1/speakers/{speaker_id}",
                &[("speaker_id", speaker_id)],
            )
            .send_empty()
            .await
    }

    pub async fn delete_user_data(
        &self,
        customer_id: &str,
    ) -> Result<WatsonResponse<()>, WatsonError> {
        self.core
            .request(Method::DELETE, "deleteUserData", "/v1/user_data", &[])
            .query("customer_id", customer_id)
            .send_empty()
            .await
    }
}
