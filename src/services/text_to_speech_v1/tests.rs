//! Model tests for Text to Speech v1.

use super::*;
use serde_json::json;

#[test]
fn voice_with_customization_round_trips() {
    let wire = json!({
        "url": "https://example.com/v1/voices/en-US_AllisonV3Voice",
        "gender": "female",
        "name": "en-US_AllisonV3Voice",
        "language": "en-US",
        "description": "Allison: American English female voice.",
        "customizable": true,
        "supported_features": {"custom_pronunciation": true, "voice_transformation": false},
        "customization": {
            "customization_id": "c1",
            "name": "My model",
            "language": "en-US",
            "created": "2020-01-01T00:00:00.000Z",
            "words": [{"word": "IEEE", "translation": "I triple E"}]
        }
    });
    let voice: Voice = serde_json::from_value(wire.clone()).unwrap();
    assert!(voice.supported_features.custom_pronunciation);
    let custom = voice.customization.as_ref().unwrap();
    assert_eq!(custom.words.as_ref().unwrap()[0].translation, "I triple E");
    assert_eq!(serde_json::to_value(&voice).unwrap(), wire);
}

#[test]
fn japanese_part_of_speech_uses_wire_codes() {
    let word = Word {
        part_of_speech: Some(PartOfSpeech::Mesi),
        ..Word::new("東京", "トウキョウ")
    };
    assert_eq!(
        serde_json::to_value(&word).unwrap(),
        json!({"word": "東京", "translation": "トウキョウ", "part_of_speech": "Mesi"})
    );
}

#[test]
fn prompt_status_is_closed() {
    let prompt: Prompt = serde_json::from_value(json!({
        "prompt": "Thank you for calling",
        "prompt_id": "greeting",
        "status": "failed",
        "error": "audio too long"
    }))
    .unwrap();
    assert_eq!(prompt.status, PromptStatus::Failed);
    assert!(
        serde_json::from_value::<Prompt>(json!({
            "prompt": "p", "prompt_id": "i", "status": "queued"
        }))
        .is_err()
    );
}

fn assert_round_trip<T: serde::Serialize + serde::de::DeserializeOwned>(wire: serde_json::Value) {
    let decoded: T = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&decoded).unwrap(), wire);
}

#[test]
fn responses_round_trip() {
    assert_round_trip::<CustomModels>(json!({"customizations": [
        {"customization_id": "c1", "name": "support", "language": "en-US", "owner": "u1",
         "created": "2020-01-01T00:00:00.000Z", "last_modified": "2020-01-02T00:00:00.000Z"},
        {"customization_id": "c2"}
    ]}));
    assert_round_trip::<CustomModel>(json!({
        "customization_id": "c1",
        "words": [{"word": "IEEE", "translation": "I triple E"}],
        "prompts": [{"prompt": "Hello", "prompt_id": "greeting", "status": "available", "speaker_id": "s1"}]
    }));
    assert_round_trip::<Words>(json!({"words": [
        {"word": "東京", "translation": "トウキョウ", "part_of_speech": "Koyu"}
    ]}));
    assert_round_trip::<Translation>(json!({"translation": "I triple E"}));
    assert_round_trip::<Prompts>(json!({"prompts": []}));
    assert_round_trip::<Speakers>(json!({"speakers": [{"speaker_id": "s1", "name": "Ann"}]}));
    assert_round_trip::<SpeakerCustomModels>(json!({"customizations": [{
        "customization_id": "c1",
        "prompts": [{"prompt": "Hi", "prompt_id": "p1", "status": "failed", "error": "noisy audio"}]
    }]}));
    assert_round_trip::<Pronunciation>(json!({"pronunciation": ".ˈaɪ .ˈtrɪ.pəl .ˈi"}));
}

#[test]
fn create_custom_model_omits_absent_fields() {
    let body = CreateCustomModel::new("support").with_language("en-GB");
    assert_eq!(
        serde_json::to_value(&body).unwrap(),
        json!({"name": "support", "language": "en-GB"})
    );
}

#[test]
fn builder_is_unversioned() {
    let tts = TextToSpeechV1::builder()
        .authenticator(std::sync::Arc::new(watson_core::auth::NoAuthAuthenticator))
        .build()
        .unwrap();
    assert_eq!(tts.core().info().version, None);
    assert_eq!(tts.service_url(), Some(watson_core::defaults::urls::TEXT_TO_SPEECH));
}
