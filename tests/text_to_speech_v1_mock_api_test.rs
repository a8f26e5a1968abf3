#![cfg(feature = "text-to-speech")]
//! Text to Speech v1 against a mock server.

mod support;

use serde_json::json;
use std::io::Cursor;
use support::{analytics, bearer, multipart_parts, query_pairs};
use watson::services::text_to_speech_v1::*;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

fn client(server: &MockServer) -> TextToSpeechV1 {
    TextToSpeechV1::builder()
        .service_url(server.uri())
        .authenticator(bearer())
        .build()
        .unwrap()
}

fn wav(samples: &[i16]) -> Vec<u8> {
    let spec = hound::WavSpec {
        channels: 1,
        sample_rate: 16000,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    };
    let mut cursor = Cursor::new(Vec::new());
    {
        let mut writer = hound::WavWriter::new(&mut cursor, spec).unwrap();
        for s in samples {
            writer.write_sample(*s).unwrap();
        }
        writer.finalize().unwrap();
    }
    cursor.into_inner()
}

#[tokio::test]
async fn list_voices_sends_no_version() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices"))
        .and(|req: &Request| req.url.query().is_none())
        .and(analytics("text_to_speech", "v1", "listVoices"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "voices": [{
                "url": "u", "gender": "male", "name": "en-US_MichaelV3Voice",
                "language": "en-US", "description": "Michael", "customizable": true,
                "supported_features": {"custom_pronunciation": true, "voice_transformation": false}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let voices = client(&server).list_voices().await.unwrap().result;
    assert_eq!(voices.voices[0].name, "en-US_MichaelV3Voice");
}

#[tokio::test]
async fn synthesize_repairs_streamed_wav() {
    let samples = [10i16, -10, 300, -300];
    let mut streamed = wav(&samples);
    let data_at = streamed.windows(4).position(|w| w == b"data").unwrap();
    streamed[4..8].copy_from_slice(&u32::MAX.to_le_bytes());
    streamed[data_at + 4..data_at + 8].copy_from_slice(&u32::MAX.to_le_bytes());

    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/synthesize"))
        .and(header("accept", "audio/wav"))
        .and(header("content-type", "application/json"))
        .and(query_param("voice", "en-US_AllisonV3Voice"))
        .and(body_json(json!({"text": "Hello world"})))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "audio/wav")
                .set_body_bytes(streamed),
        )
        .expect(1)
        .mount(&server)
        .await;

    let options = SynthesizeOptions {
        accept: Some(audio_format::WAV.into()),
        voice: Some("en-US_AllisonV3Voice".into()),
        ..Default::default()
    };
    let resp = client(&server)
        .synthesize("Hello world", &options)
        .await
        .unwrap();
    assert_eq!(resp.header("content-type"), Some("audio/wav"));

    let mut reader = hound::WavReader::new(Cursor::new(resp.result.to_vec())).unwrap();
    let decoded: Vec<i16> = reader.samples::<i16>().map(Result::unwrap).collect();
    assert_eq!(decoded, samples);
}

#[tokio::test]
async fn synthesize_passes_other_formats_through() {
    let ogg = b"OggS\x00\x02opus-bytes".to_vec();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/synthesize"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(ogg.clone()))
        .mount(&server)
        .await;

    let resp = client(&server)
        .synthesize("hi", &SynthesizeOptions::default())
        .await
        .unwrap();
    assert_eq!(resp.result.to_vec(), ogg);
}

#[tokio::test]
async fn pronunciation_query_order() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/pronunciation"))
        .and(|req: &Request| {
            query_pairs(req)
                == vec![
                    ("text".to_string(), "IEEE".to_string()),
                    ("format".to_string(), "ipa".to_string()),
                ]
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"pronunciation": "aɪ"})))
        .expect(1)
        .mount(&server)
        .await;

    let options = GetPronunciationOptions {
        format: Some(PronunciationFormat::Ipa),
        ..Default::default()
    };
    let resp = client(&server)
        .get_pronunciation("IEEE", &options)
        .await
        .unwrap();
    assert_eq!(resp.result.pronunciation, "aɪ");
}

#[tokio::test]
async fn custom_model_lifecycle() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations"))
        .and(body_json(json!({"name": "support", "description": "help desk"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"customization_id": "c1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/customizations"))
        .and(query_param("language", "en-US"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customizations": [{"customization_id": "c1", "name": "support"}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/c1"))
        .and(body_json(json!({"words": [{"word": "ACLs", "translation": "ackles"}]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v1/customizations/c1"))
        .respond_with(ResponseTemplate::new(204))
        .expect(1)
        .mount(&server)
        .await;

    let tts = client(&server);
    let created = tts
        .create_custom_model(&CreateCustomModel::new("support").with_description("help desk"))
        .await
        .unwrap();
    assert_eq!(created.result.customization_id, "c1");

    let listed = tts.list_custom_models(Some("en-US")).await.unwrap();
    assert_eq!(listed.result.customizations.len(), 1);

    let update = UpdateCustomModel {
        words: Some(vec![Word::new("ACLs", "ackles")]),
        ..Default::default()
    };
    tts.update_custom_model("c1", &update).await.unwrap();
    assert_eq!(tts.delete_custom_model("c1").await.unwrap().status_code, 204);
}

#[tokio::test]
async fn words_are_percent_encoded_in_path() {
    let server = MockServer::start().await;
    Mock::given(method("PUT"))
        .and(|req: &Request| req.url.path() == "/v1/customizations/c1/words/R%26D")
        .and(body_json(json!({"translation": "R and D"})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/c1/words"))
        .and(body_json(json!({"words": [{"word": "NCAA", "translation": "N C double A"}]})))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let tts = client(&server);
    tts.add_word("c1", "R&D", &Translation::new("R and D"))
        .await
        .unwrap();
    tts.add_words("c1", &[Word::new("NCAA", "N C double A")])
        .await
        .unwrap();
}

#[tokio::test]
async fn add_custom_prompt_uploads_metadata_and_audio() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/customizations/c1/prompts/greeting"))
        .and(|req: &Request| {
            let body = String::from_utf8_lossy(&req.body);
            multipart_parts(req, "metadata") == 1
                && multipart_parts(req, "file") == 1
                && body.contains("Content-Type: application/json")
                && body.contains("Content-Type: audio/wav")
                && body.contains(r#"{"prompt_text":"Welcome"}"#)
        })
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "prompt": "Welcome", "prompt_id": "greeting", "status": "processing"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server)
        .add_custom_prompt("c1", "greeting", &PromptMetadata::new("Welcome"), wav(&[1, 2]))
        .await
        .unwrap();
    assert_eq!(resp.result.status, PromptStatus::Processing);
}

#[tokio::test]
async fn create_speaker_model_sends_raw_wav() {
    let audio = wav(&[7, 8, 9]);
    let expected = audio.clone();
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1/speakers"))
        .and(query_param("speaker_name", "Ann"))
        .and(header("content-type", "audio/wav"))
        .and(move |req: &Request| req.body == expected)
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({"speaker_id": "sp1"})))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v1/speakers/sp1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "customizations": [{"customization_id": "c1", "prompts": [
                {"prompt": "hi", "prompt_id": "p1", "status": "available"}
            ]}]
        })))
        .mount(&server)
        .await;

    let tts = client(&server);
    let created = tts.create_speaker_model("Ann", audio).await.unwrap();
    assert_eq!(created.result.speaker_id, "sp1");
    let details = tts.get_speaker_model("sp1").await.unwrap().result;
    assert_eq!(details.customizations[0].prompts[0].status, PromptStatus::Available);
}

#[tokio::test]
async fn api_error_uses_errors_array_first() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1/voices/nope"))
        .respond_with(ResponseTemplate::new(404).set_body_json(json!({
            "errors": [{"message": "Model nope not found"}],
            "error": "not found",
            "code": 404
        })))
        .mount(&server)
        .await;

    let err = client(&server).get_voice("nope", None).await.unwrap_err();
    assert_eq!(err.status_code(), Some(404));
    assert!(err.to_string().contains("Model nope not found"));
}
