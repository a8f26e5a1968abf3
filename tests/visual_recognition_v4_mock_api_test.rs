#![cfg(feature = "visual-recognition")]
//! Visual Recognition v4 against a mock server.

mod support;

use chrono::NaiveDate;
use serde_json::json;
use support::{analytics, bearer, multipart_parts, query_pairs};
use tracing_test::traced_test;
use watson::FileWithMetadata;
use watson::services::visual_recognition_v4::*;
use wiremock::matchers::{body_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, Request, ResponseTemplate};

const VERSION: &str = "2019-02-11";

fn client(server: &MockServer) -> VisualRecognitionV4 {
    VisualRecognitionV4::builder(VERSION)
        .service_url(server.uri())
        .authenticator(bearer())
        .build()
        .unwrap()
}

fn collection_json(id: &str) -> serde_json::Value {
    json!({
        "collection_id": id,
        "name": "animals",
        "created": "2020-01-01T00:00:00.000Z",
        "updated": "2020-01-01T00:00:00.000Z",
        "image_count": 0,
        "training_status": {"objects": {
            "ready": false, "in_progress": false, "data_changed": false,
            "latest_failed": false, "description": ""
        }}
    })
}

#[tokio::test]
#[traced_test]
async fn analyze_sends_repeated_parts() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v4/analyze"))
        .and(query_param("version", VERSION))
        .and(analytics("watson_vision_combined", "v4", "analyze"))
        .and(|req: &Request| {
            let body = String::from_utf8_lossy(&req.body);
            multipart_parts(req, "collection_ids") == 2
                && multipart_parts(req, "features") == 1
                && multipart_parts(req, "images_file") == 1
                && multipart_parts(req, "image_url") == 1
                && multipart_parts(req, "threshold") == 1
                && body.contains("filename=\"giraffe.png\"")
                && body.contains("Content-Type: image/png")
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [{
                "source": {"type": "file", "filename": "giraffe.png"},
                "dimensions": {"height": 10, "width": 10},
                "objects": {"collections": [{"collection_id": "c1", "objects": []}]}
            }]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let png = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A, 0, 0, 0, 0x0D];
    let options = AnalyzeOptions::objects(["c1", "c2"])
        .with_image(FileWithMetadata::new(png.to_vec(), "giraffe.png"))
        .with_image_url("https://example.com/zebra.jpg")
        .with_threshold(0.5);
    let resp = client(&server).analyze(&options).await.unwrap();
    assert_eq!(resp.result.images[0].source.filename.as_deref(), Some("giraffe.png"));
    assert!(logs_contain("sending request"));
}

#[tokio::test]
async fn collection_crud() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v4/collections"))
        .and(body_json(json!({"name": "animals", "description": "zoo"})))
        .respond_with(ResponseTemplate::new(201).set_body_json(collection_json("c1")))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/collections"))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(json!({"collections": [collection_json("c1")]})),
        )
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("DELETE"))
        .and(path("/v4/collections/c1"))
        .and(header("accept", "application/json"))
        .respond_with(ResponseTemplate::new(200))
        .expect(1)
        .mount(&server)
        .await;

    let vr = client(&server);
    let created = vr
        .create_collection(&CollectionRequest::named("animals").with_description("zoo"))
        .await
        .unwrap();
    assert_eq!(created.result.collection_id, "c1");
    assert_eq!(vr.list_collections().await.unwrap().result.collections.len(), 1);
    vr.delete_collection("c1").await.unwrap();
}

#[tokio::test]
async fn binary_endpoints_return_bytes() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/collections/c1/model"))
        .and(header("accept", "application/octet-stream"))
        .and(|req: &Request| {
            query_pairs(req)
                == vec![
                    ("version".to_string(), VERSION.to_string()),
                    ("feature".to_string(), "objects".to_string()),
                    ("model_format".to_string(), "rscnn".to_string()),
                ]
        })
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![1u8, 2, 3]))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/v4/collections/c1/images/img%201/jpeg"))
        .and(header("accept", "image/jpeg"))
        .and(query_param("size", "thumbnail"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("content-type", "image/jpeg")
                .set_body_bytes(vec![0xFF, 0xD8, 0xFF]),
        )
        .expect(1)
        .mount(&server)
        .await;

    let vr = client(&server);
    let model = vr
        .get_model_file("c1", feature::OBJECTS, model_format::RSCNN)
        .await
        .unwrap();
    assert_eq!(&model.result[..], &[1, 2, 3]);
    let jpeg = vr
        .get_jpeg_image("c1", "img 1", Some(JpegSize::Thumbnail))
        .await
        .unwrap();
    assert_eq!(&jpeg.result[..], &[0xFF, 0xD8, 0xFF]);
    assert_eq!(jpeg.header("content-type"), Some("image/jpeg"));
}

#[tokio::test]
async fn add_images_and_training_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v4/collections/c1/images"))
        .and(|req: &Request| {
            multipart_parts(req, "image_url") == 1 && multipart_parts(req, "training_data") == 1
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "images": [{"image_id": "img1", "source": {"type": "url", "source_url": "https://example.com/a.jpg"}}]
        })))
        .expect(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/v4/collections/c1/images/img1/training_data"))
        .and(body_json(json!({"objects": [
            {"object": "giraffe", "location": {"top": 0, "left": 0, "width": 5, "height": 5}}
        ]})))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"objects": [
            {"object": "giraffe", "location": {"top": 0, "left": 0, "width": 5, "height": 5}}
        ]})))
        .expect(1)
        .mount(&server)
        .await;

    let vr = client(&server);
    let added = vr
        .add_images(
            "c1",
            &AddImagesOptions {
                image_url: vec!["https://example.com/a.jpg".into()],
                training_data: Some(r#"{"objects":[]}"#.into()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(
        added.result.images.unwrap()[0].image_id.as_deref(),
        Some("img1")
    );

    let data = TrainingDataObjects {
        objects: Some(vec![TrainingDataObject::new("giraffe", Location::new(0, 0, 5, 5))]),
    };
    let stored = vr
        .add_image_training_data("c1", "img1", &data)
        .await
        .unwrap();
    assert_eq!(stored.result, data);
}

#[tokio::test]
async fn rename_object_sends_new_name() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v4/collections/c1/objects/giraffe"))
        .and(analytics("watson_vision_combined", "v4", "updateObjectMetadata"))
        .and(body_json(json!({"object": "tall giraffe"})))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(json!({"object": "tall giraffe", "count": 4})),
        )
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server)
        .update_object_metadata("c1", "giraffe", "tall giraffe")
        .await
        .unwrap();
    assert_eq!(resp.result.count, Some(4));
}

#[tokio::test]
async fn training_usage_formats_dates() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v4/training_usage"))
        .and(|req: &Request| {
            query_pairs(req)
                == vec![
                    ("version".to_string(), VERSION.to_string()),
                    ("start_time".to_string(), "2020-03-01".to_string()),
                    ("end_time".to_string(), "2020-03-31".to_string()),
                ]
        })
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "start_time": "2020-03-01T00:00:00.000Z",
            "completed_events": 1,
            "trained_images": 20,
            "events": [{"type": "objects", "collection_id": "c1", "status": "succeeded", "image_count": 20}]
        })))
        .expect(1)
        .mount(&server)
        .await;

    let resp = client(&server)
        .get_training_usage(
            NaiveDate::from_ymd_opt(2020, 3, 1),
            NaiveDate::from_ymd_opt(2020, 3, 31),
        )
        .await
        .unwrap();
    let events = resp.result.events.unwrap();
    assert_eq!(events[0].status, Some(TrainingEventStatus::Succeeded));
}
