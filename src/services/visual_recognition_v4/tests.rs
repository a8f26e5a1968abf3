use super::*;
use serde_json::json;

#[test]
fn analyze_response_decodes() {
    let resp: AnalyzeResponse = serde_json::from_value(json!({
        "images": [{
            "source": {"type": "url", "source_url": "https://example.com/a.jpg", "resolved_url": "https://cdn.example.com/a.jpg"},
            "dimensions": {"height": 480, "width": 640},
            "objects": {"collections": [{
                "collection_id": "c1",
                "objects": [{"object": "giraffe", "location": {"top": 10, "left": 20, "width": 100, "height": 200}, "score": 0.93}]
            }]},
            "errors": [{"code": "invalid_field", "message": "too small", "target": {"type": "field", "name": "image_url"}}]
        }],
        "trace": "4e1b"
    }))
    .unwrap();
    let image = &resp.images[0];
    assert_eq!(image.source.source_type, ImageSourceType::Url);
    let detected = &image.objects.collections.as_ref().unwrap()[0].objects[0];
    assert_eq!(detected.object, "giraffe");
    assert_eq!(detected.location, Location::new(10, 20, 100, 200));
    let error = &image.errors.as_ref().unwrap()[0];
    assert_eq!(error.code, ErrorCode::InvalidField);
    assert_eq!(error.target.as_ref().unwrap().target_type, ErrorTargetType::Field);
}

#[test]
fn collection_training_status_decodes() {
    let collection: Collection = serde_json::from_value(json!({
        "collection_id": "c1",
        "name": "animals",
        "created": "2020-01-01T00:00:00.000Z",
        "updated": "2020-01-02T00:00:00.000Z",
        "image_count": 12,
        "training_status": {"objects": {
            "ready": false, "in_progress": true, "data_changed": false,
            "latest_failed": false, "rscnn_ready": false, "description": "training"
        }}
    }))
    .unwrap();
    assert!(collection.training_status.objects.in_progress);
    assert_eq!(collection.image_count, 12);
}

#[test]
fn training_data_encodes_locations() {
    let data = TrainingDataObjects {
        objects: Some(vec![TrainingDataObject::new("giraffe", Location::new(1, 2, 3, 4))]),
    };
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        json!({"objects": [{"object": "giraffe", "location": {"top": 1, "left": 2, "width": 3, "height": 4}}]})
    );
    assert_eq!(
        serde_json::to_value(TrainingDataObjects { objects: Some(vec![]) }).unwrap(),
        json!({"objects": []})
    );
}

fn assert_round_trip<T: serde::Serialize + serde::de::DeserializeOwned>(wire: serde_json::Value) {
    let decoded: T = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&decoded).unwrap(), wire);
}

fn collection_json() -> serde_json::Value {
    json!({
        "collection_id": "c1",
        "created": "2020-01-01T00:00:00.000Z",
        "updated": "2020-01-02T00:00:00.000Z",
        "image_count": 0,
        "training_status": {"objects": {
            "ready": true, "in_progress": false, "data_changed": false,
            "latest_failed": false, "description": "ready"
        }}
    })
}

#[test]
fn responses_round_trip() {
    assert_round_trip::<AnalyzeResponse>(json!({
        "images": [{
            "source": {"type": "file", "filename": "a.jpg", "archive_filename": "set.zip"},
            "dimensions": {"height": 480, "width": 640},
            "objects": {"collections": [{
                "collection_id": "c1",
                "objects": [{"object": "giraffe", "location": {"top": 10, "left": 20, "width": 100, "height": 200}, "score": 0.93}]
            }]}
        }],
        "warnings": [{"code": "invalid_field", "message": "ignored"}]
    }));
    assert_round_trip::<CollectionsList>(json!({"collections": [collection_json()]}));
    assert_round_trip::<ImageSummaryList>(json!({"images": [{"image_id": "img1", "updated": "2020-01-01T00:00:00.000Z"}]}));
    assert_round_trip::<ImageDetailsList>(json!({
        "images": [{
            "image_id": "img1",
            "source": {"type": "url", "source_url": "https://example.com/a.jpg"},
            "training_data": {"objects": [{"object": "giraffe", "location": {"top": 1, "left": 2, "width": 3, "height": 4}}]}
        }],
        "trace": "4e1b"
    }));
    assert_round_trip::<ObjectMetadataList>(json!({"object_count": 1, "objects": [{"object": "giraffe", "count": 3}]}));
    assert_round_trip::<TrainingEvents>(json!({
        "start_time": "2020-01-01T00:00:00.000Z",
        "completed_events": 1,
        "events": [{"type": "objects", "collection_id": "c1", "status": "in_progress"}]
    }));
}

#[test]
fn responses_round_trip_without_optionals() {
    assert_round_trip::<AnalyzeResponse>(json!({"images": []}));
    assert_round_trip::<DetectedObjects>(json!({}));
    assert_round_trip::<CollectionsList>(json!({"collections": []}));
    assert_round_trip::<Collection>(collection_json());
    assert_round_trip::<ImageDetailsList>(json!({}));
    assert_round_trip::<ObjectMetadataList>(json!({"object_count": 0}));
    assert_round_trip::<TrainingEvents>(json!({}));
}

#[test]
fn required_lists_must_be_present() {
    assert!(serde_json::from_value::<AnalyzeResponse>(json!({})).is_err());
    assert!(serde_json::from_value::<CollectionsList>(json!({})).is_err());
    assert!(serde_json::from_value::<ImageSummaryList>(json!({})).is_err());
    assert!(serde_json::from_value::<CollectionObjects>(json!({"collection_id": "c1"})).is_err());
}

#[test]
fn analyze_options_default_to_object_detection() {
    let options = AnalyzeOptions::objects(["c1", "c2"])
        .with_image_url("https://example.com/a.jpg")
        .with_threshold(0.4);
    assert_eq!(options.collection_ids, vec!["c1", "c2"]);
    assert_eq!(options.features, vec![feature::OBJECTS]);
    assert_eq!(options.threshold, Some(0.4));
    assert_eq!(JpegSize::Thumbnail.to_string(), "thumbnail");
}

#[test]
fn builder_defaults() {
    let builder = VisualRecognitionV4::builder("2019-02-11");
    assert_eq!(builder.core.info.name, "watson_vision_combined");
    assert_eq!(builder.core.info.api_version, "v4");
    assert_eq!(
        builder.core.service_url.as_deref(),
        Some(watson_core::defaults::urls::VISUAL_RECOGNITION)
    );
}
