use super::*;
use serde_json::json;

#[test]
fn aggregations_decode_by_type() {
    let aggs: Vec<QueryAggregation> = serde_json::from_value(json!([
        {"type": "term", "field": "enriched_text.entities.text", "count": 2, "results": [
            {"key": "IBM", "matching_results": 12, "aggregations": [
                {"type": "max", "field": "price", "value": 9.5}
            ]}
        ]},
        {"type": "timeslice", "field": "published", "interval": "1d", "results": [
            {"key_as_string": "2020-01-01T00:00:00.000Z", "key": 1577836800000i64, "matching_results": 3}
        ]},
        {"type": "filter", "match": "rating>3", "matching_results": 4},
        {"type": "unique_count", "field": "author", "value": 7.0}
    ]))
    .unwrap();

    match &aggs[0] {
        QueryAggregation::Term(term) => {
            let bucket = &term.results.as_ref().unwrap()[0];
            assert_eq!(bucket.key, "IBM");
            assert!(matches!(
                bucket.aggregations.as_deref(),
                Some([QueryAggregation::Max(QueryCalculationAggregation { value: Some(v), .. })]) if *v == 9.5
            ));
        }
        other => panic!("unexpected {other:?}"),
    }
    assert!(matches!(&aggs[1], QueryAggregation::Timeslice(t) if t.interval == "1d"));
    assert!(matches!(&aggs[2], QueryAggregation::Filter(f) if f.match_expression == "rating>3"));
    assert_eq!(aggs[3].aggregation_type(), "unique_count");
}

#[test]
fn unknown_aggregation_types_are_kept() {
    let wire = json!({"type": "pair", "first": "a", "second": "b"});
    let agg: QueryAggregation = serde_json::from_value(wire.clone()).unwrap();
    match &agg {
        QueryAggregation::Other(g) => {
            assert_eq!(g.aggregation_type, "pair");
            assert_eq!(g.additional_properties["first"], "a");
        }
        other => panic!("unexpected {other:?}"),
    }
    assert_eq!(serde_json::to_value(&agg).unwrap(), wire);
}

#[test]
fn aggregation_without_type_is_rejected() {
    assert!(serde_json::from_value::<QueryAggregation>(json!({"field": "x"})).is_err());
}

#[test]
fn aggregation_type_is_written_back() {
    let wire = json!({"type": "histogram", "field": "price", "interval": 10, "results": [
        {"key": 0, "matching_results": 2}
    ]});
    let agg: QueryAggregation = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&agg).unwrap(), wire);
}

#[test]
fn query_result_keeps_document_fields() {
    let result: QueryResult = serde_json::from_value(json!({
        "document_id": "doc-1",
        "result_metadata": {"document_retrieval_source": "search", "collection_id": "c1", "confidence": 0.8},
        "document_passages": [{"passage_text": "hello", "field": "text", "start_offset": 0, "end_offset": 5}],
        "title": "Greeting",
        "extracted_metadata": {"filename": "hello.txt"}
    }))
    .unwrap();
    assert_eq!(result.document["title"], "Greeting");
    assert_eq!(result.document["extracted_metadata"]["filename"], "hello.txt");
    assert!(!result.document.contains_key("document_id"));
    assert_eq!(
        result.result_metadata.document_retrieval_source,
        ResultDocumentRetrievalSource::Search
    );
    assert_eq!(result.document_passages.unwrap()[0].passage_text.as_deref(), Some("hello"));
}

#[test]
fn query_request_uses_wire_names() {
    let request = QueryRequest {
        return_fields: Some(vec!["title".into()]),
        passages: Some(QueryLargePassages {
            enabled: Some(true),
            find_answers: Some(true),
            ..Default::default()
        }),
        ..QueryRequest::natural_language("what is watson")
    };
    assert_eq!(
        serde_json::to_value(&request).unwrap(),
        json!({
            "natural_language_query": "what is watson",
            "return": ["title"],
            "passages": {"enabled": true, "find_answers": true}
        })
    );
    assert_eq!(serde_json::to_value(QueryRequest::default()).unwrap(), json!({}));
}

#[test]
fn project_types_are_snake_case() {
    let project = CreateProject::new("faq", ProjectType::ConversationalSearch);
    assert_eq!(
        serde_json::to_value(&project).unwrap(),
        json!({"name": "faq", "type": "conversational_search"})
    );
    let enrichment = CreateEnrichment::new("dict", EnrichmentType::Dictionary).with_options(
        EnrichmentOptions {
            languages: Some(vec!["en".into()]),
            entity_type: Some("keyword".into()),
            ..Default::default()
        },
    );
    assert_eq!(
        serde_json::to_value(&enrichment).unwrap(),
        json!({"name": "dict", "type": "dictionary", "options": {"languages": ["en"], "entity_type": "keyword"}})
    );
}

fn assert_round_trip<T: serde::Serialize + serde::de::DeserializeOwned>(wire: serde_json::Value) {
    let decoded: T = serde_json::from_value(wire.clone()).unwrap();
    assert_eq!(serde_json::to_value(&decoded).unwrap(), wire);
}

#[test]
fn list_responses_round_trip_without_their_lists() {
    assert_round_trip::<ListCollectionsResponse>(json!({}));
    assert_round_trip::<ListFieldsResponse>(json!({}));
    assert_round_trip::<ListProjectsResponse>(json!({}));
    assert_round_trip::<Completions>(json!({}));
    assert_round_trip::<QueryNoticesResponse>(json!({"matching_results": 0}));
    assert_round_trip::<TrainingQuerySet>(json!({}));
    assert_round_trip::<Enrichments>(json!({}));
    assert_round_trip::<QueryResponse>(json!({"matching_results": 0}));
}

#[test]
fn responses_round_trip() {
    assert_round_trip::<ListCollectionsResponse>(json!({
        "collections": [{"collection_id": "c1", "name": "docs"}, {"collection_id": "c2"}]
    }));
    assert_round_trip::<ListFieldsResponse>(json!({
        "fields": [{"field": "title", "type": "string", "collection_id": "c1"}]
    }));
    assert_round_trip::<ListProjectsResponse>(json!({
        "projects": [{
            "project_id": "p1",
            "name": "Support",
            "type": "document_retrieval",
            "relevancy_training_status": {"total_examples": 0, "available": false},
            "collection_count": 1
        }]
    }));
    assert_round_trip::<ProjectDetails>(json!({
        "project_id": "p1",
        "name": "Support",
        "type": "conversational_search",
        "default_query_parameters": {
            "collection_ids": ["c1"],
            "passages": {"enabled": true, "count": 5},
            "return": ["title"]
        }
    }));
    assert_round_trip::<TrainingQuerySet>(json!({
        "queries": [{
            "query_id": "q1",
            "natural_language_query": "reset password",
            "created": "2020-08-30T10:00:00.000Z",
            "examples": [{"document_id": "d1", "collection_id": "c1", "relevance": 10}]
        }]
    }));
    assert_round_trip::<Enrichments>(json!({
        "enrichments": [{
            "enrichment_id": "e1",
            "name": "Part of Speech",
            "type": "part_of_speech",
            "options": {"languages": ["en"]}
        }]
    }));
    assert_round_trip::<QueryResponse>(json!({
        "matching_results": 1,
        "results": [{
            "document_id": "doc-1",
            "result_metadata": {"document_retrieval_source": "curation", "collection_id": "c1"},
            "title": "Greeting"
        }],
        "retrieval_details": {"document_retrieval_strategy": "untrained"},
        "suggested_refinements": [{"text": "pricing"}]
    }));
}

#[test]
fn training_query_requires_examples() {
    let err = serde_json::from_value::<TrainingQuery>(json!({"natural_language_query": "x"}));
    assert!(err.is_err());
}

#[test]
fn builder_defaults() {
    let builder = DiscoveryV2::builder("2020-08-30");
    assert_eq!(builder.core.info.name, SERVICE_NAME);
    assert_eq!(builder.core.info.version.as_deref(), Some("2020-08-30"));
    assert_eq!(
        builder.core.service_url.as_deref(),
        Some(watson_core::defaults::urls::DISCOVERY)
    );
}
