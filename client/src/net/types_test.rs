use super::*;

// =============================================================
// Endpoints
// =============================================================

#[test]
fn default_endpoints_live_under_extraction_api() {
    let endpoints = Endpoints::default();
    assert_eq!(endpoints.available_tags, "/api/extraction/tags/");
    assert_eq!(endpoints.list_quotes, "/api/extraction/quotes/");
    assert_eq!(endpoints.create_quote, "/api/extraction/quotes/");
}

#[test]
fn delete_url_substitutes_placeholder() {
    let endpoints = Endpoints::default();
    assert_eq!(endpoints.delete_quote_url(42), "/api/extraction/quotes/42/");
}

#[test]
fn delete_url_without_placeholder_appends_id() {
    let endpoints = Endpoints { delete_quote: "/store/quotes".to_owned(), ..Endpoints::default() };
    assert_eq!(endpoints.delete_quote_url(7), "/store/quotes/7/");
    let endpoints = Endpoints { delete_quote: "/store/quotes/".to_owned(), ..Endpoints::default() };
    assert_eq!(endpoints.delete_quote_url(7), "/store/quotes/7/");
}

// =============================================================
// HostConfig
// =============================================================

#[test]
fn host_config_parses_full_document() {
    let config = HostConfig::from_json(
        r#"{
            "pdf_url": "/media/papers/smith.pdf",
            "extraction_id": 12,
            "csrf_token": "tok",
            "endpoints": {
                "available_tags": "/t/",
                "list_quotes": "/q/?extraction=12",
                "create_quote": "/q/",
                "delete_quote": "/q/{id}/"
            }
        }"#,
    )
    .unwrap();
    assert_eq!(config.pdf_url(), Some("/media/papers/smith.pdf"));
    assert_eq!(config.extraction_id, 12);
    assert_eq!(config.csrf_token, "tok");
    assert_eq!(config.endpoints.list_quotes, "/q/?extraction=12");
}

#[test]
fn host_config_fills_missing_endpoints_with_defaults() {
    let config = HostConfig::from_json(r#"{"extraction_id": 3, "endpoints": {"list_quotes": "/mine/"}}"#).unwrap();
    assert_eq!(config.endpoints.list_quotes, "/mine/");
    assert_eq!(config.endpoints.available_tags, "/api/extraction/tags/");
    assert_eq!(config.csrf_token, "");
}

#[test]
fn blank_or_null_pdf_url_counts_as_missing() {
    for raw in [
        r#"{"extraction_id": 1}"#,
        r#"{"extraction_id": 1, "pdf_url": null}"#,
        r#"{"extraction_id": 1, "pdf_url": "   "}"#,
    ] {
        assert_eq!(HostConfig::from_json(raw).unwrap().pdf_url(), None, "{raw}");
    }
}

#[test]
fn host_config_without_extraction_id_is_rejected() {
    let err = HostConfig::from_json(r#"{"pdf_url": "/a.pdf"}"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

// =============================================================
// Store responses
// =============================================================

#[test]
fn tags_parse_in_store_order() {
    let tags = parse_tags(
        r##"{"tags": [
            {"id": 2, "name": "Sample", "color": "#22c55e", "is_mandatory": true},
            {"id": 1, "name": "Method"}
        ]}"##,
    )
    .unwrap();
    let names: Vec<_> = tags.iter().map(|t| t.name.as_str()).collect();
    assert_eq!(names, vec!["Sample", "Method"]);
    assert!(tags[0].is_mandatory);
    assert_eq!(tags[1].display_color(), "#6366f1");
}

#[test]
fn missing_tags_array_is_empty() {
    assert!(parse_tags("{}").unwrap().is_empty());
}

#[test]
fn quotes_listing_parses_nested_coordinates() {
    let quotes = parse_quotes(
        r#"{"quotes": [{
            "id": 5,
            "text": "small sample",
            "page": 2,
            "location": {"page": 2, "text_location": "Page 2", "coordinates": {"x1": 1, "y1": 2, "x2": 3, "y2": 4}},
            "tags": [{"name": "Sample", "color": null}]
        }]}"#,
    )
    .unwrap();
    assert_eq!(quotes.len(), 1);
    assert_eq!(quotes[0].page_number(), Some(2));
    assert!(quotes[0].rect().is_some());
    assert_eq!(quotes[0].tags[0].display_color(), "#6366f1");
}

#[test]
fn missing_quotes_array_is_empty() {
    assert!(parse_quotes(r#"{"success": true}"#).unwrap().is_empty());
}

#[test]
fn malformed_listing_is_a_parse_error() {
    assert!(matches!(parse_quotes("<html>"), Err(ApiError::Parse(_))));
    assert!(matches!(parse_quotes(r#"{"quotes": [{"text": "no id"}]}"#), Err(ApiError::Parse(_))));
    assert!(matches!(parse_tags(r#"{"tags": "none"}"#), Err(ApiError::Parse(_))));
}

#[test]
fn created_record_with_string_location_parses() {
    let quote = parse_created(
        r##"{"id": 42, "extraction_id": 1, "text_portion": "hello", "location": "Section 2",
            "tags": [{"id": 1, "name": "Method", "color": "#f00"}], "researcher_id": 1}"##,
    )
    .unwrap();
    assert_eq!(quote.id, 42);
    assert_eq!(quote.text, "hello");
    assert_eq!(quote.page_number(), None);
    assert_eq!(quote.location.unwrap().text_location, "Section 2");
}

#[test]
fn store_error_message_extracts_error_field() {
    assert_eq!(store_error_message(r#"{"error": "Quote not found"}"#), Some("Quote not found".to_owned()));
    assert_eq!(store_error_message("Internal Server Error"), None);
}

#[test]
fn api_error_messages() {
    assert_eq!(ApiError::Status { status: 404 }.to_string(), "store responded with status 404");
    assert_eq!(ApiError::Network("offline".to_owned()).to_string(), "network error: offline");
}
