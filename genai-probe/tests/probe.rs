mod support;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use genai_probe::listing::{print_models, SEPARATOR_WIDTH};
use genai_probe::probe::{print_outcome, request_text, DEFAULT_MODEL, DEFAULT_PROMPT};
use genai_probe::{ModelFilter, ProbeOutcome};

use support::{build_gemini_client, model_json, text_response};

async fn mount_models(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [
                model_json("gemini-pro", &["generateContent", "countTokens"]),
                model_json("embedding-001", &["embedContent"]),
                model_json("gemini-2.5-flash", &["generateContent"]),
                model_json("aqa", &["generateAnswer"]),
            ]
        })))
        .mount(server)
        .await;
}

fn separator_count(text: &str) -> usize {
    let separator = "-".repeat(SEPARATOR_WIDTH);
    text.lines().filter(|line| *line == separator).count()
}

#[tokio::test]
async fn unfiltered_listing_prints_every_model() {
    let server = MockServer::start().await;
    mount_models(&server).await;
    let client = build_gemini_client(&server.uri());

    let mut out = Vec::new();
    let printed = print_models(client.models().stream(), &ModelFilter::All, &mut out)
        .await
        .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(printed, 4);
    assert_eq!(separator_count(&text), 4);
}

#[tokio::test]
async fn filtered_listing_prints_generate_content_models() {
    let server = MockServer::start().await;
    mount_models(&server).await;
    let client = build_gemini_client(&server.uri());

    let mut out = Vec::new();
    let printed = print_models(
        client.models().stream(),
        &ModelFilter::generate_content(),
        &mut out,
    )
    .await
    .unwrap();

    let text = String::from_utf8(out).unwrap();
    assert_eq!(printed, 2);
    assert_eq!(separator_count(&text), 2);
    assert!(text.contains("Model name: models/gemini-pro\n"));
    assert!(text.contains("Model name: models/gemini-2.5-flash\n"));
    assert!(!text.contains("embedding-001"));
}

#[tokio::test]
async fn listing_prints_fields_verbatim() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "models": [{
                "name": "models/gemini-1.0-pro-vision-latest",
                "displayName": "Gemini 1.0 Pro Vision",
                "description": "The original Gemini 1.0 Pro Vision model version.",
                "supportedGenerationMethods": ["generateContent", "countTokens"]
            }]
        })))
        .mount(&server)
        .await;
    let client = build_gemini_client(&server.uri());

    let mut out = Vec::new();
    print_models(client.models().stream(), &ModelFilter::All, &mut out)
        .await
        .unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        concat!(
            "Model name: models/gemini-1.0-pro-vision-latest\n",
            "Display name: Gemini 1.0 Pro Vision\n",
            "Description: The original Gemini 1.0 Pro Vision model version.\n",
            "Generation methods: [generateContent, countTokens]\n",
            "--------------------------------------------------\n",
        )
    );
}

#[tokio::test]
async fn listing_failure_is_an_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/v1beta/models"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;
    let client = build_gemini_client(&server.uri());

    let mut out = Vec::new();
    let err = print_models(client.models().stream(), &ModelFilter::All, &mut out)
        .await
        .unwrap_err();
    assert!(err.is_remote());
    assert!(out.is_empty());
}

#[tokio::test]
async fn successful_probe_prints_test_response() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("Hello there!")))
        .expect(1)
        .mount(&server)
        .await;
    let client = build_gemini_client(&server.uri());

    let outcome = request_text(&client.models(), DEFAULT_MODEL, DEFAULT_PROMPT).await;
    assert_eq!(outcome, ProbeOutcome::Response("Hello there!".into()));

    let mut out = Vec::new();
    print_outcome(&outcome, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().any(|line| line == "Test response: Hello there!"));
}

#[tokio::test]
async fn failing_probe_prints_error_and_returns() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-pro:generateContent"))
        .respond_with(ResponseTemplate::new(503).set_body_json(json!({
            "error": {"code": 503, "message": "The model is overloaded.", "status": "UNAVAILABLE"}
        })))
        .mount(&server)
        .await;
    let client = build_gemini_client(&server.uri());

    let outcome = request_text(&client.models(), DEFAULT_MODEL, DEFAULT_PROMPT).await;
    let expected = "API error (status 503): The model is overloaded.";
    assert_eq!(outcome, ProbeOutcome::Failed(expected.into()));
    assert!(!outcome.is_success());

    let mut out = Vec::new();
    print_outcome(&outcome, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert!(text.lines().any(|line| line == format!("Error: {expected}")));
}

#[tokio::test]
async fn unreachable_service_is_reported_not_raised() {
    let client = build_gemini_client("http://127.0.0.1:1");

    let outcome = request_text(&client.models(), DEFAULT_MODEL, DEFAULT_PROMPT).await;
    match outcome {
        ProbeOutcome::Failed(message) => assert!(message.starts_with("HTTP client error")),
        ProbeOutcome::Response(text) => panic!("unexpected response: {text}"),
    }
}
