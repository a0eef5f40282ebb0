//! Checks the client against the JSON vectors in `test-vectors/`.
//!
//! Each endpoint vector names a catalog call, its input, the wire request it
//! must produce and a simulated response. Bodies are compared as parsed
//! JSON, so key order in the vector files does not matter.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use governance_client::headers::merge_layers;
use governance_client::types::compliance::GetFindingsRequest;
use governance_client::types::integration::ListCredentialsQuery;
use governance_client::types::schedule::{ListJobsRequest, TriggerComplianceQuery};
use governance_client::{
    sanitize_json, ApiError, AuthToken, BearerAuth, ClientConfig, ErrorKind, HttpClient,
    HttpMethod, HttpRequest, HttpResponse, RequestBody, Transport,
};
use pretty_assertions::assert_eq;
use serde_json::Value;

fn pairs(value: &Value) -> Vec<(String, String)> {
    value
        .as_array()
        .unwrap()
        .iter()
        .map(|pair| {
            let pair = pair.as_array().unwrap();
            (
                pair[0].as_str().unwrap().to_string(),
                pair[1].as_str().unwrap().to_string(),
            )
        })
        .collect()
}

fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "PATCH" => HttpMethod::Patch,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_kind(s: &str) -> ErrorKind {
    match s {
        "Unauthorized" => ErrorKind::Unauthorized,
        "NotFound" => ErrorKind::NotFound,
        "Validation" => ErrorKind::Validation,
        "Server" => ErrorKind::Server,
        other => panic!("unknown error kind: {other}"),
    }
}

// ---------------------------------------------------------------------------
// Sanitization
// ---------------------------------------------------------------------------

#[test]
fn sanitize_vectors() {
    let raw = include_str!("../../test-vectors/sanitize.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let once = sanitize_json(&case["input"]);
        assert_eq!(once, case["expected"], "{name}");
        assert_eq!(sanitize_json(&once), once, "{name}: idempotent");
    }
}

// ---------------------------------------------------------------------------
// Header layering
// ---------------------------------------------------------------------------

#[test]
fn header_vectors() {
    let raw = include_str!("../../test-vectors/headers.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let layers: Vec<Vec<(String, String)>> = case["layers"]
            .as_array()
            .unwrap()
            .iter()
            .map(pairs)
            .collect();
        let merged = merge_layers(layers.iter().map(Vec::as_slice));
        assert_eq!(merged, pairs(&case["expected"]), "{name}");
    }
}

// ---------------------------------------------------------------------------
// Endpoint catalog
// ---------------------------------------------------------------------------

/// Answers with one canned response and keeps the request it was given.
struct CaptureTransport {
    response: HttpResponse,
    seen: Mutex<Vec<HttpRequest>>,
}

#[async_trait]
impl Transport for CaptureTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.seen.lock().unwrap().push(request);
        Ok(self.response.clone())
    }
}

/// Runs the named catalog call and reduces the result to `Ok(())` or its
/// error kind.
async fn call(client: &HttpClient, case: &Value) -> Result<(), ErrorKind> {
    let input = case["input"].clone();
    let result = match case["name"].as_str().unwrap() {
        "list_credentials" => {
            let query: ListCredentialsQuery = serde_json::from_value(input).unwrap();
            let page = client.integration().list_credentials(&query).await;
            page.map(|p| assert_eq!(p.total_count, p.credentials.len() as u64))
        }
        "get_findings" => {
            let body: GetFindingsRequest = serde_json::from_value(input).unwrap();
            client.compliance().get_findings(&body).await.map(|_| ())
        }
        "list_jobs" => {
            let body: ListJobsRequest = serde_json::from_value(input).unwrap();
            client.schedule().list_jobs(&body).await.map(|_| ())
        }
        "trigger_compliance" => {
            let query: TriggerComplianceQuery = serde_json::from_value(input).unwrap();
            let benchmark = case["path_param"].as_str().unwrap();
            client
                .schedule()
                .trigger_compliance(benchmark, &query)
                .await
                .map(|_| ())
        }
        "me" => client.auth().me().await.map(|_| ()),
        "list_workspaces" => client.workspace().list_workspaces().await.map(|_| ()),
        other => panic!("no catalog call for vector {other}"),
    };
    result.map_err(|e| e.kind())
}

#[tokio::test]
async fn endpoint_vectors() {
    let raw = include_str!("../../test-vectors/endpoints.json");
    let vectors: Value = serde_json::from_str(raw).unwrap();
    let base_url = vectors["base_url"].as_str().unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let sim = &case["simulated_response"];
        let transport = Arc::new(CaptureTransport {
            response: HttpResponse {
                status: sim["status"].as_u64().unwrap() as u16,
                headers: Vec::new(),
                body: sim["body"].as_str().unwrap().to_string(),
            },
            seen: Mutex::new(Vec::new()),
        });
        let client = HttpClient::builder(ClientConfig::new(base_url))
            .security_worker(BearerAuth)
            .security_data(AuthToken::new("vector-token"))
            .shared_transport(transport.clone())
            .build()
            .unwrap();

        let outcome = call(&client, case).await;
        match case["expected_error_kind"].as_str() {
            Some(kind) => assert_eq!(outcome, Err(parse_kind(kind)), "{name}: outcome"),
            None => assert_eq!(outcome, Ok(()), "{name}: outcome"),
        }

        let seen = transport.seen.lock().unwrap();
        assert_eq!(seen.len(), 1, "{name}: exactly one transport call");
        let req = &seen[0];
        let expected = &case["expected_request"];

        assert_eq!(
            req.method,
            parse_method(expected["method"].as_str().unwrap()),
            "{name}: method"
        );
        assert_eq!(
            req.url,
            format!("{base_url}{}", expected["path"].as_str().unwrap()),
            "{name}: url"
        );
        assert_eq!(req.query, pairs(&expected["query"]), "{name}: query");
        assert_eq!(
            req.header("Authorization"),
            Some("Bearer vector-token"),
            "{name}: auth"
        );

        match (&req.body, &expected["body"]) {
            (None, Value::Null) => {}
            (Some(RequestBody::Json(text)), want) => {
                let got: Value = serde_json::from_str(text).unwrap();
                assert_eq!(&got, want, "{name}: body");
                assert_eq!(
                    req.header("Content-Type"),
                    Some("application/json"),
                    "{name}: content type"
                );
            }
            (got, want) => panic!("{name}: body mismatch, got {got:?}, want {want}"),
        }
    }
}
