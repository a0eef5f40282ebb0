//! In-memory stand-in for the governance backend.
//!
//! Serves a handful of routes with the same wire shapes as the real
//! services so the client can be exercised end to end. Every route
//! requires `Authorization: Bearer <token>` and answers 401 otherwise.

use std::sync::Arc;

use axum::{
    extract::{Path, Query, Request, State},
    http::{header, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{delete, get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use uuid::Uuid;

/// Token accepted by [`app`].
pub const DEMO_TOKEN: &str = "demo-token";

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Credential {
    pub id: Uuid,
    pub connector_type: String,
    pub name: String,
    pub health_status: String,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCredential {
    pub connector_type: String,
    pub name: String,
    #[serde(default)]
    pub config: Value,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialQuery {
    pub connector: Option<String>,
    pub page_size: Option<usize>,
    pub page_number: Option<usize>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Finding {
    pub id: String,
    #[serde(rename = "benchmarkID")]
    pub benchmark_id: String,
    pub connector: String,
    pub severity: String,
    pub conformance_status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub id: u64,
    #[serde(rename = "type")]
    pub job_type: String,
    pub title: String,
    pub status: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Workspace {
    pub id: String,
    pub name: String,
    pub status: String,
}

#[derive(Debug, Default)]
pub struct Backend {
    pub token: String,
    pub credentials: Vec<Credential>,
    pub findings: Vec<Finding>,
    pub jobs: Vec<Job>,
    pub workspaces: Vec<Workspace>,
}

impl Backend {
    /// A backend with a few AWS and Azure records.
    pub fn seeded(token: impl Into<String>) -> Self {
        let credential = |connector: &str, name: &str| Credential {
            id: Uuid::new_v4(),
            connector_type: connector.to_string(),
            name: name.to_string(),
            health_status: "healthy".to_string(),
        };
        let finding = |id: &str, connector: &str, severity: &str, status: &str| Finding {
            id: id.to_string(),
            benchmark_id: "baseline".to_string(),
            connector: connector.to_string(),
            severity: severity.to_string(),
            conformance_status: status.to_string(),
        };
        Self {
            token: token.into(),
            credentials: vec![
                credential("AWS", "aws-prod"),
                credential("AWS", "aws-staging"),
                credential("Azure", "azure-main"),
                credential("AWS", "aws-sandbox"),
            ],
            findings: vec![
                finding("f-1", "AWS", "high", "failed"),
                finding("f-2", "AWS", "low", "passed"),
                finding("f-3", "Azure", "critical", "failed"),
            ],
            jobs: vec![Job {
                id: 1,
                job_type: "discovery".to_string(),
                title: "aws-prod".to_string(),
                status: "SUCCEEDED".to_string(),
            }],
            workspaces: vec![Workspace {
                id: "ws-1".to_string(),
                name: "main".to_string(),
                status: "PROVISIONED".to_string(),
            }],
        }
    }
}

pub type Db = Arc<RwLock<Backend>>;

pub fn app() -> Router {
    app_with(Backend::seeded(DEMO_TOKEN))
}

pub fn app_with(backend: Backend) -> Router {
    let db: Db = Arc::new(RwLock::new(backend));
    Router::new()
        .route("/auth/api/v1/me", get(me))
        .route(
            "/integration/api/v1/credentials",
            get(list_credentials).post(create_credential),
        )
        .route(
            "/integration/api/v1/credentials/{id}",
            delete(delete_credential),
        )
        .route("/compliance/api/v1/findings", post(get_findings))
        .route("/schedule/api/v1/jobs", post(list_jobs))
        .route("/workspace/api/v1/workspaces", get(list_workspaces))
        .route_layer(middleware::from_fn_with_state(db.clone(), require_bearer))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn require_bearer(State(db): State<Db>, request: Request, next: Next) -> Response {
    let expected = format!("Bearer {}", db.read().await.token);
    let presented = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok());
    if presented != Some(expected.as_str()) {
        tracing::info!(path = %request.uri().path(), "rejecting unauthenticated request");
        return (StatusCode::UNAUTHORIZED, "missing or invalid bearer token").into_response();
    }
    next.run(request).await
}

async fn me() -> Json<Value> {
    Json(json!({
        "id": "local|admin",
        "userName": "admin",
        "email": "admin@example.com",
        "role": "admin"
    }))
}

async fn list_credentials(
    State(db): State<Db>,
    Query(query): Query<CredentialQuery>,
) -> Json<Value> {
    let backend = db.read().await;
    let matching: Vec<&Credential> = backend
        .credentials
        .iter()
        .filter(|c| query.connector.as_deref().map_or(true, |k| c.connector_type == k))
        .collect();
    let size = query.page_size.unwrap_or(20).max(1);
    let number = query.page_number.unwrap_or(1).max(1);
    let page: Vec<&Credential> = matching
        .iter()
        .skip((number - 1).saturating_mul(size))
        .take(size)
        .copied()
        .collect();
    Json(json!({"credentials": page, "totalCount": matching.len()}))
}

async fn create_credential(
    State(db): State<Db>,
    Json(input): Json<CreateCredential>,
) -> (StatusCode, Json<Value>) {
    let credential = Credential {
        id: Uuid::new_v4(),
        connector_type: input.connector_type,
        name: input.name,
        health_status: if input.config.is_null() {
            "unhealthy".to_string()
        } else {
            "healthy".to_string()
        },
    };
    let id = credential.id;
    db.write().await.credentials.push(credential);
    (StatusCode::CREATED, Json(json!({ "id": id })))
}

async fn delete_credential(State(db): State<Db>, Path(id): Path<Uuid>) -> StatusCode {
    let mut backend = db.write().await;
    let before = backend.credentials.len();
    backend.credentials.retain(|c| c.id != id);
    if backend.credentials.len() == before {
        StatusCode::NOT_FOUND
    } else {
        StatusCode::NO_CONTENT
    }
}

/// Rejects filters that are present but empty, the way the real search
/// backend does.
async fn get_findings(
    State(db): State<Db>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, (StatusCode, String)> {
    let filters = body.get("filters").and_then(Value::as_object);
    if let Some(filters) = filters {
        for (key, value) in filters {
            let empty = match value {
                Value::Null => true,
                Value::String(s) => s.is_empty(),
                Value::Array(items) => items.is_empty(),
                _ => false,
            };
            if empty {
                return Err((StatusCode::BAD_REQUEST, format!("empty filter: {key}")));
            }
        }
    }

    let wanted = |key: &str| -> Option<Vec<String>> {
        filters?.get(key)?.as_array().map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
    };
    let connectors = wanted("connector");
    let severities = wanted("severity");

    let backend = db.read().await;
    let findings: Vec<&Finding> = backend
        .findings
        .iter()
        .filter(|f| connectors.as_ref().map_or(true, |c| c.contains(&f.connector)))
        .filter(|f| severities.as_ref().map_or(true, |s| s.contains(&f.severity)))
        .collect();
    Ok(Json(json!({"findings": findings, "totalCount": findings.len()})))
}

async fn list_jobs(State(db): State<Db>, Json(body): Json<Value>) -> Json<Value> {
    let statuses: Option<Vec<&str>> = body
        .get("statusFilter")
        .and_then(Value::as_array)
        .map(|items| items.iter().filter_map(Value::as_str).collect());
    let backend = db.read().await;
    let jobs: Vec<&Job> = backend
        .jobs
        .iter()
        .filter(|j| statuses.as_ref().map_or(true, |s| s.contains(&j.status.as_str())))
        .collect();
    Json(json!({ "jobs": jobs }))
}

async fn list_workspaces(State(db): State<Db>) -> Json<Vec<Workspace>> {
    Json(db.read().await.workspaces.clone())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn credential_uses_camel_case() {
        let credential = Credential {
            id: Uuid::nil(),
            connector_type: "AWS".to_string(),
            name: "prod".to_string(),
            health_status: "healthy".to_string(),
        };
        let json = serde_json::to_value(&credential).unwrap();
        assert_eq!(json["id"], "00000000-0000-0000-0000-000000000000");
        assert_eq!(json["connectorType"], "AWS");
        assert_eq!(json["healthStatus"], "healthy");
    }

    #[test]
    fn create_credential_config_is_optional() {
        let input: CreateCredential =
            serde_json::from_str(r#"{"connectorType":"AWS","name":"x"}"#).unwrap();
        assert!(input.config.is_null());
    }

    #[test]
    fn create_credential_rejects_missing_name() {
        let result: Result<CreateCredential, _> =
            serde_json::from_str(r#"{"connectorType":"AWS"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn seeded_backend_has_three_aws_credentials() {
        let backend = Backend::seeded("t");
        let aws = backend
            .credentials
            .iter()
            .filter(|c| c.connector_type == "AWS")
            .count();
        assert_eq!(aws, 3);
    }
}
