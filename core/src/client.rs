//! Request preparation, execution and response parsing.
//!
//! # Design
//! Every endpoint method funnels through [`HttpClient::request`], which is
//! `prepare` → [`Transport::execute`] → `parse_response`. `prepare` resolves
//! auth, merges headers and encodes the body; `parse_response` checks the
//! status and decodes the payload. Neither touches the network, so a host
//! can run the round-trip itself and still share the contract.
//!
//! Header precedence, lowest first: client defaults, per-method defaults,
//! call headers, security-worker headers, content type.

use std::sync::{Arc, PoisonError, RwLock};
use std::time::Duration;

use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::Value;

use crate::config::ClientConfig;
use crate::encode::{encode_body, encode_query};
use crate::error::ApiError;
use crate::headers::{merge_layers, set_header};
use crate::http::{
    ContentType, FilePart, HttpMethod, HttpRequest, HttpResponse, ResponseFormat,
};
use crate::security::{AuthToken, RequestParams, SecurityWorker};
use crate::transport::{ReqwestTransport, Transport};

/// Everything an endpoint knows about one call.
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    pub method: HttpMethod,
    /// Path relative to the base URL, already interpolated.
    pub path: String,
    pub query: Vec<(String, String)>,
    pub body: Option<Value>,
    pub files: Vec<(String, FilePart)>,
    /// Defaults to JSON when a body is present.
    pub content_type: Option<ContentType>,
    /// Overrides the client's default `secure` flag.
    pub secure: Option<bool>,
    pub format: ResponseFormat,
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestDescriptor {
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            query: Vec::new(),
            body: None,
            files: Vec::new(),
            content_type: None,
            secure: None,
            format: ResponseFormat::Json,
            headers: Vec::new(),
            timeout: None,
        }
    }

    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    pub fn patch(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Patch, path)
    }

    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Appends the fields of a serializable query object.
    pub fn query<Q: Serialize + ?Sized>(mut self, query: &Q) -> Result<Self, ApiError> {
        self.query.extend(encode_query(query)?);
        Ok(self)
    }

    pub fn query_param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.query.push((key.into(), value.to_string()));
        self
    }

    /// Sets a JSON body. It is sanitized when the request is prepared.
    pub fn json<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(
            serde_json::to_value(body).map_err(|e| ApiError::SerializationError(e.to_string()))?,
        );
        self.content_type = Some(ContentType::Json);
        Ok(self)
    }

    /// Sets a multipart body from the top-level fields of `body`.
    pub fn form<B: Serialize + ?Sized>(mut self, body: &B) -> Result<Self, ApiError> {
        self.body = Some(
            serde_json::to_value(body).map_err(|e| ApiError::SerializationError(e.to_string()))?,
        );
        self.content_type = Some(ContentType::FormData);
        Ok(self)
    }

    /// Attaches a file part; switches the body to multipart.
    pub fn file(mut self, name: impl Into<String>, part: FilePart) -> Self {
        self.files.push((name.into(), part));
        self.content_type = Some(ContentType::FormData);
        self
    }

    pub fn text(mut self, body: impl Into<String>) -> Self {
        self.body = Some(Value::String(body.into()));
        self.content_type = Some(ContentType::Text);
        self
    }

    /// Sets a raw body with an explicit content type.
    pub fn body(mut self, body: Value, content_type: ContentType) -> Self {
        self.body = Some(body);
        self.content_type = Some(content_type);
        self
    }

    pub fn secure(mut self, secure: bool) -> Self {
        self.secure = Some(secure);
        self
    }

    pub fn format(mut self, format: ResponseFormat) -> Self {
        self.format = format;
        self
    }

    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Typed client for the governance API.
///
/// `S` is the security data handed to the security worker; most callers use
/// the default [`AuthToken`].
pub struct HttpClient<S = AuthToken> {
    config: ClientConfig,
    base_url: String,
    security_data: RwLock<Option<S>>,
    security_worker: Option<Arc<dyn SecurityWorker<S>>>,
    transport: Arc<dyn Transport>,
}

impl<S> std::fmt::Debug for HttpClient<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("HttpClient")
            .field("base_url", &self.base_url)
            .field("secure", &self.config.secure)
            .field("has_security_worker", &self.security_worker.is_some())
            .finish_non_exhaustive()
    }
}

impl HttpClient {
    /// Starts building a client that uses [`AuthToken`] security data.
    pub fn builder(config: ClientConfig) -> HttpClientBuilder<AuthToken> {
        HttpClientBuilder::new(config)
    }
}

/// Builder for [`HttpClient`].
pub struct HttpClientBuilder<S> {
    config: ClientConfig,
    security_data: Option<S>,
    security_worker: Option<Arc<dyn SecurityWorker<S>>>,
    transport: Option<Arc<dyn Transport>>,
}

impl<S> HttpClientBuilder<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn new(config: ClientConfig) -> Self {
        Self {
            config,
            security_data: None,
            security_worker: None,
            transport: None,
        }
    }

    pub fn security_worker(mut self, worker: impl SecurityWorker<S>) -> Self {
        self.security_worker = Some(Arc::new(worker));
        self
    }

    pub fn security_data(mut self, data: S) -> Self {
        self.security_data = Some(data);
        self
    }

    /// Replaces the default reqwest transport.
    pub fn transport(mut self, transport: impl Transport) -> Self {
        self.transport = Some(Arc::new(transport));
        self
    }

    pub fn shared_transport(mut self, transport: Arc<dyn Transport>) -> Self {
        self.transport = Some(transport);
        self
    }

    pub fn build(self) -> Result<HttpClient<S>, ApiError> {
        let base_url = self.config.parsed_base_url()?;
        self.config.validate()?;
        let transport = match self.transport {
            Some(t) => t,
            None => Arc::new(ReqwestTransport::new(&self.config.user_agent)?),
        };
        Ok(HttpClient {
            base_url: base_url.as_str().trim_end_matches('/').to_string(),
            config: self.config,
            security_data: RwLock::new(self.security_data),
            security_worker: self.security_worker,
            transport,
        })
    }
}

impl<S> HttpClient<S>
where
    S: Clone + Send + Sync + 'static,
{
    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Replaces the security data used by requests prepared from now on.
    pub fn set_security_data(&self, data: Option<S>) {
        *self
            .security_data
            .write()
            .unwrap_or_else(PoisonError::into_inner) = data;
    }

    pub fn security_data(&self) -> Option<S> {
        self.security_data
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    fn url_for(&self, path: &str) -> String {
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }

    async fn security_params(&self, secure: bool, path: &str) -> Result<RequestParams, ApiError> {
        if !secure {
            return Ok(RequestParams::default());
        }
        match &self.security_worker {
            Some(worker) => {
                let snapshot = self.security_data();
                worker.resolve(snapshot.as_ref()).await
            }
            None => {
                tracing::warn!(
                    path,
                    "secure request without a security worker; sending unauthenticated"
                );
                Ok(RequestParams::default())
            }
        }
    }

    /// Resolves a descriptor into a wire-ready request.
    pub async fn prepare(&self, descriptor: RequestDescriptor) -> Result<HttpRequest, ApiError> {
        let secure = descriptor.secure.unwrap_or(self.config.secure);
        let params = self.security_params(secure, &descriptor.path).await?;

        let client_headers = self.config.default_headers();
        let verb_headers = self.config.verb_default_headers(descriptor.method);
        let mut headers = merge_layers([
            client_headers.as_slice(),
            verb_headers.as_slice(),
            descriptor.headers.as_slice(),
            params.headers.as_slice(),
        ]);

        let has_payload = descriptor.body.is_some() || !descriptor.files.is_empty();
        let content_type = if has_payload {
            Some(descriptor.content_type.unwrap_or_default())
        } else {
            None
        };
        let body = match content_type {
            Some(ct) => {
                let value = descriptor.body.as_ref().unwrap_or(&Value::Null);
                Some(encode_body(ct, value, &descriptor.files)?)
            }
            None => None,
        };
        if let Some(ct) = content_type {
            if ct != ContentType::FormData {
                set_header(&mut headers, "Content-Type", ct.mime());
            }
        }

        let timeout = params
            .timeout
            .or(descriptor.timeout)
            .or_else(|| self.config.timeout());

        Ok(HttpRequest {
            method: descriptor.method,
            url: self.url_for(&descriptor.path),
            query: descriptor.query,
            headers,
            body,
            timeout,
        })
    }

    /// Checks the status and decodes the body as `format` says.
    pub fn parse_response<T: DeserializeOwned>(
        &self,
        response: HttpResponse,
        format: ResponseFormat,
    ) -> Result<T, ApiError> {
        if !response.is_success() {
            return Err(ApiError::from_status(response.status, response.body));
        }
        let decoded = match format {
            ResponseFormat::Json if response.body.trim().is_empty() => {
                serde_json::from_value(Value::Null)
            }
            ResponseFormat::Json => serde_json::from_str(&response.body),
            ResponseFormat::Text => serde_json::from_value(Value::String(response.body)),
            ResponseFormat::Empty => serde_json::from_value(Value::Null),
        };
        decoded.map_err(|e| ApiError::DeserializationError(e.to_string()))
    }

    /// Sends a prepared request through the transport, exactly once.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        self.transport.execute(request).await
    }

    /// Prepares, sends and decodes one call. Failures are returned as is;
    /// nothing is retried.
    #[tracing::instrument(
        name = "api_request",
        skip_all,
        fields(method = %descriptor.method, path = %descriptor.path)
    )]
    pub async fn request<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let format = descriptor.format;
        let prepared = self.prepare(descriptor).await?;
        let response = self.execute(prepared).await?;
        tracing::debug!(status = response.status, "response received");
        if response.status == 401 {
            tracing::warn!("request rejected as unauthorized");
        }
        self.parse_response(response, format)
    }
}
