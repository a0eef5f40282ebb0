//! Executes prepared requests.
//!
//! [`Transport`] is the single I/O seam of the crate. [`ReqwestTransport`]
//! is the bundled async implementation; tests and hosts with their own HTTP
//! stack plug in anything else. A transport returns every HTTP status as a
//! response and reserves `Err` for requests that got no response at all.

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};

use crate::error::ApiError;
use crate::http::{FormValue, HttpMethod, HttpRequest, HttpResponse, RequestBody};

#[async_trait]
pub trait Transport: Send + Sync + 'static {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError>;
}

#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    http: reqwest::Client,
}

impl ReqwestTransport {
    pub fn new(user_agent: &str) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { http })
    }

    /// Wraps an existing client, e.g. one with custom TLS roots.
    pub fn with_client(http: reqwest::Client) -> Self {
        Self { http }
    }
}

fn reqwest_method(method: HttpMethod) -> reqwest::Method {
    match method {
        HttpMethod::Get => reqwest::Method::GET,
        HttpMethod::Post => reqwest::Method::POST,
        HttpMethod::Put => reqwest::Method::PUT,
        HttpMethod::Patch => reqwest::Method::PATCH,
        HttpMethod::Delete => reqwest::Method::DELETE,
    }
}

fn multipart_form(fields: Vec<crate::http::FormField>) -> Result<Form, ApiError> {
    let mut form = Form::new();
    for field in fields {
        form = match field.value {
            FormValue::Text(value) => form.text(field.name, value),
            FormValue::File(file) => {
                let mut part = Part::bytes(file.bytes).file_name(file.file_name);
                if let Some(mime) = file.mime {
                    part = part.mime_str(&mime)?;
                }
                form.part(field.name, part)
            }
        };
    }
    Ok(form)
}

#[async_trait]
impl Transport for ReqwestTransport {
    async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let HttpRequest {
            method,
            url,
            query,
            headers,
            body,
            timeout,
        } = request;

        let is_multipart = matches!(body, Some(RequestBody::Form(_)));
        let mut builder = self.http.request(reqwest_method(method), &url);
        if !query.is_empty() {
            builder = builder.query(&query);
        }
        for (name, value) in &headers {
            // reqwest writes the multipart content type with its boundary.
            if is_multipart && name.eq_ignore_ascii_case("content-type") {
                continue;
            }
            builder = builder.header(name.as_str(), value.as_str());
        }
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        builder = match body {
            None => builder,
            Some(RequestBody::Json(text)) | Some(RequestBody::Text(text)) => builder.body(text),
            Some(RequestBody::UrlEncoded(pairs)) => builder.form(&pairs),
            Some(RequestBody::Form(fields)) => builder.multipart(multipart_form(fields)?),
        };

        let response = builder.send().await?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .filter_map(|(k, v)| v.to_str().ok().map(|v| (k.to_string(), v.to_string())))
            .collect();
        let body = response.text().await?;
        tracing::debug!(%method, %url, status, "transport round-trip complete");

        Ok(HttpResponse {
            status,
            headers,
            body,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::{FilePart, FormField};

    #[test]
    fn methods_map_to_reqwest() {
        assert_eq!(reqwest_method(HttpMethod::Patch), reqwest::Method::PATCH);
        assert_eq!(reqwest_method(HttpMethod::Delete), reqwest::Method::DELETE);
    }

    #[test]
    fn multipart_rejects_bad_mime() {
        let fields = vec![FormField::file(
            "file",
            FilePart::new("a.bin", vec![1, 2]).with_mime("not a mime"),
        )];
        assert!(matches!(
            multipart_form(fields),
            Err(ApiError::Transport(_))
        ));
    }

    #[test]
    fn builds_with_user_agent() {
        assert!(ReqwestTransport::new("governance-client/test").is_ok());
    }
}
