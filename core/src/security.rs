//! Security data and the worker that turns it into request parameters.
//!
//! The client holds an optional piece of security data (by default an
//! [`AuthToken`]). Before a secure request is sent, the configured
//! [`SecurityWorker`] receives a snapshot of that data and returns extra
//! [`RequestParams`], typically an `Authorization` header.

use std::fmt;
use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::ApiError;

/// Bearer token issued by the auth service.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthToken {
    pub token: String,
}

impl AuthToken {
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
        }
    }
}

// Keeps tokens out of logs and panic messages.
impl fmt::Debug for AuthToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AuthToken").field("token", &"<redacted>").finish()
    }
}

/// Per-request overrides contributed by a security worker.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestParams {
    pub headers: Vec<(String, String)>,
    pub timeout: Option<Duration>,
}

impl RequestParams {
    pub fn header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }
}

/// Resolves security data into request parameters.
///
/// Called once per secure request with the data snapshot taken when the
/// request started. `None` means no data has been set; returning empty
/// params sends the request unauthenticated.
#[async_trait]
pub trait SecurityWorker<S>: Send + Sync + 'static {
    async fn resolve(&self, data: Option<&S>) -> Result<RequestParams, ApiError>;
}

/// Sends `Authorization: Bearer <token>` when a token is set.
#[derive(Debug, Clone, Copy, Default)]
pub struct BearerAuth;

#[async_trait]
impl SecurityWorker<AuthToken> for BearerAuth {
    async fn resolve(&self, data: Option<&AuthToken>) -> Result<RequestParams, ApiError> {
        Ok(match data {
            Some(t) if !t.token.is_empty() => {
                RequestParams::default().header("Authorization", format!("Bearer {}", t.token))
            }
            _ => RequestParams::default(),
        })
    }
}

/// Puts the token in a custom header, e.g. `X-API-Key`.
#[derive(Debug, Clone)]
pub struct ApiKeyAuth {
    header: String,
}

impl ApiKeyAuth {
    pub fn new(header: impl Into<String>) -> Self {
        Self {
            header: header.into(),
        }
    }
}

#[async_trait]
impl SecurityWorker<AuthToken> for ApiKeyAuth {
    async fn resolve(&self, data: Option<&AuthToken>) -> Result<RequestParams, ApiError> {
        Ok(match data {
            Some(t) if !t.token.is_empty() => {
                RequestParams::default().header(self.header.clone(), t.token.clone())
            }
            _ => RequestParams::default(),
        })
    }
}
