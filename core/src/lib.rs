//! Typed async client for the governance platform's REST API.
//!
//! # Overview
//! [`HttpClient`] turns a [`RequestDescriptor`] into an [`HttpRequest`],
//! sends it through a [`Transport`] and decodes the [`HttpResponse`]. The
//! endpoint catalog in [`api`] is a thin layer of one method per backend
//! route on top of that single path.
//!
//! # Design
//! - Preparation and parsing never touch the network. The default transport
//!   is reqwest; tests and embedding hosts can supply their own.
//! - Auth is pluggable: a [`SecurityWorker`] turns the client's security
//!   data into headers on every secure call. [`Session`] owns the credential
//!   lifecycle (load, refresh after 401, logout).
//! - JSON bodies are stripped of `null`, `""` and `[]` fields before they are
//!   sent. Failures are returned once; nothing is retried.
//! - DTOs in [`types`] are plain serde structs and carry no behaviour.

pub mod api;
pub mod client;
pub mod config;
pub mod encode;
pub mod error;
pub mod headers;
pub mod http;
pub mod outcome;
pub mod sanitize;
pub mod security;
pub mod sequence;
pub mod session;
pub mod token_store;
pub mod transport;
pub mod types;

pub use client::{HttpClient, HttpClientBuilder, RequestDescriptor};
pub use config::ClientConfig;
pub use error::{ApiError, ConfigError, ErrorKind};
pub use http::{
    ContentType, FilePart, HttpMethod, HttpRequest, HttpResponse, RequestBody, ResponseFormat,
};
pub use outcome::{FetchOutcome, IsEmpty};
pub use sanitize::sanitize_json;
pub use security::{ApiKeyAuth, AuthToken, BearerAuth, RequestParams, SecurityWorker};
pub use sequence::{RequestSequencer, Sequenced, Ticket};
pub use session::Session;
pub use token_store::{CredentialProvider, StaticCredentials, TokenStore};
pub use transport::{ReqwestTransport, Transport};
