//! Client configuration.
//!
//! Sources, lowest precedence first:
//! 1. Built-in defaults
//! 2. `governance.toml` in the working directory (or an explicit file)
//! 3. Environment variables with the `OG_` prefix; `__` separates nested
//!    keys, so `OG_VERB_HEADERS__POST__X_TRACE=1` sets
//!    `verb_headers.post.x-trace`. Underscores in header names read from the
//!    environment become hyphens.
//!
//! `OG_BASE_URL` plays the role of the runtime-injected base URL of the web
//! client. There is no "current origin" to fall back to, so `base_url` is
//! required.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use figment::{
    providers::{Env, Format, Serialized, Toml},
    value::{Uncased, UncasedStr},
    Figment,
};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::error::ConfigError;
use crate::http::HttpMethod;

pub const CONFIG_FILE_NAME: &str = "governance.toml";
pub const ENV_PREFIX: &str = "OG_";

const DEFAULT_TIMEOUT_MS: u64 = 30_000;

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ClientConfig {
    /// Origin of the API gateway, e.g. `https://governance.example.com`.
    #[serde(default)]
    pub base_url: String,
    /// Whether endpoints that do not say otherwise require credentials.
    #[serde(default)]
    pub secure: bool,
    /// Request timeout; `0` disables it.
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
    /// Headers sent with every request.
    #[serde(default)]
    pub headers: BTreeMap<String, String>,
    /// Headers sent only with requests of a given method.
    #[serde(default)]
    pub verb_headers: VerbHeaders,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_timeout_ms() -> u64 {
    DEFAULT_TIMEOUT_MS
}

fn default_user_agent() -> String {
    format!("governance-client/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            secure: false,
            timeout_ms: DEFAULT_TIMEOUT_MS,
            headers: BTreeMap::new(),
            verb_headers: VerbHeaders::default(),
            user_agent: default_user_agent(),
        }
    }
}

/// Per-method default headers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct VerbHeaders {
    #[serde(default)]
    pub get: BTreeMap<String, String>,
    #[serde(default)]
    pub post: BTreeMap<String, String>,
    #[serde(default)]
    pub put: BTreeMap<String, String>,
    #[serde(default)]
    pub patch: BTreeMap<String, String>,
    #[serde(default)]
    pub delete: BTreeMap<String, String>,
}

impl VerbHeaders {
    pub fn for_method(&self, method: HttpMethod) -> &BTreeMap<String, String> {
        match method {
            HttpMethod::Get => &self.get,
            HttpMethod::Post => &self.post,
            HttpMethod::Put => &self.put,
            HttpMethod::Patch => &self.patch,
            HttpMethod::Delete => &self.delete,
        }
    }

    pub fn for_method_mut(&mut self, method: HttpMethod) -> &mut BTreeMap<String, String> {
        match method {
            HttpMethod::Get => &mut self.get,
            HttpMethod::Post => &mut self.post,
            HttpMethod::Put => &mut self.put,
            HttpMethod::Patch => &mut self.patch,
            HttpMethod::Delete => &mut self.delete,
        }
    }
}

impl ClientConfig {
    /// Config pointing at `base_url` with every other field defaulted.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    pub fn with_verb_header(
        mut self,
        method: HttpMethod,
        name: impl Into<String>,
        value: impl Into<String>,
    ) -> Self {
        self.verb_headers
            .for_method_mut(method)
            .insert(name.into(), value.into());
        self
    }

    pub fn with_timeout(mut self, timeout: Option<Duration>) -> Self {
        self.timeout_ms =
            timeout.map_or(0, |t| u64::try_from(t.as_millis()).unwrap_or(u64::MAX));
        self
    }

    /// Loads from defaults, `governance.toml` and `OG_*` variables, then
    /// validates.
    pub fn load() -> Result<Self, ConfigError> {
        Self::extract(Self::figment())
    }

    /// Like [`load`](Self::load) but reads the given TOML file instead of
    /// `governance.toml`. A missing file is an error here.
    pub fn load_from(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ConfigError::Figment(Box::new(figment::Error::from(format!(
                "config file not found: {}",
                path.display()
            )))));
        }
        Self::extract(Self::figment_with_file(path.to_path_buf()))
    }

    /// The provider chain, exposed so callers can stack more providers.
    pub fn figment() -> Figment {
        Self::figment_with_file(PathBuf::from(CONFIG_FILE_NAME))
    }

    fn figment_with_file(path: PathBuf) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));
        if path.exists() {
            figment = figment.merge(Toml::file(path));
        }
        figment.merge(Env::prefixed(ENV_PREFIX).split("__").map(header_env_key))
    }

    fn extract(figment: Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Checks the base URL and header names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.parsed_base_url()?;
        let all_headers = self.headers.keys().chain(
            [
                HttpMethod::Get,
                HttpMethod::Post,
                HttpMethod::Put,
                HttpMethod::Patch,
                HttpMethod::Delete,
            ]
            .into_iter()
            .flat_map(|m| self.verb_headers.for_method(m).keys()),
        );
        for name in all_headers {
            validate_header_name(name)?;
        }
        Ok(())
    }

    /// Base URL parsed and checked for an http(s) scheme.
    pub fn parsed_base_url(&self) -> Result<Url, ConfigError> {
        if self.base_url.trim().is_empty() {
            return Err(ConfigError::MissingField { field: "base_url" });
        }
        let url = Url::parse(&self.base_url).map_err(|source| ConfigError::InvalidBaseUrl {
            url: self.base_url.clone(),
            source,
        })?;
        match url.scheme() {
            "http" | "https" => Ok(url),
            _ => Err(ConfigError::InvalidBaseUrl {
                url: self.base_url.clone(),
                source: url::ParseError::RelativeUrlWithoutBase,
            }),
        }
    }

    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_ms > 0).then(|| Duration::from_millis(self.timeout_ms))
    }

    pub(crate) fn default_headers(&self) -> Vec<(String, String)> {
        self.headers
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub(crate) fn verb_default_headers(&self, method: HttpMethod) -> Vec<(String, String)> {
        self.verb_headers
            .for_method(method)
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }
}

/// Environment variable names cannot carry `-`, so the last segment of a
/// `headers.*` or `verb_headers.*` key has its underscores turned into hyphens.
fn header_env_key(key: &UncasedStr) -> Uncased<'_> {
    let key = key.as_str().to_ascii_lowercase();
    let is_header = key.starts_with("headers.") || key.starts_with("verb_headers.");
    match key.rsplit_once('.') {
        Some((parent, name)) if is_header => {
            Uncased::from(format!("{parent}.{}", name.replace('_', "-")))
        }
        _ => Uncased::from(key),
    }
}

fn validate_header_name(name: &str) -> Result<(), ConfigError> {
    let reason = if name.is_empty() {
        Some("empty name")
    } else if name.chars().any(|c| c.is_whitespace() || c == ':' || c.is_control()) {
        Some("contains whitespace, ':' or control characters")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(ConfigError::InvalidHeader {
            name: name.to_string(),
            reason: reason.to_string(),
        }),
        None => Ok(()),
    }
}
