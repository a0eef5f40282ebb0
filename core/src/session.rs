//! Credential lifecycle around an [`HttpClient`].
//!
//! `start` loads credentials once, a 401 triggers a provider refresh that
//! applies to later calls, and `logout` clears both the provider and the
//! client. The rejected call itself is never replayed.

use serde::de::DeserializeOwned;
use tokio::sync::Mutex;

use crate::client::{HttpClient, RequestDescriptor};
use crate::error::ApiError;
use crate::token_store::CredentialProvider;

pub struct Session<P> {
    client: HttpClient,
    provider: P,
    refresh_lock: Mutex<()>,
}

impl<P: CredentialProvider> Session<P> {
    pub fn new(client: HttpClient, provider: P) -> Self {
        Self {
            client,
            provider,
            refresh_lock: Mutex::new(()),
        }
    }

    pub fn client(&self) -> &HttpClient {
        &self.client
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Loads credentials into the client. Returns whether a token was found.
    pub async fn start(&self) -> Result<bool, ApiError> {
        let token = self.provider.load().await?;
        let found = token.is_some();
        self.client.set_security_data(token);
        tracing::debug!(authenticated = found, "session started");
        Ok(found)
    }

    pub async fn logout(&self) -> Result<(), ApiError> {
        self.client.set_security_data(None);
        self.provider.clear().await
    }

    /// Passes `result` through, refreshing credentials first when it is a 401.
    pub async fn observe<T>(&self, result: Result<T, ApiError>) -> Result<T, ApiError> {
        if let Err(ApiError::Unauthorized { .. }) = &result {
            self.refresh_after_rejection().await;
        }
        result
    }

    /// [`HttpClient::request`] with 401 handling.
    pub async fn request<T: DeserializeOwned>(
        &self,
        descriptor: RequestDescriptor,
    ) -> Result<T, ApiError> {
        let result = self.client.request(descriptor).await;
        self.observe(result).await
    }

    async fn refresh_after_rejection(&self) {
        let _guard = self.refresh_lock.lock().await;
        match self.provider.refresh().await {
            Ok(token) => {
                tracing::info!(
                    authenticated = token.is_some(),
                    "credentials refreshed after 401"
                );
                self.client.set_security_data(token);
            }
            Err(err) => {
                tracing::warn!(%err, "credential refresh failed; keeping current token");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::client::tests::RecordingTransport;
    use crate::config::ClientConfig;
    use crate::http::HttpResponse;
    use crate::security::{AuthToken, BearerAuth};
    use crate::token_store::TokenStore;
    use serde_json::Value;

    fn unauthorized() -> Result<HttpResponse, ApiError> {
        Ok(HttpResponse {
            status: 401,
            headers: Vec::new(),
            body: "token expired".to_string(),
        })
    }

    fn session(
        transport: std::sync::Arc<RecordingTransport>,
        store: TokenStore,
    ) -> Session<TokenStore> {
        let client = HttpClient::builder(ClientConfig::new("http://h").with_secure(true))
            .security_worker(BearerAuth)
            .shared_transport(transport)
            .build()
            .unwrap();
        Session::new(client, store)
    }

    #[tokio::test]
    async fn start_installs_stored_token() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("openg_auth.json"));
        store.write(&AuthToken::new("boot")).unwrap();

        let transport = RecordingTransport::respond(Vec::new());
        let session = session(transport.clone(), store);
        assert!(session.start().await.unwrap());

        let _: Value = session.request(RequestDescriptor::get("/auth/api/v1/me")).await.unwrap();
        assert_eq!(transport.calls()[0].header("Authorization"), Some("Bearer boot"));
    }

    #[tokio::test]
    async fn unauthorized_refreshes_for_next_call_without_replay() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("openg_auth.json"));
        store.write(&AuthToken::new("stale")).unwrap();

        let transport = RecordingTransport::respond(vec![unauthorized()]);
        let session = session(transport.clone(), store.clone());
        session.start().await.unwrap();

        // The login flow writes a fresh token while the stale one is in use.
        store.write(&AuthToken::new("fresh")).unwrap();

        let err = session
            .request::<Value>(RequestDescriptor::get("/auth/api/v1/me"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Unauthorized { .. }));
        assert_eq!(transport.calls().len(), 1);

        let _: Value = session.request(RequestDescriptor::get("/auth/api/v1/me")).await.unwrap();
        let calls = transport.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0].header("Authorization"), Some("Bearer stale"));
        assert_eq!(calls[1].header("Authorization"), Some("Bearer fresh"));
    }

    #[tokio::test]
    async fn logout_clears_store_and_client() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("openg_auth.json"));
        store.write(&AuthToken::new("t")).unwrap();

        let session = session(RecordingTransport::respond(Vec::new()), store.clone());
        session.start().await.unwrap();
        session.logout().await.unwrap();

        assert!(session.client().security_data().is_none());
        assert!(store.read().unwrap().is_none());
    }

    #[tokio::test]
    async fn start_without_token_is_anonymous() {
        let dir = tempfile::TempDir::new().unwrap();
        let store = TokenStore::new(dir.path().join("openg_auth.json"));
        let session = session(RecordingTransport::respond(Vec::new()), store);
        assert!(!session.start().await.unwrap());
    }
}
