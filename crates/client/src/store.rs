//! The remote store seam.
//!
//! [`PlanStore`] is the only way view-models reach persistent data.
//! [`HttpStore`] talks to the `plano-api` server; tests substitute an
//! in-memory implementation.

use async_trait::async_trait;
use plano_core::filter::PlanoFilter;
use plano_core::payload::{PlanoPayload, RegionalPayload, ResponsavelPayload};
use plano_core::types::DbId;
use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tokio::sync::RwLock;

use crate::config::ClientConfig;
use crate::error::StoreError;
use crate::records::{PlanoAnual, Regional, Responsavel, Session, User};

/// Header carrying the anonymous key.
const API_KEY_HEADER: &str = "apikey";

/// Operations the screens need from the store.
///
/// Every mutation is attributed by the store to the signed-in actor.
#[async_trait]
pub trait PlanStore: Send + Sync {
    // ===== Session =====

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError>;

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, StoreError>;

    /// Exchange a saved refresh token for a fresh session.
    async fn restore_session(&self, refresh_token: &str) -> Result<Session, StoreError>;

    async fn sign_out(&self) -> Result<(), StoreError>;

    // ===== Regionais =====

    /// All regionais ordered by name.
    async fn list_regionais(&self) -> Result<Vec<Regional>, StoreError>;

    async fn create_regional(&self, input: &RegionalPayload) -> Result<Regional, StoreError>;

    async fn update_regional(
        &self,
        id: DbId,
        input: &RegionalPayload,
    ) -> Result<Regional, StoreError>;

    /// Fails with [`StoreError::DependentRecords`] while responsáveis reference it.
    async fn delete_regional(&self, id: DbId) -> Result<(), StoreError>;

    // ===== Responsáveis =====

    /// All responsáveis ordered by name, each with its regional's name.
    async fn list_responsaveis(&self) -> Result<Vec<Responsavel>, StoreError>;

    async fn create_responsavel(
        &self,
        input: &ResponsavelPayload,
    ) -> Result<Responsavel, StoreError>;

    async fn update_responsavel(
        &self,
        id: DbId,
        input: &ResponsavelPayload,
    ) -> Result<Responsavel, StoreError>;

    /// Fails with [`StoreError::DependentRecords`] while plan actions reference it.
    async fn delete_responsavel(&self, id: DbId) -> Result<(), StoreError>;

    // ===== Plano anual =====

    /// Plan actions matching `filter`, latest `prazo_fim` first.
    async fn list_planos(&self, filter: &PlanoFilter) -> Result<Vec<PlanoAnual>, StoreError>;

    async fn create_plano(&self, input: &PlanoPayload) -> Result<PlanoAnual, StoreError>;

    async fn update_plano(&self, id: DbId, input: &PlanoPayload)
        -> Result<PlanoAnual, StoreError>;

    async fn delete_plano(&self, id: DbId) -> Result<(), StoreError>;
}

// ---------------------------------------------------------------------------
// HTTP implementation
// ---------------------------------------------------------------------------

#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

#[derive(Deserialize)]
struct ErrorBody {
    error: String,
    code: String,
}

#[derive(Serialize)]
struct Credentials<'a> {
    email: &'a str,
    password: &'a str,
}

/// Tokens of the live session.
struct SessionTokens {
    access: String,
    refresh: String,
}

/// Store client over the `plano-api` HTTP protocol.
///
/// Holds the tokens of the current session; they are set by sign-in, sign-up
/// and restore, and cleared by sign-out. A request rejected with 401 renews
/// the session through `/auth/refresh` once and is then retried.
pub struct HttpStore {
    client: reqwest::Client,
    base_url: String,
    anon_key: String,
    tokens: RwLock<Option<SessionTokens>>,
}

impl HttpStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self::with_client(reqwest::Client::new(), config)
    }

    /// Reuse an existing [`reqwest::Client`] (connection pool).
    pub fn with_client(client: reqwest::Client, config: &ClientConfig) -> Self {
        Self {
            client,
            base_url: format!("{}/api/v1", config.store_url.trim_end_matches('/')),
            anon_key: config.anon_key.clone(),
            tokens: RwLock::new(None),
        }
    }

    /// Adopt a session obtained elsewhere (e.g. persisted across restarts)
    /// without a round trip. An expired access token is renewed on first use.
    pub async fn resume(&self, session: &Session) {
        self.install(session).await;
    }

    fn request(&self, method: Method, path: &str, access_token: Option<&str>) -> reqwest::RequestBuilder {
        let builder = self
            .client
            .request(method, format!("{}{path}", self.base_url))
            .header(API_KEY_HEADER, &self.anon_key);
        match access_token {
            Some(token) => builder.bearer_auth(token),
            None => builder,
        }
    }

    async fn access_token(&self) -> Option<String> {
        self.tokens.read().await.as_ref().map(|t| t.access.clone())
    }

    async fn install(&self, session: &Session) {
        *self.tokens.write().await = Some(SessionTokens {
            access: session.access_token.clone(),
            refresh: session.refresh_token.clone(),
        });
    }

    async fn clear(&self) {
        *self.tokens.write().await = None;
    }

    /// Send an authenticated request built by `build`, renewing the session
    /// and retrying once if the access token is rejected.
    async fn send<F>(&self, method: Method, path: &str, build: F) -> Result<reqwest::Response, StoreError>
    where
        F: Fn(reqwest::RequestBuilder) -> reqwest::RequestBuilder + Send + Sync,
    {
        let used = self.access_token().await;
        let response = build(self.request(method.clone(), path, used.as_deref()))
            .send()
            .await?;
        if response.status() != StatusCode::UNAUTHORIZED || !self.renew(used.as_deref()).await {
            return Ok(response);
        }

        let renewed = self.access_token().await;
        Ok(build(self.request(method, path, renewed.as_deref())).send().await?)
    }

    /// Exchange the held refresh token for a new pair.
    ///
    /// `rejected` is the access token the server refused; if another request
    /// already replaced it, the current pair is used as is. A failed renewal
    /// drops the session.
    async fn renew(&self, rejected: Option<&str>) -> bool {
        let refresh = match self.tokens.read().await.as_ref() {
            Some(tokens) if Some(tokens.access.as_str()) != rejected => return true,
            Some(tokens) => tokens.refresh.clone(),
            None => return false,
        };

        let builder = self
            .request(Method::POST, "/auth/refresh", None)
            .json(&serde_json::json!({ "refresh_token": refresh }));
        match self.start_session(builder).await {
            Ok(session) => {
                tracing::debug!(user_id = session.user.id, "Session renewed");
                true
            }
            Err(err) => {
                tracing::warn!(error = %err, "Session renewal failed");
                self.clear().await;
                false
            }
        }
    }

    async fn start_session(&self, builder: reqwest::RequestBuilder) -> Result<Session, StoreError> {
        let response = Self::ensure_success(builder.send().await?).await?;
        let session: Session = response.json().await?;
        self.install(&session).await;
        Ok(session)
    }

    // ---- private helpers ----

    /// Map a non-2xx response to a [`StoreError`] using its `{error, code}` body.
    async fn ensure_success(response: reqwest::Response) -> Result<reqwest::Response, StoreError> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let text = response
            .text()
            .await
            .unwrap_or_else(|_| "<unreadable body>".to_string());
        let (code, message) = match serde_json::from_str::<ErrorBody>(&text) {
            Ok(body) => (body.code, body.error),
            Err(_) => ("UNKNOWN".to_string(), text),
        };

        Err(match (status, code.as_str()) {
            (StatusCode::CONFLICT, "DEPENDENT_RECORDS") => StoreError::DependentRecords(message),
            (StatusCode::UNAUTHORIZED, _) => StoreError::Unauthorized(message),
            _ => StoreError::Api {
                status: status.as_u16(),
                code,
                message,
            },
        })
    }

    async fn parse_data<T: DeserializeOwned>(response: reqwest::Response) -> Result<T, StoreError> {
        let response = Self::ensure_success(response).await?;
        let envelope: DataEnvelope<T> = response.json().await?;
        Ok(envelope.data)
    }

    async fn check_status(response: reqwest::Response) -> Result<(), StoreError> {
        Self::ensure_success(response).await?;
        Ok(())
    }

    /// The actor behind the current access token.
    pub async fn current_user(&self) -> Result<User, StoreError> {
        let response = self.send(Method::GET, "/auth/me", |b| b).await?;
        Self::parse_data(response).await
    }
}

#[async_trait]
impl PlanStore for HttpStore {
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        let builder = self
            .request(Method::POST, "/auth/login", None)
            .json(&Credentials { email, password });
        self.start_session(builder).await
    }

    async fn sign_up(&self, email: &str, password: &str) -> Result<Session, StoreError> {
        let builder = self
            .request(Method::POST, "/auth/register", None)
            .json(&Credentials { email, password });
        self.start_session(builder).await
    }

    async fn restore_session(&self, refresh_token: &str) -> Result<Session, StoreError> {
        let builder = self
            .request(Method::POST, "/auth/refresh", None)
            .json(&serde_json::json!({ "refresh_token": refresh_token }));
        self.start_session(builder).await
    }

    /// A session the server no longer accepts counts as signed out, so the
    /// local tokens are dropped on `Unauthorized` as well.
    async fn sign_out(&self) -> Result<(), StoreError> {
        let response = self.send(Method::POST, "/auth/logout", |b| b).await?;
        let result = Self::check_status(response).await;
        if matches!(result, Ok(()) | Err(StoreError::Unauthorized(_))) {
            self.clear().await;
        }
        result
    }

    async fn list_regionais(&self) -> Result<Vec<Regional>, StoreError> {
        let response = self.send(Method::GET, "/regionais", |b| b).await?;
        Self::parse_data(response).await
    }

    async fn create_regional(&self, input: &RegionalPayload) -> Result<Regional, StoreError> {
        let response = self.send(Method::POST, "/regionais", |b| b.json(input)).await?;
        Self::parse_data(response).await
    }

    async fn update_regional(
        &self,
        id: DbId,
        input: &RegionalPayload,
    ) -> Result<Regional, StoreError> {
        let response = self
            .send(Method::PUT, &format!("/regionais/{id}"), |b| b.json(input))
            .await?;
        Self::parse_data(response).await
    }

    async fn delete_regional(&self, id: DbId) -> Result<(), StoreError> {
        let response = self.send(Method::DELETE, &format!("/regionais/{id}"), |b| b).await?;
        Self::check_status(response).await
    }

    async fn list_responsaveis(&self) -> Result<Vec<Responsavel>, StoreError> {
        let response = self.send(Method::GET, "/responsaveis", |b| b).await?;
        Self::parse_data(response).await
    }

    async fn create_responsavel(
        &self,
        input: &ResponsavelPayload,
    ) -> Result<Responsavel, StoreError> {
        let response = self.send(Method::POST, "/responsaveis", |b| b.json(input)).await?;
        Self::parse_data(response).await
    }

    async fn update_responsavel(
        &self,
        id: DbId,
        input: &ResponsavelPayload,
    ) -> Result<Responsavel, StoreError> {
        let response = self
            .send(Method::PUT, &format!("/responsaveis/{id}"), |b| b.json(input))
            .await?;
        Self::parse_data(response).await
    }

    async fn delete_responsavel(&self, id: DbId) -> Result<(), StoreError> {
        let response = self
            .send(Method::DELETE, &format!("/responsaveis/{id}"), |b| b)
            .await?;
        Self::check_status(response).await
    }

    async fn list_planos(&self, filter: &PlanoFilter) -> Result<Vec<PlanoAnual>, StoreError> {
        let response = self.send(Method::GET, "/plano-anual", |b| b.query(filter)).await?;
        Self::parse_data(response).await
    }

    async fn create_plano(&self, input: &PlanoPayload) -> Result<PlanoAnual, StoreError> {
        let response = self.send(Method::POST, "/plano-anual", |b| b.json(input)).await?;
        Self::parse_data(response).await
    }

    async fn update_plano(
        &self,
        id: DbId,
        input: &PlanoPayload,
    ) -> Result<PlanoAnual, StoreError> {
        let response = self
            .send(Method::PUT, &format!("/plano-anual/{id}"), |b| b.json(input))
            .await?;
        Self::parse_data(response).await
    }

    async fn delete_plano(&self, id: DbId) -> Result<(), StoreError> {
        let response = self
            .send(Method::DELETE, &format!("/plano-anual/{id}"), |b| b)
            .await?;
        Self::check_status(response).await
    }
}
