use reqwest::Client;
use serde_json::Value;
use std::sync::{Arc, RwLock};
use std::time::Duration;
use crate::config::Settings;
use crate::graphql::operations::operation_name;
use crate::graphql::{GraphQLRequest, GraphQLResponse};
use crate::storage::{SessionStore, ACCESS_TOKEN_KEY};
use crate::utils::error::{ApiError, ApiResult};
use crate::utils::logging::{log_request_error, log_request_sent, log_warning};

/// Endpoint padrão do backend NestJS + GraphQL
pub const DEFAULT_ENDPOINT: &str = "https://rv-backend-api.onrender.com/graphql";

/// Cliente GraphQL autenticado do Sistema VR de Oftalmologia
///
/// Guarda o endpoint, o bearer token atual (espelhado no store) e o store
/// injetado onde a sessão é persistida. Cada operação faz no máximo uma
/// requisição, sem retry.
pub struct ApiClient {
    http: Client,
    endpoint: String,
    token: RwLock<Option<String>>,
    store: Arc<dyn SessionStore>,
}

impl std::fmt::Debug for ApiClient {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiClient")
            .field("endpoint", &self.endpoint)
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

impl ApiClient {
    /// Cria o cliente sem timeout de requisição
    pub fn new(endpoint: impl Into<String>, store: Arc<dyn SessionStore>) -> Self {
        Self::with_timeout(endpoint, store, None)
    }

    pub fn with_timeout(
        endpoint: impl Into<String>,
        store: Arc<dyn SessionStore>,
        timeout: Option<Duration>,
    ) -> Self {
        let mut builder = Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder.build().unwrap_or_default();

        // token salvo por uma sessão anterior
        let token = match store.get(ACCESS_TOKEN_KEY) {
            Ok(token) => token.filter(|t| !t.is_empty()),
            Err(e) => {
                log_warning(&format!("Não foi possível ler o token salvo: {}", e));
                None
            }
        };

        Self {
            http,
            endpoint: endpoint.into(),
            token: RwLock::new(token),
            store,
        }
    }

    pub fn from_settings(settings: &Settings, store: Arc<dyn SessionStore>) -> Self {
        Self::with_timeout(settings.api.endpoint.clone(), store, settings.timeout())
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Token em memória (não consulta o store)
    pub fn token(&self) -> Option<String> {
        self.token.read().ok().and_then(|token| token.clone())
    }

    pub(crate) fn set_memory_token(&self, token: Option<String>) {
        match self.token.write() {
            Ok(mut current) => *current = token.filter(|t| !t.is_empty()),
            Err(poisoned) => *poisoned.into_inner() = token.filter(|t| !t.is_empty()),
        }
    }

    /// Define ou remove o token de autenticação
    ///
    /// Token não vazio é persistido; vazio ou `None` remove o valor salvo.
    pub fn set_token(&self, token: Option<&str>) -> ApiResult<()> {
        let token = token.filter(|t| !t.is_empty());
        self.set_memory_token(token.map(str::to_string));

        match token {
            Some(t) => self.store.set(ACCESS_TOKEN_KEY, t),
            None => self.store.remove(ACCESS_TOKEN_KEY),
        }
    }

    /// Executa uma query/mutation e devolve o campo `data`
    ///
    /// Só o primeiro item de `errors` é reportado. O corpo é lido como JSON
    /// qualquer que seja o status HTTP.
    pub async fn request(&self, operation: &str, variables: Value) -> ApiResult<Value> {
        let name = operation_name(operation);
        let token = self.token();
        log_request_sent(name, &self.endpoint, token.is_some());

        let body = GraphQLRequest {
            query: operation,
            variables,
        };

        let mut request = self.http.post(&self.endpoint).json(&body);
        if let Some(token) = token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await.map_err(|e| {
            log_request_error(name, &e.to_string());
            ApiError::Transport(e)
        })?;

        let status = response.status();
        let response_text = response.text().await.map_err(|e| {
            log_request_error(name, &e.to_string());
            ApiError::Transport(e)
        })?;

        tracing::debug!("Response status: {}, body: {}", status, response_text);

        let parsed: GraphQLResponse = serde_json::from_str(&response_text).map_err(|e| {
            let error = ApiError::parse_error(format!("Resposta inválida (HTTP {}): {}", status, e));
            log_request_error(name, &error.to_string());
            error
        })?;

        if let Some(first) = parsed.first_error() {
            let error = ApiError::graphql(first.message.clone(), first.code());
            log_request_error(name, &error.to_string());
            return Err(error);
        }

        parsed.data.ok_or_else(|| {
            let error = ApiError::parse_error(format!("Resposta sem campo data (HTTP {})", status));
            log_request_error(name, &error.to_string());
            error
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_new_client_loads_persisted_token() {
        let store = Arc::new(MemoryStore::new());
        store.set(ACCESS_TOKEN_KEY, "salvo").unwrap();

        let client = ApiClient::new(DEFAULT_ENDPOINT, store);
        assert_eq!(client.token().as_deref(), Some("salvo"));
        assert_eq!(client.endpoint(), DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_set_token_persists_and_removes() {
        let store = Arc::new(MemoryStore::new());
        let client = ApiClient::new(DEFAULT_ENDPOINT, store.clone());

        client.set_token(Some("abc")).unwrap();
        assert_eq!(client.token().as_deref(), Some("abc"));
        assert_eq!(store.get(ACCESS_TOKEN_KEY).unwrap().as_deref(), Some("abc"));

        client.set_token(Some("")).unwrap();
        assert!(client.token().is_none());
        assert!(store.get(ACCESS_TOKEN_KEY).unwrap().is_none());

        client.set_token(Some("def")).unwrap();
        client.set_token(None).unwrap();
        assert!(client.token().is_none());
        assert!(store.get(ACCESS_TOKEN_KEY).unwrap().is_none());
    }

    #[test]
    fn test_debug_does_not_leak_token() {
        let client = ApiClient::new(DEFAULT_ENDPOINT, Arc::new(MemoryStore::new()));
        client.set_token(Some("segredo")).unwrap();

        let debug = format!("{:?}", client);
        assert!(debug.contains("has_token: true"));
        assert!(!debug.contains("segredo"));
    }
}
