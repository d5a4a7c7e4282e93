use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Corpo do POST: documento da operação + variáveis
#[derive(Debug, Serialize)]
pub struct GraphQLRequest<'a> {
    pub query: &'a str,
    pub variables: Value,
}

/// Erro individual da lista `errors`
#[derive(Debug, Clone, Deserialize)]
pub struct GraphQLError {
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub extensions: Option<Value>,
}

impl GraphQLError {
    /// `extensions.code` (Apollo/NestJS), quando o backend envia
    pub fn code(&self) -> Option<String> {
        self.extensions
            .as_ref()
            .and_then(|ext| ext.get("code"))
            .and_then(|code| code.as_str())
            .map(|code| code.to_string())
    }
}

/// Resposta do endpoint: `data` no sucesso, `errors` na falha
#[derive(Debug, Deserialize)]
pub struct GraphQLResponse {
    #[serde(default)]
    pub data: Option<Value>,
    #[serde(default)]
    pub errors: Option<Vec<GraphQLError>>,
}

impl GraphQLResponse {
    /// Primeiro erro da lista, se houver algum
    pub fn first_error(&self) -> Option<&GraphQLError> {
        self.errors.as_ref().and_then(|errors| errors.first())
    }
}
