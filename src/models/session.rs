use serde::{Deserialize, Serialize};
use serde_json::Value;
use super::user::UserSnapshot;

/// Resposta das mutations `login` e `registrar`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuthPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserSnapshot,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub sub: Option<String>,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(rename = "nomeCompleto", default)]
    pub nome_completo: Option<String>,
}

/// Resposta da mutation `renovarToken`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenewPayload {
    pub access_token: String,
    pub refresh_token: String,
    pub user: UserSnapshot,
}

/// Sessão persistida: os três slots gravados e apagados juntos
///
/// `user` guarda o objeto `user` exatamente como veio do servidor.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionRecord {
    pub access_token: String,
    pub refresh_token: String,
    pub user: Value,
}

impl SessionRecord {
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>, user: Value) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
            user,
        }
    }

    pub fn user_id(&self) -> Option<&str> {
        self.user.get("id").and_then(Value::as_str)
    }
}

/// Resultado detalhado de `tokenValido`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", content = "detail", rename_all = "snake_case")]
pub enum TokenStatus {
    Valid,
    Invalid,
    /// A requisição falhou; não se sabe se o token é válido
    RequestFailed(String),
}

impl TokenStatus {
    pub fn is_valid(&self) -> bool {
        matches!(self, TokenStatus::Valid)
    }
}
