use thiserror::Error;

/// Erros do cliente da API GraphQL
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Erro de rede: {0}")]
    Transport(#[from] reqwest::Error),

    /// Primeiro erro retornado pelo servidor GraphQL (os demais são descartados)
    #[error("{message}")]
    GraphQl {
        message: String,
        code: Option<String>,
    },

    #[error("Refresh token não encontrado")]
    MissingRefreshToken,

    #[error("User not found")]
    UserNotFound,

    #[error("Invalid password")]
    InvalidPassword,

    #[error("email already exists")]
    EmailAlreadyExists,

    #[error("network error")]
    NetworkError,

    #[error("Erro de parsing: {0}")]
    Parse(String),

    #[error("Erro de serialização: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Erro de armazenamento: {0}")]
    Storage(String),

    #[error("Erro de IO: {0}")]
    Io(#[from] std::io::Error),

    #[error("Dados inválidos: {0}")]
    Validation(String),

    #[error("Configuração inválida: {0}")]
    Config(String),
}

impl ApiError {
    pub fn graphql(message: impl Into<String>, code: Option<String>) -> Self {
        Self::GraphQl {
            message: message.into(),
            code,
        }
    }

    pub fn parse_error(msg: impl Into<String>) -> Self {
        Self::Parse(msg.into())
    }

    pub fn storage_error(msg: impl Into<String>) -> Self {
        Self::Storage(msg.into())
    }

    pub fn validation_error(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn config_error(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Código estruturado (`extensions.code`) do erro GraphQL, se houver
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::GraphQl { code, .. } => code.as_deref(),
            _ => None,
        }
    }

    /// Falha de conexão/timeout antes de obter uma resposta do servidor
    pub fn is_connection_failure(&self) -> bool {
        match self {
            Self::Transport(e) => e.is_connect() || e.is_timeout() || e.is_request(),
            Self::NetworkError => true,
            _ => false,
        }
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
