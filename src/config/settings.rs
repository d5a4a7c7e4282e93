use serde::{Deserialize, Serialize};
use config::{Config, ConfigError, Environment, File};
use std::time::Duration;
use crate::client::api::DEFAULT_ENDPOINT;
use crate::utils::error::{ApiError, ApiResult};

pub const DEFAULT_SESSION_FILE: &str = ".vr_oftalmo_session";

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    pub api: ApiSettings,
    pub session: SessionSettings,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ApiSettings {
    pub endpoint: String,
    /// Sem valor, as requisições não têm timeout
    #[serde(default)]
    pub timeout_seconds: Option<u64>,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct SessionSettings {
    pub file: String,
}

impl Settings {
    pub fn new() -> Result<Self, ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".into());

        let builder = Config::builder()
            .set_default("api.endpoint", DEFAULT_ENDPOINT)?
            .set_default("session.file", DEFAULT_SESSION_FILE)?
            // Arquivo de configuração base
            .add_source(File::with_name("config/default").required(false))
            // Arquivo específico do ambiente
            .add_source(File::with_name(&format!("config/{}", run_mode)).required(false))
            // VR_OFTALMO_API__ENDPOINT, VR_OFTALMO_SESSION__FILE, ...
            .add_source(
                Environment::with_prefix("VR_OFTALMO")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        builder.build()?.try_deserialize()
    }

    /// Valida o endpoint e o arquivo de sessão
    pub fn validate(&self) -> ApiResult<()> {
        if self.api.endpoint.is_empty() {
            return Err(ApiError::config_error("api.endpoint é obrigatório"));
        }

        if !self.api.endpoint.starts_with("http://") && !self.api.endpoint.starts_with("https://") {
            return Err(ApiError::config_error(format!(
                "api.endpoint deve ser uma URL http(s): {}",
                self.api.endpoint
            )));
        }

        if self.api.timeout_seconds == Some(0) {
            return Err(ApiError::config_error("api.timeout_seconds deve ser maior que zero"));
        }

        if self.session.file.trim().is_empty() {
            return Err(ApiError::config_error("session.file é obrigatório"));
        }

        Ok(())
    }

    pub fn timeout(&self) -> Option<Duration> {
        self.api.timeout_seconds.map(Duration::from_secs)
    }
}
