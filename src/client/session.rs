use serde_json::Value;
use super::api::ApiClient;
use crate::models::user::UserSnapshot;
use crate::storage::{SessionStore, USER_DATA_KEY};
use crate::utils::logging::log_warning;

impl ApiClient {
    /// Slot `user_data`; vazio conta como ausente
    fn raw_user_data(&self) -> Option<String> {
        match self.store().get(USER_DATA_KEY) {
            Ok(data) => data.filter(|d| !d.is_empty()),
            Err(e) => {
                log_warning(&format!("Falha ao ler user_data: {}", e));
                None
            }
        }
    }

    /// Token em memória não vazio E snapshot do usuário salvo
    pub fn is_authenticated(&self) -> bool {
        self.token().is_some() && self.raw_user_data().is_some()
    }

    /// Snapshot salvo; JSON ilegível conta como ausente
    pub fn get_user_data(&self) -> Option<UserSnapshot> {
        let raw = self.raw_user_data()?;
        match serde_json::from_str(&raw) {
            Ok(user) => Some(user),
            Err(e) => {
                log_warning(&format!("user_data ilegível: {}", e));
                None
            }
        }
    }

    /// `tipoUsuario` lido direto do JSON salvo, tolerando outros formatos
    pub fn get_user_type(&self) -> Option<String> {
        let raw = self.raw_user_data()?;
        let value: Value = serde_json::from_str(&raw).ok()?;
        value
            .get("tipoUsuario")
            .and_then(Value::as_str)
            .map(str::to_string)
    }

    /// Comparação exata (diferencia maiúsculas)
    pub fn has_role(&self, role: &str) -> bool {
        self.get_user_type().as_deref() == Some(role)
    }
}
