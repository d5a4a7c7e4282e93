use serde::de::DeserializeOwned;
use serde_json::{json, Value};
use super::api::ApiClient;
use crate::auth::classify::{LOGIN_ERRORS, REGISTRO_ERRORS};
use crate::graphql::operations::{
    LOGIN_MUTATION, LOGOUT_MUTATION, MEU_PERFIL_QUERY, REGISTRAR_MUTATION,
    RENOVAR_TOKEN_MUTATION, TOKEN_VALIDO_QUERY,
};
use crate::models::registro::RegistroData;
use crate::models::session::{AuthPayload, RenewPayload, SessionRecord, TokenStatus};
use crate::models::user::Profile;
use crate::storage::{SessionStore, REFRESH_TOKEN_KEY};
use crate::utils::error::{ApiError, ApiResult};
use crate::utils::logging::{log_error, log_info, log_session_cleared, log_session_saved};

/// Extrai e desserializa `data.<field>`
fn extract<T: DeserializeOwned>(mut data: Value, field: &str) -> ApiResult<T> {
    let value = data
        .get_mut(field)
        .map(Value::take)
        .filter(|v| !v.is_null())
        .ok_or_else(|| ApiError::parse_error(format!("Resposta sem o campo {}", field)))?;

    serde_json::from_value(value)
        .map_err(|e| ApiError::parse_error(format!("Campo {} inválido: {}", field, e)))
}

/// `data.<field>.user` exatamente como o servidor enviou
fn raw_user(data: &Value, field: &str) -> Value {
    data.get(field)
        .and_then(|payload| payload.get("user"))
        .cloned()
        .unwrap_or(Value::Null)
}

impl ApiClient {
    /// Grava os três slots de uma vez e atualiza o token em memória
    fn persist_session(&self, record: &SessionRecord) -> ApiResult<()> {
        self.store().save_session(record)?;
        self.set_memory_token(Some(record.access_token.clone()));
        log_session_saved(record.user_id().unwrap_or("-"));
        Ok(())
    }

    /// Login com email e senha
    ///
    /// Em caso de sucesso a sessão é persistida. Erros viram `UserNotFound`,
    /// `InvalidPassword` ou `NetworkError` quando reconhecidos; os demais
    /// voltam como vieram.
    pub async fn login(&self, email: &str, senha: &str) -> ApiResult<AuthPayload> {
        let variables = json!({
            "input": { "email": email, "senha": senha }
        });

        let result = async {
            let data = self.request(LOGIN_MUTATION, variables).await?;
            let user = raw_user(&data, "login");
            let payload = extract::<AuthPayload>(data, "login")?;
            Ok::<_, ApiError>((payload, user))
        }
        .await;

        let (payload, user) = result.map_err(|e| LOGIN_ERRORS.reclassify(e))?;

        if !payload.access_token.is_empty() {
            let record = SessionRecord::new(&payload.access_token, &payload.refresh_token, user);
            self.persist_session(&record)?;
        }

        Ok(payload)
    }

    /// Cadastro de novo usuário
    pub async fn registrar(&self, user_data: &RegistroData) -> ApiResult<AuthPayload> {
        user_data.validate()?;

        let variables = json!({ "input": user_data.to_input() });

        let result = async {
            let data = self.request(REGISTRAR_MUTATION, variables).await?;
            let user = raw_user(&data, "registrar");
            let payload = extract::<AuthPayload>(data, "registrar")?;
            Ok::<_, ApiError>((payload, user))
        }
        .await;

        let (payload, user) = result.map_err(|e| REGISTRO_ERRORS.reclassify(e))?;

        if !payload.access_token.is_empty() {
            let record = SessionRecord::new(&payload.access_token, &payload.refresh_token, user);
            self.persist_session(&record)?;
        }

        Ok(payload)
    }

    /// Encerra a sessão. Falhas do servidor são só registradas no log;
    /// a sessão local é sempre apagada.
    pub async fn logout(&self) {
        if let Err(e) = self.request(LOGOUT_MUTATION, json!({})).await {
            log_error(&format!("Erro no logout: {}", e));
        }

        self.set_memory_token(None);
        if let Err(e) = self.store().clear_session() {
            log_error(&format!("Falha ao limpar sessão local: {}", e));
        }
        log_session_cleared();
    }

    /// Troca o refresh token salvo por uma sessão nova
    ///
    /// Sem refresh token falha com `MissingRefreshToken` antes de qualquer
    /// requisição. Erros do servidor não são reclassificados.
    pub async fn renovar_token(&self) -> ApiResult<RenewPayload> {
        let refresh_token = self
            .store()
            .get(REFRESH_TOKEN_KEY)?
            .filter(|t| !t.is_empty())
            .ok_or(ApiError::MissingRefreshToken)?;

        let variables = json!({
            "input": { "refreshToken": refresh_token }
        });

        let data = self.request(RENOVAR_TOKEN_MUTATION, variables).await?;
        let user = raw_user(&data, "renovarToken");
        let payload: RenewPayload = extract(data, "renovarToken")?;

        let record = SessionRecord::new(&payload.access_token, &payload.refresh_token, user);
        self.persist_session(&record)?;
        log_info("🔄 Token renovado");

        Ok(payload)
    }

    /// Perfil completo do usuário logado
    pub async fn obter_meu_perfil(&self) -> ApiResult<Profile> {
        let data = self.request(MEU_PERFIL_QUERY, json!({})).await?;
        extract(data, "meuPerfilCompleto")
    }

    /// Consulta `tokenValido` separando "inválido" de "requisição falhou"
    pub async fn verificar_token_detalhado(&self) -> TokenStatus {
        match self.request(TOKEN_VALIDO_QUERY, json!({})).await {
            Ok(data) => match data.get("tokenValido").and_then(Value::as_bool) {
                Some(true) => TokenStatus::Valid,
                Some(false) => TokenStatus::Invalid,
                None => TokenStatus::RequestFailed("Resposta sem o campo tokenValido".to_string()),
            },
            Err(e) => TokenStatus::RequestFailed(e.to_string()),
        }
    }

    /// Versão booleana: qualquer falha conta como token inválido
    pub async fn verificar_token(&self) -> bool {
        self.verificar_token_detalhado().await.is_valid()
    }
}
