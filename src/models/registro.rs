use serde::{Deserialize, Serialize};
use super::user::UserType;
use crate::utils::error::ApiResult;
use crate::utils::validation;

/// Dados de cadastro como chegam do formulário
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RegistroData {
    pub nome_completo: String,
    pub email: String,
    pub senha: String,
    /// Tag livre: `comum`, `estudante` ou `medico`
    pub tipo_usuario: String,
    pub telefone: Option<String>,
    pub crm: Option<String>,
    pub uf_crm: Option<String>,
    pub matricula: Option<String>,
    pub instituicao_ensino: Option<String>,
}

/// Input `RegistroInput!` enviado na mutation `registrar`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegistroInput {
    pub nome_completo: String,
    pub email: String,
    pub senha: String,
    pub tipo_usuario: UserType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telefone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub crm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub uf_crm: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub matricula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub instituicao_ensino: Option<String>,
}

impl RegistroData {
    /// Valida campos obrigatórios e formato do email
    pub fn validate(&self) -> ApiResult<()> {
        validation::require("nomeCompleto", &self.nome_completo)?;
        validation::require("email", &self.email)?;
        validation::require("senha", &self.senha)?;
        validation::require_email(&self.email)?;
        Ok(())
    }

    /// Converte para o input do wire. Campos profissionais vazios são omitidos.
    pub fn to_input(&self) -> RegistroInput {
        RegistroInput {
            nome_completo: self.nome_completo.clone(),
            email: self.email.clone(),
            senha: self.senha.clone(),
            tipo_usuario: UserType::from_tag(&self.tipo_usuario),
            telefone: self.telefone.clone(),
            crm: non_empty(&self.crm),
            uf_crm: non_empty(&self.uf_crm),
            matricula: non_empty(&self.matricula),
            instituicao_ensino: non_empty(&self.instituicao_ensino),
        }
    }
}

fn non_empty(value: &Option<String>) -> Option<String> {
    value.as_ref().filter(|v| !v.is_empty()).cloned()
}
