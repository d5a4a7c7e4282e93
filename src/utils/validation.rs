use once_cell::sync::Lazy;
use regex::Regex;
use super::error::{ApiError, ApiResult};
use super::logging::log_validation_error;

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email regex"));

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_RE.is_match(email.trim())
}

/// Campo obrigatório (espaços não contam)
pub fn require(field: &str, value: &str) -> ApiResult<()> {
    if value.trim().is_empty() {
        log_validation_error(field, "campo obrigatório");
        return Err(ApiError::validation_error(format!("{} é obrigatório", field)));
    }
    Ok(())
}

pub fn require_email(email: &str) -> ApiResult<()> {
    if !is_valid_email(email) {
        log_validation_error("email", "formato inválido");
        return Err(ApiError::validation_error("Digite um email válido"));
    }
    Ok(())
}

/// Confirmação de senha do formulário de cadastro
pub fn require_matching_passwords(senha: &str, confirmacao: &str) -> ApiResult<()> {
    if senha != confirmacao {
        log_validation_error("senha", "confirmação diferente");
        return Err(ApiError::validation_error("As senhas não coincidem"));
    }
    Ok(())
}
