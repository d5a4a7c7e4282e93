use tracing::{debug, error, info, warn};

pub fn log_request_sent(operation: &str, endpoint: &str, authenticated: bool) {
    debug!("GraphQL request: {} -> {} (auth: {})", operation, endpoint, authenticated);
}

pub fn log_request_error(operation: &str, error: &str) {
    error!("GraphQL Request Error: {} - {}", operation, error);
}

pub fn log_session_saved(user_id: &str) {
    info!("🔐 Sessão salva para o usuário {}", user_id);
}

pub fn log_session_cleared() {
    info!("🗑️ Sessão local removida");
}

pub fn log_config_loaded(endpoint: &str) {
    info!("Configuration loaded successfully - endpoint: {}", endpoint);
}

pub fn log_validation_error(field: &str, message: &str) {
    warn!("Validation error: {} - {}", field, message);
}

pub fn log_info(message: &str) {
    info!("{}", message);
}

pub fn log_error(message: &str) {
    error!("{}", message);
}

pub fn log_warning(message: &str) {
    warn!("{}", message);
}
