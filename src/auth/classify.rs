//! Reclassificação de erros de `login`/`registrar`
//!
//! As tabelas são dados puros: primeiro o código estruturado
//! (`extensions.code`), depois trechos da mensagem (sem diferenciar
//! maiúsculas). Em empate vale a ordem da tabela.

use aho_corasick::AhoCorasick;
use once_cell::sync::Lazy;
use crate::utils::error::ApiError;

/// Tipo normalizado de erro de autenticação
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    UserNotFound,
    InvalidPassword,
    EmailAlreadyExists,
    Network,
}

impl ErrorKind {
    pub fn into_error(self) -> ApiError {
        match self {
            ErrorKind::UserNotFound => ApiError::UserNotFound,
            ErrorKind::InvalidPassword => ApiError::InvalidPassword,
            ErrorKind::EmailAlreadyExists => ApiError::EmailAlreadyExists,
            ErrorKind::Network => ApiError::NetworkError,
        }
    }
}

/// Tabela de uma operação
pub struct ClassificationTable {
    codes: &'static [(&'static str, ErrorKind)],
    patterns: &'static [(&'static str, ErrorKind)],
    matcher: AhoCorasick,
}

impl ClassificationTable {
    fn new(
        codes: &'static [(&'static str, ErrorKind)],
        patterns: &'static [(&'static str, ErrorKind)],
    ) -> Self {
        let matcher = AhoCorasick::builder()
            .ascii_case_insensitive(true)
            .build(patterns.iter().map(|(pattern, _)| pattern.to_lowercase()))
            .expect("padrões de erro válidos");

        Self {
            codes,
            patterns,
            matcher,
        }
    }

    pub fn classify_code(&self, code: &str) -> Option<ErrorKind> {
        self.codes
            .iter()
            .find(|(known, _)| known.eq_ignore_ascii_case(code))
            .map(|(_, kind)| *kind)
    }

    pub fn classify_message(&self, message: &str) -> Option<ErrorKind> {
        let haystack = message.to_lowercase();
        self.matcher
            .find_overlapping_iter(&haystack)
            .map(|m| m.pattern().as_usize())
            .min()
            .map(|index| self.patterns[index].1)
    }

    /// Código estruturado primeiro, depois a mensagem
    pub fn classify(&self, code: Option<&str>, message: &str) -> Option<ErrorKind> {
        code.and_then(|c| self.classify_code(c))
            .or_else(|| self.classify_message(message))
    }

    /// Reclassifica o erro; sem correspondência o erro volta intacto
    pub fn reclassify(&self, error: ApiError) -> ApiError {
        let kind = match &error {
            ApiError::GraphQl { message, .. } => self.classify(error.code(), message),
            ApiError::Transport(_) if error.is_connection_failure() => Some(ErrorKind::Network),
            other => self.classify_message(&other.to_string()),
        };

        match kind {
            Some(kind) => kind.into_error(),
            None => error,
        }
    }
}

const LOGIN_CODES: &[(&str, ErrorKind)] = &[
    ("USER_NOT_FOUND", ErrorKind::UserNotFound),
    ("INVALID_PASSWORD", ErrorKind::InvalidPassword),
    ("UNAUTHENTICATED", ErrorKind::InvalidPassword),
    ("UNAUTHORIZED", ErrorKind::InvalidPassword),
];

const LOGIN_PATTERNS: &[(&str, ErrorKind)] = &[
    ("User not found", ErrorKind::UserNotFound),
    ("Email not found", ErrorKind::UserNotFound),
    ("usuário não encontrado", ErrorKind::UserNotFound),
    ("Invalid password", ErrorKind::InvalidPassword),
    ("senha incorreta", ErrorKind::InvalidPassword),
    ("Unauthorized", ErrorKind::InvalidPassword),
    ("Failed to fetch", ErrorKind::Network),
    ("NetworkError", ErrorKind::Network),
];

const REGISTRO_CODES: &[(&str, ErrorKind)] = &[
    ("EMAIL_ALREADY_EXISTS", ErrorKind::EmailAlreadyExists),
    ("CONFLICT", ErrorKind::EmailAlreadyExists),
];

const REGISTRO_PATTERNS: &[(&str, ErrorKind)] = &[
    ("already exists", ErrorKind::EmailAlreadyExists),
    ("já existe", ErrorKind::EmailAlreadyExists),
    ("duplicate", ErrorKind::EmailAlreadyExists),
    ("UNIQUE constraint", ErrorKind::EmailAlreadyExists),
    ("Failed to fetch", ErrorKind::Network),
    ("NetworkError", ErrorKind::Network),
];

pub static LOGIN_ERRORS: Lazy<ClassificationTable> =
    Lazy::new(|| ClassificationTable::new(LOGIN_CODES, LOGIN_PATTERNS));

pub static REGISTRO_ERRORS: Lazy<ClassificationTable> =
    Lazy::new(|| ClassificationTable::new(REGISTRO_CODES, REGISTRO_PATTERNS));
