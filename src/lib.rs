//! # Cliente GraphQL - Sistema VR de Oftalmologia
//!
//! Cliente para o backend NestJS + GraphQL: login, cadastro, logout,
//! renovação de token e perfil, com a sessão guardada num
//! [`SessionStore`](storage::SessionStore) injetado.
//!
//! ## Exemplo
//!
//! ```no_run
//! use std::sync::Arc;
//! use vr_oftalmo_client::{ApiClient, MemoryStore, DEFAULT_ENDPOINT};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = ApiClient::new(DEFAULT_ENDPOINT, Arc::new(MemoryStore::new()));
//!     let sessao = client.login("ana@exemplo.com", "segredo").await?;
//!     println!("Bem-vinda, {}", sessao.user.nome_completo);
//!     Ok(())
//! }
//! ```

/// Reclassificação de erros de autenticação
pub mod auth;

/// Cliente da API
pub mod client;

/// Configuração em camadas
pub mod config;

/// Envelope e documentos GraphQL
pub mod graphql;

pub mod models;

/// Persistência da sessão
pub mod storage;

pub mod utils;

// Re-exportações para conveniência
pub use client::{ApiClient, DEFAULT_ENDPOINT};
pub use config::Settings;
pub use models::{AuthPayload, Profile, RegistroData, RenewPayload, TokenStatus, UserSnapshot, UserType};
pub use storage::{FileStore, MemoryStore, SessionStore};
pub use utils::error::{ApiError, ApiResult};
