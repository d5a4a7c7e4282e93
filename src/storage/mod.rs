//! Armazenamento persistente da sessão
//!
//! A sessão ocupa três slots (`access_token`, `refresh_token`, `user_data`).
//! Implementações aplicam um lote de mudanças de uma só vez, então
//! `save_session`/`clear_session` nunca deixam a sessão pela metade.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use crate::models::session::SessionRecord;
use crate::utils::error::ApiResult;

pub const ACCESS_TOKEN_KEY: &str = "access_token";
pub const REFRESH_TOKEN_KEY: &str = "refresh_token";
pub const USER_DATA_KEY: &str = "user_data";

/// Armazenamento chave-valor síncrono compartilhado pelo processo
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> ApiResult<Option<String>>;

    /// Aplica o lote atomicamente: `Some` grava, `None` remove
    fn apply(&self, changes: &[(&str, Option<&str>)]) -> ApiResult<()>;

    fn set(&self, key: &str, value: &str) -> ApiResult<()> {
        self.apply(&[(key, Some(value))])
    }

    fn remove(&self, key: &str) -> ApiResult<()> {
        self.apply(&[(key, None)])
    }

    /// Access token vazio remove o slot, como `ApiClient::set_token`
    fn save_session(&self, record: &SessionRecord) -> ApiResult<()> {
        let user_data = serde_json::to_string(&record.user)?;
        let access_token = Some(record.access_token.as_str()).filter(|t| !t.is_empty());
        self.apply(&[
            (ACCESS_TOKEN_KEY, access_token),
            (REFRESH_TOKEN_KEY, Some(record.refresh_token.as_str())),
            (USER_DATA_KEY, Some(user_data.as_str())),
        ])
    }

    fn clear_session(&self) -> ApiResult<()> {
        self.apply(&[
            (ACCESS_TOKEN_KEY, None),
            (REFRESH_TOKEN_KEY, None),
            (USER_DATA_KEY, None),
        ])
    }
}
