use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::{BufRead, BufReader, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use super::SessionStore;
use crate::utils::error::{ApiError, ApiResult};

/// Store em arquivo no formato `chave=valor`, uma linha por slot
///
/// Cada lote é gravado num arquivo temporário e renomeado por cima do
/// original. Linhas vazias e comentários (`#`) são ignorados na leitura.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            write_lock: Mutex::new(()),
        }
    }

    fn read_all(&self) -> ApiResult<BTreeMap<String, String>> {
        let mut slots = BTreeMap::new();

        let file = match std::fs::File::open(&self.path) {
            Ok(file) => file,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(slots),
            Err(e) => return Err(e.into()),
        };

        for line in BufReader::new(file).lines() {
            let line = line?;
            let trimmed = line.trim_start();
            if trimmed.is_empty() || trimmed.starts_with('#') {
                continue;
            }
            if let Some((key, value)) = line.split_once('=') {
                slots.insert(key.trim().to_string(), value.to_string());
            }
        }

        Ok(slots)
    }

    fn write_all(&self, slots: &BTreeMap<String, String>) -> ApiResult<()> {
        let tmp_path = self.path.with_extension("tmp");

        {
            let mut file = OpenOptions::new()
                .write(true)
                .create(true)
                .truncate(true)
                .open(&tmp_path)?;

            for (key, value) in slots {
                writeln!(file, "{}={}", key, value)?;
            }
            file.sync_all()?;
        }

        std::fs::rename(&tmp_path, &self.path)?;
        Ok(())
    }
}

impl SessionStore for FileStore {
    fn get(&self, key: &str) -> ApiResult<Option<String>> {
        Ok(self.read_all()?.remove(key))
    }

    fn apply(&self, changes: &[(&str, Option<&str>)]) -> ApiResult<()> {
        for (key, value) in changes {
            if key.contains('=') || key.contains('\n') {
                return Err(ApiError::storage_error(format!("chave inválida: {}", key)));
            }
            if value.map_or(false, |v| v.contains('\n')) {
                return Err(ApiError::storage_error(format!(
                    "valor de {} contém quebra de linha",
                    key
                )));
            }
        }

        let _guard = self
            .write_lock
            .lock()
            .map_err(|_| ApiError::storage_error("lock do arquivo de sessão envenenado"))?;

        let mut slots = self.read_all()?;
        for (key, value) in changes {
            match value {
                Some(v) => {
                    slots.insert(key.to_string(), v.to_string());
                }
                None => {
                    slots.remove(*key);
                }
            }
        }

        self.write_all(&slots)?;
        tracing::debug!("Arquivo de sessão {} atualizado", self.path.display());
        Ok(())
    }
}
