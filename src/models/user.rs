use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Categoria do usuário no backend (enum `TipoUsuario` do schema GraphQL)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserType {
    UsuarioComum,
    Estudante,
    Medico,
}

impl UserType {
    /// Mapeia a tag usada nos formulários (`comum`, `estudante`, `medico`).
    /// Tags desconhecidas caem em `UsuarioComum`.
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "comum" => UserType::UsuarioComum,
            "estudante" => UserType::Estudante,
            "medico" => UserType::Medico,
            _ => UserType::UsuarioComum,
        }
    }

    /// Valor do enum no wire
    pub fn as_wire(&self) -> &'static str {
        match self {
            UserType::UsuarioComum => "USUARIO_COMUM",
            UserType::Estudante => "ESTUDANTE",
            UserType::Medico => "MEDICO",
        }
    }
}

impl Default for UserType {
    fn default() -> Self {
        UserType::UsuarioComum
    }
}

impl fmt::Display for UserType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_wire())
    }
}

/// `null` no JSON vira o valor padrão, como um campo ausente
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Snapshot do usuário salvo junto com a sessão (`user_data`)
///
/// `tipo_usuario` fica como texto: o valor persistido é comparado literalmente
/// em `has_role`, e um valor novo do backend não pode quebrar a leitura.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserSnapshot {
    pub id: String,
    pub email: String,
    #[serde(rename = "nomeCompleto", default, deserialize_with = "null_as_default")]
    pub nome_completo: String,
    #[serde(rename = "tipoUsuario", default, deserialize_with = "null_as_default")]
    pub tipo_usuario: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
}

/// Perfil completo retornado por `meuPerfilCompleto`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    #[serde(rename = "nomeCompleto", default, deserialize_with = "null_as_default")]
    pub nome_completo: String,
    #[serde(rename = "tipoUsuario", default, deserialize_with = "null_as_default")]
    pub tipo_usuario: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub status: String,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<DateTime<Utc>>,
}
