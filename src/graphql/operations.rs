//! Documentos GraphQL enviados literalmente ao backend

pub const LOGIN_MUTATION: &str = r#"
mutation Login($input: LoginInput!) {
    login(input: $input) {
        access_token
        refresh_token
        user {
            id
            email
            nomeCompleto
            tipoUsuario
            status
        }
        email
        sub
        role
        nomeCompleto
    }
}
"#;

pub const REGISTRAR_MUTATION: &str = r#"
mutation Registrar($input: RegistroInput!) {
    registrar(input: $input) {
        access_token
        refresh_token
        user {
            id
            email
            nomeCompleto
            tipoUsuario
            status
        }
        email
        sub
        role
        nomeCompleto
    }
}
"#;

pub const LOGOUT_MUTATION: &str = r#"
mutation Logout {
    logout
}
"#;

pub const RENOVAR_TOKEN_MUTATION: &str = r#"
mutation RenovarToken($input: RefreshTokenInput!) {
    renovarToken(input: $input) {
        access_token
        refresh_token
        user {
            id
            email
            nomeCompleto
            tipoUsuario
            status
        }
    }
}
"#;

pub const MEU_PERFIL_QUERY: &str = r#"
query MeuPerfilCompleto {
    meuPerfilCompleto {
        id
        email
        nomeCompleto
        tipoUsuario
        status
        createdAt
        updatedAt
    }
}
"#;

pub const TOKEN_VALIDO_QUERY: &str = r#"
query TokenValido {
    tokenValido
}
"#;

/// Nome da operação (`mutation Login(...)` → `Login`), usado nos logs
pub fn operation_name(document: &str) -> &str {
    document
        .split_whitespace()
        .skip_while(|word| *word != "query" && *word != "mutation")
        .nth(1)
        .map(|name| name.split(|c: char| c == '(' || c == '{').next().unwrap_or(name))
        .filter(|name| !name.is_empty())
        .unwrap_or("anonymous")
}
