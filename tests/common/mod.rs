//! Utilitários dos testes de integração: endpoint GraphQL simulado e
//! respostas prontas do backend.

#![allow(dead_code)]

use serde_json::{json, Value};
use std::sync::Arc;
use vr_oftalmo_client::{ApiClient, MemoryStore};
use wiremock::matchers::{body_string_contains, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

pub const GRAPHQL_PATH: &str = "/graphql";

pub fn endpoint(server: &MockServer) -> String {
    format!("{}{}", server.uri(), GRAPHQL_PATH)
}

/// Cliente e o store em memória onde ele grava.
pub fn client_for(server: &MockServer) -> (ApiClient, Arc<MemoryStore>) {
    let store = Arc::new(MemoryStore::new());
    let client = ApiClient::new(endpoint(server), store.clone());
    (client, store)
}

/// Endpoint sem ninguém escutando: reserva uma porta efêmera e a libera.
/// (Um `MockServer` descartado volta ao pool do wiremock e continua escutando.)
pub async fn unreachable_endpoint() -> String {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").expect("porta efêmera");
    let port = listener.local_addr().expect("local addr").port();
    drop(listener);
    format!("http://127.0.0.1:{}{}", port, GRAPHQL_PATH)
}

pub fn user_json(tipo: &str) -> Value {
    json!({
        "id": "u-1",
        "email": "ana@exemplo.com",
        "nomeCompleto": "Ana Paula",
        "tipoUsuario": tipo,
        "status": "ATIVO"
    })
}

pub fn auth_data(field: &str, access: &str, refresh: &str, tipo: &str) -> Value {
    let payload = json!({
        "access_token": access,
        "refresh_token": refresh,
        "user": user_json(tipo),
        "email": "ana@exemplo.com",
        "sub": "u-1",
        "role": tipo,
        "nomeCompleto": "Ana Paula"
    });

    let mut data = serde_json::Map::new();
    data.insert(field.to_string(), payload);
    json!({ "data": data })
}

pub fn graphql_error(message: &str) -> Value {
    json!({ "errors": [{ "message": message }], "data": null })
}

/// Responde a qualquer requisição cujo documento contenha `operation`.
pub async fn mount_operation(server: &MockServer, operation: &str, body: Value) {
    Mock::given(method("POST"))
        .and(path(GRAPHQL_PATH))
        .and(body_string_contains(operation))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn received_bodies(server: &MockServer) -> Vec<Value> {
    server
        .received_requests()
        .await
        .unwrap_or_default()
        .iter()
        .map(|request| serde_json::from_slice(&request.body).expect("corpo da requisição em JSON"))
        .collect()
}
