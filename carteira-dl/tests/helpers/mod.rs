//! Shared test helpers: in-memory cache pools and a local stub of the
//! Certfy verification API.

#![allow(dead_code)]

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use carteira_dl::services::{CertfyClient, CertfyConfig};

/// In-memory cache database with the carteira-dl schema applied.
///
/// A single connection keeps every query on the same in-memory database.
pub async fn memory_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect(":memory:")
        .await
        .unwrap();
    carteira_dl::db::init_schema(&pool).await.unwrap();
    pool
}

/// Certfy client pointed at a stub server
pub fn certfy_client(base_url: &str) -> CertfyClient {
    CertfyClient::new(CertfyConfig {
        base_url: base_url.to_string(),
        company_id: "test-company".to_string(),
        secret_key: "test-secret".to_string(),
    })
    .unwrap()
}

/// Scripted behavior of the stub token endpoint
#[derive(Clone, Copy)]
pub enum AuthBehavior {
    Ok,
    Reject,
    MissingToken,
}

/// Scripted behavior of the stub schedule endpoint
#[derive(Clone)]
pub enum FetchBehavior {
    Ok(Value),
    NotFound,
    ServerError,
}

#[derive(Clone)]
pub struct CertfyStub {
    auth_calls: Arc<AtomicUsize>,
    fetch_calls: Arc<AtomicUsize>,
    auth: AuthBehavior,
    fetch: FetchBehavior,
}

impl CertfyStub {
    pub fn auth_calls(&self) -> usize {
        self.auth_calls.load(Ordering::SeqCst)
    }

    pub fn fetch_calls(&self) -> usize {
        self.fetch_calls.load(Ordering::SeqCst)
    }
}

/// Spawn a local HTTP stub of the Certfy API, returning its base URL and
/// the call counters.
pub async fn spawn_certfy_stub(auth: AuthBehavior, fetch: FetchBehavior) -> (String, CertfyStub) {
    let stub = CertfyStub {
        auth_calls: Arc::new(AtomicUsize::new(0)),
        fetch_calls: Arc::new(AtomicUsize::new(0)),
        auth,
        fetch,
    };

    let app = Router::new()
        .route("/Authentication/Token", post(stub_token))
        .route("/Admin/Schedule/:id", get(stub_schedule))
        .with_state(stub.clone());

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    (format!("http://{}", addr), stub)
}

async fn stub_token(State(stub): State<CertfyStub>) -> Response {
    stub.auth_calls.fetch_add(1, Ordering::SeqCst);
    match stub.auth {
        AuthBehavior::Ok => Json(json!({"accessToken": "stub-token"})).into_response(),
        AuthBehavior::Reject => (StatusCode::UNAUTHORIZED, "bad credentials").into_response(),
        AuthBehavior::MissingToken => Json(json!({"unexpected": true})).into_response(),
    }
}

async fn stub_schedule(State(stub): State<CertfyStub>, Path(_id): Path<String>) -> Response {
    stub.fetch_calls.fetch_add(1, Ordering::SeqCst);
    match &stub.fetch {
        FetchBehavior::Ok(payload) => Json(payload.clone()).into_response(),
        FetchBehavior::NotFound => (StatusCode::NOT_FOUND, "schedule not found").into_response(),
        FetchBehavior::ServerError => {
            (StatusCode::INTERNAL_SERVER_ERROR, "upstream exploded").into_response()
        }
    }
}

/// A realistic schedule payload with all four capture sections
pub fn sample_schedule(document_id: &str) -> Value {
    json!({
        "scheduleId": document_id,
        "employee": "Registered Name",
        "dateCompleted": "2024-03-05T10:00:00Z",
        "capturesReport": [
            {
                "name": "Documento de Identificação",
                "captureItemReport": [
                    {
                        "ocrDocumentReport": {
                            "documentName": "OCR NAME",
                            "filiacao1": "Mother Name",
                            "filiacao2": "Father Name",
                            "cpf": "98765432109",
                            "data_de_nascimento": "1990-01-15",
                            "rg": "12.345.678-9",
                            "orgao_emissor_do_RG": "DETRAN",
                            "naturalidade_Cidade": "Campinas"
                        }
                    }
                ]
            },
            {
                "name": "Dados pessoais",
                "captureItemReport": [
                    {
                        "captureFormItens": [
                            {"key": "Nome", "value": "Form Name"},
                            {"key": "CPF", "value": "12345678901"},
                            {"key": "Data de nascimento", "value": "1991-02-20"}
                        ]
                    }
                ]
            },
            {
                "name": "Prova de vida",
                "captureItemReport": [
                    {"url": "https://assets.example/face.jpg"}
                ]
            },
            {
                "name": "Assinatura",
                "captureItemReport": [
                    {"type": "Svg", "url": "https://assets.example/sig.svg"},
                    {"type": "Png", "url": "https://assets.example/sig.png"}
                ]
            }
        ]
    })
}
