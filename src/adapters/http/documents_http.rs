//! Document HTTP Server.
//!
//! Exposes the document service over HTTP:
//! - `POST /documents` create, `201` / `400` on conflict / `500`
//! - `PUT /documents` replace, `200` / `400` on conflict / `500`
//! - `GET /documents/{id}` read as JSON or XML, `200` / `404` / `500`

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, HeaderMap, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::{get, post},
    Router,
};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{debug, error, info};

use super::xml;
use crate::domain::errors::{DocumentError, Operation};
use crate::domain::models::{Document, ServerConfig};
use crate::services::DocumentService;

/// Status body returned for every non-document response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatusResponse {
    pub status_code: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl StatusResponse {
    fn new(status: StatusCode) -> Self {
        Self {
            status_code: status.as_u16(),
            message: None,
        }
    }

    fn with_message(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status_code: status.as_u16(),
            message: Some(message.into()),
        }
    }

    fn into_response_with(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

/// Document HTTP Server.
pub struct DocumentHttpServer {
    config: ServerConfig,
    service: Arc<DocumentService>,
}

impl DocumentHttpServer {
    pub fn new(service: Arc<DocumentService>, config: ServerConfig) -> Self {
        Self { config, service }
    }

    /// Build the router.
    pub fn build_router(&self) -> Router {
        router(self.service.clone(), self.config.enable_cors)
    }

    fn addr(&self) -> Result<SocketAddr> {
        format!("{}:{}", self.config.host, self.config.port)
            .parse()
            .with_context(|| {
                format!(
                    "Invalid listen address {}:{}",
                    self.config.host, self.config.port
                )
            })
    }

    /// Start the server with a shutdown signal.
    pub async fn serve_with_shutdown<F>(self, shutdown: F) -> Result<()>
    where
        F: std::future::Future<Output = ()> + Send + 'static,
    {
        let addr = self.addr()?;
        let router = self.build_router();

        let listener = TcpListener::bind(addr)
            .await
            .with_context(|| format!("Failed to bind {addr}"))?;
        info!("Document HTTP server listening on {}", addr);

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown)
            .await
            .context("HTTP server failed")?;

        info!("Document HTTP server stopped");
        Ok(())
    }
}

/// Build the document router around a shared service.
pub fn router(service: Arc<DocumentService>, enable_cors: bool) -> Router {
    let app = Router::new()
        .route("/documents", post(persist_document).put(update_document))
        .route("/documents/{id}", get(get_document))
        .route("/health", get(health_check))
        .with_state(service);

    if enable_cors {
        app.layer(CorsLayer::new().allow_origin(Any).allow_methods(Any).allow_headers(Any))
            .layer(TraceLayer::new_for_http())
    } else {
        app.layer(TraceLayer::new_for_http())
    }
}

// Handler functions

async fn health_check() -> &'static str {
    "OK"
}

async fn persist_document(
    State(service): State<Arc<DocumentService>>,
    payload: Result<Json<Document>, JsonRejection>,
) -> Response {
    let Json(document) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(&rejection),
    };
    match service.persist(document).await {
        Ok(()) => StatusCode::CREATED.into_response(),
        Err(e) => error_response(&e),
    }
}

async fn update_document(
    State(service): State<Arc<DocumentService>>,
    payload: Result<Json<Document>, JsonRejection>,
) -> Response {
    let Json(document) = match payload {
        Ok(payload) => payload,
        Err(rejection) => return rejection_response(&rejection),
    };
    match service.update(document).await {
        Ok(()) => StatusCode::OK.into_response(),
        Err(e) => error_response(&e),
    }
}

async fn get_document(
    State(service): State<Arc<DocumentService>>,
    Path(id): Path<String>,
    headers: HeaderMap,
) -> Response {
    match service.get_document(&id).await {
        Ok(Some(document)) if wants_xml(&headers) => (
            [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
            xml::document_to_xml(&document),
        )
            .into_response(),
        Ok(Some(document)) => Json(document).into_response(),
        Ok(None) => {
            let msg = format!("Document was not found. Document with id ({id}) does not exist.");
            debug!("{}", msg);
            StatusResponse::with_message(StatusCode::NOT_FOUND, msg)
                .into_response_with(StatusCode::NOT_FOUND)
        }
        Err(e) => error_response(&e),
    }
}

/// Any unreadable request body is a plain `400` with the parser's reason.
fn rejection_response(rejection: &JsonRejection) -> Response {
    debug!(status = %rejection.status(), "rejected request body: {}", rejection.body_text());
    StatusResponse::with_message(StatusCode::BAD_REQUEST, rejection.body_text())
        .into_response_with(StatusCode::BAD_REQUEST)
}

/// Map a service error to its HTTP response. Internal details are logged, not returned.
fn error_response(err: &DocumentError) -> Response {
    match err {
        DocumentError::InvalidDocument(msg) => {
            StatusResponse::with_message(StatusCode::BAD_REQUEST, msg.clone())
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        DocumentError::Conflict {
            operation,
            id,
            kind,
        } => {
            let verb = match operation {
                Operation::Persist => "persisted",
                Operation::Update => "updated",
                Operation::Get => "read",
            };
            let msg = format!("Document was not {verb}. Document with id ({id}) {kind}.");
            debug!("{}", msg);
            StatusResponse::with_message(StatusCode::BAD_REQUEST, msg)
                .into_response_with(StatusCode::BAD_REQUEST)
        }
        DocumentError::Internal { operation, .. } => {
            error!(error = ?err, "{operation} has failed");
            StatusResponse::new(StatusCode::INTERNAL_SERVER_ERROR)
                .into_response_with(StatusCode::INTERNAL_SERVER_ERROR)
        }
    }
}

/// True when the `Accept` header prefers XML over JSON.
fn wants_xml(headers: &HeaderMap) -> bool {
    let Some(accept) = headers.get(header::ACCEPT).and_then(|v| v.to_str().ok()) else {
        return false;
    };

    let mut xml_q = 0.0_f32;
    let mut json_q = 0.0_f32;
    for range in accept.split(',') {
        let mut parts = range.split(';').map(str::trim);
        let media = parts.next().unwrap_or_default().to_ascii_lowercase();
        let q = parts
            .find_map(|p| p.strip_prefix("q="))
            .and_then(|q| q.parse::<f32>().ok())
            .unwrap_or(1.0);

        match media.as_str() {
            "application/xml" | "text/xml" => xml_q = xml_q.max(q),
            "application/json" | "*/*" | "application/*" => json_q = json_q.max(q),
            _ => {}
        }
    }
    xml_q > 0.0 && xml_q > json_q
}
