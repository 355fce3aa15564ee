//! HTTP surface: page payloads at the root, the entity API under `/api`

pub mod api;
pub mod content;
pub mod error;
pub mod pages;

use std::sync::Arc;
use std::time::Instant;

use axum::extract::Request;
use axum::middleware::{self, Next};
use axum::response::Response;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{Value, json};
use tracing::info;

pub use error::{ApiError, ApiResult};

use crate::store::Catalog;

/// Build the full site router
pub fn router(catalog: Arc<Catalog>) -> Router {
    let api = api::routes(&catalog);

    pages::routes()
        .route("/health", get(health))
        .fallback(pages::not_found)
        .with_state(catalog)
        .nest("/api", api)
        .layer(middleware::from_fn(log_request))
}

async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

async fn log_request(request: Request, next: Next) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();
    let started = Instant::now();

    let response = next.run(request).await;

    info!(
        "{} {} -> {} ({:?})",
        method,
        uri,
        response.status().as_u16(),
        started.elapsed()
    );
    response
}
