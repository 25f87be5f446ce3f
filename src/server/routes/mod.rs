//! API routes.

mod kv;

use axum::{
    Router,
    routing::{get, post},
};

use crate::store::RecordStore;

use super::{operation::handle, state::AppState};

pub use kv::{GetOperation, GetRequest, GetResponse, PutOperation, PutRequest, PutResponse};

/// Build the API router.
pub fn router<S: RecordStore + 'static>(state: AppState<S>) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/get", post(handle::<GetOperation, S>))
        .route("/put", post(handle::<PutOperation, S>))
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "ok"
}
