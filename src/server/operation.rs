//! The decode → invoke → encode pipeline shared by every endpoint.
//!
//! Each endpoint is a zero-sized type implementing [`Operation`], so the
//! request and response types of a route are fixed at compile time.

use axum::{
    Json,
    extract::{State, rejection::JsonRejection},
};
use serde::{Serialize, de::DeserializeOwned};

use crate::service::Service;
use crate::store::RecordStore;

use super::error::ApiError;
use super::state::AppState;

/// A single request kind served by the API.
pub trait Operation: Send + Sync + 'static {
    /// Short name used in logs and error details.
    const NAME: &'static str;

    type Request: DeserializeOwned + Send + 'static;
    type Response: Serialize + Send + 'static;

    /// Run the request against the service. Never fails: business errors are
    /// part of the response.
    fn invoke<S: RecordStore>(service: &Service<S>, request: Self::Request) -> Self::Response;
}

/// Generic handler for any [`Operation`].
///
/// Decode failures are returned as [`ApiError`]s without reaching the
/// service. The service call itself runs on the blocking pool since storage
/// writes sync to disk.
pub async fn handle<O, S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<O::Request>, JsonRejection>,
) -> Result<Json<O::Response>, ApiError>
where
    O: Operation,
    S: RecordStore + 'static,
{
    let Json(request) = payload.map_err(|rejection| {
        ApiError::decode(rejection).with_details(serde_json::json!({ "operation": O::NAME }))
    })?;

    let service = state.service();
    let response = tokio::task::spawn_blocking(move || O::invoke(&service, request))
        .await
        .map_err(|e| {
            ApiError::internal(format!("{} worker failed: {}", O::NAME, e))
                .with_details(serde_json::json!({ "operation": O::NAME }))
        })?;

    Ok(Json(response))
}
